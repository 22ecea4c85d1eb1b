use event_schema::EventSchema;

use crate::language::Language;

/// A target-language renderer.
///
/// Field kinds are checked while parsing, so rendering a parsed
/// [`EventSchema`] cannot fail and always yields the whole declaration.
pub trait Generator {
    fn language(&self) -> Language;

    fn render(&self, schema: &EventSchema) -> String;
}
