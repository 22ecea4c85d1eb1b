use std::path::Path;

use event_schema::SchemaDocument;
use tracing::info;

use crate::{
    error::CodegenError,
    language::Language,
    parser::{load_schema, parse_schema},
};

/// Compile schema text into source code for `language`.
/// Nothing is returned unless the whole declaration rendered.
pub fn compile_schema(class_name: &str, text: &str, language: Language) -> Result<String, CodegenError> {
    let document = SchemaDocument::from_json(text)?;
    compile_document(class_name, &document, language)
}

/// Compile a schema file; the class is named after the file.
pub fn compile_schema_file(path: &Path, language: Language) -> Result<String, CodegenError> {
    let (class_name, document) = load_schema(path)?;
    compile_document(&class_name, &document, language)
}

pub fn compile_document(
    class_name: &str,
    document: &SchemaDocument,
    language: Language,
) -> Result<String, CodegenError> {
    let schema = parse_schema(class_name, document)?;
    let code = language.generator().render(&schema);
    info!(class_name, %language, bytes = code.len(), "rendered declaration");
    Ok(code)
}
