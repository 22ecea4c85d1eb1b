//! Typed model of an analytics event schema.
//!
//! An event is described by a JSON Schema file whose `properties` list the
//! fields sent along with the event. This crate holds both shapes of that
//! description:
//!
//! - [`document`]: the serde view of the file as written on disk,
//! - [`model`]: the normalized representation the renderers consume.
//!
//! ```
//! use event_schema::*;
//!
//! let field = Field {
//!     name:        "trigger".to_owned(),
//!     kind:        FieldKind::String,
//!     enum_values: Some(vec![EnumCase::new("Created"), EnumCase::new("Timeline")]),
//!     description: None,
//!     required:    false,
//! };
//! assert_eq!(field.enum_type_name().as_deref(), Some("Trigger"));
//! assert_eq!(EventVariant::for_class("Screen"), EventVariant::Screen);
//! ```

pub mod document;
pub mod model;

pub use document::*;
pub use model::*;

/// The property holding the event's wire name.
pub const EVENT_NAME_PROPERTY: &str = "eventName";

/// The property a screen event derives its name from.
pub const SCREEN_NAME_PROPERTY: &str = "screenName";

/// Class name of the screen-tracking event.
pub const SCREEN_CLASS: &str = "Screen";

/// Upper-cases the first character and leaves the rest alone, so camel case
/// survives (`activeSpace` becomes `ActiveSpace`).
pub fn first_letter_up(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}
