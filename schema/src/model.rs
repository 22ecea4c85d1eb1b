use std::fmt;

use crate::{first_letter_up, SCREEN_CLASS};

/// The JSON Schema primitive types a field can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
}

impl FieldKind {
    /// Maps a JSON Schema `type` keyword to a kind. Returns `None` for
    /// `object`, `array`, `null` and anything unknown.
    pub fn from_json_type(type_name: &str) -> Option<FieldKind> {
        match type_name {
            "string"  => Some(FieldKind::String),
            "number"  => Some(FieldKind::Number),
            "integer" => Some(FieldKind::Integer),
            "boolean" => Some(FieldKind::Boolean),
            _ => None,
        }
    }

    pub fn as_json_type(&self) -> &'static str {
        match self {
            FieldKind::String  => "string",
            FieldKind::Number  => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_json_type())
    }
}

/// One allowed literal of an enum field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EnumCase {
    pub value:       String,
    pub description: Option<String>,
}

impl EnumCase {
    pub fn new(value: impl Into<String>) -> Self {
        EnumCase { value: value.into(), description: None }
    }

    pub fn with_description(value: impl Into<String>, description: impl Into<String>) -> Self {
        EnumCase { value: value.into(), description: Some(description.into()) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name:        String,
    pub kind:        FieldKind,
    /// Sorted by value, without duplicates.
    pub enum_values: Option<Vec<EnumCase>>,
    pub description: Option<String>,
    pub required:    bool,
}

impl Field {
    pub fn is_enum(&self) -> bool {
        self.enum_values.is_some()
    }

    /// Name of the nested enum type this field is declared with, if any.
    pub fn enum_type_name(&self) -> Option<String> {
        self.enum_values.as_ref().map(|_| first_letter_up(&self.name))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name:  String,
    pub cases: Vec<EnumCase>,
}

impl EnumType {
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|case| case.value.as_str())
    }
}

/// Which analytics interface the generated declaration implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventVariant {
    /// A generic interaction event named by a literal string.
    Event,
    /// A screen view, named by its `screenName` field.
    Screen,
}

impl EventVariant {
    pub fn for_class(class_name: &str) -> EventVariant {
        if class_name == SCREEN_CLASS {
            EventVariant::Screen
        } else {
            EventVariant::Event
        }
    }
}

/// Everything a renderer needs to emit one event declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSchema {
    pub class_name:  String,
    pub variant:     EventVariant,
    pub description: Option<String>,
    pub event_name:  String,
    /// Sorted by name.
    pub fields:      Vec<Field>,
    /// In the order their properties appear in the document.
    pub enums:       Vec<EnumType>,
}

impl EventSchema {
    pub fn is_screen(&self) -> bool {
        self.variant == EventVariant::Screen
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
