use std::fs;
use std::path::Path;

use event_schema::{
    first_letter_up, literal_text, EnumCase, EnumType, EventSchema, EventVariant, Field, FieldKind,
    PropertyDocument, SchemaDocument, EVENT_NAME_PROPERTY, SCREEN_NAME_PROPERTY,
};
use serde_json::Value;
use tracing::debug;

use crate::error::CodegenError;

/// Reads a schema file and derives the generated class name from its base
/// name (`Screen.json` declares `Screen`).
pub fn load_schema(path: &Path) -> Result<(String, SchemaDocument), CodegenError> {
    let text = fs::read_to_string(path)?;
    let document = SchemaDocument::from_json(&text)?;
    let class_name = class_name_for(path);
    debug!(path = %path.display(), class_name = %class_name, "loaded schema");
    Ok((class_name, document))
}

pub fn class_name_for(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match base.strip_suffix(".json") {
        Some(stem) => stem.to_string(),
        None => base,
    }
}

/// Builds the typed model of one event.
///
/// Returns `MissingField` when the event name (or, for the screen event, the
/// `screenName` property) is absent and `UnsupportedType` when a property is
/// not a string, number, integer or boolean.
pub fn parse_schema(class_name: &str, document: &SchemaDocument) -> Result<EventSchema, CodegenError> {
    if document.properties.is_none() {
        return Err(CodegenError::MissingField("properties".to_string()));
    }
    let properties = document.decoded_properties()?;

    let event_name = properties
        .iter()
        .find(|(name, _)| name == EVENT_NAME_PROPERTY)
        .and_then(|(_, property)| first_literal(property))
        .ok_or_else(|| CodegenError::MissingField(format!("properties.{}.enum[0]", EVENT_NAME_PROPERTY)))?;

    let mut fields = Vec::new();
    let mut enums = Vec::new();

    for (name, property) in &properties {
        if name == EVENT_NAME_PROPERTY {
            continue;
        }

        let kind = field_kind(name, property)?;

        let cases = enum_cases(property);
        let enum_values = if cases.is_empty() {
            None
        } else {
            enums.push(EnumType {
                name:  first_letter_up(name),
                cases: cases.clone(),
            });
            Some(cases)
        };

        fields.push(Field {
            name: name.clone(),
            kind,
            enum_values,
            description: property.description.clone(),
            required: document.is_required(name) || property.is_flagged_required(),
        });
    }

    fields.sort_by(|a, b| a.name.cmp(&b.name));

    let variant = EventVariant::for_class(class_name);
    if variant == EventVariant::Screen && !fields.iter().any(|f| f.name == SCREEN_NAME_PROPERTY) {
        return Err(CodegenError::MissingField(format!("properties.{}", SCREEN_NAME_PROPERTY)));
    }

    debug!(
        class_name,
        event_name = %event_name,
        fields = fields.len(),
        enums = enums.len(),
        "parsed schema"
    );

    Ok(EventSchema {
        class_name: class_name.to_string(),
        variant,
        description: document.description.clone(),
        event_name,
        fields,
        enums,
    })
}

fn field_kind(name: &str, property: &PropertyDocument) -> Result<FieldKind, CodegenError> {
    let unsupported = |kind: String| CodegenError::UnsupportedType {
        field: name.to_string(),
        kind,
    };
    match &property.type_ {
        None => Err(CodegenError::MissingField(format!("properties.{}.type", name))),
        Some(Value::String(type_name)) => {
            FieldKind::from_json_type(type_name).ok_or_else(|| unsupported(type_name.clone()))
        }
        Some(other) => Err(unsupported(other.to_string())),
    }
}

/// The first literal as written, before any sorting.
fn first_literal(property: &PropertyDocument) -> Option<String> {
    if let Some(value) = property.enum_.as_ref().and_then(|values| values.first()) {
        return Some(literal_text(value));
    }
    property
        .one_of
        .as_ref()
        .and_then(|branches| branches.first())
        .map(|branch| literal_text(&branch.const_))
}

/// The literals a property allows, sorted by value with duplicates dropped.
/// A plain `enum` list wins over documented `oneOf` constants.
fn enum_cases(property: &PropertyDocument) -> Vec<EnumCase> {
    let mut cases: Vec<EnumCase> = match (&property.enum_, &property.one_of) {
        (Some(values), _) if !values.is_empty() => {
            values.iter().map(|value| EnumCase::new(literal_text(value))).collect()
        }
        (_, Some(branches)) => branches
            .iter()
            .map(|branch| EnumCase {
                value:       literal_text(&branch.const_),
                description: branch.description.clone(),
            })
            .collect(),
        _ => Vec::new(),
    };
    // Ordinal text order, also for non-string literals.
    cases.sort_by(|a, b| a.value.cmp(&b.value));
    cases.dedup_by(|a, b| a.value == b.value);
    cases
}
