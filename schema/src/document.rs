use serde::Deserialize;
use serde_json::{Map, Value};

/// A JSON Schema file describing one analytics event, as written on disk.
///
/// `properties` is kept as a JSON map so that document order survives
/// (serde_json is built with `preserve_order`); each entry is decoded into a
/// [`PropertyDocument`] on demand.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties:  Option<Map<String, Value>>,
    #[serde(default)]
    pub required:    Vec<String>,
}

impl SchemaDocument {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Decodes every property in document order.
    pub fn decoded_properties(&self) -> Result<Vec<(String, PropertyDocument)>, serde_json::Error> {
        let Some(properties) = &self.properties else {
            return Ok(Vec::new());
        };
        properties
            .iter()
            .map(|(name, value)| {
                let property = PropertyDocument::deserialize(value)?;
                Ok((name.clone(), property))
            })
            .collect()
    }
}

/// One entry of a schema's `properties` map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyDocument {
    /// Usually a type name, but unions like `["string", "null"]` are legal
    /// JSON Schema, so the raw value is kept.
    #[serde(rename = "type", default)]
    pub type_:       Option<Value>,
    #[serde(rename = "enum", default)]
    pub enum_:       Option<Vec<Value>>,
    #[serde(rename = "oneOf", default)]
    pub one_of:      Option<Vec<EnumCaseDocument>>,
    #[serde(default)]
    pub description: Option<String>,
    /// Draft-3 style per-property flag. Object schemas reuse the key for a
    /// list of names, so it stays untyped here.
    #[serde(default)]
    pub required:    Option<Value>,
}

impl PropertyDocument {
    pub fn is_flagged_required(&self) -> bool {
        matches!(self.required, Some(Value::Bool(true)))
    }
}

/// A `oneOf` branch pinning a single documented literal.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumCaseDocument {
    #[serde(rename = "const")]
    pub const_:      Value,
    #[serde(default)]
    pub description: Option<String>,
}

/// Renders an enum literal as the bare tag it stands for.
pub fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
