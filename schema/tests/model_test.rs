#![cfg(test)]

use event_schema::*;

#[test]
fn test_field_kinds() {
    for name in ["string", "number", "integer", "boolean"] {
        let kind = FieldKind::from_json_type(name).expect("primitive type");
        assert_eq!(kind.as_json_type(), name);
        assert_eq!(kind.to_string(), name);
    }
    for name in ["object", "array", "null", "String", ""] {
        assert_eq!(FieldKind::from_json_type(name), None);
    }
}

#[test]
fn test_first_letter_up_keeps_camel_case() {
    assert_eq!(first_letter_up("activeSpace"), "ActiveSpace");
    assert_eq!(first_letter_up("isDM"), "IsDM");
    assert_eq!(first_letter_up("Trigger"), "Trigger");
    assert_eq!(first_letter_up("x"), "X");
    assert_eq!(first_letter_up(""), "");
}

#[test]
fn test_enum_type_name_only_for_enum_fields() {
    let mut field = Field {
        name:        "screenName".to_owned(),
        kind:        FieldKind::String,
        enum_values: None,
        description: None,
        required:    true,
    };
    assert!(!field.is_enum());
    assert_eq!(field.enum_type_name(), None);

    field.enum_values = Some(vec![EnumCase::with_description("Home", "The home screen")]);
    assert!(field.is_enum());
    assert_eq!(field.enum_type_name().as_deref(), Some("ScreenName"));
}

#[test]
fn test_document_keeps_property_order() {
    let doc = SchemaDocument::from_json(
        r#"{
            "properties": {
                "zulu": {"type": "string"},
                "eventName": {"enum": ["Order"]},
                "alpha": {"type": "string", "oneOf": [{"const": "A", "description": "First"}]},
                "mike": {"type": "boolean", "required": true}
            },
            "required": ["zulu"]
        }"#,
    )
    .expect("valid document");

    let properties = doc.decoded_properties().expect("decodable properties");
    let names: Vec<&str> = properties.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["zulu", "eventName", "alpha", "mike"]);

    assert!(doc.is_required("zulu"));
    assert!(!doc.is_required("mike"));
    assert!(properties[3].1.is_flagged_required());

    let one_of = properties[2].1.one_of.as_ref().expect("oneOf branches");
    assert_eq!(literal_text(&one_of[0].const_), "A");
    assert_eq!(one_of[0].description.as_deref(), Some("First"));
}

#[test]
fn test_document_without_properties() {
    let doc = SchemaDocument::from_json(r#"{"description": "bare"}"#).expect("valid document");
    assert!(doc.properties.is_none());
    assert!(doc.decoded_properties().expect("empty").is_empty());
    assert!(doc.required.is_empty());
}

#[test]
fn test_variant_selection() {
    assert_eq!(EventVariant::for_class(SCREEN_CLASS), EventVariant::Screen);
    assert_eq!(EventVariant::for_class("screen"), EventVariant::Event);
    assert_eq!(EventVariant::for_class("ViewRoom"), EventVariant::Event);
}
