#![cfg(test)]

use std::fs;
use std::path::{Path, PathBuf};

use event_codegen::{
    compile_schema, compile_schema_file, compile_schema_to_swift,
    gen_swift::{member_definition, property_entry, swift_type},
    load_schema, parse_schema,
    scanner::scan_fields,
    Language,
};
use event_schema::{EnumCase, Field, FieldKind};

const BANNER_END: &str = "// https://github.com/matrix-org/matrix-analytics-events/\n\n";

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn body(code: &str) -> &str {
    code.split_once(BANNER_END).map(|(_, rest)| rest).expect("generated banner")
}

fn assert_matches_fixture(schema: &str, expected: &str) {
    let code = compile_schema_file(&fixture(schema), Language::Swift).expect("compile failed");
    let expected = fs::read_to_string(fixture(expected)).expect("read fixture");
    assert_eq!(format!("{}\n", code), expected);
}

#[test]
fn test_view_room_matches_published_file() {
    assert_matches_fixture("ViewRoom.json", "ViewRoom.swift");
}

#[test]
fn test_identify_matches_published_file() {
    assert_matches_fixture("Identify.json", "Identify.swift");
}

#[test]
fn test_screen_matches_fixture() {
    assert_matches_fixture("Screen.json", "Screen.swift");
}

#[test]
fn test_click_event() {
    let code = compile_schema(
        "Click",
        r#"{"properties": {"eventName": {"enum": ["Click"]}, "priority": {"type":"integer","enum":["B","A"]}}, "required": ["priority"]}"#,
        Language::Swift,
    )
    .expect("compile failed");

    assert!(code.starts_with("//\n// Copyright 2021 New Vector Ltd\n"));
    let expected = r#"extension AnalyticsEvent {
    public struct Click: AnalyticsEventProtocol {
        public let eventName = "Click"

        public let priority: Priority

        public init(priority: Priority) {
            self.priority = priority
        }

        public enum Priority: String {
            case A
            case B
        }

        public var properties: [String: Any] {
            return [
                "priority": priority.rawValue
            ]
        }
    }
}"#;
    assert_eq!(body(&code), expected);
}

#[test]
fn test_no_fields_has_constant_empty_properties() {
    let code = compile_schema(
        "Logout",
        r#"{"properties": {"eventName": {"enum": ["Logout"]}}}"#,
        Language::Swift,
    )
    .expect("compile failed");

    let expected = r#"extension AnalyticsEvent {
    public struct Logout: AnalyticsEventProtocol {
        public let eventName = "Logout"


        public init() {
        }

        public var properties: [String: Any] = [:]
    }
}"#;
    assert_eq!(body(&code), expected);
}

#[test]
fn test_screen_name_only_yields_empty_literal() {
    let code = compile_schema(
        "Screen",
        r#"{"properties": {"eventName": {"enum": ["Screen"]}, "screenName": {"type": "string", "enum": ["Home"]}}, "required": ["screenName"]}"#,
        Language::Swift,
    )
    .expect("compile failed");

    assert!(code.contains("    public struct Screen: AnalyticsScreenProtocol {\n\n        public let screenName: ScreenName\n"));
    assert!(!code.contains("eventName"));
    assert!(code.contains(
        "        public var properties: [String: Any] {\n            return [:]\n        }\n"
    ));
}

#[test]
fn test_screen_name_is_excluded_on_any_event() {
    let code = compile_schema(
        "Nav",
        r#"{"properties": {"eventName": {"enum": ["Nav"]}, "screenName": {"type": "string"}, "depth": {"type": "integer"}}}"#,
        Language::Swift,
    )
    .expect("compile failed");

    assert!(code.contains("        public let screenName: String?\n"));
    assert!(code.contains("            return [\n                \"depth\": depth as Any\n            ]\n"));
}

#[test]
fn test_type_mapping() {
    let mut f = Field {
        name:        "ratio".to_string(),
        kind:        FieldKind::Number,
        enum_values: None,
        description: None,
        required:    true,
    };
    assert_eq!(swift_type(&f), "Double");
    assert_eq!(member_definition(&f), "ratio: Double");
    assert_eq!(property_entry(&f), "\"ratio\": ratio");

    f.required = false;
    assert_eq!(member_definition(&f), "ratio: Double?");
    assert_eq!(property_entry(&f), "\"ratio\": ratio as Any");

    f.kind = FieldKind::Boolean;
    assert_eq!(swift_type(&f), "Bool");
    f.kind = FieldKind::Integer;
    assert_eq!(swift_type(&f), "Int");
    f.kind = FieldKind::String;
    assert_eq!(swift_type(&f), "String");

    f.enum_values = Some(vec![EnumCase::new("Half")]);
    assert_eq!(member_definition(&f), "ratio: Ratio?");
    assert_eq!(property_entry(&f), "\"ratio\": ratio?.rawValue as Any");
    f.required = true;
    assert_eq!(property_entry(&f), "\"ratio\": ratio.rawValue");
}

#[test]
fn test_declared_fields_round_trip() {
    for name in ["ViewRoom.json", "Screen.json", "CallStarted.json", "Identify.json"] {
        let (class_name, doc) = load_schema(&fixture(name)).expect("load_schema failed");
        let schema = parse_schema(&class_name, &doc).expect("parse_schema failed");
        let code = compile_schema_to_swift(&schema);

        let scanned = scan_fields(Language::Swift, &code);
        assert_eq!(scanned.len(), schema.fields.len(), "{}", name);
        for (scanned, field) in scanned.iter().zip(&schema.fields) {
            assert_eq!(scanned.name, field.name);
            assert_eq!(scanned.type_name, swift_type(field));
            assert_eq!(scanned.optional, !field.required);
        }
    }
}

#[test]
fn test_enum_cases_sorted_without_duplicates() {
    let code = compile_schema(
        "Pick",
        r#"{"properties": {"eventName": {"enum": ["Pick"]}, "tone": {"type": "string", "enum": ["Warm", "Cool", "Warm", "Bright"]}}}"#,
        Language::Swift,
    )
    .expect("compile failed");

    assert!(code.contains(
        "        public enum Tone: String {\n            case Bright\n            case Cool\n            case Warm\n        }\n"
    ));
    assert_eq!(code.matches("case ").count(), 3);
}
