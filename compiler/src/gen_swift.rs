use event_schema::{EnumType, EventSchema, EventVariant, Field, FieldKind, SCREEN_NAME_PROPERTY};

use crate::{language::Language, traits::Generator, utils::quote, writer::CodeWriter};

const LICENSE_HEADER: &str = "//
// Copyright 2021 New Vector Ltd
//
// Licensed under the Apache License, Version 2.0 (the \"License\");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an \"AS IS\" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//";

const GENERATED_BANNER: &str = "// GENERATED FILE, DO NOT EDIT. FOR MORE INFORMATION VISIT
// https://github.com/matrix-org/matrix-analytics-events/";

/// Type every generated struct is nested in.
pub const ENCLOSING_TYPE: &str = "AnalyticsEvent";

/// Renders events as Swift structs nested in `extension AnalyticsEvent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftGenerator;

impl Generator for SwiftGenerator {
    fn language(&self) -> Language {
        Language::Swift
    }

    fn render(&self, schema: &EventSchema) -> String {
        compile_schema_to_swift(schema)
    }
}

pub fn protocol_name(variant: EventVariant) -> &'static str {
    match variant {
        EventVariant::Screen => "AnalyticsScreenProtocol",
        EventVariant::Event  => "AnalyticsEventProtocol",
    }
}

/// Swift type of a field, ignoring optionality.
pub fn swift_type(field: &Field) -> String {
    if let Some(enum_name) = field.enum_type_name() {
        return enum_name;
    }
    match field.kind {
        FieldKind::String  => "String",
        FieldKind::Number  => "Double",
        FieldKind::Integer => "Int",
        FieldKind::Boolean => "Bool",
    }
    .to_string()
}

/// `name: Type` with a `?` suffix for optional fields. Shared by the stored
/// properties and the initializer parameters.
pub fn member_definition(field: &Field) -> String {
    let suffix = if field.required { "" } else { "?" };
    format!("{}: {}{}", field.name, swift_type(field), suffix)
}

/// One `key: value` pair of the `properties` dictionary literal.
pub fn property_entry(field: &Field) -> String {
    match (field.is_enum(), field.required) {
        (true, true)   => format!("\"{0}\": {0}.rawValue", field.name),
        (true, false)  => format!("\"{0}\": {0}?.rawValue as Any", field.name),
        (false, true)  => format!("\"{0}\": {0}", field.name),
        (false, false) => format!("\"{0}\": {0} as Any", field.name),
    }
}

/// Compiles one event into a complete Swift source file.
pub fn compile_schema_to_swift(schema: &EventSchema) -> String {
    let itf = protocol_name(schema.variant);
    let mut w = CodeWriter::new();

    w.raw(LICENSE_HEADER);
    w.blank();
    w.line("import Foundation");
    w.blank();
    w.raw(GENERATED_BANNER);
    w.blank();

    if let Some(description) = &schema.description {
        write_doc(&mut w, description);
    }
    w.block(format!("extension {} {{", ENCLOSING_TYPE), "}", |w| {
        w.block(format!("public struct {}: {} {{", schema.class_name, itf), "}", |w| {
            write_struct_body(w, schema);
        });
    });

    w.finish()
}

fn write_struct_body(w: &mut CodeWriter, schema: &EventSchema) {
    if !schema.is_screen() {
        w.line(format!("public let eventName = {}", quote(&schema.event_name)));
    }

    w.blank();
    for field in &schema.fields {
        if let Some(description) = &field.description {
            write_doc(w, description);
        }
        w.line(format!("public let {}", member_definition(field)));
    }

    // Public memberwise initializer.
    w.blank();
    let parameters: Vec<String> = schema.fields.iter().map(member_definition).collect();
    w.block(format!("public init({}) {{", parameters.join(", ")), "}", |w| {
        for field in &schema.fields {
            w.line(format!("self.{0} = {0}", field.name));
        }
    });

    for enum_type in &schema.enums {
        w.blank();
        write_enum(w, enum_type);
    }

    w.blank();
    write_properties(w, schema);
}

fn write_doc(w: &mut CodeWriter, text: &str) {
    for line in text.lines() {
        w.line(format!("/// {}", line).trim_end());
    }
}

fn write_enum(w: &mut CodeWriter, enum_type: &EnumType) {
    w.block(format!("public enum {}: String {{", enum_type.name), "}", |w| {
        for case in &enum_type.cases {
            if let Some(description) = &case.description {
                write_doc(w, description);
            }
            w.line(format!("case {}", case.value));
        }
    });
}

fn write_properties(w: &mut CodeWriter, schema: &EventSchema) {
    if schema.fields.is_empty() {
        w.line("public var properties: [String: Any] = [:]");
        return;
    }

    let entries: Vec<String> = schema
        .fields
        .iter()
        .filter(|field| field.name != SCREEN_NAME_PROPERTY)
        .map(property_entry)
        .collect();

    w.block("public var properties: [String: Any] {", "}", |w| {
        if entries.is_empty() {
            w.line("return [:]");
            return;
        }
        w.block("return [", "]", |w| {
            let last = entries.len() - 1;
            for (index, entry) in entries.iter().enumerate() {
                if index < last {
                    w.line(format!("{},", entry));
                } else {
                    w.line(entry);
                }
            }
        });
    });
}
