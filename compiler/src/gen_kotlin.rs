use event_schema::{EnumType, EventSchema, EventVariant, Field, FieldKind, SCREEN_NAME_PROPERTY};

use crate::{language::Language, traits::Generator, utils::quote, writer::CodeWriter};

const LICENSE_HEADER: &str = "/*
 * Copyright (c) 2021 New Vector Ltd
 *
 * Licensed under the Apache License, Version 2.0 (the \"License\");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an \"AS IS\" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */";

const GENERATED_BANNER: &str = "// GENERATED FILE, DO NOT EDIT. FOR MORE INFORMATION VISIT
// https://github.com/matrix-org/matrix-analytics-events/";

pub const PACKAGE: &str = "im.vector.app.features.analytics.plan";
pub const INTERFACE_PACKAGE: &str = "im.vector.app.features.analytics.itf";

/// Renders events as Kotlin `data class`es.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinGenerator;

impl Generator for KotlinGenerator {
    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn render(&self, schema: &EventSchema) -> String {
        compile_schema_to_kotlin(schema)
    }
}

pub fn interface_name(variant: EventVariant) -> &'static str {
    match variant {
        EventVariant::Screen => "VectorAnalyticsScreen",
        EventVariant::Event  => "VectorAnalyticsEvent",
    }
}

/// Kotlin type of a field, ignoring optionality.
pub fn kotlin_type(field: &Field) -> String {
    if let Some(enum_name) = field.enum_type_name() {
        return enum_name;
    }
    match field.kind {
        FieldKind::String  => "String",
        FieldKind::Number  => "Double",
        FieldKind::Integer => "Int",
        FieldKind::Boolean => "Boolean",
    }
    .to_string()
}

/// `val` declaration of a constructor parameter. Optional fields default to `null`.
pub fn property_declaration(field: &Field) -> String {
    if field.required {
        format!("val {}: {}", field.name, kotlin_type(field))
    } else {
        format!("val {}: {}? = null", field.name, kotlin_type(field))
    }
}

/// The statement adding a field to the `getProperties()` map. Enum fields are
/// reported by constant name.
pub fn property_insertion(field: &Field) -> String {
    let value = if field.is_enum() { ".name" } else { "" };
    if field.required {
        format!("put(\"{0}\", {0}{1})", field.name, value)
    } else {
        format!("{0}?.let {{ put(\"{0}\", it{1}) }}", field.name, value)
    }
}

/// Kotlin string literal; `$` would otherwise start a string template.
pub fn string_literal(text: &str) -> String {
    quote(text).replace('$', "\\$")
}

/// Compiles one event into a complete Kotlin source file.
pub fn compile_schema_to_kotlin(schema: &EventSchema) -> String {
    let itf = interface_name(schema.variant);
    let mut w = CodeWriter::new();

    w.raw(LICENSE_HEADER);
    w.blank();
    w.line(format!("package {}", PACKAGE));
    w.blank();
    w.line(format!("import {}.{}", INTERFACE_PACKAGE, itf));
    w.blank();
    w.raw(GENERATED_BANNER);
    w.blank();

    if let Some(description) = &schema.description {
        write_kdoc(&mut w, description);
    }
    w.block(format!("data class {}(", schema.class_name), &format!(") : {} {{", itf), |w| {
        for field in &schema.fields {
            if let Some(description) = &field.description {
                write_kdoc(w, description);
            }
            w.line(format!("{},", property_declaration(field)));
        }
    });

    w.indent();
    for enum_type in &schema.enums {
        w.blank();
        write_enum(&mut w, enum_type);
    }

    w.blank();
    match schema.variant {
        EventVariant::Screen => w.line(format!("override fun getName() = {}.name", SCREEN_NAME_PROPERTY)),
        EventVariant::Event => w.line(format!("override fun getName() = {}", string_literal(&schema.event_name))),
    };

    w.blank();
    write_properties(&mut w, schema);
    w.dedent();
    w.line("}");

    w.finish()
}

/// KDoc block. Kotlin comments nest, so both `/*` and `*/` in the text are escaped.
fn write_kdoc(w: &mut CodeWriter, text: &str) {
    w.line("/**");
    for line in text.lines() {
        w.line(format!(" * {}", escape_comment(line)).trim_end());
    }
    w.line(" */");
}

fn escape_comment(line: &str) -> String {
    line.replace("*/", "*&#47;").replace("/*", "&#47;*")
}

fn write_enum(w: &mut CodeWriter, enum_type: &EnumType) {
    w.block(format!("enum class {} {{", enum_type.name), "}", |w| {
        for case in &enum_type.cases {
            if let Some(description) = &case.description {
                write_kdoc(w, description);
            }
            w.line(format!("{},", case.value));
        }
    });
}

fn write_properties(w: &mut CodeWriter, schema: &EventSchema) {
    if schema.fields.is_empty() {
        w.line("override fun getProperties(): Map<String, Any>? = null");
        return;
    }

    w.block("override fun getProperties(): Map<String, Any>? {", "}", |w| {
        w.block("return mutableMapOf<String, Any>().apply {", "}.takeIf { it.isNotEmpty() }", |w| {
            for field in &schema.fields {
                if schema.is_screen() && field.name == SCREEN_NAME_PROPERTY {
                    continue;
                }
                w.line(property_insertion(field));
            }
        });
    });
}
