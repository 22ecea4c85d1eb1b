//! Reads the field list back out of rendered declarations.
//!
//! Only the shapes the generators emit are recognized: one `val` constructor
//! parameter per line in Kotlin, one `public let` stored property per line in
//! Swift.

use lazy_static::lazy_static;
use regex::Regex;

use crate::language::Language;

lazy_static! {
    static ref KOTLIN_PROPERTY: Regex =
        Regex::new(r"(?m)^    val ([A-Za-z_][A-Za-z0-9_]*): ([A-Za-z_][A-Za-z0-9_]*)(\?)?(?: = null)?,$").unwrap();
    static ref SWIFT_PROPERTY: Regex =
        Regex::new(r"(?m)^        public let ([A-Za-z_][A-Za-z0-9_]*): ([A-Za-z_][A-Za-z0-9_]*)(\?)?$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedField {
    pub name:      String,
    pub type_name: String,
    pub optional:  bool,
}

/// Lists the fields declared in `source`, in the order they appear.
pub fn scan_fields(language: Language, source: &str) -> Vec<ScannedField> {
    let pattern: &Regex = match language {
        Language::Kotlin => &*KOTLIN_PROPERTY,
        Language::Swift  => &*SWIFT_PROPERTY,
    };
    pattern
        .captures_iter(source)
        .map(|caps| ScannedField {
            name:      caps[1].to_string(),
            type_name: caps[2].to_string(),
            optional:  caps.get(3).is_some(),
        })
        .collect()
}
