//! event-codegen
//!
//! This crate implements:
//!  1) A parser turning an analytics event JSON Schema into a typed `EventSchema`,
//!  2) Kotlin generation (`compile_schema_to_kotlin` → `String`),
//!  3) Swift generation (`compile_schema_to_swift` → `String`),
//!  4) A scanner that reads field declarations back out of generated code,
//!  5) Error types (`CodegenError`) and the `Generator` trait.

pub mod error;
pub mod utils;
pub mod writer;
pub mod parser;
pub mod language;
pub mod traits;
pub mod gen_kotlin;
pub mod gen_swift;
pub mod scanner;
pub mod compiler;

pub use compiler::{compile_document, compile_schema, compile_schema_file};
pub use error::CodegenError;
pub use gen_kotlin::compile_schema_to_kotlin;
pub use gen_swift::compile_schema_to_swift;
pub use language::{Language, SUPPORTED_LANGUAGES};
pub use parser::{load_schema, parse_schema};
pub use traits::Generator;
