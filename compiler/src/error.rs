use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed schema document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field \"{0}\"")]
    MissingField(String),

    #[error("Unsupported type \"{kind}\" for field \"{field}\"")]
    UnsupportedType {
        field: String,
        kind:  String,
    },

    #[error("Support for language \"{0}\" has not been implemented")]
    UnsupportedLanguage(String),
}
