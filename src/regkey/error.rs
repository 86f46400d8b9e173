use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid permission format: {0} (expected domain:resource)")]
    InvalidPermissionFormat(String),

    #[error("Missing required parameter: {0}")]
    MissingRequiredParameter(&'static str),

    #[error("Unsupported parameters: {0}")]
    UnsupportedParameters(String),

    #[error("Unknown command: {0}")]
    BadCommand(String),

    #[error("Not authorized")]
    Unauthorized,

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<(String, String)>,
    },

    #[error("Api error: {0}")]
    Api(String),

    #[error("Malformed registry response: {0}")]
    MalformedResult(String),

    #[error("Http error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KeyError>;
