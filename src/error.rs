use thiserror::Error;

/// Errors surfaced by the crate's fallible edges.
///
/// Interpretation itself never fails: every input, including the empty
/// string, degrades to the documented fallback values. These variants cover
/// configuration loading, CLI I/O, and parsing untrusted tag labels.
#[derive(Error, Debug)]
pub enum InterpreterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to read recipe text input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize an output record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A tag label outside the fixed vocabulary
    #[error("Unknown tag label: {0}")]
    UnknownTag(String),
}
