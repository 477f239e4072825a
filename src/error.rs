use thiserror::Error;

/// Errors produced while building or serializing a frequency schema.
#[derive(Error, Debug)]
pub enum TonemapError {
    /// Alphabet failed validation.
    #[error("alphabet error: {0}")]
    Alphabet(String),

    /// Band plan describes an unusable frequency ladder.
    #[error("band plan error: {0}")]
    Bands(String),

    /// Schema could not be serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
