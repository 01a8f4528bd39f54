/// Convenience result type used across girasol.
pub type GirasolResult<T> = Result<T, GirasolError>;

/// Top-level error taxonomy used by the configuration boundary and the CLI.
///
/// Generation and scheduling are total over validated input and never return these;
/// an empty name is a rejected submit, not an error.
#[derive(thiserror::Error, Debug)]
pub enum GirasolError {
    /// Invalid flower geometry configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid reveal timeline configuration.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Errors when serializing or deserializing settings or plans.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GirasolError {
    /// Build a [`GirasolError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GirasolError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`GirasolError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for GirasolError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
