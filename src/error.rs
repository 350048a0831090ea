use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReflectError>;

/// Failures that abort a shader metadata build.
///
/// Unrecognized native enum values are not errors: they degrade to the
/// portable `Unknown`/`Other` variant and are only logged.
#[derive(Debug, Error)]
pub enum ReflectError {
    /// The input bytes could not be turned into a reflection handle.
    #[error("failed to create shader reflection: {reason}")]
    ReflectionCreationFailed { reason: String },

    /// A single native accessor call failed; the whole build is discarded.
    #[error("failed to read {0} descriptor")]
    DescriptorReadFailed(String),

    #[error("invalid shader metadata json")]
    Json(#[from] serde_json::Error),
}

impl ReflectError {
    pub fn creation_failed(reason: impl ToString) -> Self {
        Self::ReflectionCreationFailed {
            reason: reason.to_string(),
        }
    }

    pub fn read_failed(what: impl ToString) -> Self {
        Self::DescriptorReadFailed(what.to_string())
    }
}
