use thiserror::Error;

/// Failures of optional browser capabilities. None of these are fatal: the
/// affected component logs once and becomes a no-op.
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("{capability} unavailable: {detail}")]
    Unavailable {
        capability: &'static str,
        detail: String,
    },
    #[error("synthesis failed: {0}")]
    Synthesis(String),
}

impl CapabilityError {
    pub fn unavailable(capability: &'static str, detail: impl Into<String>) -> Self {
        Self::Unavailable {
            capability,
            detail: detail.into(),
        }
    }
}
