//! Page-level error type.

/// Failures surfaced by the view controller and the browser adapters.
///
/// None of these are retried; the expected remedy is a page reload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("required page region missing: {name}")]
    MissingRegion { name: String },
    #[error("video player unavailable: {0}")]
    PlayerUnavailable(String),
    #[error("skill index {index} out of range (have {len})")]
    SkillIndexOutOfRange { index: usize, len: usize },
    #[error("invalid video id: {0:?}")]
    InvalidVideoId(String),
}

impl PageError {
    pub fn missing_region(name: impl Into<String>) -> Self {
        Self::MissingRegion { name: name.into() }
    }
}
