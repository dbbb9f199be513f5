use thiserror::Error;

/// Errors surfaced by engine activities.
///
/// Model-layer queries return `anyhow::Result` and fold into `Internal`;
/// activities promote the cases callers branch on into their own variants.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("feature extractor error: {0}")]
    Extractor(#[from] detector_client::DetectorError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        EngineError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
