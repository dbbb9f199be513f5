// Trait definitions for dependency injection
//
// These traits abstract external services so activities can be tested
// with mock implementations. Naming convention: Base* for trait names.

use async_trait::async_trait;
use detector_client::DetectorError;

use crate::domains::reviews::scoring::ReviewSignals;

/// Classifies review text into authenticity signals.
#[async_trait]
pub trait BaseFeatureExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<ReviewSignals, DetectorError>;
}
