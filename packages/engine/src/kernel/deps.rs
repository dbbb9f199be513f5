use async_trait::async_trait;
use detector_client::{DetectorClient, DetectorError};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domains::reviews::scoring::ReviewSignals;
use crate::kernel::traits::BaseFeatureExtractor;

/// Adapter wrapping the REST detector client behind the extractor trait.
pub struct DetectorAdapter(pub Arc<DetectorClient>);

impl DetectorAdapter {
    pub fn new(client: Arc<DetectorClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseFeatureExtractor for DetectorAdapter {
    async fn extract(&self, text: &str) -> Result<ReviewSignals, DetectorError> {
        let prediction = self.0.predict(text).await?;
        Ok(ReviewSignals {
            bot: prediction.bot_prob,
            spam: prediction.spam_prob,
            inept: prediction.inept_prob,
            generated: prediction.llm_prob,
        })
    }
}

/// Shared dependencies injected into activities.
#[derive(Clone)]
pub struct EngineDeps {
    pub db_pool: PgPool,
    pub feature_extractor: Arc<dyn BaseFeatureExtractor>,
}

impl EngineDeps {
    pub fn new(db_pool: PgPool, feature_extractor: Arc<dyn BaseFeatureExtractor>) -> Self {
        Self {
            db_pool,
            feature_extractor,
        }
    }

    /// Build production dependencies from configuration.
    pub fn from_config(config: &Config, db_pool: &PgPool) -> Result<Self, DetectorError> {
        let client = DetectorClient::with_timeout(
            &config.detector_url,
            Duration::from_secs(config.detector_timeout_secs),
        )?;
        Ok(Self {
            db_pool: db_pool.clone(),
            feature_extractor: Arc::new(DetectorAdapter::new(Arc::new(client))),
        })
    }
}
