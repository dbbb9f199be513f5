// Mock implementations of dependency traits for testing.
//
// Mocks record the calls they receive and replay queued responses; when the
// queue runs dry they fall back to a neutral default so tests only script
// the calls they assert on.

use async_trait::async_trait;
use detector_client::DetectorError;
use std::sync::{Arc, Mutex};

use crate::domains::reviews::scoring::ReviewSignals;
use crate::kernel::traits::BaseFeatureExtractor;

pub struct MockFeatureExtractor {
    responses: Arc<Mutex<Vec<Result<ReviewSignals, DetectorError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockFeatureExtractor {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful prediction for the next call.
    pub fn with_signals(self, signals: ReviewSignals) -> Self {
        self.responses.lock().unwrap().push(Ok(signals));
        self
    }

    /// Queue a failure for the next call.
    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Err(DetectorError::Network(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c == text)
    }
}

#[async_trait]
impl BaseFeatureExtractor for MockFeatureExtractor {
    async fn extract(&self, text: &str) -> Result<ReviewSignals, DetectorError> {
        self.calls.lock().unwrap().push(text.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(ReviewSignals::default())
        } else {
            responses.remove(0)
        }
    }
}
