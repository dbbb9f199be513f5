//! Review scoring rules.
//!
//! Every ingested review is scored once, at ingestion time. The classifier
//! returns four independent probabilities; the corrected score discounts the
//! raw rating by their mean, and a review counts as flagged on a signal when
//! that probability exceeds [`FLAG_THRESHOLD`].

use crate::common::EngineError;

/// A signal probability above this marks the review as flagged for it.
pub const FLAG_THRESHOLD: f64 = 0.7;

/// Authenticity signals for a single review, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReviewSignals {
    /// Probability the review was posted by a bot account.
    pub bot: f64,
    /// Probability the review is promotional spam.
    pub spam: f64,
    /// Probability the review is incompetent or off-topic.
    pub inept: f64,
    /// Probability the text was machine-generated.
    pub generated: f64,
}

impl ReviewSignals {
    pub fn mean(&self) -> f64 {
        (self.bot + self.spam + self.inept + self.generated) / 4.0
    }

    /// Reject signals outside [0, 1]; a classifier emitting these is
    /// misbehaving and the review must not be stored.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, value) in [
            ("bot", self.bot),
            ("spam", self.spam),
            ("inept", self.inept),
            ("generated", self.generated),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::Validation(format!(
                    "signal {} out of range: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Discount a raw rating by the mean of the authenticity signals.
///
/// All signals at zero leave the score untouched; all at one zero it out.
pub fn corrected_score(signals: &ReviewSignals, raw_score: f64) -> f64 {
    raw_score * (1.0 - signals.mean())
}

/// Raw ratings come from external payloads; reject anything negative or
/// non-finite before it reaches the scoring math.
pub fn validate_raw_score(score: f64) -> Result<(), EngineError> {
    if !score.is_finite() || score < 0.0 {
        return Err(EngineError::Validation(format!(
            "raw score out of range: {}",
            score
        )));
    }
    Ok(())
}
