pub mod error;

pub use error::EngineError;

/// Result of an idempotent insert against a table with a natural key.
///
/// Re-ingesting the same datapack is routine, so hitting an existing row is
/// an outcome the caller inspects, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Created,
    AlreadyExists,
}

impl InsertOutcome {
    pub fn created(self) -> bool {
        matches!(self, InsertOutcome::Created)
    }
}
