use serde::{Deserialize, Serialize};

/// Result of a write addressed by identifier. `NotFound` means no row was
/// affected; it is not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteOutcome {
    Applied,
    NotFound,
}

impl WriteOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 {
            WriteOutcome::Applied
        } else {
            WriteOutcome::NotFound
        }
    }
}
