use serde::{Deserialize, Serialize};

/// Outcome of the validation gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    /// The gate has not run yet.
    #[default]
    Unknown,
    /// The gate ran and the error ledger is empty.
    Valid,
    /// The error ledger holds at least one entry.
    Invalid,
}

impl Validity {
    /// Project an error count onto a validity.
    pub fn from_error_count(count: usize) -> Self {
        if count == 0 {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Whether the gate has run.
    pub fn is_known(&self) -> bool {
        !matches!(self, Validity::Unknown)
    }
}
