
use derive_builder::{Builder, UninitializedFieldError};
use serde::Serialize;

use crate::data_types::operation::OperationKind;

/// Cost of aligning two equal characters; this is fixed and acts as the lower bound for every step
pub const MATCH_COST: usize = 0;
/// Default cost of replacing one character with another
pub const DEFAULT_SUBSTITUTION_COST: usize = 10;
/// Default cost of inserting a target character
pub const DEFAULT_INSERTION_COST: usize = 7;
/// Default cost of deleting a source character
pub const DEFAULT_DELETION_COST: usize = 7;
/// Largest accepted cost for a single operation, keeps any table score far below `usize::MAX`
pub const MAX_COST: usize = u32::MAX as usize;

#[derive(thiserror::Error, Debug)]
pub enum CostModelError {
    #[error("{kind} cost must be >0")]
    ZeroCost { kind: OperationKind },
    #[error("{kind} cost must be <={max}, found {value}")]
    CostTooLarge { kind: OperationKind, value: usize, max: usize },
    #[error(transparent)]
    UninitializedField(#[from] UninitializedFieldError)
}

/// Flat per-operation costs for the alignment.
/// Every non-match cost must be strictly positive, otherwise the backtrace cannot tell a substitution from a match.
/// Costs are also capped at `MAX_COST` so that filling the table cannot overflow.
#[derive(Builder, Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[builder(default, build_fn(validate = "Self::validate", error = "CostModelError"))]
pub struct CostModel {
    /// Cost of a mismatch on the diagonal
    substitution: usize,
    /// Cost of consuming a target character without a source character
    insertion: usize,
    /// Cost of consuming a source character without a target character
    deletion: usize
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            substitution: DEFAULT_SUBSTITUTION_COST,
            insertion: DEFAULT_INSERTION_COST,
            deletion: DEFAULT_DELETION_COST
        }
    }
}

impl CostModelBuilder {
    fn validate(&self) -> Result<(), CostModelError> {
        let checks = [
            (self.substitution, OperationKind::Substitution),
            (self.insertion, OperationKind::Insertion),
            (self.deletion, OperationKind::Deletion)
        ];
        for (value, kind) in checks {
            match value {
                Some(0) => return Err(CostModelError::ZeroCost { kind }),
                Some(value) if value > MAX_COST => {
                    return Err(CostModelError::CostTooLarge { kind, value, max: MAX_COST });
                },
                _ => {}
            }
        }
        Ok(())
    }
}

impl CostModel {
    /// The equality predicate between two characters.
    pub fn is_match(&self, a: char, b: char) -> bool {
        a == b
    }

    /// Returns the flat cost of a given operation kind.
    pub fn cost(&self, kind: OperationKind) -> usize {
        match kind {
            OperationKind::Match => MATCH_COST,
            OperationKind::Substitution => self.substitution,
            OperationKind::Insertion => self.insertion,
            OperationKind::Deletion => self.deletion
        }
    }

    // getters
    pub fn substitution(&self) -> usize {
        self.substitution
    }

    pub fn insertion(&self) -> usize {
        self.insertion
    }

    pub fn deletion(&self) -> usize {
        self.deletion
    }
}
