//! Constraint level value object (Low / Medium / High).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the three levels a user may assign to a constraint dimension.
///
/// Levels are compared for equality only; no semantic ordering between them is
/// relied upon anywhere in the comparison pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConstraintLevel {
    Low,
    Medium,
    High,
}

impl ConstraintLevel {
    /// All levels in display order.
    pub const ALL: [ConstraintLevel; 3] = [
        ConstraintLevel::Low,
        ConstraintLevel::Medium,
        ConstraintLevel::High,
    ];

    /// Returns the canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintLevel::Low => "Low",
            ConstraintLevel::Medium => "Medium",
            ConstraintLevel::High => "High",
        }
    }
}

impl fmt::Display for ConstraintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConstraintLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(ConstraintLevel::Low),
            "Medium" => Ok(ConstraintLevel::Medium),
            "High" => Ok(ConstraintLevel::High),
            other => Err(ValidationError::unknown_value("constraint_level", other)),
        }
    }
}
