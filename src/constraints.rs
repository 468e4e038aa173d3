//! User constraint record - six dimensions, each rated Low / Medium / High.

use serde::{Deserialize, Serialize};

use crate::foundation::{ConstraintDimension, ConstraintLevel};

/// User-defined constraints for service evaluation.
///
/// Immutable once constructed; one record is created fresh per comparison
/// request. Unknown level strings are rejected during deserialization, so the
/// core only ever sees well-formed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConstraints {
    pub budget_sensitivity: ConstraintLevel,
    pub expected_traffic: ConstraintLevel,
    pub scalability_requirement: ConstraintLevel,
    pub latency_sensitivity: ConstraintLevel,
    pub operational_overhead_tolerance: ConstraintLevel,
    pub time_to_market_urgency: ConstraintLevel,
}

impl UserConstraints {
    /// Creates a constraint record with the same level on every dimension.
    pub fn uniform(level: ConstraintLevel) -> Self {
        Self {
            budget_sensitivity: level,
            expected_traffic: level,
            scalability_requirement: level,
            latency_sensitivity: level,
            operational_overhead_tolerance: level,
            time_to_market_urgency: level,
        }
    }

    /// Returns the level assigned to a dimension.
    pub fn level(&self, dimension: ConstraintDimension) -> ConstraintLevel {
        match dimension {
            ConstraintDimension::BudgetSensitivity => self.budget_sensitivity,
            ConstraintDimension::ExpectedTraffic => self.expected_traffic,
            ConstraintDimension::ScalabilityRequirement => self.scalability_requirement,
            ConstraintDimension::LatencySensitivity => self.latency_sensitivity,
            ConstraintDimension::OperationalOverheadTolerance => {
                self.operational_overhead_tolerance
            }
            ConstraintDimension::TimeToMarketUrgency => self.time_to_market_urgency,
        }
    }
}
