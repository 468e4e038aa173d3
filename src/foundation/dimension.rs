//! Constraint dimension enumeration - the six axes a user rates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six named axes on which a user expresses a requirement level.
///
/// The set is closed; scoring tables and narrative tables are keyed on it and
/// validated for total coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintDimension {
    BudgetSensitivity,
    ExpectedTraffic,
    ScalabilityRequirement,
    LatencySensitivity,
    OperationalOverheadTolerance,
    TimeToMarketUrgency,
}

impl ConstraintDimension {
    /// All dimensions in canonical order.
    pub const ALL: [ConstraintDimension; 6] = [
        ConstraintDimension::BudgetSensitivity,
        ConstraintDimension::ExpectedTraffic,
        ConstraintDimension::ScalabilityRequirement,
        ConstraintDimension::LatencySensitivity,
        ConstraintDimension::OperationalOverheadTolerance,
        ConstraintDimension::TimeToMarketUrgency,
    ];

    /// Returns the stable snake_case key used in serialized score maps.
    pub fn key(&self) -> &'static str {
        match self {
            ConstraintDimension::BudgetSensitivity => "budget_sensitivity",
            ConstraintDimension::ExpectedTraffic => "expected_traffic",
            ConstraintDimension::ScalabilityRequirement => "scalability_requirement",
            ConstraintDimension::LatencySensitivity => "latency_sensitivity",
            ConstraintDimension::OperationalOverheadTolerance => "operational_overhead_tolerance",
            ConstraintDimension::TimeToMarketUrgency => "time_to_market_urgency",
        }
    }

    /// Returns the human-readable label used in conflict pair strings.
    pub fn label(&self) -> &'static str {
        match self {
            ConstraintDimension::BudgetSensitivity => "Budget sensitivity",
            ConstraintDimension::ExpectedTraffic => "Expected traffic",
            ConstraintDimension::ScalabilityRequirement => "Scalability requirement",
            ConstraintDimension::LatencySensitivity => "Latency sensitivity",
            ConstraintDimension::OperationalOverheadTolerance => "Operational overhead tolerance",
            ConstraintDimension::TimeToMarketUrgency => "Time-to-market urgency",
        }
    }
}

impl fmt::Display for ConstraintDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_contains_six_distinct_dimensions() {
        let unique: HashSet<_> = ConstraintDimension::ALL.iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn keys_are_stable_snake_case() {
        assert_eq!(
            ConstraintDimension::BudgetSensitivity.key(),
            "budget_sensitivity"
        );
        assert_eq!(
            ConstraintDimension::OperationalOverheadTolerance.key(),
            "operational_overhead_tolerance"
        );
    }

    #[test]
    fn labels_match_conflict_pair_wording() {
        assert_eq!(
            ConstraintDimension::ScalabilityRequirement.label(),
            "Scalability requirement"
        );
        assert_eq!(
            ConstraintDimension::TimeToMarketUrgency.label(),
            "Time-to-market urgency"
        );
    }

    #[test]
    fn serializes_as_snake_case_key() {
        assert_eq!(
            serde_json::to_string(&ConstraintDimension::LatencySensitivity).unwrap(),
            "\"latency_sensitivity\""
        );
    }
}
