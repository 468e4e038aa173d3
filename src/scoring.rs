//! Rule-based scoring table for the three compute services.
//!
//! The 54-entry matrix (6 dimensions x 3 levels x 3 services) is declarative
//! data, loaded once and validated for total coverage at startup. A gap or an
//! out-of-range value is a configuration defect, never a runtime fallback.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use thiserror::Error;

use crate::constraints::UserConstraints;
use crate::foundation::{ConstraintDimension, ConstraintLevel, Score, ServiceKind, ValidationError};
use crate::foundation::{ConstraintDimension as Dim, ConstraintLevel as Level};

/// Raw scores for one (dimension, level) row, in `ServiceKind::ALL` order:
/// EC2, Lambda, ECS Fargate.
type RuleRow = (Dim, Level, [u8; ServiceKind::COUNT]);

/// The scoring rules as auditable data. 18 rows x 3 services = 54 entries.
const RULES: [RuleRow; 18] = [
    (Dim::BudgetSensitivity, Level::Low, [4, 3, 2]),
    (Dim::BudgetSensitivity, Level::Medium, [5, 3, 2]),
    (Dim::BudgetSensitivity, Level::High, [5, 2, 1]),
    (Dim::ExpectedTraffic, Level::Low, [2, 5, 3]),
    (Dim::ExpectedTraffic, Level::Medium, [4, 4, 4]),
    (Dim::ExpectedTraffic, Level::High, [5, 3, 4]),
    (Dim::ScalabilityRequirement, Level::Low, [3, 4, 4]),
    (Dim::ScalabilityRequirement, Level::Medium, [4, 5, 5]),
    (Dim::ScalabilityRequirement, Level::High, [3, 5, 4]),
    (Dim::LatencySensitivity, Level::Low, [4, 3, 4]),
    (Dim::LatencySensitivity, Level::Medium, [5, 3, 4]),
    (Dim::LatencySensitivity, Level::High, [5, 1, 3]),
    (Dim::OperationalOverheadTolerance, Level::Low, [1, 5, 4]),
    (Dim::OperationalOverheadTolerance, Level::Medium, [2, 5, 4]),
    (Dim::OperationalOverheadTolerance, Level::High, [4, 4, 3]),
    (Dim::TimeToMarketUrgency, Level::Low, [3, 4, 3]),
    (Dim::TimeToMarketUrgency, Level::Medium, [2, 5, 4]),
    (Dim::TimeToMarketUrgency, Level::High, [1, 5, 3]),
];

static SCORE_TABLE: Lazy<BTreeMap<(Dim, Level, ServiceKind), u8>> = Lazy::new(|| {
    let mut table = BTreeMap::new();
    for (dimension, level, scores) in RULES {
        for (service, raw) in ServiceKind::ALL.into_iter().zip(scores) {
            table.insert((dimension, level, service), raw);
        }
    }
    table
});

/// Errors raised by score lookups and table validation.
///
/// These indicate a defect in the static rules, not user error; callers treat
/// them as fatal rather than degrading to a default score.
#[derive(Debug, Clone, Error)]
pub enum ScoringError {
    #[error("No scoring rule for {service} on {dimension}={level}")]
    MissingEntry {
        service: ServiceKind,
        dimension: ConstraintDimension,
        level: ConstraintLevel,
    },

    #[error("Invalid scoring rule for {service} on {dimension}={level}: {source}")]
    InvalidEntry {
        service: ServiceKind,
        dimension: ConstraintDimension,
        level: ConstraintLevel,
        #[source]
        source: ValidationError,
    },
}

/// Scores a service against a single constraint dimension at the given level.
pub fn score(
    service: ServiceKind,
    dimension: ConstraintDimension,
    level: ConstraintLevel,
) -> Result<Score, ScoringError> {
    let raw = SCORE_TABLE
        .get(&(dimension, level, service))
        .copied()
        .ok_or(ScoringError::MissingEntry {
            service,
            dimension,
            level,
        })?;

    Score::try_from_u8(raw).map_err(|source| ScoringError::InvalidEntry {
        service,
        dimension,
        level,
        source,
    })
}

/// Computes all six dimension scores for a service. Never omits a dimension.
pub fn all_scores(
    service: ServiceKind,
    constraints: &UserConstraints,
) -> Result<BTreeMap<ConstraintDimension, Score>, ScoringError> {
    let mut scores = BTreeMap::new();
    for dimension in ConstraintDimension::ALL {
        let level = constraints.level(dimension);
        scores.insert(dimension, score(service, dimension, level)?);
    }
    Ok(scores)
}

/// Returns a one-line rationale for a specific score.
pub fn rationale(
    service: ServiceKind,
    dimension: ConstraintDimension,
    level: ConstraintLevel,
) -> Result<String, ScoringError> {
    let value = score(service, dimension, level)?;
    Ok(format!(
        "Score {} for {} on {}={}",
        value, service, dimension, level
    ))
}

/// Validates that the table covers all 54 combinations with in-range scores.
///
/// Run as a startup self-test; a failure here means the static rules are
/// misconfigured and no comparison should be served.
pub fn validate_rules() -> Result<(), ScoringError> {
    for dimension in ConstraintDimension::ALL {
        for level in ConstraintLevel::ALL {
            for service in ServiceKind::ALL {
                score(service, dimension, level)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_54_combinations() {
        assert_eq!(SCORE_TABLE.len(), 54);
        assert!(validate_rules().is_ok());
    }

    #[test]
    fn every_score_is_in_range() {
        for dimension in ConstraintDimension::ALL {
            for level in ConstraintLevel::ALL {
                for service in ServiceKind::ALL {
                    let value = score(service, dimension, level).unwrap().value();
                    assert!((1..=5).contains(&value));
                }
            }
        }
    }

    #[test]
    fn reference_latency_high_scores_match_fixed_values() {
        let level = ConstraintLevel::High;
        let dim = ConstraintDimension::LatencySensitivity;
        assert_eq!(score(ServiceKind::Ec2, dim, level).unwrap().value(), 5);
        assert_eq!(score(ServiceKind::Lambda, dim, level).unwrap().value(), 1);
        assert_eq!(score(ServiceKind::EcsFargate, dim, level).unwrap().value(), 3);
    }

    #[test]
    fn score_is_deterministic() {
        let first = score(
            ServiceKind::Lambda,
            ConstraintDimension::BudgetSensitivity,
            ConstraintLevel::High,
        )
        .unwrap();
        for _ in 0..10 {
            let again = score(
                ServiceKind::Lambda,
                ConstraintDimension::BudgetSensitivity,
                ConstraintLevel::High,
            )
            .unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn all_scores_produces_exactly_six_entries() {
        let constraints = UserConstraints::uniform(ConstraintLevel::Medium);
        for service in ServiceKind::ALL {
            let scores = all_scores(service, &constraints).unwrap();
            assert_eq!(scores.len(), 6);
            for dimension in ConstraintDimension::ALL {
                assert!(scores.contains_key(&dimension));
            }
        }
    }

    #[test]
    fn all_scores_follows_the_constraint_levels() {
        let mut constraints = UserConstraints::uniform(ConstraintLevel::Low);
        constraints.latency_sensitivity = ConstraintLevel::High;

        let scores = all_scores(ServiceKind::Lambda, &constraints).unwrap();
        assert_eq!(
            scores[&ConstraintDimension::LatencySensitivity].value(),
            1
        );
        assert_eq!(scores[&ConstraintDimension::ExpectedTraffic].value(), 5);
    }

    #[test]
    fn rationale_mentions_score_and_keys() {
        let text = rationale(
            ServiceKind::Ec2,
            ConstraintDimension::LatencySensitivity,
            ConstraintLevel::High,
        )
        .unwrap();
        assert_eq!(text, "Score 5/5 for EC2 on latency_sensitivity=High");
    }

    #[test]
    fn missing_entry_error_displays_keys() {
        let err = ScoringError::MissingEntry {
            service: ServiceKind::Lambda,
            dimension: ConstraintDimension::ExpectedTraffic,
            level: ConstraintLevel::Low,
        };
        assert_eq!(
            format!("{}", err),
            "No scoring rule for Lambda on expected_traffic=Low"
        );
    }
}
