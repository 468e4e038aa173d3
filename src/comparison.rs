//! Comparison orchestrator.
//!
//! Sequences evaluation, trade-off detection, and explanation composition into
//! one immutable result, then re-checks the neutrality invariants before the
//! result is released. A neutrality failure means the static tables themselves
//! are defective, so the whole comparison is aborted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

use crate::constraints::UserConstraints;
use crate::evaluation::{self, ServiceEvaluation};
use crate::explanation;
use crate::foundation::ServiceKind;
use crate::neutrality;
use crate::scoring::{self, ScoringError};
use crate::tradeoffs::{self, TradeOffAnalysis};

/// Complete comparison result for all three services.
///
/// Constructed once per request, immutable, and consumed by the presentation
/// layer only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub evaluations: BTreeMap<ServiceKind, ServiceEvaluation>,
    pub trade_off_analysis: TradeOffAnalysis,
    pub contextual_recommendations: BTreeMap<ServiceKind, String>,
    pub edge_case_warnings: Vec<String>,
}

/// Errors surfaced by the comparison pipeline.
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// An internal stage failed; the original cause is attached. Indicates a
    /// defect in the static tables, not user error.
    #[error("Comparison failed: {0}")]
    Failed(#[from] ScoringError),

    /// A composed output violated the no-winner invariant.
    #[error("Neutrality violation: {0}")]
    NeutralityViolation(String),
}

/// Validates the static tables. Run once at startup; a failure here means no
/// comparison should be served at all.
pub fn startup_check() -> Result<(), ComparisonError> {
    scoring::validate_rules()?;
    for service in ServiceKind::ALL {
        let entry = crate::catalog::characteristics(service);
        let text = format!(
            "{} {} {} {}",
            entry.name,
            entry.strengths.join(" "),
            entry.limitations.join(" "),
            entry.best_use_cases.join(" ")
        );
        if let Some(term) = neutrality::find_forbidden_term(&text) {
            return Err(ComparisonError::NeutralityViolation(format!(
                "catalog entry for {} contains forbidden term '{}'",
                service, term
            )));
        }
    }
    Ok(())
}

/// Performs the complete service comparison for one constraint set.
pub fn compare(constraints: &UserConstraints) -> Result<ComparisonResult, ComparisonError> {
    let evaluations = evaluation::evaluate_all(constraints)?;
    debug!(services = evaluations.len(), "evaluated services");

    let trade_off_analysis = tradeoffs::detect(constraints);
    debug!(
        conflicts = trade_off_analysis.conflicting_constraints.len(),
        warnings = trade_off_analysis.edge_case_warnings.len(),
        "detected trade-offs"
    );

    let contextual_recommendations = explanation::recommend(&evaluations, constraints);
    debug!(
        recommendations = contextual_recommendations.len(),
        "composed recommendations"
    );

    // Single rule set: the result-level warning list mirrors the detector's
    // output rather than re-deriving it from a second, drifting copy.
    let edge_case_warnings = trade_off_analysis.edge_case_warnings.clone();

    let result = ComparisonResult {
        evaluations,
        trade_off_analysis,
        contextual_recommendations,
        edge_case_warnings,
    };

    validate_neutrality(&result)?;
    Ok(result)
}

/// Neutral summary of a comparison without ranking the services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub services_evaluated: usize,
    pub edge_cases_identified: usize,
    pub recommendations_provided: usize,
    pub service_scores: BTreeMap<ServiceKind, evaluation::EvaluationSummary>,
}

/// Summarizes a comparison result without declaring any service superior.
pub fn summarize(result: &ComparisonResult) -> ComparisonSummary {
    ComparisonSummary {
        services_evaluated: result.evaluations.len(),
        edge_cases_identified: result.edge_case_warnings.len(),
        recommendations_provided: result.contextual_recommendations.len(),
        service_scores: evaluation::summarize_evaluations(&result.evaluations),
    }
}

fn validate_neutrality(result: &ComparisonResult) -> Result<(), ComparisonError> {
    if result.evaluations.len() != ServiceKind::COUNT {
        return Err(ComparisonError::NeutralityViolation(format!(
            "expected {} evaluations, got {}",
            ServiceKind::COUNT,
            result.evaluations.len()
        )));
    }
    if result.contextual_recommendations.len() != ServiceKind::COUNT {
        return Err(ComparisonError::NeutralityViolation(format!(
            "expected {} recommendations, got {}",
            ServiceKind::COUNT,
            result.contextual_recommendations.len()
        )));
    }

    let services: Vec<_> = result.evaluations.keys().copied().collect();
    for (i, a) in services.iter().enumerate() {
        for b in &services[i + 1..] {
            let left = &result.evaluations[a];
            let right = &result.evaluations[b];
            if left.service_name == right.service_name
                || left.strengths == right.strengths
                || left.limitations == right.limitations
            {
                return Err(ComparisonError::NeutralityViolation(format!(
                    "evaluations for {} and {} are not distinct",
                    a, b
                )));
            }
        }
    }

    for (service, evaluation) in &result.evaluations {
        if let Some(term) = neutrality::find_forbidden_term(&evaluation.all_text()) {
            return Err(ComparisonError::NeutralityViolation(format!(
                "evaluation for {} contains forbidden term '{}'",
                service, term
            )));
        }
    }

    for (service, recommendation) in &result.contextual_recommendations {
        if let Some(term) = neutrality::find_forbidden_term(recommendation) {
            return Err(ComparisonError::NeutralityViolation(format!(
                "recommendation for {} contains forbidden term '{}'",
                service, term
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ConstraintLevel;

    #[test]
    fn startup_check_passes_on_shipped_tables() {
        assert!(startup_check().is_ok());
    }

    #[test]
    fn compare_yields_three_evaluations_and_three_recommendations() {
        let constraints = UserConstraints::uniform(ConstraintLevel::Medium);
        let result = compare(&constraints).unwrap();
        assert_eq!(result.evaluations.len(), 3);
        assert_eq!(result.contextual_recommendations.len(), 3);
    }

    #[test]
    fn warnings_mirror_the_detector_output() {
        let constraints = UserConstraints::uniform(ConstraintLevel::High);
        let result = compare(&constraints).unwrap();
        assert_eq!(
            result.edge_case_warnings,
            result.trade_off_analysis.edge_case_warnings
        );
    }

    #[test]
    fn winner_language_in_a_recommendation_is_rejected() {
        let constraints = UserConstraints::uniform(ConstraintLevel::Low);
        let mut result = compare(&constraints).unwrap();
        result
            .contextual_recommendations
            .insert(ServiceKind::Lambda, "Lambda is the best choice.".to_string());

        let err = validate_neutrality(&result).unwrap_err();
        assert!(matches!(err, ComparisonError::NeutralityViolation(_)));
        assert!(format!("{}", err).contains("best"));
    }

    #[test]
    fn duplicated_evaluations_are_rejected() {
        let constraints = UserConstraints::uniform(ConstraintLevel::Low);
        let mut result = compare(&constraints).unwrap();
        let ec2 = result.evaluations[&ServiceKind::Ec2].clone();
        result.evaluations.insert(ServiceKind::Lambda, ec2);

        let err = validate_neutrality(&result).unwrap_err();
        assert!(matches!(err, ComparisonError::NeutralityViolation(_)));
    }

    #[test]
    fn missing_recommendation_is_rejected() {
        let constraints = UserConstraints::uniform(ConstraintLevel::Low);
        let mut result = compare(&constraints).unwrap();
        result.contextual_recommendations.remove(&ServiceKind::Ec2);

        let err = validate_neutrality(&result).unwrap_err();
        assert!(format!("{}", err).contains("expected 3 recommendations"));
    }

    #[test]
    fn summarize_counts_without_ranking() {
        let constraints = UserConstraints::uniform(ConstraintLevel::Medium);
        let result = compare(&constraints).unwrap();
        let summary = summarize(&result);

        assert_eq!(summary.services_evaluated, 3);
        assert_eq!(summary.recommendations_provided, 3);
        assert_eq!(summary.service_scores.len(), 3);
    }

    #[test]
    fn result_round_trips_through_json() {
        let constraints = UserConstraints::uniform(ConstraintLevel::High);
        let result = compare(&constraints).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
