//! Independent per-service evaluation against a constraint set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog;
use crate::constraints::UserConstraints;
use crate::foundation::{ConstraintDimension, Score, ServiceKind};
use crate::scoring::{self, ScoringError};

/// Evaluation results for a single service.
///
/// Carries owned copies of the catalog lists rather than references, so later
/// filtering or mutation by a caller can never corrupt the canonical data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEvaluation {
    pub service_name: String,
    pub constraint_scores: BTreeMap<ConstraintDimension, Score>,
    pub strengths: Vec<String>,
    pub limitations: Vec<String>,
    pub best_use_cases: Vec<String>,
}

impl ServiceEvaluation {
    /// Concatenates all descriptive text for neutrality scanning.
    pub fn all_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.service_name,
            self.strengths.join(" "),
            self.limitations.join(" "),
            self.best_use_cases.join(" ")
        )
    }
}

/// Neutral per-service score summary (no ranking between services).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub average_score: f64,
    pub score_count: usize,
    pub min_score: u8,
    pub max_score: u8,
}

/// Evaluates a single service against the constraints.
///
/// Reads only this service's catalog entry and score rows; no cross-service
/// state is consulted, so the result is independent of any other evaluation.
pub fn evaluate_one(
    service: ServiceKind,
    constraints: &UserConstraints,
) -> Result<ServiceEvaluation, ScoringError> {
    let characteristics = catalog::characteristics(service);
    let constraint_scores = scoring::all_scores(service, constraints)?;

    Ok(ServiceEvaluation {
        service_name: characteristics.name.clone(),
        constraint_scores,
        strengths: characteristics.strengths.clone(),
        limitations: characteristics.limitations.clone(),
        best_use_cases: characteristics.best_use_cases.clone(),
    })
}

/// Evaluates all three services independently.
pub fn evaluate_all(
    constraints: &UserConstraints,
) -> Result<BTreeMap<ServiceKind, ServiceEvaluation>, ScoringError> {
    let mut evaluations = BTreeMap::new();
    for service in ServiceKind::ALL {
        evaluations.insert(service, evaluate_one(service, constraints)?);
    }
    Ok(evaluations)
}

/// Summarizes each evaluation's scores without ordering the services.
pub fn summarize_evaluations(
    evaluations: &BTreeMap<ServiceKind, ServiceEvaluation>,
) -> BTreeMap<ServiceKind, EvaluationSummary> {
    evaluations
        .iter()
        .map(|(service, evaluation)| {
            let values: Vec<u8> = evaluation
                .constraint_scores
                .values()
                .map(|s| s.value())
                .collect();
            let total: u32 = values.iter().map(|v| u32::from(*v)).sum();
            let summary = EvaluationSummary {
                average_score: f64::from(total) / values.len() as f64,
                score_count: values.len(),
                min_score: values.iter().copied().min().unwrap_or(0),
                max_score: values.iter().copied().max().unwrap_or(0),
            };
            (*service, summary)
        })
        .collect()
}
