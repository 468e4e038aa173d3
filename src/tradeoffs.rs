//! Constraint conflict and trade-off detection.
//!
//! A pure function of the six-field constraint record. The pairwise rules are
//! declarative data evaluated in a fixed order, so both output lists are
//! deterministic for a given constraint set.

use serde::{Deserialize, Serialize};

use crate::constraints::UserConstraints;
use crate::foundation::{ConstraintDimension as Dim, ConstraintLevel, ConstraintLevel as Level};

/// Analysis of trade-offs between services for one constraint set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOffAnalysis {
    pub cost_vs_control: String,
    pub latency_vs_ops_complexity: String,
    pub edge_case_warnings: Vec<String>,
    pub conflicting_constraints: Vec<String>,
}

/// Neutral counts over a trade-off analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOffCounts {
    pub edge_cases_identified: usize,
    pub conflicts_identified: usize,
}

/// A pairwise tension between two constraint dimensions at specific levels.
struct ConflictRule {
    first: (Dim, Level),
    second: (Dim, Level),
    /// When true the rule contributes a "<A> vs <B>" conflict label.
    labels_conflict: bool,
    warning: Option<&'static str>,
}

impl ConflictRule {
    fn triggered_by(&self, constraints: &UserConstraints) -> bool {
        constraints.level(self.first.0) == self.first.1
            && constraints.level(self.second.0) == self.second.1
    }

    fn conflict_label(&self) -> String {
        format!("{} vs {}", self.first.0.label(), self.second.0.label())
    }
}

/// The rule set, in the order rules contribute to both output lists.
const CONFLICT_RULES: [ConflictRule; 6] = [
    ConflictRule {
        first: (Dim::BudgetSensitivity, Level::High),
        second: (Dim::ScalabilityRequirement, Level::High),
        labels_conflict: true,
        warning: Some(
            "Budget-scalability tension: High budget sensitivity with high scalability creates \
             inherent conflict. The trade-off here is between cost control and scaling \
             capabilities. This may be a limitation if both constraints are equally important.",
        ),
    },
    ConflictRule {
        first: (Dim::BudgetSensitivity, Level::High),
        second: (Dim::LatencySensitivity, Level::High),
        labels_conflict: true,
        warning: Some(
            "Cost-performance tension: High budget sensitivity with high latency sensitivity \
             may require careful tuning. The trade-off here is between cost efficiency and \
             performance guarantees.",
        ),
    },
    ConflictRule {
        first: (Dim::TimeToMarketUrgency, Level::High),
        second: (Dim::OperationalOverheadTolerance, Level::High),
        labels_conflict: true,
        warning: None,
    },
    ConflictRule {
        first: (Dim::ExpectedTraffic, Level::High),
        second: (Dim::BudgetSensitivity, Level::High),
        labels_conflict: true,
        warning: None,
    },
    ConflictRule {
        first: (Dim::LatencySensitivity, Level::High),
        second: (Dim::ExpectedTraffic, Level::High),
        labels_conflict: false,
        warning: Some(
            "Performance-scale challenge: High latency sensitivity with high traffic requires \
             careful architecture. This is a good choice when consistent performance is \
             critical, but may require significant infrastructure investment.",
        ),
    },
    ConflictRule {
        first: (Dim::TimeToMarketUrgency, Level::High),
        second: (Dim::OperationalOverheadTolerance, Level::Low),
        labels_conflict: false,
        warning: Some(
            "Speed-simplicity alignment: Fast time-to-market with low operational tolerance \
             strongly favors serverless solutions. This is a good choice when rapid deployment \
             is the priority, though it may limit long-term cost tuning options.",
        ),
    },
];

/// Detects pairwise constraint tensions and renders the trade-off narratives.
///
/// Depends only on the constraint record, never on scores. An empty warning or
/// conflict list is a valid output, not an error.
pub fn detect(constraints: &UserConstraints) -> TradeOffAnalysis {
    let mut edge_case_warnings = Vec::new();
    let mut conflicting_constraints = Vec::new();

    for rule in &CONFLICT_RULES {
        if !rule.triggered_by(constraints) {
            continue;
        }
        if rule.labels_conflict {
            conflicting_constraints.push(rule.conflict_label());
        }
        if let Some(warning) = rule.warning {
            edge_case_warnings.push(warning.to_string());
        }
    }

    TradeOffAnalysis {
        cost_vs_control: cost_vs_control_narrative(constraints),
        latency_vs_ops_complexity: latency_vs_ops_narrative(constraints),
        edge_case_warnings,
        conflicting_constraints,
    }
}

/// Returns neutral counts for a trade-off analysis.
pub fn counts(analysis: &TradeOffAnalysis) -> TradeOffCounts {
    TradeOffCounts {
        edge_cases_identified: analysis.edge_case_warnings.len(),
        conflicts_identified: analysis.conflicting_constraints.len(),
    }
}

fn cost_vs_control_narrative(constraints: &UserConstraints) -> String {
    let mut parts = Vec::new();

    parts.push(
        "EC2 offers the highest level of infrastructure control but requires significant \
         operational investment. This is a good choice when you need specialized hardware, \
         custom OS configurations, or want to reduce costs through reserved instances. \
         The trade-off here is between maximum flexibility and operational complexity.",
    );

    if constraints.budget_sensitivity == ConstraintLevel::High {
        parts.push(
            "Lambda eliminates infrastructure control in exchange for zero operational \
             overhead. This may be a limitation if you need predictable costs at high scale, \
             as Lambda pricing can become expensive with sustained high usage. This is a good \
             choice when operational simplicity outweighs cost predictability.",
        );
    } else {
        parts.push(
            "Lambda trades infrastructure control for operational simplicity. The trade-off \
             here is between hands-off management and cost predictability at scale.",
        );
    }

    parts.push(
        "ECS Fargate provides a middle ground, offering container-level control without \
         server management. This may be a limitation if cost reduction is critical, as \
         Fargate has higher per-unit costs than EC2. This is a good choice when you want \
         container benefits without Kubernetes complexity.",
    );

    parts.join(" ")
}

fn latency_vs_ops_narrative(constraints: &UserConstraints) -> String {
    if constraints.latency_sensitivity == ConstraintLevel::High {
        [
            "High latency sensitivity creates clear trade-offs between performance and \
             operational complexity. EC2 provides the most consistent, low-latency performance \
             but requires extensive operational management including monitoring, patching, and \
             scaling configuration.",
            "Lambda's cold start latency (100-800ms) may be a limitation if consistent low \
             latency is required. The trade-off here is between zero operational overhead and \
             performance predictability.",
            "ECS Fargate offers better latency than Lambda but with some operational \
             complexity. This is a good choice when you need better performance than Lambda \
             but less operational overhead than EC2.",
        ]
        .join(" ")
    } else {
        "With moderate latency requirements, the trade-off shifts toward operational \
         efficiency. Lambda's occasional cold starts become acceptable in exchange for zero \
         infrastructure management. The trade-off here is between peak performance and \
         operational simplicity."
            .to_string()
    }
}
