//! Template-based explanation composer.
//!
//! Composition is table-driven: each service has a static narrative table of
//! level-conditioned fragments iterated in a fixed dimension order, plus one
//! mandatory closing trade-off sentence. Fragments are joined with single
//! spaces; no fragment may contain winner language.

use std::collections::BTreeMap;

use crate::constraints::UserConstraints;
use crate::evaluation::ServiceEvaluation;
use crate::foundation::{ConstraintDimension as Dim, ConstraintLevel, ServiceKind};
use crate::tradeoffs::TradeOffAnalysis;

/// The three sentence openers at least one of which every recommendation
/// (and every non-empty warning) must contain.
pub const CANONICAL_PHRASES: [&str; 3] = [
    "This is a good choice when",
    "This may be a limitation if",
    "The trade-off here is",
];

/// Returns true if `text` contains at least one canonical phrase,
/// case-insensitively.
pub fn contains_canonical_phrase(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CANONICAL_PHRASES
        .iter()
        .any(|phrase| lowered.contains(&phrase.to_lowercase()))
}

/// Level-conditioned narrative fragments for one constraint dimension.
struct FragmentRow {
    dimension: Dim,
    low: Option<&'static str>,
    medium: Option<&'static str>,
    high: Option<&'static str>,
}

impl FragmentRow {
    fn fragment(&self, level: ConstraintLevel) -> Option<&'static str> {
        match level {
            ConstraintLevel::Low => self.low,
            ConstraintLevel::Medium => self.medium,
            ConstraintLevel::High => self.high,
        }
    }
}

/// Static narrative table for one service.
struct NarrativeTable {
    opening: Option<&'static str>,
    rows: &'static [FragmentRow],
    closing: &'static str,
}

const EC2_TABLE: NarrativeTable = NarrativeTable {
    opening: None,
    rows: &[
        FragmentRow {
            dimension: Dim::BudgetSensitivity,
            low: Some(
                "EC2 is a good choice when cost is not the primary concern and you can \
                 prioritize performance and control over cost reduction.",
            ),
            medium: Some(
                "EC2 is a good choice when you want balanced cost control with the \
                 flexibility to tune spend through instance types and pricing models.",
            ),
            high: Some(
                "EC2 is a good choice when cost reduction is critical and you can commit to \
                 reserved instances or spot instances for significant savings.",
            ),
        },
        FragmentRow {
            dimension: Dim::LatencySensitivity,
            low: None,
            medium: Some(
                "EC2 provides reliable performance for applications with moderate latency \
                 requirements.",
            ),
            high: Some(
                "This is a good choice when consistent, predictable performance is required \
                 without cold starts or provisioning delays.",
            ),
        },
        FragmentRow {
            dimension: Dim::OperationalOverheadTolerance,
            low: Some(
                "This may be a limitation if your team prefers hands-off infrastructure \
                 management or lacks expertise in server administration, monitoring, and \
                 scaling configuration.",
            ),
            medium: None,
            high: Some(
                "EC2 is a good choice when your team has strong infrastructure expertise \
                 and wants maximum control over the runtime environment.",
            ),
        },
        FragmentRow {
            dimension: Dim::TimeToMarketUrgency,
            low: None,
            medium: Some(
                "EC2 requires moderate setup time but provides long-term flexibility for \
                 evolving requirements.",
            ),
            high: Some(
                "This may be a limitation if rapid deployment is critical, as EC2 requires \
                 more setup time and configuration compared to serverless options.",
            ),
        },
        FragmentRow {
            dimension: Dim::ExpectedTraffic,
            low: None,
            medium: None,
            high: Some(
                "EC2 is a good choice when you have high, consistent traffic that can \
                 benefit from dedicated resources and lower unit costs at scale.",
            ),
        },
    ],
    closing: "The trade-off here is between maximum infrastructure control and operational \
              complexity. EC2 provides the most flexibility but requires the highest \
              operational investment.",
};

const LAMBDA_TABLE: NarrativeTable = NarrativeTable {
    opening: None,
    rows: &[
        FragmentRow {
            dimension: Dim::OperationalOverheadTolerance,
            low: Some(
                "Lambda is a good choice when you want zero infrastructure management and \
                 can focus purely on business logic without server concerns.",
            ),
            medium: Some(
                "Lambda is a good choice when you prefer minimal operational overhead while \
                 maintaining some flexibility in your architecture.",
            ),
            high: None,
        },
        FragmentRow {
            dimension: Dim::TimeToMarketUrgency,
            low: None,
            medium: Some(
                "Lambda enables faster development cycles compared to traditional \
                 infrastructure approaches.",
            ),
            high: Some(
                "This is a good choice when rapid prototyping and deployment are \
                 priorities, allowing immediate focus on application development.",
            ),
        },
        FragmentRow {
            dimension: Dim::ExpectedTraffic,
            low: Some(
                "Lambda is a good choice when traffic is low or highly variable, as you pay \
                 only for actual execution time with automatic scaling from zero.",
            ),
            medium: Some(
                "Lambda handles moderate traffic well with automatic scaling, though costs \
                 should be monitored.",
            ),
            high: Some(
                "Lambda can handle high traffic but cost implications should be carefully \
                 evaluated.",
            ),
        },
        FragmentRow {
            dimension: Dim::LatencySensitivity,
            low: None,
            medium: Some(
                "Lambda's occasional cold starts may be acceptable for applications with \
                 moderate latency requirements.",
            ),
            high: Some(
                "This may be a limitation if consistent low latency is critical, as Lambda \
                 cold starts can introduce 100-800ms delays for new execution environments.",
            ),
        },
        FragmentRow {
            dimension: Dim::BudgetSensitivity,
            low: None,
            medium: None,
            high: Some(
                "Lambda can be cost-effective for variable workloads but requires \
                 monitoring to avoid unexpected costs. This may be a limitation if \
                 sustained high traffic meets tight budget constraints, as Lambda costs can \
                 become significant at scale.",
            ),
        },
    ],
    closing: "The trade-off here is between operational simplicity and performance \
              predictability. Lambda eliminates infrastructure concerns but introduces cold \
              start latency and potential cost scaling challenges.",
};

const FARGATE_TABLE: NarrativeTable = NarrativeTable {
    opening: Some(
        "ECS Fargate is a good choice when you want container benefits without managing \
         Kubernetes clusters or EC2 instances, providing a middle ground between control \
         and convenience.",
    ),
    rows: &[
        FragmentRow {
            dimension: Dim::ScalabilityRequirement,
            low: None,
            medium: None,
            high: Some(
                "This is a good choice when you need automatic container scaling without \
                 the complexity of cluster management or the limitations of Lambda's \
                 execution model.",
            ),
        },
        FragmentRow {
            dimension: Dim::OperationalOverheadTolerance,
            low: None,
            medium: Some(
                "Fargate is a good choice when you want more control than Lambda but less \
                 operational overhead than EC2, especially for containerized microservices.",
            ),
            high: Some(
                "This may be a limitation if you want maximum infrastructure control or \
                 need custom OS configurations that aren't available in the managed \
                 container environment.",
            ),
        },
        FragmentRow {
            dimension: Dim::BudgetSensitivity,
            low: None,
            medium: None,
            high: Some(
                "This may be a limitation if cost reduction is critical, as Fargate has \
                 higher per-unit costs than EC2 and doesn't support spot instance pricing.",
            ),
        },
    ],
    closing: "The trade-off here is between container convenience and cost efficiency. \
              Fargate simplifies container orchestration but at a premium compared to \
              self-managed EC2 instances.",
};

fn narrative_table(service: ServiceKind) -> &'static NarrativeTable {
    match service {
        ServiceKind::Ec2 => &EC2_TABLE,
        ServiceKind::Lambda => &LAMBDA_TABLE,
        ServiceKind::EcsFargate => &FARGATE_TABLE,
    }
}

fn compose(service: ServiceKind, constraints: &UserConstraints) -> String {
    let table = narrative_table(service);
    let mut parts = Vec::new();

    if let Some(opening) = table.opening {
        parts.push(opening);
    }
    for row in table.rows {
        if let Some(fragment) = row.fragment(constraints.level(row.dimension)) {
            parts.push(fragment);
        }
    }
    parts.push(table.closing);

    parts.join(" ")
}

/// Generates one contextual recommendation per evaluated service.
///
/// Every entry is non-empty and carries at least one canonical phrase; the
/// closing trade-off sentence guarantees this even when no dimension fragment
/// applies.
pub fn recommend(
    evaluations: &BTreeMap<ServiceKind, ServiceEvaluation>,
    constraints: &UserConstraints,
) -> BTreeMap<ServiceKind, String> {
    evaluations
        .keys()
        .map(|service| (*service, compose(*service, constraints)))
        .collect()
}

/// Renders a trade-off analysis into display-ready text.
pub fn summarize(analysis: &TradeOffAnalysis) -> BTreeMap<String, String> {
    let edge_case_summary = if analysis.edge_case_warnings.is_empty() {
        "No significant edge cases detected with the current constraint combination."
            .to_string()
    } else {
        let mut parts = vec!["Edge cases identified:".to_string()];
        parts.extend(analysis.edge_case_warnings.iter().cloned());
        parts.join(" ")
    };

    let conflict_summary = if analysis.conflicting_constraints.is_empty() {
        "No major constraint conflicts detected.".to_string()
    } else {
        format!(
            "Conflicting constraints detected: {}. The trade-off here is between competing \
             priorities that may require compromise or careful architecture decisions.",
            analysis.conflicting_constraints.join(", ")
        )
    };

    let mut summary = BTreeMap::new();
    summary.insert("cost_vs_control".to_string(), analysis.cost_vs_control.clone());
    summary.insert(
        "latency_vs_ops_complexity".to_string(),
        analysis.latency_vs_ops_complexity.clone(),
    );
    summary.insert("edge_case_summary".to_string(), edge_case_summary);
    summary.insert("conflict_summary".to_string(), conflict_summary);
    summary
}

/// Counts how often each canonical phrase appears across recommendations.
pub fn phrase_usage_stats(
    recommendations: &BTreeMap<ServiceKind, String>,
) -> BTreeMap<&'static str, usize> {
    let mut stats: BTreeMap<&'static str, usize> =
        CANONICAL_PHRASES.iter().map(|p| (*p, 0)).collect();

    for text in recommendations.values() {
        let lowered = text.to_lowercase();
        for phrase in CANONICAL_PHRASES {
            if lowered.contains(&phrase.to_lowercase()) {
                if let Some(count) = stats.get_mut(phrase) {
                    *count += 1;
                }
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation;
    use crate::neutrality;
    use crate::tradeoffs;

    fn recommendations_for(constraints: &UserConstraints) -> BTreeMap<ServiceKind, String> {
        let evaluations = evaluation::evaluate_all(constraints).unwrap();
        recommend(&evaluations, constraints)
    }

    #[test]
    fn every_service_gets_a_non_empty_recommendation() {
        let constraints = UserConstraints::uniform(ConstraintLevel::Medium);
        let recommendations = recommendations_for(&constraints);
        assert_eq!(recommendations.len(), ServiceKind::COUNT);
        for text in recommendations.values() {
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn every_recommendation_contains_a_canonical_phrase() {
        for level in ConstraintLevel::ALL {
            let constraints = UserConstraints::uniform(level);
            for text in recommendations_for(&constraints).values() {
                assert!(contains_canonical_phrase(text), "missing phrase in: {}", text);
            }
        }
    }

    #[test]
    fn recommendations_never_contain_winner_language() {
        for level in ConstraintLevel::ALL {
            let constraints = UserConstraints::uniform(level);
            for text in recommendations_for(&constraints).values() {
                assert!(neutrality::is_neutral(text), "winner language in: {}", text);
            }
        }
    }

    #[test]
    fn fragments_follow_the_constraint_levels() {
        let mut constraints = UserConstraints::uniform(ConstraintLevel::Medium);
        constraints.latency_sensitivity = ConstraintLevel::High;

        let recommendations = recommendations_for(&constraints);
        let lambda = &recommendations[&ServiceKind::Lambda];
        assert!(lambda.contains("cold starts can introduce 100-800ms delays"));

        let ec2 = &recommendations[&ServiceKind::Ec2];
        assert!(ec2.contains("without cold starts or provisioning delays"));
    }

    #[test]
    fn closing_sentence_is_always_last() {
        let constraints = UserConstraints::uniform(ConstraintLevel::Low);
        let recommendations = recommendations_for(&constraints);
        assert!(recommendations[&ServiceKind::Ec2]
            .ends_with("requires the highest operational investment."));
        assert!(recommendations[&ServiceKind::EcsFargate]
            .ends_with("self-managed EC2 instances."));
    }

    #[test]
    fn summarize_uses_default_text_when_lists_are_empty() {
        let analysis = tradeoffs::detect(&UserConstraints::uniform(ConstraintLevel::Medium));
        let summary = summarize(&analysis);
        assert_eq!(
            summary["edge_case_summary"],
            "No significant edge cases detected with the current constraint combination."
        );
        assert_eq!(
            summary["conflict_summary"],
            "No major constraint conflicts detected."
        );
        assert_eq!(summary["cost_vs_control"], analysis.cost_vs_control);
        assert_eq!(
            summary["latency_vs_ops_complexity"],
            analysis.latency_vs_ops_complexity
        );
    }

    #[test]
    fn summarize_enumerates_conflicts_when_present() {
        let analysis = tradeoffs::detect(&UserConstraints::uniform(ConstraintLevel::High));
        let summary = summarize(&analysis);
        assert!(summary["conflict_summary"].starts_with("Conflicting constraints detected:"));
        assert!(summary["conflict_summary"]
            .contains("Budget sensitivity vs Scalability requirement"));
        assert!(summary["conflict_summary"].contains("The trade-off here is"));
        assert!(summary["edge_case_summary"].starts_with("Edge cases identified:"));
    }

    #[test]
    fn phrase_stats_count_each_recommendation_once_per_phrase() {
        let constraints = UserConstraints::uniform(ConstraintLevel::Medium);
        let recommendations = recommendations_for(&constraints);
        let stats = phrase_usage_stats(&recommendations);

        assert_eq!(stats.len(), 3);
        // Every recommendation ends with a closing trade-off sentence.
        assert_eq!(stats["The trade-off here is"], 3);
    }

    #[test]
    fn all_static_fragments_are_neutral() {
        for service in ServiceKind::ALL {
            let table = narrative_table(service);
            let mut texts: Vec<&str> = vec![table.closing];
            if let Some(opening) = table.opening {
                texts.push(opening);
            }
            for row in table.rows {
                texts.extend([row.low, row.medium, row.high].into_iter().flatten());
            }
            for text in texts {
                assert!(neutrality::is_neutral(text), "winner language in: {}", text);
            }
        }
    }
}
