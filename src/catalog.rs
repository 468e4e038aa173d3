//! Static catalog of service characteristics.
//!
//! The catalog is pure data: constructed once at first access, read-only for
//! the remainder of the process lifetime, and safe to share across threads.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::foundation::ServiceKind;

/// Static characteristics of a compute service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCharacteristics {
    pub name: String,
    pub strengths: Vec<String>,
    pub limitations: Vec<String>,
    pub best_use_cases: Vec<String>,
    pub cost_model: String,
    pub scaling_characteristics: String,
    pub operational_overhead: String,
}

static CATALOG: Lazy<BTreeMap<ServiceKind, ServiceCharacteristics>> = Lazy::new(|| {
    let mut services = BTreeMap::new();

    services.insert(
        ServiceKind::Ec2,
        ServiceCharacteristics {
            name: "AWS EC2".to_string(),
            strengths: vec![
                "Full control over infrastructure and OS".to_string(),
                "Cost reduction potential with reserved instances".to_string(),
                "Performance tuning capabilities".to_string(),
                "Support for specialized hardware (GPU, high-memory)".to_string(),
                "No vendor lock-in for application code".to_string(),
                "Mature ecosystem and tooling".to_string(),
            ],
            limitations: vec![
                "High operational overhead (patching, monitoring, scaling)".to_string(),
                "Slower provisioning and scaling compared to serverless".to_string(),
                "Requires infrastructure expertise".to_string(),
                "Manual capacity planning needed".to_string(),
                "Responsibility for security and maintenance".to_string(),
            ],
            best_use_cases: vec![
                "Legacy systems requiring specific OS configurations".to_string(),
                "Applications needing specialized hardware".to_string(),
                "Long-running, predictable workloads".to_string(),
                "Teams with strong infrastructure capabilities".to_string(),
                "Cost-sensitive applications with predictable usage".to_string(),
            ],
            cost_model: "Pay for compute time, potential savings with reserved instances"
                .to_string(),
            scaling_characteristics: "Manual or auto-scaling, slower response time".to_string(),
            operational_overhead: "High - full infrastructure management required".to_string(),
        },
    );

    services.insert(
        ServiceKind::Lambda,
        ServiceCharacteristics {
            name: "AWS Lambda".to_string(),
            strengths: vec![
                "Zero infrastructure management".to_string(),
                "Automatic scaling from zero to thousands".to_string(),
                "Pay only for actual execution time".to_string(),
                "Fast prototyping and development".to_string(),
                "Built-in high availability".to_string(),
                "Event-driven architecture support".to_string(),
            ],
            limitations: vec![
                "Cold start latency (100-800ms for most runtimes)".to_string(),
                "15-minute maximum execution time".to_string(),
                "Vendor lock-in with AWS-specific APIs".to_string(),
                "Cost can scale unpredictably with high usage".to_string(),
                "Limited runtime environment control".to_string(),
                "Debugging complexity in distributed systems".to_string(),
            ],
            best_use_cases: vec![
                "Event-driven processing (S3, DynamoDB triggers)".to_string(),
                "Low-traffic web APIs and microservices".to_string(),
                "Scheduled tasks and cron jobs".to_string(),
                "Rapid prototyping and MVPs".to_string(),
                "Teams wanting zero infrastructure management".to_string(),
            ],
            cost_model: "Pay per request and execution time, can become expensive at scale"
                .to_string(),
            scaling_characteristics: "Instant automatic scaling, handles traffic spikes well"
                .to_string(),
            operational_overhead: "Very low - AWS manages all infrastructure".to_string(),
        },
    );

    services.insert(
        ServiceKind::EcsFargate,
        ServiceCharacteristics {
            name: "AWS ECS Fargate".to_string(),
            strengths: vec![
                "Container benefits without cluster management".to_string(),
                "Faster provisioning than EC2".to_string(),
                "No server management required".to_string(),
                "Good for microservices architecture".to_string(),
                "Integrated with AWS ecosystem".to_string(),
                "Predictable pricing model".to_string(),
            ],
            limitations: vec![
                "Higher per-unit cost than EC2".to_string(),
                "Limited runtime control compared to EC2".to_string(),
                "No support for spot instances".to_string(),
                "Less flexibility than self-managed containers".to_string(),
                "Still requires container expertise".to_string(),
                "Slower cold starts than Lambda".to_string(),
            ],
            best_use_cases: vec![
                "Containerized web applications".to_string(),
                "Microservices without Kubernetes complexity".to_string(),
                "Teams familiar with containers but not infrastructure".to_string(),
                "Applications requiring more control than Lambda".to_string(),
                "Batch processing jobs".to_string(),
            ],
            cost_model: "Pay for allocated CPU and memory, higher than EC2 per unit".to_string(),
            scaling_characteristics:
                "Automatic scaling, faster than EC2 but slower than Lambda".to_string(),
            operational_overhead: "Medium - container management without server management"
                .to_string(),
        },
    );

    services
});

/// Returns the static characteristics for a service.
pub fn characteristics(service: ServiceKind) -> &'static ServiceCharacteristics {
    // The catalog carries one entry per ServiceKind variant by construction.
    &CATALOG[&service]
}

/// Returns the stable identifiers of all catalogued services.
pub fn service_identifiers() -> Vec<&'static str> {
    ServiceKind::ALL.iter().map(|s| s.as_str()).collect()
}

/// Returns the human-readable names of all catalogued services.
pub fn service_names() -> Vec<&'static str> {
    ServiceKind::ALL
        .iter()
        .map(|s| characteristics(*s).name.as_str())
        .collect()
}
