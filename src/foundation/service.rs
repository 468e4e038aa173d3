//! Service identifiers for the three compared compute offerings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fixed compute services being compared.
///
/// The set is closed and never extended at runtime; every comparison result
/// contains exactly one entry per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    #[serde(rename = "EC2")]
    Ec2,
    #[serde(rename = "Lambda")]
    Lambda,
    #[serde(rename = "ECS_Fargate")]
    EcsFargate,
}

impl ServiceKind {
    /// All services in canonical order.
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::Ec2,
        ServiceKind::Lambda,
        ServiceKind::EcsFargate,
    ];

    /// Number of compared services. Anchors the exactly-three invariants.
    pub const COUNT: usize = ServiceKind::ALL.len();

    /// Returns the stable identifier used as a map key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Ec2 => "EC2",
            ServiceKind::Lambda => "Lambda",
            ServiceKind::EcsFargate => "ECS_Fargate",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_three() {
        assert_eq!(ServiceKind::COUNT, 3);
    }

    #[test]
    fn identifiers_are_stable() {
        assert_eq!(ServiceKind::Ec2.as_str(), "EC2");
        assert_eq!(ServiceKind::Lambda.as_str(), "Lambda");
        assert_eq!(ServiceKind::EcsFargate.as_str(), "ECS_Fargate");
    }

    #[test]
    fn serializes_to_stable_identifier() {
        assert_eq!(
            serde_json::to_string(&ServiceKind::EcsFargate).unwrap(),
            "\"ECS_Fargate\""
        );
    }

    #[test]
    fn deserializes_from_stable_identifier() {
        let kind: ServiceKind = serde_json::from_str("\"Lambda\"").unwrap();
        assert_eq!(kind, ServiceKind::Lambda);
    }
}
