//! Cloud Service Referee - Educational Decision Support Core
//!
//! Scores three fixed AWS compute services (EC2, Lambda, ECS Fargate) against
//! six user-rated constraint dimensions using static rule tables, then renders
//! plain-English trade-off narratives without ever declaring a winner.

pub mod catalog;
pub mod comparison;
pub mod constraints;
pub mod evaluation;
pub mod explanation;
pub mod foundation;
pub mod neutrality;
pub mod scoring;
pub mod tradeoffs;

pub use comparison::{compare, ComparisonError, ComparisonResult};
pub use constraints::UserConstraints;
pub use foundation::{ConstraintDimension, ConstraintLevel, Score, ServiceKind};
