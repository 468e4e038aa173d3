//! Shared domain primitives: value objects, closed enums, and validation errors.

mod dimension;
mod errors;
mod level;
mod score;
mod service;

pub use dimension::ConstraintDimension;
pub use errors::ValidationError;
pub use level::ConstraintLevel;
pub use score::Score;
pub use service::ServiceKind;
