//! Score value object for constraint fit (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Constraint fit score: 1 (poor fit) to 5 (strong fit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a Score from an integer, returning an error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        if (Score::MIN..=Score::MAX).contains(&value) {
            Ok(Score(value))
        } else {
            Err(ValidationError::out_of_range(
                "score",
                Score::MIN as i32,
                Score::MAX as i32,
                value as i32,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Score::try_from_u8(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_u8_accepts_valid_range() {
        for value in 1..=5 {
            assert_eq!(Score::try_from_u8(value).unwrap().value(), value);
        }
    }

    #[test]
    fn try_from_u8_rejects_out_of_range() {
        assert!(Score::try_from_u8(0).is_err());
        assert!(Score::try_from_u8(6).is_err());
        assert!(Score::try_from_u8(255).is_err());
    }

    #[test]
    fn serializes_as_plain_integer() {
        let score = Score::try_from_u8(4).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "4");
    }

    #[test]
    fn deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<Score>("0").is_err());
        assert!(serde_json::from_str::<Score>("6").is_err());
        assert_eq!(serde_json::from_str::<Score>("3").unwrap().value(), 3);
    }

    #[test]
    fn displays_out_of_five() {
        assert_eq!(format!("{}", Score::try_from_u8(2).unwrap()), "2/5");
    }
}
