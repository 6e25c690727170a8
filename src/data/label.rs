use serde::{Serialize, Deserialize};
use std::fmt;

/// Binary class produced by the hard limiter and carried by training samples.
///
/// Serialized as the bare integer `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    Zero,
    One,
}

impl Label {
    /// Numeric value used by the learning rule (`label - predicted`).
    pub fn as_f64(self) -> f64 {
        match self {
            Label::Zero => 0.0,
            Label::One => 1.0,
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> u8 {
        match label {
            Label::Zero => 0,
            Label::One => 1,
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Zero),
            1 => Ok(Label::One),
            other => Err(format!("label must be 0 or 1, got {other}")),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Label::One).unwrap(), "1");
        let zero: Label = serde_json::from_str("0").unwrap();
        assert_eq!(zero, Label::Zero);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(serde_json::from_str::<Label>("2").is_err());
        assert!(Label::try_from(7).is_err());
    }

    #[test]
    fn difference_of_labels_is_the_error_signal() {
        assert_eq!(Label::One.as_f64() - Label::Zero.as_f64(), 1.0);
        assert_eq!(Label::Zero.as_f64() - Label::One.as_f64(), -1.0);
        assert_eq!(Label::One.as_f64() - Label::One.as_f64(), 0.0);
    }
}
