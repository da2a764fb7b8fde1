//! Error type shared by the core and the JS bridge

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors that can occur while ingesting landmarks or configuring a session
#[derive(Debug, Clone, PartialEq)]
pub enum HandPoseError {
    /// Wrong number of landmarks (or of flat coordinates)
    InvalidInput { expected: usize, actual: usize },
    /// A landmark coordinate is NaN or infinite
    NonFiniteLandmark { index: usize },
    /// A tracker parameter is out of range
    InvalidConfig(&'static str),
}

impl fmt::Display for HandPoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandPoseError::InvalidInput { expected, actual } => {
                write!(f, "Invalid landmark input: expected {}, got {}", expected, actual)
            }
            HandPoseError::NonFiniteLandmark { index } => {
                write!(f, "Landmark {} has a non-finite coordinate", index)
            }
            HandPoseError::InvalidConfig(reason) => write!(f, "Invalid tracker config: {}", reason),
        }
    }
}

impl std::error::Error for HandPoseError {}

impl From<HandPoseError> for JsValue {
    fn from(err: HandPoseError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = HandPoseError::InvalidInput { expected: 21, actual: 20 };
        assert_eq!(err.to_string(), "Invalid landmark input: expected 21, got 20");
    }
}
