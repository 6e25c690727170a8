use std::{fmt, io};

/// Errors raised at the boundaries of the crate: terminal I/O, config files
/// and user-typed numbers. Training and evaluation themselves never fail.
#[derive(Debug)]
pub enum PerceptronError {
    /// Reading input or writing output failed.
    Io(io::Error),

    /// A token typed at the prompt is not a floating-point number.
    InvalidNumber {
        /// The offending token, as typed.
        token: String,
    },

    /// A training configuration value is outside its accepted domain.
    InvalidConfig(String),
}

impl fmt::Display for PerceptronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptronError::Io(e) => write!(f, "i/o error: {e}"),
            PerceptronError::InvalidNumber { token } => {
                write!(f, "invalid number: {token:?}")
            }
            PerceptronError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for PerceptronError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PerceptronError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PerceptronError {
    fn from(e: io::Error) -> Self {
        PerceptronError::Io(e)
    }
}
