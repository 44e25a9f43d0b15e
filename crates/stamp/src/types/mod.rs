mod date_pattern;
mod timestamp;

pub use date_pattern::*;
pub use timestamp::*;

use thiserror::Error as ThisError;

///
/// TimeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TimeError {
    #[error("timestamp parse error: {0}")]
    Parse(String),

    #[error("timestamp before epoch")]
    BeforeEpoch,

    #[error("timestamp out of range: {0}")]
    OutOfRange(u64),

    #[error("unknown pattern letter '{letter}' in '{pattern}'")]
    UnknownLetter { pattern: String, letter: char },

    #[error("unterminated quote in pattern '{0}'")]
    UnterminatedQuote(String),
}
