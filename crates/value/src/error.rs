//! Construction-time failures of the value model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid pattern source: {0}")]
    InvalidPattern(String),
    #[error("unknown pattern flag: {0}")]
    UnknownFlag(char),
    #[error("duplicate pattern flag: {0}")]
    DuplicateFlag(char),
}
