//! Engine failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EqualError {
    /// No comparison rule applies to the pair and no enabled hook was
    /// informative. Carries the structural tag of the offending value.
    #[error("unsupported object type: {0}")]
    IncomparableType(String),
}
