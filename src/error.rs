use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the classifier core.
///
/// Every public operation validates its arguments before doing any work and
/// fails atomically; there are no partial results and nothing is ever
/// silently clamped into range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
