//! .
//!
//! Every fallible operation of the crate returns [`Result`]. Validation failures are
//! reported immediately, there is no partial output.

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// A domain violation: too few sides, non-positive radius, empty figure, etc.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  /// The projected number of shapes is above the configured ceiling.
  #[error("resource limit exceeded: {count} shapes requested, limit is {limit}")]
  ResourceLimitExceeded {
    count: u64,
    limit: u64
  },
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[cfg(feature = "image")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for an early `InvalidArgument` return.
macro_rules! invalid_argument {
  ($($arg: tt)*) => {
    return Err($crate::error::Error::InvalidArgument(format!($($arg)*)))
  }
}
pub(crate) use invalid_argument;
