//! Error types and failure classification for the estimator crate.
//!
//! This module provides:
//! - [`EstimateError`]: The error enum returned by every fallible operation
//! - [`FailureKind`]: The taxonomy used when an error is collapsed to a default

mod kind;

pub use kind::FailureKind;

use thiserror::Error;

/// Errors that can occur while assembling an estimate.
///
/// None of these reach the caller of [`FundEstimator::estimate`](crate::FundEstimator::estimate).
/// They are returned by the `try_*` operations and logged when the
/// component falls back to its default.
#[derive(Error, Debug)]
pub enum EstimateError {
    /// The call did not finish within its time bound.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// Connection failure or non-success HTTP status.
    #[error("Network error: {provider} - {message}")]
    Network {
        /// The provider that failed
        provider: String,
        /// Description of the failure
        message: String,
    },

    /// A response arrived but could not be interpreted.
    #[error("Parse error: {provider} - {message}")]
    Parse {
        /// The provider whose response was malformed
        provider: String,
        /// Description of the malformed part
        message: String,
    },

    /// The query succeeded but returned no usable rows.
    #[error("No data: {0}")]
    NoData(String),

    /// Static configuration could not be loaded.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EstimateError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fundest_estimator::errors::{EstimateError, FailureKind};
    ///
    /// let error = EstimateError::Timeout { provider: "TENCENT".to_string() };
    /// assert_eq!(error.kind(), FailureKind::NetworkFailure);
    ///
    /// let error = EstimateError::NoData("005827".to_string());
    /// assert_eq!(error.kind(), FailureKind::NoDataFound);
    /// ```
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => FailureKind::NetworkFailure,
            Self::Parse { .. } => FailureKind::ParseFailure,
            Self::NoData(_) => FailureKind::NoDataFound,
            Self::Config(_) => FailureKind::Configuration,
        }
    }

    /// Build a network error from a reqwest failure, keeping timeouts distinct.
    pub(crate) fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }

    pub(crate) fn parse(provider: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}
