//! Error types for PetFriends harness operations.
//!
//! Remote rejections (403, 404, validation failures) are *not* errors here:
//! the client hands them back as [`ApiResponse`](crate::ApiResponse) values
//! so scenarios can assert on them. [`PetFriendsError`] covers everything
//! that prevents a call or a scenario from producing such a value:
//!
//! - Configuration errors (missing credentials, malformed base URL)
//! - Local preconditions (missing fixture files, setup that could not complete)
//! - Transport failures (connection refused, timeouts, unreadable bodies)
//! - Assertion mismatches raised by scenarios
//!
//! # Example
//!
//! ```rust
//! use petfriends_api::{PetFriendsError, error::ErrorCategory};
//!
//! let err = PetFriendsError::fixture_not_found("tests/images/missing.jpg");
//! assert_eq!(err.category(), ErrorCategory::Precondition);
//! ```

use crate::logging::{log_error, log_warn};
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors, used by the scenario runner to
/// classify a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Settings are missing or malformed. Fix the environment and rerun.
    Configuration,

    /// A local precondition did not hold (fixture file, setup step).
    ///
    /// Reported distinctly from remote behaviour: the service was never
    /// asked the question the scenario is about.
    Precondition,

    /// The request could not be completed or its response could not be read.
    Transport,

    /// The service answered, but not the way the scenario expects.
    Assertion,
}

/// Severity level for logging decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The harness cannot run at all.
    Error,

    /// A single scenario could not run or could not be judged.
    Warning,

    /// Expected outcome of a verification run (a failed assertion).
    Info,
}

// ============================================================================
// PetFriends error types
// ============================================================================

/// Convenient result type for harness operations.
pub type PetFriendsResult<T> = std::result::Result<T, PetFriendsError>;

/// Errors that can occur while talking to the PetFriends service or running
/// a scenario against it.
///
/// Use the constructor methods, which log the error at creation:
///
/// ```rust
/// use petfriends_api::PetFriendsError;
///
/// let err = PetFriendsError::configuration_error("PETFRIENDS_EMAIL is not set");
/// let err = PetFriendsError::assertion_failed("expected status 403, got 200");
/// ```
///
/// | Variant | Category |
/// |---------|----------|
/// | `ConfigurationError` | Configuration |
/// | `InvalidHeader` | Configuration |
/// | `FixtureNotFound` | Precondition |
/// | `SetupFailed` | Precondition |
/// | `RequestFailed` | Transport |
/// | `ResponseParsingError` | Transport |
/// | `AssertionFailed` | Assertion |
#[derive(Error, Debug)]
pub enum PetFriendsError {
    /// Harness configuration is invalid or incomplete.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// A value could not be encoded as an HTTP header.
    ///
    /// Credentials and auth keys travel in headers, so they must be
    /// visible ASCII.
    #[error("Invalid value for header '{header}': {message}")]
    InvalidHeader {
        /// Name of the header being built.
        header: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A local fixture file does not exist.
    #[error("Fixture file {} not found", path.display())]
    FixtureNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// A scenario could not complete its arrange step.
    #[error("Scenario setup failed: {message}")]
    SetupFailed {
        /// What the setup step was trying to do.
        message: String,
    },

    /// The HTTP request could not be completed.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A response body did not have the expected shape.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// The service responded differently from what the scenario asserts.
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Expected versus actual.
        message: String,
    },
}

impl PetFriendsError {
    /// Get the error category for outcome classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Configuration,
            Self::InvalidHeader { .. } => ErrorCategory::Configuration,
            Self::FixtureNotFound { .. } => ErrorCategory::Precondition,
            Self::SetupFailed { .. } => ErrorCategory::Precondition,
            Self::RequestFailed { .. } => ErrorCategory::Transport,
            Self::ResponseParsingError { .. } => ErrorCategory::Transport,
            Self::AssertionFailed { .. } => ErrorCategory::Assertion,
        }
    }

    /// Get the error severity for logging.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::InvalidHeader { .. } => ErrorSeverity::Error,
            Self::FixtureNotFound { .. } => ErrorSeverity::Error,
            Self::SetupFailed { .. } => ErrorSeverity::Warning,
            Self::RequestFailed { .. } => ErrorSeverity::Warning,
            Self::ResponseParsingError { .. } => ErrorSeverity::Warning,
            Self::AssertionFailed { .. } => ErrorSeverity::Info,
        }
    }

    /// Whether the failure is local to this machine rather than caused by
    /// the remote service.
    pub fn is_local(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Configuration | ErrorCategory::Precondition
        )
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "PetFriends configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn invalid_header(header: impl Into<String>, message: impl Into<String>) -> Self {
        let header = header.into();
        let message = message.into();
        log_error!(
            error_type = "invalid_header",
            header = %header,
            message = %message,
            "Header value cannot be encoded"
        );
        Self::InvalidHeader { header, message }
    }

    pub fn fixture_not_found(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        log_error!(
            error_type = "fixture_not_found",
            path = %path.display(),
            "Fixture file is missing"
        );
        Self::FixtureNotFound { path }
    }

    pub fn setup_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "setup_failed",
            message = %message,
            "Scenario setup could not complete"
        );
        Self::SetupFailed { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "PetFriends request failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "PetFriends response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    /// Assertion mismatches are an expected outcome of a verification run,
    /// so they are not logged here; the runner reports them.
    pub fn assertion_failed(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }
}
