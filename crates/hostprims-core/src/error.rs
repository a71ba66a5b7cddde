//! Error types for hostprims operations.
//!
//! One canonical error type, [`HostprimsError`], shared by both crates.
//!
//! The taxonomy separates three situations a caller must be able to tell
//! apart:
//! - [`NotSupported`](HostprimsError::NotSupported) - the capability was
//!   never composed for the classified platform (structural absence);
//! - [`CommandFailed`](HostprimsError::CommandFailed) - the capability is
//!   present but its external tool could not be run;
//! - [`Unavailable`](HostprimsError::Unavailable) - the tool ran, but its
//!   output was not in a recognizable shape.
//!
//! Classification itself never produces an error: unmatched input
//! degrades to the `unknown` identifiers.

use std::io;
use thiserror::Error;

// ============================================================================
// Canonical Error Type
// ============================================================================

/// Canonical error type for all hostprims operations.
#[derive(Debug, Error)]
pub enum HostprimsError {
    /// Capability not composed for the classified platform.
    ///
    /// Returned by convenience entry points (`rss_bytes`,
    /// `app_config_path`) when the composition rules left the capability
    /// unattached. This is the expected outcome on platforms outside the
    /// capability table, not a failure.
    #[error("Capability '{capability}' not supported on {platform}")]
    NotSupported {
        /// The capability that is not available.
        capability: String,
        /// The platform identifier it was resolved against.
        platform: String,
    },

    /// An external sampling tool could not be spawned or exited unsuccessfully.
    #[error("Command '{command}' failed: {source}")]
    CommandFailed {
        /// The command that failed (e.g. "ps", "tasklist").
        command: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A supported operation ran but produced no usable result.
    ///
    /// The degradation path for output-format variance: the sampler's
    /// tool output did not contain a value we could parse.
    #[error("'{what}' unavailable: {reason}")]
    Unavailable {
        /// What was being resolved.
        what: String,
        /// Why no value could be produced.
        reason: String,
    },

    /// Invalid argument provided.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was invalid.
        message: String,
    },
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl HostprimsError {
    /// Create a `NotSupported` error.
    pub fn not_supported(capability: impl Into<String>, platform: impl Into<String>) -> Self {
        HostprimsError::NotSupported {
            capability: capability.into(),
            platform: platform.into(),
        }
    }

    /// Create a `CommandFailed` error from an IO error.
    pub fn command_failed(command: impl Into<String>, source: io::Error) -> Self {
        HostprimsError::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create an `Unavailable` error.
    pub fn unavailable(what: impl Into<String>, reason: impl Into<String>) -> Self {
        HostprimsError::Unavailable {
            what: what.into(),
            reason: reason.into(),
        }
    }

    /// Create an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        HostprimsError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this error means "never composed here" as opposed to
    /// "composed but failed".
    pub fn is_not_supported(&self) -> bool {
        matches!(self, HostprimsError::NotSupported { .. })
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for hostprims operations.
pub type HostprimsResult<T> = Result<T, HostprimsError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HostprimsError::not_supported("open_command", "vms");
        assert_eq!(
            err.to_string(),
            "Capability 'open_command' not supported on vms"
        );

        let err = HostprimsError::unavailable("rss_bytes", "unrecognized tasklist output");
        assert_eq!(
            err.to_string(),
            "'rss_bytes' unavailable: unrecognized tasklist output"
        );

        let err = HostprimsError::invalid_argument("app name must not be empty");
        assert_eq!(err.to_string(), "Invalid argument: app name must not be empty");
    }

    #[test]
    fn test_command_failed_source() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = HostprimsError::command_failed("ps", io_err);

        match err {
            HostprimsError::CommandFailed { ref source, ref command } => {
                assert_eq!(command, "ps");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected CommandFailed"),
        }
    }

    #[test]
    fn test_not_supported_is_distinguishable() {
        assert!(HostprimsError::not_supported("rss_bytes", "unknown").is_not_supported());
        assert!(!HostprimsError::unavailable("rss_bytes", "empty output").is_not_supported());
    }
}
