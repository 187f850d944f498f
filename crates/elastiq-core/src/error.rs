//! Error types for elastiq-core.

use std::path::{Path, PathBuf};

/// Errors that can occur while building or loading a query.
///
/// Builder operations only ever produce [`Error::InvalidArgument`] or
/// [`Error::NotImplemented`]. The remaining variants come from loading
/// intents off disk and from the CLI.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A builder argument failed validation.
    #[error("Invalid argument `{argument}`: {message}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// What went wrong
        message: String,
    },

    /// Operation reserved for a future release.
    #[error("Not yet implemented: {0}")]
    NotImplemented(&'static str),

    /// Configuration or intent file error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error tied to a file path.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience `Result` type alias for Elastiq operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(argument: &'static str, message: S) -> Self {
        Error::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that produced it.
    pub fn io_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns whether this error was caused by a caller-supplied argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}
