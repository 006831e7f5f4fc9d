use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes, one per failure kind so scripts can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// A dependency landed in a category passed to `--fail-on`.
    ComplianceViolation = 1,
    /// Command-line parsing failed.
    InvalidArguments = 2,
    /// The workspace directory could not be read (strict mode).
    DiscoveryFailure = 3,
    /// A project manifest could not be read or parsed (strict mode).
    ManifestFailure = 4,
    /// Anything else: configuration, serialization, IO on output.
    InternalError = 5,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ComplianceViolation => write!(f, "Compliance Violation (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::DiscoveryFailure => write!(f, "Discovery Failure (3)"),
            ExitCode::ManifestFailure => write!(f, "Manifest Failure (4)"),
            ExitCode::InternalError => write!(f, "Internal Error (5)"),
        }
    }
}

/// Errors surfaced by a scan. In lenient mode discovery and manifest errors
/// are logged and swallowed instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read workspace directory: {path}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read manifest: {path}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration file: {path}\nDetails: {details}")]
    Config { path: PathBuf, details: String },
}

impl From<&ScanError> for ExitCode {
    fn from(err: &ScanError) -> Self {
        match err {
            ScanError::Discovery { .. } => ExitCode::DiscoveryFailure,
            ScanError::ManifestRead { .. } | ScanError::ManifestParse { .. } => {
                ExitCode::ManifestFailure
            }
            ScanError::Config { .. } => ExitCode::InternalError,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
