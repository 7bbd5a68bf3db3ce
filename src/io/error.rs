//! Error types and context management for sampling and rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sampling and rendering operations
#[derive(Debug)]
pub enum RenderError {
    /// A single input value is outside the domain an operation accepts
    InvalidArgument {
        /// Name of the invalid argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Run configuration violates one or more constraints
    ///
    /// Every violated constraint is listed, not just the first one found.
    Configuration {
        /// Human-readable description of each violated constraint
        violations: Vec<String>,
    },

    /// Failed to save rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::Configuration { violations } => {
                write!(f, "Invalid configuration: {}", violations.join("; "))
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rendering results
pub type Result<T> = std::result::Result<T, RenderError>;

/// Annotates failed results with the operation that was running
pub trait WithContext<T> {
    /// Replace the operation name on computation and file system errors
    ///
    /// # Errors
    ///
    /// Propagates the underlying error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<RenderError>,
{
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only variants that carry an operation name are rewritten
            match &mut error {
                RenderError::Computation { operation: op, .. }
                | RenderError::FileSystem { operation: op, .. } => *op = operation,
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<crate::math::interpolation::InterpolationError> for RenderError {
    fn from(err: crate::math::interpolation::InterpolationError) -> Self {
        Self::Computation {
            operation: "interpolation",
            reason: err.to_string(),
        }
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RenderError {
    RenderError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> RenderError {
    RenderError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
