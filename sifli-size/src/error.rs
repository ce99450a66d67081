//! Error types for size-tool invocation, output parsing and profile loading.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// The size tool's stdout did not have the expected Berkeley shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Output contained no lines at all.
    EmptyOutput,
    /// Output was not valid UTF-8.
    NotUtf8,
    /// Final line did not split into `text data bss dec hex filename`.
    TokenCount { found: usize },
    /// A numeric column failed to parse in its expected base.
    InvalidNumber { field: &'static str, token: String },
    /// A derived sum does not fit in 64 bits.
    Overflow { field: &'static str },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::EmptyOutput => write!(f, "size tool produced no output"),
            FormatError::NotUtf8 => write!(f, "size tool output is not valid UTF-8"),
            FormatError::TokenCount { found } => write!(
                f,
                "expected 6 columns (text data bss dec hex filename), found {}",
                found
            ),
            FormatError::InvalidNumber { field, token } => {
                write!(f, "invalid `{}` value: {:?}", field, token)
            }
            FormatError::Overflow { field } => write!(f, "`{}` overflows u64", field),
        }
    }
}

impl std::error::Error for FormatError {}

/// The size tool could not be run, or it reported failure.
#[derive(Debug)]
pub enum ExecutionError {
    /// The process could not be started (missing binary, permissions).
    Spawn { tool: PathBuf, source: io::Error },
    /// The process ran but did not exit successfully.
    Status { tool: PathBuf, status: ExitStatus },
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::Spawn { tool, .. } => {
                write!(f, "failed to run `{}`", tool.display())
            }
            ExecutionError::Status { tool, status } => {
                write!(f, "`{}` exited with {}", tool.display(), status)
            }
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecutionError::Spawn { source, .. } => Some(source),
            ExecutionError::Status { .. } => None,
        }
    }
}

/// A memory profile file could not be loaded.
#[derive(Debug)]
pub enum ProfileError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    /// A region was configured with zero bytes.
    ZeroSize { region: &'static str },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Read { path, .. } => {
                write!(f, "failed to read profile {}", path.display())
            }
            ProfileError::Parse { path, .. } => {
                write!(f, "invalid profile {}", path.display())
            }
            ProfileError::ZeroSize { region } => {
                write!(f, "{} region size must be greater than zero", region)
            }
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileError::Read { source, .. } => Some(source),
            ProfileError::Parse { source, .. } => Some(source),
            ProfileError::ZeroSize { .. } => None,
        }
    }
}

/// Any failure while producing a memory usage report.
#[derive(Debug)]
pub enum Error {
    Execution(ExecutionError),
    Format(FormatError),
    Profile(ProfileError),
    /// Writing the report to the output stream failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Execution(e) => write!(f, "execution error: {}", e),
            Error::Format(e) => write!(f, "format error: {}", e),
            Error::Profile(e) => write!(f, "profile error: {}", e),
            Error::Io(e) => write!(f, "output error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Execution(e) => e.source(),
            Error::Format(_) => None,
            Error::Profile(e) => e.source(),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<ExecutionError> for Error {
    fn from(e: ExecutionError) -> Self {
        Self::Execution(e)
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<ProfileError> for Error {
    fn from(e: ProfileError) -> Self {
        Self::Profile(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
