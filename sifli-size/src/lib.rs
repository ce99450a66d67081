//! Firmware memory footprint reporting.
//!
//! Runs a binutils-style `size` tool on an executable, parses its Berkeley
//! output and reports RAM/FLASH usage against a [`MemoryProfile`]:
//!
//! - [`size`]: `size` output parsing into [`SizeReport`]
//! - [`provider`]: the [`SizeProvider`] seam and the process-backed [`SizeTool`]
//! - [`profile`]: region budgets, optionally loaded from TOML
//! - [`usage`]: derived [`UsageReport`] and its table rendering
//! - [`reporter`]: [`MemoryReporter`], tying the above together

pub mod error;
pub mod profile;
pub mod provider;
pub mod reporter;
pub mod size;
pub mod usage;

pub use error::{Error, ExecutionError, FormatError, ProfileError};
pub use profile::MemoryProfile;
pub use provider::{SizeProvider, SizeTool};
pub use reporter::MemoryReporter;
pub use size::{parse_size_output, SizeReport};
pub use usage::UsageReport;
