//! Runs a size provider over an executable and prints the usage table.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, FormatError};
use crate::profile::MemoryProfile;
use crate::provider::SizeProvider;
use crate::size::parse_size_output;
use crate::usage::UsageReport;

pub struct MemoryReporter<P> {
    provider: P,
    profile: MemoryProfile,
}

impl<P: SizeProvider> MemoryReporter<P> {
    pub fn new(provider: P, profile: MemoryProfile) -> Self {
        Self { provider, profile }
    }

    pub fn profile(&self) -> &MemoryProfile {
        &self.profile
    }

    /// Invokes the provider once and derives region usage.
    pub fn usage(&self, executable: &Path) -> Result<UsageReport, Error> {
        let stdout = self.provider.size_output(executable)?;
        let text = std::str::from_utf8(&stdout).map_err(|_| FormatError::NotUtf8)?;
        let size = parse_size_output(text)?;
        tracing::debug!(?size, "parsed size output");
        Ok(UsageReport::compute(&size, &self.profile)?)
    }

    /// Writes the three-line usage table for `executable` to `out`.
    pub fn print_memory_usage<W: Write>(&self, executable: &Path, out: &mut W) -> Result<(), Error> {
        let usage = self.usage(executable)?;
        write!(out, "{}", usage)?;
        out.flush()?;
        Ok(())
    }
}
