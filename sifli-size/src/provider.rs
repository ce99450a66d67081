//! Sources of `size` output.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ExecutionError;

/// Size tool shipped with the default RISC-V toolchain.
pub const DEFAULT_SIZE_TOOL: &str = "riscv64-unknown-elf-size";

/// Something that can produce Berkeley-format size output for an executable.
pub trait SizeProvider {
    fn size_output(&self, executable: &Path) -> Result<Vec<u8>, ExecutionError>;
}

/// Runs an external binutils-compatible `size` command.
#[derive(Clone, Debug)]
pub struct SizeTool {
    program: PathBuf,
}

impl SizeTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for SizeTool {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE_TOOL)
    }
}

impl SizeProvider for SizeTool {
    fn size_output(&self, executable: &Path) -> Result<Vec<u8>, ExecutionError> {
        tracing::debug!(
            tool = %self.program.display(),
            executable = %executable.display(),
            "running size tool"
        );

        // stderr is left attached to ours so tool diagnostics reach the user.
        let output = Command::new(&self.program)
            .arg(executable)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| ExecutionError::Spawn {
                tool: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            tracing::warn!(status = %output.status, "size tool failed");
            return Err(ExecutionError::Status {
                tool: self.program.clone(),
                status: output.status,
            });
        }

        Ok(output.stdout)
    }
}
