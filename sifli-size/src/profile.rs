//! Target memory budgets.
//!
//! The built-in profile describes the default target: 20 KiB of RAM and
//! 128 KiB of FLASH. A TOML file may override either region:
//!
//! ```toml
//! ram_size_bytes = 32768
//! flash_size_bytes = 262144
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ProfileError;

pub const DEFAULT_RAM_SIZE_BYTES: u64 = 20 * 1024;
pub const DEFAULT_FLASH_SIZE_BYTES: u64 = 128 * 1024;

/// RAM and FLASH region sizes the usage report is measured against.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryProfile {
    pub ram_size_bytes: u64,
    pub flash_size_bytes: u64,
}

impl MemoryProfile {
    pub const DEFAULT: Self = Self {
        ram_size_bytes: DEFAULT_RAM_SIZE_BYTES,
        flash_size_bytes: DEFAULT_FLASH_SIZE_BYTES,
    };

    /// Reads and validates a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let text = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_owned(),
            source,
        })?;
        let profile: Self = toml::from_str(&text).map_err(|source| ProfileError::Parse {
            path: path.to_owned(),
            source,
        })?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.ram_size_bytes == 0 {
            return Err(ProfileError::ZeroSize { region: "RAM" });
        }
        if self.flash_size_bytes == 0 {
            return Err(ProfileError::ZeroSize { region: "FLASH" });
        }
        Ok(())
    }
}

impl Default for MemoryProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}
