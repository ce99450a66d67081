//! RAM/FLASH utilization derived from a [`SizeReport`].

use std::fmt;

use crate::error::FormatError;
use crate::profile::MemoryProfile;
use crate::size::SizeReport;

/// Region usage against a [`MemoryProfile`].
///
/// RAM holds `.data` and `.bss` at runtime; FLASH stores `.text` plus the
/// load image of `.data`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsageReport {
    pub ram_used: u64,
    pub ram_size_bytes: u64,
    pub ram_usage_percent: f64,
    pub flash_used: u64,
    pub flash_size_bytes: u64,
    pub flash_usage_percent: f64,
}

impl UsageReport {
    pub fn compute(size: &SizeReport, profile: &MemoryProfile) -> Result<Self, FormatError> {
        let ram_used = size
            .data
            .checked_add(size.bss)
            .ok_or(FormatError::Overflow { field: "data + bss" })?;
        let flash_used = size
            .text
            .checked_add(size.data)
            .ok_or(FormatError::Overflow {
                field: "text + data",
            })?;

        Ok(Self {
            ram_used,
            ram_size_bytes: profile.ram_size_bytes,
            ram_usage_percent: percent(ram_used, profile.ram_size_bytes),
            flash_used,
            flash_size_bytes: profile.flash_size_bytes,
            flash_usage_percent: percent(flash_used, profile.flash_size_bytes),
        })
    }
}

fn percent(used: u64, size: u64) -> f64 {
    used as f64 / size as f64 * 100.0
}

/// Region size in KiB, always with a fractional part (`20.0`, `0.5`).
fn kib(bytes: u64) -> String {
    // `Debug` for f64 keeps the trailing `.0` that `Display` drops.
    format!("{:?}", bytes as f64 / 1024.0)
}

/// Renders the three-line table printed by `sifli-size`.
impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Memory region    Used Size    Region Size    %age Used")?;
        writeln!(
            f,
            "RAM:             {} B    {} KB    {:.2}%",
            self.ram_used,
            kib(self.ram_size_bytes),
            self.ram_usage_percent
        )?;
        writeln!(
            f,
            "FLASH:           {} B    {} KB    {:.2}%",
            self.flash_used,
            kib(self.flash_size_bytes),
            self.flash_usage_percent
        )
    }
}
