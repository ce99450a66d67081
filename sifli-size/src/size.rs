//! Berkeley-format `size` output parsing.
//!
//! binutils `size` (default `-B` format) prints a header followed by one row
//! per input file:
//!
//! ```text
//!    text    data     bss     dec     hex filename
//!    1000     200      50    1250     4e2 fw.elf
//! ```
//!
//! Only the final row is used.

use crate::error::FormatError;

const COLUMNS: usize = 6;

/// Section sizes reported for one executable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SizeReport {
    /// Code and read-only data.
    pub text: u64,
    /// Initialized data.
    pub data: u64,
    /// Zero-initialized data.
    pub bss: u64,
    /// `text + data + bss` as printed by the tool, base 10.
    pub dec: u64,
    /// Same total as printed by the tool, base 16.
    pub hex: u64,
}

/// Parses the final line of `size` stdout into a [`SizeReport`].
pub fn parse_size_output(output: &str) -> Result<SizeReport, FormatError> {
    let line = output.lines().last().ok_or(FormatError::EmptyOutput)?;
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != COLUMNS {
        return Err(FormatError::TokenCount {
            found: tokens.len(),
        });
    }

    Ok(SizeReport {
        text: parse_dec("text", tokens[0])?,
        data: parse_dec("data", tokens[1])?,
        bss: parse_dec("bss", tokens[2])?,
        dec: parse_dec("dec", tokens[3])?,
        hex: parse_hex("hex", tokens[4])?,
    })
}

fn parse_dec(field: &'static str, token: &str) -> Result<u64, FormatError> {
    token.parse().map_err(|_| invalid(field, token))
}

fn parse_hex(field: &'static str, token: &str) -> Result<u64, FormatError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u64::from_str_radix(digits, 16).map_err(|_| invalid(field, token))
}

fn invalid(field: &'static str, token: &str) -> FormatError {
    FormatError::InvalidNumber {
        field,
        token: token.to_owned(),
    }
}
