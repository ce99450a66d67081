use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::Level;

use sifli_size::provider::DEFAULT_SIZE_TOOL;
use sifli_size::{MemoryProfile, MemoryReporter, SizeTool};

/// Print RAM and FLASH usage of a firmware executable.
#[derive(Parser, Debug)]
#[command(name = "sifli-size", version, about)]
struct Args {
    /// Compiled firmware image passed to the size tool.
    executable: PathBuf,

    /// binutils-compatible `size` command.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SIZE_TOOL)]
    tool: PathBuf,

    /// TOML file overriding `ram_size_bytes` / `flash_size_bytes`.
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors exit with 1, not clap's default of 2.
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_logging(args.verbose);

    let profile = match &args.profile {
        Some(path) => {
            let profile = MemoryProfile::load(path)?;
            tracing::info!(
                path = %path.display(),
                ram = profile.ram_size_bytes,
                flash = profile.flash_size_bytes,
                "loaded memory profile"
            );
            profile
        }
        None => MemoryProfile::DEFAULT,
    };

    let reporter = MemoryReporter::new(SizeTool::new(&args.tool), profile);
    reporter
        .print_memory_usage(&args.executable, &mut io::stdout().lock())
        .with_context(|| format!("could not report memory usage of {}", args.executable.display()))?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
