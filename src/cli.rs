//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Default list of target sites, one per line.
pub const DEFAULT_INPUT_FILE: &str = "urls.txt";

/// Default root folder for saved favicons.
pub const DEFAULT_OUTPUT_DIR: &str = "favicons";

/// Download every favicon a site exposes and rank them by resolution.
///
/// Reads hostnames or URLs from a list, discovers icon candidates in each
/// page and at conventional paths, and saves them as
/// `{output}/{domain}/{rank}_{width}x{height}{ext}`.
#[derive(Parser, Debug)]
#[command(name = "favicon-fetch")]
#[command(author, version, about)]
pub struct Args {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,

    /// File with one hostname or URL per line
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Root folder for per-domain favicon folders
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl Args {
    /// Log level used when `RUST_LOG` is not set.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
