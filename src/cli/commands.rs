//! CLI definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Climblog - record climbing sessions and track your progress
#[derive(Parser, Debug)]
#[command(name = "climblog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Color wins only if neither the flag nor the config turns it off
    pub fn use_color(&self, configured: bool) -> bool {
        configured && !self.no_color
    }
}
