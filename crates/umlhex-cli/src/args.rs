//! Command-line argument definitions for the umlhex CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the diagram sources, override the
//! configured server and output directory, and control logging verbosity.

use clap::Parser;

/// Command-line arguments for the umlhex batch renderer
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagram source files, or directories containing them
    #[arg(required = true, help = "Diagram source files or directories")]
    pub inputs: Vec<String>,

    /// Directory the rendered images are written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Base URL of the rendering server, the encoded diagram is appended to it
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
