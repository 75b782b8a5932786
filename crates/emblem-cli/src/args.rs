//! Command-line argument definitions for the Emblem CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. When `--shape` is omitted the CLI asks for the logo
//! fields interactively instead.

use clap::Parser;

/// Command-line arguments for the Emblem logo generator
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Shape of the logo (circle, square, triangle); prompts for all fields when omitted,
    /// offering the other flags as defaults
    #[arg(short, long)]
    pub shape: Option<String>,

    /// Caption of up to three characters
    #[arg(short, long)]
    pub text: Option<String>,

    /// Caption color (color name or hex value)
    #[arg(long)]
    pub text_color: Option<String>,

    /// Shape fill color (color name or hex value)
    #[arg(long = "color")]
    pub fill_color: Option<String>,

    /// Path to the output SVG file (defaults to the configured path)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Collapse whitespace between tags in the output
    #[arg(long)]
    pub minimize: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
