//! CLI logic for the Emblem logo generator.
//!
//! This module contains the core CLI logic: resolving the configuration,
//! collecting the logo fields from flags or the interactive wizard, and
//! writing the rendered SVG to disk.

pub mod error_adapter;
pub mod prompt;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use emblem::{EmblemError, LogoBuilder, LogoRequest, draw::ShapeKind};

use prompt::{PromptDefaults, Prompter};

/// Run the Emblem CLI application
///
/// Reads answers from standard input when the shape is not given on the
/// command line.
///
/// # Errors
///
/// Returns `EmblemError` for:
/// - Configuration loading errors
/// - Unsupported shapes, overlong captions and invalid colors
/// - Prompt and file I/O errors
pub fn run(args: &Args) -> Result<PathBuf, EmblemError> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run_with(args, &mut prompter)
}

/// Run the CLI with an explicit prompt stream.
///
/// Returns the path the logo was written to.
///
/// # Errors
///
/// See [`run`].
pub fn run_with<R: BufRead, W: Write>(
    args: &Args,
    prompter: &mut Prompter<R, W>,
) -> Result<PathBuf, EmblemError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(output) = &args.output {
        app_config.output_mut().set_path(output);
    }
    if args.minimize {
        app_config.output_mut().set_minimize(true);
    }

    let request = match &args.shape {
        Some(shape) => request_from_args(args, shape)?,
        None => {
            debug!("No shape given, starting interactive prompt");
            prompt::ask_logo_request(prompter, &prompt_defaults(args))?
        }
    };

    let builder = LogoBuilder::new(app_config);
    let svg = builder.render_svg(&request)?;

    let output_path = builder.config().output().path().to_path_buf();
    write_output(&output_path, &svg)?;

    info!(output_file = output_path.display().to_string(); "SVG logo written");
    Ok(output_path)
}

/// Build a request from command-line flags, filling gaps with defaults.
fn request_from_args(args: &Args, shape: &str) -> Result<LogoRequest, EmblemError> {
    let mut request = LogoRequest::new(shape.parse::<ShapeKind>()?);
    if let Some(text) = &args.text {
        request = request.with_text(text);
    }
    if let Some(color) = &args.text_color {
        request = request.with_text_color(color);
    }
    if let Some(color) = &args.fill_color {
        request = request.with_fill_color(color);
    }
    Ok(request)
}

/// Prompt defaults taken from the flags that were given without `--shape`.
fn prompt_defaults(args: &Args) -> PromptDefaults<'_> {
    let fallback = PromptDefaults::default();
    PromptDefaults {
        text: args.text.as_deref().unwrap_or(fallback.text),
        text_color: args.text_color.as_deref().unwrap_or(fallback.text_color),
        fill_color: args.fill_color.as_deref().unwrap_or(fallback.fill_color),
    }
}

/// Write the document, creating missing parent directories.
fn write_output(path: &Path, svg: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, svg)
}
