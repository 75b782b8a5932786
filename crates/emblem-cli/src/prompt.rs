//! Interactive question wizard.
//!
//! When no shape is given on the command line the CLI asks for the logo
//! fields one at a time. Each question shows its default, and an empty
//! answer accepts it. Invalid answers print a hint and the question is asked
//! again until the answer is valid or the input ends.

use std::io::{self, BufRead, Write};

use log::debug;

use emblem::{
    DEFAULT_FILL_COLOR, DEFAULT_TEXT, DEFAULT_TEXT_COLOR, LogoRequest, color::is_valid_color,
    draw::{MAX_CAPTION_LEN, ShapeKind},
};

/// Asks questions on a text stream and reads the answers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks the user to pick one of `choices` by number or by name.
    ///
    /// Returns the index of the chosen entry. An empty answer picks the first.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] if the input ends before a
    /// valid answer is given.
    pub fn select(&mut self, message: &str, choices: &[&str]) -> io::Result<usize> {
        loop {
            writeln!(self.output, "? {message}")?;
            for (index, choice) in choices.iter().enumerate() {
                writeln!(self.output, "  {}) {choice}", index + 1)?;
            }
            write!(self.output, "  Answer [{}]: ", choices.first().copied().unwrap_or(""))?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            if answer.is_empty() && !choices.is_empty() {
                return Ok(0);
            }
            if let Some(number) = answer
                .parse::<usize>()
                .ok()
                .filter(|number| (1..=choices.len()).contains(number))
            {
                return Ok(number - 1);
            }
            if let Some(index) = choices
                .iter()
                .position(|choice| choice.eq_ignore_ascii_case(&answer))
            {
                return Ok(index);
            }

            writeln!(self.output, ">> Please choose one of the listed options")?;
        }
    }

    /// Asks for a free-form answer, falling back to `default` when empty.
    ///
    /// `validate` returns the hint to print when an answer is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] if the input ends before a
    /// valid answer is given.
    pub fn input<F>(&mut self, message: &str, default: &str, validate: F) -> io::Result<String>
    where
        F: Fn(&str) -> Result<(), String>,
    {
        loop {
            write!(self.output, "? {message} ({default}) ")?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            let answer = if answer.is_empty() {
                default.to_string()
            } else {
                answer
            };

            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(hint) => writeln!(self.output, ">> {hint}")?,
            }
        }
    }

    fn read_answer(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before all questions were answered",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Answers offered when the user leaves a question empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDefaults<'a> {
    pub text: &'a str,
    pub text_color: &'a str,
    pub fill_color: &'a str,
}

impl Default for PromptDefaults<'_> {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT,
            text_color: DEFAULT_TEXT_COLOR,
            fill_color: DEFAULT_FILL_COLOR,
        }
    }
}

/// Runs the full question sequence and returns the resulting request.
///
/// The questions are asked in this order: shape, caption, caption color,
/// fill color. Each free-form question offers the matching entry of
/// `defaults`.
///
/// # Errors
///
/// Returns an I/O error if the prompt cannot be written or the input ends early.
pub fn ask_logo_request<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    defaults: &PromptDefaults<'_>,
) -> io::Result<LogoRequest> {
    let names: Vec<String> = ShapeKind::ALL.iter().map(|kind| capitalize(kind.name())).collect();
    let choices: Vec<&str> = names.iter().map(String::as_str).collect();
    let shape = ShapeKind::ALL[prompter.select("Enter the shape:", &choices)?];

    let text = prompter.input("Enter the text:", defaults.text, |text| {
        if text.chars().count() <= MAX_CAPTION_LEN {
            Ok(())
        } else {
            Err(format!(
                "Please enter a string between 0 and {MAX_CAPTION_LEN} characters"
            ))
        }
    })?;

    let text_color = prompter.input("Enter the text color:", defaults.text_color, |color| {
        validate_color(color, "Please enter a valid text color")
    })?;

    let fill_color = prompter.input("Enter the fill color:", defaults.fill_color, |color| {
        validate_color(color, "Please enter a valid fill color")
    })?;

    let request = LogoRequest::new(shape)
        .with_text(text)
        .with_text_color(text_color)
        .with_fill_color(fill_color);
    debug!(request:?; "Collected answers");
    Ok(request)
}

fn validate_color(color: &str, hint: &str) -> Result<(), String> {
    if is_valid_color(color) {
        Ok(())
    } else {
        Err(hint.to_string())
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
