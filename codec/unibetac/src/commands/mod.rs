//! Command handlers for the `unibeta` binary.
//!
//! `beta2greek` and `greek2beta` share one argument grammar:
//!
//! ```text
//! unibeta <direction> [--tonos | --oxia] [--capacity=N] (TEXT... | -f FILE...)
//! ```
//!
//! Several TEXT words are joined with single spaces. Files are converted
//! in parallel and printed in the order they were named.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::debug;
use unibeta::{beta_to_greek_with, greek_to_beta, AcuteForm, Betacode, Direction, Options};
use unibeta_core::{decode, encode, Cursor, Decoded};

use crate::CliError;

/// Where the text to convert comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Files(Vec<PathBuf>),
}

/// Parsed arguments of a conversion command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertArgs {
    pub options: Options,
    /// Fixed output buffer size; `None` converts without a limit.
    pub capacity: Option<usize>,
    pub input: Input,
}

impl ConvertArgs {
    /// Converts one piece of text with these options.
    ///
    /// With a capacity, text that does not fit is an error rather than a
    /// truncated result.
    pub fn convert(&self, direction: Direction, text: &str) -> Result<String, CliError> {
        if let Some(capacity) = self.capacity {
            let codec = Betacode::with_capacity(capacity).with_options(self.options);
            return Ok(codec.convert(direction, text)?);
        }
        Ok(match direction {
            Direction::BetaToGreek => beta_to_greek_with(text, self.options),
            Direction::GreekToBeta => greek_to_beta(text),
        })
    }
}

/// Parses the arguments following the direction name.
pub fn parse_convert_args(args: &[String]) -> Result<ConvertArgs, CliError> {
    let mut options = Options::default();
    let mut capacity = None;
    let mut words: Vec<&str> = Vec::new();
    let mut files = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--tonos" {
            options.acute = AcuteForm::Tonos;
        } else if arg == "--oxia" {
            options.acute = AcuteForm::Oxia;
        } else if let Some(value) = arg.strip_prefix("--capacity=") {
            let parsed = value.parse().map_err(|_| CliError::BadOption {
                option: "--capacity",
                value: value.to_string(),
            })?;
            capacity = Some(parsed);
        } else if arg == "-f" || arg == "--file" {
            let path = iter.next().ok_or_else(|| CliError::BadOption {
                option: "-f",
                value: String::new(),
            })?;
            files.push(PathBuf::from(path));
        } else if arg.len() > 1 && arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            words.push(arg);
        }
    }

    let input = match (words.is_empty(), files.is_empty()) {
        (true, true) => return Err(CliError::MissingInput),
        (false, false) => return Err(CliError::MixedInput),
        (false, true) => Input::Text(words.join(" ")),
        (true, false) => Input::Files(files),
    };
    Ok(ConvertArgs {
        options,
        capacity,
        input,
    })
}

/// Reads and converts every file, in parallel.
///
/// Results come back in the order of `paths`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(direction = direction.name(), files = paths.len())
)]
pub fn convert_files(
    direction: Direction,
    args: &ConvertArgs,
    paths: &[PathBuf],
) -> Vec<Result<String, CliError>> {
    paths
        .par_iter()
        .map(|path| {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = text.len(), "converting file");
            args.convert(direction, &text)
        })
        .collect()
}

/// Runs `beta2greek` or `greek2beta`, printing the result.
///
/// Files converted before a failing one are still printed.
pub fn run_convert(direction: Direction, args: &[String]) -> Result<(), CliError> {
    let parsed = parse_convert_args(args)?;
    match &parsed.input {
        Input::Text(text) => println!("{}", parsed.convert(direction, text)?),
        Input::Files(paths) => {
            for result in convert_files(direction, &parsed, paths) {
                let converted = result?;
                print!("{converted}");
                if !converted.ends_with('\n') {
                    println!();
                }
            }
        }
    }
    Ok(())
}

/// One line per scalar of `text`: code point, UTF-8 bytes, and the
/// character itself.
///
/// Reads `text` the way the converters do, so a NUL ends the listing.
pub fn codepoint_lines(text: &str) -> Vec<String> {
    let mut cursor = Cursor::new(text.as_bytes());
    let mut lines = Vec::new();
    while !cursor.is_eof() {
        let start = cursor.pos();
        let Decoded::Scalar { value, len } = decode(cursor.rest()) else {
            // Unreachable for a `&str`.
            lines.push(format!("{start:>4}  invalid lead byte"));
            cursor.advance();
            continue;
        };
        let bytes = encode(value)
            .as_bytes()
            .iter()
            .map(|byte| format!("{byte:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        let shown = char::from_u32(value)
            .filter(|ch| !ch.is_control())
            .map_or_else(String::new, String::from);
        let line = format!("{start:>4}  U+{value:04X}  {bytes:<11}  {shown}");
        lines.push(line.trim_end().to_owned());
        cursor.advance_n(len);
    }
    lines
}

/// Runs `codepoints`.
pub fn list_codepoints(args: &[String]) -> Result<(), CliError> {
    if args.is_empty() {
        return Err(CliError::MissingInput);
    }
    for line in codepoint_lines(&args.join(" ")) {
        println!("{line}");
    }
    Ok(())
}
