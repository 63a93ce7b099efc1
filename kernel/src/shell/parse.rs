/*
 * Command Line Parsing
 *
 * Words are separated by spaces only. Every token is copied into a bounded
 * buffer and silently cut to fit, matching what the fixed-size namespace can
 * hold anyway.
 */

use heapless::String;

use crate::config::{MAX_COMMAND_LEN, MAX_FILE_SIZE};
use crate::fs::path::PathBuf;

/// Command word buffer.
pub type CommandWord = String<MAX_COMMAND_LEN>;

/// Longest text `efile` will store in one go.
pub const MAX_EDIT_TEXT: usize = MAX_FILE_SIZE - 1;

/// Parsed `efile` arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct Redirect<'a> {
    /// Text to store, trailing spaces removed
    pub text: &'a str,
    /// `>>` rather than `>`
    pub append: bool,
    /// Target name, relative to the current directory
    pub name: PathBuf,
}

/// Why `efile` arguments could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectError {
    MissingArguments,
    MissingRedirect,
    MissingFileName,
}

impl core::fmt::Display for RedirectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RedirectError::MissingArguments => write!(f, "missing arguments"),
            RedirectError::MissingRedirect => write!(f, "missing '>'"),
            RedirectError::MissingFileName => write!(f, "missing file name"),
        }
    }
}

/// Split a line into its command word and the rest of the line.
///
/// Leading spaces are skipped before both parts. The command word is cut to
/// `MAX_COMMAND_LEN` bytes; the rest is returned untouched.
pub fn split_command(line: &str) -> (CommandWord, &str) {
    let line = line.trim_start_matches(' ');
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    (truncated(word), rest.trim_start_matches(' '))
}

/// First space-separated word of `args`, cut to `MAX_NAME_LEN` bytes.
pub fn first_arg(args: &str) -> PathBuf {
    let args = args.trim_start_matches(' ');
    let word = args.split(' ').next().unwrap_or("");
    truncated(word)
}

/// Parse `text > name` or `text >> name`.
///
/// The text is everything before the first '>' (so it cannot itself contain
/// one), without trailing spaces, cut to `MAX_EDIT_TEXT` bytes.
pub fn parse_redirect(args: &str) -> Result<Redirect<'_>, RedirectError> {
    let args = args.trim_start_matches(' ');
    if args.is_empty() {
        return Err(RedirectError::MissingArguments);
    }

    let (text, target) = args.split_once('>').ok_or(RedirectError::MissingRedirect)?;
    let (append, target) = match target.strip_prefix('>') {
        Some(target) => (true, target),
        None => (false, target),
    };

    let name = first_arg(target);
    if name.is_empty() {
        return Err(RedirectError::MissingFileName);
    }

    Ok(Redirect {
        text: prefix_within(text.trim_end_matches(' '), MAX_EDIT_TEXT),
        append,
        name,
    })
}

fn truncated<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    // Cannot fail: the prefix fits by construction.
    let _ = out.push_str(prefix_within(s, N));
    out
}

/// Longest prefix of `s` that is at most `max` bytes and ends on a character
/// boundary.
fn prefix_within(s: &str, max: usize) -> &str {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
