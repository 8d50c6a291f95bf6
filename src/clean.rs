//! Whitespace normalization for extracted document text.
//!
//! PDF and DOCX extractors leave a lot of layout debris behind: Windows line
//! endings, tab-aligned columns, no-break spaces from justified text, and long
//! runs of blank lines where page breaks used to be.
//!
//! ```text
//! "\r\n\n\n\tHello\t\tworld\n\n\n"
//!   1. \r    -> \n        "\n\n\n\n Hello  world\n\n\n"
//!   2. \n{3,} -> \n\n     "\n\n Hello  world\n\n"
//!   3. spaces -> one      "\n\n Hello world\n\n"
//!   4. trim               "Hello world"
//! ```
//!
//! Blank lines are kept (collapsed to one) because the segmenter treats them
//! as paragraph boundaries.

use std::sync::LazyLock;

use regex::Regex;

static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("static regex"));

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("static regex"));

/// Normalize raw extracted text.
///
/// Carriage returns become newlines, tabs and no-break spaces become spaces,
/// runs of three or more newlines collapse to a blank line, runs of spaces
/// collapse to one, and the result is trimmed.
///
/// Total and idempotent:
///
/// ```rust
/// use lesstof::clean;
///
/// let once = clean("\r\n\n\n\tHello\t\tworld\n\n\n");
/// assert_eq!(once, "Hello world");
/// assert_eq!(clean(&once), once);
/// assert_eq!(clean(""), "");
/// ```
#[must_use]
pub fn clean(raw: &str) -> String {
    let text: String = raw
        .chars()
        .map(|c| match c {
            '\r' => '\n',
            '\t' | '\u{00A0}' => ' ',
            other => other,
        })
        .collect();

    let text = BLANK_LINE_RUN.replace_all(&text, "\n\n");
    let text = SPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}
