//! Inline transforms for line content.
//!
//! Four substitution passes run over the text content of headings, list
//! items, and paragraph lines, in a fixed order: bold, emphasis, hash,
//! strip. Each pass is one global substitution of non-overlapping,
//! non-greedy matches. Unterminated markers never match and pass
//! through verbatim.

use md5::{Digest, Md5};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for bold spans: **text**
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Regex for emphasis spans: __text__
static EM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

/// Regex for the hash transform: [[text]]
static HASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[(.*?)\]\]").unwrap());

/// Regex for the strip transform: ((text))
static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\((.*?)\)\)").unwrap());

/// Apply all inline transforms to a line's content.
///
/// Order matters: bold, then emphasis, then hash, then strip, matching
/// the documented substitution sequence.
pub fn apply_inline(content: &str) -> String {
    let pass = BOLD_RE.replace_all(content, "<b>$1</b>");
    let pass = EM_RE.replace_all(&pass, "<em>$1</em>");
    let pass = HASH_RE.replace_all(&pass, |caps: &Captures| md5_hex(&caps[1]));
    let pass = STRIP_RE.replace_all(&pass, |caps: &Captures| strip_c(&caps[1]));
    pass.into_owned()
}

/// Lowercase hex MD5 digest of the UTF-8 bytes of `text`.
fn md5_hex(text: &str) -> String {
    format!("{:x}", Md5::digest(text.as_bytes()))
}

/// Remove every `c` and `C` from `text`.
fn strip_c(text: &str) -> String {
    text.chars().filter(|ch| !ch.eq_ignore_ascii_case(&'c')).collect()
}
