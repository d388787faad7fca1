//! Htmldown Parser
//!
//! Line classification for the markdown subset htmldown understands.
//! Each raw input line maps to exactly one [`LineEvent`]; block
//! sequencing is left to the renderer.
//!
//! # Example
//!
//! ```
//! use htmldown_parser::{classify, LineEvent};
//!
//! match classify("## Title") {
//!     LineEvent::Heading { level, content } => {
//!         assert_eq!(level, 2);
//!         assert_eq!(content, "Title");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod inline;

pub use inline::apply_inline;

use regex::Regex;
use std::sync::LazyLock;

/// Regex for headings: 1-6 leading `#` then required whitespace.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());

/// One classified input line.
///
/// Content fields carry the text after the structural marker, with the
/// inline transforms already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A heading line: `#`..`######` followed by whitespace
    Heading { level: u8, content: String },
    /// An unordered list item: `- ` prefix
    UnorderedItem(String),
    /// An ordered list item: `* ` prefix
    OrderedItem(String),
    /// A line that is empty after trimming
    Blank,
    /// Any other line; accumulates into the open paragraph
    Paragraph(String),
}

/// Classify a single raw line.
///
/// The line is trimmed of leading and trailing whitespace first, then
/// tested as heading, unordered item, ordered item, blank, and finally
/// paragraph, in that order. Inline transforms are applied to the
/// extracted content, never to the structural markers.
pub fn classify(raw: &str) -> LineEvent {
    let line = raw.trim();

    if let Some(caps) = HEADING_RE.captures(line) {
        let level = caps[1].len() as u8;
        return LineEvent::Heading {
            level,
            content: apply_inline(&caps[2]),
        };
    }

    if let Some(rest) = line.strip_prefix("- ") {
        return LineEvent::UnorderedItem(apply_inline(rest));
    }

    if let Some(rest) = line.strip_prefix("* ") {
        return LineEvent::OrderedItem(apply_inline(rest));
    }

    if line.is_empty() {
        return LineEvent::Blank;
    }

    LineEvent::Paragraph(apply_inline(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headings() {
        for level in 1..=6u8 {
            let line = format!("{} Title", "#".repeat(level as usize));
            assert_eq!(
                classify(&line),
                LineEvent::Heading {
                    level,
                    content: "Title".to_string()
                }
            );
        }
    }

    #[test]
    fn test_seven_hashes_is_paragraph() {
        assert_eq!(
            classify("####### Too deep"),
            LineEvent::Paragraph("####### Too deep".to_string())
        );
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        assert_eq!(
            classify("#NoSpace"),
            LineEvent::Paragraph("#NoSpace".to_string())
        );
    }

    #[test]
    fn test_classify_list_items() {
        assert_eq!(
            classify("- bullet"),
            LineEvent::UnorderedItem("bullet".to_string())
        );
        assert_eq!(
            classify("* numbered"),
            LineEvent::OrderedItem("numbered".to_string())
        );
    }

    #[test]
    fn test_bare_marker_is_paragraph() {
        // "-" and "*" without a trailing space are not list items
        assert_eq!(classify("-"), LineEvent::Paragraph("-".to_string()));
        assert_eq!(classify("*"), LineEvent::Paragraph("*".to_string()));
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify(""), LineEvent::Blank);
        assert_eq!(classify("   \t  "), LineEvent::Blank);
    }

    #[test]
    fn test_heading_beats_list_marker() {
        // A heading containing a dash stays a heading
        assert_eq!(
            classify("# - not a list"),
            LineEvent::Heading {
                level: 1,
                content: "- not a list".to_string()
            }
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(
            classify("   ## Indented   "),
            LineEvent::Heading {
                level: 2,
                content: "Indented".to_string()
            }
        );
        assert_eq!(
            classify("  - item  "),
            LineEvent::UnorderedItem("item".to_string())
        );
    }

    #[test]
    fn test_inline_applied_to_content() {
        assert_eq!(
            classify("# **Big**"),
            LineEvent::Heading {
                level: 1,
                content: "<b>Big</b>".to_string()
            }
        );
        assert_eq!(
            classify("- __soft__"),
            LineEvent::UnorderedItem("<em>soft</em>".to_string())
        );
    }
}
