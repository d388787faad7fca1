//! Htmldown Render
//!
//! This crate turns classified line events into HTML output. The
//! [`Renderer`] owns the block-state machine: it decides when to open
//! and close paragraph and list containers, and writes one HTML
//! fragment per line to any [`io::Write`] sink.
//!
//! # Example
//!
//! ```
//! use htmldown_render::Renderer;
//! use htmldown_parser::classify;
//!
//! let mut output = Vec::new();
//! let mut renderer = Renderer::new(&mut output);
//!
//! renderer.render_event(classify("# Hello World")).unwrap();
//! renderer.finish().unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "<h1>Hello World</h1>\n");
//! ```

use std::io::{self, Write};

use htmldown_core::{ConvertState, ListKind};
use htmldown_parser::{classify, LineEvent};
use log::trace;

/// HTML renderer driving the block-state machine.
///
/// Events are fed in document order via [`render_event`]; the consuming
/// [`finish`] closes whatever block is still open, so every opened tag
/// is closed exactly once.
///
/// [`render_event`]: Renderer::render_event
/// [`finish`]: Renderer::finish
#[derive(Debug)]
pub struct Renderer<W: Write> {
    output: W,
    state: ConvertState,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer writing to `output`.
    pub fn new(output: W) -> Self {
        Self {
            output,
            state: ConvertState::new(),
        }
    }

    /// Render one classified line event.
    pub fn render_event(&mut self, event: LineEvent) -> io::Result<()> {
        trace!("render event: {:?}", event);
        match event {
            LineEvent::Heading { level, content } => {
                self.close_open_block()?;
                writeln!(self.output, "<h{level}>{content}</h{level}>")?;
            }
            LineEvent::UnorderedItem(content) => {
                self.list_item(ListKind::Unordered, &content)?;
            }
            LineEvent::OrderedItem(content) => {
                self.list_item(ListKind::Ordered, &content)?;
            }
            LineEvent::Blank => {
                self.close_open_block()?;
            }
            LineEvent::Paragraph(content) => {
                if let Some(kind) = self.state.close_list_block() {
                    writeln!(self.output, "{}", kind.close_tag())?;
                }
                self.state.push_paragraph_line(content);
            }
        }
        Ok(())
    }

    /// Close any block still open and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.close_open_block()?;
        Ok(self.output)
    }

    /// Emit a list item, switching list containers if needed.
    fn list_item(&mut self, kind: ListKind, content: &str) -> io::Result<()> {
        if self.state.open_list() != Some(kind) {
            self.close_open_block()?;
            writeln!(self.output, "{}", kind.open_tag())?;
            self.state.open_list_block(kind);
        }
        writeln!(self.output, "<li>{content}</li>")?;
        Ok(())
    }

    /// Flush an open paragraph or close an open list.
    fn close_open_block(&mut self) -> io::Result<()> {
        if let Some(kind) = self.state.close_list_block() {
            writeln!(self.output, "{}", kind.close_tag())?;
            return Ok(());
        }

        let lines = self.state.take_paragraph();
        if lines.is_empty() {
            return Ok(());
        }

        writeln!(self.output, "<p>")?;
        for (ix, line) in lines.iter().enumerate() {
            if ix > 0 {
                writeln!(self.output, "<br/>")?;
            }
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "</p>")?;
        Ok(())
    }
}

/// Convert a whole markdown document to an HTML string.
///
/// Convenience wrapper over [`Renderer`] for in-memory conversion.
pub fn convert_document(markdown: &str) -> String {
    let mut renderer = Renderer::new(Vec::new());
    for line in markdown.lines() {
        renderer
            .render_event(classify(line))
            .expect("writing to a Vec cannot fail");
    }
    let output = renderer.finish().expect("writing to a Vec cannot fail");
    String::from_utf8(output).expect("output is built from UTF-8 fragments")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(convert_document("# One"), "<h1>One</h1>\n");
        assert_eq!(convert_document("###### Six"), "<h6>Six</h6>\n");
    }

    #[test]
    fn test_single_paragraph() {
        assert_eq!(convert_document("Hello"), "<p>\nHello\n</p>\n");
    }

    #[test]
    fn test_paragraph_with_break() {
        assert_eq!(
            convert_document("Hello\nWorld"),
            "<p>\nHello\n<br/>\nWorld\n</p>\n"
        );
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        assert_eq!(
            convert_document("One\n\nTwo"),
            "<p>\nOne\n</p>\n<p>\nTwo\n</p>\n"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            convert_document("- a\n- b"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            convert_document("* a\n* b"),
            "<ol>\n<li>a</li>\n<li>b</li>\n</ol>\n"
        );
    }

    #[test]
    fn test_list_kind_switch_closes_previous() {
        assert_eq!(
            convert_document("- a\n* b"),
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>\n"
        );
    }

    #[test]
    fn test_heading_closes_list() {
        assert_eq!(
            convert_document("- a\n# Head"),
            "<ul>\n<li>a</li>\n</ul>\n<h1>Head</h1>\n"
        );
    }

    #[test]
    fn test_paragraph_closes_list() {
        assert_eq!(
            convert_document("- a\ntext"),
            "<ul>\n<li>a</li>\n</ul>\n<p>\ntext\n</p>\n"
        );
    }

    #[test]
    fn test_heading_flushes_paragraph() {
        assert_eq!(
            convert_document("text\n# Head"),
            "<p>\ntext\n</p>\n<h1>Head</h1>\n"
        );
    }

    #[test]
    fn test_list_item_flushes_paragraph() {
        assert_eq!(
            convert_document("text\n- a"),
            "<p>\ntext\n</p>\n<ul>\n<li>a</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_eof_closes_open_list() {
        assert_eq!(convert_document("- a"), "<ul>\n<li>a</li>\n</ul>\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_document(""), "");
    }

    #[test]
    fn test_blank_only_input() {
        assert_eq!(convert_document("\n\n\n"), "");
    }

    #[test]
    fn test_inline_in_list_and_heading() {
        assert_eq!(
            convert_document("# **Big**\n- __em__"),
            "<h1><b>Big</b></h1>\n<ul>\n<li><em>em</em></li>\n</ul>\n"
        );
    }
}
