//! Conversion state for single-pass markdown processing.
//!
//! The [`ConvertState`] struct maintains all state needed to walk a
//! document line by line: which block is currently open in the output,
//! and the lines buffered for the paragraph in progress.

use crate::enums::{BlockState, ListKind};

/// Main conversion state for single-pass markdown processing.
///
/// Created empty at the start of a run, mutated line by line, and
/// drained at end of input so no open block is left unclosed.
///
/// # Example
///
/// ```
/// use htmldown_core::ConvertState;
///
/// let mut state = ConvertState::new();
/// assert!(!state.in_paragraph());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertState {
    /// The block currently open in the output
    pub block: BlockState,
    /// Lines accumulated for the paragraph in progress
    pub paragraph: Vec<String>,
}

impl ConvertState {
    /// Create a new state with no open block.
    pub fn new() -> Self {
        Self {
            block: BlockState::Closed,
            paragraph: Vec::new(),
        }
    }

    /// Check if a paragraph is currently being accumulated.
    pub fn in_paragraph(&self) -> bool {
        self.block == BlockState::InParagraph
    }

    /// The kind of list currently open, if any.
    pub fn open_list(&self) -> Option<ListKind> {
        self.block.list_kind()
    }

    /// Append a line to the paragraph in progress, opening one if needed.
    pub fn push_paragraph_line(&mut self, line: String) {
        self.paragraph.push(line);
        self.block = BlockState::InParagraph;
    }

    /// Take the buffered paragraph lines and close the paragraph.
    ///
    /// Returns an empty vector when no paragraph is open.
    pub fn take_paragraph(&mut self) -> Vec<String> {
        if self.block == BlockState::InParagraph {
            self.block = BlockState::Closed;
        }
        std::mem::take(&mut self.paragraph)
    }

    /// Mark a list of the given kind as open.
    pub fn open_list_block(&mut self, kind: ListKind) {
        self.block = kind.into();
    }

    /// Close whatever list is open, returning its kind.
    pub fn close_list_block(&mut self) -> Option<ListKind> {
        let kind = self.block.list_kind();
        if kind.is_some() {
            self.block = BlockState::Closed;
        }
        kind
    }
}
