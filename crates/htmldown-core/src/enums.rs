//! Core enums for htmldown conversion state.
//!
//! These enums represent the block-level states the converter can be in
//! while walking a document line by line.

use serde::{Deserialize, Serialize};

/// Represents the type of list currently open in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Unordered list, introduced by `- ` items
    Unordered,
    /// Ordered list, introduced by `* ` items
    Ordered,
}

impl ListKind {
    /// The opening HTML tag for this list kind.
    pub fn open_tag(&self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    /// The closing HTML tag for this list kind.
    pub fn close_tag(&self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Unordered => write!(f, "unordered"),
            ListKind::Ordered => write!(f, "ordered"),
        }
    }
}

/// The block currently open in the output.
///
/// At most one block is open at a time; opening a different block type
/// first closes whatever was open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockState {
    /// No block open
    #[default]
    Closed,
    /// A paragraph is being accumulated
    InParagraph,
    /// An unordered list is open
    InUnorderedList,
    /// An ordered list is open
    InOrderedList,
}

impl BlockState {
    /// The kind of list open in this state, if any.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            BlockState::InUnorderedList => Some(ListKind::Unordered),
            BlockState::InOrderedList => Some(ListKind::Ordered),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockState::Closed => write!(f, "closed"),
            BlockState::InParagraph => write!(f, "paragraph"),
            BlockState::InUnorderedList => write!(f, "unordered-list"),
            BlockState::InOrderedList => write!(f, "ordered-list"),
        }
    }
}

impl From<ListKind> for BlockState {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Unordered => BlockState::InUnorderedList,
            ListKind::Ordered => BlockState::InOrderedList,
        }
    }
}
