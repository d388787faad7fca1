//! Htmldown Core
//!
//! This crate provides core types, state, and error definitions
//! for the htmldown markdown-to-HTML converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ConvertState`] - Open-block tracking and paragraph buffering
//! - [`BlockState`], [`ListKind`] - State enums
//! - [`HtmldownError`] - Error types

pub mod enums;
pub mod error;
pub mod state;

pub use enums::{BlockState, ListKind};
pub use error::{HtmldownError, Result};
pub use state::ConvertState;
