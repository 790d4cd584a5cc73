//! # input_core
//!
//! UI-agnostic editing state for text fields.
//!
//! - [`InputId`]: opaque field handle
//! - [`InputValueStore`]: values, carets and character lengths
//!
//! Nothing here knows about DOM nodes; integration layers map their element
//! ids onto [`InputId`] at the boundary.

mod id;
mod state;
mod store;
mod text;

pub use id::InputId;
pub use store::InputValueStore;

pub use text::{
    char_count, clamp_to_char_boundary, filter_single_line, normalize_newlines,
    prev_cursor_boundary,
};
