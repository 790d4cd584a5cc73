//! Page-level integration: a DOM with seeded text fields, the input-change
//! bus, and the character counters bound to those fields.

mod counter_host;
pub mod form_controls;
mod page;
pub mod resolve;

pub use page::{AttachReport, Page};
pub use resolve::{DEFAULT_FIELD_CLASS, ResolveError, Selector};
