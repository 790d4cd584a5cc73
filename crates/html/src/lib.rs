//! Minimal owned DOM used by the counter integration.
//!
//! Nodes form an owned tree ([`Node`]) wrapped by [`DomTree`], which keeps
//! ids unique and offers the lookups and mutations a form helper needs:
//! id/class lookup, attribute access, next-sibling navigation, insertion
//! after a node and text replacement.

pub mod dom_snapshot;
pub mod dom_utils;
pub mod traverse;

mod tree;
mod types;

pub use crate::dom_snapshot::{DomSnapshot, DomSnapshotOptions};
pub use crate::tree::DomTree;
pub use crate::types::{Id, Node, NodeId};
