//! Host trait: the seam between the engine and whatever owns the elements.
//!
//! # Design Principles
//!
//! - The engine only ever holds `Self::Element` handles; it never creates or
//!   destroys the bound element.
//! - Counter rendering is a two-step contract: [`CounterHost::create_counter`]
//!   runs once per engine, [`CounterHost::update_counter`] on every pass.
//! - Lengths are counted in Unicode scalar values.

use std::fmt;

/// Element access needed by a [`CounterEngine`](crate::CounterEngine).
pub trait CounterHost {
    /// Copyable handle for an element owned by the host.
    type Element: Copy + Eq + fmt::Debug;

    /// Returns `true` if `element` refers to a live element.
    fn contains(&self, element: Self::Element) -> bool;

    /// Current content length of `element` in characters.
    fn value_len(&self, element: Self::Element) -> usize;

    /// The element's native maximum length, if it declares a valid one.
    ///
    /// Malformed or negative declarations should be reported as `None`.
    fn max_length(&self, element: Self::Element) -> Option<i64>;

    /// An existing counter already rendered for `element`, if any.
    ///
    /// Engines adopt a counter found here instead of creating a second one.
    fn find_counter(
        &self,
        _element: Self::Element,
        _counter_class: &str,
    ) -> Option<Self::Element> {
        None
    }

    /// Insert a new counter immediately after `element`.
    ///
    /// Returns `None` if the counter could not be placed.
    fn create_counter(
        &mut self,
        element: Self::Element,
        class: &str,
        text: &str,
    ) -> Option<Self::Element>;

    /// Replace the text and class of an existing counter in place.
    fn update_counter(&mut self, counter: Self::Element, class: &str, text: &str);

    /// Register interest in content-change notifications for `element`.
    fn listen(&mut self, element: Self::Element);
}
