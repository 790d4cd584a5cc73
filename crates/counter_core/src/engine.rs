//! The counter state machine bound to a single element.

use crate::config::{Callbacks, CounterOptions};
use crate::error::InitializationError;
use crate::host::CounterHost;
use crate::state::{StateName, StateSet};
use std::fmt;

/// Tracks the remaining characters of one element and keeps its counter in sync.
///
/// Invariants after [`CounterEngine::attach`] returns:
/// - `remaining == limit - input_length`, never clamped (it goes negative when
///   the content is over the limit).
/// - exactly one state is active.
/// - the counter element exists and shows `remaining` with class
///   `"<counter_class> <active label>"`.
pub struct CounterEngine<E> {
    element: E,
    counter: E,
    states: StateSet,
    counter_class: String,
    input_length: usize,
    remaining: i64,
    callbacks: Callbacks<E>,
}

impl<E: fmt::Debug> fmt::Debug for CounterEngine<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterEngine")
            .field("element", &self.element)
            .field("counter", &self.counter)
            .field("limit", &self.states.threshold(StateName::Fine))
            .field("input_length", &self.input_length)
            .field("remaining", &self.remaining)
            .field("active", &self.states.active())
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

impl<E: Copy + Eq + fmt::Debug> CounterEngine<E> {
    /// Bind an engine to `options.element`.
    ///
    /// Resolves the effective limit (the element's native maximum length wins
    /// over `config.limit`), validates the thresholds, runs the first
    /// classification pass, renders the counter and registers the listener.
    pub fn attach<H>(host: &mut H, options: CounterOptions<E>) -> Result<Self, InitializationError>
    where
        H: CounterHost<Element = E>,
    {
        let CounterOptions {
            element,
            config,
            callbacks,
        } = options;

        let element = element.ok_or(InitializationError::MissingElement)?;
        if !host.contains(element) {
            return Err(InitializationError::UnknownElement(format!("{element:?}")));
        }

        let limit = match host.max_length(element) {
            Some(native) => {
                log::debug!(
                    target: "charcount.engine",
                    "{element:?}: native max length {native} overrides configured limit {}",
                    config.limit
                );
                native
            }
            None => config.limit,
        };
        config.validate(limit)?;

        let mut engine = Self {
            element,
            // Placeholder until the counter exists; never observable.
            counter: element,
            states: config.state_set(limit),
            counter_class: config.counter_class,
            input_length: 0,
            remaining: limit,
            callbacks,
        };

        engine.recompute(host);
        engine.determine_state();
        engine.counter = engine.create_counter(host)?;
        host.listen(element);

        Ok(engine)
    }

    /// Recompute lengths, re-classify and re-render.
    ///
    /// Called for every content-change notification of the bound element.
    /// Returns the state that was entered, if the pass caused a transition.
    pub fn update_state<H>(&mut self, host: &mut H) -> Option<StateName>
    where
        H: CounterHost<Element = E>,
    {
        self.recompute(host);
        let entered = self.determine_state();
        self.update_counter(host);
        entered
    }

    /// Classify the current counts and fire the entered state's callback.
    ///
    /// Returns the new state when the classification changed. The callback
    /// runs only on the first entry into a state over the engine's lifetime:
    /// repeated passes within one state are silent, and so is coming back to
    /// a state that was entered before.
    pub fn determine_state(&mut self) -> Option<StateName> {
        let next = self.states.classify(self.input_length, self.remaining);
        if self.states.is_active(next) {
            return None;
        }

        let previous = self.states.active();
        let first_entry = self.states.mark_entered(next);
        if first_entry && let Some(callback) = self.callbacks.get(next) {
            callback(self.element, self.remaining);
        }
        self.states.set_active(next);

        log::debug!(
            target: "charcount.engine",
            "{:?}: {} -> {next} (remaining {}, first entry {first_entry})",
            self.element,
            previous.map_or("none", StateName::as_str),
            self.remaining
        );
        Some(next)
    }

    fn recompute<H>(&mut self, host: &H)
    where
        H: CounterHost<Element = E>,
    {
        self.input_length = host.value_len(self.element);
        self.remaining = self.limit() - self.input_length as i64;
        log::trace!(
            target: "charcount.engine",
            "{:?}: length {} remaining {}",
            self.element,
            self.input_length,
            self.remaining
        );
    }

    fn create_counter<H>(&self, host: &mut H) -> Result<E, InitializationError>
    where
        H: CounterHost<Element = E>,
    {
        let class = self.counter_class_attr();
        let text = self.remaining.to_string();

        if let Some(existing) = host.find_counter(self.element, &self.counter_class) {
            log::debug!(
                target: "charcount.engine",
                "{:?}: adopting existing counter {existing:?}",
                self.element
            );
            host.update_counter(existing, &class, &text);
            return Ok(existing);
        }

        let counter = host
            .create_counter(self.element, &class, &text)
            .ok_or(InitializationError::CounterUnavailable)?;
        log::debug!(
            target: "charcount.engine",
            "{:?}: created counter {counter:?}",
            self.element
        );
        Ok(counter)
    }

    fn update_counter<H>(&self, host: &mut H)
    where
        H: CounterHost<Element = E>,
    {
        host.update_counter(
            self.counter,
            &self.counter_class_attr(),
            &self.remaining.to_string(),
        );
    }

    /// The bound element.
    pub fn element(&self) -> E {
        self.element
    }

    /// The rendered counter element.
    pub fn counter(&self) -> E {
        self.counter
    }

    /// Effective limit (the fine threshold).
    pub fn limit(&self) -> i64 {
        self.states.threshold(StateName::Fine)
    }

    pub fn input_length(&self) -> usize {
        self.input_length
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn active_state(&self) -> StateName {
        self.states.active().unwrap_or(StateName::Empty)
    }

    pub fn states(&self) -> &StateSet {
        &self.states
    }

    pub fn counter_class(&self) -> &str {
        &self.counter_class
    }

    /// The full class attribute of the counter: `"<counter_class> <label>"`.
    pub fn counter_class_attr(&self) -> String {
        format!(
            "{} {}",
            self.counter_class,
            self.states.label(self.active_state())
        )
    }
}
