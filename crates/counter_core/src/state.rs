//! The five counter states and their thresholds.

use std::fmt;

/// Name of one of the five counter states.
///
/// Discriminants follow the evaluation priority used by
/// [`StateSet::classify`]: the first state whose condition holds wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateName {
    /// The field holds no characters at all.
    Empty = 0,
    /// No characters remain (or the field is over its limit).
    Expended = 1,
    Danger = 2,
    Warning = 3,
    /// Fallback when no lower threshold matches.
    Fine = 4,
}

impl StateName {
    /// All states in evaluation priority order.
    pub const PRIORITY: [StateName; 5] = [
        StateName::Empty,
        StateName::Expended,
        StateName::Danger,
        StateName::Warning,
        StateName::Fine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StateName::Empty => "empty",
            StateName::Expended => "expended",
            StateName::Danger => "danger",
            StateName::Warning => "warning",
            StateName::Fine => "fine",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(threshold, label)` pair.
///
/// The label is opaque to the engine; integration layers render it as a
/// presentation class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    threshold: i64,
    label: String,
}

impl State {
    pub fn new(threshold: i64, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
        }
    }

    /// Remaining-character value at or below which this state is eligible.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: i64) -> &mut Self {
        self.threshold = threshold;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }
}

/// The five named states plus the single last-entered state.
///
/// Only one state can be active at a time: activity is tracked as one
/// `Option<StateName>`, and [`StateSet::is_active`] is derived from it.
/// Separately, every state that has ever been entered is remembered and
/// never forgotten; that record gates transition callbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSet {
    states: [State; 5],
    active: Option<StateName>,
    /// One bit per [`StateName`] discriminant.
    entered: u8,
}

impl StateSet {
    /// Build a set from the five states. No ordering between thresholds is
    /// enforced here; see [`CounterConfig::validate`](crate::CounterConfig::validate).
    pub fn new(empty: State, expended: State, danger: State, warning: State, fine: State) -> Self {
        Self {
            states: [empty, expended, danger, warning, fine],
            active: None,
            entered: 0,
        }
    }

    pub fn get(&self, name: StateName) -> &State {
        &self.states[name.index()]
    }

    pub fn get_mut(&mut self, name: StateName) -> &mut State {
        &mut self.states[name.index()]
    }

    pub fn threshold(&self, name: StateName) -> i64 {
        self.get(name).threshold()
    }

    pub fn label(&self, name: StateName) -> &str {
        self.get(name).label()
    }

    pub fn is_active(&self, name: StateName) -> bool {
        self.active == Some(name)
    }

    /// The last-entered state, `None` before the first classification pass.
    pub fn active(&self) -> Option<StateName> {
        self.active
    }

    /// Make `name` the active state.
    ///
    /// Returns `true` if this changed the active state.
    pub fn set_active(&mut self, name: StateName) -> bool {
        let changed = self.active != Some(name);
        self.active = Some(name);
        changed
    }

    /// Whether `name` has been entered at any point, active or not.
    pub fn has_entered(&self, name: StateName) -> bool {
        self.entered & name.bit() != 0
    }

    /// Record that `name` was entered.
    ///
    /// Returns `true` only the first time for each state.
    pub fn mark_entered(&mut self, name: StateName) -> bool {
        let first = !self.has_entered(name);
        self.entered |= name.bit();
        first
    }

    /// Select the state for a field holding `input_length` characters with
    /// `remaining` characters left before its limit.
    ///
    /// Priority is fixed: empty, expended, danger, warning, then fine as the
    /// fallback. The fine threshold equals the limit, so with a non-negative
    /// length it would always match anyway.
    pub fn classify(&self, input_length: usize, remaining: i64) -> StateName {
        if input_length == 0 {
            return StateName::Empty;
        }
        [StateName::Expended, StateName::Danger, StateName::Warning]
            .into_iter()
            .find(|name| remaining <= self.threshold(*name))
            .unwrap_or(StateName::Fine)
    }
}
