//! Counter configuration and construction options.

use crate::error::ConfigError;
use crate::state::{State, StateName, StateSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::rc::Rc;

/// Transition callback, invoked with the bound element and the remaining
/// character count at the moment the state was entered.
pub type Callback<E> = Rc<dyn Fn(E, i64)>;

/// Serializable thresholds and presentation classes.
///
/// Every field has a default, so an empty TOML document is a valid config.
///
/// ```
/// use counter_core::CounterConfig;
///
/// let config = CounterConfig::from_toml_str("warning_threshold = 40\nlimit = 280").unwrap();
/// assert_eq!(config.warning_threshold, 40);
/// assert_eq!(config.danger_threshold, 10);
/// assert_eq!(config.limit, 280);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    pub warning_threshold: i64,
    pub danger_threshold: i64,
    /// Used unless the element declares its own maximum length.
    #[serde(alias = "expended_threshold", alias = "limit_threshold")]
    pub limit: i64,
    pub counter_class: String,
    pub empty_class: String,
    pub fine_class: String,
    pub warning_class: String,
    pub danger_class: String,
    pub expended_class: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            warning_threshold: 25,
            danger_threshold: 10,
            limit: 100,
            counter_class: "cc-count".to_string(),
            empty_class: "cc-is-empty".to_string(),
            fine_class: "cc-is-fine".to_string(),
            warning_class: "cc-is-warning".to_string(),
            danger_class: "cc-is-danger".to_string(),
            expended_class: "cc-is-expended".to_string(),
        }
    }
}

impl CounterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CounterConfig = toml::from_str(source)?;
        log::debug!(target: "charcount.config", "parsed counter config: {config:?}");
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Check the thresholds against the effective `limit`.
    ///
    /// Expended and empty are fixed at zero, so the remaining order to check
    /// is `0 <= danger <= warning`, plus a non-negative limit.
    pub fn validate(&self, limit: i64) -> Result<(), ConfigError> {
        let invalid = |reason: String| Err(ConfigError::InvalidThresholds { reason });

        if limit < 0 {
            return invalid(format!("limit must not be negative (got {limit})"));
        }
        if self.danger_threshold < 0 {
            return invalid(format!(
                "danger_threshold must not be negative (got {})",
                self.danger_threshold
            ));
        }
        if self.warning_threshold < 0 {
            return invalid(format!(
                "warning_threshold must not be negative (got {})",
                self.warning_threshold
            ));
        }
        if self.danger_threshold > self.warning_threshold {
            return invalid(format!(
                "danger_threshold ({}) is above warning_threshold ({})",
                self.danger_threshold, self.warning_threshold
            ));
        }
        Ok(())
    }

    /// Build the five states for an effective `limit`.
    pub fn state_set(&self, limit: i64) -> StateSet {
        StateSet::new(
            State::new(0, self.empty_class.as_str()),
            State::new(0, self.expended_class.as_str()),
            State::new(self.danger_threshold, self.danger_class.as_str()),
            State::new(self.warning_threshold, self.warning_class.as_str()),
            State::new(limit, self.fine_class.as_str()),
        )
    }
}

/// Optional per-state transition callbacks.
pub struct Callbacks<E> {
    pub on_field_empty: Option<Callback<E>>,
    pub on_field_fine: Option<Callback<E>>,
    pub on_field_warning: Option<Callback<E>>,
    pub on_field_danger: Option<Callback<E>>,
    pub on_field_expended: Option<Callback<E>>,
}

impl<E> Callbacks<E> {
    pub fn get(&self, name: StateName) -> Option<&Callback<E>> {
        match name {
            StateName::Empty => self.on_field_empty.as_ref(),
            StateName::Fine => self.on_field_fine.as_ref(),
            StateName::Warning => self.on_field_warning.as_ref(),
            StateName::Danger => self.on_field_danger.as_ref(),
            StateName::Expended => self.on_field_expended.as_ref(),
        }
    }

    fn slot(&mut self, name: StateName) -> &mut Option<Callback<E>> {
        match name {
            StateName::Empty => &mut self.on_field_empty,
            StateName::Fine => &mut self.on_field_fine,
            StateName::Warning => &mut self.on_field_warning,
            StateName::Danger => &mut self.on_field_danger,
            StateName::Expended => &mut self.on_field_expended,
        }
    }
}

impl<E> Default for Callbacks<E> {
    fn default() -> Self {
        Self {
            on_field_empty: None,
            on_field_fine: None,
            on_field_warning: None,
            on_field_danger: None,
            on_field_expended: None,
        }
    }
}

impl<E> Clone for Callbacks<E> {
    fn clone(&self) -> Self {
        Self {
            on_field_empty: self.on_field_empty.clone(),
            on_field_fine: self.on_field_fine.clone(),
            on_field_warning: self.on_field_warning.clone(),
            on_field_danger: self.on_field_danger.clone(),
            on_field_expended: self.on_field_expended.clone(),
        }
    }
}

impl<E> fmt::Debug for Callbacks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for name in StateName::PRIORITY {
            if self.get(name).is_some() {
                set.entry(&name);
            }
        }
        set.finish()
    }
}

/// Everything needed to attach a [`CounterEngine`](crate::CounterEngine).
///
/// Cloning is cheap enough to fan one set of options out over many
/// elements: callbacks are reference-counted.
#[derive(Debug)]
pub struct CounterOptions<E> {
    pub element: Option<E>,
    pub config: CounterConfig,
    pub callbacks: Callbacks<E>,
}

impl<E: Copy> Clone for CounterOptions<E> {
    fn clone(&self) -> Self {
        Self {
            element: self.element,
            config: self.config.clone(),
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<E> Default for CounterOptions<E> {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

impl<E> CounterOptions<E> {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            element: None,
            config,
            callbacks: Callbacks::default(),
        }
    }

    pub fn element(mut self, element: E) -> Self {
        self.element = Some(element);
        self
    }

    /// Register (or replace) the callback fired when `name` is entered.
    pub fn on_enter(mut self, name: StateName, callback: impl Fn(E, i64) + 'static) -> Self {
        *self.callbacks.slot(name) = Some(Rc::new(callback));
        self
    }

    pub fn on_field_empty(self, callback: impl Fn(E, i64) + 'static) -> Self {
        self.on_enter(StateName::Empty, callback)
    }

    pub fn on_field_fine(self, callback: impl Fn(E, i64) + 'static) -> Self {
        self.on_enter(StateName::Fine, callback)
    }

    pub fn on_field_warning(self, callback: impl Fn(E, i64) + 'static) -> Self {
        self.on_enter(StateName::Warning, callback)
    }

    pub fn on_field_danger(self, callback: impl Fn(E, i64) + 'static) -> Self {
        self.on_enter(StateName::Danger, callback)
    }

    pub fn on_field_expended(self, callback: impl Fn(E, i64) + 'static) -> Self {
        self.on_enter(StateName::Expended, callback)
    }
}

impl<E: Copy> CounterOptions<E> {
    /// A copy of these options bound to `element`.
    pub fn for_element(&self, element: E) -> Self {
        self.clone().element(element)
    }
}
