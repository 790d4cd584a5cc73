//! # counter_core
//!
//! UI-agnostic remaining-character tracking for text fields.
//!
//! A [`CounterEngine`] is bound to one text field. On every content change it
//! recomputes how many characters remain before the field's limit, classifies
//! that number into one of five [`StateName`]s and keeps a rendered counter
//! element in sync:
//!
//! - [`StateSet`]: the five thresholds/labels, the active state and which
//!   states have been entered (callbacks fire on first entry only)
//! - [`CounterConfig`]: serializable thresholds and class names (TOML)
//! - [`CounterOptions`]: config plus the bound element and transition callbacks
//! - [`CounterHost`]: the seam to whatever owns the elements (a DOM, a test mock)
//!
//! ## Design Principles
//!
//! This crate does not know what an element is. Integration layers implement
//! [`CounterHost`] and hand the engine concrete element handles; resolving
//! selectors into handles is their concern as well.
//!
//! ```
//! use counter_core::{CounterConfig, CounterEngine, CounterHost, CounterOptions, StateName};
//!
//! struct Field {
//!     value: String,
//!     counter: Option<(String, String)>,
//! }
//!
//! impl CounterHost for Field {
//!     type Element = u32;
//!
//!     fn contains(&self, element: u32) -> bool {
//!         element == 1
//!     }
//!     fn value_len(&self, _: u32) -> usize {
//!         self.value.chars().count()
//!     }
//!     fn max_length(&self, _: u32) -> Option<i64> {
//!         None
//!     }
//!     fn create_counter(&mut self, _: u32, class: &str, text: &str) -> Option<u32> {
//!         self.counter = Some((class.to_string(), text.to_string()));
//!         Some(2)
//!     }
//!     fn update_counter(&mut self, _: u32, class: &str, text: &str) {
//!         self.counter = Some((class.to_string(), text.to_string()));
//!     }
//!     fn listen(&mut self, _: u32) {}
//! }
//!
//! let mut field = Field { value: "a".into(), counter: None };
//! let options = CounterOptions::new(CounterConfig::default()).element(1);
//! let engine = CounterEngine::attach(&mut field, options).unwrap();
//!
//! assert_eq!(engine.active_state(), StateName::Fine);
//! assert_eq!(engine.remaining(), 99);
//! assert_eq!(
//!     field.counter,
//!     Some(("cc-count cc-is-fine".to_string(), "99".to_string()))
//! );
//! ```

mod config;
mod engine;
mod error;
mod host;
mod state;

pub use config::{Callback, Callbacks, CounterConfig, CounterOptions};
pub use engine::CounterEngine;
pub use error::{ConfigError, InitializationError};
pub use host::CounterHost;
pub use state::{State, StateName, StateSet};
