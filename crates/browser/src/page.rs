use crate::counter_host::DomCounterHost;
use crate::form_controls::{field_key, seed_text_fields_from_dom, text_control_kind};
use crate::resolve::Selector;
use bus::{Bus, FieldEvent};
use counter_core::{CounterEngine, CounterOptions, InitializationError};
use html::{DomTree, Id, Node};
use input_core::InputValueStore;
use std::collections::{HashMap, HashSet};

/// Outcome of fanning one set of options out over a selector.
#[derive(Debug, Default)]
pub struct AttachReport {
    pub attached: Vec<Id>,
    pub failed: Vec<(Id, InitializationError)>,
}

/// A document with live text fields and the counters bound to them.
///
/// Edits go through the page so that each mutation is announced on the bus;
/// [`Page::pump`] then runs one update pass per event on the listening
/// counter. Events are handled one at a time, in order.
pub struct Page {
    dom: DomTree,
    inputs: InputValueStore,
    bus: Bus,
    listeners: HashSet<Id>,
    counters: HashMap<Id, CounterEngine<Id>>,
}

impl Page {
    pub fn new(root: Node) -> Self {
        let dom = DomTree::new(root);
        let mut inputs = InputValueStore::new();
        seed_text_fields_from_dom(&mut inputs, dom.root());
        Self {
            dom,
            inputs,
            bus: Bus::new(),
            listeners: HashSet::new(),
            counters: HashMap::new(),
        }
    }

    pub fn dom(&self) -> &DomTree {
        &self.dom
    }

    pub fn inputs(&self) -> &InputValueStore {
        &self.inputs
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Current value of a text field.
    pub fn value(&self, element: Id) -> Option<&str> {
        self.inputs.get(field_key(element))
    }

    pub fn is_listening(&self, element: Id) -> bool {
        self.listeners.contains(&element)
    }

    // --- Counters ---

    /// Bind a counter to `options.element`.
    ///
    /// Attaching twice to the same element replaces the engine; the new one
    /// adopts the counter element already in the DOM.
    pub fn attach_counter(&mut self, options: CounterOptions<Id>) -> Result<Id, InitializationError> {
        let mut host = DomCounterHost {
            dom: &mut self.dom,
            inputs: &self.inputs,
            listeners: &mut self.listeners,
        };
        let engine = CounterEngine::attach(&mut host, options)?;
        let element = engine.element();
        if self.counters.insert(element, engine).is_some() {
            log::debug!(target: "browser.page", "replaced counter on {element:?}");
        }
        Ok(element)
    }

    /// Bind one counter per element matched by `selector`, each with a copy
    /// of `options`.
    pub fn attach_counters(
        &mut self,
        selector: &Selector,
        options: &CounterOptions<Id>,
    ) -> AttachReport {
        let mut report = AttachReport::default();
        for element in selector.resolve(&self.dom) {
            match self.attach_counter(options.for_element(element)) {
                Ok(id) => report.attached.push(id),
                Err(err) => {
                    log::warn!(target: "browser.page", "{selector}: {err}");
                    report.failed.push((element, err));
                }
            }
        }
        report
    }

    pub fn counter(&self, element: Id) -> Option<&CounterEngine<Id>> {
        self.counters.get(&element)
    }

    pub fn counters(&self) -> impl Iterator<Item = &CounterEngine<Id>> {
        self.counters.values()
    }

    /// Stop tracking `element`. The rendered counter stays in the DOM.
    pub fn detach_counter(&mut self, element: Id) -> Option<CounterEngine<Id>> {
        self.listeners.remove(&element);
        self.counters.remove(&element)
    }

    // --- Editing ---

    /// Insert text at the caret of a text field.
    pub fn type_text(&mut self, element: Id, text: &str) -> bool {
        self.edit(element, |inputs, key| inputs.insert_text(key, text))
    }

    pub fn backspace(&mut self, element: Id) -> bool {
        self.edit(element, |inputs, key| inputs.backspace(key))
    }

    pub fn set_value(&mut self, element: Id, value: &str) -> bool {
        self.edit(element, |inputs, key| inputs.set(key, value))
    }

    /// Empty the field.
    pub fn clear(&mut self, element: Id) -> bool {
        self.set_value(element, "")
    }

    fn edit(
        &mut self,
        element: Id,
        apply: impl FnOnce(&mut InputValueStore, input_core::InputId) -> bool,
    ) -> bool {
        let key = field_key(element);
        if !self.inputs.has(key) {
            let kind = self.dom.get(element).map(text_control_kind);
            log::warn!(
                target: "browser.page",
                "ignoring edit on {element:?}: not a text field ({kind:?})"
            );
            return false;
        }
        let changed = apply(&mut self.inputs, key);
        if changed {
            self.bus.emit(FieldEvent::Input { target: element });
        }
        changed
    }

    /// Dispatch every pending event to its listening counter.
    ///
    /// Returns the number of update passes run.
    pub fn pump(&mut self) -> usize {
        let events: Vec<FieldEvent> = self.bus.drain().collect();
        let mut passes = 0;
        for event in events {
            let target = event.target();
            if !self.listeners.contains(&target) {
                continue;
            }
            let Some(engine) = self.counters.get_mut(&target) else {
                continue;
            };
            let mut host = DomCounterHost {
                dom: &mut self.dom,
                inputs: &self.inputs,
                listeners: &mut self.listeners,
            };
            engine.update_state(&mut host);
            passes += 1;
        }
        log::trace!(target: "browser.page", "pump ran {passes} update passes");
        passes
    }
}
