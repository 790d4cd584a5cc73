use html::Id;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Notifications emitted by a page for its form fields.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    /// The content of a text field changed (one per mutation).
    Input { target: Id },
}

impl FieldEvent {
    pub fn target(&self) -> Id {
        match self {
            FieldEvent::Input { target } => *target,
        }
    }
}

/// Single-threaded event queue: producers push, the page drains in order.
pub struct Bus {
    pub evt_tx: Sender<FieldEvent>, // shareable for producers
    pub evt_rx: Receiver<FieldEvent>,
}

impl Bus {
    pub fn new() -> Self {
        let (evt_tx, evt_rx) = channel();
        Self { evt_tx, evt_rx }
    }

    pub fn emit(&self, event: FieldEvent) {
        // The receiver lives as long as `self`, so sending cannot fail here.
        let _ = self.evt_tx.send(event);
    }

    /// Pending events in emission order, without blocking.
    pub fn drain(&self) -> impl Iterator<Item = FieldEvent> + '_ {
        self.evt_rx.try_iter()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
