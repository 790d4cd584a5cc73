use crate::form_controls::field_key;
use counter_core::CounterHost;
use html::dom_utils::{has_class, non_negative_int_attr};
use html::{DomTree, Id, Node};
use input_core::InputValueStore;
use std::collections::HashSet;

/// [`CounterHost`] over a page's DOM and input store.
///
/// Borrowed per pass; the page owns all three parts.
pub(crate) struct DomCounterHost<'a> {
    pub dom: &'a mut DomTree,
    pub inputs: &'a InputValueStore,
    pub listeners: &'a mut HashSet<Id>,
}

impl CounterHost for DomCounterHost<'_> {
    type Element = Id;

    fn contains(&self, element: Id) -> bool {
        self.dom.contains(element) && self.inputs.has(field_key(element))
    }

    fn value_len(&self, element: Id) -> usize {
        self.inputs.char_len(field_key(element))
    }

    fn max_length(&self, element: Id) -> Option<i64> {
        let node = self.dom.get(element)?;
        match non_negative_int_attr(node, "maxlength")? {
            Ok(max) => Some(max),
            Err(raw) => {
                log::warn!(
                    target: "browser.page",
                    "ignoring malformed maxlength {raw:?} on {element:?}"
                );
                None
            }
        }
    }

    fn find_counter(&self, element: Id, counter_class: &str) -> Option<Id> {
        let sibling = self.dom.next_element_sibling(element)?;
        let node = self.dom.get(sibling)?;
        has_class(node, counter_class).then_some(sibling)
    }

    fn create_counter(&mut self, element: Id, class: &str, text: &str) -> Option<Id> {
        let counter = Node::element("small", [("class", Some(class))], vec![Node::text(text)]);
        self.dom.insert_after(element, counter)
    }

    fn update_counter(&mut self, counter: Id, class: &str, text: &str) {
        self.dom.set_attribute(counter, "class", Some(class));
        self.dom.set_text_content(counter, text);
    }

    fn listen(&mut self, element: Id) {
        self.listeners.insert(element);
    }
}
