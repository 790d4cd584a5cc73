use super::dom::{TextControlKind, text_control_kind};
use html::dom_utils::{attr, collect_text};
use html::{Id, Node};
use input_core::{InputId, InputValueStore};

/// Store key for a DOM element.
#[inline]
pub fn field_key(id: Id) -> InputId {
    InputId::from(id.0)
}

/// Seed the store with the initial value of every text control in `dom`.
///
/// Inputs take their `value` attribute, textareas their text content (with
/// the single leading newline HTML parsing drops). Fields already present in
/// the store keep their value. Returns the seeded element ids in document
/// order.
pub fn seed_text_fields_from_dom(store: &mut InputValueStore, dom: &Node) -> Vec<Id> {
    fn walk(store: &mut InputValueStore, node: &Node, out: &mut Vec<Id>) {
        let kind = text_control_kind(node);
        if kind.is_text() {
            let id = node.id();
            let initial = match kind {
                TextControlKind::TextArea => {
                    let mut text = String::new();
                    collect_text(node.children(), &mut text);
                    let text = input_core::normalize_newlines(&text).into_owned();
                    match text.strip_prefix('\n') {
                        Some(rest) => rest.to_string(),
                        None => text,
                    }
                }
                _ => attr(node, "value").unwrap_or("").to_string(),
            };
            store.ensure_initial(field_key(id), initial, kind.is_multiline());
            out.push(id);
            // Text controls hold no nested controls.
            return;
        }

        for c in node.children() {
            walk(store, c, out);
        }
    }

    let mut seeded = Vec::new();
    walk(store, dom, &mut seeded);
    log::debug!(target: "browser.page", "seeded {} text fields", seeded.len());
    seeded
}
