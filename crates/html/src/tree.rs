//! Owned, mutable DOM tree with stable node ids.
//!
//! Invariants:
//! - Every node in the tree carries a unique, non-zero [`Id`].
//! - Ids are never reused within one tree.
//! - Lookups are document-order depth-first walks; the trees this crate
//!   serves are form-sized, so no side index is kept.

use crate::dom_utils::{attr, collect_text, has_attr, has_class, set_attr};
use crate::traverse::{
    assign_node_ids, find_node_by_id, find_node_by_id_mut, for_each_element, locate_child,
    locate_child_mut, max_node_id,
};
use crate::{Id, Node, NodeId};

#[derive(Clone, Debug)]
pub struct DomTree {
    root: Node,
    next_id: NodeId,
}

impl DomTree {
    /// Take ownership of `root`, assigning ids to any node without one.
    pub fn new(mut root: Node) -> Self {
        let start = max_node_id(&root).wrapping_add(1);
        let next_id = assign_node_ids(&mut root, start);
        Self { root, next_id }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn get(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.root, id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.get(id).is_some()
    }

    /// First element whose `id` attribute equals `value`.
    pub fn get_element_by_id(&self, value: &str) -> Option<Id> {
        let mut found = None;
        for_each_element(&self.root, &mut |node| {
            if found.is_none() && attr(node, "id") == Some(value) {
                found = Some(node.id());
            }
        });
        found
    }

    /// Every element carrying `class`, in document order.
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<Id> {
        let mut out = Vec::new();
        for_each_element(&self.root, &mut |node| {
            if has_class(node, class) {
                out.push(node.id());
            }
        });
        out
    }

    pub fn attribute(&self, id: Id, name: &str) -> Option<&str> {
        self.get(id).and_then(|node| attr(node, name))
    }

    pub fn has_attribute(&self, id: Id, name: &str) -> bool {
        self.get(id).is_some_and(|node| has_attr(node, name))
    }

    /// Returns `false` if `id` is not an element in this tree.
    pub fn set_attribute(&mut self, id: Id, name: &str, value: Option<&str>) -> bool {
        let Some(node) = find_node_by_id_mut(&mut self.root, id) else {
            return false;
        };
        log::trace!(target: "html.tree", "set {name}={value:?} on {id:?}");
        set_attr(node, name, value)
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self, id: Id) -> Option<String> {
        let node = self.get(id)?;
        let mut out = String::new();
        match node {
            Node::Text { text, .. } => out.push_str(text),
            _ => collect_text(node.children(), &mut out),
        }
        Some(out)
    }

    /// Replace all children of `id` with a single text node.
    pub fn set_text_content(&mut self, id: Id, text: &str) -> bool {
        let text_id = Id(self.next_id);
        let Some(node) = find_node_by_id_mut(&mut self.root, id) else {
            return false;
        };
        match node {
            Node::Text { text: current, .. } => {
                current.clear();
                current.push_str(text);
            }
            Node::Element { children, .. } | Node::Document { children, .. } => {
                // Reuse a lone text child so repeated updates keep the same node.
                if let [Node::Text { text: current, .. }] = children.as_mut_slice() {
                    current.clear();
                    current.push_str(text);
                } else {
                    children.clear();
                    children.push(Node::Text {
                        id: text_id,
                        text: text.to_string(),
                    });
                    self.next_id = self.next_id.wrapping_add(1).max(1);
                }
            }
        }
        log::trace!(target: "html.tree", "text of {id:?} = {text:?}");
        true
    }

    pub fn next_element_sibling(&self, id: Id) -> Option<Id> {
        let (siblings, idx) = locate_child(&self.root, id)?;
        siblings[idx + 1..]
            .iter()
            .find(|n| n.is_element())
            .map(Node::id)
    }

    /// Insert `node` as the next sibling of `reference`.
    ///
    /// Returns the id assigned to the inserted node, or `None` when
    /// `reference` is not a child of any node in this tree.
    pub fn insert_after(&mut self, reference: Id, mut node: Node) -> Option<Id> {
        let (siblings, idx) = locate_child_mut(&mut self.root, reference)?;
        self.next_id = assign_node_ids(&mut node, self.next_id);
        let id = node.id();
        siblings.insert(idx + 1, node);
        log::trace!(target: "html.tree", "inserted {id:?} after {reference:?}");
        Some(id)
    }

    /// Append `node` as the last child of `parent`.
    pub fn append_child(&mut self, parent: Id, mut node: Node) -> Option<Id> {
        let children = find_node_by_id_mut(&mut self.root, parent)?.children_mut()?;
        self.next_id = assign_node_ids(&mut node, self.next_id);
        let id = node.id();
        children.push(node);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> DomTree {
        DomTree::new(Node::document(vec![Node::element(
            "form",
            [("id", Some("f"))],
            vec![
                Node::element(
                    "input",
                    [("id", Some("name")), ("class", Some("cc-field"))],
                    Vec::new(),
                ),
                Node::text("\n"),
                Node::element("textarea", [("class", Some("cc-field big"))], vec![Node::text("hey")]),
            ],
        )]))
    }

    #[test]
    fn looks_up_by_id_and_class() {
        let dom = form();
        let input = dom.get_element_by_id("name").unwrap();
        assert_eq!(dom.get(input).and_then(Node::name), Some("input"));
        assert_eq!(dom.get_element_by_id("nope"), None);

        let fields = dom.get_elements_by_class_name("cc-field");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], input);
        assert!(dom.get_elements_by_class_name("big").contains(&fields[1]));
    }

    #[test]
    fn next_element_sibling_skips_text() {
        let dom = form();
        let fields = dom.get_elements_by_class_name("cc-field");
        assert_eq!(dom.next_element_sibling(fields[0]), Some(fields[1]));
        assert_eq!(dom.next_element_sibling(fields[1]), None);
    }

    #[test]
    fn insert_after_places_node_and_assigns_fresh_ids() {
        let mut dom = form();
        let input = dom.get_element_by_id("name").unwrap();
        let small = dom
            .insert_after(input, Node::element("small", [], vec![Node::text("9")]))
            .unwrap();

        assert_eq!(dom.next_element_sibling(input), Some(small));
        assert_eq!(dom.text_content(small).as_deref(), Some("9"));

        let ids: Vec<_> = {
            let mut v = Vec::new();
            fn walk(n: &Node, v: &mut Vec<Id>) {
                v.push(n.id());
                for c in n.children() {
                    walk(c, v);
                }
            }
            walk(dom.root(), &mut v);
            v
        };
        let mut dedup = ids.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(ids.len(), dedup.len());
        assert!(!ids.contains(&Id::UNASSIGNED));
    }

    #[test]
    fn insert_after_root_is_rejected() {
        let mut dom = form();
        let root = dom.root().id();
        assert_eq!(dom.insert_after(root, Node::text("x")), None);
    }

    #[test]
    fn set_text_content_reuses_lone_text_child() {
        let mut dom = form();
        let area = dom.get_elements_by_class_name("big")[0];
        let text_id = dom.get(area).unwrap().children()[0].id();

        assert!(dom.set_text_content(area, "bye"));
        assert_eq!(dom.get(area).unwrap().children()[0].id(), text_id);
        assert_eq!(dom.text_content(area).as_deref(), Some("bye"));

        let f = dom.get_element_by_id("f").unwrap();
        assert!(dom.set_text_content(f, "flat"));
        assert_eq!(dom.get(f).unwrap().children().len(), 1);
        assert!(!dom.set_text_content(Id(999), "x"));
    }

    #[test]
    fn attributes_round_trip_through_tree() {
        let mut dom = form();
        let input = dom.get_element_by_id("name").unwrap();
        assert!(dom.set_attribute(input, "maxlength", Some("20")));
        assert_eq!(dom.attribute(input, "maxlength"), Some("20"));
        assert!(dom.has_attribute(input, "class"));
        assert!(!dom.set_attribute(Id(999), "x", None));
    }

    #[test]
    fn append_child_extends_parent() {
        let mut dom = form();
        let f = dom.get_element_by_id("f").unwrap();
        let id = dom.append_child(f, Node::element("button", [], Vec::new())).unwrap();
        assert_eq!(dom.get(f).unwrap().children().last().map(Node::id), Some(id));
    }
}
