use crate::{Id, Node, NodeId};

/// Assign ids to every node still carrying [`Id::UNASSIGNED`], starting at
/// `next`. Returns the next free id.
pub fn assign_node_ids(root: &mut Node, next: NodeId) -> NodeId {
    fn walk(node: &mut Node, next: &mut NodeId) {
        // only assign if currently unset
        if node.id() == Id::UNASSIGNED {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1).max(1);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = next.max(1);
    walk(root, &mut next);
    next
}

/// Largest id present in the subtree.
pub fn max_node_id(node: &Node) -> NodeId {
    node.children()
        .iter()
        .map(max_node_id)
        .fold(node.id().0, NodeId::max)
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    for c in node.children_mut()? {
        if let Some(found) = find_node_by_id_mut(c, id) {
            return Some(found);
        }
    }
    None
}

/// The sibling list holding `id` and its index in that list.
pub fn locate_child(node: &Node, id: Id) -> Option<(&[Node], usize)> {
    let children = node.children();
    if let Some(idx) = children.iter().position(|c| c.id() == id) {
        return Some((children, idx));
    }
    children.iter().find_map(|c| locate_child(c, id))
}

/// Mutable variant of [`locate_child`].
pub fn locate_child_mut(node: &mut Node, id: Id) -> Option<(&mut Vec<Node>, usize)> {
    let children = node.children_mut()?;
    if let Some(idx) = children.iter().position(|c| c.id() == id) {
        return Some((children, idx));
    }
    for c in children.iter_mut() {
        if let Some(found) = locate_child_mut(c, id) {
            return Some(found);
        }
    }
    None
}

/// Visit every element in document order.
pub fn for_each_element<'a>(node: &'a Node, f: &mut impl FnMut(&'a Node)) {
    if node.is_element() {
        f(node);
    }
    for c in node.children() {
        for_each_element(c, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::document(vec![Node::element(
            "form",
            [],
            vec![
                Node::element("input", [("type", Some("text"))], Vec::new()),
                Node::element("p", [], vec![Node::text("hi")]),
            ],
        )])
    }

    #[test]
    fn assigns_ids_in_document_order() {
        let mut dom = sample();
        let next = assign_node_ids(&mut dom, 1);
        assert_eq!(next, 6);
        assert_eq!(dom.id(), Id(1));
        let form = &dom.children()[0];
        assert_eq!(form.id(), Id(2));
        assert_eq!(form.children()[0].id(), Id(3));
        assert_eq!(form.children()[1].children()[0].id(), Id(5));
        assert_eq!(max_node_id(&dom), 5);
    }

    #[test]
    fn keeps_existing_ids() {
        let mut dom = sample();
        dom.set_id(Id(40));
        let next = assign_node_ids(&mut dom, 1);
        assert_eq!(dom.id(), Id(40));
        assert_eq!(next, 5);
    }

    #[test]
    fn locates_nested_children() {
        let mut dom = sample();
        assign_node_ids(&mut dom, 1);

        let (siblings, idx) = locate_child(&dom, Id(4)).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(siblings.len(), 2);

        let (siblings, idx) = locate_child_mut(&mut dom, Id(5)).unwrap();
        assert_eq!(idx, 0);
        siblings.push(Node::text("!"));
        assert_eq!(find_node_by_id(&dom, Id(4)).unwrap().children().len(), 2);

        assert!(locate_child(&dom, Id(1)).is_none());
        assert!(find_node_by_id_mut(&mut dom, Id(99)).is_none());
    }

    #[test]
    fn visits_elements_only() {
        let mut dom = sample();
        assign_node_ids(&mut dom, 1);
        let mut names = Vec::new();
        for_each_element(&dom, &mut |n| names.push(n.name().unwrap_or_default()));
        assert_eq!(names, vec!["form", "input", "p"]);
    }
}
