use crate::Node;
use std::sync::Arc;

/// Attribute value by case-insensitive name. Valueless attributes yield `None`.
pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Set an attribute, replacing the first existing entry with the same name.
///
/// Returns `false` for non-element nodes.
pub fn set_attr(node: &mut Node, name: &str, value: Option<&str>) -> bool {
    let Node::Element { attributes, .. } = node else {
        return false;
    };
    let value = value.map(str::to_string);
    if let Some((_, v)) = attributes
        .iter_mut()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
    {
        *v = value;
    } else {
        attributes.push((Arc::from(name), value));
    }
    true
}

/// Whitespace-separated tokens of the `class` attribute.
pub fn class_list(node: &Node) -> impl Iterator<Item = &str> {
    attr(node, "class").unwrap_or("").split_ascii_whitespace()
}

pub fn has_class(node: &Node, class: &str) -> bool {
    class_list(node).any(|c| c == class)
}

/// Parse a non-negative integer attribute the way browsers read `maxlength`.
///
/// Leading ASCII whitespace and one sign are skipped, then the leading run of
/// digits is read; trailing junk after the digits is ignored (`"50px"` is 50).
/// No digits, a negative value or overflow yield `Err` with the raw text.
pub fn non_negative_int_attr(node: &Node, name: &str) -> Option<Result<i64, String>> {
    let raw = attr(node, name)?;
    let s = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let parsed = s[..end]
        .parse::<i64>()
        .ok()
        .filter(|v| !negative || *v == 0);
    Some(parsed.ok_or_else(|| raw.to_string()))
}

pub fn collect_text(nodes: &[Node], out: &mut String) {
    for n in nodes {
        match n {
            Node::Text { text, .. } => out.push_str(text),
            Node::Element { children, .. } | Node::Document { children, .. } => {
                collect_text(children, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_match_case_insensitively() {
        let node = Node::element("input", [("MaxLength", Some("5")), ("required", None)], Vec::new());
        assert_eq!(attr(&node, "maxlength"), Some("5"));
        assert!(has_attr(&node, "REQUIRED"));
        assert_eq!(attr(&node, "required"), None);
        assert!(!has_attr(&Node::text("x"), "class"));
    }

    #[test]
    fn set_attr_replaces_or_appends() {
        let mut node = Node::element("small", [("class", Some("a"))], Vec::new());
        assert!(set_attr(&mut node, "class", Some("b c")));
        assert!(set_attr(&mut node, "data-x", None));
        assert_eq!(attr(&node, "class"), Some("b c"));
        assert!(has_attr(&node, "data-x"));
        assert!(!set_attr(&mut Node::text("t"), "class", Some("x")));
    }

    #[test]
    fn class_tokens() {
        let node = Node::element("p", [("class", Some("  cc-field  big\tcc-x "))], Vec::new());
        assert_eq!(class_list(&node).collect::<Vec<_>>(), vec!["cc-field", "big", "cc-x"]);
        assert!(has_class(&node, "big"));
        assert!(!has_class(&node, "cc"));
    }

    #[test]
    fn parses_non_negative_ints() {
        let parse = |raw: &'static str| {
            let node = Node::element("input", [("maxlength", Some(raw))], Vec::new());
            non_negative_int_attr(&node, "maxlength")
        };

        assert_eq!(parse(" 50 "), Some(Ok(50)));
        assert_eq!(parse("+7"), Some(Ok(7)));
        assert_eq!(parse("50abc"), Some(Ok(50)));
        assert_eq!(parse("\t12.9"), Some(Ok(12)));
        assert_eq!(parse("-0"), Some(Ok(0)));
        assert_eq!(parse("-1"), Some(Err("-1".to_string())));
        assert_eq!(parse("ten"), Some(Err("ten".to_string())));
        assert_eq!(parse("+"), Some(Err("+".to_string())));
        assert_eq!(parse("a50"), Some(Err("a50".to_string())));
        assert_eq!(parse("99999999999999999999"), Some(Err("99999999999999999999".to_string())));

        let none = Node::element("input", [], Vec::new());
        assert_eq!(non_negative_int_attr(&none, "maxlength"), None);
    }

    #[test]
    fn collects_nested_text() {
        let node = Node::element(
            "textarea",
            [],
            vec![Node::text("a"), Node::element("b", [], vec![Node::text("c")])],
        );
        let mut out = String::new();
        collect_text(node.children(), &mut out);
        assert_eq!(out, "ac");
    }
}
