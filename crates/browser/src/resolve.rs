//! Resolve lookup expressions into the elements a counter should bind to.
//!
//! The counter engine only accepts concrete element ids; everything that
//! turns a user-supplied selector into zero, one or many ids lives here.

use html::{DomTree, Id};
use std::fmt;
use std::str::FromStr;

/// Class fanned out over when no selector is given.
pub const DEFAULT_FIELD_CLASS: &str = "cc-field";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// A concrete element.
    Element(Id),
    /// `#name`: the element whose `id` attribute is `name`.
    Id(String),
    /// `.name`: every element carrying class `name`.
    Class(String),
    /// A bare name: tried as an `id` first, then as a class.
    Name(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    EmptySelector,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::EmptySelector => f.write_str("empty selector"),
        }
    }
}

impl std::error::Error for ResolveError {}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let input = input.trim();
        let (ctor, rest): (fn(String) -> Selector, &str) =
            if let Some(rest) = input.strip_prefix('#') {
                (Selector::Id, rest)
            } else if let Some(rest) = input.strip_prefix('.') {
                (Selector::Class, rest)
            } else {
                (Selector::Name, input)
            };
        if rest.is_empty() {
            return Err(ResolveError::EmptySelector);
        }
        Ok(ctor(rest.to_string()))
    }

    /// Matching elements in document order. An empty result is logged, not
    /// treated as an error.
    pub fn resolve(&self, dom: &DomTree) -> Vec<Id> {
        let found: Vec<Id> = match self {
            Selector::Element(id) => dom.contains(*id).then_some(*id).into_iter().collect(),
            Selector::Id(name) => dom.get_element_by_id(name).into_iter().collect(),
            Selector::Class(name) => dom.get_elements_by_class_name(name),
            Selector::Name(name) => match dom.get_element_by_id(name) {
                Some(id) => vec![id],
                None => dom.get_elements_by_class_name(name),
            },
        };
        if found.is_empty() {
            log::warn!(target: "browser.resolve", "no elements found with selector {self}");
        } else {
            log::trace!(target: "browser.resolve", "{self} matched {} elements", found.len());
        }
        found
    }
}

impl Default for Selector {
    fn default() -> Self {
        Selector::Name(DEFAULT_FIELD_CLASS.to_string())
    }
}

impl FromStr for Selector {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl From<Id> for Selector {
    fn from(id: Id) -> Self {
        Selector::Element(id)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Element(id) => write!(f, "element {}", id.0),
            Selector::Id(name) => write!(f, "#{name}"),
            Selector::Class(name) => write!(f, ".{name}"),
            Selector::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html::Node;

    fn dom() -> DomTree {
        DomTree::new(Node::document(vec![
            Node::element("input", [("id", Some("bio")), ("class", Some("cc-field"))], Vec::new()),
            Node::element("textarea", [("class", Some("cc-field"))], Vec::new()),
            Node::element("input", [("id", Some("cc-field"))], Vec::new()),
        ]))
    }

    #[test]
    fn parses_prefixes() {
        assert_eq!(Selector::parse("#bio"), Ok(Selector::Id("bio".into())));
        assert_eq!(Selector::parse(" .x "), Ok(Selector::Class("x".into())));
        assert_eq!("plain".parse::<Selector>(), Ok(Selector::Name("plain".into())));
        assert_eq!(Selector::parse("#"), Err(ResolveError::EmptySelector));
        assert_eq!(Selector::parse("   "), Err(ResolveError::EmptySelector));
    }

    #[test]
    fn resolves_id_and_class() {
        let dom = dom();
        let bio = dom.get_element_by_id("bio").unwrap();
        assert_eq!(Selector::Id("bio".into()).resolve(&dom), vec![bio]);
        assert_eq!(Selector::Class("cc-field".into()).resolve(&dom).len(), 2);
        assert!(Selector::Class("missing".into()).resolve(&dom).is_empty());
    }

    #[test]
    fn bare_name_prefers_id_over_class() {
        let dom = dom();
        let by_id = dom.get_element_by_id("cc-field").unwrap();
        assert_eq!(Selector::default().resolve(&dom), vec![by_id]);
        let bio = dom.get_element_by_id("bio").unwrap();
        assert_eq!(Selector::Name("bio".into()).resolve(&dom), vec![bio]);
    }

    #[test]
    fn element_selector_checks_membership() {
        let dom = dom();
        let bio = dom.get_element_by_id("bio").unwrap();
        assert_eq!(Selector::from(bio).resolve(&dom), vec![bio]);
        assert!(Selector::Element(Id(999)).resolve(&dom).is_empty());
    }

    #[test]
    fn displays_like_css() {
        assert_eq!(Selector::Id("a".into()).to_string(), "#a");
        assert_eq!(Selector::Class("b".into()).to_string(), ".b");
        assert_eq!(Selector::default().to_string(), "cc-field");
    }
}
