use html::Node;
use html::dom_utils::attr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextControlKind {
    /// Single-line `<input>` with a text-like type.
    Input,
    TextArea,
    Other,
}

impl TextControlKind {
    pub fn is_text(self) -> bool {
        !matches!(self, TextControlKind::Other)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, TextControlKind::TextArea)
    }
}

/// Which kind of text control `node` is, if any.
///
/// Only input types whose value is free text count; checkboxes, radios,
/// numbers and the like do not.
pub fn text_control_kind(node: &Node) -> TextControlKind {
    let Some(name) = node.name() else {
        return TextControlKind::Other;
    };

    if name.eq_ignore_ascii_case("textarea") {
        return TextControlKind::TextArea;
    }
    if !name.eq_ignore_ascii_case("input") {
        return TextControlKind::Other;
    }

    let ty = attr(node, "type").map(str::trim).filter(|s| !s.is_empty());
    match ty {
        None => TextControlKind::Input, // missing type defaults to text
        Some(t)
            if ["text", "search", "email", "url", "tel", "password"]
                .iter()
                .any(|k| t.eq_ignore_ascii_case(k)) =>
        {
            TextControlKind::Input
        }
        _ => TextControlKind::Other,
    }
}
