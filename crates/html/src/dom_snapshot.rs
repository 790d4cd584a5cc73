use crate::Node;
use std::fmt::{self, Write};

/// Deterministic, indented DOM rendering for tests and the demo binary.
/// Not a stable format.
///
/// One line per node:
/// - `#document`
/// - `<name attr="value" flag>` for elements, attributes in stored order
/// - `"text"` for text nodes, with control and non-ASCII characters escaped
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSnapshotOptions {
    pub include_ids: bool,
    /// Drop text nodes that are entirely whitespace.
    pub skip_blank_text: bool,
}

#[derive(Debug)]
pub struct DomSnapshot {
    lines: Vec<String>,
}

impl DomSnapshot {
    pub fn new(root: &Node, options: DomSnapshotOptions) -> Self {
        let mut lines = Vec::new();
        walk_snapshot(root, &options, 0, &mut lines);
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DomSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn walk_snapshot(node: &Node, options: &DomSnapshotOptions, depth: usize, out: &mut Vec<String>) {
    const INDENT_STEP: usize = 2;

    if options.skip_blank_text
        && let Node::Text { text, .. } = node
        && text.chars().all(char::is_whitespace)
    {
        return;
    }

    let mut line = " ".repeat(depth.saturating_mul(INDENT_STEP));
    write_node_line(&mut line, node, options);
    out.push(line);
    for child in node.children() {
        walk_snapshot(child, options, depth + 1, out);
    }
}

fn write_node_line(out: &mut String, node: &Node, options: &DomSnapshotOptions) {
    match node {
        Node::Document { .. } => out.push_str("#document"),
        Node::Element {
            name, attributes, ..
        } => {
            out.push('<');
            out.push_str(name);
            for (attr, value) in attributes {
                out.push(' ');
                out.push_str(attr);
                if let Some(value) = value {
                    out.push_str("=\"");
                    write_escaped(out, value);
                    out.push('"');
                }
            }
            out.push('>');
        }
        Node::Text { text, .. } => {
            out.push('"');
            write_escaped(out, text);
            out.push('"');
        }
    }
    if options.include_ids {
        write!(out, " #{}", node.id().0).ok();
    }
}

fn write_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ if ch.is_ascii() => out.push(ch),
            _ => {
                let _ = write!(out, "\\u{{{:X}}}", ch as u32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomTree;

    #[test]
    fn renders_indented_outline() {
        let dom = DomTree::new(Node::document(vec![Node::element(
            "p",
            [("class", Some("a \"b\"")), ("hidden", None)],
            vec![Node::text("x\u{e9}\n"), Node::text("  ")],
        )]));

        let snapshot = DomSnapshot::new(
            dom.root(),
            DomSnapshotOptions {
                skip_blank_text: true,
                ..DomSnapshotOptions::default()
            },
        );
        assert_eq!(
            snapshot.as_lines(),
            &[
                "#document".to_string(),
                "  <p class=\"a \\\"b\\\"\" hidden>".to_string(),
                "    \"x\\u{E9}\\n\"".to_string(),
            ]
        );
        assert_eq!(snapshot.to_string(), snapshot.render());
    }

    #[test]
    fn ids_are_optional() {
        let dom = DomTree::new(Node::document(vec![Node::text("t")]));
        let with_ids = DomSnapshot::new(
            dom.root(),
            DomSnapshotOptions {
                include_ids: true,
                ..DomSnapshotOptions::default()
            },
        );
        assert_eq!(with_ids.render(), "#document #1\n  \"t\" #2");
    }
}
