//! Graphviz DOT serialization of [`VisualGraph`]s.
//!
//! The emitted text is plain `digraph` syntax. Render it with the external
//! `dot` utility, e.g. `dot -Tsvg graph.dot -o graph.svg`, or paste it into an
//! online viewer such as <https://dreampuf.github.io/GraphvizOnline/>.

use crate::error::ExportError;
use crate::graph::{NodeStyle, VisualGraph, VisualNode};
use itertools::Itertools;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Escapes a free-text label into a safe quoted DOT string.
///
/// JSON string escaping is a superset of what DOT requires, so the JSON
/// encoder doubles as the label escaper: quotes, backslashes and control
/// characters can never terminate the surrounding quoted string.
pub fn escape_label(name: &str) -> String {
    serde_json::Value::from(name).to_string()
}

/// Builds the clickable `javascript:alert(...)` action embedding an
/// operator's documentation string.
///
/// Quotes are downgraded to apostrophes and angle brackets stripped so the
/// result stays embeddable in SVG output. This is a convenience for
/// interactive inspection, not a sanitizer.
pub fn docstring_url(doc: &str) -> String {
    let body = escape_label(doc).replace('"', "'").replace(['<', '>'], "");
    format!("javascript:alert({body})")
}

impl VisualGraph {
    /// Serializes the graph into Graphviz DOT text.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        match &self.name {
            Some(name) => {
                let _ = writeln!(out, "digraph {} {{", escape_label(name));
            }
            None => out.push_str("digraph G {\n"),
        }
        let _ = writeln!(out, "    rankdir={};", self.rank_dir);

        for node in &self.nodes {
            let _ = writeln!(
                out,
                "    {} [{}];",
                escape_label(&node.id),
                node_attributes(node).iter().join(", ")
            );
        }
        out.push('\n');
        for edge in &self.edges {
            let _ = writeln!(
                out,
                "    {} -> {};",
                escape_label(&edge.from),
                escape_label(&edge.to)
            );
        }
        out.push_str("}\n");
        out
    }

    /// Writes the DOT serialization of the graph to a file.
    pub fn write_dot<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        fs::write(path.as_ref(), self.to_dot()).map_err(|e| ExportError::Io {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }
}

/// Collects the bracketed attribute list for one node statement.
fn node_attributes(node: &VisualNode) -> Vec<String> {
    let NodeStyle {
        shape,
        color,
        filled,
        font_color,
    } = node.style;

    let mut attrs = vec![format!("label={}", escape_label(&node.label))];
    attrs.push(format!("shape={shape}"));
    if filled {
        attrs.push("style=filled".to_string());
    }
    if let Some(color) = color {
        attrs.push(format!("color={}", escape_label(color)));
    }
    if let Some(font_color) = font_color {
        attrs.push(format!("fontcolor={}", escape_label(font_color)));
    }
    if let Some(url) = &node.url {
        attrs.push(format!("URL={}", escape_label(url)));
    }
    attrs
}
