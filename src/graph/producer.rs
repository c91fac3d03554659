use super::style::NodeStyle;
use super::visual::VisualNode;
use crate::dot::docstring_url;
use crate::model::OperatorDefinition;
use std::fmt::Write;

/// Strategy for turning one operator into its visual node.
///
/// The builder calls this once per operator, in sequence order. Swapping the
/// producer changes how operators are labeled without touching the traversal.
pub trait OperatorNodeProducer {
    /// Produces the visual node for `op` at sequence position `op_id`, drawn
    /// with the style the builder selected for it.
    fn produce(&self, op: &OperatorDefinition, op_id: usize, style: NodeStyle) -> VisualNode;
}

/// Default producer: labels each operator with its name, type, sequence index
/// and positional input/output lists.
///
/// The per-input and per-output label lines make every operator node unique
/// even when operator type and connections repeat elsewhere in the graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelNodeProducer {
    /// Attach each operator's documentation string as a clickable alert URL.
    /// Useful when the DOT output is rendered to SVG.
    pub embed_docstring: bool,
}

impl LabelNodeProducer {
    pub fn new(embed_docstring: bool) -> Self {
        Self { embed_docstring }
    }
}

impl OperatorNodeProducer for LabelNodeProducer {
    fn produce(&self, op: &OperatorDefinition, op_id: usize, style: NodeStyle) -> VisualNode {
        // An empty instance name counts as absent, like in the source models
        // where every operator carries a (possibly empty) name field.
        let mut label = match op.name.as_deref() {
            Some(name) if !name.is_empty() => format!("{}/{} (op#{})", name, op.op_type, op_id),
            _ => format!("{} (op#{})", op.op_type, op_id),
        };
        for (i, input) in op.inputs.iter().enumerate() {
            let _ = write!(label, "\n input{} {}", i, input);
        }
        for (i, output) in op.outputs.iter().enumerate() {
            let _ = write!(label, "\n output{} {}", i, output);
        }

        let url = if self.embed_docstring {
            op.doc_string.as_deref().map(docstring_url)
        } else {
            None
        };

        VisualNode {
            id: label.clone(),
            label,
            style,
            url,
        }
    }
}
