use serde::{Deserialize, Serialize};

/// The complete, canonical description of a computation graph, ready for drawing.
/// This is the target structure for any custom model format conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Display name of the graph, if the source model carries one.
    #[serde(default)]
    pub name: Option<String>,
    /// Operators in execution order. The order is significant: it drives the
    /// per-name occurrence counters and therefore the edge wiring.
    pub operators: Vec<OperatorDefinition>,
}

/// A single computation step in the model graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorDefinition {
    /// Optional instance name, distinct from the operator type.
    #[serde(default)]
    pub name: Option<String>,
    /// Operator type, e.g. `MatMul` or `Relu`.
    pub op_type: String,
    /// Names of the values this operator consumes, in positional order.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Names of the values this operator produces, in positional order.
    #[serde(default)]
    pub outputs: Vec<String>,
    /// Free-text documentation attached to the operator.
    #[serde(default)]
    pub doc_string: Option<String>,
}
