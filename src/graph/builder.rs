use super::producer::{LabelNodeProducer, OperatorNodeProducer};
use super::style::{MARKED_OPERATOR_STYLE, OPERATOR_STYLE, VALUE_STYLE};
use super::visual::{RankDir, VisualEdge, VisualGraph, VisualNode};
use crate::model::{ModelDefinition, OperatorDefinition};
use ahash::{AHashMap, AHashSet};

/// Single-pass builder translating an operator sequence into a [`VisualGraph`].
///
/// Construction is deterministic: the same operator sequence in the same order
/// always yields an identical graph. Operator order drives the per-name
/// occurrence counters, so callers must not reorder the sequence.
///
/// The highlight set starts out empty on every builder and is owned by it;
/// highlight state never leaks between invocations.
pub struct GraphBuilder<'a> {
    operators: &'a [OperatorDefinition],
    name: Option<String>,
    rank_dir: RankDir,
    marked: AHashSet<usize>,
    producer: Box<dyn OperatorNodeProducer + 'a>,
}

impl<'a> GraphBuilder<'a> {
    /// Creates a builder over `operators` with default settings: left-to-right
    /// layout, no highlights, the default label producer.
    pub fn new(operators: &'a [OperatorDefinition]) -> Self {
        Self {
            operators,
            name: None,
            rank_dir: RankDir::default(),
            marked: AHashSet::new(),
            producer: Box::new(LabelNodeProducer::default()),
        }
    }

    /// Creates a builder for a whole model, inheriting the model's name.
    pub fn for_model(model: &'a ModelDefinition) -> Self {
        let mut builder = Self::new(&model.operators);
        builder.name = model.name.clone();
        builder
    }

    /// Sets the display name written into the graph header.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the layout direction.
    pub fn with_rank_dir(mut self, rank_dir: RankDir) -> Self {
        self.rank_dir = rank_dir;
        self
    }

    /// Sets the operator indices drawn with the highlight style.
    pub fn with_marked<I: IntoIterator<Item = usize>>(mut self, marked: I) -> Self {
        self.marked = marked.into_iter().collect();
        self
    }

    /// Replaces the node producer strategy.
    pub fn with_producer(mut self, producer: impl OperatorNodeProducer + 'a) -> Self {
        self.producer = Box::new(producer);
        self
    }

    /// Runs the traversal and returns the finished graph.
    pub fn build(self) -> VisualGraph {
        let mut graph = VisualGraph {
            name: self.name,
            rank_dir: self.rank_dir,
            nodes: Vec::new(),
            edges: Vec::new(),
        };

        // Current value node id per name, and how often each name has been
        // re-written as an output.
        let mut value_nodes: AHashMap<String, String> = AHashMap::new();
        let mut occurrences: AHashMap<String, usize> = AHashMap::new();

        for (op_id, op) in self.operators.iter().enumerate() {
            let style = if self.marked.contains(&op_id) {
                MARKED_OPERATOR_STYLE
            } else {
                OPERATOR_STYLE
            };
            let op_node = self.producer.produce(op, op_id, style);
            let op_node_id = op_node.id.clone();
            graph.nodes.push(op_node);

            for input in &op.inputs {
                let value_id = match value_nodes.get(input) {
                    Some(id) => id.clone(),
                    None => {
                        let occurrence = occurrences.get(input).copied().unwrap_or(0);
                        let id = format!("{input}{occurrence}");
                        graph.nodes.push(VisualNode {
                            id: id.clone(),
                            label: input.clone(),
                            style: VALUE_STYLE,
                            url: None,
                        });
                        value_nodes.insert(input.clone(), id.clone());
                        id
                    }
                };
                graph.edges.push(VisualEdge {
                    from: value_id,
                    to: op_node_id.clone(),
                });
            }

            for output in &op.outputs {
                // A prior producer of this name exists: bump the occurrence
                // counter before creating the node, so the re-written value
                // gets a fresh visual identity.
                if value_nodes.contains_key(output) {
                    *occurrences.entry(output.clone()).or_insert(0) += 1;
                }
                let occurrence = occurrences.get(output).copied().unwrap_or(0);
                let id = format!("{output}{occurrence}");
                graph.nodes.push(VisualNode {
                    id: id.clone(),
                    label: output.clone(),
                    style: VALUE_STYLE,
                    url: None,
                });
                value_nodes.insert(output.clone(), id.clone());
                graph.edges.push(VisualEdge {
                    from: op_node_id.clone(),
                    to: id,
                });
            }
        }

        graph
    }
}
