//! # Sakuzu - Computation Graph Drawing Engine
//!
//! **Sakuzu** converts serialized computation-graph models (operators with
//! named inputs and outputs) into Graphviz DOT descriptions for external
//! rendering. It reads a binary model descriptor, walks the operator list in
//! order, and emits a styled node/edge graph; turning that description into an
//! image is delegated to the Graphviz `dot` utility.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model of
//! a "model definition." The primary workflow is:
//!
//! 1.  **Load Your Model**: Read a binary descriptor with [`model::ModelDefinition::from_file`],
//!     or parse your own format and implement the [`model::IntoModel`] trait to provide a
//!     translation layer into sakuzu's `ModelDefinition`.
//! 2.  **Build**: Use [`graph::GraphBuilder`] to run the single-pass traversal that
//!     produces a [`graph::VisualGraph`] - one node per operator, one node per value
//!     generation, and the edges wiring them together.
//! 3.  **Export**: Serialize the visual graph with [`graph::VisualGraph::to_dot`] or
//!     write it straight to disk with [`graph::VisualGraph::write_dot`], then render
//!     the file with `dot -Tsvg model.dot -o model.svg`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sakuzu::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Load a binary model descriptor from disk.
//!     let model = ModelDefinition::from_file("model.bin")?;
//!
//!     // Build the visual graph, highlighting operators 0 and 2.
//!     let graph = GraphBuilder::for_model(&model)
//!         .with_rank_dir(RankDir::Lr)
//!         .with_marked([0, 2])
//!         .with_producer(LabelNodeProducer::new(true))
//!         .build();
//!
//!     // Write the DOT description for the external renderer.
//!     graph.write_dot("model.dot")?;
//!     println!("Drew {} nodes and {} edges", graph.nodes.len(), graph.edges.len());
//!
//!     Ok(())
//! }
//! ```

pub mod dot;
pub mod error;
pub mod graph;
pub mod model;
pub mod prelude;
