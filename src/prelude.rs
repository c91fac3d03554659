//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! sakuzu crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use sakuzu::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let model = ModelDefinition::from_file("path/to/model.bin")?;
//! let graph = GraphBuilder::for_model(&model).build();
//! graph.write_dot("path/to/model.dot")?;
//! # Ok(())
//! # }
//! ```

// Graph construction
pub use crate::graph::{GraphBuilder, LabelNodeProducer, OperatorNodeProducer};

// Visual graph types and styling
pub use crate::graph::{
    MARKED_OPERATOR_STYLE, NodeStyle, OPERATOR_STYLE, RankDir, VALUE_STYLE, VisualEdge,
    VisualGraph, VisualNode,
};

// Model data structures
pub use crate::model::{IntoModel, ModelDefinition, OperatorDefinition};

// DOT helpers
pub use crate::dot::{docstring_url, escape_label};

// Error types
pub use crate::error::{ExportError, ModelConversionError, ModelError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
