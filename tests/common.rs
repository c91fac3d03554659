//! Common test utilities for building model definitions.
use sakuzu::model::{ModelDefinition, OperatorDefinition};

/// Creates the single-operator reference model: `Add(x, y) -> z`, no instance
/// name.
#[allow(dead_code)]
pub fn create_add_model() -> ModelDefinition {
    ModelDefinition {
        name: None,
        operators: vec![OperatorDefinition {
            name: None,
            op_type: "Add".to_string(),
            inputs: vec!["x".to_string(), "y".to_string()],
            outputs: vec!["z".to_string()],
            doc_string: None,
        }],
    }
}

/// Creates a model where two successive operators both write the value `z`:
/// the second consumes the first generation and produces a new one.
#[allow(dead_code)]
pub fn create_rewrite_model() -> ModelDefinition {
    ModelDefinition {
        name: Some("rewrite".to_string()),
        operators: vec![
            OperatorDefinition {
                name: None,
                op_type: "Mul".to_string(),
                inputs: vec!["x".to_string(), "y".to_string()],
                outputs: vec!["z".to_string()],
                doc_string: Some("Computes the elementwise product".to_string()),
            },
            OperatorDefinition {
                name: None,
                op_type: "Relu".to_string(),
                inputs: vec!["z".to_string()],
                outputs: vec!["z".to_string()],
                doc_string: Some("Clamps \"negative\" <values> to zero".to_string()),
            },
        ],
    }
}

/// Creates a three-operator chain with named operators, for highlight tests.
#[allow(dead_code)]
pub fn create_chain_model() -> ModelDefinition {
    ModelDefinition {
        name: Some("chain".to_string()),
        operators: vec![
            OperatorDefinition {
                name: Some("conv1".to_string()),
                op_type: "Conv".to_string(),
                inputs: vec!["data".to_string(), "w1".to_string()],
                outputs: vec!["c1".to_string()],
                doc_string: None,
            },
            OperatorDefinition {
                name: Some("relu1".to_string()),
                op_type: "Relu".to_string(),
                inputs: vec!["c1".to_string()],
                outputs: vec!["r1".to_string()],
                doc_string: None,
            },
            OperatorDefinition {
                name: Some("pool1".to_string()),
                op_type: "MaxPool".to_string(),
                inputs: vec!["r1".to_string()],
                outputs: vec!["p1".to_string()],
                doc_string: None,
            },
        ],
    }
}
