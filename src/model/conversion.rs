use super::definition::ModelDefinition;
use crate::error::ModelConversionError;

/// A trait for custom model formats that can be converted into a sakuzu `ModelDefinition`.
///
/// This is the primary extension point for keeping the drawer format-agnostic. By
/// implementing this trait on your own deserialization structs, you provide a
/// translation layer that lets the graph builder draw your custom model format.
///
/// # Example
///
/// ```rust,no_run
/// use sakuzu::model::{IntoModel, ModelDefinition, OperatorDefinition};
/// use sakuzu::error::ModelConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyLayer { kind: String, output: String }
/// struct MyNetwork { layers: Vec<MyLayer> }
///
/// // 2. Implement `IntoModel` for your top-level struct.
/// impl IntoModel for MyNetwork {
///     fn into_model(self) -> Result<ModelDefinition, ModelConversionError> {
///         let mut operators = Vec::new();
///         let mut previous = "input".to_string();
///         for layer in self.layers {
///             // Your logic to convert `MyLayer` into an `OperatorDefinition`
///             operators.push(OperatorDefinition {
///                 name: None,
///                 op_type: layer.kind,
///                 inputs: vec![previous.clone()],
///                 outputs: vec![layer.output.clone()],
///                 doc_string: None,
///             });
///             previous = layer.output;
///         }
///         Ok(ModelDefinition { name: None, operators })
///     }
/// }
/// ```
pub trait IntoModel {
    /// Consumes the object and converts it into a drawable model definition.
    fn into_model(self) -> Result<ModelDefinition, ModelConversionError>;
}
