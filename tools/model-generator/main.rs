use clap::{Parser, ValueEnum};
use rand::Rng;
use rand::rngs::ThreadRng;
use sakuzu::model::{ModelDefinition, OperatorDefinition};
use std::fs;

/// A CLI tool to generate sample model descriptors for the sakuzu drawer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated model descriptor to
    #[arg(short, long, default_value = "generated_model.bin")]
    output: String,

    /// The serialization format to write
    #[arg(long, value_enum, default_value = "binary")]
    format: Format,

    /// The number of hidden layers in the generated network
    #[arg(long, default_value_t = 3)]
    layers: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Bincode descriptor, the drawer's default input format
    Binary,
    /// JSON descriptor form of the same model
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating a sample model with {} hidden layer(s)...",
        cli.layers
    );
    let model = generate_model(&mut rng, cli.layers);

    match cli.format {
        Format::Binary => model.save(&cli.output)?,
        Format::Json => {
            let json_output = serde_json::to_string_pretty(&model)?;
            fs::write(&cli.output, json_output)?;
        }
    }

    println!(
        "Successfully generated and saved a model with {} operator(s) to '{}'",
        model.operators.len(),
        cli.output
    );

    Ok(())
}

/// Generates a small MLP-like operator chain.
///
/// Every layer re-writes the running activation value `h`, so drawn graphs
/// exercise the builder's occurrence counters.
fn generate_model(rng: &mut ThreadRng, layers: usize) -> ModelDefinition {
    let mut operators = Vec::new();
    let mut previous = "x".to_string();

    for i in 0..layers {
        let width = rng.random_range(16..=256);
        let activation = pick_activation(rng);

        operators.push(OperatorDefinition {
            name: Some(format!("fc{i}")),
            op_type: "MatMul".to_string(),
            inputs: vec![previous.clone(), format!("w{i}")],
            outputs: vec![format!("z{i}")],
            doc_string: Some(format!("Fully connected layer {i} with {width} units")),
        });
        operators.push(OperatorDefinition {
            name: None,
            op_type: "Add".to_string(),
            inputs: vec![format!("z{i}"), format!("b{i}")],
            outputs: vec!["h".to_string()],
            doc_string: None,
        });
        operators.push(OperatorDefinition {
            name: None,
            op_type: activation.to_string(),
            inputs: vec!["h".to_string()],
            outputs: vec!["h".to_string()],
            doc_string: Some(format!("{activation} activation after layer {i}")),
        });

        previous = "h".to_string();
    }

    operators.push(OperatorDefinition {
        name: Some("head".to_string()),
        op_type: "Softmax".to_string(),
        inputs: vec![previous],
        outputs: vec!["y".to_string()],
        doc_string: Some("Classification head".to_string()),
    });

    ModelDefinition {
        name: Some("generated-mlp".to_string()),
        operators,
    }
}

fn pick_activation(rng: &mut ThreadRng) -> &'static str {
    const ACTIVATIONS: &[&str] = &["Relu", "Sigmoid", "Tanh"];
    ACTIVATIONS[rng.random_range(0..ACTIVATIONS.len())]
}
