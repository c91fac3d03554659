use clap::{Parser, ValueEnum};
use sakuzu::error::ModelConversionError;
use sakuzu::graph::{GraphBuilder, LabelNodeProducer, RankDir};
use sakuzu::model::{IntoModel, ModelDefinition, OperatorDefinition};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the ONNX-style JSON dump layout and are only used here
// for conversion.

#[derive(Deserialize)]
struct RawModel {
    graph: RawGraph,
}

#[derive(Deserialize)]
struct RawGraph {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "node")]
    nodes: Vec<RawNode>,
}

#[derive(Deserialize)]
struct RawNode {
    #[serde(default)]
    name: Option<String>,
    #[serde(alias = "opType")]
    op_type: String,
    #[serde(default, alias = "input")]
    inputs: Vec<String>,
    #[serde(default, alias = "output")]
    outputs: Vec<String>,
    #[serde(default, alias = "docString")]
    doc_string: Option<String>,
}

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "UPPER")]
enum RankDirCli {
    Lr,
    Tb,
    Rl,
    Bt,
}

impl From<RankDirCli> for RankDir {
    fn from(value: RankDirCli) -> Self {
        match value {
            RankDirCli::Lr => RankDir::Lr,
            RankDirCli::Tb => RankDir::Tb,
            RankDirCli::Rl => RankDir::Rl,
            RankDirCli::Bt => RankDir::Bt,
        }
    }
}

// --- Converter Implementation ---
// This implements the conversion from the raw JSON model to sakuzu's canonical
// ModelDefinition.

impl IntoModel for RawModel {
    fn into_model(self) -> Result<ModelDefinition, ModelConversionError> {
        let operators = self
            .graph
            .nodes
            .into_iter()
            .map(|raw_node| OperatorDefinition {
                name: raw_node.name,
                op_type: raw_node.op_type,
                inputs: raw_node.inputs,
                outputs: raw_node.outputs,
                doc_string: raw_node.doc_string,
            })
            .collect();

        Ok(ModelDefinition {
            name: self.graph.name,
            operators,
        })
    }
}

/// A computation graph drawing CLI: serialized model descriptor in, DOT file out
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the serialized model descriptor (bincode, or an ONNX-style
    /// JSON dump when the extension is .json)
    #[arg(long)]
    input: PathBuf,

    /// Path to write the DOT representation of the graph to
    #[arg(long)]
    output: PathBuf,

    /// The rank direction of the generated graph
    #[arg(long, value_enum, default_value = "LR")]
    rankdir: RankDirCli,

    /// Embed each operator's docstring as a javascript alert URL. Useful for
    /// SVG format.
    #[arg(long = "embed_docstring")]
    embed_docstring: bool,

    /// 0: original, 1: marked
    #[arg(long, default_value_t = 0)]
    marked: u8,

    /// if 2_3_4, means node 2,3,4 will be marked
    #[arg(long = "marked_list", default_value = "")]
    marked_list: String,
}

fn main() {
    let cli = Cli::parse();

    let marked = if cli.marked != 0 {
        parse_marked_list(&cli.marked_list).unwrap_or_else(|e| exit_with_error(&e))
    } else {
        Vec::new()
    };

    let model = load_model(&cli.input).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load model from '{}': {}",
            cli.input.display(),
            e
        ))
    });
    println!(
        "Loaded model with {} operator(s) from '{}'",
        model.operators.len(),
        cli.input.display()
    );

    let graph = GraphBuilder::for_model(&model)
        .with_rank_dir(cli.rankdir.into())
        .with_marked(marked)
        .with_producer(LabelNodeProducer::new(cli.embed_docstring))
        .build();

    graph
        .write_dot(&cli.output)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    println!(
        "Wrote {} node(s) and {} edge(s) to '{}'",
        graph.nodes.len(),
        graph.edges.len(),
        cli.output.display()
    );
}

/// Loads the model descriptor, dispatching on the file extension: `.json`
/// goes through the raw ONNX-style conversion path, everything else is
/// treated as a binary descriptor.
fn load_model(path: &Path) -> Result<ModelDefinition, Box<dyn std::error::Error>> {
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        let content = fs::read_to_string(path)?;
        let raw: RawModel = serde_json::from_str(&content)?;
        Ok(raw.into_model()?)
    } else {
        Ok(ModelDefinition::from_file(path)?)
    }
}

/// Parses the underscore-delimited highlight list, e.g. "2_3_4".
fn parse_marked_list(list: &str) -> Result<Vec<usize>, String> {
    list.split('_')
        .map(|token| {
            token.parse::<usize>().map_err(|_| {
                format!("Invalid operator index '{token}' in --marked_list '{list}'")
            })
        })
        .collect()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
