
use anyhow::Context;
use serde::Serialize;
use std::fmt::Write as FmtWrite;
use std::io::Write;
use std::path::Path;

use crate::dag::builder::GraphConfig;
use crate::dag::graph::{AlignmentDag, DagEdge, DagNode};
use crate::util::json_io::{create_writer, save_json};

/// Colors the start and end markers
const MARKER_COLOR: &str = "pink";
/// Field separator of record-shaped nodes
const RECORD_FIELD_SEPARATOR: &str = "|";

/// Escapes a single character for use inside a record-shaped node label.
fn escape_record_char(c: char) -> String {
    match c {
        '"' | '\\' | '{' | '}' | '|' | '<' | '>' => format!("\\{c}"),
        ' ' => "\\ ".to_string(),
        _ => c.to_string()
    }
}

/// Record fields are separated by '|', so every character of the node becomes its own field.
fn record_label(node: &DagNode) -> String {
    node.characters().iter()
        .map(|&c| escape_record_char(c))
        .collect::<Vec<String>>()
        .join(RECORD_FIELD_SEPARATOR)
}

/// Escapes a full label for use inside a plain quoted DOT string.
fn escape_quoted(label: &str) -> String {
    label.chars()
        .map(|c| match c {
            '"' | '\\' => format!("\\{c}"),
            _ => c.to_string()
        })
        .collect()
}

/// The attribute list for an operation node.
/// With the default separator every character gets its own record field, any other separator is written out as a plain box label.
fn node_attributes(node: &DagNode, config: &GraphConfig) -> String {
    if config.label_separator() == RECORD_FIELD_SEPARATOR {
        format!("[label=\"{}\"]", record_label(node))
    } else {
        format!("[shape=box, label=\"{}\"]", escape_quoted(node.label()))
    }
}

fn edge_line(edge: &DagEdge) -> String {
    match edge.label() {
        Some(kind) => format!("    {} -> {} [label=\"{kind}\"];", edge.from_node(), edge.to_node()),
        None => format!("    {} -> {};", edge.from_node(), edge.to_node())
    }
}

/// Renders the DAG as a Graphviz DOT document.
/// Operation nodes are record-shaped with one field per character unless a custom label separator is configured, the start/end markers are circles.
/// The requested image format is recorded in a leading comment for the external renderer.
/// # Arguments
/// * `dag` - the alignment DAG
/// * `config` - provides the requested image format
pub fn to_dot(dag: &AlignmentDag, config: &GraphConfig) -> String {
    let mut dot = String::new();
    // writing into a String cannot fail
    let _ = writeln!(dot, "// render with: dot -T{0} -o graph.{0}", config.image_format());
    let _ = writeln!(dot, "digraph alignment {{");
    let _ = writeln!(dot, "    node [shape=record, style=filled];");
    for node in dag.nodes() {
        if node.is_marker() {
            let _ = writeln!(dot, "    {} [shape=circle, color={MARKER_COLOR}];", node.id());
        } else {
            let _ = writeln!(dot, "    {} {};", node.id(), node_attributes(node, config));
        }
    }
    for edge in dag.edges() {
        let _ = writeln!(dot, "{}", edge_line(edge));
    }
    dot.push_str("}\n");
    dot
}

/// Saves the DOT document to a file, gzipped if the path ends in ".gz".
/// # Arguments
/// * `dag` - the alignment DAG
/// * `config` - provides the requested image format
/// * `out_filename` - path to write to
/// # Errors
/// * if the file cannot be created or written
pub fn save_dot(dag: &AlignmentDag, config: &GraphConfig, out_filename: &Path) -> anyhow::Result<()> {
    let mut writer = create_writer(out_filename)?;
    writer.write_all(to_dot(dag, config).as_bytes())
        .with_context(|| format!("Error while writing DOT output to {out_filename:?}:"))?;
    writer.flush()
        .with_context(|| format!("Error while flushing output to {out_filename:?}:"))?;
    Ok(())
}

/// The abstract graph description handed to an external renderer
#[derive(Serialize)]
struct GraphExport<'a> {
    /// Requested image format
    format: &'a str,
    /// The full graph
    graph: &'a AlignmentDag
}

/// Saves the DAG and the requested image format as JSON.
/// # Arguments
/// * `dag` - the alignment DAG
/// * `config` - provides the requested image format
/// * `out_filename` - path to write to
/// # Errors
/// * if opening, serializing, or writing fail
pub fn save_graph_json(dag: &AlignmentDag, config: &GraphConfig, out_filename: &Path) -> anyhow::Result<()> {
    let export = GraphExport {
        format: config.image_format(),
        graph: dag
    };
    save_json(&export, out_filename)
}
