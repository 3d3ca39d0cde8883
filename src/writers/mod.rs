/*!
# Writers
All output writers: the human-readable result report, the TSV report, and the graph exports.
The graph exports only describe nodes and edges, turning them into an image is left to Graphviz.
*/
/// Graphviz DOT and JSON export of the alignment DAG
pub mod dot;
/// Human-readable and TSV reports of the edit script
pub mod report;
