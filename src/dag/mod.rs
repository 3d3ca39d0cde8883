/*!
# DAG module
Turns an edit script into a directed acyclic graph of alternate orderings.
Matches and substitutions act as anchors that every open branch joins into.
Consecutive insertions (or deletions) between two anchors are independent single-character edits, so they are laid out as parallel chains instead of one serial order.

## Example usage
```rust
use levenshtein_dag::alignment::aligner::Alignment;
use levenshtein_dag::dag::builder::{build_dag, GraphConfig};
use levenshtein_dag::dag::graph::NodeId;
use levenshtein_dag::data_types::cost_model::CostModel;

let alignment = Alignment::new("abc", "abc", CostModel::default());
let dag = build_dag(alignment.operations(), &GraphConfig::default());

// three matches form a single chain between the start and end markers
assert_eq!(dag.nodes().len(), 5);
assert_eq!(dag.edges().len(), 4);
assert!(dag.has_path(NodeId::Start, NodeId::End));
assert!(dag.is_connected());
```
*/
/// Folds an edit script into the DAG
pub mod builder;
/// Node, edge, and graph types along with degree and reachability queries
pub mod graph;
