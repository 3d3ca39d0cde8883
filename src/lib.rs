/*!
# levenshtein-dag
Weighted edit-distance alignment between two character sequences.
The core fills a dynamic programming table under a flat cost model (match 0, substitution 10, insertion/deletion 7 by default), backtraces it into an edit script, and can fold that script into a DAG where runs of insertions or deletions become parallel branches between anchors.

## Example usage
```rust
use levenshtein_dag::alignment::aligner::Alignment;
use levenshtein_dag::dag::builder::{build_dag, GraphConfig};
use levenshtein_dag::data_types::cost_model::CostModel;
use levenshtein_dag::writers::dot::to_dot;
use levenshtein_dag::writers::report::report_entries;

let alignment = Alignment::new("a", "", CostModel::default());
assert_eq!(alignment.score(), 7);

let entries = report_entries(alignment.operations());
assert_eq!(entries.len(), 1);
assert_eq!(entries[0].0, "a");
assert_eq!(entries[0].1.to_string(), "deletion");

let config = GraphConfig::default();
let dag = build_dag(alignment.operations(), &config);
assert!(to_dot(&dag, &config).contains("start -> node1 [label=\"deletion\"];"));
```
*/
/// Dynamic programming table, backtrace, and edit script replay
pub mod alignment;
/// Command line interface functionality
pub mod cli;
/// Branch DAG built from an edit script
pub mod dag;
/// Contains the cost model and operation types
pub mod data_types;
/// Various utility functions that tend to be very generic
pub mod util;
/// All output writers
pub mod writers;
