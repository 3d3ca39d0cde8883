/*!
# Alignment module
Weighted edit-distance alignment between two character sequences.
The `AlignmentTable` is the full (target+1) x (source+1) dynamic programming grid, and `backtrace` recovers the edit script from it.
The `Alignment` struct bundles both steps together.

## Example usage
```rust
use levenshtein_dag::alignment::aligner::Alignment;
use levenshtein_dag::data_types::cost_model::CostModel;
use levenshtein_dag::data_types::operation::OperationKind;

let alignment = Alignment::new("kitten", "sitting", CostModel::default());
assert_eq!(alignment.score(), 27);
assert_eq!(alignment.count(OperationKind::Substitution), 2);
assert_eq!(alignment.count(OperationKind::Insertion), 1);

// replaying the edit script on the source gives back the target
assert_eq!(alignment.replay().unwrap(), "sitting");
```
*/
/// Runs the table fill and backtrace for a pair of sequences
pub mod aligner;
/// Recovers the edit script from a filled table
pub mod backtrace;
/// Applies an edit script to a source sequence
pub mod replay;
/// The dynamic programming table and its fill rule
pub mod table;
