
use log::debug;

use crate::alignment::table::AlignmentTable;
use crate::data_types::operation::{Edit, Operation};

/// Walks a filled table from the bottom-right cell back to the origin and recovers the edit script.
/// Each step is classified by how the cursor moved:
/// * row unchanged - deletion of a source character
/// * column unchanged - insertion of a target character
/// * diagonal with unchanged score - match
/// * diagonal with increased score - substitution
///
/// The returned operations are ordered from the start of the sequences to their end.
/// # Arguments
/// * `table` - the table built from `source` and `target`
/// * `source` - the sequence along the columns
/// * `target` - the sequence along the rows
/// # Panics
/// * if `table` was not built from these two sequences
pub fn backtrace(table: &AlignmentTable, source: &[char], target: &[char]) -> Vec<Operation> {
    assert_eq!(table.num_rows(), target.len() + 1, "table rows must match target length");
    assert_eq!(table.num_cols(), source.len() + 1, "table columns must match source length");

    let mut operations = Vec::with_capacity(source.len() + target.len());
    let mut cursor = table.terminal();
    while cursor != (0, 0) {
        let cell = table.cell(cursor.0, cursor.1);
        let (row, col) = cell.predecessor();

        let edit = if cursor.0 == row {
            Edit::Deletion(source[col])
        } else if cursor.1 == col {
            Edit::Insertion(target[row])
        } else if table.cell(row, col).score() == cell.score() {
            Edit::Match(source[col])
        } else {
            Edit::Substitution { source: source[col], target: target[row] }
        };
        operations.push(Operation::new(edit, row, col));
        cursor = (row, col);
    }

    operations.reverse();
    debug!("Backtrace recovered {} operations with score {}", operations.len(), table.score());
    operations
}
