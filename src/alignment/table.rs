
use itertools::Itertools;
use log::trace;
use serde::Serialize;
use std::fmt;

use crate::data_types::cost_model::CostModel;
use crate::data_types::operation::OperationKind;

/// A single entry in the alignment table: the best score so far and the cell it came from
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Cell {
    /// Minimum cost to reach this cell from the origin
    score: usize,
    /// Row of the predecessor cell
    from_row: usize,
    /// Column of the predecessor cell
    from_col: usize
}

impl Cell {
    pub fn new(score: usize, from_row: usize, from_col: usize) -> Self {
        Self { score, from_row, from_col }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn from_row(&self) -> usize {
        self.from_row
    }

    pub fn from_col(&self) -> usize {
        self.from_col
    }

    /// Coordinates of the predecessor as (row, col)
    pub fn predecessor(&self) -> (usize, usize) {
        (self.from_row, self.from_col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.score, self.from_row, self.from_col)
    }
}

/// The full dynamic programming grid for aligning `source` to `target`.
/// Conceptually, the target goes from top to bottom (rows) and the source goes from left to right (columns).
/// Row `r` means `r` target characters are consumed and column `c` means `c` source characters are consumed.
/// Moving left along a row is a deletion of a source character, moving up along a column is an insertion of a target character.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AlignmentTable {
    /// Dimensions are (target.len()+1) x (source.len()+1)
    cells: Vec<Vec<Cell>>
}

impl AlignmentTable {
    /// Builds and fills the full table.
    /// Equal characters always take the diagonal at no cost.
    /// Otherwise, the cheapest of substitution (diagonal), deletion (left), and insertion (up) is kept, with ties resolved in that order.
    /// # Arguments
    /// * `source` - the sequence being transformed, along the columns
    /// * `target` - the sequence we are transforming into, along the rows
    /// * `cost_model` - the flat operation costs
    pub fn build(source: &[char], target: &[char], cost_model: &CostModel) -> Self {
        let num_rows = target.len() + 1;
        let num_cols = source.len() + 1;
        let mut cells = vec![vec![Cell::default(); num_cols]; num_rows];

        // border along the source axis is a chain of deletions
        for col in 1..num_cols {
            cells[0][col] = Cell::new(cells[0][col - 1].score + cost_model.cost(OperationKind::Deletion), 0, col - 1);
        }

        // border along the target axis is a chain of insertions
        for row in 1..num_rows {
            cells[row][0] = Cell::new(cells[row - 1][0].score + cost_model.cost(OperationKind::Insertion), row - 1, 0);
        }

        for (row, &t) in target.iter().enumerate().map(|(i, t)| (i + 1, t)) {
            for (col, &s) in source.iter().enumerate().map(|(j, s)| (j + 1, s)) {
                cells[row][col] = if cost_model.is_match(t, s) {
                    Cell::new(cells[row - 1][col - 1].score, row - 1, col - 1)
                } else {
                    let diagonal = Cell::new(cells[row - 1][col - 1].score + cost_model.cost(OperationKind::Substitution), row - 1, col - 1);
                    let left = Cell::new(cells[row][col - 1].score + cost_model.cost(OperationKind::Deletion), row, col - 1);
                    let up = Cell::new(cells[row - 1][col].score + cost_model.cost(OperationKind::Insertion), row - 1, col);

                    // strictly smaller replaces, so earlier candidates win ties
                    let mut best = diagonal;
                    for candidate in [left, up] {
                        if candidate.score < best.score {
                            best = candidate;
                        }
                    }
                    best
                };
            }
        }

        let table = Self { cells };
        trace!("Alignment table:\n{table}");
        table
    }

    /// Number of rows, i.e. target length + 1
    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns, i.e. source length + 1
    pub fn num_cols(&self) -> usize {
        // there is always at least one row
        self.cells[0].len()
    }

    /// Returns the cell at a given coordinate.
    /// # Panics
    /// * if the coordinates are outside of the table
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    /// The bottom-right cell, where the backtrace starts.
    pub fn terminal(&self) -> (usize, usize) {
        (self.num_rows() - 1, self.num_cols() - 1)
    }

    /// The minimum total cost of transforming the source into the target
    pub fn score(&self) -> usize {
        let (row, col) = self.terminal();
        self.cells[row][col].score
    }

    /// Iterates over the rows of the table, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|r| r.as_slice())
    }
}

impl fmt::Display for AlignmentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.cells.iter()
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join("\n");
        write!(f, "{lines}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::cost_model::CostModelBuilder;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_inputs() {
        let table = AlignmentTable::build(&[], &[], &CostModel::default());
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.num_cols(), 1);
        assert_eq!(table.score(), 0);
        assert_eq!(table.cell(0, 0), &Cell::new(0, 0, 0));
    }

    #[test]
    fn test_borders() {
        let costs = CostModelBuilder::default()
            .insertion(3)
            .deletion(5)
            .build().unwrap();
        let table = AlignmentTable::build(&chars("abc"), &chars("xy"), &costs);
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.num_cols(), 4);

        // the first row consumes source only
        assert_eq!(table.cell(0, 1), &Cell::new(5, 0, 0));
        assert_eq!(table.cell(0, 2), &Cell::new(10, 0, 1));
        assert_eq!(table.cell(0, 3), &Cell::new(15, 0, 2));

        // the first column consumes target only
        assert_eq!(table.cell(1, 0), &Cell::new(3, 0, 0));
        assert_eq!(table.cell(2, 0), &Cell::new(6, 1, 0));
    }

    #[test]
    fn test_swap_table() {
        // source = "ab", target = "ba"
        let table = AlignmentTable::build(&chars("ab"), &chars("ba"), &CostModel::default());
        let expected = vec![
            vec![Cell::new(0, 0, 0), Cell::new(7, 0, 0), Cell::new(14, 0, 1)],
            vec![Cell::new(7, 0, 0), Cell::new(10, 0, 0), Cell::new(7, 0, 1)],
            vec![Cell::new(14, 1, 0), Cell::new(7, 1, 0), Cell::new(14, 2, 1)],
        ];
        for (row, expected_row) in table.rows().zip(expected.iter()) {
            assert_eq!(row, expected_row.as_slice());
        }
        assert_eq!(table.score(), 14);
    }

    #[test]
    fn test_tie_break_prefers_diagonal_then_left() {
        // substitution == two gaps, so all three candidates score 14
        let costs = CostModelBuilder::default()
            .substitution(14)
            .build().unwrap();
        let table = AlignmentTable::build(&chars("a"), &chars("b"), &costs);
        assert_eq!(table.cell(1, 1), &Cell::new(14, 0, 0));

        // make the diagonal expensive so left and up tie
        let costs = CostModelBuilder::default()
            .substitution(20)
            .build().unwrap();
        let table = AlignmentTable::build(&chars("a"), &chars("b"), &costs);
        assert_eq!(table.cell(1, 1), &Cell::new(14, 1, 0));
    }

    #[test]
    fn test_kitten_sitting_score() {
        let table = AlignmentTable::build(&chars("kitten"), &chars("sitting"), &CostModel::default());
        assert_eq!(table.score(), 27);
    }

    #[test]
    fn test_display() {
        let table = AlignmentTable::build(&chars("a"), &chars("a"), &CostModel::default());
        assert_eq!(table.to_string(), "[(0, 0, 0), (7, 0, 0)]\n[(7, 0, 0), (0, 0, 0)]");
    }
}
