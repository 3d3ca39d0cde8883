
use log::debug;
use serde::Serialize;

use crate::alignment::backtrace::backtrace;
use crate::alignment::replay::{replay, ReplayError};
use crate::alignment::table::AlignmentTable;
use crate::data_types::cost_model::CostModel;
use crate::data_types::operation::{Operation, OperationKind};

/// A fully materialized alignment between a source and a target sequence
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Alignment {
    /// The sequence being transformed
    source: Vec<char>,
    /// The sequence we transform into
    target: Vec<char>,
    /// The costs used to build the table
    cost_model: CostModel,
    /// The filled dynamic programming table
    table: AlignmentTable,
    /// The recovered edit script, start to end
    operations: Vec<Operation>
}

impl Alignment {
    /// Builds the table and runs the backtrace for a pair of sequences.
    /// This never fails, empty inputs degenerate to pure insertion or deletion chains.
    /// # Arguments
    /// * `source` - the sequence being transformed
    /// * `target` - the sequence we transform into
    /// * `cost_model` - the flat operation costs
    pub fn new(source: &str, target: &str, cost_model: CostModel) -> Self {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        debug!("Aligning source (len={}) to target (len={})", source.len(), target.len());

        let table = AlignmentTable::build(&source, &target, &cost_model);
        let operations = backtrace(&table, &source, &target);
        Self {
            source, target, cost_model, table, operations
        }
    }

    /// The minimum total cost of the alignment
    pub fn score(&self) -> usize {
        self.table.score()
    }

    /// Sums the cost of every operation in the edit script, this should always equal `score()`
    pub fn operation_cost(&self) -> usize {
        self.operations.iter()
            .map(|o| self.cost_model.cost(o.kind()))
            .sum()
    }

    /// Counts the operations of a given kind
    pub fn count(&self, kind: OperationKind) -> usize {
        self.operations.iter()
            .filter(|o| o.kind() == kind)
            .count()
    }

    /// Applies the edit script to the source, which should reproduce the target.
    /// # Errors
    /// * if the edit script does not consume the source exactly
    pub fn replay(&self) -> Result<String, ReplayError> {
        replay(&self.source, &self.operations)
    }

    // getters
    pub fn source(&self) -> &[char] {
        &self.source
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    pub fn table(&self) -> &AlignmentTable {
        &self.table
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::cost_model::{CostModelBuilder, DEFAULT_INSERTION_COST, MAX_COST};

    const PAIRS: [(&str, &str); 10] = [
        ("kitten", "sitting"),
        ("abc", "abc"),
        ("a", ""),
        ("", "ab"),
        ("abcd", "axd"),
        ("abcdef", "azced"),
        ("ab", "ba"),
        ("abc", "xaybzc"),
        ("hello", "world"),
        ("ネコ", "ネズミ")
    ];

    #[test]
    fn test_known_scores() {
        let expected = [27, 0, 7, 14, 17, 27, 14, 21, 40, 17];
        for ((source, target), score) in PAIRS.iter().zip(expected) {
            let alignment = Alignment::new(source, target, CostModel::default());
            assert_eq!(alignment.score(), score, "{source} -> {target}");
        }
    }

    #[test]
    fn test_symmetric_score() {
        for (source, target) in PAIRS {
            let forward = Alignment::new(source, target, CostModel::default());
            let reverse = Alignment::new(target, source, CostModel::default());
            assert_eq!(forward.score(), reverse.score(), "{source} <-> {target}");
        }
    }

    #[test]
    fn test_replay_reconstructs_target() {
        for (source, target) in PAIRS {
            let alignment = Alignment::new(source, target, CostModel::default());
            assert_eq!(alignment.replay().unwrap(), target);
            assert_eq!(alignment.operation_cost(), alignment.score());
        }
    }

    #[test]
    fn test_identity() {
        let alignment = Alignment::new("abc", "abc", CostModel::default());
        assert_eq!(alignment.score(), 0);
        assert_eq!(alignment.count(OperationKind::Match), 3);
        assert_eq!(alignment.operations().len(), 3);
    }

    #[test]
    fn test_empty_source() {
        let alignment = Alignment::new("", "xyz", CostModel::default());
        assert_eq!(alignment.score(), 3 * DEFAULT_INSERTION_COST);
        assert!(alignment.operations().iter().all(|o| o.kind() == OperationKind::Insertion));
    }

    #[test]
    fn test_empty_target() {
        let alignment = Alignment::new("xyz", "", CostModel::default());
        assert_eq!(alignment.score(), 21);
        assert_eq!(alignment.count(OperationKind::Deletion), 3);
    }

    #[test]
    fn test_kitten_sitting_counts() {
        let alignment = Alignment::new("kitten", "sitting", CostModel::default());
        assert_eq!(alignment.count(OperationKind::Substitution), 2);
        assert_eq!(alignment.count(OperationKind::Insertion), 1);
        assert_eq!(alignment.count(OperationKind::Deletion), 0);
        assert_eq!(alignment.count(OperationKind::Match), 4);
    }

    #[test]
    fn test_max_costs_do_not_overflow() {
        let costs = CostModelBuilder::default()
            .substitution(MAX_COST)
            .insertion(MAX_COST)
            .deletion(MAX_COST)
            .build().unwrap();
        let alignment = Alignment::new("ab", "", costs);
        assert_eq!(alignment.score(), 2 * MAX_COST);

        let alignment = Alignment::new("kitten", "sitting", costs);
        assert_eq!(alignment.operation_cost(), alignment.score());
        assert_eq!(alignment.replay().unwrap(), "sitting");
    }

    #[test]
    fn test_custom_costs() {
        // substitution is pricier than a deletion plus an insertion, so mismatches become gaps
        let costs = CostModelBuilder::default()
            .substitution(20)
            .build().unwrap();
        let alignment = Alignment::new("a", "b", costs);
        assert_eq!(alignment.score(), 14);
        assert_eq!(alignment.count(OperationKind::Substitution), 0);
        assert_eq!(alignment.replay().unwrap(), "b");
        assert_eq!(alignment.operation_cost(), 14);
    }
}
