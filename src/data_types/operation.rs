
use serde::Serialize;

/// Separator placed between the two characters of a substitution in human-readable reports
pub const REPORT_SEPARATOR: &str = " <=> ";

/// The four kinds of edit we can observe in an alignment
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, strum_macros::AsRefStr, strum_macros::Display, strum_macros::EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OperationKind {
    /// Both characters are equal, consumes one from each sequence
    Match=0,
    /// Characters differ, consumes one from each sequence
    Substitution,
    /// Consumes one character from the target only
    Insertion,
    /// Consumes one character from the source only
    Deletion
}

impl OperationKind {
    /// Returns true if this kind synchronizes both sequences (match or substitution).
    pub fn is_anchor(&self) -> bool {
        match self {
            OperationKind::Match |
            OperationKind::Substitution => true,

            OperationKind::Insertion |
            OperationKind::Deletion => false
        }
    }

    /// Returns true if this kind only consumes from one sequence (insertion or deletion).
    pub fn is_gap(&self) -> bool {
        !self.is_anchor()
    }
}

/// The characters involved in a single edit
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Edit {
    Match(char),
    Substitution { source: char, target: char },
    Insertion(char),
    Deletion(char)
}

/// One step of an edit script, along with the table cell the step was taken from.
/// The predecessor cell coordinates double as the character indices: `row` indexes the target and `col` indexes the source.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Operation {
    /// The edit and the characters involved
    edit: Edit,
    /// Row of the predecessor cell, i.e. the number of target characters consumed before this step
    row: usize,
    /// Column of the predecessor cell, i.e. the number of source characters consumed before this step
    col: usize
}

impl Operation {
    /// Constructor
    /// # Arguments
    /// * `edit` - the edit that was performed
    /// * `row` - the predecessor row in the alignment table
    /// * `col` - the predecessor column in the alignment table
    pub fn new(edit: Edit, row: usize, col: usize) -> Self {
        Self { edit, row, col }
    }

    pub fn kind(&self) -> OperationKind {
        match self.edit {
            Edit::Match(_) => OperationKind::Match,
            Edit::Substitution { .. } => OperationKind::Substitution,
            Edit::Insertion(_) => OperationKind::Insertion,
            Edit::Deletion(_) => OperationKind::Deletion
        }
    }

    /// Returns the characters involved in this operation, source character first for substitutions.
    pub fn characters(&self) -> Vec<char> {
        match self.edit {
            Edit::Match(c) |
            Edit::Insertion(c) |
            Edit::Deletion(c) => vec![c],
            Edit::Substitution { source, target } => vec![source, target]
        }
    }

    /// Joins the involved characters into a single string.
    /// # Arguments
    /// * `separator` - placed between the characters of a substitution, unused otherwise
    pub fn content(&self, separator: &str) -> String {
        self.characters().into_iter()
            .map(String::from)
            .collect::<Vec<String>>()
            .join(separator)
    }

    /// Index into the source sequence, if this operation consumes a source character.
    pub fn source_index(&self) -> Option<usize> {
        match self.kind() {
            OperationKind::Insertion => None,
            _ => Some(self.col)
        }
    }

    /// Index into the target sequence, if this operation consumes a target character.
    pub fn target_index(&self) -> Option<usize> {
        match self.kind() {
            OperationKind::Deletion => None,
            _ => Some(self.row)
        }
    }

    // getters
    pub fn edit(&self) -> &Edit {
        &self.edit
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}
