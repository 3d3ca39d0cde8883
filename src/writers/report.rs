
use anyhow::Context;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::data_types::operation::{Operation, OperationKind, REPORT_SEPARATOR};
use crate::util::json_io::create_writer;

/// Converts an edit script into the ordered (content, kind) pairs of the human-readable report.
/// Substitutions show both characters, source first.
pub fn report_entries(operations: &[Operation]) -> Vec<(String, OperationKind)> {
    operations.iter()
        .map(|o| (o.content(REPORT_SEPARATOR), o.kind()))
        .collect()
}

/// Writes the human-readable report, one "content : kind" line per operation.
/// # Arguments
/// * `operations` - the edit script
/// * `writer` - where the lines go, typically stdout
pub fn write_report<W: Write>(operations: &[Operation], writer: &mut W) -> std::io::Result<()> {
    for (content, kind) in report_entries(operations) {
        writeln!(writer, "{content} : {kind}")?;
    }
    Ok(())
}

/// This is a wrapper for writing the edit script out to a TSV file
pub struct ReportWriter {
    /// Handle on the writer
    csv_writer: csv::Writer<Box<dyn Write>>,
}

/// Contains all the data written to each row of our report file
#[derive(Serialize)]
struct ReportRow {
    /// Character(s) involved
    content: String,
    /// Operation kind
    kind: OperationKind,
    /// Index into the source sequence, empty for insertions
    source_index: Option<usize>,
    /// Index into the target sequence, empty for deletions
    target_index: Option<usize>,
}

impl ReportRow {
    fn new(operation: &Operation) -> Self {
        Self {
            content: operation.content(REPORT_SEPARATOR),
            kind: operation.kind(),
            source_index: operation.source_index(),
            target_index: operation.target_index()
        }
    }
}

impl ReportWriter {
    /// Creates a new writer for the report. The output will be tab-delimited, and gzipped if the path ends in ".gz".
    /// # Arguments
    /// * `filename` - path to the file that will get opened
    /// # Errors
    /// * if the file cannot be created
    pub fn new(filename: &Path) -> anyhow::Result<Self> {
        let delimiter: u8 = b'\t';
        let csv_writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(create_writer(filename)?);
        Ok(Self {
            csv_writer
        })
    }

    /// Writes every operation as one row.
    /// # Arguments
    /// * `operations` - the edit script, start to end
    /// # Errors
    /// * if serialization or the underlying writer fails
    pub fn write_operations(&mut self, operations: &[Operation]) -> anyhow::Result<()> {
        for operation in operations.iter() {
            self.csv_writer.serialize(ReportRow::new(operation))
                .context("Error while writing report row:")?;
        }
        self.csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::aligner::Alignment;
    use crate::data_types::cost_model::CostModel;

    #[test]
    fn test_report_entries() {
        let alignment = Alignment::new("kitten", "sitting", CostModel::default());
        let entries = report_entries(alignment.operations());
        assert_eq!(entries[0], ("k <=> s".to_string(), OperationKind::Substitution));
        assert_eq!(entries[1], ("i".to_string(), OperationKind::Match));
        assert_eq!(entries[6], ("g".to_string(), OperationKind::Insertion));
    }

    #[test]
    fn test_write_report() {
        let alignment = Alignment::new("ab", "ba", CostModel::default());
        let mut buffer: Vec<u8> = vec![];
        write_report(alignment.operations(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "b : insertion\na : match\nb : deletion\n");
    }

    #[test]
    fn test_report_writer() {
        let out_fn = std::env::temp_dir().join(format!("levenshtein_dag_report_{}.tsv", std::process::id()));
        let alignment = Alignment::new("ab", "ba", CostModel::default());
        {
            let mut writer = ReportWriter::new(&out_fn).unwrap();
            writer.write_operations(alignment.operations()).unwrap();
        }

        let contents = std::fs::read_to_string(&out_fn).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec![
            "content\tkind\tsource_index\ttarget_index",
            "b\tinsertion\t\t0",
            "a\tmatch\t0\t1",
            "b\tdeletion\t1\t"
        ]);
        std::fs::remove_file(&out_fn).unwrap();
    }
}
