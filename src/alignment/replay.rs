
use crate::data_types::operation::{Edit, Operation};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ReplayError {
    #[error("operation #{index} expects source character {expected:?} but found {found:?}")]
    SourceMismatch { index: usize, expected: char, found: Option<char> },
    #[error("{remaining} source characters were not consumed by the edit script")]
    UnconsumedSource { remaining: usize },
}

/// Applies an edit script to `source` and returns the resulting sequence.
/// Every match, substitution, and deletion must consume the next source character exactly, otherwise the script does not describe `source`.
/// # Arguments
/// * `source` - the sequence the script was derived from
/// * `operations` - the edit script, in start-to-end order
/// # Errors
/// * if an operation refers to a source character that is not next in `source`
/// * if the script ends before all of `source` is consumed
pub fn replay(source: &[char], operations: &[Operation]) -> Result<String, ReplayError> {
    let mut source_iter = source.iter().copied();
    let mut output = String::with_capacity(source.len() + operations.len());

    for (index, operation) in operations.iter().enumerate() {
        let consumed = match *operation.edit() {
            Edit::Insertion(c) => {
                output.push(c);
                continue;
            },
            Edit::Match(c) => {
                output.push(c);
                c
            },
            Edit::Substitution { source, target } => {
                output.push(target);
                source
            },
            Edit::Deletion(c) => c
        };

        let found = source_iter.next();
        if found != Some(consumed) {
            return Err(ReplayError::SourceMismatch { index, expected: consumed, found });
        }
    }

    let remaining = source_iter.count();
    if remaining > 0 {
        return Err(ReplayError::UnconsumedSource { remaining });
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_script() {
        let source: Vec<char> = "ab".chars().collect();
        let operations = vec![
            Operation::new(Edit::Insertion('b'), 0, 0),
            Operation::new(Edit::Match('a'), 1, 0),
            Operation::new(Edit::Deletion('b'), 2, 1)
        ];
        assert_eq!(replay(&source, &operations).unwrap(), "ba");
    }

    #[test]
    fn test_replay_empty() {
        assert_eq!(replay(&[], &[]).unwrap(), "");
    }

    #[test]
    fn test_replay_mismatch() {
        let source: Vec<char> = "ab".chars().collect();
        let operations = vec![
            Operation::new(Edit::Match('a'), 0, 0),
            Operation::new(Edit::Substitution { source: 'c', target: 'd' }, 1, 1)
        ];
        assert_eq!(
            replay(&source, &operations),
            Err(ReplayError::SourceMismatch { index: 1, expected: 'c', found: Some('b') })
        );

        let operations = vec![
            Operation::new(Edit::Match('a'), 0, 0),
            Operation::new(Edit::Deletion('b'), 1, 1),
            Operation::new(Edit::Deletion('c'), 1, 2)
        ];
        assert_eq!(
            replay(&source, &operations),
            Err(ReplayError::SourceMismatch { index: 2, expected: 'c', found: None })
        );
    }

    #[test]
    fn test_replay_unconsumed() {
        let source: Vec<char> = "abc".chars().collect();
        let operations = vec![Operation::new(Edit::Match('a'), 0, 0)];
        assert_eq!(replay(&source, &operations), Err(ReplayError::UnconsumedSource { remaining: 2 }));
    }
}
