//! Selection-driven trigger surface.
//!
//! Given a cursor position in a C# file, report the actions an editor would
//! offer: one for a method declaration, getter and setter for a property
//! declaration, the matching one for an accessor. Positions inside a member
//! body, or on any other node, offer nothing.

use serde::{Deserialize, Serialize};
use sig_core::Action;

use crate::error::ParserError;
use crate::extractors::csharp;
use crate::parser::parse_source;

/// A 1-based cursor position. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    /// `None` selects the first non-whitespace character of the line.
    pub column: Option<usize>,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column: Some(column),
        }
    }

    #[must_use]
    pub const fn line(line: usize) -> Self {
        Self { line, column: None }
    }

    /// Byte offset of this position in `source`.
    ///
    /// # Errors
    /// Returns `ParserError::PositionOutOfRange` if the line does not exist or
    /// the column lies past the end of the line.
    pub fn to_offset(self, source: &str) -> Result<usize, ParserError> {
        let out_of_range = || ParserError::PositionOutOfRange {
            line: self.line,
            column: self.column.unwrap_or(0),
        };

        if self.line == 0 {
            return Err(out_of_range());
        }

        let mut line_start = 0usize;
        let mut current = 1usize;
        for line in source.split_inclusive('\n') {
            if current == self.line {
                let content = line.trim_end_matches(['\n', '\r']);
                let column = match self.column {
                    Some(0) => return Err(out_of_range()),
                    Some(column) => column,
                    None => content.chars().take_while(|c| c.is_whitespace()).count() + 1,
                };
                // One past the last character is still on the line.
                if column > content.chars().count() + 1 {
                    return Err(out_of_range());
                }
                let byte_in_line = content
                    .char_indices()
                    .nth(column - 1)
                    .map_or(content.len(), |(i, _)| i);
                return Ok(line_start + byte_in_line);
            }
            line_start += line.len();
            current += 1;
        }

        Err(out_of_range())
    }
}

/// Actions offered for a cursor at `position` in `source`.
///
/// # Errors
/// Returns `ParserError::PositionOutOfRange` if `position` is not in `source`.
pub fn actions_at(source: &str, position: Position) -> Result<Vec<Action>, ParserError> {
    let offset = position.to_offset(source)?;
    let root = parse_source(source);

    let Some(node) = csharp::trigger_nodes(&root)
        .into_iter()
        .filter(|node| {
            let range = node.range();
            range.start <= offset && offset < range.end
        })
        .min_by_key(|node| node.range().len())
    else {
        tracing::debug!(line = position.line, "selection is not on a member declaration");
        return Ok(Vec::new());
    };

    if csharp::body_range(&node).is_some_and(|body| body.contains(&offset)) {
        tracing::debug!(
            line = position.line,
            kind = %node.kind(),
            "selection is inside a member body"
        );
        return Ok(Vec::new());
    }

    let actions = csharp::actions_for_node(&node);
    tracing::debug!(
        line = position.line,
        kind = %node.kind(),
        actions = actions.len(),
        "resolved selection"
    );
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "class A\n{\n    void B() { }\n}\n";

    #[test]
    fn offset_of_explicit_column() {
        assert_eq!(Position::new(1, 1).to_offset(SOURCE).unwrap(), 0);
        assert_eq!(Position::new(3, 10).to_offset(SOURCE).unwrap(), 10 + 9);
    }

    #[test]
    fn missing_column_skips_indentation() {
        assert_eq!(Position::line(3).to_offset(SOURCE).unwrap(), 10 + 4);
    }

    #[test]
    fn columns_count_characters() {
        let source = "// é\nclass A {}\n";
        assert_eq!(Position::new(1, 4).to_offset(source).unwrap(), 3);
        assert_eq!(Position::new(1, 5).to_offset(source).unwrap(), 5);
        assert_eq!(Position::new(2, 1).to_offset(source).unwrap(), 6);
    }

    #[test]
    fn end_of_line_is_in_range() {
        assert_eq!(Position::new(1, 8).to_offset(SOURCE).unwrap(), 7);
    }

    #[test]
    fn out_of_range_positions() {
        assert!(Position::new(0, 1).to_offset(SOURCE).is_err());
        assert!(Position::new(9, 1).to_offset(SOURCE).is_err());
        assert!(Position::new(1, 0).to_offset(SOURCE).is_err());
        assert!(Position::new(1, 30).to_offset(SOURCE).is_err());
    }
}
