//! Parent-expression range resolution
//!
//! Reformatting the whole document on every keystroke is correct but slow and
//! disturbs unrelated forms. Instead we resubmit only the rows between the
//! nearest top-level form above the cursor and the next one below it.
//!
//! A row counts as a top-level boundary when its very first character is `(`.
//! This is a deliberately cheap heuristic: continuation lines of multi-line
//! strings or comments that happen to start with `(` are misclassified.

use thiserror::Error;

use crate::host::Position;

/// Opening delimiter that marks a parent-expression line
pub const OPEN_DELIMITER: char = '(';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("resolved span is inverted: start row {start} > end row {end}")]
    Inverted { start: usize, end: usize },
}

/// True when the line starts with the opening delimiter
pub fn is_parent_expression_line(line: &str) -> bool {
    line.starts_with(OPEN_DELIMITER)
}

/// Split text into rows, appending an empty row when the text does not end
/// with a line terminator so the last real row always has a successor.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last().is_some_and(|last| !last.is_empty()) {
        lines.push("");
    }
    lines
}

/// Resolve the `[start_row, end_row)` span to resubmit for a cursor on `cursor_row`
pub fn resolve_range(lines: &[&str], cursor_row: usize) -> (usize, usize) {
    (find_start_row(lines, cursor_row), find_end_row(lines, cursor_row))
}

/// Same as [`resolve_range`], but checks the `start <= end` post-condition
pub fn checked_range(lines: &[&str], cursor_row: usize) -> Result<(usize, usize), RangeError> {
    let (start, end) = resolve_range(lines, cursor_row);
    if start > end {
        return Err(RangeError::Inverted { start, end });
    }
    Ok((start, end))
}

fn find_start_row(lines: &[&str], cursor_row: usize) -> usize {
    if cursor_row == 0 || lines.is_empty() {
        return 0;
    }

    let mut row = cursor_row.min(lines.len() - 1);
    // The cursor may sit on a form that was just split off its parent by a
    // line break; include the preceding form so it is re-inferred too.
    if row > 0 && is_parent_expression_line(lines[row]) {
        row -= 1;
    }

    (0..=row)
        .rev()
        .find(|&i| is_parent_expression_line(lines[i]))
        .unwrap_or(0)
}

fn find_end_row(lines: &[&str], cursor_row: usize) -> usize {
    let last = lines.len().saturating_sub(1);
    (cursor_row.saturating_add(1)..lines.len())
        .find(|&i| is_parent_expression_line(lines[i]))
        .unwrap_or(last)
}

/// A resolved span together with what the formatter needs to see
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start_row: usize,
    pub end_row: usize,
    /// Rows `[start_row, end_row)`, each terminated by `\n`
    pub text: String,
    /// Cursor translated into span coordinates
    pub cursor: Position,
}

impl Span {
    /// Resolve the span around `cursor` in `text`
    pub fn resolve(text: &str, cursor: Position) -> Result<Self, RangeError> {
        let lines = split_lines(text);
        let (start_row, end_row) = checked_range(&lines, cursor.line)?;

        let mut span_text = String::new();
        for line in &lines[start_row..end_row] {
            span_text.push_str(line);
            span_text.push('\n');
        }

        Ok(Self {
            start_row,
            end_row,
            text: span_text,
            cursor: Position::new(cursor.line.saturating_sub(start_row), cursor.column),
        })
    }
}
