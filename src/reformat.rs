//! A single reformat attempt against a host document
//!
//! ```text
//! snapshot text + cursor → resolve span → echo check → formatter
//!     → no-op check → write span → restore cursor and selections
//! ```
//!
//! Every early return leaves the document untouched. The write itself is one
//! `set_text_in_range` call covering exactly the resolved rows.

use thiserror::Error;

use crate::host::{Document, FormatMode, Formatter, Position, TextRange};
use crate::model::DocumentSession;
use crate::range::{RangeError, Span};

/// How an attempt ended when nothing went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReformatOutcome {
    /// Rows `[start_row, end_row)` were rewritten
    Applied { start_row: usize, end_row: usize },
    /// The span is exactly what we wrote last time
    Echo,
    /// The formatter returned its input unchanged
    Unchanged,
    /// The formatter reported failure; nothing was written
    FormatterFailed,
    /// The session is disabled
    Disabled,
    /// An autocomplete popup is showing; try again on the next notification
    CompletionActive,
}

impl ReformatOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReformatOutcome::Applied { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReformatError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("document {0} is not available")]
    MissingDocument(u64),
}

/// Run one incremental attempt for `session` against `doc`
pub fn attempt(
    session: &mut DocumentSession,
    doc: &mut dyn Document,
    formatter: &dyn Formatter,
) -> Result<ReformatOutcome, ReformatError> {
    let Some(mode) = session.mode.format_mode() else {
        return Ok(ReformatOutcome::Disabled);
    };

    if doc.is_completion_active() {
        return Ok(ReformatOutcome::CompletionActive);
    }

    let text = doc.text();
    let cursor = doc.cursor();
    let selections = doc.selections();

    let span = Span::resolve(&text, cursor)?;

    if session.guard.is_echo(&span.text) {
        tracing::debug!(
            "Skipping echo of our own write in document {} (rows {}..{})",
            session.id.0,
            span.start_row,
            span.end_row
        );
        return Ok(ReformatOutcome::Echo);
    }

    let produced = match formatter.format(mode, &span.text, Some(span.cursor)) {
        Ok(produced) => produced,
        Err(e) => {
            tracing::debug!("Document {}: {}", session.id.0, e);
            return Ok(ReformatOutcome::FormatterFailed);
        }
    };

    if !session.guard.should_apply(&span.text, Some(&produced)) {
        return Ok(ReformatOutcome::Unchanged);
    }

    doc.set_text_in_range(TextRange::rows(span.start_row, span.end_row), &produced);
    session.guard.record(produced);

    doc.set_cursor(cursor);
    doc.set_selections(&selections);

    tracing::debug!(
        "Reformatted document {} rows {}..{} ({:?})",
        session.id.0,
        span.start_row,
        span.end_row,
        mode
    );

    Ok(ReformatOutcome::Applied {
        start_row: span.start_row,
        end_row: span.end_row,
    })
}

/// Whole-document paren pass with no cursor constraint, run once when tracking starts
pub fn normalize(
    doc: &mut dyn Document,
    formatter: &dyn Formatter,
) -> Result<ReformatOutcome, ReformatError> {
    let text = doc.text();
    let cursor = doc.cursor();
    let selections = doc.selections();

    let produced = match formatter.format(FormatMode::Paren, &text, None) {
        Ok(produced) => produced,
        Err(e) => {
            tracing::debug!("Normalization skipped: {}", e);
            return Ok(ReformatOutcome::FormatterFailed);
        }
    };

    if produced == text {
        return Ok(ReformatOutcome::Unchanged);
    }

    let end = end_position(&text);
    doc.set_text_in_range(TextRange::new(Position::default(), end), &produced);
    doc.set_cursor(cursor);
    doc.set_selections(&selections);

    Ok(ReformatOutcome::Applied {
        start_row: 0,
        end_row: end.line + 1,
    })
}

/// Position just past the last character of `text`
fn end_position(text: &str) -> Position {
    let line = text.matches('\n').count();
    let column = text
        .rsplit('\n')
        .next()
        .map(|last| last.chars().count())
        .unwrap_or(0);
    Position::new(line, column)
}
