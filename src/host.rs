//! Host collaborator contracts
//!
//! The editor that embeds this crate owns the actual text buffers. These traits
//! are the narrow surface the reformat layer consumes: read text and cursor
//! state, write a range back, and hand over change notifications.

use std::path::Path;

use thiserror::Error;

use crate::messages::DocumentMsg;

/// Unique identifier for a document, assigned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// A position in a document (0-indexed line and character column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A selection with anchor (fixed) and head (moving) points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    /// Create an empty selection at a position
    pub fn new(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn from_positions(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// Half-open buffer range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range covering whole rows `[start_row, end_row)`
    pub fn rows(start_row: usize, end_row: usize) -> Self {
        Self {
            start: Position::new(start_row, 0),
            end: Position::new(end_row, 0),
        }
    }
}

/// Formatter behavior selector, derived from the session mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatMode {
    /// Parens are inferred from indentation
    Indent,
    /// Indentation is inferred from parens
    Paren,
}

/// Failure sentinel returned by a formatter. Never fatal; the write is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("formatter failed: {0}")]
pub struct FormatError(pub String);

/// A live, editable document owned by the host editor
pub trait Document {
    /// Full document text
    fn text(&self) -> String;

    /// Primary cursor position
    fn cursor(&self) -> Position;

    /// All selections (including empty ones), in host order
    fn selections(&self) -> Vec<Selection>;

    /// Replace `range` with `text` in a single edit
    fn set_text_in_range(&mut self, range: TextRange, text: &str);

    fn set_cursor(&mut self, position: Position);

    fn set_selections(&mut self, selections: &[Selection]);

    /// Whether an autocomplete popup is currently showing for this document
    fn is_completion_active(&self) -> bool {
        false
    }
}

/// The host editor: owns documents and forwards their notifications
pub trait Host {
    fn document_mut(&mut self, id: DocumentId) -> Option<&mut dyn Document>;

    /// Open (or focus) a resource by path, returning the document showing it
    fn open_resource(&mut self, path: &Path) -> Option<DocumentId>;

    /// Document that commands apply to
    fn active_document(&self) -> Option<DocumentId> {
        None
    }

    /// Take all change/cursor/save/close notifications raised since the last call
    fn drain_notifications(&mut self) -> Vec<DocumentMsg> {
        Vec::new()
    }
}

/// The structural formatter: a pure function from text and cursor to text
pub trait Formatter {
    /// `cursor` is `None` for a whole-document pass with no cursor constraint
    fn format(
        &self,
        mode: FormatMode,
        text: &str,
        cursor: Option<Position>,
    ) -> Result<String, FormatError>;
}

impl<F> Formatter for F
where
    F: Fn(FormatMode, &str, Option<Position>) -> Result<String, FormatError>,
{
    fn format(
        &self,
        mode: FormatMode,
        text: &str,
        cursor: Option<Position>,
    ) -> Result<String, FormatError> {
        self(mode, text, cursor)
    }
}
