//! In-memory host implementation
//!
//! `TextBuffer` is a rope-backed document that records the notifications a real
//! editor would raise, including those caused by our own writes. `Workspace`
//! owns a set of buffers and implements [`Host`] over them. Both are used by
//! the CLI and the test suites; embedding editors provide their own.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ropey::Rope;

use crate::host::{Document, DocumentId, Host, Position, Selection, TextRange};
use crate::messages::DocumentMsg;

/// Notification recorded by a buffer mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferEvent {
    Changed,
    CursorMoved,
}

/// A rope-backed document with a single cursor and a selection list
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: Position,
    selections: Vec<Selection>,
    completion_active: bool,
    events: Vec<BufferEvent>,
    /// Incremented on every text change
    pub revision: u64,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::with_text("")
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Position::default(),
            selections: vec![Selection::default()],
            completion_active: false,
            events: Vec::new(),
            revision: 0,
        }
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of a line in chars, excluding the trailing newline
    pub fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Clamp a position into the buffer
    pub fn clamp(&self, pos: Position) -> Position {
        let last_line = self.rope.len_lines().saturating_sub(1);
        let line = pos.line.min(last_line);
        Position::new(line, pos.column.min(self.line_length(line)))
    }

    fn char_index(&self, pos: Position) -> usize {
        if pos.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(pos.line) + pos.column.min(self.line_length(pos.line))
    }

    /// Simulate a user edit: insert at the cursor and move past the inserted text
    pub fn insert_at_cursor(&mut self, text: &str) {
        let idx = self.char_index(self.cursor);
        self.rope.insert(idx, text);
        self.mark_changed();

        let after = idx + text.chars().count();
        let line = self.rope.char_to_line(after);
        let column = after - self.rope.line_to_char(line);
        self.set_cursor(Position::new(line, column));
    }

    pub fn set_completion_active(&mut self, active: bool) {
        self.completion_active = active;
    }

    /// Take the notifications recorded since the last call
    pub fn drain_events(&mut self) -> Vec<BufferEvent> {
        std::mem::take(&mut self.events)
    }

    fn mark_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.events.push(BufferEvent::Changed);
    }
}

impl Document for TextBuffer {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_text_in_range(&mut self, range: TextRange, text: &str) {
        let start = self.char_index(range.start);
        let end = self.char_index(range.end).max(start);
        self.rope.remove(start..end);
        self.rope.insert(start, text);
        self.mark_changed();

        self.cursor = self.clamp(self.cursor);
    }

    fn set_cursor(&mut self, position: Position) {
        let position = self.clamp(position);
        if position != self.cursor {
            self.cursor = position;
            self.events.push(BufferEvent::CursorMoved);
        }
    }

    fn set_selections(&mut self, selections: &[Selection]) {
        self.selections = selections
            .iter()
            .map(|s| Selection::from_positions(self.clamp(s.anchor), self.clamp(s.head)))
            .collect();
    }

    fn is_completion_active(&self) -> bool {
        self.completion_active
    }
}

#[derive(Debug)]
struct Entry {
    buffer: TextBuffer,
    path: Option<PathBuf>,
}

/// A set of open buffers acting as the host editor
#[derive(Debug, Default)]
pub struct Workspace {
    documents: BTreeMap<DocumentId, Entry>,
    next_id: u64,
    active: Option<DocumentId>,
    notifications: Vec<DocumentMsg>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a buffer with the given text; it becomes the active document
    pub fn open_text(&mut self, path: Option<PathBuf>, text: &str) -> DocumentId {
        self.next_id += 1;
        let id = DocumentId(self.next_id);
        let path_str = path.as_ref().map(|p| p.to_string_lossy().into_owned());

        self.documents.insert(
            id,
            Entry {
                buffer: TextBuffer::with_text(text),
                path,
            },
        );
        self.active = Some(id);
        self.notifications.push(DocumentMsg::Opened {
            document_id: id,
            path: path_str,
        });
        id
    }

    /// Open a file from disk; a missing file opens as an empty buffer
    pub fn open_file(&mut self, path: &Path) -> std::io::Result<DocumentId> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e),
        };
        Ok(self.open_text(Some(path.to_path_buf()), &text))
    }

    pub fn close(&mut self, id: DocumentId) {
        self.flush_events(id);
        if self.documents.remove(&id).is_some() {
            self.notifications
                .push(DocumentMsg::Closed { document_id: id });
        }
        if self.active == Some(id) {
            self.active = self.documents.keys().next_back().copied();
        }
    }

    /// Write a buffer to its path and raise `Saved`
    pub fn save(&mut self, id: DocumentId) -> std::io::Result<()> {
        self.flush_events(id);
        let Some(entry) = self.documents.get(&id) else {
            return Ok(());
        };
        let Some(path) = entry.path.clone() else {
            return Ok(());
        };
        std::fs::write(&path, entry.buffer.text())?;
        self.notifications.push(DocumentMsg::Saved {
            document_id: id,
            path: Some(path.to_string_lossy().into_owned()),
        });
        Ok(())
    }

    pub fn buffer(&self, id: DocumentId) -> Option<&TextBuffer> {
        self.documents.get(&id).map(|e| &e.buffer)
    }

    pub fn buffer_mut(&mut self, id: DocumentId) -> Option<&mut TextBuffer> {
        self.documents.get_mut(&id).map(|e| &mut e.buffer)
    }

    pub fn path(&self, id: DocumentId) -> Option<&Path> {
        self.documents.get(&id).and_then(|e| e.path.as_deref())
    }

    pub fn active(&self) -> Option<DocumentId> {
        self.active
    }

    pub fn set_active(&mut self, id: DocumentId) {
        if self.documents.contains_key(&id) {
            self.active = Some(id);
        }
    }

    pub fn find_by_path(&self, path: &Path) -> Option<DocumentId> {
        self.documents
            .iter()
            .find(|(_, e)| e.path.as_deref() == Some(path))
            .map(|(id, _)| *id)
    }

    fn flush_events(&mut self, id: DocumentId) {
        let Some(entry) = self.documents.get_mut(&id) else {
            return;
        };
        for event in entry.buffer.drain_events() {
            self.notifications.push(match event {
                BufferEvent::Changed => DocumentMsg::Changed { document_id: id },
                BufferEvent::CursorMoved => DocumentMsg::CursorMoved { document_id: id },
            });
        }
    }
}

impl Host for Workspace {
    fn document_mut(&mut self, id: DocumentId) -> Option<&mut dyn Document> {
        self.documents
            .get_mut(&id)
            .map(|e| &mut e.buffer as &mut dyn Document)
    }

    fn open_resource(&mut self, path: &Path) -> Option<DocumentId> {
        if let Some(id) = self.find_by_path(path) {
            self.active = Some(id);
            return Some(id);
        }
        match self.open_file(path) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                None
            }
        }
    }

    fn active_document(&self) -> Option<DocumentId> {
        self.active
    }

    fn drain_notifications(&mut self) -> Vec<DocumentMsg> {
        let ids: Vec<DocumentId> = self.documents.keys().copied().collect();
        for id in ids {
            self.flush_events(id);
        }
        std::mem::take(&mut self.notifications)
    }
}
