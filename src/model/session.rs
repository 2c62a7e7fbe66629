//! Per-document session state and the mode state machine

use crate::host::{DocumentId, FormatMode};
use crate::loop_guard::LoopGuard;

use super::trigger::TriggerSlot;

/// Tracking mode for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Notifications are ignored
    Disabled,
    /// Parens follow indentation
    #[default]
    IndentTracking,
    /// Indentation follows parens
    ParenTracking,
}

impl Mode {
    /// `toggleMode` transition. Never lands on `Disabled`.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Disabled | Mode::ParenTracking => Mode::IndentTracking,
            Mode::IndentTracking => Mode::ParenTracking,
        }
    }

    /// Formatter behavior for this mode, `None` when disabled
    pub fn format_mode(self) -> Option<FormatMode> {
        match self {
            Mode::Disabled => None,
            Mode::IndentTracking => Some(FormatMode::Indent),
            Mode::ParenTracking => Some(FormatMode::Paren),
        }
    }

    pub fn is_enabled(self) -> bool {
        self != Mode::Disabled
    }

    /// Short label for a host status indicator
    pub fn status_label(self) -> Option<&'static str> {
        match self {
            Mode::Disabled => None,
            Mode::IndentTracking => Some("Indent"),
            Mode::ParenTracking => Some("Paren"),
        }
    }
}

/// State kept for one open, tracked document
#[derive(Debug, Clone)]
pub struct DocumentSession {
    pub id: DocumentId,
    pub mode: Mode,
    pub guard: LoopGuard,
    pub trigger: TriggerSlot,
}

impl DocumentSession {
    /// New session in the initial `IndentTracking` mode
    pub fn new(id: DocumentId) -> Self {
        Self {
            id,
            mode: Mode::default(),
            guard: LoopGuard::new(),
            trigger: TriggerSlot::default(),
        }
    }

    /// Every mode change drops the memo. The next attempt in the new mode must
    /// reach the formatter even when the span still equals our last write.
    pub fn enable(&mut self) {
        self.mode = Mode::IndentTracking;
        self.guard.clear();
    }

    pub fn disable(&mut self) {
        self.mode = Mode::Disabled;
        self.guard.clear();
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.guard.clear();
        self.mode
    }
}
