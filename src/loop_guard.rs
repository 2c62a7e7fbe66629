//! Loop prevention for self-inflicted change notifications
//!
//! Every write this layer performs comes back from the host as an ordinary
//! change notification. Without a memo of what we last wrote, the dispatcher
//! would read, infer, write and read again forever.

/// Remembers the span text most recently written into a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopGuard {
    last_applied: Option<String>,
}

impl LoopGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_applied(&self) -> Option<&str> {
        self.last_applied.as_deref()
    }

    /// Pre-check: the candidate span is exactly what we wrote last time
    pub fn is_echo(&self, candidate: &str) -> bool {
        self.last_applied.as_deref() == Some(candidate)
    }

    /// Full decision for a formatter result
    ///
    /// `produced` is `None` when the formatter has not run (or failed).
    pub fn should_apply(&self, candidate: &str, produced: Option<&str>) -> bool {
        if self.is_echo(candidate) {
            return false;
        }
        match produced {
            Some(produced) => produced != candidate,
            None => false,
        }
    }

    /// Record an accepted write. Call together with the write itself.
    pub fn record(&mut self, produced: impl Into<String>) {
        self.last_applied = Some(produced.into());
    }

    pub fn clear(&mut self) {
        self.last_applied = None;
    }
}
