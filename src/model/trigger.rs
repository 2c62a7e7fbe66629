//! Per-document pending-trigger slot
//!
//! Debounce timers carry the revision they were armed with. Only the timer
//! matching the latest revision fires; every older one is stale. At most one
//! attempt is in flight at a time, and notifications that land mid-flight
//! request a rerun once it completes.

/// What to do with a debounce timer that just expired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireDecision {
    /// Start a reformat attempt now
    Run,
    /// A newer notification superseded this timer
    Stale,
    /// An attempt is still running; rerun after it completes
    Deferred,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerSlot {
    revision: u64,
    in_flight: bool,
    rerun: bool,
}

impl TriggerSlot {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Record a change/cursor notification
    ///
    /// Returns the revision to arm a timer with, or `None` while an attempt is
    /// in flight: completion re-arms the slot instead.
    pub fn notify(&mut self) -> Option<u64> {
        self.revision = self.revision.wrapping_add(1);
        if self.in_flight {
            self.rerun = true;
            return None;
        }
        Some(self.revision)
    }

    /// Decide whether an expired timer armed at `revision` should fire
    pub fn fire(&mut self, revision: u64) -> FireDecision {
        if revision != self.revision {
            return FireDecision::Stale;
        }
        if self.in_flight {
            self.rerun = true;
            return FireDecision::Deferred;
        }
        self.in_flight = true;
        FireDecision::Run
    }

    /// Mark the in-flight attempt done
    ///
    /// Returns the revision to re-arm with when notifications arrived meanwhile.
    pub fn complete(&mut self) -> Option<u64> {
        self.in_flight = false;
        if std::mem::take(&mut self.rerun) {
            Some(self.revision)
        } else {
            None
        }
    }
}
