//! Command execution and the event pump
//!
//! The runtime owns the model, the host and the formatter. It is the only
//! place where `Cmd` values touch the outside world. Everything runs on the
//! caller's thread: debounce timers are deadlines checked by [`Runtime::pump`],
//! and re-arming a document's timer replaces its previous deadline.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::fs_watcher::WatchlistWatcher;
use crate::host::{DocumentId, Formatter, Host};
use crate::messages::{CommandMsg, ConfigMsg, Msg, ReformatMsg};
use crate::model::Model;
use crate::reformat::{self, ReformatError, ReformatOutcome};
use crate::update::update;
use crate::watchlist::Watchlist;

#[derive(Debug, Clone, Copy)]
struct PendingTrigger {
    deadline: Instant,
    revision: u64,
}

pub struct Runtime<H: Host, F: Formatter> {
    model: Model,
    host: H,
    formatter: F,
    /// At most one pending trigger per document
    timers: HashMap<DocumentId, PendingTrigger>,
    watcher: Option<WatchlistWatcher>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl<H: Host, F: Formatter> Runtime<H, F> {
    pub fn new(model: Model, host: H, formatter: F) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            host,
            formatter,
            timers: HashMap::new(),
            watcher: None,
            msg_tx,
            msg_rx,
        }
    }

    /// Also reload the watchlist whenever its file changes on disk
    pub fn with_watchlist_watcher(mut self) -> Self {
        if let Some(path) = self.model.watchlist_path.clone() {
            if let Err(e) = Watchlist::ensure_file(&path) {
                tracing::warn!("Failed to create watchlist at {}: {}", path.display(), e);
            }
            match WatchlistWatcher::new(path) {
                Ok(watcher) => self.watcher = Some(watcher),
                Err(e) => tracing::warn!("Watchlist hot reload unavailable: {}", e),
            }
        }
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Channel for posting messages from other threads; picked up by `pump`
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Run a message through update and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    /// Invoke a user command against the host's active document
    pub fn invoke(&mut self, command: CommandMsg) {
        let active = self.host.active_document();
        self.dispatch(Msg::Command { active, command });
    }

    /// Earliest pending debounce deadline, for hosts that sleep between events
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|t| t.deadline).min()
    }

    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Process everything that is ready now
    pub fn pump(&mut self) -> usize {
        self.pump_at(Instant::now())
    }

    /// Process host notifications, posted messages, watchlist changes and
    /// every timer due at `now`, until nothing is left. Returns the number of
    /// messages handled.
    pub fn pump_at(&mut self, now: Instant) -> usize {
        let mut handled = 0;
        loop {
            let mut batch: Vec<Msg> = self
                .host
                .drain_notifications()
                .into_iter()
                .map(Msg::from)
                .collect();

            batch.extend(self.msg_rx.try_iter());

            if self.watcher.as_ref().is_some_and(|w| w.poll_changed()) {
                batch.push(ConfigMsg::WatchlistFileChanged.into());
            }

            if batch.is_empty() {
                batch = self.take_due(now);
            }

            if batch.is_empty() {
                return handled;
            }

            handled += batch.len();
            for msg in batch {
                self.dispatch(msg);
            }
        }
    }

    /// Pump in real time until no timer is pending or `timeout` elapses
    pub fn run_until_idle(&mut self, timeout: Duration) {
        let give_up = Instant::now() + timeout;
        loop {
            self.pump();
            let Some(deadline) = self.next_deadline() else {
                return;
            };
            let now = Instant::now();
            if now >= give_up {
                tracing::warn!("run_until_idle: timers still pending after {:?}", timeout);
                return;
            }
            std::thread::sleep(deadline.min(give_up).saturating_duration_since(now));
        }
    }

    /// Stop watching and drop pending triggers, handing the host back
    pub fn shutdown(mut self) -> H {
        self.timers.clear();
        self.watcher = None;
        tracing::info!(
            "Shutting down with {} tracked documents",
            self.model.sessions.len()
        );
        self.host
    }

    fn take_due(&mut self, now: Instant) -> Vec<Msg> {
        let due: Vec<DocumentId> = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline <= now)
            .map(|(id, _)| *id)
            .collect();

        due.into_iter()
            .filter_map(|document_id| {
                let trigger = self.timers.remove(&document_id)?;
                Some(
                    ReformatMsg::Ready {
                        document_id,
                        revision: trigger.revision,
                    }
                    .into(),
                )
            })
            .collect()
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}

            Cmd::DebouncedReformat {
                document_id,
                revision,
                delay_ms,
            } => {
                let superseded = self.timers.insert(
                    document_id,
                    PendingTrigger {
                        deadline: Instant::now() + Duration::from_millis(delay_ms),
                        revision,
                    },
                );
                if let Some(old) = superseded {
                    tracing::trace!(
                        "Document {}: rev {} supersedes pending rev {}",
                        document_id.0,
                        revision,
                        old.revision
                    );
                }
            }

            Cmd::CancelReformat { document_id } => {
                self.timers.remove(&document_id);
            }

            Cmd::RunReformat { document_id } => {
                let result = self.run_attempt(document_id);
                self.dispatch(
                    ReformatMsg::Completed {
                        document_id,
                        result,
                    }
                    .into(),
                );
            }

            Cmd::NormalizeDocument { document_id } => {
                let Some(doc) = self.host.document_mut(document_id) else {
                    tracing::warn!("Cannot normalize document {}: not open", document_id.0);
                    return;
                };
                match reformat::normalize(doc, &self.formatter) {
                    Ok(outcome) => tracing::debug!(
                        "Normalized document {}: {:?}",
                        document_id.0,
                        outcome
                    ),
                    Err(e) => tracing::error!(
                        "Normalization of document {} aborted: {}",
                        document_id.0,
                        e
                    ),
                }
            }

            Cmd::OpenWatchlist { path } => {
                if let Err(e) = Watchlist::ensure_file(&path) {
                    tracing::warn!("Failed to create watchlist at {}: {}", path.display(), e);
                }
                if self.host.open_resource(&path).is_none() {
                    tracing::warn!("Host could not open {}", path.display());
                }
            }

            Cmd::LoadWatchlist { path } => {
                let watchlist = Watchlist::load_or_create(&path);
                self.dispatch(ConfigMsg::WatchlistLoaded(watchlist).into());
            }
        }
    }

    fn run_attempt(&mut self, document_id: DocumentId) -> Result<ReformatOutcome, ReformatError> {
        let session = self
            .model
            .sessions
            .get_mut(document_id)
            .ok_or(ReformatError::MissingDocument(document_id.0))?;
        let doc = self
            .host
            .document_mut(document_id)
            .ok_or(ReformatError::MissingDocument(document_id.0))?;
        reformat::attempt(session, doc, &self.formatter)
    }
}
