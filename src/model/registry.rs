//! Session registry keyed by document id

use std::collections::HashMap;

use crate::host::DocumentId;

use super::session::{DocumentSession, Mode};

/// Owns every [`DocumentSession`]. Other components look sessions up by id at
/// the moment of use and never keep a reference across messages.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<DocumentId, DocumentSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: DocumentId) -> Option<&DocumentSession> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut DocumentSession> {
        self.sessions.get_mut(&id)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.sessions.contains_key(&id)
    }

    /// Session for `id`, created in the initial mode when missing
    pub fn get_or_create(&mut self, id: DocumentId) -> &mut DocumentSession {
        self.sessions.entry(id).or_insert_with(|| {
            tracing::debug!("Created session for document {}", id.0);
            DocumentSession::new(id)
        })
    }

    pub fn remove(&mut self, id: DocumentId) -> Option<DocumentSession> {
        let removed = self.sessions.remove(&id);
        if removed.is_some() {
            tracing::debug!("Dropped session for document {}", id.0);
        }
        removed
    }

    pub fn mode(&self, id: DocumentId) -> Option<Mode> {
        self.get(id).map(|s| s.mode)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
