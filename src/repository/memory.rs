//! In-process implementation of the form session repository.
//!
//! State lives only as long as the process. The number of stored sessions is
//! bounded; when full, the least recently touched session is evicted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::prediction::Prediction;
use crate::domain::record::Record;
use crate::domain::session::{Completion, FormSession, SubmissionTicket};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{FormSessionId, FormSessionReader, FormSessionWriter};

struct Entry {
    session: FormSession,
    touched: u64,
}

#[derive(Default)]
struct Sessions {
    entries: HashMap<FormSessionId, Entry>,
    clock: u64,
}

impl Sessions {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.touched)
            .map(|(id, _)| *id);
        if let Some(id) = oldest {
            log::debug!("Evicting form session {id}");
            self.entries.remove(&id);
        }
    }
}

#[derive(Clone)]
pub struct InMemoryRepository {
    sessions: Arc<Mutex<Sessions>>,
    capacity: usize,
}

impl InMemoryRepository {
    /// Creates a repository holding at most `capacity` sessions (minimum one).
    pub fn new(capacity: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(Sessions::default())),
            capacity: capacity.max(1),
        }
    }

    /// Number of sessions currently stored.
    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.sessions.lock()?.entries.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl FormSessionReader for InMemoryRepository {
    fn get_form_session(&self, id: FormSessionId) -> RepositoryResult<FormSession> {
        let mut sessions = self.sessions.lock()?;
        let now = sessions.tick();
        match sessions.entries.get_mut(&id) {
            Some(entry) => {
                entry.touched = now;
                Ok(entry.session.clone())
            }
            None => Ok(FormSession::new()),
        }
    }
}

impl FormSessionWriter for InMemoryRepository {
    fn begin_submission(
        &self,
        id: FormSessionId,
        record: &Record,
    ) -> RepositoryResult<SubmissionTicket> {
        let mut sessions = self.sessions.lock()?;
        let now = sessions.tick();
        if !sessions.entries.contains_key(&id) && sessions.entries.len() >= self.capacity {
            sessions.evict_oldest();
        }
        let entry = sessions.entries.entry(id).or_insert_with(|| Entry {
            session: FormSession::new(),
            touched: now,
        });
        entry.touched = now;
        entry.session.apply(record);
        Ok(entry.session.begin_submission())
    }

    fn complete_submission(
        &self,
        id: FormSessionId,
        ticket: &SubmissionTicket,
        outcome: Option<Prediction>,
    ) -> RepositoryResult<Completion> {
        let mut sessions = self.sessions.lock()?;
        let now = sessions.tick();
        let entry = sessions
            .entries
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;
        entry.touched = now;
        Ok(entry.session.complete_submission(ticket, outcome))
    }
}
