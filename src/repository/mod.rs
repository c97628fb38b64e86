//! Storage of per-browser form state.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::prediction::Prediction;
use crate::domain::record::Record;
use crate::domain::session::{Completion, FormSession, SubmissionTicket};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use memory::InMemoryRepository;

/// Identifier of one browser's form state, kept in its session cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormSessionId(Uuid);

impl FormSessionId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for FormSessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait FormSessionReader {
    /// Returns the stored state, or a fresh one when nothing is stored yet.
    fn get_form_session(&self, id: FormSessionId) -> RepositoryResult<FormSession>;
}

pub trait FormSessionWriter {
    /// Stores `record` as the current form values and issues a submission.
    fn begin_submission(
        &self,
        id: FormSessionId,
        record: &Record,
    ) -> RepositoryResult<SubmissionTicket>;

    /// Settles `ticket` with the service outcome (`None` on failure).
    fn complete_submission(
        &self,
        id: FormSessionId,
        ticket: &SubmissionTicket,
        outcome: Option<Prediction>,
    ) -> RepositoryResult<Completion>;
}
