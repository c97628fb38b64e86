//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::prediction::Prediction;
use crate::domain::record::Record;
use crate::domain::session::{Completion, FormSession, SubmissionTicket};
use crate::repository::errors::RepositoryResult;
use crate::repository::{FormSessionId, FormSessionReader, FormSessionWriter};

mock! {
    pub Repository {}

    impl FormSessionReader for Repository {
        fn get_form_session(&self, id: FormSessionId) -> RepositoryResult<FormSession>;
    }

    impl FormSessionWriter for Repository {
        fn begin_submission(
            &self,
            id: FormSessionId,
            record: &Record,
        ) -> RepositoryResult<SubmissionTicket>;
        fn complete_submission(
            &self,
            id: FormSessionId,
            ticket: &SubmissionTicket,
            outcome: Option<Prediction>,
        ) -> RepositoryResult<Completion>;
    }
}
