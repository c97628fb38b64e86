//! State owned by one form instance: the record being edited, the last
//! displayed prediction, and the sequence of issued submissions.

use crate::domain::field::FieldName;
use crate::domain::prediction::Prediction;
use crate::domain::record::Record;

/// Handle for one in-flight submission.
///
/// Carries the record snapshot taken when the submission was issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    seq: u64,
    record: Record,
}

impl SubmissionTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}

/// What happened to the displayed result when a submission finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The response belonged to the latest submission and is now displayed.
    Applied,
    /// The latest submission failed; the previous result is kept.
    Failed,
    /// A newer submission was issued meanwhile; the response was discarded.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSession {
    record: Record,
    result: Option<Prediction>,
    issued: u64,
    settled: u64,
}

impl FormSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Prediction currently on display, if any.
    pub fn result(&self) -> Option<&Prediction> {
        self.result.as_ref()
    }

    /// Whether the latest issued submission has not finished yet.
    pub fn is_awaiting(&self) -> bool {
        self.settled < self.issued
    }

    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.record.set(name, value);
    }

    /// Applies every value of `record` through [`Record::set`].
    pub fn apply(&mut self, record: &Record) {
        for (name, value) in record.iter() {
            self.record.set(name, value);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Record {
        self.record.snapshot()
    }

    /// Issues a new submission for the current record.
    pub fn begin_submission(&mut self) -> SubmissionTicket {
        self.issued += 1;
        SubmissionTicket {
            seq: self.issued,
            record: self.snapshot(),
        }
    }

    /// Records the outcome of `ticket`. `None` stands for any failure.
    ///
    /// Only the latest issued ticket may change state; responses for older
    /// tickets are dropped regardless of their content.
    pub fn complete_submission(
        &mut self,
        ticket: &SubmissionTicket,
        outcome: Option<Prediction>,
    ) -> Completion {
        if ticket.seq != self.issued {
            return Completion::Stale;
        }
        self.settled = ticket.seq;
        match outcome {
            Some(prediction) => {
                self.result = Some(prediction);
                Completion::Applied
            }
            None => Completion::Failed,
        }
    }
}
