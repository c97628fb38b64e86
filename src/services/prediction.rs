//! Page loading and submission for the prediction form.

use crate::domain::prediction::Prediction;
use crate::domain::record::Record;
use crate::domain::session::{Completion, SubmissionTicket};
use crate::dto::prediction::FormPageData;
use crate::forms::prediction::PredictionForm;
use crate::repository::{FormSessionId, FormSessionReader, FormSessionWriter};
use crate::services::ServiceResult;
use crate::services::client::PredictionClient;

/// Loads the stored form values and result for rendering.
pub fn load_form_page<R>(repo: &R, id: FormSessionId) -> ServiceResult<FormPageData>
where
    R: FormSessionReader + ?Sized,
{
    let session = repo.get_form_session(id).map_err(|err| {
        log::error!("Failed to load form session {id}: {err}");
        err
    })?;

    Ok(FormPageData::from(&session))
}

/// Stores the posted values and runs one prediction exchange for them.
///
/// A failing exchange is logged and reported as [`Completion::Failed`]; it
/// never surfaces as an error and never touches the displayed result.
pub async fn submit_prediction<R, C>(
    repo: &R,
    client: &C,
    id: FormSessionId,
    form: PredictionForm,
) -> ServiceResult<Completion>
where
    R: FormSessionWriter + ?Sized,
    C: PredictionClient,
{
    let record = Record::try_from(form)?;

    let ticket = repo.begin_submission(id, &record).map_err(|err| {
        log::error!("Failed to store form session {id}: {err}");
        err
    })?;
    let mut guard = SettleOnDrop {
        repo,
        id,
        ticket,
        armed: true,
    };

    let outcome = match client.predict(guard.ticket.record()).await {
        Ok(prediction) => Some(prediction),
        Err(err) => {
            log::error!("Prediction #{} for session {id} failed: {err}", guard.ticket.seq());
            None
        }
    };
    guard.armed = false;

    let seq = guard.ticket.seq();
    let completion = repo
        .complete_submission(id, &guard.ticket, outcome)
        .map_err(|err| {
            log::error!("Failed to settle prediction #{seq} for session {id}: {err}");
            err
        })?;

    if completion == Completion::Stale {
        log::warn!("Discarded stale prediction #{seq} for session {id}");
    }

    Ok(completion)
}

/// Settles an issued ticket as failed if the submission future is dropped
/// before the exchange finishes.
struct SettleOnDrop<'a, R>
where
    R: FormSessionWriter + ?Sized,
{
    repo: &'a R,
    id: FormSessionId,
    ticket: SubmissionTicket,
    armed: bool,
}

impl<R> Drop for SettleOnDrop<'_, R>
where
    R: FormSessionWriter + ?Sized,
{
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let (id, seq) = (self.id, self.ticket.seq());
        log::warn!("Prediction #{seq} for session {id} was abandoned");
        if let Err(err) = self.repo.complete_submission(id, &self.ticket, None) {
            log::error!("Failed to settle abandoned prediction #{seq} for session {id}: {err}");
        }
    }
}

/// Runs one prediction exchange without touching any stored form state.
pub async fn predict_record<C>(client: &C, form: PredictionForm) -> ServiceResult<Prediction>
where
    C: PredictionClient,
{
    let record = Record::try_from(form)?;

    let prediction = client.predict(&record).await.map_err(|err| {
        log::error!("Prediction failed: {err}");
        err
    })?;

    Ok(prediction)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;
    use crate::domain::field::FieldName;
    use crate::domain::prediction::PredictionLabel;
    use crate::domain::types::Probability;
    use crate::repository::InMemoryRepository;
    use crate::services::ServiceError;
    use crate::services::client::PredictError;

    /// Replays canned outcomes and records every submitted record.
    struct StubClient {
        outcomes: RefCell<Vec<Option<Prediction>>>,
        seen: RefCell<Vec<Record>>,
    }

    impl StubClient {
        fn new(outcomes: Vec<Option<Prediction>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl PredictionClient for StubClient {
        async fn predict(&self, record: &Record) -> Result<Prediction, PredictError> {
            self.seen.borrow_mut().push(record.clone());
            match self.outcomes.borrow_mut().remove(0) {
                Some(prediction) => Ok(prediction),
                None => Err(PredictError::Decode(
                    serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
                )),
            }
        }
    }

    fn prediction(label: &str, probability: f64) -> Prediction {
        Prediction {
            prediction: PredictionLabel::Text(label.to_string()),
            probability: Probability::new(probability).unwrap(),
        }
    }

    fn scenario_form() -> PredictionForm {
        let pairs = [
            ("age", "35"),
            ("job", "technician"),
            ("marital", "married"),
            ("education", "secondary"),
            ("default", "no"),
            ("balance", "1500"),
            ("housing", "yes"),
            ("loan", "no"),
            ("contact", "cellular"),
            ("day", "15"),
            ("month", "may"),
            ("duration", "200"),
            ("campaign", "2"),
            ("pdays", "-1"),
            ("previous", "0"),
            ("poutcome", "unknown"),
        ];
        PredictionForm(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn initial_page_is_blank_without_result() {
        let repo = InMemoryRepository::new(8);
        let data = load_form_page(&repo, FormSessionId::generate()).unwrap();

        assert!(data.rows.iter().flatten().all(|view| view.value.is_empty()));
        assert!(data.result.is_none());
    }

    #[actix_web::test]
    async fn scenario_submission_shows_result() {
        let repo = InMemoryRepository::new(8);
        let client = StubClient::new(vec![Some(prediction("no", 0.123))]);
        let id = FormSessionId::generate();

        let completion = submit_prediction(&repo, &client, id, scenario_form())
            .await
            .unwrap();
        assert_eq!(completion, Completion::Applied);

        let sent = client.seen.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].get(FieldName::Pdays), "-1");

        let data = load_form_page(&repo, id).unwrap();
        let result = data.result.unwrap();
        assert_eq!(result.label, "no");
        assert_eq!(result.probability, "12.30%");
        assert_eq!(data.rows[0][0].value, "35");
        assert!(!data.awaiting);
    }

    #[actix_web::test]
    async fn failed_submission_keeps_previous_result() {
        let repo = InMemoryRepository::new(8);
        let client = StubClient::new(vec![Some(prediction("yes", 0.8734)), None]);
        let id = FormSessionId::generate();

        submit_prediction(&repo, &client, id, scenario_form())
            .await
            .unwrap();
        let before = load_form_page(&repo, id).unwrap().result;

        let completion = submit_prediction(&repo, &client, id, scenario_form())
            .await
            .unwrap();

        assert_eq!(completion, Completion::Failed);
        assert_eq!(load_form_page(&repo, id).unwrap().result, before);
        assert_eq!(client.seen.borrow().len(), 2);
    }

    /// Never answers.
    struct HangingClient;

    impl PredictionClient for HangingClient {
        async fn predict(&self, _record: &Record) -> Result<Prediction, PredictError> {
            std::future::pending().await
        }
    }

    #[actix_web::test]
    async fn dropped_submission_is_settled_as_failed() {
        let repo = InMemoryRepository::new(8);
        let id = FormSessionId::generate();
        let stub = StubClient::new(vec![Some(prediction("yes", 0.8734))]);
        submit_prediction(&repo, &stub, id, scenario_form())
            .await
            .unwrap();
        let before = load_form_page(&repo, id).unwrap().result;

        let submission = submit_prediction(&repo, &HangingClient, id, scenario_form());
        let elapsed = actix_web::rt::time::timeout(Duration::from_millis(50), submission).await;
        assert!(elapsed.is_err());

        let data = load_form_page(&repo, id).unwrap();
        assert!(!data.awaiting);
        assert_eq!(data.result, before);
    }

    #[actix_web::test]
    async fn invalid_choice_is_rejected_before_any_request() {
        let repo = InMemoryRepository::new(8);
        let client = StubClient::new(vec![]);
        let mut form = scenario_form();
        form.0.insert("job".to_string(), "astronaut".to_string());

        let result = submit_prediction(&repo, &client, FormSessionId::generate(), form).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert!(client.seen.borrow().is_empty());
        assert!(repo.is_empty().unwrap());
    }

    #[actix_web::test]
    async fn predict_record_propagates_client_failure() {
        let client = StubClient::new(vec![None]);

        let result = predict_record(&client, scenario_form()).await;

        assert!(matches!(result, Err(ServiceError::Prediction(_))));
    }

    #[actix_web::test]
    async fn predict_record_returns_prediction() {
        let client = StubClient::new(vec![Some(prediction("yes", 0.5))]);

        let result = predict_record(&client, scenario_form()).await.unwrap();

        assert_eq!(result.probability_percent(), "50.00%");
    }
}
