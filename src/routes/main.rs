//! Routes serving the prediction form page.

use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::session::Completion;
use crate::forms::prediction::PredictionForm;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, form_session_id, redirect, render_template};
use crate::services::client::HttpPredictionClient;
use crate::services::{ServiceError, prediction as prediction_service};

/// Show the form with the stored values and the latest prediction.
#[get("/")]
pub async fn show_form(
    session: Session,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let id = match form_session_id(&session) {
        Ok(id) => id,
        Err(err) => {
            log::error!("Failed to read session: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match prediction_service::load_form_page(repo.get_ref(), id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("rows", &data.rows);
            context.insert("result", &data.result);
            context.insert("awaiting", &data.awaiting);

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load form page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Store the posted values, request a prediction and redirect back to the form.
#[post("/")]
pub async fn submit_form(
    session: Session,
    repo: web::Data<InMemoryRepository>,
    client: web::Data<HttpPredictionClient>,
    web::Form(form): web::Form<PredictionForm>,
) -> impl Responder {
    let id = match form_session_id(&session) {
        Ok(id) => id,
        Err(err) => {
            log::error!("Failed to read session: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match prediction_service::submit_prediction(repo.get_ref(), client.get_ref(), id, form).await
    {
        Ok(Completion::Applied | Completion::Stale) => {}
        Ok(Completion::Failed) => {
            FlashMessage::error("Could not get a prediction. Please try again.").send();
        }
        Err(ServiceError::Form(err)) => {
            FlashMessage::error(format!("Form was not submitted: {err}.")).send();
        }
        Err(err) => {
            log::error!("Failed to submit prediction form: {err}");
            FlashMessage::error("Failed to submit the form.").send();
        }
    }

    redirect("/")
}
