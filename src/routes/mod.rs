//! HTTP routes and the helpers they share.

use actix_session::Session;
use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::repository::FormSessionId;

pub mod api;
pub mod main;

/// Session key under which the browser's form session id is kept.
pub const FORM_SESSION_KEY: &str = "form_session";

/// Maps a flash message level to the alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Template context shared by every page.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Returns the form session id stored in the cookie session, creating one
/// on first use.
pub fn form_session_id(session: &Session) -> Result<FormSessionId, actix_web::Error> {
    if let Some(id) = session.get::<FormSessionId>(FORM_SESSION_KEY)? {
        return Ok(id);
    }
    let id = FormSessionId::generate();
    session.insert(FORM_SESSION_KEY, id)?;
    Ok(id)
}
