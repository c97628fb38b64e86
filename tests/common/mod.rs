//! Shared helpers for integration tests: a scripted stand-in for the
//! prediction service and the scenario record.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, http::header, web};
use serde_json::Value;

/// One request received by the fake service.
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct Script {
    replies: Arc<Mutex<VecDeque<(StatusCode, String, Duration)>>>,
    received: Arc<Mutex<Vec<Received>>>,
}

/// Fake `/predict` endpoint replaying scripted replies in order. The last
/// reply repeats once the script runs out.
pub struct FakeService {
    pub url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl FakeService {
    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

async fn predict(script: web::Data<Script>, req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    script
        .received
        .lock()
        .unwrap()
        .push(Received { content_type, body });

    let (status, reply, delay) = {
        let mut replies = script.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies.front().cloned().unwrap()
        }
    };

    if !delay.is_zero() {
        actix_web::rt::time::sleep(delay).await;
    }

    HttpResponse::build(status)
        .content_type("application/json")
        .body(reply)
}

/// Starts the fake service on an ephemeral local port. Must be called from
/// within an Actix runtime.
pub fn spawn_fake_service(replies: &[(u16, &str)]) -> FakeService {
    let replies: Vec<(u16, &str, u64)> = replies
        .iter()
        .map(|(status, body)| (*status, *body, 0))
        .collect();
    spawn_delayed_fake_service(&replies)
}

/// Like [`spawn_fake_service`], each reply held back for its delay in
/// milliseconds.
pub fn spawn_delayed_fake_service(replies: &[(u16, &str, u64)]) -> FakeService {
    let script = Script {
        replies: Arc::new(Mutex::new(
            replies
                .iter()
                .map(|(status, body, delay)| {
                    (
                        StatusCode::from_u16(*status).unwrap(),
                        body.to_string(),
                        Duration::from_millis(*delay),
                    )
                })
                .collect(),
        )),
        received: Arc::new(Mutex::new(Vec::new())),
    };
    let received = script.received.clone();

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(script.clone()))
            .route("/predict", web::post().to(predict))
    })
    .workers(1)
    .disable_signals()
    .listen(listener)
    .unwrap()
    .run();
    actix_web::rt::spawn(server);

    FakeService {
        url: format!("http://127.0.0.1:{port}/predict"),
        received,
    }
}

/// URL of a local port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/predict")
}

pub const SCENARIO: [(&str, &str); 16] = [
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
