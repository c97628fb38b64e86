use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::domain::field::FIELDS;
use crate::forms::prediction::PredictionForm;
use crate::services::client::HttpPredictionClient;
use crate::services::{ServiceError, prediction as prediction_service};

/// Field registry as JSON, in submission order.
#[get("/v1/fields")]
pub async fn api_v1_fields() -> impl Responder {
    HttpResponse::Ok().json(&FIELDS[..])
}

/// Forward one JSON record to the prediction service and return its answer.
#[post("/v1/predict")]
pub async fn api_v1_predict(
    client: web::Data<HttpPredictionClient>,
    web::Json(form): web::Json<PredictionForm>,
) -> impl Responder {
    match prediction_service::predict_record(client.get_ref(), form).await {
        Ok(prediction) => HttpResponse::Ok().json(prediction),
        Err(ServiceError::Form(err)) => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
        Err(_) => HttpResponse::BadGateway().finish(),
    }
}
