use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};
use crate::openapi;
use crate::AppState;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Registers the service routes, the OpenAPI document only if asked for
///
/// # Arguments
///
/// * 'expose_openapi' - whether to serve the OpenAPI document
pub fn routes(expose_openapi: bool) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(weather_forecast);
        if expose_openapi {
            cfg.service(openapi_document);
        }
    }
}

#[get("/weatherforecast")]
async fn weather_forecast(data: web::Data<AppState>) -> impl Responder {
    info!("weather forecast requested");

    let forecast = match data.generator.forecast() {
        Ok(forecast) => forecast,
        Err(e) => {
            error!("failed to produce forecast: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    match serde_json::to_string(&forecast) {
        Ok(json) => HttpResponse::Ok().content_type(JSON_UTF8).body(json),
        Err(e) => {
            error!("failed to serialize forecast: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/openapi/v1.json")]
async fn openapi_document() -> impl Responder {
    HttpResponse::Ok().content_type(JSON_UTF8).body(openapi::document().to_string())
}
