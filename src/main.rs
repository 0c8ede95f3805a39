mod config;
mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_forecast;
mod openapi;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::handlers::routes;
use crate::initialization::init;
use crate::manager_forecast::ForecastGenerator;

struct AppState {
    generator: ForecastGenerator,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = init()?;

    let generator = ForecastGenerator::from_config(&config.forecast)?;
    let state = web::Data::new(AppState { generator });
    let expose_openapi = config.general.expose_openapi;

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes(expose_openapi))
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
