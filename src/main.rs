use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, App, HttpServer};
use chrono::Local;
use log::info;
use tokio::sync::Mutex;
use weathercards::dashboard::Dashboard;
use weathercards::errors::UnrecoverableError;
use weathercards::handlers::{configure, AppState};
use weathercards::initialization::config;
use weathercards::logging::setup_logger;
use weathercards::manager_forecast::run_forecasts;
use weathercards::manager_yr::Yr;

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    setup_logger(&config.log)?;

    info!("starting weathercards for {:0.4},{:0.4}", config.yr.lat, config.yr.long);

    let yr = Yr::new(&config.yr)?;
    let dashboard = Arc::new(Mutex::new(Dashboard::new(
        Local,
        config.cards.window(),
        config.cards.count,
        config.cards.start_offset_days,
        config.cards.unit,
    )));

    tokio::spawn(run_forecasts(dashboard.clone(), yr, Duration::from_secs(config.yr.refresh_secs)));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState { dashboard: dashboard.clone() }))
            .configure(configure)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
