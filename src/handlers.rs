use std::sync::Arc;
use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::{Local, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use crate::chart::ChartData;
use crate::dashboard::Dashboard;
use crate::forecast::{DailyCard, TemperatureUnit};
use crate::summary::errors::SummaryError;
use crate::summary::CardSlot;

pub struct AppState {
    pub dashboard: Arc<Mutex<Dashboard<Local>>>,
}

#[derive(Deserialize, Debug)]
struct CardsQuery {
    offset: Option<i64>,
}

#[derive(Deserialize, Debug)]
struct UnitQuery {
    unit: TemperatureUnit,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum CardView<'a> {
    Available(&'a DailyCard),
    Unavailable { day: Option<NaiveDate>, reason: String },
}

impl<'a> From<&'a CardSlot> for CardView<'a> {
    fn from(slot: &'a CardSlot) -> Self {
        match slot {
            Ok(card) => CardView::Available(card),
            Err(e) => {
                // malformed points never reach a slot, aggregate drops them
                let day = match e {
                    SummaryError::MissingData { day } => Some(*day),
                    _ => None,
                };
                CardView::Unavailable { day, reason: e.to_string() }
            }
        }
    }
}

fn card_views(slots: &[CardSlot]) -> Vec<CardView<'_>> {
    slots.iter().map(CardView::from).collect()
}

/// Registers all dashboard routes
///
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_cards).service(post_unit).service(get_chart);
}

#[get("/cards")]
async fn get_cards(params: web::Query<CardsQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let mut dashboard = data.dashboard.lock().await;
    if !dashboard.has_forecast() {
        return HttpResponse::ServiceUnavailable().finish();
    }

    if let Some(offset) = params.offset {
        dashboard.set_cards(Local::now().date_naive(), offset);
    }

    HttpResponse::Ok().json(card_views(dashboard.cards()))
}

#[post("/unit")]
async fn post_unit(params: web::Query<UnitQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let mut dashboard = data.dashboard.lock().await;
    if !dashboard.has_forecast() {
        return HttpResponse::ServiceUnavailable().finish();
    }

    dashboard.change_unit(params.unit);

    HttpResponse::Ok().json(card_views(dashboard.cards()))
}

#[get("/chart")]
async fn get_chart(data: web::Data<AppState>) -> impl Responder {
    let dashboard = data.dashboard.lock().await;
    if !dashboard.has_forecast() {
        return HttpResponse::ServiceUnavailable().finish();
    }

    HttpResponse::Ok().json(ChartData::from_cards(dashboard.cards()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use chrono::{TimeDelta, Utc};
    use serde_json::Value;
    use crate::forecast::{Outlook, RawForecast, TimePoint};
    use crate::summary::DayWindow;

    fn state() -> web::Data<AppState> {
        let dashboard = Dashboard::new(Local, DayWindow::default(), 3, 0, TemperatureUnit::Celsius);
        web::Data::new(AppState { dashboard: Arc::new(Mutex::new(dashboard)) })
    }

    /// Hourly readings of 10 C and 1000 hPa from two days ago to six days ahead
    fn forecast() -> RawForecast {
        let start = Utc::now() - TimeDelta::days(2);
        let timeseries = (0..8 * 24)
            .map(|h| {
                let mut p = TimePoint::reading(start + TimeDelta::hours(h), 10.0, 1000.0);
                p.next_6_hours = Some(Outlook::new("cloudy"));
                p
            })
            .collect();
        RawForecast { timeseries }
    }

    async fn loaded_state() -> web::Data<AppState> {
        let state = state();
        {
            let mut dashboard = state.dashboard.lock().await;
            dashboard.set_forecast(forecast());
            dashboard.set_cards(Local::now().date_naive(), 0);
        }
        state
    }

    #[actix_web::test]
    async fn test_cards_unavailable_before_forecast() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/cards").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_get_cards() {
        let app = test::init_service(App::new().app_data(loaded_state().await).configure(configure)).await;
        let req = test::TestRequest::get().uri("/cards").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let slots = body.as_array().unwrap();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0]["status"], "available");
        assert_eq!(slots[0]["temperature_display"], 10);
        assert_eq!(slots[0]["pressure_display"], 750);
        assert_eq!(slots[0]["trend"], "cloudy");
        assert_eq!(slots[0]["unit"], "celsius");
    }

    #[actix_web::test]
    async fn test_get_cards_with_offset_past_forecast() {
        let app = test::init_service(App::new().app_data(loaded_state().await).configure(configure)).await;
        let req = test::TestRequest::get().uri("/cards?offset=10").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let slots = body.as_array().unwrap();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0]["status"], "unavailable");
        assert!(slots[0]["reason"].as_str().unwrap().contains("MissingData"));
    }

    #[actix_web::test]
    async fn test_change_unit() {
        let app = test::init_service(App::new().app_data(loaded_state().await).configure(configure)).await;
        let req = test::TestRequest::post().uri("/unit?unit=fahrenheit").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["temperature_display"], 50);
        assert_eq!(body[0]["temperature_celsius"], 10);
        assert_eq!(body[0]["unit"], "fahrenheit");
    }

    #[actix_web::test]
    async fn test_get_cards_with_overflowing_offset() {
        let app = test::init_service(App::new().app_data(loaded_state().await).configure(configure)).await;
        let req = test::TestRequest::get().uri("/cards?offset=9223372036854775807").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let slots = body.as_array().unwrap();
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| s["status"] == "unavailable" && s["day"].is_null()));
    }

    #[actix_web::test]
    async fn test_change_unit_short_name() {
        let app = test::init_service(App::new().app_data(loaded_state().await).configure(configure)).await;
        let req = test::TestRequest::post().uri("/unit?unit=f").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["temperature_display"], 50);
        assert_eq!(body[0]["unit"], "fahrenheit");
    }

    #[actix_web::test]
    async fn test_change_unit_rejects_unknown_unit() {
        let app = test::init_service(App::new().app_data(loaded_state().await).configure(configure)).await;
        let req = test::TestRequest::post().uri("/unit?unit=kelvin").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_chart() {
        let app = test::init_service(App::new().app_data(loaded_state().await).configure(configure)).await;
        let req = test::TestRequest::get().uri("/chart").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["temperature"].as_array().unwrap().len(), 3);
        assert_eq!(body["pressure"][0]["y"], 750);
    }
}
