use std::sync::Arc;
use std::time::Duration;
use chrono::Local;
use log::error;
use tokio::sync::Mutex;
use crate::dashboard::Dashboard;
use crate::manager_yr::Yr;

/// Forecast refresh loop
///
/// A failed fetch keeps the previous forecast and cards, the next attempt is made
/// after the regular interval.
///
/// # Arguments
///
/// * 'dashboard' - dashboard to deliver forecasts to
/// * 'yr' - forecast provider
/// * 'refresh' - time between fetches
pub async fn run_forecasts(dashboard: Arc<Mutex<Dashboard<Local>>>, yr: Yr, refresh: Duration) {
    loop {
        match yr.new_forecast().await {
            Ok(forecast) => {
                let mut dashboard = dashboard.lock().await;
                dashboard.set_forecast(forecast);
                dashboard.refresh_cards();
            }
            Err(e) => error!("failed to get forecast from yr: {}", e),
        }

        tokio::time::sleep(refresh).await;
    }
}
