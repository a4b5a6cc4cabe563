pub mod chart;
pub mod dashboard;
pub mod errors;
pub mod forecast;
pub mod handlers;
pub mod initialization;
pub mod logging;
pub mod manager_forecast;
pub mod manager_yr;
pub mod summary;
pub mod units;
