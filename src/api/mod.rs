mod health;
mod routes;

pub use health::{health, metrics, stats, HealthResponse, StatsResponse};
pub use routes::api_routes;
