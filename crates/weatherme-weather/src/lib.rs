//! Weather lookup pipeline for WeatherMe
//!
//! Resolves a free-text location to coordinates via a geocoding API, then
//! fetches current and forecast conditions and renders them as speech
//! phrases.

pub mod forecast;
pub mod geocode;
pub mod service;
pub mod types;

pub use forecast::ForecastClient;
pub use geocode::GeocodeClient;
pub use service::WeatherService;
pub use types::*;
