//! Service layer: the fetch relay orchestration.

pub mod weather_service;

pub use weather_service::WeatherService;
