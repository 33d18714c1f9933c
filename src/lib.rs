//! Groups Open-Meteo hourly forecasts by day and resolves the current hour.
//!
//! - `models`: hourly series, records, weather types and snapshots
//! - `logic`: day bucketing and current-sample resolution
//! - `datasources`: response decoding and the repository seam
//! - `location`, `app`: location lookup and the view state built from a snapshot

pub mod app;
pub mod config;
pub mod datasources;
pub mod error;
pub mod location;
pub mod logic;
pub mod models;

pub use error::{HourcastError, Result};
pub use logic::{bucket_by_day, build_snapshot, resolve_current};
pub use models::{BucketedWeather, HourlyRecord, HourlySeries, WeatherSnapshot, WeatherType};
