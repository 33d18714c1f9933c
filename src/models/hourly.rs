use super::weather_type::WeatherType;
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Raw hourly forecast as parallel arrays, index `i` of every series is the same hour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperatures: Vec<f64>,
    pub weather_codes: Vec<i32>,
    pub wind_speeds: Vec<f64>,
    pub pressures: Vec<f64>,
    pub humidities: Vec<f64>,
}

impl HourlySeries {
    /// Number of hours, taken from the timestamp series
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Lengths of the measurement series, paired with their names
    pub fn measurement_lengths(&self) -> [(&'static str, usize); 5] {
        [
            ("temperature_2m", self.temperatures.len()),
            ("weathercode", self.weather_codes.len()),
            ("windspeed_10m", self.wind_speeds.len()),
            ("pressure_msl", self.pressures.len()),
            ("relativehumidity_2m", self.humidities.len()),
        ]
    }
}

/// A single reconstructed hour of forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub time: NaiveDateTime,
    pub temperature_celsius: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub humidity: f64,
    pub weather_type: WeatherType,
}

impl HourlyRecord {
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Time of day as `HH:MM`
    pub fn formatted_time(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

impl std::fmt::Display for HourlyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}°C",
            self.formatted_time(),
            self.weather_type,
            self.temperature_celsius
        )
    }
}
