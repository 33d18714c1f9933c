use crate::config::ForecastConfig;
use crate::error::Result;
use crate::models::HourlySeries;
use serde::Deserialize;

const HOURLY_FIELDS: &str =
    "temperature_2m,weathercode,relativehumidity_2m,windspeed_10m,pressure_msl";

// Open-Meteo forecast response structures
#[derive(Debug, Deserialize)]
pub struct WeatherResponse {
    pub hourly: HourlyData,
}

#[derive(Debug, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperatures: Vec<f64>,
    #[serde(rename = "weathercode")]
    pub weather_codes: Vec<i32>,
    #[serde(rename = "relativehumidity_2m")]
    pub humidities: Vec<f64>,
    #[serde(rename = "windspeed_10m")]
    pub wind_speeds: Vec<f64>,
    #[serde(rename = "pressure_msl")]
    pub pressures: Vec<f64>,
}

impl WeatherResponse {
    pub fn into_series(self) -> HourlySeries {
        let hourly = self.hourly;
        HourlySeries {
            time: hourly.time,
            temperatures: hourly.temperatures,
            weather_codes: hourly.weather_codes,
            wind_speeds: hourly.wind_speeds,
            pressures: hourly.pressures,
            humidities: hourly.humidities,
        }
    }
}

/// Decode a raw forecast response body
pub fn decode_response(json: &str) -> Result<WeatherResponse> {
    let response: WeatherResponse = serde_json::from_str(json)?;
    tracing::debug!(
        "Decoded forecast response with {} hourly samples",
        response.hourly.time.len()
    );
    Ok(response)
}

/// Hourly forecast request for a single location
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ForecastRequest {
    pub fn new(config: &ForecastConfig, latitude: f64, longitude: f64) -> Self {
        Self {
            base_url: config.base_url.clone(),
            latitude,
            longitude,
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/v1/forecast?latitude={}&longitude={}&hourly={}",
            self.base_url.trim_end_matches('/'),
            self.latitude,
            self.longitude,
            HOURLY_FIELDS
        )
    }
}
