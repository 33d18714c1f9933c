use super::open_meteo::decode_response;
use crate::error::{HourcastError, Result};
use crate::logic::build_snapshot;
use crate::models::WeatherSnapshot;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Provider of weather snapshots for a location
pub trait WeatherRepository {
    fn get_weather_data(
        &self,
        latitude: f64,
        longitude: f64,
        now: NaiveDateTime,
    ) -> Result<WeatherSnapshot>;
}

/// Repository backed by a forecast response saved to disk
///
/// The file is assumed to already be for the requested location.
pub struct FileWeatherRepository {
    path: PathBuf,
}

impl FileWeatherRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl WeatherRepository for FileWeatherRepository {
    fn get_weather_data(
        &self,
        latitude: f64,
        longitude: f64,
        now: NaiveDateTime,
    ) -> Result<WeatherSnapshot> {
        tracing::debug!(
            "Reading forecast for ({}, {}) from {}",
            latitude,
            longitude,
            self.path.display()
        );

        let body = std::fs::read_to_string(&self.path).map_err(|e| {
            HourcastError::DataSourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let response = decode_response(&body).map_err(|e| {
            HourcastError::DataSourceUnavailable(format!(
                "Failed to parse forecast response: {}",
                e
            ))
        })?;

        build_snapshot(&response.into_series(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 10, 0)
            .unwrap()
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hourcast-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_snapshot_from_file() {
        let path = write_temp(
            "ok.json",
            r#"{ "hourly": {
                "time": ["2024-06-01T00:00"],
                "temperature_2m": [11.0],
                "weathercode": [0],
                "relativehumidity_2m": [90],
                "windspeed_10m": [2.0],
                "pressure_msl": [1020.0]
            } }"#,
        );

        let snapshot = FileWeatherRepository::new(&path)
            .get_weather_data(0.0, 0.0, now())
            .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(snapshot.day_count(), 1);
        assert_eq!(snapshot.current.map(|r| r.temperature_celsius), Some(11.0));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let repo = FileWeatherRepository::new("/nonexistent/hourcast/forecast.json");
        assert!(matches!(
            repo.get_weather_data(0.0, 0.0, now()),
            Err(HourcastError::DataSourceUnavailable(_))
        ));
    }

    #[test]
    fn undecodable_file_is_unavailable() {
        let path = write_temp("bad.json", "<html>rate limited</html>");
        let result = FileWeatherRepository::new(&path).get_weather_data(0.0, 0.0, now());
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(HourcastError::DataSourceUnavailable(_))
        ));
    }
}
