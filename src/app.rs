use crate::datasources::WeatherRepository;
use crate::location::LocationTracker;
use crate::models::WeatherSnapshot;
use chrono::NaiveDateTime;

pub const LOCATION_ERROR: &str =
    "Couldn't retrieve location. Make sure to grant permission and enable GPS.";

/// What the presentation layer needs to draw the forecast
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherState {
    pub weather_info: Option<WeatherSnapshot>,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub struct WeatherLoader<R, L> {
    repository: R,
    location_tracker: L,
    state: WeatherState,
}

impl<R: WeatherRepository, L: LocationTracker> WeatherLoader<R, L> {
    pub fn new(repository: R, location_tracker: L) -> Self {
        Self {
            repository,
            location_tracker,
            state: WeatherState::default(),
        }
    }

    pub fn state(&self) -> &WeatherState {
        &self.state
    }

    /// Locate, fetch and store the snapshot for `now`
    pub fn load_weather_info(&mut self, now: NaiveDateTime) -> &WeatherState {
        self.state.is_loading = true;
        self.state.error = None;

        let Some(location) = self.location_tracker.current_location().into_value() else {
            tracing::warn!("Location unavailable");
            self.state.is_loading = false;
            self.state.error = Some(LOCATION_ERROR.to_string());
            return &self.state;
        };

        match self
            .repository
            .get_weather_data(location.latitude, location.longitude, now)
        {
            Ok(snapshot) => {
                self.state.weather_info = Some(snapshot);
                self.state.error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to load weather: {}", e);
                self.state.weather_info = None;
                self.state.error = Some(e.to_string());
            }
        }
        self.state.is_loading = false;

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HourcastError, Result};
    use crate::location::{Coordinates, LocationRequest};
    use chrono::NaiveDate;

    struct StubRepository {
        fail: bool,
    }

    impl WeatherRepository for StubRepository {
        fn get_weather_data(
            &self,
            _latitude: f64,
            _longitude: f64,
            _now: NaiveDateTime,
        ) -> Result<WeatherSnapshot> {
            if self.fail {
                Err(HourcastError::DataSourceUnavailable("offline".into()))
            } else {
                Ok(WeatherSnapshot::default())
            }
        }
    }

    struct StubTracker(LocationRequest<Coordinates>);

    impl LocationTracker for StubTracker {
        fn current_location(&self) -> LocationRequest<Coordinates> {
            self.0.clone()
        }
    }

    fn resolved() -> StubTracker {
        StubTracker(LocationRequest::Resolved(Coordinates {
            latitude: 1.0,
            longitude: 2.0,
        }))
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn successful_load_stores_snapshot() {
        let mut loader = WeatherLoader::new(StubRepository { fail: false }, resolved());
        let state = loader.load_weather_info(now());

        assert!(state.weather_info.is_some());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_load_clears_snapshot() {
        let mut loader = WeatherLoader::new(StubRepository { fail: false }, resolved());
        loader.load_weather_info(now());
        loader.repository.fail = true;

        let state = loader.load_weather_info(now());
        assert!(state.weather_info.is_none());
        assert!(!state.is_loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Data source unavailable: offline")
        );
    }

    #[test]
    fn missing_location_reports_error() {
        for request in [LocationRequest::Failed, LocationRequest::Cancelled] {
            let mut loader =
                WeatherLoader::new(StubRepository { fail: false }, StubTracker(request));
            let state = loader.load_weather_info(now());

            assert!(!state.is_loading);
            assert_eq!(state.error.as_deref(), Some(LOCATION_ERROR));
            assert!(state.weather_info.is_none());
        }
    }
}
