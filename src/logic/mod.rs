pub mod bucketing;
pub mod current;

pub use bucketing::{bucket_by_day, parse_timestamp};
pub use current::{resolve_current, target_hour};

use crate::error::Result;
use crate::models::{HourlySeries, WeatherSnapshot};
use chrono::NaiveDateTime;

/// Group the series by day and pick the current sample relative to `now`
pub fn build_snapshot(series: &HourlySeries, now: NaiveDateTime) -> Result<WeatherSnapshot> {
    let per_day = bucket_by_day(series)?;
    let current = resolve_current(&per_day, now);
    Ok(WeatherSnapshot::new(per_day, current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HourcastError;
    use chrono::NaiveDate;

    fn series() -> HourlySeries {
        HourlySeries {
            time: vec![
                "2024-06-01T10:00".into(),
                "2024-06-01T11:00".into(),
                "2024-06-01T12:00".into(),
            ],
            temperatures: vec![18.1, 19.4, 20.2],
            weather_codes: vec![1, 2, 3],
            wind_speeds: vec![3.0, 3.5, 4.0],
            pressures: vec![1015.0, 1014.6, 1014.1],
            humidities: vec![70.0, 65.0, 61.0],
        }
    }

    #[test]
    fn snapshot_combines_buckets_and_current() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(10, 40, 0)
            .unwrap();
        let snapshot = build_snapshot(&series(), now).unwrap();

        assert_eq!(snapshot.day_count(), 1);
        assert_eq!(snapshot.current.map(|r| r.temperature_celsius), Some(19.4));
    }

    #[test]
    fn snapshot_propagates_structural_errors() {
        let mut broken = series();
        broken.weather_codes.pop();
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        assert!(matches!(
            build_snapshot(&broken, now),
            Err(HourcastError::MalformedSeries { .. })
        ));
    }
}
