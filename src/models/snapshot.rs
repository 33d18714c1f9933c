use super::hourly::HourlyRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hourly records keyed by day index, 0 being the day of the first hour
pub type BucketedWeather = BTreeMap<usize, Vec<HourlyRecord>>;

/// Grouped forecast plus the sample closest to "now"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub per_day: BucketedWeather,
    pub current: Option<HourlyRecord>,
}

impl WeatherSnapshot {
    pub fn new(per_day: BucketedWeather, current: Option<HourlyRecord>) -> Self {
        Self { per_day, current }
    }

    /// Records for the given day index
    pub fn day(&self, index: usize) -> Option<&[HourlyRecord]> {
        self.per_day.get(&index).map(Vec::as_slice)
    }

    pub fn today(&self) -> Option<&[HourlyRecord]> {
        self.day(0)
    }

    pub fn day_count(&self) -> usize {
        self.per_day.len()
    }

    pub fn hour_count(&self) -> usize {
        self.per_day.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherType;
    use chrono::NaiveDate;

    fn record(day: u32, hour: u32) -> HourlyRecord {
        HourlyRecord {
            time: NaiveDate::from_ymd_opt(2024, 6, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            temperature_celsius: 20.0,
            pressure: 1010.0,
            wind_speed: 5.0,
            humidity: 50.0,
            weather_type: WeatherType::ClearSky,
        }
    }

    #[test]
    fn snapshot_day_accessors() {
        let mut per_day = BucketedWeather::new();
        per_day.insert(0, vec![record(1, 22), record(1, 23)]);
        per_day.insert(1, vec![record(2, 0)]);
        let snapshot = WeatherSnapshot::new(per_day, None);

        assert_eq!(snapshot.day_count(), 2);
        assert_eq!(snapshot.hour_count(), 3);
        assert_eq!(snapshot.today().map(|d| d.len()), Some(2));
        assert_eq!(snapshot.day(1).map(|d| d[0].hour()), Some(0));
        assert!(snapshot.day(2).is_none());
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = WeatherSnapshot::default();
        assert_eq!(snapshot.day_count(), 0);
        assert!(snapshot.today().is_none());
        assert!(snapshot.current.is_none());
    }
}
