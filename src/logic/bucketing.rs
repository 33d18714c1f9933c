use crate::error::{HourcastError, Result};
use crate::models::{BucketedWeather, HourlyRecord, HourlySeries, WeatherType};
use chrono::NaiveDateTime;
use regex_lite::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

pub const HOURS_PER_DAY: usize = 24;

// Local date-time with optional seconds/fraction, then an optional offset that is discarded.
// Seconds stop at 59 so chrono's leap-second 60 never gets through.
static ISO_DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(?::[0-5]\d(?:\.\d{1,9})?)?)(Z|[+-](?:[01]\d|2[0-3]):[0-5]\d)?$",
    )
    .expect("timestamp pattern is valid")
});

/// Parse an ISO-8601 local date-time, keeping wall-clock fields as given
///
/// An offset suffix is accepted but not applied.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let caps = ISO_DATE_TIME.captures(value)?;
    let local = caps.get(1)?.as_str();

    NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Zip the parallel series into records and group them into days of 24 hours
///
/// Fails without partial output if the series lengths differ or any timestamp is malformed.
/// Unknown weather codes fall back to [`WeatherType::FALLBACK`].
pub fn bucket_by_day(series: &HourlySeries) -> Result<BucketedWeather> {
    let expected = series.len();
    if let Some((name, actual)) = series
        .measurement_lengths()
        .into_iter()
        .find(|(_, len)| *len != expected)
    {
        return Err(HourcastError::MalformedSeries {
            series: name,
            expected,
            actual,
        });
    }

    let mut buckets = BucketedWeather::new();
    let mut unknown_codes = BTreeSet::new();
    for (index, raw_time) in series.time.iter().enumerate() {
        let time = parse_timestamp(raw_time).ok_or_else(|| HourcastError::MalformedTimestamp {
            index,
            value: raw_time.clone(),
        })?;

        let code = series.weather_codes[index];
        let weather_type = WeatherType::try_from_wmo(code).unwrap_or_else(|| {
            unknown_codes.insert(code);
            WeatherType::FALLBACK
        });

        let record = HourlyRecord {
            time,
            temperature_celsius: series.temperatures[index],
            pressure: series.pressures[index],
            wind_speed: series.wind_speeds[index],
            humidity: series.humidities[index],
            weather_type,
        };

        buckets
            .entry(index / HOURS_PER_DAY)
            .or_insert_with(|| Vec::with_capacity(HOURS_PER_DAY))
            .push(record);
    }

    if !unknown_codes.is_empty() {
        tracing::warn!(
            "Unknown weather codes {:?}, using {}",
            unknown_codes,
            WeatherType::FALLBACK
        );
    }
    tracing::debug!("Bucketed {} hours into {} days", expected, buckets.len());
    Ok(buckets)
}
