use crate::models::{BucketedWeather, HourlyRecord};
use chrono::{NaiveDateTime, Timelike};

/// Hour of day `now` rounds to: minutes below 30 round down, otherwise up
///
/// 23:30 and later yields 24, which no record carries.
pub fn target_hour(now: NaiveDateTime) -> u32 {
    if now.minute() < 30 {
        now.hour()
    } else {
        now.hour() + 1
    }
}

/// Find the record of day 0 matching the rounded hour of `now`
///
/// Later days are never searched, and an hour of 24 is not wrapped into the next day.
pub fn resolve_current(buckets: &BucketedWeather, now: NaiveDateTime) -> Option<HourlyRecord> {
    let hour = target_hour(now);
    let current = buckets
        .get(&0)?
        .iter()
        .find(|record| record.hour() == hour)
        .cloned();

    match current {
        Some(_) => tracing::debug!("Current conditions resolved for hour {}", hour),
        None => tracing::debug!("No forecast sample for hour {} in the first day", hour),
    }

    current
}
