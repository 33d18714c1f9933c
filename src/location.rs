use crate::config::LocationConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&LocationConfig> for Coordinates {
    fn from(config: &LocationConfig) -> Self {
        Self {
            latitude: config.latitude,
            longitude: config.longitude,
        }
    }
}

/// Outcome of a location lookup
///
/// Starts `Pending` and settles exactly once; transitions after that are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationRequest<T> {
    #[default]
    Pending,
    Resolved(T),
    Failed,
    Cancelled,
}

impl<T> LocationRequest<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LocationRequest::Pending)
    }

    /// Settle with a value. Returns false if already settled.
    pub fn resolve(&mut self, value: T) -> bool {
        self.settle(LocationRequest::Resolved(value))
    }

    pub fn fail(&mut self) -> bool {
        self.settle(LocationRequest::Failed)
    }

    pub fn cancel(&mut self) -> bool {
        self.settle(LocationRequest::Cancelled)
    }

    fn settle(&mut self, outcome: LocationRequest<T>) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = outcome;
        true
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            LocationRequest::Resolved(value) => Some(value),
            _ => None,
        }
    }
}

/// Source of the device location
pub trait LocationTracker {
    fn current_location(&self) -> LocationRequest<Coordinates>;
}

/// Tracker that always reports the configured coordinates
pub struct FixedLocationTracker {
    coordinates: Coordinates,
}

impl FixedLocationTracker {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

impl LocationTracker for FixedLocationTracker {
    fn current_location(&self) -> LocationRequest<Coordinates> {
        let mut request = LocationRequest::Pending;
        request.resolve(self.coordinates);
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_settles_once() {
        let mut request = LocationRequest::Pending;
        assert!(request.resolve(1));
        assert!(!request.resolve(2));
        assert!(!request.fail());
        assert!(!request.cancel());
        assert_eq!(request, LocationRequest::Resolved(1));
        assert_eq!(request.into_value(), Some(1));
    }

    #[test]
    fn failed_and_cancelled_have_no_value() {
        let mut failed: LocationRequest<i32> = LocationRequest::default();
        assert!(failed.fail());
        assert!(!failed.resolve(3));
        assert_eq!(failed.into_value(), None);

        let mut cancelled: LocationRequest<i32> = LocationRequest::default();
        assert!(cancelled.cancel());
        assert_eq!(cancelled, LocationRequest::Cancelled);
        assert_eq!(cancelled.into_value(), None);
    }

    #[test]
    fn fixed_tracker_resolves_configured_coordinates() {
        let config = LocationConfig {
            latitude: 48.85,
            longitude: 2.35,
        };
        let tracker = FixedLocationTracker::new(Coordinates::from(&config));

        assert_eq!(
            tracker.current_location().into_value(),
            Some(Coordinates {
                latitude: 48.85,
                longitude: 2.35
            })
        );
    }
}
