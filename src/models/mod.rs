pub mod hourly;
pub mod snapshot;
pub mod weather_type;

pub use hourly::*;
pub use snapshot::*;
pub use weather_type::*;
