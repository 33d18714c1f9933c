pub mod open_meteo;
pub mod repository;

pub use open_meteo::{decode_response, ForecastRequest, WeatherResponse};
pub use repository::{FileWeatherRepository, WeatherRepository};
