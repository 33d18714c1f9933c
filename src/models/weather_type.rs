use serde::{Deserialize, Serialize};

/// Weather categories decoded from WMO weather interpretation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherType {
    #[default]
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Foggy,
    DepositingRimeFog,
    LightDrizzle,
    ModerateDrizzle,
    DenseDrizzle,
    LightFreezingDrizzle,
    DenseFreezingDrizzle,
    SlightRain,
    ModerateRain,
    HeavyRain,
    LightFreezingRain,
    HeavyFreezingRain,
    SlightSnowFall,
    ModerateSnowFall,
    HeavySnowFall,
    SnowGrains,
    SlightRainShowers,
    ModerateRainShowers,
    ViolentRainShowers,
    SlightSnowShowers,
    HeavySnowShowers,
    ModerateThunderstorm,
    SlightHailThunderstorm,
    HeavyHailThunderstorm,
}

impl WeatherType {
    /// Category used for codes outside the WMO table
    pub const FALLBACK: WeatherType = WeatherType::ClearSky;

    /// Map a WMO code, returning `None` for codes outside the table
    pub fn try_from_wmo(code: i32) -> Option<Self> {
        let weather_type = match code {
            0 => WeatherType::ClearSky,
            1 => WeatherType::MainlyClear,
            2 => WeatherType::PartlyCloudy,
            3 => WeatherType::Overcast,
            45 => WeatherType::Foggy,
            48 => WeatherType::DepositingRimeFog,
            51 => WeatherType::LightDrizzle,
            53 => WeatherType::ModerateDrizzle,
            55 => WeatherType::DenseDrizzle,
            56 => WeatherType::LightFreezingDrizzle,
            57 => WeatherType::DenseFreezingDrizzle,
            61 => WeatherType::SlightRain,
            63 => WeatherType::ModerateRain,
            65 => WeatherType::HeavyRain,
            66 => WeatherType::LightFreezingRain,
            67 => WeatherType::HeavyFreezingRain,
            71 => WeatherType::SlightSnowFall,
            73 => WeatherType::ModerateSnowFall,
            75 => WeatherType::HeavySnowFall,
            77 => WeatherType::SnowGrains,
            80 => WeatherType::SlightRainShowers,
            81 => WeatherType::ModerateRainShowers,
            82 => WeatherType::ViolentRainShowers,
            85 => WeatherType::SlightSnowShowers,
            86 => WeatherType::HeavySnowShowers,
            95 => WeatherType::ModerateThunderstorm,
            96 => WeatherType::SlightHailThunderstorm,
            99 => WeatherType::HeavyHailThunderstorm,
            _ => return None,
        };
        Some(weather_type)
    }

    /// Map a WMO code, falling back to [`WeatherType::FALLBACK`] for unknown codes
    pub fn from_wmo(code: i32) -> Self {
        Self::try_from_wmo(code).unwrap_or(Self::FALLBACK)
    }

    pub fn description(&self) -> &'static str {
        match self {
            WeatherType::ClearSky => "Clear sky",
            WeatherType::MainlyClear => "Mainly clear",
            WeatherType::PartlyCloudy => "Partly cloudy",
            WeatherType::Overcast => "Overcast",
            WeatherType::Foggy => "Foggy",
            WeatherType::DepositingRimeFog => "Depositing rime fog",
            WeatherType::LightDrizzle => "Light drizzle",
            WeatherType::ModerateDrizzle => "Moderate drizzle",
            WeatherType::DenseDrizzle => "Dense drizzle",
            WeatherType::LightFreezingDrizzle => "Slight freezing drizzle",
            WeatherType::DenseFreezingDrizzle => "Dense freezing drizzle",
            WeatherType::SlightRain => "Slight rain",
            WeatherType::ModerateRain => "Rainy",
            WeatherType::HeavyRain => "Heavy rain",
            WeatherType::LightFreezingRain => "Light freezing rain",
            WeatherType::HeavyFreezingRain => "Heavy freezing rain",
            WeatherType::SlightSnowFall => "Slight snow fall",
            WeatherType::ModerateSnowFall => "Moderate snow fall",
            WeatherType::HeavySnowFall => "Heavy snow fall",
            WeatherType::SnowGrains => "Snow grains",
            WeatherType::SlightRainShowers => "Slight rain showers",
            WeatherType::ModerateRainShowers => "Moderate rain showers",
            WeatherType::ViolentRainShowers => "Violent rain showers",
            WeatherType::SlightSnowShowers => "Light snow showers",
            WeatherType::HeavySnowShowers => "Snow showers",
            WeatherType::ModerateThunderstorm => "Moderate thunderstorm",
            WeatherType::SlightHailThunderstorm => "Thunderstorm with slight hail",
            WeatherType::HeavyHailThunderstorm => "Thunderstorm with heavy hail",
        }
    }

    /// Icon identifier for the presentation layer
    pub fn icon(&self) -> &'static str {
        match self {
            WeatherType::ClearSky => "ic_sunny",
            WeatherType::MainlyClear | WeatherType::PartlyCloudy | WeatherType::Overcast => {
                "ic_cloudy"
            }
            WeatherType::Foggy | WeatherType::DepositingRimeFog => "ic_very_cloudy",
            WeatherType::LightDrizzle
            | WeatherType::ModerateDrizzle
            | WeatherType::DenseDrizzle
            | WeatherType::LightFreezingDrizzle
            | WeatherType::DenseFreezingDrizzle => "ic_rainshower",
            WeatherType::SlightRain
            | WeatherType::ModerateRain
            | WeatherType::HeavyRain
            | WeatherType::LightFreezingRain
            | WeatherType::HeavyFreezingRain => "ic_rainy",
            WeatherType::SlightSnowFall
            | WeatherType::ModerateSnowFall
            | WeatherType::SnowGrains
            | WeatherType::SlightSnowShowers => "ic_snowy",
            WeatherType::HeavySnowFall | WeatherType::HeavySnowShowers => "ic_heavysnow",
            WeatherType::SlightRainShowers
            | WeatherType::ModerateRainShowers
            | WeatherType::ViolentRainShowers => "ic_rainshower",
            WeatherType::ModerateThunderstorm => "ic_thunder",
            WeatherType::SlightHailThunderstorm | WeatherType::HeavyHailThunderstorm => {
                "ic_rainythunder"
            }
        }
    }

    /// Whether this type involves precipitation
    pub fn has_precipitation(&self) -> bool {
        !matches!(
            self,
            WeatherType::ClearSky
                | WeatherType::MainlyClear
                | WeatherType::PartlyCloudy
                | WeatherType::Overcast
                | WeatherType::Foggy
                | WeatherType::DepositingRimeFog
        )
    }
}

impl std::fmt::Display for WeatherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
