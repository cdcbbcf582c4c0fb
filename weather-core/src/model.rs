use serde::{Deserialize, Serialize};

/// Current-weather body as returned by the upstream provider.
///
/// Every field is optional so that a body with the wrong shape still decodes;
/// `normalize` decides whether it is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWeatherPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: Option<RawMain>,
    #[serde(default)]
    pub wind: Option<RawWind>,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMain {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWind {
    /// Meters per second.
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCondition {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The app's own coarse classification, independent of provider labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Sunny,
    Rainy,
    Cloudy,
    Snow,
}

impl WeatherCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Sunny => "sunny",
            WeatherCategory::Rainy => "rainy",
            WeatherCategory::Cloudy => "cloudy",
            WeatherCategory::Snow => "snow",
        }
    }

    pub const fn all() -> &'static [WeatherCategory] {
        &[
            WeatherCategory::Sunny,
            WeatherCategory::Rainy,
            WeatherCategory::Cloudy,
            WeatherCategory::Snow,
        ]
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized result of one successful lookup. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub city: String,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub humidity_pct: u8,
    pub wind_speed_kmh: u32,
    pub category: WeatherCategory,
    pub description: String,
}
