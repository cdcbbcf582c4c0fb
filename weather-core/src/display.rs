//! Pure rendering of lookup state into what the user should see.

use serde::Serialize;

use crate::{lookup::LookupState, model::WeatherCategory, model::WeatherRecord};

/// Per-category visual assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appearance {
    pub icon: &'static str,
    pub background: &'static str,
    pub animation: &'static str,
    pub fallback_description: &'static str,
}

const SUNNY: Appearance = Appearance {
    icon: "☀️",
    background: "linear-gradient(135deg, #ffeaa7 0%, #fab1a0 100%)",
    animation: "sun",
    fallback_description: "clear sky",
};

const RAINY: Appearance = Appearance {
    icon: "🌧️",
    background: "linear-gradient(135deg, #74b9ff 0%, #0984e3 100%)",
    animation: "rain",
    fallback_description: "light rain",
};

const CLOUDY: Appearance = Appearance {
    icon: "☁️",
    background: "linear-gradient(135deg, #ddd6fe 0%, #8b5cf6 100%)",
    animation: "clouds",
    fallback_description: "partly cloudy",
};

const SNOW: Appearance = Appearance {
    icon: "❄️",
    background: "linear-gradient(135deg, #e3f2fd 0%, #90caf9 100%)",
    animation: "snow",
    fallback_description: "light snow",
};

impl Appearance {
    pub fn for_category(category: WeatherCategory) -> Self {
        match category {
            WeatherCategory::Sunny => SUNNY,
            WeatherCategory::Rainy => RAINY,
            WeatherCategory::Cloudy => CLOUDY,
            WeatherCategory::Snow => SNOW,
        }
    }

    /// Look up by the lowercase category name; anything else gets the sunny assets.
    pub fn for_label(label: &str) -> Self {
        WeatherCategory::all()
            .iter()
            .find(|c| c.as_str() == label)
            .map(|c| Self::for_category(*c))
            .unwrap_or(SUNNY)
    }
}

/// Weather card contents, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherCard {
    pub city: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub description: String,
    pub appearance: Appearance,
}

impl WeatherCard {
    pub fn from_record(record: &WeatherRecord) -> Self {
        let appearance = Appearance::for_category(record.category);
        let description = if record.description.trim().is_empty() {
            appearance.fallback_description.to_string()
        } else {
            record.description.clone()
        };

        Self {
            city: record.city.clone(),
            temperature: format!("{}°C", record.temperature_c),
            feels_like: format!("{}°C", record.feels_like_c),
            humidity: format!("{}%", record.humidity_pct),
            wind_speed: format!("{} km/h", record.wind_speed_kmh),
            description,
            appearance,
        }
    }
}

/// What the screen shows. Exactly one panel is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "lowercase")]
pub enum View {
    Blank,
    Loading,
    Error { message: String },
    Weather(WeatherCard),
}

pub fn render(state: &LookupState) -> View {
    match state {
        LookupState::Idle | LookupState::Validating => View::Blank,
        LookupState::Loading => View::Loading,
        LookupState::Failed(err) => View::Error {
            message: err.user_message().to_string(),
        },
        LookupState::Success(record) => View::Weather(WeatherCard::from_record(record)),
    }
}
