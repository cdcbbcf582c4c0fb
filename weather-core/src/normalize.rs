//! Mapping from the provider's payload to [`WeatherRecord`].

use thiserror::Error;

use crate::model::{RawWeatherPayload, WeatherCategory, WeatherRecord};

const MPS_TO_KMH: f64 = 3.6;

/// Why a payload could not be turned into a [`WeatherRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("payload is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("payload field `{field}` is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("payload contains no weather conditions")]
    NoConditions,

    #[error("payload could not be decoded: {0}")]
    Undecodable(String),
}

/// Map a provider category label onto the app's four categories.
///
/// Unknown labels (including the empty string) fall back to `Sunny`.
pub fn classify(provider_label: &str) -> WeatherCategory {
    match provider_label {
        "Clear" => WeatherCategory::Sunny,
        "Rain" | "Drizzle" | "Thunderstorm" | "Squall" | "Tornado" => WeatherCategory::Rainy,
        "Clouds" | "Mist" | "Smoke" | "Haze" | "Dust" | "Fog" | "Sand" | "Ash" => {
            WeatherCategory::Cloudy
        }
        "Snow" => WeatherCategory::Snow,
        _ => WeatherCategory::Sunny,
    }
}

/// Build a [`WeatherRecord`] from an upstream payload.
///
/// Fails without producing anything if any required field is absent or unusable.
pub fn normalize(payload: &RawWeatherPayload) -> Result<WeatherRecord, NormalizeError> {
    let city = payload
        .name
        .clone()
        .ok_or(NormalizeError::MissingField("name"))?;

    let main = payload
        .main
        .as_ref()
        .ok_or(NormalizeError::MissingField("main"))?;
    let wind = payload
        .wind
        .as_ref()
        .ok_or(NormalizeError::MissingField("wind"))?;

    let temp = main.temp.ok_or(NormalizeError::MissingField("main.temp"))?;
    let feels_like = main
        .feels_like
        .ok_or(NormalizeError::MissingField("main.feels_like"))?;
    let humidity = main
        .humidity
        .ok_or(NormalizeError::MissingField("main.humidity"))?;
    let speed = wind.speed.ok_or(NormalizeError::MissingField("wind.speed"))?;

    let condition = payload.weather.first().ok_or(NormalizeError::NoConditions)?;
    let label = condition
        .main
        .as_deref()
        .ok_or(NormalizeError::MissingField("weather[0].main"))?;
    let description = condition
        .description
        .clone()
        .ok_or(NormalizeError::MissingField("weather[0].description"))?;

    Ok(WeatherRecord {
        city,
        temperature_c: round_i32("main.temp", temp)?,
        feels_like_c: round_i32("main.feels_like", feels_like)?,
        humidity_pct: round_percent("main.humidity", humidity)?,
        wind_speed_kmh: speed_to_kmh("wind.speed", speed)?,
        category: classify(label),
        description,
    })
}

fn round_finite(field: &'static str, value: f64) -> Result<f64, NormalizeError> {
    if !value.is_finite() {
        return Err(NormalizeError::InvalidValue {
            field,
            reason: format!("{value} is not a finite number"),
        });
    }
    Ok(value.round())
}

fn round_i32(field: &'static str, value: f64) -> Result<i32, NormalizeError> {
    let rounded = round_finite(field, value)?;
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(NormalizeError::InvalidValue {
            field,
            reason: format!("{value} is out of range"),
        });
    }
    Ok(rounded as i32)
}

fn round_percent(field: &'static str, value: f64) -> Result<u8, NormalizeError> {
    let rounded = round_finite(field, value)?;
    if !(0.0..=100.0).contains(&rounded) {
        return Err(NormalizeError::InvalidValue {
            field,
            reason: format!("{value} is not a percentage"),
        });
    }
    Ok(rounded as u8)
}

/// Sign is checked on the m/s value; small negatives would otherwise round to zero.
fn speed_to_kmh(field: &'static str, mps: f64) -> Result<u32, NormalizeError> {
    if mps < 0.0 {
        return Err(NormalizeError::InvalidValue {
            field,
            reason: format!("{mps} m/s is negative"),
        });
    }

    let kmh = mps * MPS_TO_KMH;
    let rounded = round_finite(field, kmh)?;
    if rounded > f64::from(u32::MAX) {
        return Err(NormalizeError::InvalidValue {
            field,
            reason: format!("{kmh} km/h is out of range"),
        });
    }
    Ok(rounded as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawCondition, RawMain, RawWind};

    fn paris() -> RawWeatherPayload {
        RawWeatherPayload {
            name: Some("Paris".into()),
            main: Some(RawMain {
                temp: Some(18.6),
                feels_like: Some(17.2),
                humidity: Some(60.0),
            }),
            wind: Some(RawWind { speed: Some(3.0) }),
            weather: vec![RawCondition {
                main: Some("Rain".into()),
                description: Some("light rain".into()),
            }],
        }
    }

    #[test]
    fn classify_known_labels() {
        assert_eq!(classify("Clear"), WeatherCategory::Sunny);
        assert_eq!(classify("Thunderstorm"), WeatherCategory::Rainy);
        assert_eq!(classify("Mist"), WeatherCategory::Cloudy);
        assert_eq!(classify("Snow"), WeatherCategory::Snow);

        for label in ["Rain", "Drizzle", "Squall", "Tornado"] {
            assert_eq!(classify(label), WeatherCategory::Rainy, "{label}");
        }
        for label in ["Clouds", "Smoke", "Haze", "Dust", "Fog", "Sand", "Ash"] {
            assert_eq!(classify(label), WeatherCategory::Cloudy, "{label}");
        }
    }

    #[test]
    fn classify_unknown_falls_back_to_sunny() {
        assert_eq!(classify(""), WeatherCategory::Sunny);
        assert_eq!(classify("Volcano"), WeatherCategory::Sunny);
        assert_eq!(classify("rain"), WeatherCategory::Sunny);
        assert_eq!(classify(" Snow "), WeatherCategory::Sunny);
    }

    #[test]
    fn normalize_well_formed_payload() {
        let record = normalize(&paris()).expect("well-formed payload");

        assert_eq!(
            record,
            WeatherRecord {
                city: "Paris".into(),
                temperature_c: 19,
                feels_like_c: 17,
                humidity_pct: 60,
                wind_speed_kmh: 11,
                category: WeatherCategory::Rainy,
                description: "light rain".into(),
            }
        );
    }

    #[test]
    fn normalize_uses_first_condition_only() {
        let mut payload = paris();
        payload.weather.push(RawCondition {
            main: Some("Snow".into()),
            description: Some("heavy snow".into()),
        });

        let record = normalize(&payload).unwrap();
        assert_eq!(record.category, WeatherCategory::Rainy);
        assert_eq!(record.description, "light rain");
    }

    #[test]
    fn normalize_rounds_negative_and_half_values() {
        let mut payload = paris();
        payload.main = Some(RawMain {
            temp: Some(-3.5),
            feels_like: Some(-0.4),
            humidity: Some(99.5),
        });
        payload.wind = Some(RawWind { speed: Some(0.0) });

        let record = normalize(&payload).unwrap();
        assert_eq!(record.temperature_c, -4);
        assert_eq!(record.feels_like_c, 0);
        assert_eq!(record.humidity_pct, 100);
        assert_eq!(record.wind_speed_kmh, 0);
    }

    #[test]
    fn normalize_rejects_empty_weather() {
        let mut payload = paris();
        payload.weather.clear();

        assert_eq!(normalize(&payload), Err(NormalizeError::NoConditions));
    }

    #[test]
    fn normalize_rejects_missing_fields() {
        let mut payload = paris();
        payload.wind = None;
        assert_eq!(normalize(&payload), Err(NormalizeError::MissingField("wind")));

        let mut payload = paris();
        payload.main.as_mut().unwrap().feels_like = None;
        assert_eq!(
            normalize(&payload),
            Err(NormalizeError::MissingField("main.feels_like"))
        );

        let mut payload = paris();
        payload.name = None;
        assert_eq!(normalize(&payload), Err(NormalizeError::MissingField("name")));
    }

    #[test]
    fn normalize_rejects_out_of_range_values() {
        let mut payload = paris();
        payload.main.as_mut().unwrap().humidity = Some(140.0);
        assert!(matches!(
            normalize(&payload),
            Err(NormalizeError::InvalidValue { field: "main.humidity", .. })
        ));

        let mut payload = paris();
        payload.wind = Some(RawWind { speed: Some(-2.0) });
        assert!(matches!(
            normalize(&payload),
            Err(NormalizeError::InvalidValue { field: "wind.speed", .. })
        ));

        let mut payload = paris();
        payload.main.as_mut().unwrap().temp = Some(f64::NAN);
        assert!(matches!(
            normalize(&payload),
            Err(NormalizeError::InvalidValue { field: "main.temp", .. })
        ));
    }

    #[test]
    fn normalize_rejects_small_negative_wind() {
        let mut payload = paris();
        payload.wind = Some(RawWind { speed: Some(-0.1) });

        assert!(matches!(
            normalize(&payload),
            Err(NormalizeError::InvalidValue { field: "wind.speed", .. })
        ));
    }

    #[test]
    fn normalize_rejects_values_too_large_for_integer_fields() {
        let mut payload = paris();
        payload.main.as_mut().unwrap().temp = Some(1e12);
        assert!(matches!(
            normalize(&payload),
            Err(NormalizeError::InvalidValue { field: "main.temp", .. })
        ));

        let mut payload = paris();
        payload.main.as_mut().unwrap().feels_like = Some(-1e12);
        assert!(matches!(
            normalize(&payload),
            Err(NormalizeError::InvalidValue { field: "main.feels_like", .. })
        ));

        let mut payload = paris();
        payload.wind = Some(RawWind { speed: Some(2e9) });
        assert!(matches!(
            normalize(&payload),
            Err(NormalizeError::InvalidValue { field: "wind.speed", .. })
        ));
    }

    #[test]
    fn normalize_non_numeric_body_is_undecodable_before_normalize() {
        let body = r#"{"name": "Paris", "main": {"temp": "warm"}}"#;
        assert!(serde_json::from_str::<RawWeatherPayload>(body).is_err());
    }
}
