//! Core library for the weather lookup app.
//!
//! This crate defines:
//! - Normalization of the provider payload into a small internal record
//! - The lookup controller driving one query from input to result
//! - The fetch collaborator abstraction and its OpenWeather implementation
//! - Configuration & credentials handling
//! - A pure render function from lookup state to display
//!
//! It is used by `weather-cli` and `weather-relay`.

pub mod config;
pub mod display;
pub mod lookup;
pub mod model;
pub mod normalize;
pub mod provider;

pub use config::Config;
pub use display::{Appearance, View, WeatherCard, render};
pub use lookup::{LookupController, LookupError, LookupState};
pub use model::{RawWeatherPayload, WeatherCategory, WeatherRecord};
pub use normalize::{NormalizeError, classify, normalize};
pub use provider::{FetchError, WeatherProvider, openweather::OpenWeatherProvider};
