//! Weather analysis models
//!
//! Field names follow the advisory API wire format (camelCase where the
//! original service uses it).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/weather-analysis`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WeatherAnalysisRequest {
    pub location: String,
    pub crop: String,
}

/// Current conditions at the user's location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeather {
    pub temperature: Decimal,
    pub humidity: Decimal,
    pub rainfall: Decimal,
    #[serde(rename = "windSpeed")]
    pub wind_speed: i32,
    pub condition: String,
}

/// One day of the 7-day forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub day: String,
    pub temp: Decimal,
    pub rain: Decimal,
    pub condition: String,
}

/// Severity of an advisory insight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Info,
    Success,
    #[serde(other)]
    Other,
}

/// AI-generated insight with a recommended action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
    pub action: String,
}

/// Full weather analysis for a (location, crop) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    #[serde(rename = "currentWeather")]
    pub current_weather: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
    pub insights: Vec<Insight>,
}
