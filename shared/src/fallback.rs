//! Static fallback data for offline/demo conditions
//!
//! Substituted when a fetch ultimately fails so read-only panels never
//! render empty. The panels showing this data carry a passive
//! "sample data (offline)" notice.

use rust_decimal::Decimal;

use crate::models::{
    CropRecommendation, CurrentWeather, ForecastDay, Insight, InsightKind, RecommendationReport,
    WeatherReport,
};

/// Fallback crop recommendations
pub fn fallback_recommendations() -> RecommendationReport {
    RecommendationReport {
        favorable: vec![
            crop("Rice", "Ideal monsoon conditions", "Excellent"),
            crop("Wheat", "Suitable winter temperature", "Excellent"),
            crop("Cotton", "Good soil drainage", "Excellent"),
            crop("Sugarcane", "High water availability", "Excellent"),
        ],
        unfavorable: vec![
            crop("Apple", "Insufficient chilling hours", "Challenging"),
            crop("Potato", "High temperature stress", "Challenging"),
            crop("Barley", "Poor soil pH match", "Challenging"),
        ],
    }
}

/// Fallback weather analysis
pub fn fallback_weather() -> WeatherReport {
    WeatherReport {
        current_weather: CurrentWeather {
            temperature: Decimal::from(28),
            humidity: Decimal::from(65),
            rainfall: Decimal::ZERO,
            wind_speed: 12,
            condition: "Partly Cloudy".to_string(),
        },
        forecast: vec![
            day("Today", 28, 0, "sunny"),
            day("Tomorrow", 30, 5, "light-rain"),
            day("Day 3", 26, 15, "rain"),
            day("Day 4", 24, 8, "cloudy"),
            day("Day 5", 27, 0, "sunny"),
            day("Day 6", 29, 2, "partly-cloudy"),
            day("Day 7", 31, 0, "sunny"),
        ],
        insights: vec![
            Insight {
                kind: InsightKind::Warning,
                message: "Temperature is 3°C above normal for this time".to_string(),
                action: "Increase irrigation frequency and provide shade if possible".to_string(),
            },
            Insight {
                kind: InsightKind::Info,
                message: "Rain expected tomorrow (5mm) - perfect timing for your rice crop"
                    .to_string(),
                action: "Skip irrigation today to avoid overwatering".to_string(),
            },
            Insight {
                kind: InsightKind::Success,
                message: "Humidity levels are optimal for rice growth".to_string(),
                action: "Continue with the current care routine".to_string(),
            },
        ],
    }
}

fn crop(name: &str, reason: &str, favorability: &str) -> CropRecommendation {
    CropRecommendation {
        name: name.to_string(),
        reason: reason.to_string(),
        favorability: favorability.to_string(),
    }
}

fn day(label: &str, temp: i64, rain: i64, condition: &str) -> ForecastDay {
    ForecastDay {
        day: label.to_string(),
        temp: Decimal::from(temp),
        rain: Decimal::from(rain),
        condition: condition.to_string(),
    }
}
