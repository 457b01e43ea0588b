//! Crop recommendation models

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/crop-recommendations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub district: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// A single crop with its suitability assessment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropRecommendation {
    pub name: String,
    pub reason: String,
    pub favorability: String,
}

/// Favorable and unfavorable crops for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationReport {
    pub favorable: Vec<CropRecommendation>,
    pub unfavorable: Vec<CropRecommendation>,
}
