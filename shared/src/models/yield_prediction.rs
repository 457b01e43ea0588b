//! Yield prediction models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::Season;

/// Request body for `POST /api/yield-prediction`
///
/// Validated client-side before any network call is made.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct YieldPredictionRequest {
    #[validate(length(min = 2, message = "State is required."))]
    pub state: String,
    #[validate(length(min = 2, message = "District is required."))]
    pub district: String,
    #[validate(length(min = 2, message = "Crop is required."))]
    pub crop: String,
    pub season: Season,
    #[validate(custom = "validate_positive_area")]
    pub area: Decimal,
}

/// Response from the yield-prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YieldPredictionResponse {
    pub predicted_production_tonnes: Decimal,
}

fn validate_positive_area(area: &Decimal) -> Result<(), ValidationError> {
    if *area <= Decimal::ZERO {
        let mut err = ValidationError::new("positive");
        err.message = Some("Area must be positive.".into());
        return Err(err);
    }
    Ok(())
}
