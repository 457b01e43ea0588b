//! WebAssembly module for the CropWeather advisory front-end
//!
//! Provides client-side computation for:
//! - Form validation (location, crop, yield-prediction inputs)
//! - Offline fallback payloads, identical to the client's sample data

use wasm_bindgen::prelude::*;

use shared::fallback;
use validator::Validate;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validate a district entry; submit buttons stay disabled while false
#[wasm_bindgen]
pub fn is_valid_district(district: &str) -> bool {
    shared::validate_district(district).is_ok()
}

/// Validate a crop name entered or picked by the user
#[wasm_bindgen]
pub fn is_valid_crop(crop: &str) -> bool {
    shared::validate_crop_name(crop).is_ok()
}

/// Validate a cultivated area entry
#[wasm_bindgen]
pub fn is_valid_area(area: &str) -> bool {
    shared::parse_area(area).is_ok()
}

/// Validate a full yield-prediction form (JSON object with state, district,
/// crop, season, area). Returns a JSON object mapping field name to error
/// message; an empty object means the form may be submitted.
#[wasm_bindgen]
pub fn validate_yield_form(form_json: &str) -> Result<String, JsValue> {
    let request: YieldPredictionRequest = match serde_json::from_str(form_json) {
        Ok(request) => request,
        Err(e) => {
            let errors = serde_json::json!({ "form": format!("Invalid form data: {}", e) });
            return Ok(errors.to_string());
        }
    };

    let mut errors = serde_json::Map::new();
    if let Err(validation) = request.validate() {
        for (field, field_errors) in validation.field_errors() {
            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "invalid value".to_string());
            errors.insert(field.to_string(), serde_json::Value::String(message));
        }
    }

    serde_json::to_string(&errors).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Quick-pick crop candidates for the selection panel
#[wasm_bindgen]
pub fn common_crops() -> Vec<JsValue> {
    shared::COMMON_CROPS
        .iter()
        .map(|crop| JsValue::from_str(crop))
        .collect()
}

/// Fallback crop recommendations as JSON, for offline/demo rendering
#[wasm_bindgen]
pub fn fallback_recommendations_json() -> Result<String, JsValue> {
    serde_json::to_string(&fallback::fallback_recommendations())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Fallback weather analysis as JSON, for offline/demo rendering
#[wasm_bindgen]
pub fn fallback_weather_json() -> Result<String, JsValue> {
    serde_json::to_string(&fallback::fallback_weather())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
