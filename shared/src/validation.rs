//! Validation utilities for the advisory client
//!
//! Form inputs are validated here before they reach the network layer.

use rust_decimal::Decimal;

/// Popular crops offered as quick-pick candidates on the selection panel
pub const COMMON_CROPS: &[&str] = &[
    "Rice", "Wheat", "Cotton", "Sugarcane", "Maize", "Soybean", "Tomato", "Potato", "Onion",
    "Chili", "Banana", "Mango",
];

/// Validate a district name (required, non-blank after trimming)
pub fn validate_district(district: &str) -> Result<(), &'static str> {
    if district.trim().is_empty() {
        return Err("District is required");
    }
    Ok(())
}

/// Validate a crop name entered or picked by the user
pub fn validate_crop_name(crop: &str) -> Result<(), &'static str> {
    if crop.trim().is_empty() {
        return Err("Crop name cannot be blank");
    }
    Ok(())
}

/// Validate a cultivated area in hectares
pub fn validate_area(area: Decimal) -> Result<(), &'static str> {
    if area <= Decimal::ZERO {
        return Err("Area must be positive");
    }
    Ok(())
}

/// Parse a user-entered area string into a positive Decimal
pub fn parse_area(input: &str) -> Result<Decimal, &'static str> {
    let area: Decimal = input
        .trim()
        .parse()
        .map_err(|_| "Area must be a number")?;
    validate_area(area)?;
    Ok(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_district_required() {
        assert!(validate_district("Cuttack").is_ok());
        assert!(validate_district("").is_err());
        assert!(validate_district("   ").is_err());
    }

    #[test]
    fn test_common_crops_are_valid_names() {
        for crop in COMMON_CROPS {
            assert!(validate_crop_name(crop).is_ok());
        }
    }

    #[test]
    fn test_parse_area() {
        assert_eq!(parse_area("2.5").unwrap(), Decimal::new(25, 1));
        assert!(parse_area("0").is_err());
        assert!(parse_area("-3").is_err());
        assert!(parse_area("two").is_err());
    }

    proptest! {
        /// Whitespace-only input is never a valid crop name
        #[test]
        fn prop_whitespace_crop_rejected(spaces in "[ \t]{0,16}") {
            prop_assert!(validate_crop_name(&spaces).is_err());
        }

        /// Any name with a visible character is accepted
        #[test]
        fn prop_visible_crop_accepted(name in "[A-Za-z][A-Za-z ]{0,20}") {
            prop_assert!(validate_crop_name(&name).is_ok());
        }

        /// Positive areas parse, non-positive never do
        #[test]
        fn prop_area_sign(value in -1000.0f64..1000.0) {
            let text = format!("{value:.2}");
            let parsed = parse_area(&text);
            if value > 0.005 {
                prop_assert!(parsed.is_ok());
            } else if value <= 0.0 {
                prop_assert!(parsed.is_err());
            }
        }
    }
}
