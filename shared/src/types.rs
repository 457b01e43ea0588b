//! Common types used across the advisory client

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A farm location as the user entered it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub district: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Location {
    pub fn new(district: impl Into<String>, state: Option<String>) -> Self {
        Self {
            district: district.into(),
            state,
        }
    }

    /// Display label, e.g. "Cuttack, Odisha" or just "Cuttack"
    pub fn label(&self) -> String {
        match &self.state {
            Some(state) => format!("{}, {}", self.district, state),
            None => self.district.clone(),
        }
    }
}

/// Supported languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Odia,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Odia => "or",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            "or" => Some(Language::Odia),
            _ => None,
        }
    }

    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Odia];
}

/// Growing seasons recognised by the yield-prediction service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Season {
    Kharif,
    Rabi,
    Summer,
    Winter,
    Autumn,
    #[serde(rename = "Whole Year")]
    WholeYear,
}

impl Season {
    pub const ALL: [Season; 6] = [
        Season::Kharif,
        Season::Rabi,
        Season::Summer,
        Season::Winter,
        Season::Autumn,
        Season::WholeYear,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Summer => "Summer",
            Season::Winter => "Winter",
            Season::Autumn => "Autumn",
            Season::WholeYear => "Whole Year",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Kharif" => Ok(Season::Kharif),
            "Rabi" => Ok(Season::Rabi),
            "Summer" => Ok(Season::Summer),
            "Winter" => Ok(Season::Winter),
            "Autumn" => Ok(Season::Autumn),
            "Whole Year" => Ok(Season::WholeYear),
            _ => Err("Unknown season"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_label() {
        let with_state = Location::new("Cuttack", Some("Odisha".to_string()));
        assert_eq!(with_state.label(), "Cuttack, Odisha");

        let without_state = Location::new("Cuttack", None);
        assert_eq!(without_state.label(), "Cuttack");
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn test_season_wire_names() {
        assert_eq!(
            serde_json::to_string(&Season::WholeYear).unwrap(),
            "\"Whole Year\""
        );
        assert_eq!(serde_json::to_string(&Season::Kharif).unwrap(), "\"Kharif\"");
        assert_eq!("Whole Year".parse::<Season>().unwrap(), Season::WholeYear);
        assert!("Monsoon".parse::<Season>().is_err());
    }
}
