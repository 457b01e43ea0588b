//! Wizard controller: linear step progression and accumulated answers
//!
//! Pure state holder. Panels read the stored answers; only the controller
//! mutates them. Steps are an explicit sum type so every render decision
//! matches exhaustively.

use shared::{validate_crop_name, validate_district, Location};

use crate::error::{AppError, AppResult};

/// The wizard's steps, in order. No backward transition is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Welcome,
    Location,
    Favorability,
    Selection,
    Analysis,
}

/// Holds the current step and the answers accumulated so far
#[derive(Debug, Clone)]
pub struct WizardController {
    step: WizardStep,
    location: Option<Location>,
    crop: Option<String>,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Welcome,
            location: None,
            crop: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn crop(&self) -> Option<&str> {
        self.crop.as_deref()
    }

    /// Display label for the stored location, e.g. "Cuttack, Odisha"
    pub fn location_label(&self) -> String {
        self.location
            .as_ref()
            .map(Location::label)
            .unwrap_or_default()
    }

    /// Welcome → Location
    pub fn start(&mut self) -> AppResult<()> {
        self.expect_step(WizardStep::Welcome, "start")?;
        self.step = WizardStep::Location;
        tracing::info!("wizard started");
        Ok(())
    }

    /// Location → Favorability, storing the trimmed answer. A blank district
    /// is rejected and the step does not advance.
    pub fn submit_location(&mut self, district: &str, state: &str) -> AppResult<()> {
        self.expect_step(WizardStep::Location, "submit_location")?;
        validate_district(district).map_err(|msg| AppError::validation("district", msg))?;

        let state = state.trim();
        let location = Location::new(
            district.trim(),
            (!state.is_empty()).then(|| state.to_string()),
        );
        tracing::info!(location = %location.label(), "location submitted");
        self.location = Some(location);
        self.step = WizardStep::Favorability;
        Ok(())
    }

    /// Favorability → Selection
    pub fn confirm_favorability(&mut self) -> AppResult<()> {
        self.expect_step(WizardStep::Favorability, "confirm_favorability")?;
        self.step = WizardStep::Selection;
        Ok(())
    }

    /// Selection → Analysis, storing the trimmed crop. Blank or
    /// whitespace-only input is rejected and the step does not advance.
    pub fn submit_crop(&mut self, crop: &str) -> AppResult<()> {
        self.expect_step(WizardStep::Selection, "submit_crop")?;
        validate_crop_name(crop).map_err(|msg| AppError::validation("crop", msg))?;

        tracing::info!(crop = crop.trim(), "crop submitted");
        self.crop = Some(crop.trim().to_string());
        self.step = WizardStep::Analysis;
        Ok(())
    }

    fn expect_step(&self, expected: WizardStep, operation: &str) -> AppResult<()> {
        if self.step != expected {
            return Err(AppError::InvalidStateTransition(format!(
                "{} is only valid in the {:?} step (currently {:?})",
                operation, expected, self.step
            )));
        }
        Ok(())
    }
}
