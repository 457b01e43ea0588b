//! CropWeather advisory client library
//!
//! Wizard state, fetch adapters, fallback data, chat session, and
//! localization for the farming-advisory front-end. The `cropweather`
//! binary wires these together into an interactive terminal flow.

pub mod config;
pub mod error;
pub mod external;
pub mod i18n;
pub mod services;
pub mod ui;

pub use config::Config;
pub use error::{AppError, AppResult};
