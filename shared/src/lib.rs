//! Shared types and models for the CropWeather advisory client
//!
//! This crate contains types shared between the terminal client, the
//! browser-facing WASM module, and other components of the system.

pub mod fallback;
pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
