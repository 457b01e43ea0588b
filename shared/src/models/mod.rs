//! Domain models for the advisory API

pub mod chat;
pub mod recommendation;
pub mod weather;
pub mod yield_prediction;

pub use chat::*;
pub use recommendation::*;
pub use weather::*;
pub use yield_prediction::*;
