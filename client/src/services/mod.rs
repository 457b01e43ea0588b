//! Application services: wizard state, panel fetch lifecycle, chat session

pub mod chat;
pub mod panels;
pub mod wizard;

pub use chat::ChatSession;
pub use panels::{FetchState, PanelFetch};
pub use wizard::{WizardController, WizardStep};
