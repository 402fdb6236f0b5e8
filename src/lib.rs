//! fediwizard - a terminal onboarding wizard for the fediverse
//!
//! Walks a newcomer through picking a username, a language and an instance
//! size, revealing each step once the previous one is done and scrolling the
//! newly completed step into view.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive wizard
//! fediwizard
//!
//! # Non-interactive walk-through
//! fediwizard plan --username alice --language fr --size large
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tui;

// Re-export commonly used types
pub use error::WizardError;
pub use tui::onboarding::{OnboardingWizard, WizardAction, WizardSummary};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
