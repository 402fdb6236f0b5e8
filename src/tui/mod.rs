//! Terminal User Interface
//!
//! Ratatui front end for the onboarding wizard.

pub mod events;
pub mod onboarding;
pub mod onboarding_render;
pub mod runner;
pub mod viewport;

pub use onboarding::OnboardingWizard;
pub use runner::run;
