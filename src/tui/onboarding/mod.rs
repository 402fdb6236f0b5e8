//! Onboarding Wizard
//!
//! A 4-step wizard for joining the fediverse: pick a username, a language,
//! and an instance size, then confirm the recommended instance. Each step is
//! revealed once the one before it is complete. Revisiting an earlier step
//! overwrites its value and keeps everything after it.

pub mod directory;
pub mod effects;
mod input;
mod navigation;
mod types;
mod wizard;

#[cfg(test)]
mod tests;

// Re-export all public types
pub use types::{
    Anchor, ConfirmButton, Focus, InstanceRecord, InstanceSize, LANGUAGE_OPTIONS, Language,
    StepVisibility, WizardAction, WizardStep, WizardSummary,
};

pub use effects::{EffectLog, EffectQueue, ScrollAlign, ScrollEffect, ScrollOptions, ScrollTarget};
pub use wizard::OnboardingWizard;
