//! Error types
//!
//! Typed errors for parsing wizard choices at the edges (CLI flags, config).
//! The wizard itself never returns these: it declines the transition instead.

use thiserror::Error;

/// Errors raised while turning raw text into a wizard choice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Language code outside the supported set
    #[error("unknown language code '{0}' (expected one of: en, fr, de, es)")]
    UnknownLanguage(String),

    /// Instance size outside {small, large}
    #[error("unknown instance size '{0}' (expected 'small' or 'large')")]
    UnknownInstanceSize(String),
}
