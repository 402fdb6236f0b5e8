use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WizardError;

/// Supported languages, in the order they are listed on the language step
pub const LANGUAGE_OPTIONS: &[Language] = &[
    Language {
        value: "en",
        label: "English",
    },
    Language {
        value: "fr",
        label: "French",
    },
    Language {
        value: "de",
        label: "German",
    },
    Language {
        value: "es",
        label: "Spanish",
    },
];

/// A language choice: machine code plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub value: &'static str,
    pub label: &'static str,
}

impl Language {
    /// Look up one of the supported languages by its code
    pub fn from_code(code: &str) -> Result<&'static Language, WizardError> {
        LANGUAGE_OPTIONS
            .iter()
            .find(|lang| lang.value == code)
            .ok_or_else(|| WizardError::UnknownLanguage(code.to_string()))
    }

    /// Position in `LANGUAGE_OPTIONS`
    pub fn index(&self) -> usize {
        LANGUAGE_OPTIONS
            .iter()
            .position(|lang| lang.value == self.value)
            .unwrap_or(0)
    }
}

/// Instance size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceSize {
    Small,
    Large,
}

impl InstanceSize {
    /// Order the size choices are shown in: the busy option first
    pub const CHOICES: [InstanceSize; 2] = [InstanceSize::Large, InstanceSize::Small];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }

    /// Button text for the size choice
    pub fn pitch(&self) -> &'static str {
        match self {
            Self::Large => "I want to see as much new stuff as I can!",
            Self::Small => "I'd like to start off someplace a bit quiet.",
        }
    }

    /// Second line of the size choice
    pub fn detail(&self) -> &'static str {
        match self {
            Self::Large => "Show me an instance with lots of people on it!",
            Self::Small => "Show me an instance with not very many users yet.",
        }
    }
}

impl fmt::Display for InstanceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstanceSize {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "large" => Ok(Self::Large),
            other => Err(WizardError::UnknownInstanceSize(other.to_string())),
        }
    }
}

/// A placeholder instance the wizard can recommend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstanceRecord {
    pub name: &'static str,
    pub owner: &'static str,
    pub count: u32,
}

/// Step of the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Username,
    Language,
    Size,
    Confirmation,
}

impl WizardStep {
    /// Step number (1-based)
    pub fn number(&self) -> usize {
        match self {
            Self::Username => 1,
            Self::Language => 2,
            Self::Size => 3,
            Self::Confirmation => 4,
        }
    }

    pub fn total() -> usize {
        4
    }

    /// Step title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Username => "Pick a Username",
            Self::Language => "Pick a Language",
            Self::Size => "Pick an Instance",
            Self::Confirmation => "Sounds Great!",
        }
    }
}

/// Named scroll target in the rendered wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Anchor {
    /// Top of the document, above the username step
    Top,
    UsernameStep,
    LanguageStep,
    SizeStep,
}

impl Anchor {
    pub const COUNT: usize = 4;

    pub const ALL: [Anchor; Self::COUNT] = [
        Anchor::Top,
        Anchor::UsernameStep,
        Anchor::LanguageStep,
        Anchor::SizeStep,
    ];

    /// Anchor id as used in scroll requests and reports
    pub fn id(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::UsernameStep => "usernameStep",
            Self::LanguageStep => "languageStep",
            Self::SizeStep => "sizeStep",
        }
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            Self::Top => 0,
            Self::UsernameStep => 1,
            Self::LanguageStep => 2,
            Self::SizeStep => 3,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Username,
    Language,
    Size,
    Actions,
}

/// Buttons on the confirmation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmButton {
    Join,
    AnotherInstance,
    BackUp,
}

impl ConfirmButton {
    pub const ALL: [ConfirmButton; 3] = [
        ConfirmButton::Join,
        ConfirmButton::AnotherInstance,
        ConfirmButton::BackUp,
    ];
}

/// Which steps are currently revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepVisibility {
    pub language: bool,
    pub size: bool,
    pub confirmation: bool,
}

impl StepVisibility {
    /// Visibility depends only on these three facts, never on call history
    pub fn of(username_confirmed: bool, has_language: bool, has_size: bool) -> Self {
        Self {
            language: username_confirmed,
            size: has_language,
            confirmation: has_size,
        }
    }

    pub fn is_visible(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Username => true,
            WizardStep::Language => self.language,
            WizardStep::Size => self.size,
            WizardStep::Confirmation => self.confirmation,
        }
    }
}

/// Snapshot of the wizard state handed to the outside world
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSummary {
    pub username: String,
    pub username_confirmed: bool,
    pub language: Option<Language>,
    pub instance_size: Option<InstanceSize>,
    pub selected_instance: Option<InstanceRecord>,
}

impl WizardSummary {
    /// Full handle the user would join as, once an instance is chosen
    pub fn handle(&self) -> Option<String> {
        self.selected_instance
            .map(|instance| format!("@{}@{}", self.username, instance.name))
    }
}

/// What the app should do after handling a wizard key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Nothing special
    None,
    /// User left the wizard
    Cancel,
    /// User pressed Join on the confirmation step
    Join(WizardSummary),
}
