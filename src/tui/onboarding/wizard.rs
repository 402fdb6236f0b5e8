use super::directory;
use super::effects::{EffectQueue, ScrollEffect, ScrollOptions, ScrollTarget};
use super::types::*;

/// Main onboarding wizard state
#[derive(Debug)]
pub struct OnboardingWizard {
    /// Step 1: Username draft, taken verbatim from input. Only the
    /// transition methods write these.
    pub(super) username: String,
    pub(super) username_confirmed: bool,

    /// Step 2: Language
    pub(super) language: Option<&'static Language>,
    /// Highlighted row in the language list
    pub language_cursor: usize,

    /// Step 3: Instance size. The selected instance is derived from this on
    /// read so the two can never disagree.
    pub(super) instance_size: Option<InstanceSize>,
    /// Highlighted entry in `InstanceSize::CHOICES`
    pub size_cursor: usize,

    /// Step 4: Confirmation
    pub button_cursor: usize,
    pub notice: Option<String>,

    /// Navigation
    pub focus: Focus,

    pub(super) effects: EffectQueue,
    pub(super) scroll_options: ScrollOptions,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    /// Create a new wizard with every field empty
    pub fn new() -> Self {
        Self {
            username: String::new(),
            username_confirmed: false,
            language: None,
            language_cursor: 0,
            instance_size: None,
            size_cursor: 0,
            button_cursor: 0,
            notice: None,
            focus: Focus::Username,
            effects: EffectQueue::new(),
            scroll_options: ScrollOptions::default(),
        }
    }

    /// Create a wizard whose scroll requests carry `options`
    pub fn with_scroll_options(options: ScrollOptions) -> Self {
        Self {
            scroll_options: options,
            ..Self::new()
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// True only if the draft was non-empty when last confirmed
    pub fn username_confirmed(&self) -> bool {
        self.username_confirmed
    }

    pub fn language(&self) -> Option<&'static Language> {
        self.language
    }

    pub fn instance_size(&self) -> Option<InstanceSize> {
        self.instance_size
    }

    /// Directory entry for the chosen size
    pub fn selected_instance(&self) -> Option<&'static InstanceRecord> {
        self.instance_size.map(directory::lookup)
    }

    pub fn visibility(&self) -> StepVisibility {
        StepVisibility::of(
            self.username_confirmed,
            self.language.is_some(),
            self.instance_size.is_some(),
        )
    }

    /// Furthest step currently revealed
    pub fn current_step(&self) -> WizardStep {
        let visible = self.visibility();
        [
            WizardStep::Confirmation,
            WizardStep::Size,
            WizardStep::Language,
        ]
        .into_iter()
        .find(|step| visible.is_visible(*step))
        .unwrap_or(WizardStep::Username)
    }

    pub fn summary(&self) -> WizardSummary {
        WizardSummary {
            username: self.username.clone(),
            username_confirmed: self.username_confirmed,
            language: self.language.copied(),
            instance_size: self.instance_size,
            selected_instance: self.selected_instance().copied(),
        }
    }

    /// Replace the username draft. Nothing is validated until confirmation.
    pub fn set_username_draft(&mut self, text: impl Into<String>) {
        self.username = text.into();
    }

    /// Submit the username. An empty draft is declined and leaves the wizard
    /// unconfirmed; a non-empty one confirms (again) and scrolls to the step.
    pub fn confirm_username(&mut self) {
        if self.username.is_empty() {
            tracing::debug!("[wizard] empty username submitted, not advancing");
            self.username_confirmed = false;
            return;
        }

        self.username_confirmed = true;
        tracing::debug!("[wizard] username confirmed ({} chars)", self.username.len());
        self.request_scroll(Anchor::UsernameStep);
    }

    /// Choose a language by code. Unknown codes are ignored.
    pub fn select_language(&mut self, code: &str) {
        let language = match Language::from_code(code) {
            Ok(language) => language,
            Err(e) => {
                tracing::warn!("[wizard] ignoring language selection: {}", e);
                return;
            }
        };

        self.language = Some(language);
        self.language_cursor = language.index();
        tracing::debug!("[wizard] language set to {}", language.value);
        self.request_scroll(Anchor::LanguageStep);
    }

    /// Choose an instance size. The recommended instance follows from it.
    pub fn select_instance_size(&mut self, size: InstanceSize) {
        self.instance_size = Some(size);
        self.size_cursor = InstanceSize::CHOICES
            .iter()
            .position(|s| *s == size)
            .unwrap_or(0);
        self.notice = None;
        tracing::debug!(
            "[wizard] instance size set to {} -> {}",
            size,
            directory::lookup(size).name
        );
        self.request_scroll(Anchor::SizeStep);
    }

    /// Join button. Only does anything once an instance is shown.
    pub fn join(&self) -> WizardAction {
        if !self.visibility().confirmation {
            return WizardAction::None;
        }
        let summary = self.summary();
        tracing::info!(
            "[wizard] join requested as {}",
            summary.handle().unwrap_or_default()
        );
        WizardAction::Join(summary)
    }

    /// "Back up to change my selections": jump to the top without clearing
    /// anything.
    pub fn back_to_start(&mut self) {
        self.focus = Focus::Username;
        self.notice = None;
        self.request_scroll(Anchor::Top);
    }

    /// "Show me another instance". There is only one per size.
    pub fn another_instance(&mut self) {
        if let (Some(size), Some(language)) = (self.instance_size, self.language) {
            self.notice = Some(format!(
                "No other {} instances speak {} yet",
                size, language.label
            ));
        }
    }

    /// Scroll effects that have not been flushed yet
    pub fn pending_effects(&self) -> &EffectQueue {
        &self.effects
    }

    /// Hand pending scroll effects to `target`. Call after the frame that
    /// reflects the latest state has been drawn.
    pub fn flush_effects(&mut self, target: &mut dyn ScrollTarget) -> usize {
        self.effects.flush(target)
    }

    fn request_scroll(&mut self, anchor: Anchor) {
        self.effects.push(ScrollEffect {
            anchor,
            options: self.scroll_options,
        });
    }
}
