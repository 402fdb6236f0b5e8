use super::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_wizard_creation() {
    let wizard = OnboardingWizard::new();
    assert!(wizard.username().is_empty());
    assert!(!wizard.username_confirmed());
    assert!(wizard.language().is_none());
    assert!(wizard.instance_size().is_none());
    assert!(wizard.selected_instance().is_none());
    assert_eq!(wizard.focus, Focus::Username);
    assert_eq!(wizard.current_step(), WizardStep::Username);
    assert!(wizard.pending_effects().is_empty());
}

#[test]
fn test_set_username_draft_is_verbatim() {
    let mut wizard = OnboardingWizard::new();
    wizard.set_username_draft("  Alice  ");
    assert_eq!(wizard.username(), "  Alice  ");
    assert!(!wizard.username_confirmed());
    assert!(wizard.pending_effects().is_empty());
}

#[test]
fn test_confirm_empty_username_declines() {
    let mut wizard = OnboardingWizard::new();
    wizard.set_username_draft("");
    wizard.confirm_username();
    assert!(!wizard.username_confirmed());
    assert!(wizard.pending_effects().is_empty());
    assert!(!wizard.visibility().language);
}

#[test]
fn test_confirm_after_clearing_resets_confirmation() {
    let mut wizard = OnboardingWizard::new();
    wizard.set_username_draft("bob");
    wizard.confirm_username();
    assert!(wizard.username_confirmed());

    wizard.set_username_draft("");
    // Editing alone doesn't touch the flag
    assert!(wizard.username_confirmed());
    wizard.confirm_username();
    assert!(!wizard.username_confirmed());
    assert_eq!(wizard.pending_effects().len(), 1);
}

#[test]
fn test_draft_alone_never_reveals_language_step() {
    let mut wizard = OnboardingWizard::new();
    wizard.set_username_draft("carol");
    assert!(!wizard.username_confirmed());
    assert!(!wizard.visibility().language);
    assert!(!wizard.is_focusable(Focus::Language));

    wizard.confirm_username();
    assert!(wizard.username_confirmed());
    assert!(wizard.visibility().language);
}

#[test]
fn test_reconfirm_requeues_scroll() {
    let mut wizard = OnboardingWizard::new();
    wizard.set_username_draft("bob");
    wizard.confirm_username();
    wizard.confirm_username();
    assert!(wizard.username_confirmed());
    assert_eq!(
        wizard.pending_effects().anchors(),
        vec![Anchor::UsernameStep, Anchor::UsernameStep]
    );
}

proptest! {
    #[test]
    fn prop_nonempty_username_confirms_with_one_scroll(name in ".+") {
        let mut wizard = OnboardingWizard::new();
        wizard.set_username_draft(name.clone());
        wizard.confirm_username();

        prop_assert!(wizard.username_confirmed());
        prop_assert_eq!(wizard.username(), name.as_str());
        prop_assert_eq!(wizard.pending_effects().anchors(), vec![Anchor::UsernameStep]);
    }
}

#[rstest]
#[case("en", "English")]
#[case("fr", "French")]
#[case("de", "German")]
#[case("es", "Spanish")]
fn test_select_language_keeps_later_state(#[case] code: &str, #[case] label: &str) {
    let mut wizard = OnboardingWizard::new();
    wizard.set_username_draft("carol");
    wizard.confirm_username();
    wizard.select_instance_size(InstanceSize::Small);
    let size_before = wizard.instance_size();
    let instance_before = wizard.selected_instance().copied();

    wizard.select_language(code);

    let language = wizard.language().expect("language should be set");
    assert_eq!(language.value, code);
    assert_eq!(language.label, label);
    assert_eq!(wizard.instance_size(), size_before);
    assert_eq!(wizard.selected_instance().copied(), instance_before);
    assert_eq!(
        wizard.pending_effects().anchors().last(),
        Some(&Anchor::LanguageStep)
    );
}

#[rstest]
#[case("")]
#[case("EN")]
#[case("it")]
#[case("english")]
fn test_select_unknown_language_is_ignored(#[case] code: &str) {
    let mut wizard = OnboardingWizard::new();
    wizard.select_language("de");
    let effects_before = wizard.pending_effects().len();

    wizard.select_language(code);

    assert_eq!(wizard.language().map(|l| l.value), Some("de"));
    assert_eq!(wizard.pending_effects().len(), effects_before);
}

#[rstest]
#[case(InstanceSize::Small, "tiny.zone", "@minifox", 23)]
#[case(InstanceSize::Large, "glowy.space", "@glowyote", 1234)]
fn test_select_instance_size_sets_instance(
    #[case] size: InstanceSize,
    #[case] name: &str,
    #[case] owner: &str,
    #[case] count: u32,
) {
    let mut wizard = OnboardingWizard::new();
    wizard.select_instance_size(size);

    assert_eq!(wizard.instance_size(), Some(size));
    let instance = wizard.selected_instance().expect("instance should be set");
    assert_eq!(instance.name, name);
    assert_eq!(instance.owner, owner);
    assert_eq!(instance.count, count);
    assert_eq!(wizard.pending_effects().anchors(), vec![Anchor::SizeStep]);
}

#[test]
fn test_switching_size_replaces_instance() {
    let mut wizard = OnboardingWizard::new();
    wizard.select_instance_size(InstanceSize::Large);
    wizard.select_instance_size(InstanceSize::Small);
    assert_eq!(wizard.instance_size(), Some(InstanceSize::Small));
    assert_eq!(wizard.selected_instance().map(|i| i.name), Some("tiny.zone"));
}

#[test]
fn test_select_instance_size_idempotent() {
    let mut once = OnboardingWizard::new();
    once.select_instance_size(InstanceSize::Small);

    let mut twice = OnboardingWizard::new();
    twice.select_instance_size(InstanceSize::Small);
    twice.select_instance_size(InstanceSize::Small);

    assert_eq!(once.summary(), twice.summary());
}

#[rstest]
fn test_visibility_is_pure(
    #[values(false, true)] confirmed: bool,
    #[values(false, true)] has_language: bool,
    #[values(false, true)] has_size: bool,
) {
    let expected = StepVisibility {
        language: confirmed,
        size: has_language,
        confirmation: has_size,
    };
    assert_eq!(StepVisibility::of(confirmed, has_language, has_size), expected);

    // Build the same state through two different histories
    let mut direct = OnboardingWizard::new();
    if confirmed {
        direct.set_username_draft("dana");
        direct.confirm_username();
    }
    if has_language {
        direct.select_language("es");
    }
    if has_size {
        direct.select_instance_size(InstanceSize::Large);
    }

    let mut winding = OnboardingWizard::new();
    if has_size {
        winding.select_instance_size(InstanceSize::Small);
        winding.select_instance_size(InstanceSize::Large);
    }
    if has_language {
        winding.select_language("fr");
        winding.select_language("es");
    }
    winding.set_username_draft("dana");
    winding.confirm_username();
    if !confirmed {
        winding.set_username_draft("");
        winding.confirm_username();
    }

    assert_eq!(direct.visibility(), expected);
    assert_eq!(winding.visibility(), expected);
}

#[test]
fn test_end_to_end_scenario() {
    let mut wizard = OnboardingWizard::new();
    wizard.set_username_draft("alice");
    wizard.confirm_username();
    wizard.select_language("fr");
    wizard.select_instance_size(InstanceSize::Large);

    let summary = wizard.summary();
    assert_eq!(summary.username, "alice");
    assert!(summary.username_confirmed);
    assert_eq!(
        summary.language,
        Some(Language {
            value: "fr",
            label: "French"
        })
    );
    assert_eq!(summary.instance_size, Some(InstanceSize::Large));
    assert_eq!(
        summary.selected_instance,
        Some(InstanceRecord {
            name: "glowy.space",
            owner: "@glowyote",
            count: 1234
        })
    );
    assert_eq!(summary.handle().as_deref(), Some("@alice@glowy.space"));

    let mut log = EffectLog::default();
    assert_eq!(wizard.flush_effects(&mut log), 3);
    assert_eq!(
        log.anchors,
        vec![Anchor::UsernameStep, Anchor::LanguageStep, Anchor::SizeStep]
    );
    assert!(wizard.pending_effects().is_empty());
}

#[test]
fn test_summary_json_shape() {
    let mut wizard = OnboardingWizard::new();
    wizard.set_username_draft("alice");
    wizard.confirm_username();
    wizard.select_language("fr");
    wizard.select_instance_size(InstanceSize::Large);

    let json = serde_json::to_value(wizard.summary()).unwrap();
    assert_eq!(json["username"], "alice");
    assert_eq!(json["username_confirmed"], true);
    assert_eq!(json["language"]["value"], "fr");
    assert_eq!(json["language"]["label"], "French");
    assert_eq!(json["instance_size"], "large");
    assert_eq!(json["selected_instance"]["name"], "glowy.space");
    assert_eq!(json["selected_instance"]["owner"], "@glowyote");
    assert_eq!(json["selected_instance"]["count"], 1234);
}

#[test]
fn test_scroll_options_travel_with_effects() {
    let options = ScrollOptions {
        align: ScrollAlign::Center,
        margin: 3,
    };
    let mut wizard = OnboardingWizard::with_scroll_options(options);
    wizard.select_language("en");

    struct Capture(Vec<ScrollOptions>);
    impl ScrollTarget for Capture {
        fn scroll_to_anchor(&mut self, _anchor: Anchor, options: ScrollOptions) {
            self.0.push(options);
        }
    }

    let mut capture = Capture(Vec::new());
    wizard.flush_effects(&mut capture);
    assert_eq!(capture.0, vec![options]);
}

#[test]
fn test_join_requires_confirmation_step() {
    let mut wizard = OnboardingWizard::new();
    wizard.set_username_draft("erin");
    wizard.confirm_username();
    wizard.select_language("en");
    assert_eq!(wizard.join(), WizardAction::None);

    wizard.select_instance_size(InstanceSize::Small);
    match wizard.join() {
        WizardAction::Join(summary) => {
            assert_eq!(summary.handle().as_deref(), Some("@erin@tiny.zone"));
        }
        other => panic!("expected Join, got {:?}", other),
    }
}

#[test]
fn test_back_to_start_keeps_state() {
    let mut wizard = completed_wizard();
    let before = wizard.summary();
    wizard.focus = Focus::Actions;

    wizard.back_to_start();

    assert_eq!(wizard.summary(), before);
    assert_eq!(wizard.focus, Focus::Username);
    assert_eq!(wizard.pending_effects().anchors().last(), Some(&Anchor::Top));
}

#[test]
fn test_another_instance_sets_notice_only() {
    let mut wizard = completed_wizard();
    let before = wizard.summary();

    wizard.another_instance();

    assert_eq!(wizard.summary(), before);
    assert_eq!(
        wizard.notice.as_deref(),
        Some("No other large instances speak French yet")
    );

    // Picking a size again clears the notice
    wizard.select_instance_size(InstanceSize::Large);
    assert!(wizard.notice.is_none());
}

#[test]
fn test_focus_ring_skips_hidden_steps() {
    let mut wizard = OnboardingWizard::new();
    wizard.focus_next();
    assert_eq!(wizard.focus, Focus::Username);

    wizard.set_username_draft("finn");
    wizard.confirm_username();
    assert_eq!(wizard.focus_stops(), vec![Focus::Username, Focus::Language]);
    wizard.focus_next();
    assert_eq!(wizard.focus, Focus::Language);
    wizard.focus_next();
    assert_eq!(wizard.focus, Focus::Username);
    wizard.focus_prev();
    assert_eq!(wizard.focus, Focus::Language);
}

#[test]
fn test_step_numbers() {
    assert_eq!(WizardStep::Username.number(), 1);
    assert_eq!(WizardStep::Language.number(), 2);
    assert_eq!(WizardStep::Size.number(), 3);
    assert_eq!(WizardStep::Confirmation.number(), 4);
    assert_eq!(WizardStep::total(), 4);
}

#[test]
fn test_language_and_size_parsing() {
    assert_eq!(Language::from_code("de").unwrap().label, "German");
    assert!(matches!(
        Language::from_code("xx"),
        Err(crate::error::WizardError::UnknownLanguage(code)) if code == "xx"
    ));
    assert_eq!("small".parse::<InstanceSize>().unwrap(), InstanceSize::Small);
    assert!("medium".parse::<InstanceSize>().is_err());
}

// --- Key-driven flow ---

#[test]
fn test_keyboard_flow_to_join() {
    let mut wizard = OnboardingWizard::new();

    // Enter on an empty field does nothing
    assert_eq!(wizard.handle_key(key(KeyCode::Enter)), WizardAction::None);
    assert!(!wizard.username_confirmed());
    assert_eq!(wizard.focus, Focus::Username);

    type_text(&mut wizard, "alicee");
    wizard.handle_key(key(KeyCode::Backspace));
    assert_eq!(wizard.username(), "alice");
    wizard.handle_key(key(KeyCode::Enter));
    assert!(wizard.username_confirmed());
    assert_eq!(wizard.focus, Focus::Language);

    // en -> fr
    wizard.handle_key(key(KeyCode::Down));
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(wizard.language().map(|l| l.value), Some("fr"));
    assert_eq!(wizard.focus, Focus::Size);

    // First choice is the large instance
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(wizard.instance_size(), Some(InstanceSize::Large));
    assert_eq!(wizard.focus, Focus::Actions);

    let mut log = EffectLog::default();
    wizard.flush_effects(&mut log);
    assert_eq!(
        log.anchors,
        vec![Anchor::UsernameStep, Anchor::LanguageStep, Anchor::SizeStep]
    );

    match wizard.handle_key(key(KeyCode::Enter)) {
        WizardAction::Join(summary) => {
            assert_eq!(summary.handle().as_deref(), Some("@alice@glowy.space"));
        }
        other => panic!("expected Join, got {:?}", other),
    }
}

#[test]
fn test_letters_are_text_in_username_field() {
    let mut wizard = OnboardingWizard::new();
    type_text(&mut wizard, "jkhl q");
    assert_eq!(wizard.username(), "jkhl q");
    assert_eq!(wizard.focus, Focus::Username);
}

#[test]
fn test_escape_and_ctrl_c_cancel() {
    let mut wizard = OnboardingWizard::new();
    assert_eq!(wizard.handle_key(key(KeyCode::Esc)), WizardAction::Cancel);
    assert_eq!(
        wizard.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        WizardAction::Cancel
    );
    assert!(wizard.username().is_empty());
}

#[test]
fn test_language_cursor_clamps() {
    let mut wizard = OnboardingWizard::new();
    wizard.set_username_draft("gus");
    wizard.confirm_username();
    wizard.focus = Focus::Language;

    wizard.handle_key(key(KeyCode::Up));
    assert_eq!(wizard.language_cursor, 0);
    for _ in 0..10 {
        wizard.handle_key(key(KeyCode::Down));
    }
    assert_eq!(wizard.language_cursor, LANGUAGE_OPTIONS.len() - 1);
    wizard.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(wizard.language().map(|l| l.value), Some("es"));
}

#[test]
fn test_action_buttons_by_key() {
    let mut wizard = completed_wizard();
    wizard.focus = Focus::Actions;

    wizard.handle_key(key(KeyCode::Right));
    assert_eq!(wizard.handle_key(key(KeyCode::Enter)), WizardAction::None);
    assert!(wizard.notice.is_some());

    wizard.handle_key(key(KeyCode::Right));
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(wizard.focus, Focus::Username);
    assert!(wizard.notice.is_none());
    assert!(wizard.username_confirmed());
}

#[test]
fn test_paste_into_username_only() {
    let mut wizard = OnboardingWizard::new();
    wizard.handle_paste("hank\nsecond line");
    assert_eq!(wizard.username(), "hank");

    wizard.confirm_username();
    wizard.focus = Focus::Language;
    wizard.handle_paste("ignored");
    assert_eq!(wizard.username(), "hank");
}

/// Wizard that has walked through every step (alice / fr / large)
fn completed_wizard() -> OnboardingWizard {
    let mut w = OnboardingWizard::new();
    w.set_username_draft("alice");
    w.confirm_username();
    w.select_language("fr");
    w.select_instance_size(InstanceSize::Large);
    w
}

fn type_text(wizard: &mut OnboardingWizard, text: &str) {
    for c in text.chars() {
        wizard.handle_key(key(KeyCode::Char(c)));
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
