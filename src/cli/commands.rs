//! Command implementations

use super::OutputFormat;
use crate::config::Config;
use crate::tui::onboarding::{
    EffectLog, InstanceSize, Language, OnboardingWizard, ScrollOptions, StepVisibility,
    WizardAction, WizardSummary,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Load config from `path`, or from the default locations. Also returns the
/// file it came from, if any, so it can be logged once logging is up.
pub(super) fn load_config(path: Option<&str>) -> Result<(Config, Option<PathBuf>)> {
    let (config, source) = match path {
        Some(path) => (Config::load_from_path(path)?, Some(PathBuf::from(path))),
        None => (Config::load()?, Config::discover()),
    };
    config.validate()?;
    Ok((config, source))
}

/// Interactive wizard
pub(super) async fn cmd_run(config: &Config, username: Option<String>) -> Result<()> {
    let mut wizard = OnboardingWizard::with_scroll_options(config.ui.scroll_options());
    if let Some(name) = username.or_else(|| config.wizard.username.clone()) {
        wizard.set_username_draft(name);
    }

    match crate::tui::run(wizard, config.ui.box_width).await? {
        WizardAction::Join(summary) => {
            let handle = summary.handle().unwrap_or_default();
            println!("Joining Mastodon as {}", handle);
            println!("Account creation happens on the instance itself; nothing was sent.");
        }
        WizardAction::Cancel | WizardAction::None => {
            println!("Maybe next time!");
        }
    }
    Ok(())
}

/// Outcome of walking the wizard from command-line arguments
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub state: WizardSummary,
    pub visible: StepVisibility,
    /// Anchor ids in the order the scrolls were requested
    pub scroll_effects: Vec<&'static str>,
    /// Inputs the wizard declined, with the reason
    pub declined: Vec<String>,
}

/// Feed username, language and size into a fresh wizard in that order
pub fn plan(
    options: ScrollOptions,
    username: &str,
    language: Option<&str>,
    size: Option<&str>,
) -> PlanReport {
    let mut wizard = OnboardingWizard::with_scroll_options(options);
    let mut declined = Vec::new();

    wizard.set_username_draft(username);
    wizard.confirm_username();
    if !wizard.username_confirmed() {
        declined.push("username is empty".to_string());
    }

    if let Some(code) = language {
        if let Err(e) = Language::from_code(code) {
            declined.push(e.to_string());
        }
        wizard.select_language(code);
    }

    if let Some(size) = size {
        match size.parse::<InstanceSize>() {
            Ok(size) => wizard.select_instance_size(size),
            Err(e) => {
                tracing::warn!("Ignoring instance size: {}", e);
                declined.push(e.to_string());
            }
        }
    }

    let mut log = EffectLog::default();
    wizard.flush_effects(&mut log);

    PlanReport {
        state: wizard.summary(),
        visible: wizard.visibility(),
        scroll_effects: log.anchors.iter().map(|a| a.id()).collect(),
        declined,
    }
}

pub(super) fn cmd_plan(
    config: &Config,
    username: &str,
    language: Option<&str>,
    size: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let report = plan(config.ui.scroll_options(), username, language, size);
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize plan")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_text(&report)),
    }
    Ok(())
}

fn render_text(report: &PlanReport) -> String {
    let state = &report.state;
    let mut out = String::new();

    let confirmed = if state.username_confirmed {
        "confirmed"
    } else {
        "not confirmed"
    };
    out.push_str(&format!("username:          {} ({})\n", state.username, confirmed));

    let language = state
        .language
        .map(|l| format!("{} ({})", l.label, l.value))
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("language:          {}\n", language));

    let size = state
        .instance_size
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("instance size:     {}\n", size));

    let instance = state
        .selected_instance
        .map(|i| format!("{} (admin {}, {} users)", i.name, i.owner, i.count))
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("selected instance: {}\n", instance));

    if let Some(handle) = state.handle() {
        out.push_str(&format!("handle:            {}\n", handle));
    }

    let effects = if report.scroll_effects.is_empty() {
        "-".to_string()
    } else {
        report.scroll_effects.join(" -> ")
    };
    out.push_str(&format!("scroll effects:    {}\n", effects));

    for reason in &report.declined {
        out.push_str(&format!("declined:          {}\n", reason));
    }
    out
}

/// Write the default config to `path`, or to the system location. Never
/// reads the existing file, so a broken one can be replaced.
pub(super) fn cmd_init(path: Option<&str>, force: bool) -> Result<()> {
    let path = path
        .map(PathBuf::from)
        .unwrap_or_else(Config::system_config_path);
    if path.exists() && !force {
        anyhow::bail!(
            "Configuration already exists at {:?} (use --force to overwrite)",
            path
        );
    }
    Config::default().save(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

pub(super) fn cmd_config(config: &Config) -> Result<()> {
    let toml = toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
    print!("{}", toml);
    Ok(())
}
