//! TUI Runner
//!
//! Terminal setup and the main event loop for the wizard.

use super::events::{EventHandler, TuiEvent};
use super::onboarding::{OnboardingWizard, WizardAction};
use super::onboarding_render;
use super::viewport::Viewport;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyCode,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::Duration;

/// Rows moved per mouse wheel notch
const MOUSE_SCROLL_ROWS: isize = 3;

/// Run the wizard until the user joins or leaves
pub async fn run(mut wizard: OnboardingWizard, box_width: u16) -> Result<WizardAction> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let (mut events, sender) = EventHandler::new();
    EventHandler::start_terminal_listener(sender);

    tracing::info!("Wizard started");
    let result = run_loop(&mut terminal, &mut wizard, &mut events, box_width).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Main event loop
async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    wizard: &mut OnboardingWizard,
    events: &mut EventHandler,
    box_width: u16,
) -> Result<WizardAction>
where
    B::Error: Send + Sync + 'static,
{
    let mut viewport = Viewport::new();

    loop {
        terminal.draw(|f| {
            onboarding_render::render_onboarding(f, wizard, &mut viewport, box_width)
        })?;

        // The frame above shows every transition so far, so queued scrolls
        // can resolve against it. Redraw if any of them moved the view.
        if wizard.flush_effects(&mut viewport) > 0 {
            continue;
        }

        // Wait for input (with timeout so the screen refreshes now and then)
        let event = tokio::time::timeout(Duration::from_millis(250), events.next()).await;

        match event {
            Ok(Some(TuiEvent::Key(key))) => match key.code {
                KeyCode::PageUp => viewport.scroll_by(-(viewport.page_rows() as isize)),
                KeyCode::PageDown => viewport.scroll_by(viewport.page_rows() as isize),
                _ => match wizard.handle_key(key) {
                    WizardAction::None => {}
                    action => {
                        tracing::debug!("Wizard finished: {:?}", action);
                        return Ok(action);
                    }
                },
            },
            Ok(Some(TuiEvent::Paste(text))) => wizard.handle_paste(&text),
            Ok(Some(TuiEvent::MouseScroll(dir))) => {
                viewport.scroll_by(dir as isize * MOUSE_SCROLL_ROWS);
            }
            Ok(Some(TuiEvent::Resize)) | Err(_) => {}
            Ok(None) => {
                tracing::warn!("Terminal input closed, leaving wizard");
                return Ok(WizardAction::Cancel);
            }
        }
    }
}
