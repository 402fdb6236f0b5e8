//! Onboarding Wizard Rendering
//!
//! The wizard is drawn as one scrolling document: every revealed step stays
//! on screen below the ones before it. Text is wrapped here rather than by
//! the Paragraph so that anchor rows are exact.

use super::onboarding::directory::{ACCOUNTS_PER_LANGUAGE, INSTANCES_PER_LANGUAGE};
use super::onboarding::{
    Anchor, ConfirmButton, Focus, InstanceSize, LANGUAGE_OPTIONS, OnboardingWizard, WizardStep,
};
use super::viewport::{AnchorMap, Viewport};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Main color palette
const BRAND_BLUE: Color = Color::Rgb(70, 130, 180);
const BRAND_GOLD: Color = Color::Rgb(218, 165, 32);
const ACCENT_GOLD: Color = Color::Rgb(184, 134, 11);

const INTRO: &str = "Signing up for Mastodon is a bit different from what you might have \
experienced before. You have a lot more control, but that also means you have a bit more \
to think about.";

const INSTANCE_EXPLAINER: &[&str] = &[
    "Great! Now it's time to pick an instance. This part is a bit more complicated. \
An instance is, basically, the site you go to when you're using Mastodon. Even though \
there are lots of different instances available, you can talk to folks on other \
instances, just like you can still email someone at hotmail.com even if your email \
address is at gmail.com.",
    "But unlike with email, Mastodon instances can be specialized to different countries, \
interest groups, and more. For now though, let's keep it general.",
];

const ADMIN_BLURB: &str = "and this is what they have to say about their instance: \
\"We're a new small instance, and we welcome anyone who's willing to help contribute to \
our friendly, constructive atmosphere\"";

/// Rendered wizard content plus where each anchor landed
pub struct WizardDocument {
    pub lines: Vec<Line<'static>>,
    pub anchors: AnchorMap,
}

/// Render the entire onboarding wizard and record its layout in `viewport`
pub fn render_onboarding(
    f: &mut Frame,
    wizard: &OnboardingWizard,
    viewport: &mut Viewport,
    box_width: u16,
) {
    let area = f.area();
    let width = box_width.min(area.width);
    let height = area.height.saturating_sub(2).max(area.height.min(3));

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [wizard_area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    let title = format!(
        " Join the Fediverse ({}/{}) ",
        wizard.current_step().number(),
        WizardStep::total()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_BLUE))
        .title(Span::styled(
            title,
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(wizard_area);
    f.render_widget(block, wizard_area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let document = build_document(wizard, content_area.width as usize);
    viewport.update_layout(
        document.anchors,
        document.lines.len(),
        content_area.height as usize,
    );

    let scroll = u16::try_from(viewport.offset()).unwrap_or(u16::MAX);
    f.render_widget(
        Paragraph::new(document.lines).scroll((scroll, 0)),
        content_area,
    );
    f.render_widget(Paragraph::new(footer_line()), footer_area);
}

/// Lay out every visible step for a content area `width` columns wide
pub fn build_document(wizard: &OnboardingWizard, width: usize) -> WizardDocument {
    let mut doc = DocBuilder::new(width);
    let visible = wizard.visibility();

    doc.anchor(Anchor::Top);
    doc.blank();
    doc.text(
        "So you're curious about Mastodon...",
        Style::default().fg(BRAND_GOLD).add_modifier(Modifier::BOLD),
    );
    doc.blank();
    doc.text(INTRO, Style::default().fg(Color::Gray));
    doc.blank();

    doc.anchor(Anchor::UsernameStep);
    render_username(&mut doc, wizard);

    if visible.language {
        doc.blank();
        doc.anchor(Anchor::LanguageStep);
        render_language(&mut doc, wizard);
    }

    if visible.size {
        doc.blank();
        doc.anchor(Anchor::SizeStep);
        render_size(&mut doc, wizard);
    }

    if visible.confirmation {
        doc.blank();
        render_confirmation(&mut doc, wizard);
    }

    doc.blank();
    doc.finish()
}

fn step_header(doc: &mut DocBuilder, step: WizardStep) {
    doc.push(Line::from(vec![
        Span::styled(
            format!("{}. ", step.number()),
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            step.title(),
            Style::default().fg(BRAND_GOLD).add_modifier(Modifier::BOLD),
        ),
    ]));
}

fn render_username(doc: &mut DocBuilder, wizard: &OnboardingWizard) {
    let focused = wizard.focus == Focus::Username;

    step_header(doc, WizardStep::Username);
    doc.text(
        "But we can start off easy. What username do you want?",
        Style::default().fg(Color::White),
    );
    doc.blank();

    let mut spans = vec![
        Span::styled(
            if focused { " > " } else { "   " },
            Style::default().fg(ACCENT_GOLD),
        ),
        Span::styled("@", Style::default().fg(Color::DarkGray)),
    ];
    if wizard.username().is_empty() && !focused {
        spans.push(Span::styled(
            "username",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            wizard.username().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(BRAND_GOLD)));
    }
    if wizard.username_confirmed() {
        spans.push(Span::styled("  ✓", Style::default().fg(Color::Green)));
    }
    doc.push(Line::from(spans));

    if focused && !wizard.username_confirmed() {
        doc.indented(
            "Type a name, then press Enter",
            3,
            Style::default().fg(Color::DarkGray),
        );
    }
}

fn render_language(doc: &mut DocBuilder, wizard: &OnboardingWizard) {
    let focused = wizard.focus == Focus::Language;

    step_header(doc, WizardStep::Language);
    for paragraph in INSTANCE_EXPLAINER {
        doc.text(paragraph, Style::default().fg(Color::Gray));
        doc.blank();
    }
    doc.text(
        "Which of these languages are you most comfortable using?",
        Style::default().fg(Color::White),
    );
    doc.blank();

    for (i, option) in LANGUAGE_OPTIONS.iter().enumerate() {
        let selected = wizard.language() == Some(option);
        let highlighted = focused && i == wizard.language_cursor;
        doc.push(choice_line(highlighted, selected, option.label));
    }
}

fn render_size(doc: &mut DocBuilder, wizard: &OnboardingWizard) {
    let focused = wizard.focus == Focus::Size;
    let label = wizard.language().map(|l| l.label).unwrap_or_default();

    step_header(doc, WizardStep::Size);
    doc.text(
        &format!(
            "We've found {} instances that primarily use {}, with {} accounts between \
them. You'll be able to talk to all these folks and more regardless of what instance \
you pick, but it'll be easier to see content from users on the same instance as you.",
            INSTANCES_PER_LANGUAGE, label, ACCOUNTS_PER_LANGUAGE
        ),
        Style::default().fg(Color::Gray),
    );
    doc.blank();

    for (i, size) in InstanceSize::CHOICES.iter().enumerate() {
        let selected = wizard.instance_size() == Some(*size);
        let highlighted = focused && i == wizard.size_cursor;
        doc.push(choice_line(highlighted, selected, size.pitch()));
        doc.indented(size.detail(), 7, Style::default().fg(Color::DarkGray));
    }
}

fn render_confirmation(doc: &mut DocBuilder, wizard: &OnboardingWizard) {
    let (Some(instance), Some(size)) = (wizard.selected_instance(), wizard.instance_size())
    else {
        return;
    };
    let focused = wizard.focus == Focus::Actions;
    let label = wizard.language().map(|l| l.label).unwrap_or_default();

    step_header(doc, WizardStep::Confirmation);
    doc.blank();
    doc.push(Line::from(Span::styled(
        format!("   {}", instance.name),
        Style::default()
            .fg(BRAND_BLUE)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    doc.indented(
        &format!("is an instance with {} users.", instance.count),
        3,
        Style::default().fg(Color::White),
    );
    doc.indented(
        &format!(
            "The admin of {} is {}, {}",
            instance.name, instance.owner, ADMIN_BLURB
        ),
        3,
        Style::default().fg(Color::Gray),
    );
    doc.blank();

    for (i, button) in ConfirmButton::ALL.iter().enumerate() {
        let highlighted = focused && i == wizard.button_cursor;
        let text = match button {
            ConfirmButton::Join => {
                format!("Join Mastodon as @{}@{}", wizard.username(), instance.name)
            }
            ConfirmButton::AnotherInstance => format!(
                "Show me another {} instance that mostly speaks {}",
                size, label
            ),
            ConfirmButton::BackUp => "Back up to change my selections".to_string(),
        };
        if *button == ConfirmButton::BackUp {
            doc.indented("or", 7, Style::default().fg(Color::DarkGray));
        }
        doc.button(highlighted, *button == ConfirmButton::Join, &text);
    }

    if let Some(ref notice) = wizard.notice {
        doc.blank();
        doc.indented(notice, 3, Style::default().fg(BRAND_GOLD));
    }
}

/// One radio-style row: focus marker, selection marker, label
fn choice_line(highlighted: bool, selected: bool, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            if highlighted { " > " } else { "   " },
            Style::default().fg(ACCENT_GOLD),
        ),
        Span::styled(
            if selected { "[*]" } else { "[ ]" },
            Style::default().fg(if selected {
                BRAND_GOLD
            } else {
                Color::DarkGray
            }),
        ),
        Span::styled(
            format!(" {}", label),
            Style::default()
                .fg(if selected || highlighted {
                    Color::White
                } else {
                    Color::DarkGray
                })
                .add_modifier(if selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
        ),
    ])
}

fn footer_line() -> Line<'static> {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };
    let label = |l: &'static str| Span::styled(l, Style::default().fg(Color::White));
    Line::from(vec![
        key("[Tab] ", BRAND_BLUE),
        label("Next  "),
        key("[Enter] ", ACCENT_GOLD),
        label("Confirm  "),
        key("[PgUp/PgDn] ", BRAND_BLUE),
        label("Scroll  "),
        key("[Esc] ", Color::Red),
        label("Quit"),
    ])
}

/// Accumulates document lines and anchor rows
struct DocBuilder {
    width: usize,
    lines: Vec<Line<'static>>,
    anchors: AnchorMap,
}

impl DocBuilder {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            lines: Vec::new(),
            anchors: AnchorMap::default(),
        }
    }

    /// Mark the next line as `anchor`
    fn anchor(&mut self, anchor: Anchor) {
        self.anchors.set(anchor, self.lines.len());
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn text(&mut self, text: &str, style: Style) {
        self.indented(text, 0, style);
    }

    /// Wrapped text with every row shifted right by `indent` columns
    fn indented(&mut self, text: &str, indent: usize, style: Style) {
        let pad = " ".repeat(indent);
        for row in wrap_text(text, self.width.saturating_sub(indent)) {
            self.lines
                .push(Line::from(Span::styled(format!("{pad}{row}"), style)));
        }
    }

    /// Wrapped button label; the focus marker sits on the first row only
    fn button(&mut self, highlighted: bool, primary: bool, text: &str) {
        let style = if highlighted {
            Style::default()
                .fg(Color::Black)
                .bg(if primary { BRAND_GOLD } else { BRAND_BLUE })
                .add_modifier(Modifier::BOLD)
        } else if primary {
            Style::default().fg(BRAND_GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(BRAND_BLUE)
        };
        for (i, row) in wrap_text(text, self.width.saturating_sub(7))
            .into_iter()
            .enumerate()
        {
            let marker = if i == 0 && highlighted { " > " } else { "   " };
            self.lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT_GOLD)),
                Span::raw("    "),
                Span::styled(row, style),
            ]));
        }
    }

    fn finish(self) -> WizardDocument {
        WizardDocument {
            lines: self.lines,
            anchors: self.anchors,
        }
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
            }
            row_width = 0;
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if row_width + ch_width > width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(ch);
                row_width += ch_width;
            }
            continue;
        }

        let needed = if row.is_empty() {
            word_width
        } else {
            row_width + 1 + word_width
        };
        if needed > width {
            rows.push(std::mem::take(&mut row));
            row.push_str(word);
            row_width = word_width;
        } else {
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(word);
            row_width = needed;
        }
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}
