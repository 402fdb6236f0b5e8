use super::types::*;
use super::wizard::OnboardingWizard;

impl OnboardingWizard {
    /// Controls that can take focus right now, top to bottom
    pub fn focus_stops(&self) -> Vec<Focus> {
        let visible = self.visibility();
        let mut stops = vec![Focus::Username];
        if visible.language {
            stops.push(Focus::Language);
        }
        if visible.size {
            stops.push(Focus::Size);
        }
        if visible.confirmation {
            stops.push(Focus::Actions);
        }
        stops
    }

    pub fn is_focusable(&self, focus: Focus) -> bool {
        self.focus_stops().contains(&focus)
    }

    /// Move focus to the next visible control, wrapping around
    pub fn focus_next(&mut self) {
        let stops = self.focus_stops();
        let idx = stops.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = stops[(idx + 1) % stops.len()];
    }

    /// Move focus to the previous visible control, wrapping around
    pub fn focus_prev(&mut self) {
        let stops = self.focus_stops();
        let idx = stops.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = stops[(idx + stops.len() - 1) % stops.len()];
    }

    /// Focus the step a transition just revealed, if it really is visible
    pub(super) fn focus_revealed(&mut self, focus: Focus) {
        if self.is_focusable(focus) {
            self.focus = focus;
        }
    }
}
