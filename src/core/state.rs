//! The view model and its pure update function.
//!
//! [`reduce`] never performs I/O: it hands back the next state together with
//! the diagnostics and status notice the shell should emit.

use std::fmt;
use std::str::FromStr;

use serde_json::json;

use crate::diagnostics::Diagnostic;
use crate::domain::{CalendarDay, CompanyDraft};
use crate::error::TrackerError;

use super::{Action, NotifyLevel};

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    User,
    Admin,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::User, Tab::Admin, Tab::Reports];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::User => "User",
            Tab::Admin => "Admin",
            Tab::Reports => "Reports",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::User => '1',
            Tab::Admin => '2',
            Tab::Reports => '3',
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::User => 0,
            Tab::Admin => 1,
            Tab::Reports => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Tab {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" | "u" | "1" => Ok(Tab::User),
            "admin" | "a" | "2" => Ok(Tab::Admin),
            "reports" | "report" | "r" | "3" => Ok(Tab::Reports),
            other => Err(TrackerError::UnknownTab(other.to_string())),
        }
    }
}

/// Everything the dashboard remembers between input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerState {
    pub active_tab: Tab,
    pub selected_date: CalendarDay,
    pub draft: CompanyDraft,
}

impl TrackerState {
    pub fn new(today: CalendarDay) -> Self {
        Self {
            active_tab: Tab::User,
            selected_date: today,
            draft: CompanyDraft::default(),
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.active_tab = tab;
        self
    }
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: TrackerState,
    pub diagnostics: Vec<Diagnostic>,
    pub notice: Option<(String, NotifyLevel)>,
}

impl Transition {
    fn unchanged(state: &TrackerState) -> Self {
        Self {
            state: state.clone(),
            diagnostics: Vec::new(),
            notice: None,
        }
    }
}

/// old state + action -> new state. Shell-only actions leave the state as is.
pub fn reduce(state: &TrackerState, action: &Action) -> Transition {
    let mut next = Transition::unchanged(state);

    match action {
        Action::SelectTab(tab) => next.state.active_tab = *tab,
        Action::SelectDate(day) => next.state.selected_date = *day,
        Action::EditDraft(field, value) => {
            next.state.draft = state.draft.with_field(*field, value.as_str());
        }
        Action::SubmitDraft => {
            next.diagnostics
                .push(Diagnostic::new("company_added", state.draft.to_payload()));
            next.state.draft = CompanyDraft::default();
            let name = if state.draft.name.is_empty() {
                "(unnamed)"
            } else {
                state.draft.name.as_str()
            };
            next.notice = Some((format!("Company added: {name}"), NotifyLevel::Info));
        }
        Action::ExportReport(format) => {
            next.diagnostics.push(Diagnostic::new(
                "export_requested",
                json!({ "format": format.as_str() }),
            ));
            next.notice = Some((
                format!("Exporting data in {format} format"),
                NotifyLevel::Info,
            ));
        }
        Action::LogCommunication(company) => {
            next.diagnostics.push(Diagnostic::new(
                "communication_log_requested",
                json!({ "company": company }),
            ));
            next.notice = Some((
                format!("Log communication requested for {company}"),
                NotifyLevel::Info,
            ));
        }
        Action::EditMethod(method) => {
            next.diagnostics.push(Diagnostic::new(
                "method_edit_requested",
                json!({ "method": method }),
            ));
            next.notice = Some((format!("Edit requested for {method}"), NotifyLevel::Info));
        }
        Action::None
        | Action::Notify(_, _)
        | Action::OpenCommand
        | Action::ToggleHelp
        | Action::Quit => {}
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DraftField, ExportFormat};

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    fn state() -> TrackerState {
        TrackerState::new(day(2025, 1, 3))
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert_eq!(s.active_tab, Tab::User);
        assert_eq!(s.selected_date, day(2025, 1, 3));
        assert!(s.draft.is_blank());
    }

    #[test]
    fn test_select_tab_is_unconditional() {
        let s = state();
        for tab in Tab::ALL {
            let t = reduce(&s, &Action::SelectTab(tab));
            assert_eq!(t.state.active_tab, tab);
            assert!(t.diagnostics.is_empty());
        }
    }

    #[test]
    fn test_select_date_replaces_selection_only() {
        let s = state();
        let t = reduce(&s, &Action::SelectDate(day(2025, 1, 10)));
        assert_eq!(t.state.selected_date, day(2025, 1, 10));
        assert_eq!(t.state.active_tab, s.active_tab);
        assert_eq!(t.state.draft, s.draft);
    }

    #[test]
    fn test_edit_then_submit_resets_draft() {
        let mut s = state();
        for (field, value) in [
            (DraftField::Name, "Acme"),
            (DraftField::Location, "Oslo"),
            (DraftField::SocialProfile, "linkedin.com/acme"),
            (DraftField::Email, "a@acme.test"),
        ] {
            s = reduce(&s, &Action::EditDraft(field, value.to_string())).state;
        }
        assert_eq!(s.draft.location, "Oslo");

        let t = reduce(&s, &Action::SubmitDraft);
        assert!(t.state.draft.is_blank());
        assert_eq!(t.diagnostics.len(), 1);
        assert_eq!(t.diagnostics[0].event, "company_added");
        assert_eq!(t.diagnostics[0].payload["name"], "Acme");
        assert_eq!(t.diagnostics[0].payload["linkedin"], "linkedin.com/acme");
    }

    #[test]
    fn test_submit_blank_draft_is_accepted() {
        let t = reduce(&state(), &Action::SubmitDraft);
        assert!(t.state.draft.is_blank());
        assert_eq!(t.diagnostics.len(), 1);
    }

    #[test]
    fn test_export_emits_one_diagnostic_and_keeps_state() {
        let s = state();
        let t = reduce(&s, &Action::ExportReport(ExportFormat::Pdf));
        assert_eq!(t.state, s);
        assert_eq!(
            t.diagnostics,
            vec![Diagnostic::new("export_requested", json!({ "format": "pdf" }))]
        );
        assert_eq!(
            t.notice,
            Some(("Exporting data in pdf format".to_string(), NotifyLevel::Info))
        );
    }

    #[test]
    fn test_shell_actions_do_not_touch_state() {
        let s = state();
        for action in [Action::None, Action::Quit, Action::OpenCommand, Action::ToggleHelp] {
            let t = reduce(&s, &action);
            assert_eq!(t.state, s);
            assert!(t.diagnostics.is_empty());
            assert!(t.notice.is_none());
        }
    }

    #[test]
    fn test_tab_parse_and_cycle() {
        assert_eq!("Admin".parse::<Tab>().unwrap(), Tab::Admin);
        assert_eq!("3".parse::<Tab>().unwrap(), Tab::Reports);
        assert!("settings".parse::<Tab>().is_err());
        assert_eq!(Tab::Reports.next(), Tab::User);
        assert_eq!(Tab::User.prev(), Tab::Reports);
    }
}
