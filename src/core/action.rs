//! Actions that modules and commands return to the app

use crate::domain::{CalendarDay, DraftField, ExportFormat};

use super::Tab;

/// User intents produced by key handling, mouse clicks and commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch the active tab
    SelectTab(Tab),

    /// Activate a calendar day
    SelectDate(CalendarDay),

    /// Replace one draft field with its full new value
    EditDraft(DraftField, String),

    /// Submit the company draft
    SubmitDraft,

    /// Export trigger on the Reports tab
    ExportReport(ExportFormat),

    /// "Log Communication" on a company card
    LogCommunication(String),

    /// "Edit" on a communication method
    EditMethod(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Open the command line
    OpenCommand,

    /// Toggle the help overlay
    ToggleHelp,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
}
