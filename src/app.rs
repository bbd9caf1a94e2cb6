use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::config::WeekStart;
use crate::core::{
    parse_command, reduce, Action, Command, Context, Module, NotifyLevel, Tab, TrackerState,
    Transition,
};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::domain::{CalendarDay, CompanyDirectory, DiscardingDirectory, EventStore, ExportFormat};
use crate::modules::ActiveView;
use crate::ui;
use crate::ui::tabs::tab_at;

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: NotifyLevel,
    pub since: Instant,
}

/// The interactive shell around [`TrackerState`]: owns the mounted view, the
/// command line, the status message and the outbound collaborators.
pub struct App {
    pub state: TrackerState,
    pub events: EventStore,
    pub today: CalendarDay,
    pub week_start: WeekStart,
    pub view: ActiveView,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    sink: Box<dyn DiagnosticSink>,
    directory: Box<dyn CompanyDirectory>,
}

impl App {
    pub fn new(today: CalendarDay, events: EventStore, sink: Box<dyn DiagnosticSink>) -> Self {
        let state = TrackerState::new(today);
        let view = ActiveView::mount(state.active_tab, &state);
        Self {
            state,
            events,
            today,
            week_start: WeekStart::default(),
            view,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            help_open: false,
            should_quit: false,
            sink,
            directory: Box::new(DiscardingDirectory),
        }
    }

    /// Seeded events, tracing sink
    pub fn with_defaults(today: CalendarDay) -> Self {
        Self::new(today, EventStore::seeded(), Box::new(TracingSink))
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_directory(mut self, directory: Box<dyn CompanyDirectory>) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.apply_action(Action::SelectTab(tab));
        self
    }

    pub fn context(&self) -> Context<'_> {
        Context::new(&self.state, &self.events, self.today, self.week_start)
    }

    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: NotifyLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, NotifyLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    /// Run one action through the shell. State changes go through [`reduce`];
    /// the resulting diagnostics are forwarded to the sink.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::OpenCommand => self.enter_command(),
            Action::Notify(text, level) => self.set_status(text, level),
            action => self.dispatch(&action),
        }
    }

    fn dispatch(&mut self, action: &Action) {
        let Transition {
            state,
            diagnostics,
            notice,
        } = reduce(&self.state, action);

        for diagnostic in &diagnostics {
            self.sink.log(diagnostic.event, &diagnostic.payload);
        }

        // self.state still holds the submitted draft here
        if matches!(action, Action::SubmitDraft) {
            match self.directory.add_company(&self.state.draft) {
                Ok(()) => {}
                Err(never) => match never {},
            }
        }

        self.state = state;

        if self.view.tab() != self.state.active_tab {
            tracing::debug!(tab = %self.state.active_tab, "tab selected");
            self.view = ActiveView::mount(self.state.active_tab, &self.state);
        } else if let (Action::SelectDate(day), ActiveView::User(view)) =
            (action, &mut self.view)
        {
            view.focus_day(*day);
        }

        if let Some((text, level)) = notice {
            self.set_status(text, level);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.help_open {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.help_open = false;
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Command => self.handle_command_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if !self.view.captures_input() {
            let global = match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ToggleHelp),
                KeyCode::Char(':') => Some(Action::OpenCommand),
                KeyCode::Tab => Some(Action::SelectTab(self.state.active_tab.next())),
                KeyCode::BackTab => Some(Action::SelectTab(self.state.active_tab.prev())),
                KeyCode::Char(ch) => Tab::ALL
                    .iter()
                    .find(|tab| tab.shortcut() == ch)
                    .map(|tab| Action::SelectTab(*tab)),
                _ => None,
            };
            if let Some(action) = global {
                self.apply_action(action);
                return;
            }
        }

        let ctx = Context::new(&self.state, &self.events, self.today, self.week_start);
        let action = self.view.handle_key(key, &ctx);
        self.apply_action(action);
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.exit_command(),
            KeyCode::Enter => self.apply_command(),
            KeyCode::Backspace => {
                self.command.input.pop();
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return;
                }
                self.command.input.push(ch);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, size: Rect) {
        if self.help_open || self.input_mode == InputMode::Command {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.handle_click(size, mouse.column, mouse.row);
        }
    }

    /// Left click at (col, row) on a terminal of `size`
    pub fn handle_click(&mut self, size: Rect, col: u16, row: u16) {
        let areas = ui::layout::areas(size);
        if let Some(tab) = tab_at(areas.tab_bar, col, row) {
            self.apply_action(Action::SelectTab(tab));
            return;
        }
        if ui::layout::rect_contains(areas.main, col, row) {
            let ctx = Context::new(&self.state, &self.events, self.today, self.week_start);
            let action = self.view.handle_click(areas.main, col, row, &ctx);
            self.apply_action(action);
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        let command = parse_command(&input);
        self.command.last = Some(input);
        let action = self.execute_command(&command);
        self.apply_action(action);
    }

    pub fn execute_command(&self, command: &Command) -> Action {
        match command {
            Command::User => Action::SelectTab(Tab::User),
            Command::Admin => Action::SelectTab(Tab::Admin),
            Command::Reports => Action::SelectTab(Tab::Reports),
            Command::Goto(None) => {
                Action::Notify("Usage: goto <YYYY-MM-DD>".to_string(), NotifyLevel::Warn)
            }
            Command::Goto(Some(raw)) => match CalendarDay::parse(raw) {
                Ok(day) => Action::SelectDate(day),
                Err(err) => Action::Notify(err.to_string(), NotifyLevel::Warn),
            },
            Command::Today => Action::SelectDate(self.today),
            Command::Export(None) => {
                Action::Notify("Usage: export <csv|pdf>".to_string(), NotifyLevel::Warn)
            }
            Command::Export(Some(raw)) => match raw.parse::<ExportFormat>() {
                Ok(format) => Action::ExportReport(format),
                Err(err) => Action::Notify(err.to_string(), NotifyLevel::Warn),
            },
            Command::Add => Action::SubmitDraft,
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(raw) => {
                Action::Notify(format!("Unknown command: {raw}"), NotifyLevel::Warn)
            }
        }
    }
}
