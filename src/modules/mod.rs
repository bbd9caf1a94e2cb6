//! Tab modules
//!
//! Each module implements the Module trait and handles its own:
//! - Key input processing
//! - Mouse clicks inside the main area
//! - Rendering
//!
//! Modules:
//! - user: company cards, notifications, communication calendar
//! - admin: company draft form and communication methods
//! - reports: trends chart, method distribution, export triggers

pub mod admin;
pub mod reports;
pub mod user;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::core::{Action, Context, Module, Tab, TrackerState};

use self::admin::AdminView;
use self::reports::ReportView;
use self::user::UserView;

/// The mounted view for the active tab. Only one exists at a time.
#[derive(Debug, Clone)]
pub enum ActiveView {
    User(UserView),
    Admin(AdminView),
    Reports(ReportView),
}

impl ActiveView {
    /// Fresh component state for `tab`.
    pub fn mount(tab: Tab, state: &TrackerState) -> Self {
        match tab {
            Tab::User => ActiveView::User(UserView::new(state.selected_date)),
            Tab::Admin => ActiveView::Admin(AdminView::new()),
            Tab::Reports => ActiveView::Reports(ReportView::new()),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            ActiveView::User(_) => Tab::User,
            ActiveView::Admin(_) => Tab::Admin,
            ActiveView::Reports(_) => Tab::Reports,
        }
    }

    fn module(&self) -> &dyn Module {
        match self {
            ActiveView::User(view) => view,
            ActiveView::Admin(view) => view,
            ActiveView::Reports(view) => view,
        }
    }

    fn module_mut(&mut self) -> &mut dyn Module {
        match self {
            ActiveView::User(view) => view,
            ActiveView::Admin(view) => view,
            ActiveView::Reports(view) => view,
        }
    }
}

impl Module for ActiveView {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        self.module_mut().handle_key(key, ctx)
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, ctx: &Context) -> Action {
        self.module_mut().handle_click(area, col, row, ctx)
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        self.module().render(frame, area, ctx)
    }

    fn captures_input(&self) -> bool {
        self.module().captures_input()
    }

    fn hints(&self) -> &'static str {
        self.module().hints()
    }
}
