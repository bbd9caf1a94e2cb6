//! Module trait for the per-tab views

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};

/// A tab's view. Its fields are component-local state: they are dropped when
/// the tab is left and rebuilt when it is selected again.
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;

    /// Handle a left click at terminal position (col, row) inside `area`
    fn handle_click(&mut self, _area: Rect, _col: u16, _row: u16, _ctx: &Context) -> Action {
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);

    /// True while the module wants raw text input (global shortcuts are off)
    fn captures_input(&self) -> bool {
        false
    }

    /// Key hints for the footer
    fn hints(&self) -> &'static str {
        ""
    }
}
