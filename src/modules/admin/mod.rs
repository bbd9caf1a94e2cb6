//! Admin tab: company draft form and communication method list

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::roster::COMMUNICATION_METHODS;
use crate::domain::DraftField;
use crate::ui::layout::{rect_contains, rect_inner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminFocus {
    Field(DraftField),
    AddButton,
    Method(usize),
}

impl AdminFocus {
    fn order() -> Vec<AdminFocus> {
        let mut order: Vec<AdminFocus> = DraftField::ALL
            .iter()
            .copied()
            .map(AdminFocus::Field)
            .collect();
        order.push(AdminFocus::AddButton);
        order.extend((0..COMMUNICATION_METHODS.len()).map(AdminFocus::Method));
        order
    }

    fn step(self, forward: bool) -> Self {
        let order = Self::order();
        let idx = order.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (idx + 1).min(order.len() - 1)
        } else {
            idx.saturating_sub(1)
        };
        order[next]
    }
}

/// Component state of the Admin tab
#[derive(Debug, Clone)]
pub struct AdminView {
    focus: AdminFocus,
    editing: bool,
}

#[derive(Debug, Clone, Copy)]
struct AdminAreas {
    form: Rect,
    fields: [Rect; 4],
    button: Rect,
    methods: Rect,
}

fn admin_areas(area: Rect) -> AdminAreas {
    let columns = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(4)])
        .split(area);

    let form_inner = rect_inner(columns[0]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(form_inner);
    let halves = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };
    let top = halves(rows[0]);
    let bottom = halves(rows[1]);

    AdminAreas {
        form: columns[0],
        fields: [top[0], top[1], bottom[0], bottom[1]],
        button: rows[2],
        methods: columns[1],
    }
}

impl AdminView {
    pub fn new() -> Self {
        Self {
            focus: AdminFocus::Field(DraftField::Name),
            editing: false,
        }
    }

    pub fn focus(&self) -> AdminFocus {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    fn activate(&mut self) -> Action {
        match self.focus {
            AdminFocus::Field(_) => {
                self.editing = true;
                Action::None
            }
            AdminFocus::AddButton => Action::SubmitDraft,
            AdminFocus::Method(idx) => COMMUNICATION_METHODS
                .get(idx)
                .map(|method| Action::EditMethod(method.to_string()))
                .unwrap_or(Action::None),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent, field: DraftField, ctx: &Context) -> Action {
        let current = ctx.state.draft.field(field);
        match key.code {
            KeyCode::Esc => {
                self.editing = false;
                Action::None
            }
            KeyCode::Enter => {
                self.editing = false;
                self.focus = self.focus.step(true);
                Action::None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = AdminFocus::Field(field.next());
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = AdminFocus::Field(field.prev());
                Action::None
            }
            KeyCode::Backspace => {
                let mut value = current.to_string();
                value.pop();
                Action::EditDraft(field, value)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::EditDraft(field, String::new())
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Action::None;
                }
                let mut value = current.to_string();
                value.push(ch);
                Action::EditDraft(field, value)
            }
            _ => Action::None,
        }
    }

    fn draw_form(&self, f: &mut Frame, areas: &AdminAreas, ctx: &Context) {
        let form_focused = !matches!(self.focus, AdminFocus::Method(_));
        f.render_widget(panel_block("Company Management", form_focused), areas.form);

        for (field, rect) in DraftField::ALL.iter().zip(areas.fields.iter()) {
            let focused = self.focus == AdminFocus::Field(*field);
            let value = ctx.state.draft.field(*field);
            let border = if focused && self.editing {
                Style::default().fg(Color::Yellow)
            } else if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let content = if value.is_empty() && !(focused && self.editing) {
                Span::styled(field.label(), Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(value.to_string())
            };
            let input = Paragraph::new(Line::from(content)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border),
            );
            f.render_widget(input, *rect);

            if focused && self.editing {
                let inner = rect_inner(*rect);
                let offset = (value.chars().count() as u16).min(inner.width.saturating_sub(1));
                f.set_cursor(inner.x + offset, inner.y);
            }
        }

        let button_style = if self.focus == AdminFocus::AddButton {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let button = Paragraph::new(Line::from(Span::styled("[ Add Company ]", button_style)))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(button, areas.button);
    }

    fn draw_methods(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = COMMUNICATION_METHODS
            .iter()
            .enumerate()
            .map(|(idx, method)| {
                let focused = self.focus == AdminFocus::Method(idx);
                let style = if focused {
                    Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let width = usize::from(rect_inner(area).width).saturating_sub(8);
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{method:<width$}"), style),
                    Span::styled(
                        "[Edit]",
                        if focused {
                            Style::default().fg(Color::Black).bg(Color::Gray)
                        } else {
                            Style::default().fg(Color::Gray)
                        },
                    ),
                ]))
            })
            .collect();
        let focused = matches!(self.focus, AdminFocus::Method(_));
        f.render_widget(
            List::new(items).block(panel_block("Communication Methods", focused)),
            area,
        );
    }
}

impl Default for AdminView {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for AdminView {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        if self.editing {
            if let AdminFocus::Field(field) = self.focus {
                return self.handle_edit_key(key, field, ctx);
            }
            self.editing = false;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.focus = self.focus.step(true),
            KeyCode::Up | KeyCode::Char('k') => self.focus = self.focus.step(false),
            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => return self.activate(),
            _ => {}
        }
        Action::None
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, _ctx: &Context) -> Action {
        let areas = admin_areas(area);
        for (field, rect) in DraftField::ALL.iter().zip(areas.fields.iter()) {
            if rect_contains(*rect, col, row) {
                self.focus = AdminFocus::Field(*field);
                self.editing = true;
                return Action::None;
            }
        }
        if rect_contains(areas.button, col, row) {
            self.focus = AdminFocus::AddButton;
            self.editing = false;
            return Action::SubmitDraft;
        }
        let inner = rect_inner(areas.methods);
        if rect_contains(inner, col, row) {
            let idx = usize::from(row - inner.y);
            if idx < COMMUNICATION_METHODS.len() {
                self.focus = AdminFocus::Method(idx);
                self.editing = false;
                return self.activate();
            }
        }
        Action::None
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let areas = admin_areas(area);
        self.draw_form(f, &areas, ctx);
        self.draw_methods(f, areas.methods);
    }

    fn captures_input(&self) -> bool {
        self.editing
    }

    fn hints(&self) -> &'static str {
        if self.editing {
            "type to edit  Tab next field  Enter done  Esc stop  Ctrl-u clear"
        } else {
            "j/k move  Enter edit/activate"
        }
    }
}

fn panel_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}
