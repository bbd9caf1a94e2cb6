//! User tab: company cards, notifications and the communication calendar

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::roster::{NoticeSeverity, COMPANIES, NOTIFICATIONS};
use crate::domain::CalendarDay;
use crate::ui::layout::{rect_contains, rect_inner};
use crate::ui::widgets::{month_grid, MonthGrid};

pub const NO_EVENTS: &str = "No events for this day";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserPanel {
    Calendar,
    Companies,
}

/// Component state of the User tab
#[derive(Debug, Clone)]
pub struct UserView {
    focus: UserPanel,
    /// Focused day cell; the displayed month is the cursor's month
    cursor: CalendarDay,
    company_cursor: usize,
}

#[derive(Debug, Clone, Copy)]
struct UserAreas {
    companies: Rect,
    notifications: Rect,
    calendar: Rect,
    events: Rect,
}

const CALENDAR_MIN_HEIGHT: u16 = 9;
const EVENTS_MIN_HEIGHT: u16 = 7;

/// Events panel height: every detail line plus borders, never squeezing the
/// calendar below its minimum.
fn events_height(area: Rect, detail_lines: usize) -> u16 {
    let wanted = u16::try_from(detail_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .max(EVENTS_MIN_HEIGHT);
    wanted.min(area.height.saturating_sub(CALENDAR_MIN_HEIGHT))
}

fn user_areas(area: Rect, detail_lines: usize) -> UserAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(CALENDAR_MIN_HEIGHT),
            Constraint::Length(events_height(area, detail_lines)),
        ])
        .split(columns[1]);

    UserAreas {
        companies: left[0],
        notifications: left[1],
        calendar: right[0],
        events: right[1],
    }
}

impl UserView {
    pub fn new(selected: CalendarDay) -> Self {
        Self {
            focus: UserPanel::Calendar,
            cursor: selected,
            company_cursor: 0,
        }
    }

    pub fn focus(&self) -> UserPanel {
        self.focus
    }

    pub fn cursor(&self) -> CalendarDay {
        self.cursor
    }

    pub fn displayed_month(&self) -> CalendarDay {
        self.cursor.first_of_month()
    }

    /// Move the cursor (and displayed month) without selecting.
    pub fn focus_day(&mut self, day: CalendarDay) {
        self.cursor = day;
    }

    fn handle_calendar_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.cursor = self.cursor.add_days(-1),
            KeyCode::Right | KeyCode::Char('l') => self.cursor = self.cursor.add_days(1),
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.add_days(-7),
            KeyCode::Down | KeyCode::Char('j') => self.cursor = self.cursor.add_days(7),
            KeyCode::PageUp | KeyCode::Char('[') => self.cursor = self.cursor.add_months(-1),
            KeyCode::PageDown | KeyCode::Char(']') => self.cursor = self.cursor.add_months(1),
            KeyCode::Home => self.cursor = self.cursor.first_of_month(),
            KeyCode::Char('t') => self.cursor = ctx.today,
            KeyCode::Enter | KeyCode::Char(' ') => return Action::SelectDate(self.cursor),
            _ => {}
        }
        Action::None
    }

    fn handle_company_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.company_cursor = self.company_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.company_cursor = (self.company_cursor + 1).min(COMPANIES.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(company) = COMPANIES.get(self.company_cursor) {
                    return Action::LogCommunication(company.name.to_string());
                }
            }
            _ => {}
        }
        Action::None
    }

    fn draw_companies(&self, f: &mut Frame, area: Rect) {
        let focused = self.focus == UserPanel::Companies;
        let items: Vec<ListItem> = COMPANIES
            .iter()
            .enumerate()
            .map(|(idx, company)| {
                let selected = focused && idx == self.company_cursor;
                let name_style = if selected {
                    Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(company.name, name_style),
                        Span::raw("  "),
                        Span::styled(
                            "[Log Communication]",
                            if selected {
                                Style::default().fg(Color::Black).bg(Color::Blue)
                            } else {
                                Style::default().fg(Color::Blue)
                            },
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  Last communication: {}", company.last_communication),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(panel_block("Communication Dashboard", focused));
        f.render_widget(list, area);
    }

    fn draw_notifications(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = NOTIFICATIONS
            .iter()
            .map(|notice| {
                let color = match notice.severity {
                    NoticeSeverity::Overdue => Color::Red,
                    NoticeSeverity::DueToday => Color::Yellow,
                };
                Line::from(Span::styled(notice.text, Style::default().fg(color)))
            })
            .collect();
        let paragraph = Paragraph::new(lines).block(panel_block("Notifications", false));
        f.render_widget(paragraph, area);
    }

    fn draw_calendar(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let month = self.displayed_month();
        let block = panel_block(
            &format!("Company Communication Calendar · {}", month.month_label()),
            self.focus == UserPanel::Calendar,
        );
        let inner = block.inner(area);
        f.render_widget(block, area);

        let counts = month_counts(month, ctx);
        let grid = MonthGrid::new(month, &counts, ctx.selected_date())
            .cursor(self.cursor)
            .today(ctx.today)
            .week_start(ctx.week_start);
        f.render_widget(grid, inner);
    }

    fn draw_events(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let selected = ctx.selected_date();
        let lines = day_detail_lines(selected, ctx);
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(paragraph, area);
    }
}

impl Module for UserView {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        if key.code == KeyCode::Char('c') {
            self.focus = match self.focus {
                UserPanel::Calendar => UserPanel::Companies,
                UserPanel::Companies => UserPanel::Calendar,
            };
            return Action::None;
        }
        match self.focus {
            UserPanel::Calendar => self.handle_calendar_key(key, ctx),
            UserPanel::Companies => self.handle_company_key(key),
        }
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, ctx: &Context) -> Action {
        let areas = user_areas(area, detail_line_count(ctx));
        if rect_contains(areas.calendar, col, row) {
            self.focus = UserPanel::Calendar;
            let grid = rect_inner(areas.calendar);
            if let Some(day) =
                month_grid::day_at(grid, self.displayed_month(), ctx.week_start, col, row)
            {
                self.cursor = day;
                return Action::SelectDate(day);
            }
            return Action::None;
        }
        if rect_contains(areas.companies, col, row) {
            self.focus = UserPanel::Companies;
            let inner = rect_inner(areas.companies);
            if rect_contains(inner, col, row) {
                // Two lines per company card
                let idx = usize::from((row - inner.y) / 2);
                if idx < COMPANIES.len() {
                    self.company_cursor = idx;
                    return Action::LogCommunication(COMPANIES[idx].name.to_string());
                }
            }
        }
        Action::None
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let areas = user_areas(area, detail_line_count(ctx));
        self.draw_companies(f, areas.companies);
        self.draw_notifications(f, areas.notifications);
        self.draw_calendar(f, areas.calendar, ctx);
        self.draw_events(f, areas.events, ctx);
    }

    fn hints(&self) -> &'static str {
        match self.focus {
            UserPanel::Calendar => "arrows/hjkl move  [ ] month  t today  Enter select  c companies",
            UserPanel::Companies => "j/k move  Enter log communication  c calendar",
        }
    }
}

/// Event count for every day of `month`, index = day - 1.
pub fn month_counts(month: CalendarDay, ctx: &Context) -> Vec<usize> {
    let month = month.first_of_month();
    (0..month.days_in_month())
        .map(|offset| ctx.events.count_on(month.add_days(i64::from(offset))))
        .collect()
}

fn detail_line_count(ctx: &Context) -> usize {
    ctx.events.count_on(ctx.selected_date()).max(1) + 1
}

/// Header plus one bullet per event on `day`, or the empty placeholder.
pub fn day_detail_lines(day: CalendarDay, ctx: &Context) -> Vec<Line<'static>> {
    let events = ctx.events.lookup(day);
    if events.is_empty() {
        return vec![Line::from(Span::styled(
            NO_EVENTS,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = vec![Line::from(Span::styled(
        format!("Events for {}:", day.long_label()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for event in events {
        lines.push(Line::from(vec![
            Span::raw("  • "),
            Span::styled(
                format!("{}:", event.company),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}", event.label)),
        ]));
    }
    lines
}

fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title.to_string())
}
