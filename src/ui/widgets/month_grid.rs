//! Month grid widget for the calendar panel
//!
//! One header row of weekday names followed by up to six week rows. Days with
//! events are highlighted and carry their event count. The selected day is
//! underlined and keeps its event highlight; an empty selected day is cyan.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::config::WeekStart;
use crate::domain::CalendarDay;

const MONDAY_HEADERS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
const SUNDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub struct MonthGrid<'a> {
    month: CalendarDay,
    counts: &'a [usize],
    selected: CalendarDay,
    cursor: Option<CalendarDay>,
    today: Option<CalendarDay>,
    week_start: WeekStart,
}

impl<'a> MonthGrid<'a> {
    /// `counts[d - 1]` is the number of events on day `d` of `month`.
    pub fn new(month: CalendarDay, counts: &'a [usize], selected: CalendarDay) -> Self {
        Self {
            month: month.first_of_month(),
            counts,
            selected,
            cursor: None,
            today: None,
            week_start: WeekStart::Monday,
        }
    }

    pub fn cursor(mut self, cursor: CalendarDay) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn today(mut self, today: CalendarDay) -> Self {
        self.today = Some(today);
        self
    }

    pub fn week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    fn day_style(&self, day: CalendarDay, count: usize) -> Style {
        let mut style = Style::default().fg(Color::White);
        if self.today == Some(day) {
            style = style.fg(Color::LightCyan).add_modifier(Modifier::BOLD);
        }
        if count > 0 {
            style = style
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD);
        }
        if day == self.selected {
            if count == 0 {
                style = style.bg(Color::Cyan);
            }
            style = style
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if self.cursor == Some(day) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl<'a> Widget for MonthGrid<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geo = geometry(area);
        if geo.cell_width < 3 || area.height < 2 {
            return;
        }

        let headers = match self.week_start {
            WeekStart::Monday => MONDAY_HEADERS,
            WeekStart::Sunday => SUNDAY_HEADERS,
        };
        for (col, name) in headers.iter().enumerate() {
            let x = area.x + col as u16 * geo.cell_width;
            buf.set_string(x, area.y, format!("{name:>2}"), Style::default().fg(Color::DarkGray));
        }

        let blanks = leading_blanks(self.month, self.week_start);
        for day_num in 1..=self.month.days_in_month() {
            let Some(day) = CalendarDay::new(self.month.year(), self.month.month(), day_num) else {
                continue;
            };
            let slot = blanks + day_num - 1;
            let x = area.x + (slot % 7) as u16 * geo.cell_width;
            let y = area.y + 1 + (slot / 7) as u16 * geo.cell_height;
            if y >= area.y + area.height {
                break;
            }

            let count = self.counts.get(day_num as usize - 1).copied().unwrap_or(0);
            let style = self.day_style(day, count);
            let text = cell_text(day_num, count, geo.cell_width);

            let height = geo.cell_height.min(area.y + area.height - y);
            let fill = Rect {
                x,
                y,
                width: geo.cell_width.saturating_sub(1),
                height,
            };
            buf.set_style(fill, style);
            buf.set_stringn(x, y, text, fill.width as usize, style);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub cell_width: u16,
    pub cell_height: u16,
}

pub fn geometry(area: Rect) -> GridGeometry {
    GridGeometry {
        cell_width: area.width / 7,
        cell_height: (area.height.saturating_sub(1) / 6).clamp(1, 3),
    }
}

/// Empty cells before day 1 in the first week row.
pub fn leading_blanks(month: CalendarDay, week_start: WeekStart) -> u32 {
    let weekday = month.first_of_month().weekday();
    match week_start {
        WeekStart::Monday => weekday.num_days_from_monday(),
        WeekStart::Sunday => weekday.num_days_from_sunday(),
    }
}

/// Day under terminal position (col, row), if any.
pub fn day_at(
    area: Rect,
    month: CalendarDay,
    week_start: WeekStart,
    col: u16,
    row: u16,
) -> Option<CalendarDay> {
    let geo = geometry(area);
    if geo.cell_width == 0
        || col < area.x
        || col >= area.x + geo.cell_width * 7
        || row <= area.y
        || row >= area.y + area.height
    {
        return None;
    }
    let grid_col = u32::from((col - area.x) / geo.cell_width);
    let grid_row = u32::from((row - area.y - 1) / geo.cell_height);
    let slot = grid_row * 7 + grid_col;
    let blanks = leading_blanks(month, week_start);
    if slot < blanks {
        return None;
    }
    let day_num = slot - blanks + 1;
    if day_num > month.days_in_month() {
        return None;
    }
    CalendarDay::new(month.year(), month.month(), day_num)
}

fn cell_text(day_num: u32, count: usize, cell_width: u16) -> String {
    if count == 0 {
        format!("{day_num:>2}")
    } else if cell_width >= 7 {
        format!("{day_num:>2} ({count})")
    } else if cell_width >= 5 {
        format!("{day_num:>2}·{count}")
    } else {
        format!("{day_num:>2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    #[test]
    fn test_leading_blanks() {
        // 2025-01-01 is a Wednesday.
        assert_eq!(leading_blanks(day(2025, 1, 20), WeekStart::Monday), 2);
        assert_eq!(leading_blanks(day(2025, 1, 20), WeekStart::Sunday), 3);
        // 2025-09-01 is a Monday.
        assert_eq!(leading_blanks(day(2025, 9, 1), WeekStart::Monday), 0);
    }

    #[test]
    fn test_day_at_maps_cells() {
        let area = Rect::new(10, 5, 70, 13);
        let geo = geometry(area);
        assert_eq!(geo, GridGeometry { cell_width: 10, cell_height: 2 });

        let month = day(2025, 1, 1);
        // Header row is not a day.
        assert_eq!(day_at(area, month, WeekStart::Monday, 12, 5), None);
        // First row, third column: Wednesday the 1st.
        assert_eq!(day_at(area, month, WeekStart::Monday, 30, 6), Some(day(2025, 1, 1)));
        // Blank leading cell.
        assert_eq!(day_at(area, month, WeekStart::Monday, 10, 6), None);
        // Second week row, Friday column (index 4): the 10th.
        assert_eq!(day_at(area, month, WeekStart::Monday, 50, 8), Some(day(2025, 1, 10)));
        // Lower line of the same cell still maps to the 10th.
        assert_eq!(day_at(area, month, WeekStart::Monday, 59, 9), Some(day(2025, 1, 10)));
        // Outside the grid.
        assert_eq!(day_at(area, month, WeekStart::Monday, 85, 8), None);
    }

    #[test]
    fn test_render_marks_event_days() {
        let area = Rect::new(0, 0, 70, 13);
        let mut buf = Buffer::empty(area);
        let mut counts = vec![0; 31];
        counts[9] = 1;
        MonthGrid::new(day(2025, 1, 1), &counts, day(2025, 1, 3)).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf.get(x, 3).symbol().to_string())
            .collect();
        assert!(row.contains("10 (1)"), "row was {row:?}");
        assert_eq!(buf.get(40, 3).bg, Color::Yellow);
        assert!(!buf.get(40, 3).modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_selected_event_day_keeps_highlight() {
        let mut counts = vec![0; 31];
        counts[9] = 2;
        let month = day(2025, 1, 1);

        let on_event = MonthGrid::new(month, &counts, day(2025, 1, 10));
        let event_style = on_event.day_style(day(2025, 1, 10), 2);
        assert_eq!(event_style.bg, Some(Color::Yellow));
        assert!(event_style.add_modifier.contains(Modifier::UNDERLINED));

        let on_empty = MonthGrid::new(month, &counts, day(2025, 1, 11));
        let empty_style = on_empty.day_style(day(2025, 1, 11), 0);
        assert_eq!(empty_style.bg, Some(Color::Cyan));
        assert!(empty_style.add_modifier.contains(Modifier::UNDERLINED));

        assert_ne!(event_style, empty_style);
        // Unselected event day is not underlined.
        let unselected = on_empty.day_style(day(2025, 1, 10), 2);
        assert!(!unselected.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_cursor_reverses_cell() {
        let counts = vec![0; 31];
        let grid = MonthGrid::new(day(2025, 1, 1), &counts, day(2025, 1, 3)).cursor(day(2025, 1, 7));
        let style = grid.day_style(day(2025, 1, 7), 0);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
        assert!(!style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(5, 0, 10), " 5");
        assert_eq!(cell_text(10, 2, 10), "10 (2)");
        assert_eq!(cell_text(10, 2, 5), "10·2");
        assert_eq!(cell_text(10, 12, 5), "10·12");
        assert_eq!(cell_text(10, 2, 4), "10");
    }
}
