//! Reports tab: communication trends and method distribution

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::report::{trend_peak, COMMUNICATION_TRENDS, METHOD_DISTRIBUTION};
use crate::domain::{ExportFormat, TrendSeries};
use crate::ui::layout::rect_contains;
use crate::ui::widgets::ShareBar;

pub const SERIES_COLORS: [Color; 3] = [
    Color::Rgb(0x88, 0x84, 0xd8),
    Color::Rgb(0x82, 0xca, 0x9d),
    Color::Rgb(0xff, 0xc6, 0x58),
];

pub const SHARE_COLORS: [Color; 4] = [
    Color::Rgb(0x88, 0x84, 0xd8),
    Color::Rgb(0x82, 0xca, 0x9d),
    Color::Rgb(0xff, 0xc6, 0x58),
    Color::Rgb(0xff, 0x73, 0x00),
];

const CSV_LABEL: &str = "[ CSV ]";
const PDF_LABEL: &str = "[ PDF ]";

/// Component state of the Reports tab
#[derive(Debug, Clone)]
pub struct ReportView {
    export: ExportFormat,
}

#[derive(Debug, Clone, Copy)]
struct ReportAreas {
    header: Rect,
    csv_button: Rect,
    pdf_button: Rect,
    trends: Rect,
    distribution: Rect,
}

fn report_areas(area: Rect) -> ReportAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(METHOD_DISTRIBUTION.len() as u16 + 2),
        ])
        .split(area);

    let header = rows[0];
    // Buttons sit right-aligned on the header's inner row.
    let button_y = header.y + 1;
    let pdf_x = (header.x + header.width).saturating_sub(PDF_LABEL.len() as u16 + 2);
    let csv_x = pdf_x.saturating_sub(CSV_LABEL.len() as u16 + 1);

    ReportAreas {
        header,
        csv_button: Rect::new(csv_x, button_y, CSV_LABEL.len() as u16, 1),
        pdf_button: Rect::new(pdf_x, button_y, PDF_LABEL.len() as u16, 1),
        trends: rows[1],
        distribution: rows[2],
    }
}

impl ReportView {
    pub fn new() -> Self {
        Self {
            export: ExportFormat::Csv,
        }
    }

    pub fn export_focus(&self) -> ExportFormat {
        self.export
    }

    fn draw_header(&self, f: &mut Frame, areas: &ReportAreas) {
        let title = Paragraph::new(Line::from(Span::styled(
            "Communication Analytics",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(title, areas.header);

        for (format, label, rect) in [
            (ExportFormat::Csv, CSV_LABEL, areas.csv_button),
            (ExportFormat::Pdf, PDF_LABEL, areas.pdf_button),
        ] {
            let style = if format == self.export {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            f.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        }
    }

    fn draw_trends(&self, f: &mut Frame, area: Rect) {
        let series: Vec<(TrendSeries, Vec<(f64, f64)>)> = TrendSeries::ALL
            .iter()
            .map(|s| (*s, s.points(&COMMUNICATION_TRENDS)))
            .collect();

        let datasets: Vec<Dataset> = series
            .iter()
            .zip(SERIES_COLORS.iter())
            .map(|((s, points), color)| {
                Dataset::default()
                    .name(s.title())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(*color))
                    .data(points)
            })
            .collect();

        let peak = f64::from(trend_peak(&COMMUNICATION_TRENDS));
        let y_max = (peak / 25.0).ceil() * 25.0;
        let x_labels: Vec<Span> = COMMUNICATION_TRENDS
            .iter()
            .map(|point| Span::raw(point.month))
            .collect();
        let y_labels: Vec<Span> = [0.0, y_max / 2.0, y_max]
            .iter()
            .map(|v| Span::raw(format!("{v:.0}")))
            .collect();

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("Communication Trends"),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, (COMMUNICATION_TRENDS.len() - 1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );
        f.render_widget(chart, area);
    }

    fn draw_distribution(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Communication Methods Distribution");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let shares: Vec<(&str, u64)> = METHOD_DISTRIBUTION
            .iter()
            .map(|share| (share.name, u64::from(share.value)))
            .collect();
        f.render_widget(ShareBar::new(&shares).colors(&SHARE_COLORS), inner);
    }
}

impl Default for ReportView {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ReportView {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Char('c') => Action::ExportReport(ExportFormat::Csv),
            KeyCode::Char('p') => Action::ExportReport(ExportFormat::Pdf),
            KeyCode::Left | KeyCode::Char('h') => {
                self.export = ExportFormat::Csv;
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.export = ExportFormat::Pdf;
                Action::None
            }
            KeyCode::Enter => Action::ExportReport(self.export),
            _ => Action::None,
        }
    }

    fn handle_click(&mut self, area: Rect, col: u16, row: u16, _ctx: &Context) -> Action {
        let areas = report_areas(area);
        for (format, rect) in [
            (ExportFormat::Csv, areas.csv_button),
            (ExportFormat::Pdf, areas.pdf_button),
        ] {
            if rect_contains(rect, col, row) {
                self.export = format;
                return Action::ExportReport(format);
            }
        }
        Action::None
    }

    fn render(&self, f: &mut Frame, area: Rect, _ctx: &Context) {
        let areas = report_areas(area);
        self.draw_header(f, &areas);
        self.draw_trends(f, areas.trends);
        self.draw_distribution(f, areas.distribution);
    }

    fn hints(&self) -> &'static str {
        "c export CSV  p export PDF  ←/→ pick  Enter export"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeekStart;
    use crate::core::TrackerState;
    use crate::domain::{CalendarDay, EventStore};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_export_keys() {
        let state = TrackerState::new(CalendarDay::new(2025, 1, 3).unwrap());
        let events = EventStore::seeded();
        let ctx = Context::new(&state, &events, state.selected_date, WeekStart::Monday);
        let mut view = ReportView::new();

        assert_eq!(
            view.handle_key(key(KeyCode::Char('c')), &ctx),
            Action::ExportReport(ExportFormat::Csv)
        );
        assert_eq!(
            view.handle_key(key(KeyCode::Char('p')), &ctx),
            Action::ExportReport(ExportFormat::Pdf)
        );
        assert_eq!(view.handle_key(key(KeyCode::Right), &ctx), Action::None);
        assert_eq!(
            view.handle_key(key(KeyCode::Enter), &ctx),
            Action::ExportReport(ExportFormat::Pdf)
        );
    }

    #[test]
    fn test_click_export_buttons() {
        let state = TrackerState::new(CalendarDay::new(2025, 1, 3).unwrap());
        let events = EventStore::seeded();
        let ctx = Context::new(&state, &events, state.selected_date, WeekStart::Monday);
        let mut view = ReportView::new();
        let area = Rect::new(0, 3, 100, 30);
        let areas = report_areas(area);

        assert_eq!(
            view.handle_click(area, areas.pdf_button.x, areas.pdf_button.y, &ctx),
            Action::ExportReport(ExportFormat::Pdf)
        );
        assert_eq!(view.export_focus(), ExportFormat::Pdf);
        assert_eq!(
            view.handle_click(area, areas.csv_button.x + 2, areas.csv_button.y, &ctx),
            Action::ExportReport(ExportFormat::Csv)
        );
        assert_eq!(view.handle_click(area, 1, 20, &ctx), Action::None);
    }
}
