use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod tabs;
pub mod widgets;

use crate::app::{App, InputMode};
use crate::core::{command_hint, Module, NotifyLevel};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());
    let ctx = app.context();

    draw_header(f, areas.header, areas.title, areas.tab_bar, app);
    app.view.render(f, areas.main, &ctx);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, title_area: Rect, tab_area: Rect, app: &App) {
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
        area,
    );

    let title = Paragraph::new(Line::from(Span::styled(
        "Communication Tracker",
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Left);
    f.render_widget(title, title_area);

    tabs::draw_tab_bar(f, tab_area, app.active_tab());
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected_date;
    let events = app.events.count_on(selected);
    let line = Line::from(vec![
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.active_tab())),
        Span::styled("Date ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", selected.long_label())),
        Span::styled("Events ", Style::default().fg(Color::DarkGray)),
        Span::raw(events.to_string()),
    ]);

    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input)
                .unwrap_or("user | admin | reports | goto <date> | export <fmt> | add");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(
                    format!("  {hint_text}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    NotifyLevel::Info => Color::LightGreen,
                    NotifyLevel::Warn => Color::LightYellow,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                Line::from(vec![
                    Span::styled(app.view.hints(), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        "  1-3 tabs  : command  ? help  q quit",
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = layout::centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Global"),
        Line::from("  1 / 2 / 3  User / Admin / Reports"),
        Line::from("  Tab        Next tab (Shift-Tab: previous)"),
        Line::from("  :          Command line"),
        Line::from("  ?          Toggle help"),
        Line::from("  q / Ctrl-C Quit"),
        Line::from("  Mouse      Click tabs and calendar days"),
        Line::from(""),
        Line::from("User"),
        Line::from("  hjkl       Move day cursor"),
        Line::from("  [ / ]      Previous / next month"),
        Line::from("  Enter      Select day"),
        Line::from("  c          Toggle companies / calendar"),
        Line::from(""),
        Line::from("Admin"),
        Line::from("  j / k      Move focus"),
        Line::from("  Enter      Edit field / add company"),
        Line::from("  Esc        Stop editing"),
        Line::from(""),
        Line::from("Reports"),
        Line::from("  c / p      Export CSV / PDF"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :goto 2025-01-10   :today   :export csv   :add"),
        Line::from(""),
        Line::from(format!("Active tab: {}", app.active_tab())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}
