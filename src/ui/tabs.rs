//! Tab bar rendering and hit-testing

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Tabs as RataTabs;
use ratatui::Frame;

use crate::core::Tab;

const DIVIDER: &str = "│";

fn tab_label(tab: Tab) -> String {
    format!("{}:{}", tab.shortcut(), tab.title())
}

/// Draw the tab bar
pub fn draw_tab_bar(f: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", tab.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let tabs = RataTabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(DIVIDER);

    f.render_widget(tabs, area);
}

/// Tab whose title is under column `col`. Mirrors the widget's layout: one
/// padding cell on each side of every title, a one-cell divider between.
pub fn tab_at(area: Rect, col: u16, row: u16) -> Option<Tab> {
    if row < area.y || row >= area.y + area.height.max(1) || col < area.x {
        return None;
    }
    let mut x = area.x;
    for tab in Tab::ALL {
        let width = tab_label(tab).chars().count() as u16 + 2;
        if col >= x && col < x + width {
            return Some(tab);
        }
        x += width + DIVIDER.chars().count() as u16;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_at() {
        let area = Rect::new(10, 1, 60, 1);
        // " 1:User " occupies 10..18, divider at 18, " 2:Admin " 19..28.
        assert_eq!(tab_at(area, 10, 1), Some(Tab::User));
        assert_eq!(tab_at(area, 17, 1), Some(Tab::User));
        assert_eq!(tab_at(area, 18, 1), None);
        assert_eq!(tab_at(area, 20, 1), Some(Tab::Admin));
        assert_eq!(tab_at(area, 30, 1), Some(Tab::Reports));
        assert_eq!(tab_at(area, 55, 1), None);
        assert_eq!(tab_at(area, 12, 0), None);
    }
}
