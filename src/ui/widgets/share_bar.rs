//! Proportional share bars, one row per category

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const EIGHTHS: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

pub struct ShareBar<'a> {
    shares: &'a [(&'a str, u64)],
    colors: &'a [Color],
    label_width: u16,
}

impl<'a> ShareBar<'a> {
    pub fn new(shares: &'a [(&'a str, u64)]) -> Self {
        let label_width = shares
            .iter()
            .map(|(name, _)| name.chars().count() as u16)
            .max()
            .unwrap_or(0);
        Self {
            shares,
            colors: &[],
            label_width,
        }
    }

    pub fn colors(mut self, colors: &'a [Color]) -> Self {
        self.colors = colors;
        self
    }
}

impl<'a> Widget for ShareBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.shares.is_empty() {
            return;
        }

        let values: Vec<u64> = self.shares.iter().map(|(_, value)| *value).collect();
        let total: u64 = values.iter().sum();
        let percentages = share_percentages(&values);
        // label, space, bar, space, "100.0%"
        let bar_width = area.width.saturating_sub(self.label_width + 8) as usize;

        for (idx, (name, value)) in self.shares.iter().enumerate() {
            let y = area.y + idx as u16;
            if y >= area.y + area.height {
                break;
            }
            let color = self
                .colors
                .get(idx % self.colors.len().max(1))
                .copied()
                .unwrap_or(Color::Cyan);

            buf.set_stringn(area.x, y, name, self.label_width as usize, Style::default());

            let bar = bar_cells(*value, total, bar_width);
            let bar_x = area.x + self.label_width + 1;
            buf.set_string(bar_x, y, &bar, Style::default().fg(color));

            let pct = percentages[idx];
            let pct_x = bar_x + bar.chars().count() as u16 + 1;
            buf.set_string(pct_x, y, format!("{pct:.0}%"), Style::default().fg(Color::DarkGray));
        }
    }
}

/// Percentage of the total for each value, in input order. All zero when the
/// total is zero.
pub fn share_percentages(values: &[u64]) -> Vec<f64> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|value| *value as f64 * 100.0 / total as f64)
        .collect()
}

/// Bar for `value / total` scaled to `width` cells, with eighth-cell resolution.
pub fn bar_cells(value: u64, total: u64, width: usize) -> String {
    if total == 0 || width == 0 {
        return String::new();
    }
    let eighths = ((value.min(total) as f64 / total as f64) * (width * 8) as f64).round() as usize;
    let full = eighths / 8;
    let rest = eighths % 8;

    let mut bar: String = std::iter::repeat(EIGHTHS[7]).take(full).collect();
    if rest > 0 {
        bar.push(EIGHTHS[rest - 1]);
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar_cells(400, 1000, 10), "████");
        assert_eq!(bar_cells(1000, 1000, 3), "███");
        assert_eq!(bar_cells(1, 20, 1), "");
        assert_eq!(bar_cells(1, 8, 1), "▏");
        assert_eq!(bar_cells(5, 0, 10), "");
    }

    #[test]
    fn test_share_percentages() {
        let pct = share_percentages(&[400, 300, 200, 100]);
        assert_eq!(pct, vec![40.0, 30.0, 20.0, 10.0]);
        assert_eq!(share_percentages(&[0, 0]), vec![0.0, 0.0]);
        assert!(share_percentages(&[]).is_empty());
    }

    #[test]
    fn test_render_rows_and_percentages() {
        let shares = [("Email", 400), ("Visit", 100)];
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        ShareBar::new(&shares).render(area, &mut buf);

        let line = |y: u16| -> String {
            (0..area.width)
                .map(|x| buf.get(x, y).symbol().to_string())
                .collect()
        };
        assert!(line(0).starts_with("Email"));
        assert!(line(0).contains("80%"));
        assert!(line(1).starts_with("Visit"));
        assert!(line(1).contains("20%"));
    }
}
