//! Survey chart card widget.
//!
//! Every chart renders into a fixed-height card so chart rows line up:
//! title, a seven-row plot and a short summary.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::core::chart::{BarLayout, ChartConfig, ChartKind};

use super::theme::Theme;
use super::wrap;

/// Outer height of a chart card, borders included.
pub const CHART_CARD_HEIGHT: u16 = 13;
const PLOT_ROWS: u16 = 7;
const SUMMARY_ROWS: u16 = 3;

const HORIZONTAL_EIGHTHS: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
const VERTICAL_EIGHTHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub struct ChartCard<'a> {
    pub chart: &'a ChartConfig,
    pub theme: &'a Theme,
}

impl Widget for ChartCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = Theme::rgb(self.chart.base_color().rgb());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 4 || inner.height < 2 {
            return;
        }

        let title = wrap::truncate(self.chart.title, inner.width as usize);
        buf.set_string(inner.x, inner.y, title, self.theme.heading_style());

        let plot_h = PLOT_ROWS.min(inner.height.saturating_sub(1));
        let plot = Rect::new(inner.x, inner.y + 1, inner.width, plot_h);
        match (self.chart.kind, self.chart.layout) {
            (ChartKind::Bar, BarLayout::Rows) => self.render_rows(plot, buf),
            (ChartKind::Bar, BarLayout::Columns) => self.render_columns(plot, buf, false),
            (ChartKind::Area, _) => self.render_columns(plot, buf, true),
            (ChartKind::Line, _) => self.render_line(plot, buf),
            (ChartKind::Pie, _) => self.render_pie(plot, buf),
        }

        let summary_top = plot.y + plot.height;
        let summary_h = SUMMARY_ROWS.min((inner.y + inner.height).saturating_sub(summary_top));
        if let Some(summary) = self.chart.summary {
            let lines = wrap::wrap(summary, inner.width as usize);
            for (i, line) in lines.iter().take(summary_h as usize).enumerate() {
                let text = if i + 1 == summary_h as usize && lines.len() > summary_h as usize {
                    wrap::truncate(&format!("{line} …"), inner.width as usize)
                } else {
                    line.clone()
                };
                buf.set_string(inner.x, summary_top + i as u16, text, self.theme.muted_style());
            }
        }
    }
}

impl ChartCard<'_> {
    fn point_style(&self, index: usize) -> Style {
        Style::default().fg(Theme::rgb(self.chart.point_color(index).rgb()))
    }

    /// Horizontal bars: `label ████▌ 45.2%`, one point per row.
    fn render_rows(&self, plot: Rect, buf: &mut Buffer) {
        let max = self.chart.max_value();
        let label_w = self
            .chart
            .data
            .iter()
            .map(|p| wrap::width(p.name))
            .max()
            .unwrap_or(0)
            .min(plot.width as usize / 3);
        let value_w = 7usize;
        let bar_w = (plot.width as usize).saturating_sub(label_w + value_w + 1);

        for (i, point) in self.chart.data.iter().take(plot.height as usize).enumerate() {
            let y = plot.y + i as u16;
            let label = format!("{:<label_w$}", wrap::truncate(point.name, label_w));
            buf.set_string(plot.x, y, label, self.theme.text_style());

            let bar = horizontal_bar(point.value, max, bar_w);
            let bar_x = plot.x + label_w as u16 + 1;
            buf.set_string(bar_x, y, &bar, self.point_style(i));
            let value_x = bar_x + wrap::width(&bar) as u16;
            buf.set_string(value_x, y, format!(" {}", format_pct(point.value)), self.theme.muted_style());
        }
    }

    /// Vertical bars (or a filled area): values on top, labels below.
    fn render_columns(&self, plot: Rect, buf: &mut Buffer, filled: bool) {
        let n = self.chart.data.len();
        if n == 0 || plot.height < 3 {
            return;
        }
        let slot_w = (plot.width as usize / n).max(1);
        let bar_w = if filled { slot_w } else { slot_w.saturating_sub(1).clamp(1, 6) };
        let bar_rows = plot.height.saturating_sub(2);
        let max = self.chart.max_value();

        for (i, point) in self.chart.data.iter().enumerate() {
            let x = plot.x + (i * slot_w) as u16;
            if x >= plot.x + plot.width {
                break;
            }
            let style = self.point_style(i);
            let eighths = scaled(point.value, max, bar_rows as usize * 8);
            for row in 0..bar_rows {
                let y = plot.y + plot.height - 2 - row;
                let filled_here = eighths.saturating_sub(row as usize * 8).min(8);
                if filled_here == 0 {
                    continue;
                }
                let ch = VERTICAL_EIGHTHS[filled_here - 1];
                for dx in 0..bar_w as u16 {
                    if let Some(cell) = buf.cell_mut((x + dx, y)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }
            let value = wrap::truncate(&format_pct(point.value), slot_w);
            buf.set_string(x, plot.y, value, self.theme.muted_style());
            let label = wrap::truncate(point.name, slot_w.saturating_sub(1).max(1));
            buf.set_string(x, plot.y + plot.height - 1, label, self.theme.text_style());
        }
    }

    /// Markers joined left to right, one slot per point.
    fn render_line(&self, plot: Rect, buf: &mut Buffer) {
        let n = self.chart.data.len();
        if n == 0 || plot.height < 3 {
            return;
        }
        let slot_w = (plot.width as usize / n).max(1);
        let bar_rows = plot.height.saturating_sub(2) as usize;
        let max = self.chart.max_value();
        for (i, point) in self.chart.data.iter().enumerate() {
            let x = plot.x + (i * slot_w) as u16;
            let level = scaled(point.value, max, bar_rows.saturating_sub(1));
            let y = plot.y + plot.height - 2 - level as u16;
            buf.set_string(x, y, "●", self.point_style(i).add_modifier(Modifier::BOLD));
            buf.set_string(x, plot.y + plot.height - 1, wrap::truncate(point.name, slot_w.saturating_sub(1).max(1)), self.theme.text_style());
        }
    }

    /// A proportional strip followed by a legend with shares.
    fn render_pie(&self, plot: Rect, buf: &mut Buffer) {
        let shares = self.chart.shares();
        let widths = strip_widths(&shares, plot.width as usize);
        let mut x = plot.x;
        for (i, w) in widths.iter().enumerate() {
            let segment = "█".repeat(*w);
            buf.set_string(x, plot.y, &segment, self.point_style(i));
            x += *w as u16;
        }

        let legend_rows = plot.height.saturating_sub(2) as usize;
        for (i, (point, share)) in self.chart.data.iter().zip(&shares).take(legend_rows).enumerate() {
            let y = plot.y + 2 + i as u16;
            buf.set_string(plot.x, y, "■ ", self.point_style(i));
            let name_w = (plot.width as usize).saturating_sub(10);
            let name = format!("{:<name_w$}", wrap::truncate(point.name, name_w));
            buf.set_string(plot.x + 2, y, name, self.theme.text_style());
            buf.set_string(
                plot.x + 2 + name_w as u16,
                y,
                format!("{:>7}", format_pct(share * 100.0)),
                self.theme.muted_style(),
            );
        }
    }
}

/// `value / max` of `units`, rounded. Zero when `max` is not positive.
fn scaled(value: f64, max: f64, units: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * units as f64).round() as usize
}

/// A horizontal bar of at most `width` cells with eighth-cell precision.
pub fn horizontal_bar(value: f64, max: f64, width: usize) -> String {
    let eighths = scaled(value, max, width * 8);
    let mut bar = "█".repeat(eighths / 8);
    if eighths % 8 > 0 {
        bar.push(HORIZONTAL_EIGHTHS[eighths % 8 - 1]);
    }
    bar
}

/// Split `width` cells among `shares` so the segments sum to `width`
/// (largest remainder). Empty when every share is zero.
pub fn strip_widths(shares: &[f64], width: usize) -> Vec<usize> {
    let total: f64 = shares.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let exact: Vec<f64> = shares.iter().map(|s| s / total * width as f64).collect();
    let mut widths: Vec<usize> = exact.iter().map(|e| e.floor() as usize).collect();
    let mut remaining = width - widths.iter().sum::<usize>().min(width);
    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    for i in order {
        if remaining == 0 {
            break;
        }
        widths[i] += 1;
        remaining -= 1;
    }
    widths
}

pub fn format_pct(value: f64) -> String {
    if (value - value.round()).abs() < 0.05 {
        format!("{:.0}%", value.round())
    } else {
        format!("{value:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::Report;

    fn render(chart: &ChartConfig, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, CHART_CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        ChartCard { chart, theme: &Theme::default() }.render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn bar_lengths_scale_to_the_maximum() {
        assert_eq!(horizontal_bar(50.0, 100.0, 10), "█████");
        assert_eq!(horizontal_bar(100.0, 100.0, 4), "████");
        assert_eq!(horizontal_bar(0.0, 100.0, 4), "");
        assert_eq!(horizontal_bar(1.0, 8.0, 1), "▏");
    }

    #[test]
    fn strip_uses_the_full_width() {
        let widths = strip_widths(&[0.7308, 0.2692], 40);
        assert_eq!(widths.iter().sum::<usize>(), 40);
        assert_eq!(widths, vec![29, 11]);
        assert!(strip_widths(&[0.0, 0.0], 10).is_empty());
    }

    #[test]
    fn percentages_drop_needless_decimals() {
        assert_eq!(format_pct(25.0), "25%");
        assert_eq!(format_pct(45.19), "45.2%");
    }

    #[test]
    fn every_builtin_chart_renders_title_and_summary() {
        let report = Report::builtin();
        for chart in report.charts_2024.iter().chain(&report.charts_2025) {
            let buf = render(chart, 48);
            let title_row = row_text(&buf, 1);
            let expected: String = chart.title.chars().take(10).collect();
            assert!(title_row.contains(&expected), "{}: {title_row}", chart.id);
            let summary_row = row_text(&buf, 1 + 1 + PLOT_ROWS);
            assert!(!summary_row.trim_matches(|c| c == '│' || c == ' ').is_empty(), "{}", chart.id);
        }
    }

    #[test]
    fn row_chart_lists_every_point() {
        let report = Report::builtin();
        let chart = &report.charts_2024[5];
        let buf = render(chart, 60);
        for (i, point) in chart.data.iter().enumerate() {
            assert!(row_text(&buf, 2 + i as u16).contains(point.name));
        }
    }
}
