//! Survey chart model.
//!
//! Values are percentages of respondents. Rendering lives in `ui::chart`.

use super::cards::Rgb;

/// Named series colours shared by every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Red,
    Orange,
    Amber,
    Lime,
    Blue,
    Indigo,
    Slate,
}

impl SeriesColor {
    /// Fallback cycle for points without an explicit colour.
    pub const CYCLE: &[SeriesColor] = &[
        SeriesColor::Red,
        SeriesColor::Orange,
        SeriesColor::Amber,
        SeriesColor::Lime,
        SeriesColor::Blue,
        SeriesColor::Indigo,
        SeriesColor::Slate,
    ];

    pub fn rgb(self) -> Rgb {
        match self {
            Self::Red => Rgb::from_hex(0xDC2626),
            Self::Orange => Rgb::from_hex(0xF97316),
            Self::Amber => Rgb::from_hex(0xF59E0B),
            Self::Lime => Rgb::from_hex(0x84CC16),
            Self::Blue => Rgb::from_hex(0x3B82F6),
            Self::Indigo => Rgb::from_hex(0x6366F1),
            Self::Slate => Rgb::from_hex(0x94A3B8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
    Area,
}

/// Bar orientation. `Columns` are vertical bars, `Rows` horizontal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarLayout {
    Columns,
    #[default]
    Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub name: &'static str,
    pub value: f64,
    pub color: Option<SeriesColor>,
}

impl DataPoint {
    pub const fn new(name: &'static str, value: f64) -> Self {
        Self { name, value, color: None }
    }

    pub const fn colored(name: &'static str, value: f64, color: SeriesColor) -> Self {
        Self {
            name,
            value,
            color: Some(color),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub layout: BarLayout,
    pub data: Vec<DataPoint>,
    pub summary: Option<&'static str>,
}

impl ChartConfig {
    /// Colour of point `index`: its own, else the fallback cycle.
    pub fn point_color(&self, index: usize) -> SeriesColor {
        self.data
            .get(index)
            .and_then(|p| p.color)
            .unwrap_or(SeriesColor::CYCLE[index % SeriesColor::CYCLE.len()])
    }

    /// Accent used for the card chrome.
    pub fn base_color(&self) -> SeriesColor {
        match self.kind {
            ChartKind::Pie => SeriesColor::Orange,
            ChartKind::Bar => SeriesColor::Blue,
            ChartKind::Line | ChartKind::Area => SeriesColor::Red,
        }
    }

    pub fn total(&self) -> f64 {
        self.data.iter().map(|p| p.value).sum()
    }

    pub fn max_value(&self) -> f64 {
        self.data.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    /// The largest slice / bar, first one on ties.
    pub fn peak(&self) -> Option<&DataPoint> {
        self.data.iter().fold(None, |best: Option<&DataPoint>, p| match best {
            Some(b) if b.value >= p.value => Some(b),
            _ => Some(p),
        })
    }

    /// Each point's share of the total, in `[0, 1]`. All zeros when the
    /// total is zero.
    pub fn shares(&self) -> Vec<f64> {
        let total = self.total();
        self.data
            .iter()
            .map(|p| if total > 0.0 { p.value / total } else { 0.0 })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pie() -> ChartConfig {
        ChartConfig {
            id: "q4",
            title: "Presenciou violência?",
            kind: ChartKind::Pie,
            layout: BarLayout::default(),
            data: vec![
                DataPoint::colored("Não", 73.08, SeriesColor::Red),
                DataPoint::new("Sim", 26.92),
            ],
            summary: None,
        }
    }

    #[test]
    fn explicit_colour_wins_then_cycle() {
        let chart = pie();
        assert_eq!(chart.point_color(0), SeriesColor::Red);
        assert_eq!(chart.point_color(1), SeriesColor::Orange);
        assert_eq!(chart.point_color(8), SeriesColor::Orange);
        assert_eq!(chart.point_color(9), SeriesColor::Amber);
    }

    #[test]
    fn shares_sum_to_one() {
        let chart = pie();
        let sum: f64 = chart.shares().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(chart.peak().map(|p| p.name), Some("Não"));
    }

    #[test]
    fn empty_chart_is_all_zero() {
        let chart = ChartConfig { data: Vec::new(), ..pie() };
        assert_eq!(chart.total(), 0.0);
        assert_eq!(chart.max_value(), 0.0);
        assert!(chart.peak().is_none());
        assert!(chart.shares().is_empty());
    }

    #[test]
    fn base_color_follows_kind() {
        assert_eq!(pie().base_color(), SeriesColor::Orange);
        let bars = ChartConfig { kind: ChartKind::Bar, ..pie() };
        assert_eq!(bars.base_color(), SeriesColor::Blue);
    }
}
