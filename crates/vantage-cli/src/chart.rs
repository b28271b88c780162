//! Text charts for the terminal.
//!
//! Two views of a return series: a horizontal histogram with the VaR levels
//! pointed out, and a time-series plot with the VaR levels drawn as
//! horizontal reference lines.

use chrono::NaiveDate;
use vantage_math::histogram::Histogram;
use vantage_math::MathResult;
use vantage_risk::var::VaRMethod;
use vantage_risk::RiskReport;

const BAR: char = '█';
const POINT: char = '●';

/// A labelled horizontal level on a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Legend label.
    pub label: &'static str,
    /// Return level.
    pub value: f64,
    /// Line glyph in the time-series chart.
    pub glyph: char,
}

/// The three VaR levels of a report as chart markers.
pub fn var_markers(report: &RiskReport) -> Vec<Marker> {
    VaRMethod::ALL
        .iter()
        .map(|&method| Marker {
            label: match method {
                VaRMethod::Historical => "Historical VaR",
                VaRMethod::Parametric => "Parametric VaR",
                VaRMethod::MonteCarlo => "Monte Carlo VaR",
            },
            value: report.var(method),
            glyph: match method {
                VaRMethod::Historical => '=',
                VaRMethod::Parametric => '-',
                VaRMethod::MonteCarlo => '~',
            },
        })
        .collect()
}

/// Horizontal density histogram, lowest returns first, one line per bin.
///
/// Bars are scaled to the densest bin and labelled with the density, so the
/// areas integrate to one. Each marker is pointed at from the bin holding its
/// value; markers outside the sample range point at the nearest end bin.
pub fn histogram_chart(
    values: &[f64],
    bins: usize,
    markers: &[Marker],
    width: usize,
) -> MathResult<String> {
    let hist = Histogram::new(values, bins)?;
    let densities = hist.densities();
    let peak = densities.iter().copied().fold(0.0, f64::max);

    let mut lines = Vec::with_capacity(bins);
    for (i, (bin, density)) in hist.bins().iter().zip(&densities).enumerate() {
        let len = if peak > 0.0 {
            ((density / peak) * width as f64).round() as usize
        } else {
            0
        };
        let mut line = format!(
            "{:>9} │{:<width$} {:>7.1}",
            format!("{:.2}%", bin.lower * 100.0),
            BAR.to_string().repeat(len),
            density,
        );

        let here: Vec<String> = markers
            .iter()
            .filter(|m| hist.bin_index(m.value) == i)
            .map(|m| format!("{} ({:.2}%)", m.label, m.value * 100.0))
            .collect();
        if !here.is_empty() {
            line.push_str("  ◀ ");
            line.push_str(&here.join(", "));
        }
        lines.push(line.trim_end().to_string());
    }
    Ok(lines.join("\n"))
}

/// Time-series plot of `points` with markers as horizontal lines.
///
/// Points are spread over at most `width` columns; returns land on the row
/// nearest their value and are drawn over the reference lines.
pub fn time_series_chart(
    points: &[(NaiveDate, f64)],
    markers: &[Marker],
    width: usize,
    height: usize,
) -> String {
    if points.is_empty() || width == 0 || height < 2 {
        return String::new();
    }

    let (mut lo, mut hi) = points
        .iter()
        .map(|(_, v)| *v)
        .chain(markers.iter().map(|m| m.value))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if hi - lo < f64::EPSILON {
        lo -= 0.005;
        hi += 0.005;
    }

    let cols = width.min(points.len());
    let row_of = |v: f64| (((hi - v) / (hi - lo)) * (height - 1) as f64).round() as usize;

    let mut grid = vec![vec![' '; cols]; height];
    for m in markers {
        grid[row_of(m.value).min(height - 1)].fill(m.glyph);
    }
    for (i, (_, v)) in points.iter().enumerate() {
        let col = i * cols / points.len();
        grid[row_of(*v).min(height - 1)][col] = POINT;
    }

    let mut lines = Vec::with_capacity(height + 3);
    for (r, row) in grid.iter().enumerate() {
        let label = if r == 0 || r == height - 1 || r == height / 2 {
            let value = hi - r as f64 * (hi - lo) / (height - 1) as f64;
            format!("{:.2}%", value * 100.0)
        } else {
            String::new()
        };
        let body: String = row.iter().collect();
        lines.push(format!("{label:>9} ┤{}", body.trim_end()));
    }
    lines.push(format!("{:>9} └{}", "", "─".repeat(cols)));

    let first = points[0].0.to_string();
    let last = points[points.len() - 1].0.to_string();
    let gap = (cols + 1).saturating_sub(first.len() + last.len()).max(1);
    lines.push(format!("{:>9}  {first}{}{last}", "", " ".repeat(gap)));

    let legend = std::iter::once(format!("{POINT} daily return"))
        .chain(markers.iter().map(|m| format!("{} {}", m.glyph, m.label)))
        .collect::<Vec<_>>()
        .join("   ");
    lines.push(format!("{:>9}  {legend}", ""));

    lines.join("\n")
}
