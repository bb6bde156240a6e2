//! Implements DisplayPort as a colored terminal dashboard.
//!
//! Layout: results heading, risk label, recommendation, expected demand,
//! gauge bar, business impact metrics.

use crate::domain::{
    BUSINESS_IMPACT, BandTone, DomainError, GAUGE_TITLE, GaugeReading, RiskReport, SeverityColor,
    gauge::{GAUGE_MAX, band_at},
};
use crate::ports::DisplayPort;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, Write, stdout};

const DEFAULT_GAUGE_WIDTH: usize = 40;
const MIN_GAUGE_WIDTH: usize = 20;
const MAX_GAUGE_WIDTH: usize = 60;

/// One character of the gauge bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeCell {
    pub tone: BandTone,
    /// Covered by the needle.
    pub filled: bool,
    /// Holds the threshold marker.
    pub marker: bool,
}

/// Split the 0..100 gauge into `width` cells. A cell is filled when its midpoint
/// lies below the needle value.
pub fn gauge_cells(reading: &GaugeReading, width: usize) -> Vec<GaugeCell> {
    let width = width.max(1);
    let step = GAUGE_MAX / width as f64;
    let marker_at = ((reading.threshold / GAUGE_MAX * width as f64).floor() as usize).min(width - 1);
    (0..width)
        .map(|i| {
            let mid = (i as f64 + 0.5) * step;
            GaugeCell {
                tone: band_at(mid),
                filled: mid < reading.value,
                marker: i == marker_at,
            }
        })
        .collect()
}

fn severity_color(color: SeverityColor) -> Color {
    match color {
        SeverityColor::Green => Color::Rgb {
            r: 0x2e,
            g: 0xcc,
            b: 0x71,
        },
        SeverityColor::Orange => Color::Rgb {
            r: 0xff,
            g: 0xa5,
            b: 0x00,
        },
        SeverityColor::Red => Color::Rgb {
            r: 0xe7,
            g: 0x4c,
            b: 0x3c,
        },
        SeverityColor::Blue => Color::Rgb {
            r: 0x34,
            g: 0x98,
            b: 0xdb,
        },
    }
}

fn band_color(tone: BandTone) -> Color {
    match tone {
        BandTone::LightGreen => Color::Rgb {
            r: 0x90,
            g: 0xee,
            b: 0x90,
        },
        BandTone::Yellow => Color::Rgb {
            r: 0xff,
            g: 0xff,
            b: 0x00,
        },
        BandTone::Orange => Color::Rgb {
            r: 0xff,
            g: 0xa5,
            b: 0x00,
        },
        BandTone::Red => Color::Rgb {
            r: 0xff,
            g: 0x00,
            b: 0x00,
        },
    }
}

fn render_gauge<W: Write>(out: &mut W, reading: &GaugeReading, width: usize) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(GAUGE_TITLE),
        SetAttribute(Attribute::Reset),
        Print("\n[")
    )?;
    for cell in gauge_cells(reading, width) {
        let (glyph, color) = if cell.marker {
            ("┃", Color::White)
        } else if cell.filled {
            ("█", severity_color(reading.bar_color))
        } else {
            ("░", band_color(cell.tone))
        };
        queue!(out, SetForegroundColor(color), Print(glyph))?;
    }
    queue!(
        out,
        SetForegroundColor(band_color(reading.band())),
        Print(format!("] {:.0}\n", reading.value)),
        ResetColor
    )?;

    // Axis: 0 .. 100 under the bar.
    let axis = format!(" 0{:>w$}\n", GAUGE_MAX, w = width.saturating_sub(1));
    queue!(out, SetForegroundColor(Color::DarkGrey), Print(axis), ResetColor)?;

    if reading.above_threshold() {
        queue!(
            out,
            SetForegroundColor(band_color(BandTone::Red)),
            Print(format!("⚠ At or above the {:.0}% alert threshold\n", reading.threshold)),
            ResetColor
        )?;
    }
    Ok(())
}

/// Write the full dashboard for one report.
pub fn render_report<W: Write>(out: &mut W, report: &RiskReport, width: usize) -> io::Result<()> {
    let result = &report.result;
    queue!(
        out,
        Print("\n"),
        SetAttribute(Attribute::Bold),
        Print(format!("Results for {}\n", report.product_name)),
        SetForegroundColor(severity_color(result.severity_color)),
        Print(format!("{}\n", result.risk_level)),
        ResetColor,
        SetAttribute(Attribute::Reset),
        Print(format!("Recommendation: {}\n", result.recommendation)),
        Print(format!(
            "Expected demand in {} days: {:.0} units\n\n",
            report.days_until_reorder, result.expected_demand
        ))
    )?;

    render_gauge(out, &report.gauge, width)?;

    queue!(
        out,
        Print("\n"),
        SetAttribute(Attribute::Bold),
        Print("📊 Business Impact\n"),
        SetAttribute(Attribute::Reset)
    )?;
    for metric in BUSINESS_IMPACT.iter() {
        let delta_color = if metric.delta.starts_with('↓') {
            Color::Red
        } else {
            Color::Green
        };
        queue!(
            out,
            Print(format!("  {:<28}{:>8}  ", metric.label, metric.value)),
            SetForegroundColor(delta_color),
            Print(metric.delta),
            ResetColor,
            Print("\n")
        )?;
    }
    out.flush()
}

/// Terminal dashboard. Gauge width follows the terminal size.
pub struct TerminalDisplay {
    gauge_width: usize,
}

/// Bar width for a terminal `cols` wide, leaving room for brackets and the value.
fn gauge_width_for(cols: Option<u16>) -> usize {
    cols.map(|c| usize::from(c).saturating_sub(12))
        .unwrap_or(DEFAULT_GAUGE_WIDTH)
        .clamp(MIN_GAUGE_WIDTH, MAX_GAUGE_WIDTH)
}

impl TerminalDisplay {
    pub fn new() -> Self {
        let cols = crossterm::terminal::size().ok().map(|(cols, _)| cols);
        Self {
            gauge_width: gauge_width_for(cols),
        }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for TerminalDisplay {
    fn show(&self, report: &RiskReport) -> Result<(), DomainError> {
        let mut out = stdout().lock();
        render_report(&mut out, report, self.gauge_width)
            .map_err(|e| DomainError::Render(format!("terminal write failed: {}", e)))
    }
}
