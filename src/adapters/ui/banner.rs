//! Startup banner: figlet title with a vertical color gradient.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "STOCK RISK";
const SUBTITLE: &str = "Smart Inventory Risk Predictor · For Small Retailers";

/// Leaf green (#2ecc71).
const LEAF_GREEN: (u8, u8, u8) = (0x2e, 0xcc, 0x71);
/// Alert red (#e74c3c).
const ALERT_RED: (u8, u8, u8) = (0xe7, 0x4c, 0x3c);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Title lines in figlet's standard font, or the plain title if the font fails to load.
fn title_lines() -> Vec<String> {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .map(|art| art.lines().map(str::to_string).collect())
        .unwrap_or_else(|| vec![TITLE.to_string()])
}

/// Prints the title from green to red, then subtitle and version.
pub fn print_welcome() {
    let mut out = stdout();
    let lines = title_lines();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(LEAF_GREEN, ALERT_RED, t);
        let _ = queue!(
            out,
            SetForegroundColor(Color::Rgb { r, g, b }),
            Print(line),
            Print("\r\n"),
            ResetColor
        );
    }

    let _ = queue!(
        out,
        SetForegroundColor(Color::Grey),
        Print(format!("{}\r\nv{}\r\n\r\n", SUBTITLE, env!("CARGO_PKG_VERSION"))),
        ResetColor
    );
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(LEAF_GREEN, ALERT_RED, 0.0), LEAF_GREEN);
        assert_eq!(lerp_rgb(LEAF_GREEN, ALERT_RED, 1.0), ALERT_RED);
    }

    #[test]
    fn test_title_lines_not_empty() {
        assert!(!title_lines().is_empty());
    }
}
