//! Startup banner: "GOMI-BOT" in figlet ASCII with a vertical green gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Leaf green (#2e7d32).
const LEAF_GREEN: (u8, u8, u8) = (0x2e, 0x7d, 0x32);
/// Sky blue (#176fb8), same as the card header color.
const SKY_BLUE: (u8, u8, u8) = (0x17, 0x6f, 0xb8);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

fn render_art(title: &str) -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(title).map(|fig| fig.to_string()))
        .unwrap_or_else(|| title.to_string())
}

/// Prints the welcome banner, then version and a one-line usage hint.
pub fn print_welcome() {
    let mut out = stdout();
    let art = render_art("GOMI-BOT");
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(LEAF_GREEN, SKY_BLUE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: SKY_BLUE.0,
        g: SKY_BLUE.1,
        b: SKY_BLUE.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("「ヘルプ」で使い方を表示 / exit で終了\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(LEAF_GREEN, SKY_BLUE, 0.0), LEAF_GREEN);
        assert_eq!(lerp_rgb(LEAF_GREEN, SKY_BLUE, 1.0), SKY_BLUE);
    }

    #[test]
    fn test_render_art_is_multiline() {
        assert!(render_art("GOMI").lines().count() > 1);
    }
}
