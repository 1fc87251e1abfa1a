//! Terminal colors for log lines.

use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};

/// Palette for request ids. Blue is left out so ids never blend with the
/// admin route labels.
const ID_COLORS: [AnsiColors; 10] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Picks a stable palette entry for a request id (FNV-1a over its bytes).
pub fn color_for_id(id: &str) -> AnsiColors {
    let hash = id
        .bytes()
        .fold(0x811c_9dc5_u32, |acc, b| (acc ^ u32::from(b)).wrapping_mul(0x0100_0193));
    ID_COLORS[hash as usize % ID_COLORS.len()]
}

/// `[id]` in the id's color.
pub fn colored_id(id: &str) -> String {
    let style = Style::new().color(DynColors::Ansi(color_for_id(id)));
    format!("[{}]", id).style(style).to_string()
}

/// Route label colored by where the request went: the public site in
/// green, admin routes in blue, anything unknown bold.
pub fn colored_label(label: &str) -> String {
    match label {
        "SITE" => label.green().to_string(),
        "CONTENT" | "SETTINGS" | "GIT" | "FILES" => label.blue().to_string(),
        _ => label.bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_determinism() {
        let first = color_for_id("x7Kq2");
        let second = color_for_id("x7Kq2");
        assert!(std::mem::discriminant(&first) == std::mem::discriminant(&second));
    }

    #[test]
    fn test_colored_output_keeps_text() {
        assert!(colored_id("abc12").contains("abc12"));
        assert!(colored_label("CONTENT").contains("CONTENT"));
    }
}
