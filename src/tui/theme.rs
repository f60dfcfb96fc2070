use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub sidebar_bg: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub green: Color,
    pub blue: Color,
    pub purple: Color,
    pub selection_bg: Color,
    pub chip_on_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0F, 0x17, 0x2A),
            sidebar_bg: Color::Rgb(0x1E, 0x29, 0x3B),
            text: Color::Rgb(0xCB, 0xD5, 0xE1),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x60, 0xA5, 0xFA),
            dim: Color::Rgb(0x94, 0xA3, 0xB8),
            green: Color::Rgb(0x4A, 0xDE, 0x80),
            blue: Color::Rgb(0x60, 0xA5, 0xFA),
            purple: Color::Rgb(0xC0, 0x84, 0xFC),
            selection_bg: Color::Rgb(0x33, 0x41, 0x55),
            chip_on_bg: Color::Rgb(0x1E, 0x3A, 0x8A),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(slot = %key, value = %value, "ignoring invalid color");
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "sidebar_bg" => &mut theme.sidebar_bg,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "highlight" => &mut theme.highlight,
                "dim" => &mut theme.dim,
                "green" => &mut theme.green,
                "blue" => &mut theme.blue,
                "purple" => &mut theme.purple,
                "selection_bg" => &mut theme.selection_bg,
                "chip_on_bg" => &mut theme.chip_on_bg,
                _ => {
                    tracing::warn!(slot = %key, "unknown color slot");
                    continue;
                }
            };
            *slot = color;
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("green".into(), "#112233".into());
        ui.colors.insert("nonsense".into(), "#112233".into());
        ui.colors.insert("text".into(), "not a color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.green, Color::Rgb(0x11, 0x22, 0x33));
        // Invalid value leaves the default in place
        assert_eq!(theme.text, Theme::default().text);
    }
}
