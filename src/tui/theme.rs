use ratatui::style::Color;

use crate::model::{ThemeName, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub background: Color,
    /// Modal and card surface, one step off the background
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub selection_bg: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            name: ThemeName::Dark,
            background: Color::Rgb(0x0A, 0x0A, 0x0F),
            surface: Color::Rgb(0x10, 0x10, 0x15),
            text: Color::Rgb(0xB8, 0xB8, 0xC8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x00, 0xF2, 0xEA),
            dim: Color::Rgb(0x6C, 0x6C, 0x80),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            purple: Color::Rgb(0xCC, 0x66, 0xFF),
            selection_bg: Color::Rgb(0x1C, 0x2A, 0x33),
            border: Color::Rgb(0x33, 0x33, 0x44),
        }
    }

    pub fn light() -> Self {
        Theme {
            name: ThemeName::Light,
            background: Color::Rgb(0xFA, 0xFA, 0xF7),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x3A, 0x3A, 0x48),
            text_bright: Color::Rgb(0x0A, 0x0A, 0x0F),
            highlight: Color::Rgb(0x00, 0x86, 0x80),
            dim: Color::Rgb(0x8A, 0x8A, 0x99),
            red: Color::Rgb(0xC6, 0x28, 0x28),
            yellow: Color::Rgb(0xA1, 0x7A, 0x00),
            green: Color::Rgb(0x1B, 0x8A, 0x4B),
            cyan: Color::Rgb(0x00, 0x7A, 0xA8),
            purple: Color::Rgb(0x7B, 0x3F, 0xC4),
            selection_bg: Color::Rgb(0xDD, 0xF3, 0xF2),
            border: Color::Rgb(0xCC, 0xCC, 0xD4),
        }
    }

    /// Build the named palette, then apply `[ui.colors]` overrides
    pub fn from_config(name: ThemeName, ui: &UiConfig) -> Self {
        let mut theme = match name {
            ThemeName::Dark => Theme::dark(),
            ThemeName::Light => Theme::light(),
        };

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring color {}: {:?} is not #RRGGBB", key, value);
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "surface" => theme.surface = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "cyan" => theme.cyan = color,
                "purple" => theme.purple = color,
                "selection_bg" => theme.selection_bg = color,
                "border" => theme.border = color,
                _ => log::warn!("unknown color key {}", key),
            }
        }

        theme
    }

    /// Chip color for the n-th tag; cycles through the accent colors
    pub fn tag_color(&self, index: usize) -> Color {
        let accents = [self.highlight, self.purple, self.cyan, self.green, self.yellow];
        accents[index % accents.len()]
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
