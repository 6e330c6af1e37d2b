//! Menu theming
//!
//! Colors for the rendered menu panels, loadable from TOML. Entry `style`
//! hints are resolved against the `styles` table, so applications can tag
//! individual entries (e.g. "danger") without the widget knowing what the
//! tag means.

use anyhow::{Context, Result};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Convert hex string to ratatui Color
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

fn default_background() -> String {
    "#1c1c28".into()
}

fn default_border() -> String {
    "#5f87af".into()
}

fn default_text() -> String {
    "#d0d0d0".into()
}

fn default_title() -> String {
    "#ffd75f".into()
}

fn default_divider() -> String {
    "#444455".into()
}

fn default_highlight_bg() -> String {
    "#5f87af".into()
}

fn default_highlight_fg() -> String {
    "#1c1c28".into()
}

fn default_checkmark() -> String {
    "#87d787".into()
}

fn default_link() -> String {
    "#87afff".into()
}

/// Menu color theme
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MenuTheme {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_border")]
    pub border: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_divider")]
    pub divider: String,
    #[serde(default = "default_highlight_bg")]
    pub highlight_bg: String,
    #[serde(default = "default_highlight_fg")]
    pub highlight_fg: String,
    #[serde(default = "default_checkmark")]
    pub checkmark: String,
    #[serde(default = "default_link")]
    pub link: String,

    /// Foreground overrides keyed by entry style hint
    #[serde(default)]
    pub styles: HashMap<String, String>,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self {
            background: default_background(),
            border: default_border(),
            text: default_text(),
            title: default_title(),
            divider: default_divider(),
            highlight_bg: default_highlight_bg(),
            highlight_fg: default_highlight_fg(),
            checkmark: default_checkmark(),
            link: default_link(),
            styles: HashMap::new(),
        }
    }
}

impl MenuTheme {
    /// Load a theme from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let theme: MenuTheme = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            Ok(theme)
        } else {
            Ok(Self::default())
        }
    }

    fn color(&self, hex: &str, fallback: Color) -> Color {
        hex_to_color(hex).unwrap_or(fallback)
    }

    pub fn background_color(&self) -> Color {
        self.color(&self.background, Color::Black)
    }

    pub fn border_style(&self) -> Style {
        Style::default()
            .fg(self.color(&self.border, Color::Blue))
            .bg(self.background_color())
    }

    pub fn divider_style(&self) -> Style {
        Style::default()
            .fg(self.color(&self.divider, Color::DarkGray))
            .bg(self.background_color())
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.color(&self.title, Color::Yellow))
            .bg(self.background_color())
            .add_modifier(Modifier::BOLD)
    }

    pub fn checkmark_style(&self) -> Style {
        Style::default()
            .fg(self.color(&self.checkmark, Color::Green))
            .bg(self.background_color())
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.color(&self.highlight_fg, Color::Black))
            .bg(self.color(&self.highlight_bg, Color::Blue))
    }

    /// Style for an item row, honoring its style hint.
    pub fn item_style(&self, hint: Option<&str>, is_link: bool) -> Style {
        let base_fg = if is_link {
            self.color(&self.link, Color::Cyan)
        } else {
            self.color(&self.text, Color::White)
        };

        let fg = hint
            .and_then(|h| self.styles.get(h))
            .and_then(|hex| hex_to_color(hex))
            .unwrap_or(base_fg);

        let style = Style::default().fg(fg).bg(self.background_color());
        if is_link {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }
}
