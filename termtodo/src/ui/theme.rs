//! Theme and styling for the TUI.
//!
//! Two palettes (light and dark) sit behind [`ThemeMode`]; toggling the
//! mode swaps every style the panels use. Nothing outside the UI layer
//! reads the theme, and the chosen mode is not persisted.

use ratatui::style::{Color, Modifier, Style};

/// Which palette the UI renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark text on a light background (default).
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl ThemeMode {
    /// Switches light to dark and back.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolves the palette for this mode.
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Mode name shown in the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Color palette for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary foreground color.
    pub fg_primary: Color,
    /// Secondary foreground color (dimmed text).
    pub fg_secondary: Color,
    /// Primary background color.
    pub bg_primary: Color,
    /// Highlight color for focused elements.
    pub highlight: Color,
    /// Success/notification color.
    pub success: Color,
    /// Panel title color.
    pub title: Color,
    /// Status bar background color.
    pub bg_status: Color,
}

/// Palette for [`ThemeMode::Light`].
pub const LIGHT: Palette = Palette {
    fg_primary: Color::Black,
    fg_secondary: Color::DarkGray,
    bg_primary: Color::White,
    highlight: Color::Blue,
    success: Color::Green,
    title: Color::Blue,
    bg_status: Color::Rgb(220, 220, 235),
};

/// Palette for [`ThemeMode::Dark`].
pub const DARK: Palette = Palette {
    fg_primary: Color::White,
    fg_secondary: Color::Gray,
    bg_primary: Color::Black,
    highlight: Color::Cyan,
    success: Color::Green,
    title: Color::Cyan,
    bg_status: Color::Rgb(30, 30, 50),
};

impl Palette {
    /// Base style painted across the whole frame.
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg_primary).bg(self.bg_primary)
    }

    /// Normal text style.
    #[must_use]
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg_primary)
    }

    /// Dimmed text style (placeholders, metadata).
    #[must_use]
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.fg_secondary)
    }

    /// Bold text style.
    #[must_use]
    pub fn bold(&self) -> Style {
        Style::default()
            .fg(self.fg_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted text style (focused panel borders).
    #[must_use]
    pub fn highlighted(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style (in lists).
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.bg_primary)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for completed tasks (dimmed and struck through).
    #[must_use]
    pub fn completed(&self) -> Style {
        Style::default()
            .fg(self.fg_secondary)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Style for panel titles (bold, accented).
    #[must_use]
    pub fn panel_title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Style for transient success notifications.
    #[must_use]
    pub fn notification(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the status bar background.
    #[must_use]
    pub fn status_bar_bg(&self) -> Style {
        Style::default().fg(self.fg_primary).bg(self.bg_status)
    }
}
