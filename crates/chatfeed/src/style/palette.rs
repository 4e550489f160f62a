//! Color palette with light and dark theme support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme (default).
    #[default]
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Primary brand color.
    pub primary: Color,
    /// Lighter primary, used for hover states.
    pub primary_light: Color,

    /// Card/panel surface.
    pub surface: Color,
    /// Elevated surface (inputs, badges).
    pub surface_elevated: Color,
    /// Window background.
    pub background: Color,

    /// Main text color.
    pub text_primary: Color,
    /// Muted text (timestamps, labels).
    pub text_secondary: Color,
    /// Subtle text (placeholders).
    pub text_muted: Color,
    /// Text on primary-colored surfaces.
    pub text_on_primary: Color,

    /// Success accent (copied badge).
    pub accent_green: Color,
    /// Error accent (fetch failures).
    pub accent_red: Color,

    /// Selected row background.
    pub selected: Color,
    /// Selected row border.
    pub selected_border: Color,
    /// Hover background.
    pub hover: Color,

    /// Subtle border color.
    pub border_subtle: Color,
    /// Medium border color.
    pub border_medium: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.0, 0.48, 0.95),
            primary_light: Color::from_rgb(0.35, 0.65, 1.0),

            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(0.97, 0.975, 0.99),
            background: Color::from_rgb(0.98, 0.985, 0.99),

            text_primary: Color::from_rgb(0.08, 0.10, 0.14),
            text_secondary: Color::from_rgb(0.42, 0.46, 0.54),
            text_muted: Color::from_rgb(0.60, 0.64, 0.70),
            text_on_primary: Color::WHITE,

            accent_green: Color::from_rgb(0.2, 0.75, 0.45),
            accent_red: Color::from_rgb(0.98, 0.28, 0.35),

            selected: Color::from_rgb(0.94, 0.97, 1.0),
            selected_border: Color::from_rgb(0.0, 0.55, 1.0),
            hover: Color::from_rgb(0.97, 0.98, 0.99),

            border_subtle: Color::from_rgb(0.92, 0.93, 0.95),
            border_medium: Color::from_rgb(0.86, 0.88, 0.91),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.0, 1.0, 0.8),
            primary_light: Color::from_rgb(0.2, 1.0, 0.85),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.18),
            background: Color::from_rgb(0.08, 0.09, 0.11),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::from_rgb(0.08, 0.09, 0.11),

            accent_green: Color::from_rgb(0.2, 0.9, 0.5),
            accent_red: Color::from_rgb(1.0, 0.35, 0.4),

            selected: Color::from_rgb(0.10, 0.18, 0.20),
            selected_border: Color::from_rgb(0.0, 1.0, 0.8),
            hover: Color::from_rgb(0.14, 0.15, 0.17),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to dark mode.
static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::dark()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::dark(), |p| *p)
}
