//! Color palettes for the Vitrine page, one per theme flag.

use ratatui::style::{Color, Modifier, Style};

use vitrine_engine::Theme;

/// Dark palette constants (the default theme).
mod dark {
    use super::Color;

    pub const BG: Color = Color::Rgb(18, 18, 24);
    pub const BG_PANEL: Color = Color::Rgb(28, 28, 38);
    pub const BG_OVERLAY: Color = Color::Rgb(38, 38, 52);
    pub const BORDER: Color = Color::Rgb(82, 82, 110);
    pub const TEXT: Color = Color::Rgb(224, 222, 244);
    pub const TEXT_MUTED: Color = Color::Rgb(128, 126, 152);
    pub const ACCENT: Color = Color::Rgb(235, 188, 186);
    pub const BRAND: Color = Color::Rgb(156, 207, 216);
    pub const ERROR: Color = Color::Rgb(235, 111, 146);
    pub const SPARK: Color = Color::Rgb(86, 82, 110);
}

/// Light palette constants.
mod light {
    use super::Color;

    pub const BG: Color = Color::Rgb(250, 244, 237);
    pub const BG_PANEL: Color = Color::Rgb(242, 233, 222);
    pub const BG_OVERLAY: Color = Color::Rgb(233, 223, 211);
    pub const BORDER: Color = Color::Rgb(152, 147, 165);
    pub const TEXT: Color = Color::Rgb(87, 82, 121);
    pub const TEXT_MUTED: Color = Color::Rgb(152, 147, 165);
    pub const ACCENT: Color = Color::Rgb(180, 99, 122);
    pub const BRAND: Color = Color::Rgb(40, 105, 131);
    pub const ERROR: Color = Color::Rgb(180, 99, 122);
    pub const SPARK: Color = Color::Rgb(206, 202, 205);
}

/// Resolved palette used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_overlay: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub brand: Color,
    pub error: Color,
    pub spark: Color,
}

/// Pick the palette for the active theme flag.
#[must_use]
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            bg: dark::BG,
            bg_panel: dark::BG_PANEL,
            bg_overlay: dark::BG_OVERLAY,
            border: dark::BORDER,
            text: dark::TEXT,
            text_muted: dark::TEXT_MUTED,
            accent: dark::ACCENT,
            brand: dark::BRAND,
            error: dark::ERROR,
            spark: dark::SPARK,
        },
        Theme::Light => Palette {
            bg: light::BG,
            bg_panel: light::BG_PANEL,
            bg_overlay: light::BG_OVERLAY,
            border: light::BORDER,
            text: light::TEXT,
            text_muted: light::TEXT_MUTED,
            accent: light::ACCENT,
            brand: light::BRAND,
            error: light::ERROR,
            spark: light::SPARK,
        },
    }
}

impl Palette {
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.brand).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}
