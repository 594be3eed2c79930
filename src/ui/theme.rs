//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::page::{ButtonKind, Tint};

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── Ghibli palette ─────────────────────────────────────────
    pub const LIGHT_CREAM: Color = Color::Rgb(0xf5, 0xf0, 0xe1);
    pub const SKY_BLUE: Color = Color::Rgb(0x8e, 0xc5, 0xfc);
    pub const NATURE_GREEN: Color = Color::Rgb(0xa8, 0xe6, 0xcf);
    pub const PASTEL_PINK: Color = Color::Rgb(0xff, 0xaa, 0xa5);
    pub const SOFT_YELLOW: Color = Color::Rgb(0xfd, 0xff, 0xab);
    pub const DUSTY_LAVENDER: Color = Color::Rgb(0xd3, 0xc0, 0xf9);
    pub const INK: Color = Color::Rgb(0x3e, 0x3e, 0x3e);
    pub const PAPER: Color = Color::Rgb(0xff, 0xff, 0xff);

    pub fn tint(tint: Tint) -> Color {
        match tint {
            Tint::LightCream => Self::LIGHT_CREAM,
            Tint::SoftYellow => Self::SOFT_YELLOW,
            Tint::NatureGreen => Self::NATURE_GREEN,
            Tint::PastelPink => Self::PASTEL_PINK,
            Tint::DustyLavender => Self::DUSTY_LAVENDER,
        }
    }

    // ── page content ───────────────────────────────────────────
    pub fn page_style(tint: Tint) -> Style {
        Style::default().bg(Self::tint(tint)).fg(Self::INK)
    }

    pub fn title_style() -> Style {
        Style::default().fg(Self::INK).add_modifier(Modifier::BOLD)
    }

    pub fn body_style() -> Style {
        Style::default().fg(Self::INK)
    }

    pub fn italic_style() -> Style {
        Style::default().fg(Self::INK).add_modifier(Modifier::ITALIC)
    }

    pub fn hint_style() -> Style {
        Style::default()
            .fg(Color::Rgb(0x6e, 0x6a, 0x60))
            .add_modifier(Modifier::ITALIC)
    }

    pub fn caption_style() -> Style {
        Style::default().bg(Self::PAPER).fg(Self::INK)
    }

    pub fn frame_border_style() -> Style {
        Style::default().fg(Self::INK)
    }

    pub fn error_style() -> Style {
        Style::default().fg(Color::Rgb(0xa0, 0x30, 0x30))
    }

    pub fn button_style(kind: ButtonKind, focused: bool) -> Style {
        let bg = match (focused, kind) {
            (true, _) => Self::SKY_BLUE,
            (false, ButtonKind::Primary) => Self::NATURE_GREEN,
            (false, ButtonKind::Home) => Self::PASTEL_PINK,
        };
        let style = Style::default().bg(bg).fg(Self::INK).add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn window_title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn scrollbar_thumb() -> Color {
        Color::LightBlue
    }

    pub fn scrollbar_track() -> Color {
        Color::DarkGray
    }
}
