//! Color theme and glyphs for the Folio TUI.
//!
//! Night-sky palette taken from the page design, with an optional
//! high-contrast override. Project and timeline themes carry their own hex
//! colors; [`hex`] converts them.

use std::time::Duration;

use ratatui::style::{Color, Modifier, Style};

use folio_types::{HexColor, SkillCategory, UiOptions};

mod colors {
    use super::Color;

    pub const BG_NIGHT: Color = Color::Rgb(7, 10, 18); // #070A12
    pub const BG_PANEL: Color = Color::Rgb(14, 19, 32);
    pub const BG_RAISED: Color = Color::Rgb(24, 30, 46);
    pub const BORDER: Color = Color::Rgb(54, 62, 84);

    pub const TEXT_PRIMARY: Color = Color::Rgb(247, 250, 255);
    pub const TEXT_SECONDARY: Color = Color::Rgb(190, 198, 214);
    pub const TEXT_MUTED: Color = Color::Rgb(112, 122, 144);

    pub const BLUE: Color = Color::Rgb(77, 143, 255); // #4D8FFF
    pub const GREEN: Color = Color::Rgb(45, 190, 126); // #2DBE7E
    pub const VIOLET: Color = Color::Rgb(139, 92, 246); // #8B5CF6
    pub const PINK: Color = Color::Rgb(236, 72, 153);
    pub const CURTAIN: Color = Color::Rgb(10, 22, 40); // #0A1628
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_raised: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub success: Color,
    pub accent: Color,
    pub highlight: Color,
    pub curtain: Color,
    /// Whether project/timeline hex themes are honored.
    pub themed_cards: bool,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg: colors::BG_NIGHT,
            bg_panel: colors::BG_PANEL,
            bg_raised: colors::BG_RAISED,
            border: colors::BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::BLUE,
            success: colors::GREEN,
            accent: colors::VIOLET,
            highlight: colors::PINK,
            curtain: colors::CURTAIN,
            themed_cards: true,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            bg_panel: Color::Black,
            bg_raised: Color::DarkGray,
            border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::Cyan,
            success: Color::Green,
            accent: Color::Yellow,
            highlight: Color::Magenta,
            curtain: Color::Black,
            themed_cards: false,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

#[must_use]
pub fn rgb(color: HexColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Parse a theme color, falling back when it is malformed.
#[must_use]
pub fn hex(raw: &str, fallback: Color) -> Color {
    HexColor::parse(raw).map_or(fallback, rgb)
}

/// Readable text color over a theme background.
#[must_use]
pub fn text_on(raw_bg: &str, fallback: Color) -> Color {
    HexColor::parse(raw_bg).map_or(fallback, |bg| rgb(bg.text_on()))
}

#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub badge_dot: &'static str,
    pub arrow_right: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub dot_active: &'static str,
    pub dot: &'static str,
    pub bar_full: &'static str,
    pub bar_empty: &'static str,
    pub rule: &'static str,
    pub timeline_node: &'static str,
    pub timeline_track: &'static str,
    pub copy: &'static str,
    pub link: &'static str,
    pub location: &'static str,
    pub thumb: &'static str,
    pub track: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            badge_dot: "*",
            arrow_right: "->",
            prev: "<",
            next: ">",
            dot_active: "#",
            dot: ".",
            bar_full: "#",
            bar_empty: "-",
            rule: "-",
            timeline_node: "o",
            timeline_track: "|",
            copy: "[copy]",
            link: "[link]",
            location: "@",
            thumb: "#",
            track: "|",
        }
    } else {
        Glyphs {
            bullet: "•",
            badge_dot: "●",
            arrow_right: "→",
            prev: "‹",
            next: "›",
            dot_active: "●",
            dot: "○",
            bar_full: "█",
            bar_empty: "░",
            rule: "─",
            timeline_node: "◆",
            timeline_track: "│",
            copy: "⧉ copy",
            link: "↗",
            location: "⌖",
            thumb: "█",
            track: "│",
        }
    }
}

/// Icon for a skill category.
#[must_use]
pub fn category_icon(category: SkillCategory, options: UiOptions) -> &'static str {
    if options.ascii_only {
        return match category {
            SkillCategory::Languages => "</>",
            SkillCategory::Frameworks => "[F]",
            SkillCategory::Database => "[D]",
            SkillCategory::Tools => "[T]",
        };
    }
    match category {
        SkillCategory::Languages => "⌨",
        SkillCategory::Frameworks => "◈",
        SkillCategory::Database => "⛁",
        SkillCategory::Tools => "⚙",
    }
}

const LOADING_DOTS: &[&str] = &["   ", ".  ", ".. ", "..."];
const DOT_PERIOD: Duration = Duration::from_millis(200);

/// Animated trailing dots. Static under reduced motion.
#[must_use]
pub fn loading_dots(elapsed: Duration, options: UiOptions) -> &'static str {
    if options.reduced_motion {
        return LOADING_DOTS[LOADING_DOTS.len() - 1];
    }
    let step = (elapsed.as_millis() / DOT_PERIOD.as_millis()) as usize;
    LOADING_DOTS[step % LOADING_DOTS.len()]
}

pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn eyebrow(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn button_primary(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_secondary(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_raised)
    }

    #[must_use]
    pub fn link(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }
}
