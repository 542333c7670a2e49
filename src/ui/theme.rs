//! Colour palettes and the text styles derived from them.
//!
//! Four named palettes, each a fixed record of 8 colour tokens.  Exactly one
//! is active at a time; every widget pulls its styles from here so a theme
//! switch propagates everywhere on the next frame.

use ratatui::style::{Color, Modifier, Style};

// ───────────────────────────────────────── theme names ───────

/// The selectable theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    Ocean,
    Sunset,
}

impl ThemeName {
    /// Ordered list of all variants (used by the settings cycle).
    pub const ALL: &[ThemeName] = &[
        ThemeName::Dark,
        ThemeName::Light,
        ThemeName::Ocean,
        ThemeName::Sunset,
    ];

    /// Name used in the config file and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
            ThemeName::Ocean => "ocean",
            ThemeName::Sunset => "sunset",
        }
    }

    /// Parse a theme name.  Unknown names yield `None` — callers treat
    /// that as a no-op, never an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(ThemeName::Dark),
            "light" => Some(ThemeName::Light),
            "ocean" => Some(ThemeName::Ocean),
            "sunset" => Some(ThemeName::Sunset),
            _ => None,
        }
    }

    /// Next variant in the settings cycle.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

// ───────────────────────────────────────── palette ───────────

/// The 8 colour tokens every palette defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    /// Card / elevated-surface colour.
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub border: Color,
}

impl Palette {
    /// Fixed palette table — token values carried over from the page's
    /// original stylesheet variables.
    pub const fn of(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self {
                primary: Color::Rgb(99, 102, 241),
                secondary: Color::Rgb(139, 92, 246),
                accent: Color::Rgb(245, 158, 11),
                background: Color::Rgb(15, 23, 42),
                surface: Color::Rgb(30, 41, 59),
                text: Color::Rgb(248, 250, 252),
                text_secondary: Color::Rgb(148, 163, 184),
                border: Color::Rgb(51, 65, 85),
            },
            ThemeName::Light => Self {
                primary: Color::Rgb(79, 70, 229),
                secondary: Color::Rgb(124, 58, 237),
                accent: Color::Rgb(217, 119, 6),
                background: Color::Rgb(248, 250, 252),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(30, 41, 59),
                text_secondary: Color::Rgb(100, 116, 139),
                border: Color::Rgb(226, 232, 240),
            },
            ThemeName::Ocean => Self {
                primary: Color::Rgb(8, 145, 178),
                secondary: Color::Rgb(2, 132, 199),
                accent: Color::Rgb(14, 165, 233),
                background: Color::Rgb(12, 74, 110),
                surface: Color::Rgb(7, 89, 133),
                text: Color::Rgb(224, 242, 254),
                text_secondary: Color::Rgb(186, 230, 253),
                border: Color::Rgb(3, 105, 161),
            },
            ThemeName::Sunset => Self {
                primary: Color::Rgb(234, 88, 12),
                secondary: Color::Rgb(220, 38, 38),
                accent: Color::Rgb(245, 158, 11),
                background: Color::Rgb(124, 45, 18),
                surface: Color::Rgb(154, 52, 18),
                text: Color::Rgb(254, 215, 170),
                text_secondary: Color::Rgb(253, 186, 116),
                border: Color::Rgb(194, 64, 12),
            },
        }
    }
}

// ───────────────────────────────────────── theme manager ─────

/// The active theme — change it here and every widget follows.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    name: ThemeName,
    palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::default())
    }
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        Self {
            name,
            palette: Palette::of(name),
        }
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Switch to a named variant.
    pub fn set(&mut self, name: ThemeName) {
        self.name = name;
        self.palette = Palette::of(name);
    }

    /// Switch by config/CLI string.  Unrecognised names change nothing;
    /// returns whether a switch happened.
    pub fn set_by_name(&mut self, name: &str) -> bool {
        match ThemeName::parse(name) {
            Some(parsed) => {
                self.set(parsed);
                true
            }
            None => false,
        }
    }

    /// Flip strictly between dark and light.  Ocean and sunset also land on
    /// light — they are only reachable through [`Theme::set`].
    pub fn toggle(&mut self) -> ThemeName {
        let next = if self.name == ThemeName::Dark {
            ThemeName::Light
        } else {
            ThemeName::Dark
        };
        self.set(next);
        next
    }

    // ── profile header ─────────────────────────────────────────
    pub fn profile_name_style(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn bio_style(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    pub fn avatar_style(&self) -> Style {
        Style::default().fg(self.palette.primary)
    }

    // ── link cards ─────────────────────────────────────────────
    pub fn card_title_style(&self, featured: bool, variant: Option<&str>) -> Style {
        let mut style = Style::default().fg(self.palette.primary);
        if featured {
            style = style.fg(self.palette.accent).add_modifier(Modifier::BOLD);
        }
        if variant == Some("accent") {
            style = style.fg(self.palette.secondary);
        }
        style
    }

    pub fn card_description_style(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    pub fn card_icon_style(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    pub fn card_indicator_style(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.palette.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Brief scale-down feedback after a click — rendered as a dim flash.
    pub fn pulse_style(&self) -> Style {
        Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::DIM)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default()
            .bg(self.palette.surface)
            .fg(self.palette.text)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    pub fn input_style(&self) -> Style {
        Style::default().fg(self.palette.accent)
    }

    pub fn alert_style(&self) -> Style {
        Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Whole-screen dim used during the startup loading effect.
    pub fn loading_style(&self) -> Style {
        Style::default()
            .fg(self.palette.text_secondary)
            .add_modifier(Modifier::DIM)
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_light_applies_all_eight_tokens() {
        let mut theme = Theme::default();
        assert!(theme.set_by_name("light"));

        let p = theme.palette();
        assert_eq!(p.primary, Color::Rgb(79, 70, 229));
        assert_eq!(p.secondary, Color::Rgb(124, 58, 237));
        assert_eq!(p.accent, Color::Rgb(217, 119, 6));
        assert_eq!(p.background, Color::Rgb(248, 250, 252));
        assert_eq!(p.surface, Color::Rgb(255, 255, 255));
        assert_eq!(p.text, Color::Rgb(30, 41, 59));
        assert_eq!(p.text_secondary, Color::Rgb(100, 116, 139));
        assert_eq!(p.border, Color::Rgb(226, 232, 240));
    }

    #[test]
    fn unknown_name_is_a_silent_noop() {
        let mut theme = Theme::new(ThemeName::Ocean);
        let before = *theme.palette();
        assert!(!theme.set_by_name("nonexistent"));
        assert_eq!(theme.name(), ThemeName::Ocean);
        assert_eq!(*theme.palette(), before);
    }

    #[test]
    fn toggle_flips_between_dark_and_light() {
        let mut theme = Theme::new(ThemeName::Dark);
        assert_eq!(theme.toggle(), ThemeName::Light);
        assert_eq!(theme.toggle(), ThemeName::Dark);
    }

    #[test]
    fn toggle_from_ocean_goes_light() {
        // The toggle is strictly binary; bonus themes land on light.
        let mut theme = Theme::new(ThemeName::Ocean);
        assert_eq!(theme.toggle(), ThemeName::Light);

        let mut theme = Theme::new(ThemeName::Sunset);
        assert_eq!(theme.toggle(), ThemeName::Light);
    }

    #[test]
    fn cycle_visits_every_variant() {
        let mut name = ThemeName::Dark;
        let mut seen = vec![name];
        for _ in 0..3 {
            name = name.next();
            seen.push(name);
        }
        assert_eq!(seen, ThemeName::ALL);
    }
}
