//! Profile header widget — avatar, name, bio and location.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::model::Profile;
use crate::ui::theme::Theme;

/// The avatar field holds either a glyph or an image URL; the original page
/// keys this off the same prefix check.
pub fn avatar_is_url(avatar: &str) -> bool {
    avatar.starts_with("http")
}

/// Placeholder shown for URL avatars — terminals cannot inline remote
/// images, so the host is shown as a marked image reference.
fn avatar_placeholder(url: &str) -> String {
    let host = url.split('/').nth(2).unwrap_or(url);
    format!("⊡ {host}")
}

/// Renders the profile region.  Every line degrades independently: when the
/// area is too short for a line, that line is simply skipped.
pub struct ProfileWidget<'a> {
    profile: &'a Profile,
    theme: &'a Theme,
}

impl<'a> ProfileWidget<'a> {
    pub fn new(profile: &'a Profile, theme: &'a Theme) -> Self {
        Self { profile, theme }
    }
}

impl<'a> Widget for ProfileWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let avatar = if avatar_is_url(&self.profile.avatar) {
            avatar_placeholder(&self.profile.avatar)
        } else {
            self.profile.avatar.clone()
        };

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(avatar, self.theme.avatar_style())),
            Line::from(Span::styled(
                self.profile.name.clone(),
                self.theme.profile_name_style(),
            )),
            Line::from(Span::styled(
                self.profile.bio.clone(),
                self.theme.bio_style(),
            )),
        ];
        if let Some(location) = &self.profile.location {
            lines.push(Line::from(Span::styled(
                format!("📍 {location}"),
                self.theme.bio_style(),
            )));
        }

        lines.truncate(area.height as usize);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_avatars_are_detected_by_prefix() {
        assert!(avatar_is_url("https://example.com/me.png"));
        assert!(avatar_is_url("http://example.com/me.png"));
        assert!(!avatar_is_url("🦀"));
        assert!(!avatar_is_url("AC"));
    }

    #[test]
    fn url_avatar_placeholder_names_the_host() {
        assert_eq!(
            avatar_placeholder("https://example.com/me.png"),
            "⊡ example.com"
        );
    }
}
