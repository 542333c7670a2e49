//! Popup overlay widgets — the settings menu and the import-error alert.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::settings::SETTINGS_ITEMS;
use crate::app::state::AppState;
use crate::ui::theme::Theme;

// ───────────────────────────────────────── settings popup ────

/// Settings menu popup overlay.
pub struct SettingsPopup<'a> {
    pub state: &'a AppState,
    pub selected: usize,
}

impl<'a> Widget for SettingsPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.state.theme;
        let height = (SETTINGS_ITEMS.len() as u16) + 6;
        let popup = centered_fixed(44, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Settings ")
            .title_style(theme.title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style());

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        for (i, item) in SETTINGS_ITEMS.iter().enumerate() {
            let (prefix, style) = if i == self.selected {
                (" ▸ ", theme.selected_style())
            } else {
                ("   ", Style::default().fg(theme.palette().text))
            };

            let suffix = item.value(self.state);
            let suffix_style = if suffix == "on" {
                Style::default().fg(theme.palette().accent)
            } else {
                Style::default().fg(theme.palette().text_secondary)
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{prefix}{:<24}", item.label()), style),
                Span::styled(suffix, suffix_style),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter/Space: change  Esc: close",
            Style::default().fg(theme.palette().text_secondary),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── alert popup ───────

/// Modal alert — used for import failures.  Dismiss with Esc/Enter.
pub struct AlertPopup<'a> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub message: &'a str,
}

impl<'a> Widget for AlertPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 50.min(area.width);
        // Wrap the message to the popup width, two columns of padding.
        let wrap = width.saturating_sub(4).max(1) as usize;
        let mut body: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in self.message.split_whitespace() {
            if !current.is_empty() && current.len() + word.len() + 1 > wrap {
                body.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            body.push(current);
        }

        let height = (body.len() as u16) + 6;
        let popup = centered_fixed(width, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(self.theme.alert_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style());

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        for row in body {
            lines.push(Line::from(Span::styled(
                format!("  {row}"),
                Style::default().fg(self.theme.palette().text),
            )));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Esc: dismiss",
            Style::default().fg(self.theme.palette().text_secondary),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── helpers ───────────

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
