//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: profile header, link list, optional footer and a
/// bottom status bar.  On very small terminals regions collapse to zero
/// height; widgets treat an empty region as "slot absent" and skip it.
pub struct AppLayout {
    pub profile_area: Rect,
    pub links_area: Rect,
    pub footer_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, show_footer: bool) -> Self {
        let footer_height = u16::from(show_footer);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),             // profile header
                Constraint::Min(0),                // link list (remaining space)
                Constraint::Length(footer_height), // footer (stats line)
                Constraint::Length(1),             // status bar
            ])
            .split(area);

        Self {
            profile_area: chunks[0],
            links_area: chunks[1],
            footer_area: chunks[2],
            status_area: chunks[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_region_collapses_when_disabled() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.footer_area.height, 0);

        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.footer_area.height, 1);
    }

    #[test]
    fn tiny_terminal_yields_empty_regions_not_panics() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 10, 2), true);
        // Whatever the split decides, no region may exceed the frame.
        assert!(layout.links_area.height <= 2);
    }
}
