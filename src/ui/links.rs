//! Link-card list — the render-layer projection of the model's links and
//! the stateful widget that draws it.
//!
//! [`rebuild_cards`] regenerates the whole card list from the model (no
//! incremental diffing); the category filter then operates on the cards
//! only, never on the model.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::model::LinkPage;
use crate::ui::reveal::Reveal;
use crate::ui::theme::Theme;

/// Category attached to cards whose link has none.
pub const DEFAULT_CATEGORY: &str = "general";

/// Sentinel that makes the filter show every card.
pub const ALL_CATEGORIES: &str = "all";

/// Terminal rows per card: title line, description line, separator.
pub const CARD_HEIGHT: u16 = 3;

// ───────────────────────────────────────── card model ────────

/// One rendered link element.  Everything the interaction layer needs is
/// carried on the card so a click never has to reach back into the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCard {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    pub featured: bool,
    /// Explicit style-variant tag (e.g. `"accent"`).
    pub variant: Option<String>,
    pub category: String,
    /// Whether activation hands the URL to the platform opener.
    pub opens_new_tab: bool,
    /// Accessible label: title and description combined.
    pub label: String,
    /// Presentation-layer visibility (category filter).
    pub visible: bool,
    /// Click feedback flash, cleared by a one-shot timer.
    pub pulsing: bool,
}

/// Regenerate the card list wholesale from the model, in sequence order.
pub fn rebuild_cards(page: &LinkPage) -> Vec<LinkCard> {
    page.links
        .iter()
        .map(|link| LinkCard {
            id: link.id,
            title: link.title.clone(),
            description: link.description.clone(),
            url: link.url.clone(),
            icon: link.icon.clone(),
            featured: link.featured,
            variant: link.style.clone(),
            category: link
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.into()),
            opens_new_tab: page.settings.open_in_new_tab,
            label: format!("{} — {}", link.title, link.description),
            visible: true,
            pulsing: false,
        })
        .collect()
}

/// Show cards matching `category` (or all of them for the `"all"`
/// sentinel), hide the rest.  Purely presentational — the model is
/// untouched and hidden cards stay in the list.
pub fn filter_by_category(cards: &mut [LinkCard], category: &str) {
    for card in cards.iter_mut() {
        card.visible = category == ALL_CATEGORIES || card.category == category;
    }
}

/// Indices of the cards the filter currently shows, in order.
pub fn visible_indices(cards: &[LinkCard]) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.visible)
        .map(|(i, _)| i)
        .collect()
}

// ───────────────────────────────────────── state ─────────────

/// Persistent widget state: selection and scroll, both in *visible-card*
/// positions.  `selected` is `None` when nothing holds focus.
#[derive(Debug, Default)]
pub struct LinkListState {
    pub selected: Option<usize>,
    pub offset: usize,
}

impl LinkListState {
    pub fn select_next(&mut self, max: usize) {
        if max == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < max => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    /// Drop focus entirely (Esc).
    pub fn clear_focus(&mut self) {
        self.selected = None;
    }

    /// Keep the selected card inside a viewport of `viewport_cards` rows.
    pub fn clamp_scroll(&mut self, viewport_cards: usize) {
        if viewport_cards == 0 {
            return;
        }
        let Some(selected) = self.selected else {
            return;
        };
        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + viewport_cards {
            self.offset = selected - viewport_cards + 1;
        }
    }

    /// Scroll so the visible card at `position` is on screen (used by the
    /// delayed scroll-into-view after an add).
    pub fn scroll_to(&mut self, position: usize, viewport_cards: usize) {
        self.selected = Some(position);
        self.clamp_scroll(viewport_cards.max(1));
    }
}

/// Resolve which card (global index) sits under a terminal position.
pub fn card_at_position(
    cards: &[LinkCard],
    state: &LinkListState,
    inner: Rect,
    column: u16,
    row: u16,
) -> Option<usize> {
    if column < inner.x
        || column >= inner.x + inner.width
        || row < inner.y
        || row >= inner.y + inner.height
    {
        return None;
    }
    let slot = ((row - inner.y) / CARD_HEIGHT) as usize + state.offset;
    visible_indices(cards).get(slot).copied()
}

// ───────────────────────────────────────── widget ────────────

/// The card list widget — created fresh each frame.
pub struct LinkListWidget<'a> {
    cards: &'a [LinkCard],
    theme: &'a Theme,
    reveal: &'a Reveal,
    block: Option<Block<'a>>,
}

impl<'a> LinkListWidget<'a> {
    pub fn new(cards: &'a [LinkCard], theme: &'a Theme, reveal: &'a Reveal) -> Self {
        Self {
            cards,
            theme,
            reveal,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> StatefulWidget for LinkListWidget<'a> {
    type State = LinkListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Resolve the inner area (inside the optional block border).  An
        // absent or empty slot means there is nothing to render into.
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = visible_indices(self.cards);
        let viewport_cards = (inner.height / CARD_HEIGHT).max(1) as usize;
        state.clamp_scroll(viewport_cards);

        let shown = visible
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(viewport_cards);

        for (slot, (position, &card_idx)) in shown.enumerate() {
            let card = &self.cards[card_idx];
            // Staggered reveal is positional over the whole card list.
            if !self.reveal.is_revealed(card_idx) {
                continue;
            }

            let y = inner.y + (slot as u16) * CARD_HEIGHT;
            let is_selected = state.selected == Some(position);

            let title_style = if card.pulsing {
                self.theme.pulse_style()
            } else if is_selected {
                self.theme.selected_style()
            } else {
                self.theme
                    .card_title_style(card.featured, card.variant.as_deref())
            };

            // Title row: icon, title, trailing open indicator.
            let indicator = if card.opens_new_tab { "↗" } else { "→" };
            let mut spans = vec![
                Span::styled(format!(" {} ", card.icon), self.theme.card_icon_style()),
                Span::styled(card.title.clone(), title_style),
            ];
            if card.featured {
                spans.push(Span::styled(" ★", self.theme.card_title_style(true, None)));
            }
            let indicator_col = inner
                .width
                .saturating_sub(spans.iter().map(|s| s.width() as u16).sum::<u16>() + 2);
            spans.push(Span::raw(" ".repeat(indicator_col as usize)));
            spans.push(Span::styled(indicator, self.theme.card_indicator_style()));
            buf.set_line(inner.x, y, &Line::from(spans), inner.width);

            // Description row, indented under the title.
            if y + 1 < inner.y + inner.height {
                let desc = Line::from(vec![
                    Span::raw("   "),
                    Span::styled(
                        card.description.clone(),
                        self.theme.card_description_style(),
                    ),
                ]);
                buf.set_line(inner.x, y + 1, &desc, inner.width);
            }
        }
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_card_per_link_in_model_order() {
        let page = LinkPage::default();
        let cards = rebuild_cards(&page);

        assert_eq!(cards.len(), page.links.len());
        for (card, link) in cards.iter().zip(&page.links) {
            assert_eq!(card.id, link.id);
            assert_eq!(card.title, link.title);
            assert_eq!(card.description, link.description);
            assert_eq!(card.url, link.url);
            assert_eq!(
                card.category.as_str(),
                link.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
            );
        }
    }

    #[test]
    fn uncategorised_links_get_the_default_category() {
        let mut page = LinkPage::default();
        page.links[0].category = None;
        let cards = rebuild_cards(&page);
        assert_eq!(cards[0].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn label_combines_title_and_description() {
        let cards = rebuild_cards(&LinkPage::default());
        let first = &cards[0];
        assert!(first.label.contains(&first.title));
        assert!(first.label.contains(&first.description));
    }

    #[test]
    fn new_tab_marker_follows_settings() {
        let mut page = LinkPage::default();
        page.settings.open_in_new_tab = false;
        assert!(rebuild_cards(&page).iter().all(|c| !c.opens_new_tab));

        page.settings.open_in_new_tab = true;
        assert!(rebuild_cards(&page).iter().all(|c| c.opens_new_tab));
    }

    #[test]
    fn filter_shows_matching_cards_only() {
        let mut cards = rebuild_cards(&LinkPage::default());
        filter_by_category(&mut cards, "social");

        for card in &cards {
            assert_eq!(card.visible, card.category == "social");
        }
        assert_eq!(visible_indices(&cards), vec![0]);
    }

    #[test]
    fn filter_all_restores_every_card() {
        let mut cards = rebuild_cards(&LinkPage::default());
        filter_by_category(&mut cards, "social");
        filter_by_category(&mut cards, ALL_CATEGORIES);
        assert!(cards.iter().all(|c| c.visible));
    }

    #[test]
    fn cards_track_titles_after_removal() {
        let mut page = LinkPage::default();
        page.remove_link(2);
        let cards = rebuild_cards(&page);

        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        let expected: Vec<&str> = page.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, expected);
        assert_eq!(cards.len(), 3);
    }

    #[test]
    fn selection_clamps_at_the_ends() {
        let mut state = LinkListState::default();
        state.select_prev();
        assert_eq!(state.selected, Some(0));
        state.select_next(2);
        assert_eq!(state.selected, Some(1));
        state.select_next(2);
        assert_eq!(state.selected, Some(1));
        state.clear_focus();
        assert_eq!(state.selected, None);
    }
}
