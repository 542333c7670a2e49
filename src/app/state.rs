//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event
//! handling).  The card list is the render-layer projection of the model's
//! links; every model mutation regenerates it wholesale.

use ratatui::layout::Rect;

use crate::analytics::Sinks;
use crate::config::Prefs;
use crate::core::model::{LinkPage, Settings};
use crate::ui::links::{self, LinkCard, LinkListState, ALL_CATEGORIES};
use crate::ui::reveal::Reveal;
use crate::ui::theme::{Theme, ThemeName};

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Page,
    SettingsMenu,
    /// One-line input prompt for a new link.
    AddPrompt,
    /// Modal alert (import failures).
    Alert,
}

/// Top-level application state.
pub struct AppState {
    /// The in-memory page model (profile, links, settings).
    pub page: LinkPage,
    /// Render-layer card list, regenerated on every link mutation.
    pub cards: Vec<LinkCard>,
    /// Widget-level state (selection, scroll).
    pub list_state: LinkListState,
    /// Staggered-reveal clock for the card list.
    pub reveal: Reveal,
    /// Active colour theme.
    pub theme: Theme,
    /// Persisted preferences (the theme slot).
    pub prefs: Prefs,
    /// Analytics sinks notified on tracked clicks.
    pub sinks: Sinks,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Currently highlighted item in the settings menu.
    pub settings_selected: usize,
    /// Active category filter (presentation-only; `"all"` shows everything).
    pub filter: String,
    /// Input buffer for the add-link prompt.
    pub input: String,
    /// Current alert, when `active_view` is [`ActiveView::Alert`].
    pub alert: Option<(String, String)>,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Startup loading effect — cleared by a one-shot timer.
    pub loading: bool,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Last drawn frame area, for mouse hit-testing.
    pub frame_area: Rect,
}

impl AppState {
    pub fn new(page: LinkPage, theme: Theme, prefs: Prefs, sinks: Sinks) -> Self {
        let animations = page.settings.animations_enabled;
        let cards = links::rebuild_cards(&page);
        Self {
            page,
            cards,
            list_state: LinkListState::default(),
            reveal: Reveal::new(animations),
            theme,
            prefs,
            sinks,
            active_view: ActiveView::default(),
            settings_selected: 0,
            filter: ALL_CATEGORIES.into(),
            input: String::new(),
            alert: None,
            status_message: None,
            loading: true,
            should_quit: false,
            frame_area: Rect::default(),
        }
    }

    /// Regenerate the card list from the model and replay the entrance
    /// cascade.  The category filter does not survive a re-render, exactly
    /// like the original page's wholesale markup regeneration.
    pub fn rerender_links(&mut self) {
        self.cards = links::rebuild_cards(&self.page);
        self.filter = ALL_CATEGORIES.into();
        self.reveal.restart();

        // Selection may now point past the end of the list.
        let count = self.cards.len();
        if let Some(selected) = self.list_state.selected {
            if count == 0 {
                self.list_state.clear_focus();
                self.list_state.offset = 0;
            } else if selected >= count {
                self.list_state.selected = Some(count - 1);
            }
        }
    }

    /// Replace the settings wholesale and re-project the cards (the
    /// new-tab marker and animation gate live on them).
    pub fn apply_settings(&mut self, settings: Settings) {
        self.page.replace_settings(settings);
        self.reveal.set_enabled(settings.animations_enabled);
        self.rerender_links();
    }

    /// Switch themes and persist the choice.
    pub fn set_theme(&mut self, name: ThemeName) {
        self.theme.set(name);
        self.persist_theme(name);
    }

    /// Binary dark/light flip (bonus themes land on light), persisted.
    pub fn toggle_theme(&mut self) {
        let name = self.theme.toggle();
        self.persist_theme(name);
    }

    fn persist_theme(&mut self, name: ThemeName) {
        self.prefs.theme = Some(name);
        if let Err(err) = self.prefs.save() {
            tracing::warn!("could not persist theme: {err}");
        }
    }

    /// Number of cards the filter currently shows.
    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| c.visible).count()
    }

    /// Surface a modal alert.
    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.alert = Some((title.into(), message.into()));
        self.active_view = ActiveView::Alert;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(
            LinkPage::default(),
            Theme::default(),
            Prefs::default(),
            Sinks::none(),
        )
    }

    #[test]
    fn rerender_resets_the_filter() {
        let mut s = state();
        crate::ui::links::filter_by_category(&mut s.cards, "social");
        assert_eq!(s.visible_count(), 1);

        s.rerender_links();
        assert_eq!(s.filter, ALL_CATEGORIES);
        assert_eq!(s.visible_count(), s.page.links.len());
    }

    #[test]
    fn rerender_clamps_a_stale_selection() {
        let mut s = state();
        s.list_state.selected = Some(3);
        s.page.links.truncate(1);
        s.rerender_links();
        assert_eq!(s.list_state.selected, Some(0));
    }

    #[test]
    fn apply_settings_reprojects_cards() {
        let mut s = state();
        let mut settings = s.page.settings;
        settings.open_in_new_tab = false;
        s.apply_settings(settings);
        assert!(s.cards.iter().all(|c| !c.opens_new_tab));
    }
}
