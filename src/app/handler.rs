//! Input handling — maps key/mouse events to state mutations.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Margin;

use crate::analytics::ClickEvent;
use crate::core::model::LinkDraft;
use crate::core::{share, transfer};
use crate::ui::layout::AppLayout;
use crate::ui::links::{self, ALL_CATEGORIES};

use super::event::{schedule, spawn_import, Effect, EffectSender};
use super::settings::SETTINGS_ITEMS;
use super::state::{ActiveView, AppState};

/// Click-feedback pulse length.
pub const PULSE_DURATION: Duration = Duration::from_millis(100);
/// Delay before scrolling a freshly added link into view.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Default bottom-bar hint.
pub const STATUS_HINT: &str =
    "↑/↓ move · Enter open · a add · x remove · f filter · t theme · e/i export/import · ? settings · q quit";

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent, effects: &EffectSender) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Page => handle_page_key(state, key, effects),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
        ActiveView::AddPrompt => handle_prompt_key(state, key, effects),
        ActiveView::Alert => handle_alert_key(state, key),
    }
}

// ── Page view ───────────────────────────────────────────────────

fn handle_page_key(state: &mut AppState, key: KeyEvent, effects: &EffectSender) {
    // Platform-modifier + digit opens the Nth link, exactly as a click.
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
    {
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            let n = (c as usize) - ('1' as usize);
            activate_nth(state, n, effects);
            return;
        }
    }

    // Shift+arrows reorder before plain arrows navigate.
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        match key.code {
            KeyCode::Up => {
                move_selected(state, -1);
                return;
            }
            KeyCode::Down => {
                move_selected(state, 1);
                return;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => {
            // Clear focus from whatever holds it.
            state.list_state.clear_focus();
            state.status_message = None;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.list_state.select_prev();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let count = state.visible_count();
            state.list_state.select_next(count);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            activate_selected(state, effects);
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            remove_selected(state);
        }
        KeyCode::Char('a') => {
            state.input.clear();
            state.active_view = ActiveView::AddPrompt;
            state.status_message = Some("add: Title | https://url [| description]".into());
        }
        KeyCode::Char('t') => {
            state.toggle_theme();
            state.status_message = Some(format!("Theme: {}", state.theme.name().as_str()));
        }
        KeyCode::Char('f') => {
            cycle_filter(state);
        }
        KeyCode::Char('e') => {
            export_page(state);
        }
        KeyCode::Char('i') => {
            let path = PathBuf::from(transfer::EXPORT_FILENAME);
            state.status_message = Some(format!("Importing {}…", path.display()));
            spawn_import(effects, path);
        }
        KeyCode::Char('s') => {
            share_page(state);
        }
        KeyCode::Char('?') => {
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
        KeyCode::Char('q') => {
            state.should_quit = true;
        }
        _ => {}
    }
}

// ── Settings menu ───────────────────────────────────────────────

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.active_view = ActiveView::Page;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.settings_selected + 1 < SETTINGS_ITEMS.len() {
                state.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            SETTINGS_ITEMS[state.settings_selected].activate(state);
        }
        _ => {}
    }
}

// ── Add-link prompt ─────────────────────────────────────────────

fn handle_prompt_key(state: &mut AppState, key: KeyEvent, effects: &EffectSender) {
    match key.code {
        KeyCode::Esc => {
            state.input.clear();
            state.active_view = ActiveView::Page;
            state.status_message = None;
        }
        KeyCode::Enter => match parse_draft(&state.input) {
            Some(draft) => {
                let title = draft.title.clone();
                let id = state.page.add_link(draft);
                state.rerender_links();
                // Give the new card a beat to exist before scrolling to it.
                schedule(effects, SCROLL_DELAY, Effect::ScrollToCard { link_id: id });
                state.input.clear();
                state.active_view = ActiveView::Page;
                state.status_message = Some(format!("Added {title}"));
            }
            None => {
                state.status_message =
                    Some("add: Title | https://url [| description]".into());
            }
        },
        KeyCode::Backspace => {
            state.input.pop();
        }
        KeyCode::Char(c) => {
            state.input.push(c);
        }
        _ => {}
    }
}

/// Parse the prompt buffer: `Title | url [| description]`.
pub fn parse_draft(input: &str) -> Option<LinkDraft> {
    let mut parts = input.split('|').map(str::trim);
    let title = parts.next().filter(|s| !s.is_empty())?;
    let url = parts.next().filter(|s| !s.is_empty())?;
    let description = parts.next().unwrap_or("").to_string();

    Some(LinkDraft {
        title: title.to_string(),
        description,
        url: url.to_string(),
        icon: "🔗".into(),
        featured: false,
        style: None,
        category: None,
    })
}

// ── Alert ───────────────────────────────────────────────────────

fn handle_alert_key(state: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
        state.alert = None;
        state.active_view = ActiveView::Page;
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// A left click on a card selects and activates it.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, effects: &EffectSender) {
    if state.active_view != ActiveView::Page {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let inner = links_inner(state);
    let Some(card_idx) =
        links::card_at_position(&state.cards, &state.list_state, inner, mouse.column, mouse.row)
    else {
        return;
    };

    let position = links::visible_indices(&state.cards)
        .iter()
        .position(|&i| i == card_idx);
    state.list_state.selected = position;
    activate_card(state, card_idx, effects);
}

/// The card list's drawable region (inside the block border), derived from
/// the last drawn frame.
pub fn links_inner(state: &AppState) -> ratatui::layout::Rect {
    let layout = AppLayout::from_area(state.frame_area, state.page.settings.show_footer);
    layout.links_area.inner(Margin::new(1, 1))
}

// ── Activation ──────────────────────────────────────────────────

/// Open the Nth card of the rendered list (0-indexed), hidden or not —
/// the shortcut addresses render order, not the filter.
fn activate_nth(state: &mut AppState, n: usize, effects: &EffectSender) {
    if n < state.cards.len() {
        activate_card(state, n, effects);
    }
}

fn activate_selected(state: &mut AppState, effects: &EffectSender) {
    let Some(position) = state.list_state.selected else {
        return;
    };
    let Some(&card_idx) = links::visible_indices(&state.cards).get(position) else {
        return;
    };
    activate_card(state, card_idx, effects);
}

/// The single activation path shared by mouse clicks, Enter and the digit
/// shortcuts: track (when enabled), pulse, then hand the URL on.
pub fn activate_card(state: &mut AppState, card_idx: usize, effects: &EffectSender) {
    let Some(card) = state.cards.get(card_idx).cloned() else {
        return;
    };

    if state.page.settings.track_clicks {
        state.sinks.record_click(&ClickEvent {
            link_id: card.id,
            url: card.url.clone(),
            category: card.category.clone(),
        });

        if let Some(c) = state.cards.get_mut(card_idx) {
            c.pulsing = true;
        }
        schedule(effects, PULSE_DURATION, Effect::PulseExpired { link_id: card.id });
    }

    if card.opens_new_tab {
        open_url(&card.url);
        state.status_message = Some(format!("Opened {}", card.url));
    } else {
        state.status_message = Some(card.label.clone());
    }
}

/// Hand a URL to the platform opener.  Failures degrade to a traced
/// warning — navigation is the desktop's job, not ours.
fn open_url(url: &str) {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = std::process::Command::new("open");
        c.arg(url);
        c
    };
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = std::process::Command::new("xdg-open");
        c.arg(url);
        c
    };

    if let Err(err) = command.spawn() {
        tracing::warn!("could not open {url}: {err}");
    }
}

// ── Model operations behind keys ────────────────────────────────

fn remove_selected(state: &mut AppState) {
    let Some(position) = state.list_state.selected else {
        return;
    };
    let Some(&card_idx) = links::visible_indices(&state.cards).get(position) else {
        return;
    };
    let id = state.cards[card_idx].id;
    let title = state
        .page
        .link(id)
        .map(|l| l.title.clone())
        .unwrap_or_default();

    state.page.remove_link(id);
    state.rerender_links();
    state.status_message = Some(format!("Removed {title}"));
}

/// Move the selected link one slot up or down in the model order.
fn move_selected(state: &mut AppState, delta: isize) {
    let Some(position) = state.list_state.selected else {
        return;
    };
    let Some(&card_idx) = links::visible_indices(&state.cards).get(position) else {
        return;
    };
    let id = state.cards[card_idx].id;

    let mut ids: Vec<u64> = state.page.links.iter().map(|l| l.id).collect();
    let Some(from) = ids.iter().position(|&i| i == id) else {
        return;
    };
    let to = from as isize + delta;
    if to < 0 || to as usize >= ids.len() {
        return;
    }
    ids.swap(from, to as usize);

    state.page.reorder_links(&ids);
    state.rerender_links();
    // Keep focus on the moved card (re-render shows everything, so the
    // visible position equals the model position).
    state.list_state.selected = Some(to as usize);
}

/// Advance the category filter: all → each category in first-seen order → all.
fn cycle_filter(state: &mut AppState) {
    let categories = state.page.stats().categories;
    let next = if state.filter == ALL_CATEGORIES {
        categories.first().cloned().unwrap_or_else(|| ALL_CATEGORIES.into())
    } else {
        match categories.iter().position(|c| *c == state.filter) {
            Some(i) if i + 1 < categories.len() => categories[i + 1].clone(),
            _ => ALL_CATEGORIES.into(),
        }
    };

    links::filter_by_category(&mut state.cards, &next);
    state.filter = next.clone();
    // Shown cards replay their fade-in.
    state.reveal.restart();
    state.list_state.clear_focus();
    state.list_state.offset = 0;
    state.status_message = Some(format!("Filter: {next}"));
}

fn export_page(state: &mut AppState) {
    match transfer::export_to_file(&state.page, Path::new(".")) {
        Ok(path) => {
            state.status_message = Some(format!("Exported to {}", path.display()));
        }
        Err(err) => {
            tracing::warn!("export failed: {err}");
            state.status_message = Some(format!("Export failed: {err}"));
        }
    }
}

fn share_page(state: &mut AppState) {
    match share::share_to_clipboard(&state.page) {
        Ok(count) => {
            state.status_message = Some(format!("Copied profile and {count} links to clipboard"));
        }
        Err(err) => {
            tracing::warn!("share failed: {err}");
            state.status_message = Some("Clipboard unavailable".into());
        }
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Sinks;
    use crate::config::Prefs;
    use crate::core::model::LinkPage;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(
            LinkPage::default(),
            Theme::default(),
            Prefs::default(),
            Sinks::none(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn parse_draft_requires_title_and_url() {
        assert!(parse_draft("").is_none());
        assert!(parse_draft("Title").is_none());
        assert!(parse_draft("Title |").is_none());

        let draft = parse_draft("Blog | https://blog.example | posts").unwrap();
        assert_eq!(draft.title, "Blog");
        assert_eq!(draft.url, "https://blog.example");
        assert_eq!(draft.description, "posts");

        let bare = parse_draft("Blog | https://blog.example").unwrap();
        assert_eq!(bare.description, "");
    }

    #[tokio::test]
    async fn escape_clears_focus() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut s = state();
        s.list_state.selected = Some(2);
        handle_key(&mut s, key(KeyCode::Esc), &tx);
        assert_eq!(s.list_state.selected, None);
    }

    #[tokio::test]
    async fn removing_the_selected_link_mutates_the_model() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut s = state();
        s.list_state.selected = Some(1); // link id 2
        handle_key(&mut s, key(KeyCode::Char('x')), &tx);

        let ids: Vec<u64> = s.page.links.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(s.cards.len(), 3);
    }

    #[tokio::test]
    async fn shift_down_reorders_the_model() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut s = state();
        s.list_state.selected = Some(0);
        handle_key(
            &mut s,
            KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT),
            &tx,
        );

        let ids: Vec<u64> = s.page.links.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
        assert_eq!(s.list_state.selected, Some(1), "focus follows the card");
    }

    #[tokio::test]
    async fn filter_cycles_through_categories_and_back_to_all() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut s = state();

        handle_key(&mut s, key(KeyCode::Char('f')), &tx);
        assert_eq!(s.filter, "social");
        assert_eq!(s.visible_count(), 1);

        // professional, code, contact, then back to all.
        for _ in 0..4 {
            handle_key(&mut s, key(KeyCode::Char('f')), &tx);
        }
        assert_eq!(s.filter, ALL_CATEGORIES);
        assert_eq!(s.visible_count(), 4);
    }

    #[tokio::test]
    async fn untracked_clicks_reach_no_sink_and_do_not_pulse() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut s = state();
        let mut settings = s.page.settings;
        settings.track_clicks = false;
        settings.open_in_new_tab = false;
        s.apply_settings(settings);

        activate_card(&mut s, 0, &tx);
        assert!(!s.cards[0].pulsing);
        // Activation still surfaces the accessible label.
        assert_eq!(s.status_message.as_deref(), Some(s.cards[0].label.as_str()));
    }

    #[tokio::test]
    async fn digit_shortcut_addresses_render_order() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut s = state();
        let mut settings = s.page.settings;
        settings.open_in_new_tab = false;
        settings.track_clicks = false;
        s.apply_settings(settings);

        handle_key(
            &mut s,
            KeyEvent::new(KeyCode::Char('3'), KeyModifiers::CONTROL),
            &tx,
        );
        assert_eq!(s.status_message.as_deref(), Some(s.cards[2].label.as_str()));
    }
}
