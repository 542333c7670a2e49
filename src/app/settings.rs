//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the
//! handler and the popup renderer consume the same source of truth
//! without cross-importing.
//!
//! The four model switches go through [`AppState::apply_settings`] so the
//! settings object is always replaced wholesale, never mutated field-wise.

use super::state::AppState;
use crate::core::model::Settings;

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Boolean switch on the page settings.
    Toggle {
        label: &'static str,
        get: fn(&Settings) -> bool,
        set: fn(&mut Settings, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle { label, .. } | Self::Cycle { label, .. } => label,
        }
    }

    /// Current value shown beside the label.
    pub fn value(&self, state: &AppState) -> String {
        match self {
            Self::Toggle { get, .. } => {
                if get(&state.page.settings) {
                    "on".into()
                } else {
                    "off".into()
                }
            }
            Self::Cycle { value, .. } => value(state),
        }
    }

    /// Activate the item (Enter/Space in the menu).
    pub fn activate(&self, state: &mut AppState) {
        match self {
            Self::Toggle { get, set, .. } => {
                let mut settings = state.page.settings;
                let flipped = !get(&settings);
                set(&mut settings, flipped);
                state.apply_settings(settings);
            }
            Self::Cycle { cycle, .. } => cycle(state),
        }
    }
}

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Cycle {
        label: "Theme",
        value: |s| s.theme.name().as_str().to_string(),
        cycle: |s| {
            // Direct selection — the only path to the ocean/sunset bonus
            // themes, since the toggle is strictly dark/light.
            let next = s.theme.name().next();
            s.set_theme(next);
            s.status_message = Some(format!("Theme: {}", next.as_str()));
        },
    },
    SettingsItem::Toggle {
        label: "Open in new tab",
        get: |s| s.open_in_new_tab,
        set: |s, v| s.open_in_new_tab = v,
    },
    SettingsItem::Toggle {
        label: "Track clicks",
        get: |s| s.track_clicks,
        set: |s, v| s.track_clicks = v,
    },
    SettingsItem::Toggle {
        label: "Show footer",
        get: |s| s.show_footer,
        set: |s, v| s.show_footer = v,
    },
    SettingsItem::Toggle {
        label: "Animations",
        get: |s| s.animations_enabled,
        set: |s, v| s.animations_enabled = v,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Sinks;
    use crate::config::Prefs;
    use crate::core::model::LinkPage;
    use crate::ui::theme::Theme;

    #[test]
    fn toggles_replace_settings_wholesale() {
        let mut state = AppState::new(
            LinkPage::default(),
            Theme::default(),
            Prefs::default(),
            Sinks::none(),
        );
        let item = SETTINGS_ITEMS
            .iter()
            .find(|i| i.label() == "Track clicks")
            .unwrap();

        assert_eq!(item.value(&state), "on");
        item.activate(&mut state);
        assert!(!state.page.settings.track_clicks);
        // Siblings survive the replacement.
        assert!(state.page.settings.open_in_new_tab);
    }
}
