//! Persisted preferences — the active theme name.
//!
//! One slot, stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/link-tree/config.toml` (default
//! `~/.config/link-tree/config.toml`).  Read once at startup, written on
//! every theme change; last write wins.

use std::path::{Path, PathBuf};

use crate::ui::theme::ThemeName;

/// On-disk preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefs {
    /// Saved theme, `None` until the user first changes it — startup then
    /// keeps the compiled-in default.
    pub theme: Option<ThemeName>,
}

impl Prefs {
    /// Load preferences from disk, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        Self::parse(&contents)
    }

    /// Persist current preferences to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    fn parse(s: &str) -> Self {
        let mut prefs = Self::default();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if key.trim() == "theme" {
                // Unknown names are ignored; the slot stays empty.
                prefs.theme = ThemeName::parse(value.trim().trim_matches('"'));
            }
        }
        prefs
    }

    fn serialise(&self) -> String {
        let mut lines = vec!["# link-tree configuration".to_string(), String::new()];
        if let Some(theme) = self.theme {
            lines.push(format!("theme = {}", theme.as_str()));
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/link-tree/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("link-tree").join("config.toml")
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_roundtrips_the_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let prefs = Prefs {
            theme: Some(ThemeName::Sunset),
        };
        prefs.save_to(&path).unwrap();

        assert_eq!(Prefs::load_from(&path), prefs);
    }

    #[test]
    fn missing_file_means_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Prefs::load_from(&dir.path().join("nope.toml"));
        assert_eq!(prefs.theme, None);
    }

    #[test]
    fn unknown_theme_in_file_is_ignored() {
        let prefs = Prefs::parse("theme = disco\n");
        assert_eq!(prefs.theme, None);
    }
}
