//! In-memory page model — profile, ordered link list and settings.
//!
//! The [`LinkPage`] is the single source of truth the render layer projects
//! from.  Links live in a flat `Vec` whose order *is* the display order;
//! ids are unique within the sequence at all times.  Every mutation goes
//! through the narrow operation set below so call sites never touch the
//! sequence directly.

use serde::{Deserialize, Serialize};

// ───────────────────────────────────────── profile ───────────

/// The page owner's header data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    /// Emoji/text glyph, or an absolute URL to an image.
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Partial profile update — present fields replace, absent fields survive.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
}

// ───────────────────────────────────────── link ──────────────

/// One entry in the ordered link sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Symbolic glyph shown in the card's icon region.
    pub icon: String,
    #[serde(default)]
    pub featured: bool,
    /// Extra visual variant tag (e.g. `"accent"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Data for a new link — everything but the id, which the page assigns.
#[derive(Debug, Clone, Default)]
pub struct LinkDraft {
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    pub featured: bool,
    pub style: Option<String>,
    pub category: Option<String>,
}

// ───────────────────────────────────────── settings ──────────

/// Process-wide presentation switches.  Replaced wholesale, never field-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub open_in_new_tab: bool,
    pub track_clicks: bool,
    pub show_footer: bool,
    pub animations_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            open_in_new_tab: true,
            track_clicks: true,
            show_footer: true,
            animations_enabled: true,
        }
    }
}

// ───────────────────────────────────────── page ──────────────

/// Shallow top-level merge payload (the import file shape).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagePatch {
    pub profile: Option<Profile>,
    pub links: Option<Vec<Link>>,
    pub settings: Option<Settings>,
}

/// Aggregate counts shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStats {
    pub total_links: usize,
    pub featured_links: usize,
    /// Distinct categories in first-seen order (uncategorised links skipped).
    pub categories: Vec<String>,
}

/// The whole in-memory model: profile + ordered links + settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPage {
    pub profile: Profile,
    pub links: Vec<Link>,
    pub settings: Settings,
}

impl Default for LinkPage {
    /// The built-in demo page shown on first launch.
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Alex Carter".into(),
                bio: "Systems developer".into(),
                avatar: "🦀".into(),
                location: Some("Lisbon, Portugal".into()),
            },
            links: vec![
                Link {
                    id: 1,
                    title: "Mastodon".into(),
                    description: "Day-to-day posts".into(),
                    url: "https://hachyderm.io/@alexcarter".into(),
                    icon: "🐘".into(),
                    featured: true,
                    style: None,
                    category: Some("social".into()),
                },
                Link {
                    id: 2,
                    title: "LinkedIn".into(),
                    description: "Professional profile".into(),
                    url: "https://linkedin.com/in/alex-carter".into(),
                    icon: "💼".into(),
                    featured: false,
                    style: None,
                    category: Some("professional".into()),
                },
                Link {
                    id: 3,
                    title: "GitHub".into(),
                    description: "Code and projects".into(),
                    url: "https://github.com/alexcarter".into(),
                    icon: "🐙".into(),
                    featured: false,
                    style: None,
                    category: Some("code".into()),
                },
                Link {
                    id: 4,
                    title: "Email".into(),
                    description: "Get in touch".into(),
                    url: "mailto:hi@alexcarter.dev".into(),
                    icon: "📧".into(),
                    featured: false,
                    style: Some("accent".into()),
                    category: Some("contact".into()),
                },
            ],
            settings: Settings::default(),
        }
    }
}

impl LinkPage {
    /// Append a new link and return its id.
    ///
    /// Ids are derived from the wall clock (millisecond precision) and bumped
    /// past any existing id, so rapid successive adds stay unique.
    pub fn add_link(&mut self, draft: LinkDraft) -> u64 {
        let mut id = chrono::Utc::now().timestamp_millis().max(0) as u64;
        while self.links.iter().any(|l| l.id == id) {
            id += 1;
        }
        self.links.push(Link {
            id,
            title: draft.title,
            description: draft.description,
            url: draft.url,
            icon: draft.icon,
            featured: draft.featured,
            style: draft.style,
            category: draft.category,
        });
        id
    }

    /// Remove the link with `id`.  Unknown ids are a silent no-op.
    pub fn remove_link(&mut self, id: u64) {
        self.links.retain(|l| l.id != id);
    }

    /// Shallow-merge `patch` into the profile.
    pub fn update_profile(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.profile.name = name;
        }
        if let Some(bio) = patch.bio {
            self.profile.bio = bio;
        }
        if let Some(avatar) = patch.avatar {
            self.profile.avatar = avatar;
        }
        if let Some(location) = patch.location {
            self.profile.location = Some(location);
        }
    }

    /// Replace the settings wholesale.
    pub fn replace_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Rebuild the sequence in the order given by `ids`.  Ids that no longer
    /// exist are silently dropped; links absent from `ids` are dropped too,
    /// matching a caller that supplies the full ordering.
    pub fn reorder_links(&mut self, ids: &[u64]) {
        let reordered: Vec<Link> = ids
            .iter()
            .filter_map(|id| self.links.iter().find(|l| l.id == *id).cloned())
            .collect();
        self.links = reordered;
    }

    /// Look up a link by id.
    pub fn link(&self, id: u64) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Merge an imported payload: top-level keys only, each replacing its
    /// aggregate wholesale when present.
    pub fn merge(&mut self, patch: PagePatch) {
        if let Some(profile) = patch.profile {
            self.profile = profile;
        }
        if let Some(links) = patch.links {
            self.links = links;
        }
        if let Some(settings) = patch.settings {
            self.settings = settings;
        }
    }

    /// Aggregate counts for the footer line.
    pub fn stats(&self) -> PageStats {
        let mut categories: Vec<String> = Vec::new();
        for link in &self.links {
            if let Some(cat) = &link.category {
                if !categories.iter().any(|c| c == cat) {
                    categories.push(cat.clone());
                }
            }
        }
        PageStats {
            total_links: self.links.len(),
            featured_links: self.links.iter().filter(|l| l.featured).count(),
            categories,
        }
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> LinkDraft {
        LinkDraft {
            title: title.into(),
            description: "d".into(),
            url: "https://example.com".into(),
            icon: "•".into(),
            ..LinkDraft::default()
        }
    }

    #[test]
    fn default_page_has_unique_ids_in_order() {
        let page = LinkPage::default();
        let ids: Vec<u64> = page.links.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn add_then_remove_restores_sequence() {
        let mut page = LinkPage::default();
        let before: Vec<u64> = page.links.iter().map(|l| l.id).collect();

        let id = page.add_link(draft("temp"));
        assert!(page.link(id).is_some());
        assert_eq!(page.links.last().unwrap().id, id, "appends at the end");

        page.remove_link(id);
        let after: Vec<u64> = page.links.iter().map(|l| l.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn added_ids_stay_unique_under_rapid_adds() {
        let mut page = LinkPage::default();
        let a = page.add_link(draft("a"));
        let b = page.add_link(draft("b"));
        let c = page.add_link(draft("c"));
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut page = LinkPage::default();
        let before = page.clone();
        page.remove_link(9999);
        assert_eq!(before, page);
    }

    #[test]
    fn remove_middle_link_keeps_order() {
        let mut page = LinkPage::default();
        page.remove_link(2);
        let ids: Vec<u64> = page.links.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn reorder_drops_unknown_ids() {
        let mut page = LinkPage::default();
        page.reorder_links(&[4, 99, 1, 3, 2]);
        let ids: Vec<u64> = page.links.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![4, 1, 3, 2]);
    }

    #[test]
    fn update_profile_merges_shallowly() {
        let mut page = LinkPage::default();
        let old_bio = page.profile.bio.clone();
        page.update_profile(ProfilePatch {
            name: Some("New Name".into()),
            ..ProfilePatch::default()
        });
        assert_eq!(page.profile.name, "New Name");
        assert_eq!(page.profile.bio, old_bio, "absent fields survive");
    }

    #[test]
    fn merge_replaces_only_present_aggregates() {
        let mut page = LinkPage::default();
        let profile_before = page.profile.clone();
        page.merge(PagePatch {
            links: Some(vec![]),
            ..PagePatch::default()
        });
        assert!(page.links.is_empty());
        assert_eq!(page.profile, profile_before);
        assert_eq!(page.settings, Settings::default());
    }

    #[test]
    fn stats_counts_featured_and_distinct_categories() {
        let page = LinkPage::default();
        let stats = page.stats();
        assert_eq!(stats.total_links, 4);
        assert_eq!(stats.featured_links, 1);
        assert_eq!(
            stats.categories,
            vec!["social", "professional", "code", "contact"]
        );
    }
}
