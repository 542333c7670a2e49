//! Import/export of the page model as JSON.
//!
//! Export serialises the whole model; import parses a shallow top-level
//! payload and merges it into the live page.  Parsing happens *before* any
//! mutation, so a malformed file leaves the model untouched.

use std::path::Path;

use super::model::{LinkPage, PagePatch};

/// Fixed filename offered for exports.
pub const EXPORT_FILENAME: &str = "linktree-data.json";

/// What can go wrong at the import boundary.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialise the entire model to pretty JSON.
pub fn export_data(page: &LinkPage) -> String {
    // The model shape is the file format; serialisation cannot fail.
    serde_json::to_string_pretty(page).unwrap_or_default()
}

/// Write the exported model next to the working directory under the fixed
/// filename, returning the path written.
pub fn export_to_file(page: &LinkPage, dir: &Path) -> std::io::Result<std::path::PathBuf> {
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, export_data(page))?;
    Ok(path)
}

/// Parse `text` and merge its top-level keys into `page`.
///
/// The merge only happens after a successful parse; on error the page is
/// exactly as it was.
pub fn import_data(page: &mut LinkPage, text: &str) -> Result<(), TransferError> {
    let patch: PagePatch = serde_json::from_str(text)?;
    page.merge(patch);
    Ok(())
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Settings;

    #[test]
    fn export_then_import_roundtrips_the_model() {
        let original = LinkPage::default();
        let text = export_data(&original);

        let mut restored = LinkPage {
            profile: crate::core::model::Profile {
                name: String::new(),
                bio: String::new(),
                avatar: String::new(),
                location: None,
            },
            links: vec![],
            settings: Settings {
                open_in_new_tab: false,
                track_clicks: false,
                show_footer: false,
                animations_enabled: false,
            },
        };
        import_data(&mut restored, &text).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn malformed_json_leaves_the_model_unchanged() {
        let mut page = LinkPage::default();
        let before = page.clone();

        let err = import_data(&mut page, "{not json").unwrap_err();
        assert!(matches!(err, TransferError::Parse(_)));
        assert_eq!(before, page);
    }

    #[test]
    fn partial_import_touches_only_present_keys() {
        let mut page = LinkPage::default();
        let profile_before = page.profile.clone();

        import_data(&mut page, r#"{"links": []}"#).unwrap();
        assert!(page.links.is_empty());
        assert_eq!(page.profile, profile_before);
    }

    #[test]
    fn export_writes_the_fixed_filename() {
        let dir = tempfile::tempdir().unwrap();
        let page = LinkPage::default();
        let path = export_to_file(&page, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILENAME);

        let text = std::fs::read_to_string(path).unwrap();
        let mut restored = LinkPage::default();
        restored.links.clear();
        import_data(&mut restored, &text).unwrap();
        assert_eq!(restored, page);
    }
}
