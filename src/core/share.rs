//! Share action — a plain-text rendering of the page handed to the
//! system clipboard.

use super::model::LinkPage;

/// Render the page as a shareable text card: name, bio, then one line
/// per link.
pub fn share_text(page: &LinkPage) -> String {
    let mut out = String::new();
    out.push_str(&page.profile.name);
    out.push('\n');
    out.push_str(&page.profile.bio);
    out.push('\n');
    if let Some(location) = &page.profile.location {
        out.push_str(location);
        out.push('\n');
    }
    out.push('\n');
    for link in &page.links {
        out.push_str(&format!("{} — {}\n", link.title, link.url));
    }
    out
}

/// Copy the share card to the clipboard.  Returns the number of links
/// shared, or the clipboard error for the caller to surface.
pub fn share_to_clipboard(page: &LinkPage) -> Result<usize, arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(share_text(page))?;
    Ok(page.links.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_text_lists_every_link() {
        let page = LinkPage::default();
        let text = share_text(&page);
        assert!(text.starts_with(&page.profile.name));
        for link in &page.links {
            assert!(text.contains(&link.url));
        }
    }
}
