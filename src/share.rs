//! Sharing the active slide as a `file://` link.

use std::path::Path;

use tracing::info;

/// Where shared links go when the platform can take them.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied(String),
    /// No usable clipboard; the link was written to the log instead.
    Logged(String),
}

pub fn file_url(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let raw = absolute.to_string_lossy().replace('\\', "/");

    let mut url = String::from("file://");
    if !raw.starts_with('/') {
        url.push('/');
    }
    for c in raw.chars() {
        match c {
            ' ' => url.push_str("%20"),
            '#' => url.push_str("%23"),
            '?' => url.push_str("%3F"),
            '%' => url.push_str("%25"),
            c => url.push(c),
        }
    }
    url
}

pub fn share_text(title: &str, path: &Path) -> String {
    format!("{title} {}", file_url(path))
}

/// Copy to the clipboard when one is available and accepts the text,
/// otherwise fall back to logging the link.
pub fn share(clipboard: Option<&mut dyn Clipboard>, title: &str, path: &Path) -> ShareOutcome {
    let text = share_text(title, path);
    if let Some(clipboard) = clipboard {
        match clipboard.write_text(&text) {
            Ok(()) => {
                info!(%title, "link copied to clipboard");
                return ShareOutcome::Copied(text);
            }
            Err(e) => info!(error = %e, "clipboard unavailable"),
        }
    }
    info!(link = %text, "share");
    ShareOutcome::Logged(text)
}
