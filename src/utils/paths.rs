use std::borrow::Cow;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

const FILE_SCHEME: &str = "file://";

/// Returns true when `value` carries a URI scheme (`file://`, `vscode-remote://`, ...)
pub fn is_uri(value: &str) -> bool {
    match value.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Converts a `file://` URI to a local path, percent-decoding it
///
/// Returns `None` for any other scheme. Plain paths are returned as-is.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use code_recents_provider::utils::uri_to_path;
///
/// assert_eq!(uri_to_path("file:///home/u/my%20proj"), Some(PathBuf::from("/home/u/my proj")));
/// assert_eq!(uri_to_path("/home/u/proj"), Some(PathBuf::from("/home/u/proj")));
/// assert_eq!(uri_to_path("vscode-remote://ssh-remote+box/srv"), None);
/// ```
pub fn uri_to_path(uri: &str) -> Option<PathBuf> {
    if let Some(rest) = uri.strip_prefix(FILE_SCHEME) {
        // Avoid double allocation when the input has nothing to decode
        let decoded = percent_decode_str(rest).decode_utf8_lossy();
        return Some(match decoded {
            Cow::Borrowed(s) => PathBuf::from(s),
            Cow::Owned(s) => PathBuf::from(s),
        });
    }

    if is_uri(uri) {
        return None;
    }

    Some(PathBuf::from(uri))
}

/// Human-readable location for a history uri
///
/// Local folders are shown as decoded paths; remote uris are shown unchanged.
pub fn display_location(uri: &str) -> String {
    match uri_to_path(uri) {
        Some(path) => path.to_string_lossy().into_owned(),
        None => uri.to_string(),
    }
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use code_recents_provider::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/.config/Code");
/// // Returns "~/.config/Code" for user alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = dirs::home_dir();
    format_path_with_tilde_internal(path, home.as_deref())
}

/// Internal helper for path formatting with an explicit home (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.to_string_lossy().into_owned()
}
