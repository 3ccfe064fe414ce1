//! Paths as seen from inside the Zellij sandbox.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory holding the trace file.
///
/// `/host` points at the cwd of the last focused terminal (or where Zellij was
/// started), which is normally the user's home.
///
/// ```
/// use marquee::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/marquee"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local")
        .join("share")
        .join("zellij")
        .join("marquee")
}

/// Rewrites a leading `~` to the sandbox host mount.
///
/// ```
/// use marquee::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dune.toml"), "/host/themes/dune.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
