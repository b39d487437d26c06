//! Path canonicalization.
//!
//! The store's key space is absolute, `/`-separated, with no trailing slash
//! except for the root itself. Every path argument, whether it names a file
//! or a directory, goes through [`normalize`] before it touches the store, so
//! `"README.md"`, `"/README.md"` and `"/README.md/"` address the same entry.

/// The root directory.
pub const ROOT: &str = "/";

/// Normalize a path to its canonical absolute form.
///
/// Strips every leading and trailing `/` and prepends a single one.
/// An empty or all-slash input is the root.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        ROOT.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Returns true if the canonical path is the root.
pub fn is_root(path: &str) -> bool {
    path == ROOT
}

/// Strip a canonical directory prefix from a canonical entry path.
///
/// Returns `None` unless `path` is strictly nested under `dir`.
pub fn relative_to<'a>(dir: &str, path: &'a str) -> Option<&'a str> {
    let rest = if is_root(dir) {
        path.strip_prefix('/')?
    } else {
        path.strip_prefix(dir)?.strip_prefix('/')?
    };
    (!rest.is_empty()).then_some(rest)
}
