//! Core VFS types.
//!
//! Per-operation option structs with named, defaulted fields, plus the result
//! shapes handed back to the host. Results derive serde so a host can forward
//! them over whatever transport it speaks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// Metadata snapshot for an entry.
///
/// Size is derived from the content at query time; timestamps are tracked per
/// entry by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    /// Canonical path of the entry.
    pub path: String,
    /// Content length in bytes.
    pub size: u64,
    /// Always true: every entry is a file.
    pub is_file: bool,
    /// Always false: directories are never stored.
    pub is_directory: bool,
    /// Always false: the store has no links.
    pub is_symbolic_link: bool,
    /// When the entry was first written.
    pub created: SystemTime,
    /// Last write, append, or copy into the entry.
    pub modified: SystemTime,
    /// Last read of the entry.
    pub accessed: SystemTime,
    /// Always true for a returned stat.
    pub exists: bool,
}

/// Caller-supplied predicate that returns true for paths to exclude.
#[derive(Clone)]
pub struct Ignore(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Ignore {
    /// Wrap a predicate.
    pub fn new(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Exclude any path containing `needle` as a substring.
    pub fn containing(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        Self::new(move |path| path.contains(needle.as_str()))
    }

    /// Returns true if `path` should be excluded.
    pub fn matches(&self, path: &str) -> bool {
        (self.0)(path)
    }

    /// Exclude paths matched by either predicate.
    pub fn or(self, other: Ignore) -> Self {
        Self::new(move |path| self.matches(path) || other.matches(path))
    }
}

impl fmt::Debug for Ignore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ignore(<fn>)")
    }
}

fn ignored(ignore: Option<&Ignore>, path: &str) -> bool {
    ignore.is_some_and(|i| i.matches(path))
}

/// Options for directory tree traversal.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Walk into nested directories (default true).
    pub recursive: bool,
    /// Exclusion predicate over the path relative to the walked directory.
    pub ignore: Option<Ignore>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            ignore: None,
        }
    }
}

impl TreeOptions {
    /// Immediate children only.
    pub fn flat() -> Self {
        Self {
            recursive: false,
            ..Default::default()
        }
    }

    /// Set recursion.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the ignore predicate.
    pub fn with_ignore(mut self, ignore: Ignore) -> Self {
        self.ignore = Some(ignore);
        self
    }

    pub(crate) fn is_ignored(&self, relative: &str) -> bool {
        ignored(self.ignore.as_ref(), relative)
    }
}

/// Options for glob.
#[derive(Debug, Clone, Default)]
pub struct GlobOptions {
    /// Exclusion predicate over the absolute path.
    pub ignore: Option<Ignore>,
}

impl GlobOptions {
    /// Set the ignore predicate.
    pub fn with_ignore(mut self, ignore: Ignore) -> Self {
        self.ignore = Some(ignore);
        self
    }

    pub(crate) fn is_ignored(&self, path: &str) -> bool {
        ignored(self.ignore.as_ref(), path)
    }
}

/// Lines of context around a grep match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextWindow {
    /// Lines before the match.
    pub before: usize,
    /// Lines after the match.
    pub after: usize,
}

impl ContextWindow {
    /// Same number of lines on both sides.
    pub fn around(lines: usize) -> Self {
        Self {
            before: lines,
            after: lines,
        }
    }

    /// Returns true if no context was requested.
    pub fn is_empty(&self) -> bool {
        self.before == 0 && self.after == 0
    }
}

/// Options for grep.
#[derive(Debug, Clone, Default)]
pub struct GrepOptions {
    /// Exclusion predicate over the absolute path.
    pub ignore: Option<Ignore>,
    /// Context window around each match.
    pub context: ContextWindow,
    /// Stop after this many matches. `None` returns everything.
    pub max_matches: Option<usize>,
}

impl GrepOptions {
    /// Set the ignore predicate.
    pub fn with_ignore(mut self, ignore: Ignore) -> Self {
        self.ignore = Some(ignore);
        self
    }

    /// Set the context window.
    pub fn with_context(mut self, before: usize, after: usize) -> Self {
        self.context = ContextWindow { before, after };
        self
    }

    /// Cap the number of matches.
    pub fn with_max_matches(mut self, max: usize) -> Self {
        self.max_matches = Some(max);
        self
    }

    pub(crate) fn is_ignored(&self, path: &str) -> bool {
        ignored(self.ignore.as_ref(), path)
    }
}

/// Options for copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOptions {
    /// Replace an existing destination.
    pub overwrite: bool,
}

impl CopyOptions {
    /// Allow replacing the destination.
    pub fn overwrite() -> Self {
        Self { overwrite: true }
    }
}

/// Options for directory creation. Accepted for interface compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateDirOptions {
    /// Create intermediate directories (default true).
    pub recursive: bool,
}

impl Default for CreateDirOptions {
    fn default() -> Self {
        Self { recursive: true }
    }
}

/// Options for watch. Accepted for interface compatibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchOptions {
    /// Watch nested paths.
    pub recursive: bool,
}

/// Options for command execution. Accepted for interface compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<String>,
    /// Extra environment variables.
    pub env: Vec<(String, String)>,
}

/// Grep search input.
///
/// Hosts may pass a single string or a list of candidates; only the first
/// candidate is searched for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(Vec<String>);

impl SearchQuery {
    /// The string that will be searched for, if any.
    pub fn needle(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }
}

impl From<&str> for SearchQuery {
    fn from(s: &str) -> Self {
        Self(vec![s.to_string()])
    }
}

impl From<String> for SearchQuery {
    fn from(s: String) -> Self {
        Self(vec![s])
    }
}

impl From<Vec<String>> for SearchQuery {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

impl From<Vec<&str>> for SearchQuery {
    fn from(v: Vec<&str>) -> Self {
        Self(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for SearchQuery {
    fn from(v: &[&str]) -> Self {
        Self(v.iter().map(|s| s.to_string()).collect())
    }
}

/// One matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrepMatch {
    /// Entry the line belongs to.
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    /// The full matching line.
    pub content: String,
    /// The substring that matched.
    pub matched: String,
    /// Newline-joined context lines, present only when a window was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Tagged result for a capability the store does not provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unsupported {
    /// Name of the missing capability.
    pub capability: String,
    /// Human-readable explanation.
    pub reason: String,
}

impl Unsupported {
    /// Create an unsupported result.
    pub fn new(capability: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not supported: {}", self.capability, self.reason)
    }
}

/// Result of a command execution request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Whether the command ran successfully.
    pub ok: bool,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
    /// Exit code (0 = success).
    pub exit_code: i32,
    /// Error description when the command did not run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandOutput {
    /// Create a failure result.
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        let stderr = stderr.into();
        Self {
            ok: false,
            stdout: String::new(),
            error: Some(stderr.clone()),
            stderr,
            exit_code,
        }
    }

    /// The result every execution request receives from an in-memory store.
    pub fn unsupported() -> Self {
        Self::failure(1, "command execution is not supported by the in-memory file system")
    }
}
