//! Directory tree traversal.
//!
//! Directories are virtual: a directory is any prefix shared by entry keys.
//! A walk selects the keys under a canonical directory and hands them back as
//! an iterator over a point-in-time snapshot, so mutating the store while
//! consuming the sequence has no effect on it.

use futures::stream::{self, Stream};

use crate::path;
use crate::store::Store;
use crate::types::TreeOptions;

/// Paths produced by a directory walk.
///
/// Consumed once. Walk again for a fresh sequence.
#[derive(Debug, Clone)]
pub struct DirectoryTree {
    paths: std::vec::IntoIter<String>,
}

impl DirectoryTree {
    /// Adapt the walk to an async stream.
    pub fn into_stream(self) -> impl Stream<Item = String> {
        stream::iter(self.paths)
    }
}

impl Iterator for DirectoryTree {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.paths.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

impl ExactSizeIterator for DirectoryTree {}

/// Walk `directory` (any form; it is normalized here).
pub fn directory_tree(store: &Store, directory: &str, options: &TreeOptions) -> DirectoryTree {
    let dir = path::normalize(directory);

    let paths: Vec<String> = store
        .paths()
        .filter(|entry| {
            let Some(relative) = path::relative_to(&dir, entry) else {
                return false;
            };
            if !options.recursive && relative.contains('/') {
                return false;
            }
            !options.is_ignored(relative)
        })
        .map(str::to_string)
        .collect();

    tracing::trace!(
        directory = %dir,
        recursive = options.recursive,
        count = paths.len(),
        "walked directory"
    );

    DirectoryTree {
        paths: paths.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ignore;

    fn sample() -> Store {
        [
            ("/a.txt", "a"),
            ("/dir/b.txt", "b"),
            ("/dir/sub/c.txt", "c"),
            ("/directory/d.txt", "d"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_recursive_from_root() {
        let store = sample();
        let paths: Vec<_> = directory_tree(&store, "/", &TreeOptions::default()).collect();
        assert_eq!(
            paths,
            vec!["/a.txt", "/dir/b.txt", "/dir/sub/c.txt", "/directory/d.txt"]
        );
    }

    #[test]
    fn test_flat_listing() {
        let store = sample();
        let paths: Vec<_> = directory_tree(&store, "/dir", &TreeOptions::flat()).collect();
        assert_eq!(paths, vec!["/dir/b.txt"]);

        let root: Vec<_> = directory_tree(&store, "/", &TreeOptions::flat()).collect();
        assert_eq!(root, vec!["/a.txt"]);
    }

    #[test]
    fn test_prefix_sibling_not_included() {
        let store = sample();
        let paths: Vec<_> = directory_tree(&store, "/dir", &TreeOptions::default()).collect();
        assert_eq!(paths, vec!["/dir/b.txt", "/dir/sub/c.txt"]);
    }

    #[test]
    fn test_trailing_slash_normalizes() {
        let store = sample();
        let with: Vec<_> = directory_tree(&store, "/dir/", &TreeOptions::default()).collect();
        let without: Vec<_> = directory_tree(&store, "dir", &TreeOptions::default()).collect();
        assert_eq!(with, without);
    }

    #[test]
    fn test_ignore_sees_relative_path() {
        let store = sample();
        let opts = TreeOptions::default().with_ignore(Ignore::new(|rel| rel.starts_with("sub/")));
        let paths: Vec<_> = directory_tree(&store, "/dir", &opts).collect();
        assert_eq!(paths, vec!["/dir/b.txt"]);

        // Root strips only the leading slash
        let opts = TreeOptions::default().with_ignore(Ignore::new(|rel| rel == "a.txt"));
        let paths: Vec<_> = directory_tree(&store, "/", &opts).collect();
        assert!(!paths.contains(&"/a.txt".to_string()));
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let store = sample();
        let mut tree = directory_tree(&store, "/nowhere", &TreeOptions::default());
        assert_eq!(tree.len(), 0);
        assert!(tree.next().is_none());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut store = sample();
        let tree = directory_tree(&store, "/", &TreeOptions::default());
        store.write("/late.txt", "added after walk");
        assert_eq!(tree.count(), 4);

        let again = directory_tree(&store, "/", &TreeOptions::default());
        assert_eq!(again.count(), 5);
    }
}
