//! Path and content search over the store.
//!
//! `glob` lists entry paths, `grep` finds lines containing a literal
//! substring. Both visit entries in store iteration order.

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{VfsError, VfsResult};
use crate::store::Store;
use crate::types::{GlobOptions, GrepMatch, GrepOptions, SearchQuery};

/// Compile a glob pattern. `None` means match everything.
///
/// Patterns are matched against paths without their leading `/`, and `*`
/// crosses directory separators, so `"*"` selects every entry.
fn compile(pattern: &str) -> VfsResult<Option<GlobMatcher>> {
    let pattern = pattern.trim_start_matches('/');
    if pattern.is_empty() || pattern == "**" {
        return Ok(None);
    }

    GlobBuilder::new(pattern)
        .literal_separator(false)
        .build()
        .map(|g| Some(g.compile_matcher()))
        .map_err(|e| VfsError::invalid_pattern(pattern, e))
}

/// List entry paths, filtered by the ignore predicate.
///
/// With `honor_pattern` off the pattern is accepted but does not constrain
/// the result.
pub fn glob(
    store: &Store,
    pattern: &str,
    options: &GlobOptions,
    honor_pattern: bool,
) -> VfsResult<Vec<String>> {
    let matcher = if honor_pattern { compile(pattern)? } else { None };

    let paths = store
        .paths()
        .filter(|path| {
            matcher
                .as_ref()
                .is_none_or(|m| m.is_match(path.trim_start_matches('/')))
        })
        .filter(|path| !options.is_ignored(path))
        .map(str::to_string)
        .collect();

    Ok(paths)
}

/// Find every line containing the query's needle as a literal substring.
///
/// One record per matching line, however many times the needle occurs in it.
pub fn grep(store: &Store, query: &SearchQuery, options: &GrepOptions) -> Vec<GrepMatch> {
    let mut matches = Vec::new();
    let Some(needle) = query.needle() else {
        return matches;
    };
    let limit = options.max_matches.unwrap_or(usize::MAX);
    let window = options.context;

    'entries: for (path, entry) in store.iter() {
        if options.is_ignored(path) {
            continue;
        }

        let lines: Vec<&str> = entry.content().split('\n').collect();
        let last = lines.len() - 1;

        for (idx, line) in lines.iter().enumerate() {
            if !line.contains(needle) {
                continue;
            }
            if matches.len() >= limit {
                tracing::debug!(limit, "grep truncated");
                break 'entries;
            }

            let context = (!window.is_empty()).then(|| {
                let start = idx.saturating_sub(window.before);
                let end = idx.saturating_add(window.after).min(last);
                lines[start..=end].join("\n")
            });

            matches.push(GrepMatch {
                path: path.to_string(),
                line: idx + 1,
                content: line.to_string(),
                matched: needle.to_string(),
                context,
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ignore;

    fn store() -> Store {
        [
            ("/f.txt", "a\nneedle\nb"),
            ("/src/App.jsx", "export default App;\nneedle needle"),
            ("/src/index.js", "import App from './App';"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_grep_single_match() {
        let opts = GrepOptions::default().with_ignore(Ignore::containing("src"));
        let results = grep(&store(), &"needle".into(), &opts);
        assert_eq!(results.len(), 1);
        let m = &results[0];
        assert_eq!(m.path, "/f.txt");
        assert_eq!(m.line, 2);
        assert_eq!(m.content, "needle");
        assert_eq!(m.matched, "needle");
        assert!(m.context.is_none());
    }

    #[test]
    fn test_grep_context_window() {
        let opts = GrepOptions::default().with_context(1, 1);
        let results = grep(&store(), &"needle".into(), &opts);
        assert_eq!(results[0].context.as_deref(), Some("a\nneedle\nb"));
    }

    #[test]
    fn test_grep_context_clamps_at_edges() {
        let s: Store = [("/edge.txt", "needle\nx\ny")].into_iter().collect();
        let opts = GrepOptions::default().with_context(5, 1);
        let results = grep(&s, &"needle".into(), &opts);
        assert_eq!(results[0].context.as_deref(), Some("needle\nx"));

        let opts = GrepOptions::default().with_context(0, 10);
        let results = grep(&s, &"y".into(), &opts);
        assert_eq!(results[0].context.as_deref(), Some("y"));
    }

    #[test]
    fn test_grep_unbounded_context() {
        let opts = GrepOptions::default().with_context(0, usize::MAX);
        let results = grep(&store(), &"needle".into(), &opts);
        assert_eq!(results[0].path, "/f.txt");
        assert_eq!(results[0].context.as_deref(), Some("needle\nb"));

        let opts = GrepOptions::default().with_context(usize::MAX, usize::MAX);
        let results = grep(&store(), &"needle".into(), &opts);
        assert_eq!(results[0].context.as_deref(), Some("a\nneedle\nb"));
    }

    #[test]
    fn test_grep_one_record_per_line() {
        let results = grep(&store(), &"needle".into(), &GrepOptions::default());
        let jsx: Vec<_> = results.iter().filter(|m| m.path == "/src/App.jsx").collect();
        assert_eq!(jsx.len(), 1);
        assert_eq!(jsx[0].line, 2);
    }

    #[test]
    fn test_grep_ordering() {
        let results = grep(&store(), &"App".into(), &GrepOptions::default());
        let keys: Vec<_> = results.iter().map(|m| (m.path.as_str(), m.line)).collect();
        assert_eq!(keys, vec![("/src/App.jsx", 1), ("/src/index.js", 1)]);
    }

    #[test]
    fn test_grep_is_literal_and_case_sensitive() {
        assert!(grep(&store(), &"NEEDLE".into(), &GrepOptions::default()).is_empty());
        assert_eq!(grep(&store(), &"./App".into(), &GrepOptions::default()).len(), 1);
        assert!(grep(&store(), &"a.*b".into(), &GrepOptions::default()).is_empty());
    }

    #[test]
    fn test_grep_absent_and_empty_query() {
        assert!(grep(&store(), &"absent-token".into(), &GrepOptions::default()).is_empty());
        let empty = SearchQuery::from(Vec::<String>::new());
        assert!(grep(&store(), &empty, &GrepOptions::default()).is_empty());
    }

    #[test]
    fn test_grep_first_candidate_only() {
        let query = SearchQuery::from(vec!["absent-token", "needle"]);
        assert!(grep(&store(), &query, &GrepOptions::default()).is_empty());
    }

    #[test]
    fn test_grep_max_matches() {
        let opts = GrepOptions::default().with_max_matches(1);
        let results = grep(&store(), &"needle".into(), &opts);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, "/f.txt");
    }

    #[test]
    fn test_glob_star_matches_all() {
        let paths = glob(&store(), "*", &GlobOptions::default(), true).unwrap();
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_glob_honors_pattern() {
        let paths = glob(&store(), "**/*.jsx", &GlobOptions::default(), true).unwrap();
        assert_eq!(paths, vec!["/src/App.jsx"]);

        let paths = glob(&store(), "/src/*.js", &GlobOptions::default(), true).unwrap();
        assert_eq!(paths, vec!["/src/index.js"]);
    }

    #[test]
    fn test_glob_pattern_ignored_when_disabled() {
        let paths = glob(&store(), "*.nothing", &GlobOptions::default(), false).unwrap();
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_glob_ignore() {
        let opts = GlobOptions::default().with_ignore(Ignore::containing(".jsx"));
        let paths = glob(&store(), "*", &opts, true).unwrap();
        assert_eq!(paths, vec!["/f.txt", "/src/index.js"]);
    }

    #[test]
    fn test_glob_invalid_pattern() {
        let err = glob(&store(), "src/[", &GlobOptions::default(), true).unwrap_err();
        assert!(matches!(err, VfsError::InvalidPattern { .. }));
    }
}
