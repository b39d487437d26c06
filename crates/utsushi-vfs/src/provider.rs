//! File-system-provider contract.
//!
//! The surface a host programs against. Operations are async for interface
//! compatibility with hosts that await every file-system call; an in-memory
//! implementation never actually suspends.

use async_trait::async_trait;

use crate::error::VfsResult;
use crate::traverse::DirectoryTree;
use crate::types::{
    CommandOptions, CommandOutput, CopyOptions, CreateDirOptions, FileStat, GlobOptions,
    GrepMatch, GrepOptions, SearchQuery, TreeOptions, Unsupported, WatchOptions,
};

/// Core file-system-provider trait.
///
/// Path arguments are canonicalized by the implementation, so `"a.txt"` and
/// `"/a.txt"` name the same file.
///
/// Missing paths surface as [`VfsError::NotFound`](crate::VfsError::NotFound)
/// for both reads (`read_file`, `stat`) and existence-dependent mutations
/// (the source of `copy` and `rename`). Use [`exists`](Self::exists) to probe
/// without an error.
#[async_trait]
pub trait FileSystemProvider: Send + Sync {
    // ========================================================================
    // Reading
    // ========================================================================

    /// Read a file's full content.
    async fn read_file(&self, path: &str) -> VfsResult<String>;

    /// Returns true if a file exists at `path`.
    async fn exists(&self, path: &str) -> bool;

    /// Size, type, and timestamps of a file.
    async fn stat(&self, path: &str) -> VfsResult<FileStat>;

    // ========================================================================
    // Writing
    // ========================================================================

    /// Create or fully replace a file.
    async fn write_file(&self, path: &str, content: &str) -> VfsResult<bool>;

    /// Append to a file, creating it if absent.
    async fn append_file(&self, path: &str, content: &str) -> VfsResult<bool>;

    /// Remove a file. Succeeds whether or not it existed.
    async fn delete_file(&self, path: &str) -> VfsResult<bool>;

    /// Duplicate `src` at `dst`.
    ///
    /// Fails with `AlreadyExists(dst)` if `dst` exists and `overwrite` is off.
    async fn copy(&self, src: &str, dst: &str, options: CopyOptions) -> VfsResult<bool>;

    /// Move `src` to `dst`. Fails with `AlreadyExists(dst)` if `dst` exists.
    async fn rename(&self, src: &str, dst: &str) -> VfsResult<bool>;

    /// Directories are implied by file paths, so this always succeeds.
    async fn create_directory(&self, path: &str, options: CreateDirOptions) -> VfsResult<bool>;

    // ========================================================================
    // Traversal and search
    // ========================================================================

    /// Files under `directory`, as a snapshot taken at call time.
    async fn get_directory_tree(
        &self,
        directory: &str,
        options: TreeOptions,
    ) -> VfsResult<DirectoryTree>;

    /// File paths matching `pattern`, minus ignored ones.
    async fn glob(&self, pattern: &str, options: GlobOptions) -> VfsResult<Vec<String>>;

    /// Lines containing the query as a literal substring.
    async fn grep(&self, query: SearchQuery, options: GrepOptions) -> VfsResult<Vec<GrepMatch>>;

    // ========================================================================
    // Unsupported capabilities
    // ========================================================================

    /// Change notification. Reported as unsupported, never raised.
    async fn watch(&self, path: &str, options: WatchOptions) -> Unsupported;

    /// Command execution. Always a structured failure.
    async fn execute_command(&self, command: &str, options: CommandOptions) -> CommandOutput;

    // ========================================================================
    // Convenience methods (default implementations)
    // ========================================================================

    /// Read a file, mapping a missing path to `None`.
    async fn try_read_file(&self, path: &str) -> VfsResult<Option<String>> {
        match self.read_file(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Collect a directory walk into a vector.
    async fn list_files(&self, directory: &str, options: TreeOptions) -> VfsResult<Vec<String>> {
        Ok(self.get_directory_tree(directory, options).await?.collect())
    }
}
