//! In-memory file system engine.
//!
//! All data is ephemeral and owned by the instance; two engines never share
//! entries.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::config::VfsConfig;
use crate::error::VfsResult;
use crate::path::normalize;
use crate::provider::FileSystemProvider;
use crate::search;
use crate::seed::SEED_FILES;
use crate::store::Store;
use crate::traverse::{self, DirectoryTree};
use crate::types::{
    CommandOptions, CommandOutput, CopyOptions, CreateDirOptions, FileStat, GlobOptions,
    GrepMatch, GrepOptions, SearchQuery, TreeOptions, Unsupported, WatchOptions,
};

/// In-memory file system.
///
/// Thread-safe via internal `RwLock`. Each operation takes the lock once, so
/// every call is a single atomic step.
#[derive(Debug)]
pub struct MemoryFs {
    store: RwLock<Store>,
    config: VfsConfig,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFs {
    /// Create an empty file system.
    pub fn new() -> Self {
        Self::from_config(VfsConfig::unseeded())
    }

    /// Create a file system holding the sample entries.
    pub fn with_seed() -> Self {
        Self::from_config(VfsConfig::default())
    }

    /// Create a file system from configuration.
    pub fn from_config(config: VfsConfig) -> Self {
        let store: Store = if config.seed {
            SEED_FILES.iter().copied().collect()
        } else {
            Store::new()
        };
        tracing::debug!(entries = store.len(), "memory fs created");
        Self {
            store: RwLock::new(store),
            config,
        }
    }

    /// Add entries on top of whatever the instance already holds.
    pub fn with_files<P, C>(self, files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: AsRef<str>,
        C: Into<String>,
    {
        {
            let mut store = self.store.write();
            for (path, content) in files {
                store.write(&normalize(path.as_ref()), content);
            }
        }
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &VfsConfig {
        &self.config
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Returns true if there are no files.
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// All file paths in iteration order.
    pub fn paths(&self) -> Vec<String> {
        self.store.read().paths().map(str::to_string).collect()
    }

    /// Remove every file.
    pub fn clear(&self) {
        self.store.write().clear();
    }
}

#[async_trait]
impl FileSystemProvider for MemoryFs {
    async fn read_file(&self, path: &str) -> VfsResult<String> {
        let path = normalize(path);
        tracing::trace!(path = %path, "read");
        self.store.write().read(&path)
    }

    async fn exists(&self, path: &str) -> bool {
        self.store.read().contains(&normalize(path))
    }

    async fn stat(&self, path: &str) -> VfsResult<FileStat> {
        self.store.read().stat(&normalize(path))
    }

    async fn write_file(&self, path: &str, content: &str) -> VfsResult<bool> {
        let path = normalize(path);
        let created = self.store.write().write(&path, content);
        tracing::debug!(path = %path, bytes = content.len(), created, "write");
        Ok(true)
    }

    async fn append_file(&self, path: &str, content: &str) -> VfsResult<bool> {
        let path = normalize(path);
        let created = self.store.write().append(&path, content);
        tracing::debug!(path = %path, bytes = content.len(), created, "append");
        Ok(true)
    }

    async fn delete_file(&self, path: &str) -> VfsResult<bool> {
        let path = normalize(path);
        let removed = self.store.write().remove(&path);
        tracing::debug!(path = %path, removed, "delete");
        Ok(true)
    }

    async fn copy(&self, src: &str, dst: &str, options: CopyOptions) -> VfsResult<bool> {
        let (src, dst) = (normalize(src), normalize(dst));
        self.store.write().copy(&src, &dst, options.overwrite)?;
        tracing::debug!(src = %src, dst = %dst, overwrite = options.overwrite, "copy");
        Ok(true)
    }

    async fn rename(&self, src: &str, dst: &str) -> VfsResult<bool> {
        let (src, dst) = (normalize(src), normalize(dst));
        self.store.write().rename(&src, &dst)?;
        tracing::debug!(src = %src, dst = %dst, "rename");
        Ok(true)
    }

    async fn create_directory(&self, path: &str, options: CreateDirOptions) -> VfsResult<bool> {
        tracing::trace!(path = %normalize(path), recursive = options.recursive, "mkdir (virtual)");
        Ok(true)
    }

    async fn get_directory_tree(
        &self,
        directory: &str,
        options: TreeOptions,
    ) -> VfsResult<DirectoryTree> {
        Ok(traverse::directory_tree(
            &self.store.read(),
            directory,
            &options,
        ))
    }

    #[tracing::instrument(skip(self, options), name = "vfs.glob")]
    async fn glob(&self, pattern: &str, options: GlobOptions) -> VfsResult<Vec<String>> {
        search::glob(
            &self.store.read(),
            pattern,
            &options,
            self.config.honor_glob_pattern,
        )
    }

    #[tracing::instrument(skip(self, options), name = "vfs.grep")]
    async fn grep(
        &self,
        query: SearchQuery,
        mut options: GrepOptions,
    ) -> VfsResult<Vec<GrepMatch>> {
        if options.max_matches.is_none() {
            options.max_matches = self.config.grep_max_matches;
        }
        Ok(search::grep(&self.store.read(), &query, &options))
    }

    async fn watch(&self, path: &str, _options: WatchOptions) -> Unsupported {
        tracing::debug!(path = %normalize(path), "watch requested");
        Unsupported::new("watch", "the in-memory file system does not emit change events")
    }

    async fn execute_command(&self, command: &str, _options: CommandOptions) -> CommandOutput {
        tracing::debug!(command, "command execution requested");
        CommandOutput::unsupported()
    }
}
