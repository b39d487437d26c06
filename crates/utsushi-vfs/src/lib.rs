//! # utsushi-vfs
//!
//! In-memory, path-keyed virtual file store behind a file-system-provider
//! contract, for hosts that have no real file system to hand out.
//!
//! Key components:
//!
//! - [`FileSystemProvider`] - The async operation surface hosts program against
//! - [`MemoryFs`] - The engine: an owned store behind a lock
//! - [`Store`] - Path → content map with insertion-order iteration
//! - [`DirectoryTree`] - Snapshot iterator produced by directory walks
//!
//! ## Design Decisions
//!
//! - **Directories are virtual**: only files are stored. A directory is a
//!   path prefix, so `create_directory` has nothing to do.
//! - **One path rule**: every path argument is normalized to `/a/b` form
//!   before lookup.
//! - **Unsupported, not failed**: `watch` and `execute_command` return tagged
//!   results instead of errors.
//!
//! ```
//! use futures::executor::block_on;
//! use utsushi_vfs::{FileSystemProvider, MemoryFs, TreeOptions};
//!
//! let fs = MemoryFs::with_seed();
//! let readme = block_on(fs.read_file("/README.md")).unwrap();
//! assert!(readme.starts_with("# Sample Project"));
//!
//! let tree = block_on(fs.get_directory_tree("/src", TreeOptions::flat())).unwrap();
//! assert_eq!(tree.collect::<Vec<_>>(), vec!["/src/index.js"]);
//! ```

pub mod config;
mod error;
mod memory;
pub mod path;
mod provider;
pub mod search;
pub mod seed;
mod store;
pub mod traverse;
mod types;

pub use config::{ConfigError, VfsConfig};
pub use error::{VfsError, VfsResult};
pub use memory::MemoryFs;
pub use provider::FileSystemProvider;
pub use store::{Entry, Store};
pub use traverse::DirectoryTree;
pub use types::{
    CommandOptions, CommandOutput, ContextWindow, CopyOptions, CreateDirOptions, FileStat,
    GlobOptions, GrepMatch, GrepOptions, Ignore, SearchQuery, TreeOptions, Unsupported,
    WatchOptions,
};
