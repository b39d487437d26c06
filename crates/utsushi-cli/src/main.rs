//! utsushi: command-line host for the in-memory virtual file store.
//!
//! Builds an engine (sample entries plus any `--file` preloads), forwards one
//! operation to it, and prints the result.
//!
//! Usage:
//!   cargo run -p utsushi-cli -- tree /src
//!   cargo run -p utsushi-cli -- grep React -C 1
//!   cargo run -p utsushi-cli -- --no-seed --file notes.txt=hello cat notes.txt
//!   RUST_LOG=utsushi_vfs=debug cargo run -p utsushi-cli -- --json glob '**/*.js'

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use utsushi_vfs::{
    CommandOptions, FileSystemProvider, GlobOptions, GrepOptions, Ignore, MemoryFs, TreeOptions,
    VfsConfig,
};

mod output;

use output::Printer;

/// Query an in-memory virtual file store.
#[derive(Parser, Debug)]
#[command(name = "utsushi")]
#[command(about = "Query an in-memory virtual file store")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Start without the sample entries
    #[arg(long)]
    no_seed: bool,

    /// Preload a file, as PATH=CONTENT (repeatable)
    #[arg(long = "file", value_parser = parse_file_arg)]
    files: Vec<(String, String)>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List files under a directory
    Tree {
        /// Directory to walk
        #[arg(default_value = "/")]
        dir: String,
        /// Immediate children only
        #[arg(long)]
        flat: bool,
        /// Skip paths containing this substring (repeatable)
        #[arg(long)]
        ignore: Vec<String>,
    },
    /// List files matching a glob pattern
    Glob {
        /// Glob pattern
        #[arg(default_value = "*")]
        pattern: String,
        /// Skip paths containing this substring (repeatable)
        #[arg(long)]
        ignore: Vec<String>,
    },
    /// Search file contents for a literal string
    Grep {
        /// String to search for
        needle: String,
        /// Lines of context before each match
        #[arg(short = 'B', long, default_value_t = 0)]
        before: usize,
        /// Lines of context after each match
        #[arg(short = 'A', long, default_value_t = 0)]
        after: usize,
        /// Lines of context on both sides (overrides -A/-B)
        #[arg(short = 'C', long)]
        context: Option<usize>,
        /// Stop after this many matches
        #[arg(long)]
        max: Option<usize>,
        /// Skip paths containing this substring (repeatable)
        #[arg(long)]
        ignore: Vec<String>,
    },
    /// Print a file
    Cat {
        /// File path
        path: String,
    },
    /// Show file metadata
    Stat {
        /// File path
        path: String,
    },
    /// Attempt to run a command (always unsupported)
    Exec {
        /// Command line
        command: String,
    },
}

fn parse_file_arg(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(path, content)| (path.to_string(), content.to_string()))
        .ok_or_else(|| format!("expected PATH=CONTENT, got {s:?}"))
}

/// Fold `--ignore` substrings into one predicate.
fn ignore_any(needles: Vec<String>) -> Option<Ignore> {
    needles
        .into_iter()
        .map(Ignore::containing)
        .reduce(Ignore::or)
}

/// Default log level is info; `RUST_LOG` adds directives on top.
fn log_filter(base: EnvFilter) -> EnvFilter {
    base.add_directive(tracing::Level::INFO.into())
}

fn load_config(args: &Args) -> Result<VfsConfig> {
    let mut config = match &args.config {
        Some(path) => VfsConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => VfsConfig::default(),
    };
    if args.no_seed {
        config.seed = false;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for results
    fmt()
        .with_env_filter(log_filter(EnvFilter::from_default_env()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    tracing::info!(?config, preload = args.files.len(), "starting");

    let fs = MemoryFs::from_config(config).with_files(args.files.clone());
    let printer = Printer::new(args.json);

    match args.command {
        Command::Tree { dir, flat, ignore } => {
            let mut opts = TreeOptions::default().with_recursive(!flat);
            opts.ignore = ignore_any(ignore);
            let paths: Vec<String> = fs.get_directory_tree(&dir, opts).await?.collect();
            printer.paths(&paths)?;
        }
        Command::Glob { pattern, ignore } => {
            let opts = GlobOptions {
                ignore: ignore_any(ignore),
            };
            let paths = fs.glob(&pattern, opts).await?;
            printer.paths(&paths)?;
        }
        Command::Grep {
            needle,
            before,
            after,
            context,
            max,
            ignore,
        } => {
            let (before, after) = context.map_or((before, after), |c| (c, c));
            let mut opts = GrepOptions::default().with_context(before, after);
            opts.ignore = ignore_any(ignore);
            opts.max_matches = max;
            let matches = fs.grep(needle.into(), opts).await?;
            printer.matches(&matches)?;
        }
        Command::Cat { path } => {
            let content = fs
                .read_file(&path)
                .await
                .with_context(|| format!("reading {path}"))?;
            printer.content(&path, &content)?;
        }
        Command::Stat { path } => {
            let stat = fs
                .stat(&path)
                .await
                .with_context(|| format!("stat {path}"))?;
            printer.stat(&stat)?;
        }
        Command::Exec { command } => {
            let out = fs.execute_command(&command, CommandOptions::default()).await;
            printer.command(&out)?;
            if !out.ok {
                std::process::exit(out.exit_code);
            }
        }
    }

    Ok(())
}
