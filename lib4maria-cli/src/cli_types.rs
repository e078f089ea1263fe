//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use lib4maria_catalog::{EntryId, KindFilter, MediaKind, Theme};

#[derive(Parser)]
#[command(name = "lib4maria")]
#[command(about = "Keep track of the movies and series you love", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding the catalog (defaults to the saved setting, then the
    /// platform data directory)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the entries passing the current filter, with counts
    List {
        /// Only entries whose title or genre contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Set the kind filter (all, movie, series)
    Filter {
        /// Which kind to show
        kind: KindFilter,
    },

    /// Show only favorites, or everything
    Favorites {
        #[arg(value_enum)]
        mode: FavoritesMode,
    },

    /// Add a movie or series
    Add {
        /// Title (required)
        #[arg(short, long)]
        title: String,

        /// movie or series
        #[arg(short, long, default_value = "movie")]
        kind: MediaKind,

        /// Genres (e.g., drama,sci-fi); at least one is required
        #[arg(long = "theme", value_delimiter = ',')]
        themes: Vec<Theme>,

        /// Release year
        #[arg(short, long, default_value = "")]
        year: String,

        /// Rating, e.g. 8
        #[arg(short, long, default_value = "")]
        rating: String,

        /// Short description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete an entry by id
    Remove {
        id: EntryId,
    },

    /// Toggle an entry's favorite flag
    Favorite {
        id: EntryId,
    },

    /// Pick a random entry from the current filter
    Random {
        /// Narrow the pool by title or genre first
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Write a backup of the whole catalog
    Export {
        /// Output file (default: ./library4maria-backup.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load entries from a backup file
    Import {
        /// Backup file to read
        path: PathBuf,

        /// Add the imported entries to the existing library
        #[arg(long, conflicts_with = "replace")]
        merge: bool,

        /// Replace the existing library with the imported entries
        #[arg(long)]
        replace: bool,
    },

    /// Delete all stored data
    Clear {
        /// Actually delete (without this, only shows what would happen)
        #[arg(long)]
        confirm: bool,
    },

    /// Manage lib4maria settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum FavoritesMode {
    On,
    Off,
    Toggle,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and the resolved data directory
    Show,

    /// Print the settings file path
    Path,

    /// Save the default data directory (omit the path to reset it)
    SetDataDir {
        path: Option<PathBuf>,
    },
}
