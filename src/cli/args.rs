use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pkgdeck",
    about = "Bulk install, upgrade and uninstall front-end for winget",
    long_about = "Search winget, browse a curated catalog, and run queued install/uninstall batches with progress reporting",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug, Default)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Package manager command to invoke (overrides the settings file)
    #[arg(long, value_name = "BIN", global = true)]
    pub binary: Option<String>,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the package manager for packages
    Search {
        /// Search term
        query: String,
    },

    /// List installed packages
    Installed {
        /// Only show rows containing this text (case-insensitive)
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,
    },

    /// Show the curated catalog grouped by category
    Catalog {
        /// Only show one category
        #[arg(long, value_name = "CAT")]
        category: Option<String>,

        /// Only show entries whose name or id contains this text
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,

        /// Add live search results for TERM under "Search Results"
        #[arg(long, value_name = "TERM")]
        with_search: Option<String>,
    },

    /// List catalog categories
    Categories,

    /// Install (or upgrade when present) packages as one batch
    Install {
        /// Package identifiers
        ids: Vec<String>,
    },

    /// Uninstall packages as one batch
    Uninstall {
        /// Package identifiers
        ids: Vec<String>,
    },
}
