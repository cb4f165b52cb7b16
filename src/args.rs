use clap::{Parser, Subcommand};

/// CLI arguments for placetree
#[derive(Debug, Parser)]
#[command(
    name = "placetree",
    version,
    about = "Maintain the place hierarchy's autocomplete tables"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply pending database migrations
    Migrate,

    /// Rewrite every autocomplete row from the place tables
    Rebuild,

    /// Refresh the autocomplete rows of one place
    Reindex {
        /// Place ID
        id: i32,

        /// Also refresh every place whose full name embeds this one
        #[arg(long)]
        cascade: bool,
    },

    /// Print a place with its resolved names as JSON
    Show {
        /// Place ID
        id: i32,

        /// Language to translate names into
        #[arg(short = 'l', long = "language", default_value = "en")]
        language: String,
    },

    /// Search an autocomplete table by name prefix
    Search {
        /// Start of the full name (case-insensitive)
        prefix: String,

        /// Language table to search
        #[arg(short = 'l', long = "language", default_value = "en")]
        language: String,

        /// Maximum number of results
        #[arg(long, default_value_t = 10)]
        limit: u64,
    },
}
