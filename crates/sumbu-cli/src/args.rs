use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for sumbu
#[derive(Debug, Parser)]
#[command(
    name = "sumbu",
    version,
    about = "CLI for querying the Sumbu Filosofi point-of-interest dataset"
)]
pub struct CliArgs {
    /// Path to a dataset (.json or .json.gz). Defaults to the bundled dataset
    /// or the `dataset` entry of sumbu.toml
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Content locale: id (default) or en
    #[arg(short = 'l', long = "locale", global = true)]
    pub locale: Option<String>,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List map categories with their location counts
    Categories,

    /// Show one map location by id or slug
    Show {
        /// Location id or slug (e.g. tugu, keraton)
        code: String,
    },

    /// List map locations by category, optionally narrowed by a text query
    Filter {
        /// Comma-separated category tags (e.g. heritage,umkm) or "all"
        #[arg(short = 'c', long = "category", default_value = "all")]
        category: String,

        /// Only keep locations matching this text
        #[arg(short = 'q', long = "query")]
        query: Option<String>,

        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },

    /// Nearest map locations to a location or a coordinate
    Nearby {
        /// Origin location id or slug (excluded from results)
        #[arg(long = "from", conflicts_with_all = ["lat", "lng"], required_unless_present = "lat")]
        from: Option<String>,

        #[arg(long = "lat", requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long = "lng", requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        /// Comma-separated category tags (e.g. heritage,umkm) or "all"
        #[arg(short = 'c', long = "category", default_value = "all")]
        category: String,

        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },

    /// Search destinations, events, UMKM, articles and map locations
    Search {
        query: String,

        /// Comma-separated content types (destination,event,umkm,article,location)
        #[arg(short = 't', long = "type")]
        types: Option<String>,

        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },

    /// Title suggestions for a partial query
    Suggest {
        query: String,

        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },

    /// Great-circle distance between two coordinates
    Distance {
        #[arg(allow_hyphen_values = true)]
        lat1: f64,
        #[arg(allow_hyphen_values = true)]
        lng1: f64,
        #[arg(allow_hyphen_values = true)]
        lat2: f64,
        #[arg(allow_hyphen_values = true)]
        lng2: f64,
    },
}
