//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::OptionArg;

#[derive(Debug, Parser)]
#[clap(name = "mlb-stats", about = "MLB Stats API client", version)]
pub struct MlbStats {
    /// Log request details (or set `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every known endpoint.
    Endpoints {
        /// Show each endpoint's usage note.
        #[clap(long)]
        notes: bool,
    },

    /// Print an endpoint's descriptor as JSON.
    Info {
        /// Endpoint id, e.g. `person` or `team_roster`.
        endpoint: String,
    },

    /// Build and validate a request without sending it.
    Url {
        endpoint: String,

        /// Request option (repeatable): `-o personId=677594 -o hydrate=stats`.
        #[clap(short = 'o', long = "option")]
        options: Vec<OptionArg>,
    },

    /// Call an endpoint and print the response body.
    Get {
        endpoint: String,

        /// Request option (repeatable). Comma-separated values become lists.
        #[clap(short = 'o', long = "option")]
        options: Vec<OptionArg>,

        /// Pretty-print the JSON body.
        #[clap(long)]
        pretty: bool,
    },

    /// Call endpoints with their built-in test parameters and report status.
    SelfTest {
        /// Pause between calls, in milliseconds.
        #[clap(long, default_value_t = 1000)]
        delay_ms: u64,

        /// Only test these endpoints (repeatable).
        #[clap(long = "only")]
        only: Vec<String>,
    },
}
