use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wikinet", version, about = "Rank and explore article link networks")]
pub struct Cli {
    /// Tab-separated link list (`source<TAB>target` per line)
    #[arg(value_name = "FILE")]
    pub links: PathBuf,
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (default: ./wikinet.toml if present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List article names in first-seen order
    Titles,
    /// Rank articles by propagated score
    Rank {
        #[arg(long, short)]
        iterations: Option<usize>,
        #[arg(long, short)]
        damping: Option<f64>,
        /// Print scores next to names
        #[arg(long)]
        scores: bool,
    },
    /// Order articles by link-set similarity to NAME
    Jaccard { name: String },
    /// Follow the most-linked-to neighbor from NAME
    Travel {
        name: String,
        /// Stop after this many articles
        #[arg(long, short)]
        limit: Option<usize>,
    },
    /// Articles reachable from NAME within DEPTH links
    Friends {
        name: String,
        #[arg(long, short)]
        depth: Option<usize>,
    },
    /// Show one article and its links
    Show { name: String },
}
