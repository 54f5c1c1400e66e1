//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Cli, Commands};
use super::handlers::{self, Output};
use crate::config::{Config, TravelConfig};
use crate::exit::WikinetExit;
use crate::graph::LinkGraph;
use crate::links;
use anyhow::{Context, Result};

/// Loads config and links, then executes the parsed command.
///
/// # Errors
/// Returns error if config or link loading fails, or output cannot be written.
pub fn execute(cli: Cli) -> Result<WikinetExit> {
    let config = Config::load(cli.config.as_deref())?;
    let pairs = links::read_links(&cli.links)
        .with_context(|| format!("loading {}", cli.links.display()))?;
    let mut graph = LinkGraph::from_links(pairs);
    let out = Output { json: cli.json };

    let Some(command) = cli.command else {
        return handlers::handle_summary(&graph, out);
    };

    match command {
        Commands::Titles => handlers::handle_titles(&graph, out),
        Commands::Rank {
            iterations,
            damping,
            scores,
        } => {
            let rank = config.rank.with_overrides(iterations, damping);
            rank.validate()?;
            handlers::handle_rank(&mut graph, &rank, scores, out)
        }
        Commands::Jaccard { name } => handlers::handle_jaccard(&graph, &name, out),
        Commands::Travel { name, limit } => {
            let travel = TravelConfig {
                limit: limit.unwrap_or(config.travel.limit),
            };
            travel.validate()?;
            handlers::handle_travel(&graph, &name, travel.limit, out)
        }
        Commands::Friends { name, depth } => {
            handlers::handle_friends(&graph, &name, depth.unwrap_or(config.friends.depth), out)
        }
        Commands::Show { name } => handlers::handle_show(&graph, &name, out),
    }
}
