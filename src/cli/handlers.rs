// src/cli/handlers.rs
use crate::exit::WikinetExit;
use crate::graph::{LinkGraph, RankConfig};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Output mode shared by all handlers.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

#[derive(Serialize)]
struct Summary {
    articles: usize,
    links: usize,
}

#[derive(Serialize)]
struct Scored<'a> {
    name: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct ArticleView<'a> {
    name: &'a str,
    neighbors: Vec<&'a str>,
    in_degree: usize,
}

fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

fn print_list<S: AsRef<str>>(items: &[S]) {
    for (i, item) in items.iter().enumerate() {
        println!("{:>4}. {}", i + 1, item.as_ref());
    }
}

fn report_missing(name: &str) -> WikinetExit {
    eprintln!("{} no article named '{name}'", "✗".red());
    WikinetExit::NotFound
}

/// Prints article and link counts.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_summary(graph: &LinkGraph, out: Output) -> Result<WikinetExit> {
    let summary = Summary {
        articles: graph.len(),
        links: graph.edge_count(),
    };
    if out.json {
        print_json(&summary)?;
    } else {
        println!("{} {}", "Articles:".bold(), summary.articles);
        println!("{} {}", "Links:".bold(), summary.links);
    }
    Ok(WikinetExit::Success)
}

/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_titles(graph: &LinkGraph, out: Output) -> Result<WikinetExit> {
    let titles = graph.titles();
    if out.json {
        print_json(&titles)?;
    } else {
        for title in titles {
            println!("{title}");
        }
    }
    Ok(WikinetExit::Success)
}

/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_rank(
    graph: &mut LinkGraph,
    config: &RankConfig,
    scores: bool,
    out: Output,
) -> Result<WikinetExit> {
    let ranked = graph.ranked(config.iterations, config.damping);

    if out.json {
        let rows: Vec<Scored> = ranked
            .iter()
            .map(|(name, score)| Scored { name, score: *score })
            .collect();
        print_json(&rows)?;
    } else if scores {
        for (i, (name, score)) in ranked.iter().enumerate() {
            println!("{:>4}. {name} {}", i + 1, format!("{score:.4}").dimmed());
        }
    } else {
        let names: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
        print_list(&names);
    }
    Ok(WikinetExit::Success)
}

/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_jaccard(graph: &LinkGraph, name: &str, out: Output) -> Result<WikinetExit> {
    if !graph.contains(name) {
        return Ok(report_missing(name));
    }
    let Some(scored) = graph.jaccard_scores(name) else {
        eprintln!("{} '{name}' links to nothing; no similarity to report", "!".yellow());
        return Ok(WikinetExit::Success);
    };

    if out.json {
        let rows: Vec<Scored> = scored
            .iter()
            .map(|(name, score)| Scored { name, score: *score })
            .collect();
        print_json(&rows)?;
    } else {
        for (i, (name, score)) in scored.iter().enumerate() {
            println!("{:>4}. {name} {}", i + 1, format!("{score:.3}").dimmed());
        }
    }
    Ok(WikinetExit::Success)
}

/// Prints at most `limit` articles of the travel path.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_travel(
    graph: &LinkGraph,
    name: &str,
    limit: usize,
    out: Output,
) -> Result<WikinetExit> {
    if !graph.contains(name) {
        return Ok(report_missing(name));
    }
    let path: Vec<&str> = graph.travel(name).take(limit).collect();

    if out.json {
        print_json(&path)?;
    } else {
        println!("{}", path.join(" → "));
        if limit > 0 && path.len() == limit {
            eprintln!("{} stopped after {limit} articles", "!".yellow());
        }
    }
    Ok(WikinetExit::Success)
}

/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_friends(
    graph: &LinkGraph,
    name: &str,
    depth: usize,
    out: Output,
) -> Result<WikinetExit> {
    let Some(friends) = graph.friends_by_depth(name, depth) else {
        return Ok(report_missing(name));
    };
    let mut friends: Vec<String> = friends.into_iter().collect();
    friends.sort();

    if out.json {
        print_json(&friends)?;
    } else {
        println!(
            "{} {} within depth {depth}",
            friends.len().to_string().bold(),
            if friends.len() == 1 { "article" } else { "articles" }
        );
        for friend in &friends {
            println!("  {friend}");
        }
    }
    Ok(WikinetExit::Success)
}

/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_show(graph: &LinkGraph, name: &str, out: Output) -> Result<WikinetExit> {
    let Ok(article) = graph.get(name) else {
        return Ok(report_missing(name));
    };

    if out.json {
        print_json(&ArticleView {
            name: article.name(),
            neighbors: article.neighbors().collect(),
            in_degree: article.in_degree(),
        })?;
    } else {
        println!("{article}");
        println!("{} {}", "In-degree:".bold(), article.in_degree());
    }
    Ok(WikinetExit::Success)
}
