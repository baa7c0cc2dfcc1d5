//! Command-line interface for folio.
//!
//! Renders the blog listing, article pages and launch countdowns to the
//! terminal.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

use crate::catalog::{ContentIndex, ContentItem};
use crate::config::{self, ResolvedConfig};
use crate::countdown::{CountdownHandle, LaunchTimer, SystemClock, TimeBreakdown};
use crate::discovery::{BlogView, FilterState};

/// folio - Content discovery and launch countdowns
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file to use instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List articles: featured first, then the filtered rest
    Posts {
        /// Case-insensitive search over title, excerpt and categories
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category label
        #[arg(short, long)]
        category: Option<String>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories in first-occurrence order
    Categories {
        /// Maximum number of categories to show (defaults to config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show every category
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// List featured articles
    Featured,

    /// Show one article
    Show {
        /// Article slug
        slug: String,
    },

    /// Run launch countdowns
    Countdown {
        /// Count down this many days instead of the configured timers
        #[arg(short, long)]
        days: Option<u32>,

        /// Stop after this many ticks
        #[arg(short, long)]
        ticks: Option<u64>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = config::config()?;
        let catalog = self.catalog.as_deref().or(config.catalog.as_deref());

        match self.command {
            Commands::Posts {
                search,
                category,
                json,
            } => {
                let index = load_index(catalog).await?;
                let mut state = FilterState::new();
                state.set_search(search.unwrap_or_default());
                state.select_category(category);
                list_posts(&index, &state, config.top_categories, json)
            }
            Commands::Categories { limit, all } => {
                let index = load_index(catalog).await?;
                let limit = if all { usize::MAX } else { limit.unwrap_or(config.top_categories) };
                list_categories(&index, limit);
                Ok(())
            }
            Commands::Featured => {
                let index = load_index(catalog).await?;
                for item in index.featured() {
                    print_item(item);
                }
                Ok(())
            }
            Commands::Show { slug } => {
                let index = load_index(catalog).await?;
                show_post(&index, &slug)
            }
            Commands::Countdown { days, ticks } => {
                let timers = match days {
                    Some(days) => vec![LaunchTimer::new("Countdown", days)],
                    None => config.timers.clone(),
                };
                run_countdowns(config, timers, ticks).await
            }
            Commands::Config => {
                show_config(config, catalog);
                Ok(())
            }
        }
    }
}

/// Load the configured catalog, or the built-in one
async fn load_index(path: Option<&Path>) -> Result<ContentIndex> {
    match path {
        Some(path) => ContentIndex::load(path).await,
        None => ContentIndex::seeded().context("Built-in catalog is invalid"),
    }
}

fn print_item(item: &ContentItem) {
    println!("{}", item.title);
    println!(
        "  {} | {} min read | {}",
        item.published_display(),
        item.read_time_minutes,
        item.categories.join(", ")
    );
    println!("  /blog/{}", item.slug);
}

fn list_posts(index: &ContentIndex, state: &FilterState, top_categories: usize, json: bool) -> Result<()> {
    let view = BlogView::build(index, state, top_categories);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if !view.featured.is_empty() {
        println!("Featured Articles");
        println!("{}", "=".repeat(50));
        for item in &view.featured {
            print_item(item);
        }
        println!();
    }

    println!("Categories: {}", view.categories.join(" | "));
    println!();

    if view.has_no_matches() {
        println!("No articles found. Try adjusting your search or filter criteria.");
        return Ok(());
    }

    println!("Articles ({})", view.results.len());
    println!("{}", "=".repeat(50));
    for item in &view.results {
        print_item(item);
    }

    Ok(())
}

fn list_categories(index: &ContentIndex, limit: usize) {
    for category in index.top_categories(limit) {
        println!("{}", category);
    }
}

fn show_post(index: &ContentIndex, slug: &str) -> Result<()> {
    let item = index
        .find_by_slug(slug)
        .with_context(|| format!("Article not found: {}", slug))?;

    println!("{}", item.title);
    println!("{}", "=".repeat(item.title.len().min(80)));
    if !item.author.is_empty() {
        println!("By {}", item.author);
    }
    println!("{} | {} min read", item.published_display(), item.read_time_minutes);
    println!("Categories: {}", item.categories.join(", "));
    println!();
    println!("{}", item.body());

    Ok(())
}

fn all_zero(handles: &[CountdownHandle]) -> bool {
    handles.iter().all(|h| h.current_breakdown().is_zero())
}

/// Run every timer until `max_ticks`, Ctrl-C, or all of them reach zero
async fn run_countdowns(config: &ResolvedConfig, timers: Vec<LaunchTimer>, max_ticks: Option<u64>) -> Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<(usize, TimeBreakdown)>();

    let mut handles: Vec<CountdownHandle> = timers
        .iter()
        .enumerate()
        .map(|(i, timer)| {
            let tx = tick_tx.clone();
            CountdownHandle::spawn(
                timer.days_from_now,
                &config.countdown,
                Arc::new(SystemClock),
                move |breakdown| {
                    let _ = tx.send((i, breakdown));
                },
            )
        })
        .collect();
    drop(tick_tx);

    for (timer, handle) in timers.iter().zip(&handles) {
        println!("{}: {} (launch {})", timer.title, handle.current_breakdown(), handle.launch_date_display());
        if !timer.description.is_empty() {
            println!("  {}", timer.description);
        }
    }

    let mut seen_ticks = vec![0_u64; handles.len()];

    if !all_zero(&handles) && max_ticks != Some(0) {
        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted");
                    break;
                }
                tick = tick_rx.recv() => {
                    let Some((i, breakdown)) = tick else { break };
                    println!("{}: {}", timers[i].title, breakdown);

                    seen_ticks[i] += 1;
                    let done = max_ticks.is_some_and(|max| seen_ticks.iter().all(|&n| n >= max));
                    if done || all_zero(&handles) {
                        break;
                    }
                }
            }
        }
    }

    for handle in handles.iter_mut() {
        handle.stop();
    }

    Ok(())
}

fn show_config(config: &ResolvedConfig, catalog: Option<&Path>) {
    println!("folio Configuration");
    println!("{}", "=".repeat(50));
    println!();
    println!(
        "Config file:    {}",
        config
            .config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!(
        "Catalog:        {}",
        catalog
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );
    println!("Top categories: {}", config.top_categories);
    println!("Tick interval:  {} ms", config.countdown.tick_interval_ms);
    println!();
    println!("Timers:");
    for timer in &config.timers {
        println!("  {:<20} {} day(s)", timer.title, timer.days_from_now);
    }
}
