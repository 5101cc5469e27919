//! REPL Session
//!
//! Command dispatch for the Pokedex. A session owns the pagination cursors
//! and one typed cache per kind of record; every remote read goes through
//! [`Cache::get_or_load`] keyed by the request URL.

use std::time::Duration;

use anyhow::Context;
use tracing::debug;

use crate::cache::{Cache, CacheStats};
use crate::error::Result;
use crate::pokeapi::{LocationArea, LocationPage, PokeSource};

/// Command names and descriptions, in the order `help` lists them.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the pokedex"),
    ("map", "Display 20 location areas"),
    ("mapb", "Display the previous 20 location areas"),
    ("explore", "List the Pokemon found in a location area: explore <area>"),
];

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(Option<String>),
    Unknown(String),
}

impl Command {
    /// Parses one input line. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let name = words.next()?.to_lowercase();

        let command = match name.as_str() {
            "help" => Self::Help,
            "exit" => Self::Exit,
            "map" => Self::Map,
            "mapb" => Self::MapBack,
            "explore" => Self::Explore(words.next().map(str::to_string)),
            _ => Self::Unknown(name),
        };
        Some(command)
    }
}

/// What the REPL should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print these lines and read the next command
    Continue(Vec<String>),
    /// Print these lines and stop
    Exit(Vec<String>),
}

// == Session ==
pub struct Session<S> {
    source: S,
    pages: Cache<LocationPage>,
    areas: Cache<LocationArea>,
    next: Option<String>,
    previous: Option<String>,
}

impl<S: PokeSource> Session<S> {
    /// Creates a session positioned before the first listing page.
    ///
    /// Both caches use `interval`; see [`Cache::new`] for the errors.
    pub fn new(source: S, interval: Duration) -> Result<Self> {
        let next = Some(source.first_page_url());
        Ok(Self {
            source,
            pages: Cache::new(interval)?,
            areas: Cache::new(interval)?,
            next,
            previous: None,
        })
    }

    /// Runs one input line.
    ///
    /// Fetch failures are returned as errors; the cursors are left untouched
    /// so the same command can be retried.
    pub async fn execute(&mut self, line: &str) -> anyhow::Result<Outcome> {
        let Some(command) = Command::parse(line) else {
            return Ok(Outcome::Continue(Vec::new()));
        };
        debug!(?command, "Executing command");

        let lines = match command {
            Command::Help => help_lines(),
            Command::Exit => return Ok(Outcome::Exit(vec!["Exiting the pokedex...".to_string()])),
            Command::Map => match self.next.clone() {
                Some(url) => self.show_page(url).await?,
                None => vec!["You're on the last page".to_string()],
            },
            Command::MapBack => match self.previous.clone() {
                Some(url) => self.show_page(url).await?,
                None => vec!["No previous page found".to_string()],
            },
            Command::Explore(Some(area)) => self.explore(&area).await?,
            Command::Explore(None) => vec!["Usage: explore <location-area>".to_string()],
            Command::Unknown(name) => vec![format!("Unknown command: {}", name)],
        };
        Ok(Outcome::Continue(lines))
    }

    async fn show_page(&mut self, url: String) -> anyhow::Result<Vec<String>> {
        let source = &self.source;
        let page = self
            .pages
            .get_or_load(&url, || source.fetch_location_page(&url))
            .await
            .with_context(|| format!("failed to load location page {}", url))?;

        self.next = page.next;
        self.previous = page.previous;
        Ok(page.results.into_iter().map(|location| location.name).collect())
    }

    async fn explore(&self, area: &str) -> anyhow::Result<Vec<String>> {
        let url = self.source.location_area_url(area);
        let source = &self.source;
        let details = self
            .areas
            .get_or_load(&url, || source.fetch_location_area(&url))
            .await
            .with_context(|| format!("failed to explore {}", area))?;

        let mut lines = vec![format!("Exploring {}...", area), "Found Pokemon:".to_string()];
        lines.extend(details.pokemon_names().map(|name| format!(" - {}", name)));
        Ok(lines)
    }

    /// Combined counters of the page and area caches.
    pub async fn cache_stats(&self) -> CacheStats {
        let pages = self.pages.stats().await;
        let areas = self.areas.stats().await;
        CacheStats {
            hits: pages.hits + areas.hits,
            misses: pages.misses + areas.misses,
            insertions: pages.insertions + areas.insertions,
            evictions: pages.evictions + areas.evictions,
            sweeps: pages.sweeps + areas.sweeps,
            total_entries: pages.total_entries + areas.total_entries,
        }
    }

    /// Stops both caches' reapers.
    pub async fn close(&self) {
        self.pages.close().await;
        self.areas.close().await;
    }
}

fn help_lines() -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|(name, description)| format!(" {}: {}", name, description)),
    );
    lines
}
