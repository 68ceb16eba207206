use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::catalog::Catalog;
use crate::cli::args::{FilterArgs, IngredientArgs};
use crate::config::Config;
use crate::error::LarderError;
use crate::exit::LarderExit;
use crate::graph::RecipeGraph;
use crate::recommend::{Query, Recommender};
use crate::reporting::{self, PairingLine};
use crate::reviews::{Rating, Review, ReviewAggregate, ReviewLog};
use crate::utils::normalize_name;

/// Everything loaded once per run and shared read-only by every command.
pub struct Session {
    pub config: Config,
    pub catalog: Catalog,
    pub graph: RecipeGraph,
    pub log: ReviewLog,
    pub reviews: ReviewAggregate,
}

impl Session {
    /// Loads the catalog, builds the root graph and aggregates the review log.
    ///
    /// # Errors
    /// Returns error if any data file is missing or malformed.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        let catalog = Catalog::load(&config.data).context("Failed to load catalog")?;
        let graph = catalog.graph().context("Failed to build recipe graph")?;
        let log = ReviewLog::new(config.data.reviews.clone());
        let reviews = log
            .aggregate()
            .with_context(|| format!("Failed to read reviews from {}", log.path().display()))?;
        Ok(Self {
            config,
            catalog,
            graph,
            log,
            reviews,
        })
    }

    fn recommender(&self) -> Recommender<'_> {
        Recommender::new(&self.graph, &self.catalog.prices, &self.reviews)
    }

    /// Lowercases, dedups and checks names against the vocabulary.
    fn resolve_ingredients(&self, raw: &[String]) -> crate::error::Result<Vec<String>> {
        let mut resolved: Vec<String> = Vec::with_capacity(raw.len());
        for name in raw {
            let name = normalize_name(name);
            if !self.catalog.vocabulary.contains(&name) {
                return Err(LarderError::UnknownIngredient(name));
            }
            if !resolved.contains(&name) {
                resolved.push(name);
            }
        }
        Ok(resolved)
    }

    fn browse_limit(&self) -> usize {
        self.config.display.browse_limit
    }
}

fn invalid(message: &str) -> LarderExit {
    eprintln!("{} {message}", "invalid input:".red().bold());
    LarderExit::InvalidInput
}

fn rating_floor(filters: &FilterArgs) -> Option<f64> {
    filters.min_rating.map(f64::from)
}

/// Handles the recommend command.
///
/// # Errors
/// Returns error only for unexpected failures; bad input maps to an exit code.
pub fn handle_recommend(
    session: &Session,
    ingredients: &IngredientArgs,
    filters: &FilterArgs,
    limit: usize,
    page: usize,
) -> Result<LarderExit> {
    let names = match session.resolve_ingredients(&ingredients.ingredients) {
        Ok(names) => names,
        Err(e) => return Ok(invalid(&e.to_string())),
    };

    let query = Query::new(limit, names)
        .with_price_ceiling(filters.max_price)
        .with_rating_floor(rating_floor(filters));
    let matches = session.recommender().rank(&query);

    if matches.is_empty() {
        reporting::print_no_matches();
        return Ok(LarderExit::NoMatches);
    }
    let page_size = session.config.display.page_size;
    let pages = reporting::page_count(matches.len(), page_size);
    if page > pages {
        return Ok(invalid(&format!("page {page} is out of range ({pages} pages)")));
    }
    reporting::print_matches(&matches, page - 1, page_size);
    Ok(LarderExit::Success)
}

/// Handles the show command.
///
/// # Errors
/// Returns error only for unexpected failures.
pub fn handle_show(session: &Session, title: &str) -> Result<LarderExit> {
    let Some(recipe) = session.graph.get(title).and_then(|n| n.as_recipe()) else {
        return Ok(invalid(&format!("no recipe titled '{title}'")));
    };
    reporting::print_recipe(
        recipe,
        session.reviews.mean(title),
        session.reviews.count(title),
    );
    Ok(LarderExit::Success)
}

/// Handles the rate command.
///
/// # Errors
/// Returns error if the review log cannot be written.
pub fn handle_rate(session: &Session, title: &str, rating: u8, comment: &str) -> Result<LarderExit> {
    if session.graph.get(title).and_then(|n| n.as_recipe()).is_none() {
        return Ok(invalid(&format!("no recipe titled '{title}'")));
    }
    let rating = Rating::try_from(i64::from(rating))?;
    session
        .log
        .append(&Review::new(title, rating, comment))
        .context("Failed to save review")?;
    println!("{}", "Your review has been saved!".green());
    Ok(LarderExit::Success)
}

/// Handles the common command: browse every recipe within the filters and
/// rank ingredients by how many of those recipes use them.
///
/// # Errors
/// Returns error if the filtered graph cannot be built.
pub fn handle_common(session: &Session, filters: &FilterArgs) -> Result<LarderExit> {
    let query = Query::new(session.browse_limit(), Vec::new())
        .with_price_ceiling(filters.max_price)
        .with_rating_floor(rating_floor(filters));
    let sub = session.recommender().select_recipes(&query)?;

    let ranked = sub.most_connected_ingredients();
    reporting::print_common(&ranked);
    if ranked.is_empty() {
        return Ok(LarderExit::NoMatches);
    }
    Ok(LarderExit::Success)
}

/// Handles the pairings command.
///
/// # Errors
/// Returns error if the filtered graph cannot be built.
pub fn handle_pairings(session: &Session, ingredient: &str) -> Result<LarderExit> {
    let names = match session.resolve_ingredients(&[ingredient.to_string()]) {
        Ok(names) => names,
        Err(e) => return Ok(invalid(&e.to_string())),
    };
    let Some(target) = names.first().cloned() else {
        return Ok(invalid("no ingredient given"));
    };

    let query = Query::new(session.browse_limit(), names);
    let sub = session.recommender().select_recipes(&query)?;

    let lines = pairing_lines(&sub, &target);
    reporting::print_pairings(&target, &lines);
    if lines.is_empty() {
        return Ok(LarderExit::NoMatches);
    }
    Ok(LarderExit::Success)
}

/// Similar ingredients with their shared-recipe counts and prices.
#[must_use]
pub fn pairing_lines(graph: &RecipeGraph, target: &str) -> Vec<PairingLine> {
    graph
        .similar_ingredients(target)
        .into_iter()
        .map(|pairing| {
            let shared = graph.shared_neighbor_count(target, &pairing.name).unwrap_or(0);
            let price = graph.get(&pairing.name).map_or(0.0, |n| n.price());
            PairingLine { pairing, shared, price }
        })
        .collect()
}

/// Handles the export command.
///
/// # Errors
/// Returns error if the graph cannot be built or the output cannot be written.
pub fn handle_export(
    session: &Session,
    ingredients: &IngredientArgs,
    max_price: Option<f64>,
    limit: usize,
    output: Option<&Path>,
) -> Result<LarderExit> {
    let names = match session.resolve_ingredients(&ingredients.ingredients) {
        Ok(names) => names,
        Err(e) => return Ok(invalid(&e.to_string())),
    };

    let query = Query::new(limit, names.clone()).with_price_ceiling(max_price);
    let sub = session.recommender().select_recipes(&query)?;
    if sub.is_empty() {
        eprintln!("{}", "No recipes found with your filters.".yellow());
        return Ok(LarderExit::NoMatches);
    }

    let view = sub.to_view(session.config.display.max_vertices, &names);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            view.write_json(&mut writer)?;
            writer.flush()?;
            eprintln!(
                "{} {} nodes, {} edges -> {}",
                "Graph exported:".green(),
                view.nodes.len(),
                view.edges.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            view.write_json(&mut lock)?;
            writeln!(lock)?;
        }
    }
    Ok(LarderExit::Success)
}
