// src/reporting.rs
//! Terminal rendering of query results.

use colored::Colorize;

use crate::catalog::Recipe;
use crate::graph::{IngredientDegree, Pairing};
use crate::recommend::RecipeMatch;

const RULE: &str = "===================================";

fn rule() {
    println!("{}", RULE.dimmed());
}

/// Formats a mean rating, or the "no reviews" marker.
#[must_use]
pub fn rating_label(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("Rating: {r:.1}"),
        None => "No reviews yet".to_string(),
    }
}

/// Number of pages needed to list `total` items.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Prints one page of matches. `page` is zero-based and expected to be
/// below [`page_count`].
pub fn print_matches(matches: &[RecipeMatch], page: usize, page_size: usize) {
    let pages = page_count(matches.len(), page_size);
    let start = page.saturating_mul(page_size);
    rule();
    println!(
        "{} {}",
        "Recipes".green().bold(),
        format!("(page {} of {pages}, {} total)", page + 1, matches.len()).dimmed()
    );
    for m in matches.iter().skip(start).take(page_size) {
        println!(
            "- {} || Est. Price: ${:.2} || {} || matches {}",
            m.title.bold(),
            m.price,
            rating_label(m.rating),
            m.score
        );
    }
}

pub fn print_no_matches() {
    rule();
    println!("{}", "No recipes found, please give different preferences.".yellow());
}

/// Full detail view for a single recipe.
pub fn print_recipe(recipe: &Recipe, rating: Option<f64>, review_count: usize) {
    rule();
    println!("{}", recipe.title().bold());
    println!(
        "Est. Price: ${:.2} || {} ({review_count} reviews)",
        recipe.price(),
        rating_label(rating)
    );
    println!();
    println!("{}", "Ingredients:".cyan());
    for line in recipe.full_ingredients() {
        println!("- {line}");
    }
    println!();
    println!("{}", recipe.instructions());
}

pub fn print_common(ranked: &[IngredientDegree]) {
    rule();
    if ranked.is_empty() {
        println!("{}", "There were no matches based on your filters.".yellow());
        return;
    }
    println!(
        "{}",
        "Most common ingredients for recipes within your price and rating range:".green()
    );
    for item in ranked {
        println!(
            "- Recipes using it: {} || Ingredient: {} || Price: ~${:.2}",
            item.degree,
            item.name.bold(),
            item.price
        );
    }
}

/// One pairing line: similarity, shared recipe count and unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingLine {
    pub pairing: Pairing,
    pub shared: usize,
    pub price: f64,
}

pub fn print_pairings(ingredient: &str, lines: &[PairingLine]) {
    rule();
    if lines.is_empty() {
        println!("{}", format!("No ingredients pair with {ingredient}.").yellow());
        return;
    }
    println!(
        "{}",
        format!("The ingredients that appear the most with {ingredient} are:").green()
    );
    for line in lines {
        println!(
            "- {} || Similarity score: {:.2} || Shares {} recipes || ~${:.2}",
            line.pairing.name.bold(),
            line.pairing.score,
            line.shared,
            line.price
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(Some(4.26)), "Rating: 4.3");
        assert_eq!(rating_label(Some(3.0)), "Rating: 3.0");
        assert_eq!(rating_label(None), "No reviews yet");
    }
}
