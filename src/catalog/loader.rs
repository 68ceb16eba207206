// src/catalog/loader.rs
//! Turns raw recipe rows into validated [`Recipe`] records.

use std::collections::HashSet;
use std::io::Read;
use std::sync::LazyLock;

use csv::StringRecord;
use regex::Regex;

use super::{PriceTable, Recipe, Vocabulary};
use crate::error::Result;
use crate::normalize;
use crate::utils::round2;

const COL_TITLE: usize = 1;
const COL_INGREDIENTS: usize = 2;
const COL_INSTRUCTIONS: usize = 3;
const COL_IMAGE: usize = 4;

// A single- or double-quoted list item, backslash escapes allowed.
static QUOTED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)""#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Why a row did not become a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    EmptyTitle,
    NoKnownIngredients,
    Unpriced(String),
}

/// Reads every recipe row after the header, keeping those that pass
/// validation. The first row wins when titles repeat.
///
/// # Errors
/// Returns error if the CSV stream cannot be decoded.
pub fn load_recipes<R: Read>(
    reader: R,
    vocabulary: &Vocabulary,
    prices: &PriceTable,
) -> Result<Vec<Recipe>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut seen = HashSet::new();
    let mut recipes = Vec::new();
    let mut dropped = 0usize;

    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        match clean_record(&record, vocabulary, prices) {
            Ok(recipe) => {
                if seen.insert(recipe.title().to_string()) {
                    recipes.push(recipe);
                } else {
                    tracing::warn!(title = recipe.title(), "duplicate recipe title, keeping first");
                }
            }
            Err(reason) => {
                dropped += 1;
                tracing::debug!(row = row + 1, ?reason, "dropped recipe row");
            }
        }
    }

    tracing::info!(kept = recipes.len(), dropped, "loaded recipe catalog");
    Ok(recipes)
}

/// Validates one raw row.
///
/// # Errors
/// Returns the [`Rejection`] reason when the row cannot become a recipe.
pub fn clean_record(
    record: &StringRecord,
    vocabulary: &Vocabulary,
    prices: &PriceTable,
) -> std::result::Result<Recipe, Rejection> {
    let field = |i: usize| record.get(i).unwrap_or("");

    let title = field(COL_TITLE).trim();
    if title.is_empty() {
        return Err(Rejection::EmptyTitle);
    }

    let full_ingredients = parse_ingredient_list(field(COL_INGREDIENTS));
    let ingredients = normalize::canonicalize_all(&full_ingredients, vocabulary);
    if ingredients.is_empty() {
        return Err(Rejection::NoKnownIngredients);
    }

    let price = total_price(&ingredients, prices)?;

    Ok(Recipe::new(
        title,
        full_ingredients,
        field(COL_INSTRUCTIONS),
        field(COL_IMAGE),
        ingredients,
        price,
    ))
}

/// Sums canonical ingredient prices, rejecting the first unpriced one.
///
/// # Errors
/// Returns [`Rejection::Unpriced`] naming the offending ingredient.
pub fn total_price(
    ingredients: &[String],
    prices: &PriceTable,
) -> std::result::Result<f64, Rejection> {
    let mut total = 0.0;
    for name in ingredients {
        let Some(price) = prices.price_of(name) else {
            return Err(Rejection::Unpriced(name.clone()));
        };
        total += price;
    }
    Ok(round2(total))
}

/// Parses a bracketed, quoted, comma-separated list such as
/// `['1 cup flour', "2 tbsp baker's yeast"]`.
///
/// Falls back to plain comma splitting when no quoted items are present.
#[must_use]
pub fn parse_ingredient_list(raw: &str) -> Vec<String> {
    let inner = raw.trim().trim_start_matches('[').trim_end_matches(']');

    let quoted: Vec<String> = QUOTED_ITEM
        .captures_iter(inner)
        .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)))
        .map(|m| unescape(m.as_str()))
        .collect();

    if !quoted.is_empty() {
        return quoted;
    }

    inner
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn unescape(item: &str) -> String {
    let mut out = String::with_capacity(item.len());
    let mut chars = item.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
