// src/catalog/prices.rs
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::error::{LarderError, Result};

/// Unit price per canonical ingredient.
///
/// An entry of `None` means the ingredient is listed but unpriced; recipes
/// that need it are excluded from the catalog.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<String, Option<f64>>,
}

impl PriceTable {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<f64>)>,
        S: AsRef<str>,
    {
        Self {
            prices: entries
                .into_iter()
                .map(|(name, price)| (name.as_ref().to_lowercase(), price))
                .collect(),
        }
    }

    /// # Errors
    /// Returns error if the file cannot be opened or a row is malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| LarderError::from(e).at(path))?;
        Self::from_reader(file).map_err(|e| e.at(path))
    }

    /// Reads `(name, price-or-empty)` rows after the header.
    ///
    /// # Errors
    /// Returns error if a row cannot be decoded or a price is not a number.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let mut prices = HashMap::new();
        for record in rdr.records() {
            let record = record?;
            let Some(name) = record.get(0) else {
                continue;
            };
            let name = name.trim().to_lowercase();
            if name.is_empty() {
                continue;
            }
            let price = parse_price(record.get(1).unwrap_or(""), &name)?;
            prices.insert(name, price);
        }
        Ok(Self { prices })
    }

    /// Price of a priced ingredient; `None` for unpriced or unknown names.
    #[must_use]
    pub fn price_of(&self, name: &str) -> Option<f64> {
        self.prices.get(name).copied().flatten()
    }

    #[must_use]
    pub fn is_priced(&self, name: &str) -> bool {
        self.price_of(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

fn parse_price(raw: &str, name: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let price: f64 = raw
        .parse()
        .map_err(|_| LarderError::Other(format!("invalid price '{raw}' for {name}")))?;
    if price < 0.0 || !price.is_finite() {
        return Err(LarderError::Other(format!("price for {name} must be non-negative, got {price}")));
    }
    Ok(Some(price))
}
