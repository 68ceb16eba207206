// src/reviews.rs
//! Append-only review log and per-recipe mean ratings.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LarderError, Result};

/// An integer star rating, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = LarderError;

    fn try_from(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Ok(Self(value as u8))
        } else {
            Err(LarderError::InvalidRating(value))
        }
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

/// One row of the review log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "Recipe")]
    pub recipe: String,
    #[serde(rename = "Rating")]
    pub rating: Rating,
    #[serde(rename = "Review", default)]
    pub comment: String,
}

impl Review {
    #[must_use]
    pub fn new(recipe: impl Into<String>, rating: Rating, comment: impl Into<String>) -> Self {
        Self {
            recipe: recipe.into(),
            rating,
            comment: comment.into(),
        }
    }
}

/// The on-disk review log. Entries are only ever appended.
#[derive(Debug, Clone)]
pub struct ReviewLog {
    path: PathBuf,
}

impl ReviewLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in file order. A missing file is an empty log.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or decoded.
    pub fn read(&self) -> Result<Vec<Review>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path).map_err(|e| LarderError::from(e).at(&self.path))?;
        read_reviews(file).map_err(|e| e.at(&self.path))
    }

    /// Appends one entry, writing the header only when the file is new.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or written.
    pub fn append(&self, review: &Review) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| LarderError::from(e).at(parent))?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LarderError::from(e).at(&self.path))?;
        let is_new = file
            .metadata()
            .map_err(|e| LarderError::from(e).at(&self.path))?
            .len()
            == 0;

        write_review(file, review, is_new).map_err(|e| e.at(&self.path))?;
        tracing::info!(recipe = %review.recipe, rating = review.rating.value(), "review saved");
        Ok(())
    }

    /// # Errors
    /// Returns error if the log cannot be read.
    pub fn aggregate(&self) -> Result<ReviewAggregate> {
        Ok(ReviewAggregate::from_reviews(&self.read()?))
    }
}

/// # Errors
/// Returns error if a row cannot be decoded.
pub fn read_reviews<R: Read>(reader: R) -> Result<Vec<Review>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut reviews: Vec<Review> = Vec::new();
    for row in rdr.deserialize::<Review>() {
        reviews.push(row?);
    }
    Ok(reviews)
}

/// # Errors
/// Returns error if serialization or the write fails.
pub fn write_review<W: Write>(writer: W, review: &Review, with_header: bool) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(writer);
    wtr.serialize(review)?;
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Tally {
    sum: f64,
    count: usize,
}

/// Mean rating per recipe title. A title with no entries has no mean,
/// which is distinct from a low one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewAggregate {
    tallies: HashMap<String, Tally>,
}

impl ReviewAggregate {
    #[must_use]
    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        let mut tallies: HashMap<String, Tally> = HashMap::new();
        for review in reviews {
            let tally = tallies.entry(review.recipe.clone()).or_default();
            tally.sum += f64::from(review.rating.value());
            tally.count += 1;
        }
        Self { tallies }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self, title: &str) -> Option<f64> {
        self.tallies
            .get(title)
            .filter(|t| t.count > 0)
            .map(|t| t.sum / t.count as f64)
    }

    #[must_use]
    pub fn count(&self, title: &str) -> usize {
        self.tallies.get(title).map_or(0, |t| t.count)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(v: i64) -> Rating {
        Rating::try_from(v).expect("valid rating")
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::try_from(0).is_err());
        assert!(Rating::try_from(6).is_err());
        assert_eq!(rating(1).value(), 1);
        assert_eq!(rating(5).value(), 5);
    }

    #[test]
    fn test_mean_per_title() {
        let reviews = vec![
            Review::new("Soup", rating(5), "great"),
            Review::new("Soup", rating(2), ""),
            Review::new("Salad", rating(4), "fine"),
        ];
        let agg = ReviewAggregate::from_reviews(&reviews);
        assert_eq!(agg.mean("Soup"), Some(3.5));
        assert_eq!(agg.mean("Salad"), Some(4.0));
        assert_eq!(agg.count("Soup"), 2);
        assert_eq!(agg.mean("Stew"), None);
        assert_eq!(agg.count("Stew"), 0);
    }

    #[test]
    fn test_read_rejects_out_of_range_rating() {
        let data = "Recipe,Rating,Review\nSoup,9,nope\n";
        assert!(read_reviews(data.as_bytes()).is_err());
    }

    #[test]
    fn test_read_keeps_file_order() {
        let data = "Recipe,Rating,Review\nB,3,x\nA,4,\"commas, and \"\"quotes\"\"\"\n";
        let reviews = read_reviews(data.as_bytes()).expect("parses");
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].recipe, "B");
        assert_eq!(reviews[1].comment, "commas, and \"quotes\"");
    }
}
