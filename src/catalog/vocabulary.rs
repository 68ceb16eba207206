// src/catalog/vocabulary.rs
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{LarderError, Result};

/// The fixed set of canonical ingredient names.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    names: HashSet<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from names, lowercasing each one.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| n.as_ref().to_lowercase()).collect(),
        }
    }

    /// Reads the first column of every row after the header.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or a row is malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| LarderError::from(e).at(path))?;
        Self::from_reader(file).map_err(|e| e.at(path))
    }

    /// # Errors
    /// Returns error if a row cannot be decoded.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let mut names = HashSet::new();
        for record in rdr.records() {
            let record = record?;
            if let Some(name) = record.get(0) {
                let name = name.trim().to_lowercase();
                if !name.is_empty() {
                    names.insert(name);
                }
            }
        }
        Ok(Self { names })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
