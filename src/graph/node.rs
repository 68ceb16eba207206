// src/graph/node.rs
//! Vertex types for the recipe-ingredient graph.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Recipe;

/// Dense index of a node inside one [`RecipeGraph`](super::RecipeGraph).
///
/// Ids are assigned in insertion order and are meaningless across graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        Self(index as u32)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Recipe,
    Ingredient,
}

impl NodeKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Ingredient => "ingredient",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-kind data. Only recipe vertices own a recipe record.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Recipe(Arc<Recipe>),
    Ingredient,
}

/// A vertex. Neighbour sets are only ever changed by the owning graph, which
/// updates both endpoints of an edge together.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    key: String,
    price: f64,
    payload: Payload,
    pub(super) neighbors: BTreeSet<NodeId>,
}

impl Node {
    pub(super) fn recipe(recipe: Arc<Recipe>) -> Self {
        Self {
            key: recipe.title().to_string(),
            price: recipe.price(),
            payload: Payload::Recipe(recipe),
            neighbors: BTreeSet::new(),
        }
    }

    pub(super) fn ingredient(name: &str, price: f64) -> Self {
        Self {
            key: name.to_string(),
            price,
            payload: Payload::Ingredient,
            neighbors: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self.payload {
            Payload::Recipe(_) => NodeKind::Recipe,
            Payload::Ingredient => NodeKind::Ingredient,
        }
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The recipe record, for recipe vertices.
    #[must_use]
    pub fn as_recipe(&self) -> Option<&Arc<Recipe>> {
        match &self.payload {
            Payload::Recipe(recipe) => Some(recipe),
            Payload::Ingredient => None,
        }
    }

    /// Canonical ingredient list, for recipe vertices.
    #[must_use]
    pub fn ingredients(&self) -> Option<&[String]> {
        self.as_recipe().map(|r| r.ingredients())
    }

    /// Number of neighbours. For an ingredient, the number of recipes using it.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    #[must_use]
    pub fn neighbor_ids(&self) -> &BTreeSet<NodeId> {
        &self.neighbors
    }
}
