// src/graph/store.rs
//! The bipartite recipe-ingredient graph and its mutation rules.

use std::collections::HashMap;
use std::sync::Arc;

use super::node::{Node, NodeId, NodeKind, Payload};
use crate::catalog::{PriceTable, Recipe};
use crate::error::{LarderError, Result};

/// Recipes and ingredients as vertices; an edge means "recipe uses
/// ingredient". Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl RecipeGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True for the graph returned when a query matches nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn exists(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.index.get(key).map(|&id| self.node(id))
    }

    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Panics on an id from another graph.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Ensures a vertex exists for every canonical ingredient of `recipe`,
    /// then for the recipe itself. Existing keys are left untouched.
    ///
    /// # Errors
    /// Returns error if an ingredient has no price, or if a key is already
    /// held by a vertex of the other kind. Nothing is inserted on error.
    pub fn add_node(&mut self, recipe: impl Into<Arc<Recipe>>, prices: &PriceTable) -> Result<()> {
        let recipe = recipe.into();
        if recipe.ingredients().iter().any(|name| name == recipe.title()) {
            return Err(LarderError::KeyConflict(recipe.title().to_string()));
        }

        let mut priced = Vec::with_capacity(recipe.ingredients().len());
        for name in recipe.ingredients() {
            let price = prices
                .price_of(name)
                .ok_or_else(|| LarderError::UnpricedIngredient(name.clone()))?;
            self.ensure_kind(name, NodeKind::Ingredient)?;
            priced.push((name, price));
        }
        self.ensure_kind(recipe.title(), NodeKind::Recipe)?;

        for (name, price) in priced {
            if !self.exists(name) {
                self.insert(Node::ingredient(name, price));
            }
        }
        if !self.exists(recipe.title()) {
            self.insert(Node::recipe(recipe));
        }
        Ok(())
    }

    /// Connects an existing recipe vertex to each of its ingredient vertices.
    ///
    /// # Errors
    /// Returns `MissingNode` if the recipe or one of its ingredients has no
    /// vertex, and `NotARecipe` if `key` names an ingredient.
    pub fn add_edges(&mut self, key: &str) -> Result<()> {
        let recipe_id = self
            .id_of(key)
            .ok_or_else(|| LarderError::MissingNode(key.to_string()))?;

        let recipe = match self.node(recipe_id).payload() {
            Payload::Recipe(recipe) => Arc::clone(recipe),
            Payload::Ingredient => return Err(LarderError::NotARecipe(key.to_string())),
        };

        let mut targets = Vec::with_capacity(recipe.ingredients().len());
        for name in recipe.ingredients() {
            let id = self
                .id_of(name)
                .ok_or_else(|| LarderError::MissingNode(name.clone()))?;
            targets.push(id);
        }

        for id in targets {
            self.connect(recipe_id, id);
        }
        Ok(())
    }

    /// All vertices of `kind`, or every vertex for `None`, in insertion order.
    #[must_use]
    pub fn filter_by_kind(&self, kind: Option<NodeKind>) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| kind.map_or(true, |k| n.kind() == k))
            .collect()
    }

    #[must_use]
    pub fn recipes(&self) -> Vec<&Node> {
        self.filter_by_kind(Some(NodeKind::Recipe))
    }

    #[must_use]
    pub fn ingredients(&self) -> Vec<&Node> {
        self.filter_by_kind(Some(NodeKind::Ingredient))
    }

    #[must_use]
    pub fn degree(&self, key: &str) -> Option<usize> {
        self.get(key).map(Node::degree)
    }

    /// Neighbours of `key` in id order; empty when the key is absent.
    #[must_use]
    pub fn neighbors(&self, key: &str) -> Vec<&Node> {
        self.get(key)
            .map(|n| n.neighbors.iter().map(|&id| self.node(id)).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.id_of(a), self.id_of(b)) {
            (Some(x), Some(y)) => self.node(x).neighbors.contains(&y),
            _ => false,
        }
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }

    /// Vertex ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::from_index)
    }

    fn ensure_kind(&self, key: &str, kind: NodeKind) -> Result<()> {
        match self.get(key) {
            Some(existing) if existing.kind() != kind => {
                Err(LarderError::KeyConflict(key.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.index.insert(node.key().to_string(), id);
        self.nodes.push(node);
        id
    }

    // The single place neighbour sets change; both endpoints move together.
    fn connect(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        self.nodes[a.index()].neighbors.insert(b);
        self.nodes[b.index()].neighbors.insert(a);
    }
}
