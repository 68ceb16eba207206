// src/graph/export.rs
//! Node/edge view of a graph for external renderers.

use std::collections::HashSet;
use std::io::Write;

use serde::Serialize;

use super::node::{NodeId, NodeKind};
use super::store::RecipeGraph;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewNode {
    pub key: String,
    pub kind: NodeKind,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<ViewNode>,
    /// Unordered pairs, each listed once.
    pub edges: Vec<[String; 2]>,
}

impl GraphView {
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl RecipeGraph {
    /// Exports at most about `max_vertices` vertices.
    ///
    /// Vertices are visited in insertion order; each pulls in its neighbours
    /// while the cap allows, and edges are kept only between included
    /// vertices. `highlight` marks ingredient vertices by name.
    #[must_use]
    pub fn to_view(&self, max_vertices: usize, highlight: &[String]) -> GraphView {
        let mut order: Vec<NodeId> = Vec::new();
        let mut included: HashSet<NodeId> = HashSet::new();
        let mut seen_edges: HashSet<(NodeId, NodeId)> = HashSet::new();
        let mut edges = Vec::new();

        for id in self.ids() {
            if included.insert(id) {
                order.push(id);
            }
            for &other in self.node(id).neighbor_ids() {
                if included.len() < max_vertices && included.insert(other) {
                    order.push(other);
                }
                if included.contains(&other) {
                    let pair = (id.min(other), id.max(other));
                    if seen_edges.insert(pair) {
                        edges.push([
                            self.node(id).key().to_string(),
                            self.node(other).key().to_string(),
                        ]);
                    }
                }
            }
            if included.len() >= max_vertices {
                break;
            }
        }

        let nodes = order
            .into_iter()
            .map(|id| {
                let node = self.node(id);
                let kind = node.kind();
                ViewNode {
                    key: node.key().to_string(),
                    kind,
                    price: node.price(),
                    ingredients: node.ingredients().map(<[String]>::to_vec),
                    highlighted: kind == NodeKind::Ingredient
                        && highlight.iter().any(|h| h == node.key()),
                }
            })
            .collect();

        GraphView { nodes, edges }
    }
}
