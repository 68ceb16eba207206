// src/graph/mod.rs
//! Bipartite recipe-ingredient graph.
//!
//! Recipes and ingredients are vertices; an undirected edge joins a recipe
//! to each canonical ingredient it uses. The root graph is built once from
//! the catalog and only read afterwards; queries produce new induced graphs.

pub mod builder;
pub mod export;
pub mod node;
pub mod queries;
pub mod store;

pub use export::{GraphView, ViewNode};
pub use node::{Node, NodeId, NodeKind, Payload};
pub use queries::{IngredientDegree, Pairing, MOST_CONNECTED_LIMIT, SIMILAR_LIMIT};
pub use store::RecipeGraph;
