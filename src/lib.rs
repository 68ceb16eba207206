pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod normalize;
pub mod recommend;
pub mod reporting;
pub mod reviews;
pub mod utils;
