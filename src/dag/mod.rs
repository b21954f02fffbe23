// src/dag/mod.rs

//! Cycle detection for submitted pipelines.
//!
//! - [`sanitize`] drops malformed node/edge records before anything else.
//! - [`graph`] holds the request-scoped adjacency and in-degree maps and runs
//!   Kahn's elimination over them.
//! - [`analyzer`] ties both together and produces the reported metrics.

pub mod analyzer;
pub mod graph;
pub mod sanitize;

pub use analyzer::GraphAnalyzer;
pub use graph::DependencyGraph;
pub use sanitize::{CleanGraph, Edge, NodeId, sanitize};
