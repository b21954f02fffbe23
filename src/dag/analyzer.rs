// src/dag/analyzer.rs

//! Acyclicity verdict plus size metrics for one submitted pipeline.

use tracing::debug;

use crate::dag::graph::DependencyGraph;
use crate::dag::sanitize::sanitize;
use crate::types::{AnalysisReport, EdgeRecord, NodeRecord, PipelineData};

/// Stateless analyzer. Every call builds and drops its own graph, so a single
/// value can be shared freely between concurrent request handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphAnalyzer;

impl GraphAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyse raw node and edge records.
    ///
    /// Never fails: malformed records are skipped for the verdict but still
    /// counted in `num_nodes` / `num_edges`.
    pub fn analyze(&self, nodes: &[NodeRecord], edges: &[EdgeRecord]) -> AnalysisReport {
        let clean = sanitize(nodes, edges);
        let graph = DependencyGraph::build(&clean);
        let visited = graph.kahn_visit_count();
        let is_dag = visited == graph.universe_len();

        debug!(
            raw_nodes = nodes.len(),
            raw_edges = edges.len(),
            skipped_nodes = clean.skipped_nodes,
            skipped_edges = clean.skipped_edges,
            declared = graph.declared_len(),
            universe = graph.universe_len(),
            visited,
            is_dag,
            "pipeline analysed"
        );

        AnalysisReport {
            num_nodes: nodes.len(),
            num_edges: edges.len(),
            is_dag,
        }
    }

    pub fn analyze_pipeline(&self, pipeline: &PipelineData) -> AnalysisReport {
        self.analyze(&pipeline.nodes, &pipeline.edges)
    }
}
