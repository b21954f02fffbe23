// src/server/routes.rs

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::{Value, json};
use tracing::info;

use crate::server::AppState;
use crate::server::error::AppError;
use crate::types::{AnalysisReport, PipelineData};

/// `GET /`: liveness probe.
pub async fn ping() -> Json<Value> {
    Json(json!({ "Ping": "Pong" }))
}

/// `POST /pipelines/parse`: analyse the submitted nodes and edges.
pub async fn parse_pipeline(
    State(state): State<AppState>,
    payload: Result<Json<PipelineData>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let Json(pipeline) = payload?;

    let report = state.analyzer.analyze_pipeline(&pipeline);
    info!(
        num_nodes = report.num_nodes,
        num_edges = report.num_edges,
        is_dag = report.is_dag,
        "pipeline parsed"
    );

    Ok(Json(report))
}
