use axum::{extract::State, Extension, Json};
use curbside_core::parking::{parking_prompt, summarize_parking, ParkingSummary};
use curbside_core::{Coordinate, ParkingRecord};
use curbside_overpass::{collect_route_parking, OverpassError};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct RouteParkingRequest {
    /// Route as `[lon, lat]` pairs, in travel order.
    route: Vec<Coordinate>,
    /// Search radius in degrees around each sampled point. Falls back to the
    /// configured default (~200m) when omitted.
    buffer: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct ParkingSummaryData {
    pub summary: ParkingSummary,
    /// Plain-text description consumed by the rulebook Q&A collaborator.
    pub prompt: String,
}

pub(super) async fn collect_route(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<RouteParkingRequest>,
) -> Result<Json<ApiResponse<Vec<ParkingRecord>>>, ApiError> {
    let records = run_pipeline(&state, &req_id, &body).await?;
    Ok(Json(ApiResponse {
        data: records,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn summarize_route(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<RouteParkingRequest>,
) -> Result<Json<ApiResponse<ParkingSummaryData>>, ApiError> {
    let records = run_pipeline(&state, &req_id, &body).await?;
    Ok(Json(ApiResponse {
        data: ParkingSummaryData {
            summary: summarize_parking(&records),
            prompt: parking_prompt(&records),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

async fn run_pipeline(
    state: &AppState,
    req_id: &RequestId,
    body: &RouteParkingRequest,
) -> Result<Vec<ParkingRecord>, ApiError> {
    let buffer = body.buffer.unwrap_or(state.config.default_buffer_degrees);
    collect_route_parking(&state.client, &body.route, buffer)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))
}

fn map_pipeline_error(request_id: String, error: &OverpassError) -> ApiError {
    match error {
        OverpassError::InvalidRoute { reason } => {
            ApiError::new(request_id, "validation_error", reason.as_str())
        }
        other => {
            // The pipeline absorbs per-point failures itself; anything that
            // still propagates is unexpected.
            tracing::error!(error = %other, "route parking collection failed");
            ApiError::new(
                request_id,
                "internal_error",
                "route parking collection failed",
            )
        }
    }
}
