use axum::{Extension, Json};
use curbside_core::roads::{
    describe_network, network_report, summarize_network, RoadNetwork, RoadReport, RouteSummary,
};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct RoadPromptData {
    /// Plain-text description consumed by the rulebook Q&A collaborator.
    pub prompt: String,
}

pub(super) async fn report(
    Extension(req_id): Extension<RequestId>,
    Json(network): Json<RoadNetwork>,
) -> Json<ApiResponse<RoadReport>> {
    Json(ApiResponse {
        data: network_report(&network),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn prompt(
    Extension(req_id): Extension<RequestId>,
    Json(network): Json<RoadNetwork>,
) -> Json<ApiResponse<RoadPromptData>> {
    Json(ApiResponse {
        data: RoadPromptData {
            prompt: describe_network(&network),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn summary(
    Extension(req_id): Extension<RequestId>,
    Json(network): Json<RoadNetwork>,
) -> Json<ApiResponse<RouteSummary>> {
    Json(ApiResponse {
        data: summarize_network(&network),
        meta: ResponseMeta::new(req_id.0),
    })
}
