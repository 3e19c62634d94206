use axum::{extract::State, http::StatusCode, Json};

use crate::{
    adapters::inbound::http::{
        dto::{HealthDto, InvocationResponseDto},
        router::AppState,
    },
    domain::models::EventEnvelope,
};

/// Handle a storage notification.
///
/// Always answers 200: a failed invocation is logged and reported in the body, never
/// surfaced as an HTTP error that would make the platform redeliver the event.
pub async fn handle_storage_event(
    State(app_state): State<AppState>,
    Json(envelope): Json<EventEnvelope>,
) -> (StatusCode, Json<InvocationResponseDto>) {
    let (invocation_id, event) = envelope.into_invocation();

    let result = app_state
        .thumbnail_service
        .process_event(&event, &invocation_id)
        .await;

    (
        StatusCode::OK,
        Json(InvocationResponseDto::from_result(&invocation_id, &result)),
    )
}

/// Liveness probe
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}
