use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::ThumbnailResult,
    models::ThumbnailOutcome,
    value_objects::InvocationId,
};

/// How an invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationStatus {
    Generated,
    Skipped,
    Failed,
}

/// DTO returned for every storage event, successful or not
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationResponseDto {
    pub invocation_id: String,
    pub status: InvocationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl InvocationResponseDto {
    pub fn from_result(
        invocation_id: &InvocationId,
        result: &ThumbnailResult<ThumbnailOutcome>,
    ) -> Self {
        let mut dto = InvocationResponseDto {
            invocation_id: invocation_id.to_string(),
            status: InvocationStatus::Failed,
            thumbnail: None,
            reason: None,
            error_kind: None,
            message: None,
            timestamp: Utc::now(),
        };

        match result {
            Ok(ThumbnailOutcome::Generated(generated)) => {
                dto.status = InvocationStatus::Generated;
                dto.thumbnail = Some(generated.thumbnail.to_string());
            }
            Ok(ThumbnailOutcome::Skipped(reason)) => {
                dto.status = InvocationStatus::Skipped;
                dto.reason = Some(reason.to_string());
            }
            Err(e) => {
                dto.error_kind = Some(e.kind().to_string());
                dto.message = Some(e.to_string());
            }
        }

        dto
    }
}

/// DTO for the health probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}
