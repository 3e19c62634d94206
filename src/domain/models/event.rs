use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::InvocationId;

/// Object-finalize notification from the storage service.
///
/// Only `bucket` and `name` drive the pipeline; the remaining fields of the object
/// resource are carried for logging. Counters arrive as strings because the storage
/// JSON API encodes 64-bit integers that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageObjectEvent {
    pub bucket: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metageneration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl StorageObjectEvent {
    /// Minimal event carrying only the routing fields
    pub fn new(bucket: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            name: name.into(),
            id: None,
            content_type: None,
            size: None,
            generation: None,
            metageneration: None,
            time_created: None,
            updated: None,
        }
    }
}

/// CloudEvents structured-mode wrapper around an object resource
#[derive(Debug, Clone, Deserialize)]
pub struct CloudEvent {
    pub id: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub specversion: Option<String>,
    pub data: StorageObjectEvent,
}

/// Body accepted by the trigger endpoints: either a bare object resource or a CloudEvent
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EventEnvelope {
    CloudEvent(CloudEvent),
    Object(StorageObjectEvent),
}

impl EventEnvelope {
    /// Split into the invocation identifier and the object event
    pub fn into_invocation(self) -> (InvocationId, StorageObjectEvent) {
        match self {
            EventEnvelope::CloudEvent(event) => {
                (InvocationId::from_event_id(Some(&event.id)), event.data)
            }
            EventEnvelope::Object(object) => {
                (InvocationId::from_event_id(object.id.as_deref()), object)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_object_resource() {
        let body = json!({
            "kind": "storage#object",
            "id": "uploads/reports/q3.pdf/1700000000000000",
            "bucket": "uploads",
            "name": "reports/q3.pdf",
            "contentType": "application/pdf",
            "size": "48213",
            "generation": "1700000000000000",
            "metageneration": "1",
            "timeCreated": "2024-05-01T10:00:00.000Z",
            "updated": "2024-05-01T10:00:00.000Z"
        });

        let envelope: EventEnvelope = serde_json::from_value(body).unwrap();
        let (invocation_id, event) = envelope.into_invocation();

        assert_eq!(event.bucket, "uploads");
        assert_eq!(event.name, "reports/q3.pdf");
        assert_eq!(event.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(event.size.as_deref(), Some("48213"));
        assert!(event.time_created.is_some());
        // Object ids contain '/', so a fresh id is generated instead
        assert!(uuid::Uuid::parse_str(invocation_id.as_str()).is_ok());
    }

    #[test]
    fn test_deserialize_cloud_event() {
        let body = json!({
            "specversion": "1.0",
            "id": "8431234523",
            "source": "//storage.googleapis.com/projects/_/buckets/uploads",
            "type": "google.cloud.storage.object.v1.finalized",
            "data": { "bucket": "uploads", "name": "a/b.pdf" }
        });

        let envelope: EventEnvelope = serde_json::from_value(body).unwrap();
        assert!(matches!(envelope, EventEnvelope::CloudEvent(_)));

        let (invocation_id, event) = envelope.into_invocation();
        assert_eq!(invocation_id.as_str(), "8431234523");
        assert_eq!(event, StorageObjectEvent::new("uploads", "a/b.pdf"));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_value::<EventEnvelope>(json!({ "bucket": "uploads" }));
        assert!(result.is_err());
    }
}
