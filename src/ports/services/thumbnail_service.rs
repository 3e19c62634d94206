use async_trait::async_trait;
use tracing::{error, info, info_span, Instrument};

use crate::domain::{
    errors::ThumbnailResult,
    models::{StorageObjectEvent, ThumbnailOutcome},
    value_objects::InvocationId,
};

/// Port for the thumbnail generator
#[async_trait]
pub trait ThumbnailService: Send + Sync + 'static {
    /// Run the pipeline for one event and report exactly how it ended
    async fn handle_event(
        &self,
        event: &StorageObjectEvent,
        invocation_id: &InvocationId,
    ) -> ThumbnailResult<ThumbnailOutcome>;

    /// Function entry point: like [`handle_event`](Self::handle_event), but every outcome
    /// is logged here, errors exactly once. Trigger adapters report the returned value and
    /// never fail the invocation outward.
    async fn process_event(
        &self,
        event: &StorageObjectEvent,
        invocation_id: &InvocationId,
    ) -> ThumbnailResult<ThumbnailOutcome> {
        let span = info_span!(
            "thumbnail",
            bucket = %event.bucket,
            object = %event.name,
            invocation_id = %invocation_id
        );

        async move {
            let result = self.handle_event(event, invocation_id).await;

            match &result {
                Ok(ThumbnailOutcome::Generated(generated)) => {
                    info!(thumbnail = %generated.thumbnail, "Thumbnail generated");
                }
                Ok(ThumbnailOutcome::Skipped(reason)) => {
                    info!(%reason, "Skipping object");
                }
                Err(e) => {
                    error!(error_kind = e.kind(), error = %e, "Thumbnail generation failed");
                }
            }

            result
        }
        .instrument(span)
        .await
    }
}
