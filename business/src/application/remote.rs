use crate::domain::logger::Logger;
use crate::domain::product::value_objects::ImageRef;
use crate::domain::sync::errors::SyncError;
use crate::domain::sync::model::SyncAck;
use crate::domain::sync::services::ImageEncoderService;

/// Base64 payload for the remote `image` field; empty when there is no image.
pub(crate) async fn encode_image(
    encoder: &dyn ImageEncoderService,
    image: Option<&ImageRef>,
) -> String {
    match image {
        Some(image) => encoder.encode(image).await,
        None => String::new(),
    }
}

/// Logs the outcome of a best-effort remote push. Failures are swallowed.
pub(crate) fn log_push_outcome(
    logger: &dyn Logger,
    action: &str,
    outcome: Result<SyncAck, SyncError>,
) {
    match outcome {
        Ok(ack) => logger.debug(&format!("Remote {} acknowledged: {}", action, ack.message)),
        Err(SyncError::Disabled) => {
            logger.debug(&format!("Remote sync disabled, skipped {}", action))
        }
        Err(e) => logger.warn(&format!("Remote {} failed: {}", action, e)),
    }
}
