use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};

use business::domain::product::value_objects::ImageRef;
use business::domain::sync::services::ImageEncoderService;

/// Reads local image files and base64 encodes their bytes as stored.
pub struct FileImageEncoder;

impl FileImageEncoder {
    fn local_path(reference: &str) -> &str {
        reference.strip_prefix("file://").unwrap_or(reference)
    }
}

#[async_trait]
impl ImageEncoderService for FileImageEncoder {
    async fn encode(&self, image: &ImageRef) -> String {
        let ImageRef::Local(reference) = image else {
            return String::new();
        };

        match tokio::fs::read(Self::local_path(reference)).await {
            Ok(bytes) => STANDARD.encode(bytes),
            Err(e) => {
                tracing::warn!("Image {} not encoded: {}", reference, e);
                String::new()
            }
        }
    }
}
