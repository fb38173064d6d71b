use async_trait::async_trait;

/// Errors that can occur while uploading an image to the bucket.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadError {
    #[error("Network problem occurred: {0}")]
    Network(String),

    #[error("{0}")]
    Rejected(String),
}

/// Port for the object-storage bucket holding project images.
///
/// Returns the public URL of the stored object. Callers must pass a
/// pre-qualified unique object name (see [`unique_object_name`]) so
/// repeated uploads of the same file never collide.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn upload(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, UploadError>;
}

/// Prefixes the original file name with a millisecond timestamp.
pub fn unique_object_name(file_name: &str) -> String {
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_object_name_keeps_original_name() {
        let name = unique_object_name("screenshot.png");
        assert!(name.ends_with("-screenshot.png"));

        let prefix = name.strip_suffix("-screenshot.png").unwrap();
        assert!(prefix.parse::<i64>().is_ok());
    }
}
