//! Image upload flow for the projects manager.
//!
//! Uploads go straight to the bucket under a timestamp-qualified name; the
//! returned public URL is appended to the draft's comma-separated image
//! list so it shows up in the form immediately.

use crate::admin::application::ports::outgoing::notifier::Notifier;
use crate::content::application::domain::drafts::ProjectDraft;
use crate::content::application::ports::outgoing::image_store::{unique_object_name, ImageStore};

pub struct ImageUploader<S, N>
where
    S: ImageStore,
    N: Notifier,
{
    store: S,
    notifier: N,
    uploading: bool,
}

impl<S, N> ImageUploader<S, N>
where
    S: ImageStore,
    N: Notifier,
{
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            uploading: false,
        }
    }

    /// Busy indicator for the form while an upload is in flight.
    pub fn uploading(&self) -> bool {
        self.uploading
    }

    pub async fn attach_to_project(
        &mut self,
        draft: &mut ProjectDraft,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) {
        self.uploading = true;

        let object_name = unique_object_name(file_name);
        match self.store.upload(&object_name, bytes, content_type).await {
            Ok(public_url) => {
                if draft.image_urls.trim().is_empty() {
                    draft.image_urls = public_url;
                } else {
                    draft.image_urls = format!("{}, {}", draft.image_urls, public_url);
                }
                self.notifier.success("Image uploaded!");
            }
            Err(e) => self.notifier.error(&format!("Upload failed: {e}")),
        }

        self.uploading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::content::application::ports::outgoing::image_store::UploadError;

    #[derive(Clone, Default)]
    struct MockImageStore {
        uploaded: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    #[async_trait]
    impl ImageStore for MockImageStore {
        async fn upload(
            &self,
            object_name: &str,
            _bytes: Vec<u8>,
            _content_type: &str,
        ) -> Result<String, UploadError> {
            if self.fail {
                return Err(UploadError::Rejected("bucket quota exceeded".to_string()));
            }
            self.uploaded.lock().unwrap().push(object_name.to_string());
            Ok(format!("https://cdn.example.com/{object_name}"))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingNotifier {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.events.lock().unwrap().push(format!("success: {message}"));
        }

        fn error(&self, message: &str) {
            self.events.lock().unwrap().push(format!("error: {message}"));
        }
    }

    #[tokio::test]
    async fn test_first_image_replaces_empty_list() {
        let notifier = RecordingNotifier::default();
        let mut uploader = ImageUploader::new(MockImageStore::default(), notifier.clone());
        let mut draft = ProjectDraft::default();

        uploader
            .attach_to_project(&mut draft, "a.png", vec![1, 2, 3], "image/png")
            .await;

        assert!(draft.image_urls.starts_with("https://cdn.example.com/"));
        assert!(draft.image_urls.ends_with("-a.png"));
        assert!(!draft.image_urls.contains(','));
        assert_eq!(notifier.events(), vec!["success: Image uploaded!".to_string()]);
        assert!(!uploader.uploading());
    }

    #[tokio::test]
    async fn test_further_images_are_comma_appended() {
        let mut uploader =
            ImageUploader::new(MockImageStore::default(), RecordingNotifier::default());
        let mut draft = ProjectDraft {
            image_urls: "https://cdn.example.com/old.png".to_string(),
            ..ProjectDraft::default()
        };

        uploader
            .attach_to_project(&mut draft, "new.png", vec![0], "image/png")
            .await;

        assert!(draft
            .image_urls
            .starts_with("https://cdn.example.com/old.png, https://cdn.example.com/"));
    }

    #[tokio::test]
    async fn test_failed_upload_leaves_draft_unchanged() {
        let store = MockImageStore {
            fail: true,
            ..MockImageStore::default()
        };
        let notifier = RecordingNotifier::default();
        let mut uploader = ImageUploader::new(store, notifier.clone());
        let mut draft = ProjectDraft::default();

        uploader
            .attach_to_project(&mut draft, "a.png", vec![0], "image/png")
            .await;

        assert_eq!(draft.image_urls, "");
        assert_eq!(notifier.events().len(), 1);
        assert!(notifier.events()[0].starts_with("error: Upload failed: "));
    }

    #[tokio::test]
    async fn test_object_names_are_timestamp_qualified() {
        let store = MockImageStore::default();
        let mut uploader = ImageUploader::new(store.clone(), RecordingNotifier::default());
        let mut draft = ProjectDraft::default();

        uploader
            .attach_to_project(&mut draft, "shot.png", vec![0], "image/png")
            .await;

        let uploaded = store.uploaded.lock().unwrap();
        assert!(uploaded[0].ends_with("-shot.png"));
        assert_ne!(uploaded[0], "shot.png");
    }
}
