use async_trait::async_trait;

use crate::content::adapter::outgoing::supabase::config::SupabaseConfig;
use crate::content::application::ports::outgoing::image_store::{ImageStore, UploadError};

/// Supabase Storage adapter for the image store port.
#[derive(Clone)]
pub struct SupabaseStorage {
    http: reqwest::Client,
    base: String,
    api_key: String,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.url.clone(),
            api_key: config.api_key.clone(),
            bucket: config.bucket.clone(),
        }
    }

    fn object_url(&self, object_name: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base, self.bucket, object_name)
    }

    /// Buckets are public-read; the URL is derivable without a second call.
    fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base, self.bucket, object_name
        )
    }
}

#[async_trait]
impl ImageStore for SupabaseStorage {
    async fn upload(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, UploadError> {
        let response = self
            .http
            .post(self.object_url(object_name))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected(format!("{status}: {body}")));
        }

        Ok(self.public_url(object_name))
    }
}
