//! Upload service backed by the storage upload backend

use crate::error::{Error, Result};
use crate::service::{UploadForm, UploadService};
use crate::types::UploadResult;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Upload service using reqwest multipart requests
pub struct HttpUploadService {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct UploadResultsResponse {
    #[serde(default)]
    body: Vec<UploadResult>,
}

impl HttpUploadService {
    /// Create a service talking to the upload backend at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn upload_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn build_multipart(form: &UploadForm) -> Result<Form> {
    let mut multipart = Form::new().text("userId", form.user_id.clone());

    for (name, value) in &form.fields {
        multipart = multipart.text(name.clone(), value.clone());
    }

    // Each file part is preceded by its token so the backend can echo it back.
    for file in &form.files {
        if let Some(token) = &file.token {
            multipart = multipart.text("token", token.clone());
        }
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)?;
        multipart = multipart.part("file", part);
    }

    Ok(multipart)
}

#[async_trait]
impl UploadService for HttpUploadService {
    async fn upload(&self, form: &UploadForm) -> Result<()> {
        let url = self.upload_url("/update");
        debug!(%url, files = form.files.len(), "uploading files");

        self.client
            .post(&url)
            .multipart(build_multipart(form)?)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?;

        Ok(())
    }

    async fn upload_results(&self) -> Result<Vec<UploadResult>> {
        let url = self.upload_url("/upload");
        debug!(%url, "fetching upload results");

        let response: UploadResultsResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(response.body)
    }
}
