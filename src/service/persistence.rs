//! Persistence service backed by the portal's HTTP API

use crate::error::{Error, Result};
use crate::service::PersistenceService;
use crate::types::{Issue, Submission, SubmissionsResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Persistence service using reqwest
pub struct HttpPersistenceService {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct SubmissionPayload<'a> {
    submission: &'a Submission,
}

#[derive(Deserialize)]
struct IssuesResponse {
    #[serde(default)]
    data: Vec<Issue>,
}

impl HttpPersistenceService {
    /// Create a service talking to the API rooted at `base_url`
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

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_submission(&self, path: &str, submission: &Submission) -> Result<()> {
        let url = self.api_url(path);
        debug!(%url, title = %submission.title, "posting submission");

        self.client
            .post(&url)
            .json(&SubmissionPayload { submission })
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PersistenceService for HttpPersistenceService {
    async fn submissions_by_user(&self, user_id: &str) -> Result<SubmissionsResponse> {
        let url = self.api_url("/submissions/get-by-user");
        debug!(%url, user_id, "fetching submissions");

        let response: SubmissionsResponse = self
            .client
            .get(&url)
            .query(&[("id", user_id)])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(response)
    }

    async fn add_submission(&self, submission: &Submission) -> Result<()> {
        self.post_submission("/submissions/add", submission).await
    }

    async fn update_submission(&self, submission: &Submission) -> Result<()> {
        self.post_submission("/submissions/update", submission).await
    }

    async fn issues(&self) -> Result<Vec<Issue>> {
        let url = self.api_url("/issues/get");
        debug!(%url, "fetching issues");

        let response: IssuesResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(response.data)
    }
}
