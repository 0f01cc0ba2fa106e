//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::models::{
    DebutData, EventDetails, FaqItem, ProgramEntry, Rsvp, RsvpCreate, TransportTip, Traditions,
};
use shared::response::{RsvpCreated, RsvpRejected};

/// HTTP client for making network requests to the invitation site API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(ClientError::Server(text));
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Static Content API ==========

    /// Get event details
    pub async fn event(&self) -> ClientResult<EventDetails> {
        self.get("/api/event").await
    }

    /// Get the traditions participant lists
    pub async fn traditions(&self) -> ClientResult<Traditions> {
        self.get("/api/traditions").await
    }

    /// Get FAQ entries
    pub async fn faq(&self) -> ClientResult<Vec<FaqItem>> {
        self.get("/api/faq").await
    }

    /// Get transportation tips
    pub async fn transport(&self) -> ClientResult<Vec<TransportTip>> {
        self.get("/api/transport").await
    }

    /// Get the program timeline
    pub async fn program(&self) -> ClientResult<Vec<ProgramEntry>> {
        self.get("/api/program").await
    }

    /// Get the aggregate of all static content
    pub async fn debut_data(&self) -> ClientResult<DebutData> {
        self.get("/api/debut-data").await
    }

    // ========== RSVP API ==========

    /// Submit an RSVP and return the persisted record
    ///
    /// A 400 comes back as [`ClientError::Validation`] with the server's
    /// field errors; a 500 as [`ClientError::Server`] with its generic
    /// message.
    pub async fn submit_rsvp(&self, submission: &RsvpCreate) -> ClientResult<Rsvp> {
        let response = self
            .client
            .post(self.url("/api/rsvp"))
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::CREATED => {
                let created: RsvpCreated = response.json().await?;
                if !created.success {
                    return Err(ClientError::InvalidResponse(
                        "created response without success flag".to_string(),
                    ));
                }
                Ok(created.rsvp)
            }
            StatusCode::BAD_REQUEST => {
                let rejected: RsvpRejected = response.json().await?;
                Err(ClientError::Validation(rejected.details.unwrap_or_default()))
            }
            _ => {
                let message = response
                    .json::<RsvpRejected>()
                    .await
                    .map(|r| r.error)
                    .unwrap_or_else(|_| format!("unexpected status {status}"));
                Err(ClientError::Server(message))
            }
        }
    }
}
