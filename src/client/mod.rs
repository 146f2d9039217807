//! Client for the events/payments backend.
//!
//! Owns transport details only: request construction, timeouts, and mapping
//! non-success responses to typed errors carrying the server's message.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{Config, ACTIVE_EVENT_PATH, CHECKOUT_PATH, SESSION_STATUS_PATH};
use crate::models::{CheckoutRequest, CheckoutSession, EventData, SessionStatus};
use crate::utils::CheckoutError;

/// Error body shape the backend uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, CheckoutError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Fetches the currently active event with its ticket tiers.
    pub async fn fetch_active_event(&self) -> Result<EventData, CheckoutError> {
        let url = format!("{}{}", self.base_url, ACTIVE_EVENT_PATH);
        tracing::debug!(%url, "Fetching active event");
        let response = self.client.get(&url).send().await?;
        decode(response, "Failed to fetch event data").await
    }

    /// Creates a payment session; the returned URL is the externally hosted
    /// checkout page the buyer must be sent to.
    pub async fn create_checkout(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        let url = format!("{}{}", self.base_url, CHECKOUT_PATH);
        tracing::debug!(%url, ticket_id = %request.ticket_id, "Creating checkout session");
        let response = self.client.post(&url).json(request).send().await?;
        decode(response, "Failed to create checkout session").await
    }

    /// Polls the status of a checkout session by its identifier.
    pub async fn session_status(&self, session_id: &str) -> Result<SessionStatus, CheckoutError> {
        let url = format!("{}{}/{}", self.base_url, SESSION_STATUS_PATH, session_id);
        tracing::debug!(%url, "Fetching session status");
        let response = self.client.get(&url).send().await?;
        decode(response, "Failed to verify session").await
    }
}

async fn decode<T>(response: Response, fallback_message: &str) -> Result<T, CheckoutError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| fallback_message.to_string());
        return Err(CheckoutError::ApiError {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json::<T>().await?)
}
