//! HTTP transport for the ingestion endpoint.

use async_trait::async_trait;
use indicsig_core::{DispatchError, SignalTransport, TransportResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// POSTs JSON payloads to a fixed URL with a bounded timeout.
pub struct HttpTransport {
    endpoint: String,
    timeout: Duration,
    client: Client,
}

impl HttpTransport {
    /// Create a transport for `endpoint`. Every request, including reading
    /// the response body, is cut off after `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DispatchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DispatchError::Client(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            timeout,
            client,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, err: reqwest::Error) -> DispatchError {
        if err.is_timeout() {
            DispatchError::Timeout(self.timeout)
        } else if err.is_connect() {
            DispatchError::Connection(err.to_string())
        } else {
            DispatchError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl SignalTransport for HttpTransport {
    async fn post_json(
        &self,
        payload: &serde_json::Value,
    ) -> Result<TransportResponse, DispatchError> {
        debug!(endpoint = %self.endpoint, "POST signal");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| self.classify(e))?;

        Ok(TransportResponse { status, body })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
