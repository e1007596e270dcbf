//! Event transport trait definition.

use crate::error::DispatchError;
use async_trait::async_trait;

/// Raw reply from the ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 and 201 are the only statuses the ingestion endpoint uses for
    /// a stored event.
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

/// Trait for delivering serialized events to an external system.
///
/// Implementations must bound every call by a timeout.
#[async_trait]
pub trait SignalTransport: Send + Sync {
    /// POST a JSON payload and return the raw response.
    async fn post_json(&self, payload: &serde_json::Value)
        -> Result<TransportResponse, DispatchError>;

    /// Destination description used in logs.
    fn endpoint(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_statuses() {
        assert!(TransportResponse::new(200, "").is_accepted());
        assert!(TransportResponse::new(201, "{}").is_accepted());
        assert!(!TransportResponse::new(202, "").is_accepted());
        assert!(!TransportResponse::new(500, "oops").is_accepted());
    }
}
