//! Result of handing an event to the ingestion endpoint.

use serde::Serialize;

/// Typed success/failure report from the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    pub success: bool,
    pub external_id: Option<String>,
    pub error_detail: Option<String>,
}

impl DispatchOutcome {
    /// Event stored; `external_id` is `"unknown"` when the reply named none.
    pub fn delivered(external_id: impl Into<String>) -> Self {
        Self {
            success: true,
            external_id: Some(external_id.into()),
            error_detail: None,
        }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            external_id: None,
            error_detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = DispatchOutcome::delivered("abc");
        assert!(ok.success);
        assert_eq!(ok.external_id.as_deref(), Some("abc"));
        assert!(ok.error_detail.is_none());

        let err = DispatchOutcome::failed("HTTP 500");
        assert!(!err.success);
        assert!(err.external_id.is_none());
        assert_eq!(err.error_detail.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&DispatchOutcome::delivered("x")).unwrap();
        assert_eq!(json, r#"{"success":true,"externalId":"x","errorDetail":null}"#);
    }
}
