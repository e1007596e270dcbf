//! Signal delivery with typed outcomes.

use crate::http::HttpTransport;
use indicsig_core::{DispatchError, DispatchOutcome, ParsedSignal, SignalTransport};
use indicsig_parser::SignalTextParser;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info, warn};

/// External id reported when the endpoint accepted the event but named none.
pub const UNKNOWN_ID: &str = "unknown";

/// Failure detail for an absent signal.
pub const NO_SIGNAL_DETAIL: &str = "no signal to dispatch";

/// Longest slice of an error body carried into the outcome.
const ERROR_BODY_LIMIT: usize = 200;

/// Delivers parsed signals through a [`SignalTransport`].
///
/// Never panics and never returns an error: every path ends in a
/// [`DispatchOutcome`].
pub struct EventDispatcher<T: SignalTransport = HttpTransport> {
    transport: T,
    parser: SignalTextParser,
}

impl EventDispatcher<HttpTransport> {
    /// HTTP dispatcher for `endpoint`, tagging relayed messages with `source`.
    pub fn http(
        endpoint: impl Into<String>,
        timeout: Duration,
        source: impl Into<String>,
    ) -> Result<Self, DispatchError> {
        let transport = HttpTransport::new(endpoint, timeout)?;
        Ok(Self::new(transport).with_parser(SignalTextParser::new(source)))
    }
}

impl<T: SignalTransport> EventDispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            parser: SignalTextParser::default(),
        }
    }

    /// Replace the parser used by [`relay`](Self::relay).
    pub fn with_parser(mut self, parser: SignalTextParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one signal.
    ///
    /// `None` fails immediately without touching the network. A 200/201
    /// reply succeeds with the id found in the body (`signalId`, then `id`,
    /// then `signal.id`), or [`UNKNOWN_ID`]; a reply body that is not JSON
    /// is a failure. Any other status carries the status code and the start
    /// of the body.
    pub async fn dispatch(&self, signal: Option<&ParsedSignal>) -> DispatchOutcome {
        let Some(signal) = signal else {
            warn!("No signal to dispatch");
            return DispatchOutcome::failed(NO_SIGNAL_DETAIL);
        };

        info!(
            symbol = %signal.symbol,
            signal_type = %signal.signal_type,
            price = signal.price,
            endpoint = self.transport.endpoint(),
            "Dispatching signal"
        );

        let payload = match serde_json::to_value(signal) {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "Could not serialize signal");
                return DispatchOutcome::failed(format!("Could not serialize signal: {e}"));
            }
        };

        match self.transport.post_json(&payload).await {
            Ok(resp) if resp.is_accepted() => match external_id(&resp.body) {
                Ok(external_id) => {
                    info!(symbol = %signal.symbol, %external_id, "Signal delivered");
                    DispatchOutcome::delivered(external_id)
                }
                Err(e) => {
                    error!(symbol = %signal.symbol, error = %e, "Accepted reply is not JSON");
                    DispatchOutcome::failed(format!("Invalid response body: {e}"))
                }
            },
            Ok(resp) => {
                let body: String = resp.body.chars().take(ERROR_BODY_LIMIT).collect();
                let detail = format!("HTTP {}: {}", resp.status, body);
                error!(symbol = %signal.symbol, %detail, "Signal rejected");
                DispatchOutcome::failed(detail)
            }
            Err(e) => {
                error!(symbol = %signal.symbol, error = %e, "Signal delivery failed");
                DispatchOutcome::failed(e.to_string())
            }
        }
    }

    /// Parse an alert message and send the result.
    pub async fn relay(&self, message: &str) -> DispatchOutcome {
        let signal = self.parser.try_parse(message);
        self.dispatch(signal.as_ref()).await
    }
}

/// Pull the stored event's id out of an accepted reply.
///
/// A JSON reply without a recognised id field gives [`UNKNOWN_ID`].
fn external_id(body: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;

    let id = id_text(value.get("signalId"))
        .or_else(|| id_text(value.get("id")))
        .or_else(|| id_text(value.get("signal").and_then(|s| s.get("id"))));

    Ok(id.unwrap_or_else(|| {
        warn!("Accepted reply names no signal id");
        UNKNOWN_ID.to_string()
    }))
}

fn id_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use indicsig_core::{SignalMetadata, SignalType, TransportResponse};
    use std::sync::Mutex;

    enum Reply {
        Status(u16, String),
        Refused,
    }

    struct MockTransport {
        reply: Reply,
        sent: Mutex<Vec<Value>>,
    }

    impl MockTransport {
        fn replying(status: u16, body: impl Into<String>) -> Self {
            Self {
                reply: Reply::Status(status, body.into()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn refusing() -> Self {
            Self {
                reply: Reply::Refused,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SignalTransport for MockTransport {
        async fn post_json(&self, payload: &Value) -> Result<TransportResponse, DispatchError> {
            self.sent.lock().unwrap().push(payload.clone());
            match &self.reply {
                Reply::Status(status, body) => Ok(TransportResponse::new(*status, body.clone())),
                Reply::Refused => Err(DispatchError::Connection("connection refused".into())),
            }
        }

        fn endpoint(&self) -> &str {
            "mock://signals"
        }
    }

    fn signal() -> ParsedSignal {
        ParsedSignal {
            symbol: "ETHUSDT".to_string(),
            signal_type: SignalType::Long,
            price: 3961.638,
            timestamp_millis: 1_709_294_400_000,
            metadata: SignalMetadata {
                source: "indicsigs_desktop".to_string(),
                indicator: "İndicPro".to_string(),
                timestamp: "2024-03-01T12:00:00+00:00".to_string(),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn test_absent_signal_skips_network() {
        let dispatcher = EventDispatcher::new(MockTransport::replying(200, "{}"));
        let outcome = dispatcher.dispatch(None).await;

        assert_eq!(outcome, DispatchOutcome::failed(NO_SIGNAL_DETAIL));
        assert_eq!(dispatcher.transport().calls(), 0);
    }

    #[tokio::test]
    async fn test_accepted_with_id() {
        let dispatcher = EventDispatcher::new(MockTransport::replying(200, r#"{"id":"abc"}"#));
        let outcome = dispatcher.dispatch(Some(&signal())).await;

        assert_eq!(outcome, DispatchOutcome::delivered("abc"));
        let sent = dispatcher.transport().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["symbol"], "ETHUSDT");
        assert_eq!(sent[0]["signalType"], "LONG");
    }

    #[tokio::test]
    async fn test_id_lookup_order() {
        let cases = [
            (r#"{"signalId":"s1","id":"i1","signal":{"id":"n1"}}"#, "s1"),
            (r#"{"id":42,"signal":{"id":"n1"}}"#, "42"),
            (r#"{"success":true,"signal":{"id":"n1"}}"#, "n1"),
            (r#"{"success":true}"#, UNKNOWN_ID),
            (r#"{"id":null}"#, UNKNOWN_ID),
        ];

        for (body, expected) in cases {
            let dispatcher = EventDispatcher::new(MockTransport::replying(201, body));
            let outcome = dispatcher.dispatch(Some(&signal())).await;
            assert_eq!(outcome, DispatchOutcome::delivered(expected), "body {body}");
        }
    }

    #[tokio::test]
    async fn test_unparseable_accepted_body() {
        let dispatcher =
            EventDispatcher::new(MockTransport::replying(200, "<html>Bad Gateway</html>"));
        let outcome = dispatcher.dispatch(Some(&signal())).await;

        assert!(!outcome.success);
        assert!(outcome.external_id.is_none());
        let detail = outcome.error_detail.unwrap();
        assert!(detail.starts_with("Invalid response body: "), "got {detail}");
    }

    #[tokio::test]
    async fn test_rejected_status() {
        let dispatcher = EventDispatcher::new(MockTransport::replying(500, "internal error"));
        let outcome = dispatcher.dispatch(Some(&signal())).await;

        assert!(!outcome.success);
        assert_eq!(outcome.error_detail.as_deref(), Some("HTTP 500: internal error"));
    }

    #[tokio::test]
    async fn test_rejected_body_is_truncated() {
        let dispatcher = EventDispatcher::new(MockTransport::replying(422, "x".repeat(500)));
        let outcome = dispatcher.dispatch(Some(&signal())).await;

        let detail = outcome.error_detail.unwrap();
        assert_eq!(detail, format!("HTTP 422: {}", "x".repeat(200)));
    }

    #[tokio::test]
    async fn test_transport_error_is_folded() {
        let dispatcher = EventDispatcher::new(MockTransport::refusing());
        let outcome = dispatcher.dispatch(Some(&signal())).await;

        assert!(!outcome.success);
        assert!(outcome.error_detail.unwrap().contains("connection refused"));
        assert_eq!(dispatcher.transport().calls(), 1);
    }

    #[tokio::test]
    async fn test_relay_parses_then_sends() {
        let dispatcher = EventDispatcher::new(MockTransport::replying(201, r#"{"signalId":"x"}"#))
            .with_parser(SignalTextParser::new("relay-test"));

        let outcome = dispatcher
            .relay("💰 Coin: btcusdt\n💵 Fiyat: 64,250.5 USDT")
            .await;
        assert_eq!(outcome, DispatchOutcome::delivered("x"));

        let sent = dispatcher.transport().sent.lock().unwrap();
        assert_eq!(sent[0]["symbol"], "BTCUSDT");
        assert_eq!(sent[0]["price"], 64250.5);
        assert_eq!(sent[0]["metadata"]["source"], "relay-test");
    }

    #[tokio::test]
    async fn test_relay_unparseable_message() {
        let dispatcher = EventDispatcher::new(MockTransport::replying(200, "{}"));
        let outcome = dispatcher.relay("hello").await;

        assert_eq!(outcome, DispatchOutcome::failed(NO_SIGNAL_DETAIL));
        assert_eq!(dispatcher.transport().calls(), 0);
    }

    #[tokio::test]
    async fn test_http_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/signals")
            .match_body(mockito::Matcher::PartialJson(
                serde_json::json!({"symbol": "ETHUSDT", "signalType": "LONG"}),
            ))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"signal":{"id":"sig_77"}}"#)
            .create_async()
            .await;

        let dispatcher = EventDispatcher::http(
            format!("{}/api/signals", server.url()),
            Duration::from_secs(5),
            "indicsigs_desktop",
        )
        .unwrap();
        let outcome = dispatcher.dispatch(Some(&signal())).await;

        mock.assert_async().await;
        assert_eq!(outcome, DispatchOutcome::delivered("sig_77"));
    }

    #[tokio::test]
    async fn test_http_unreachable_endpoint() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let dispatcher = EventDispatcher::http(
            format!("http://127.0.0.1:{port}/api/signals"),
            Duration::from_secs(2),
            "indicsigs_desktop",
        )
        .unwrap();

        let outcome = dispatcher.dispatch(Some(&signal())).await;
        assert!(!outcome.success);
        assert!(outcome.external_id.is_none());
    }
}
