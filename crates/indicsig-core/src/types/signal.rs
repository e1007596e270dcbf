//! Structured alert events recovered from alert text.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Directional classification of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    /// Bullish
    Long,
    /// Bearish
    Short,
    /// Undirected
    #[default]
    Alert,
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalType::Long => "LONG",
            SignalType::Short => "SHORT",
            SignalType::Alert => "ALERT",
        };
        write!(f, "{}", s)
    }
}

/// Per-timeframe indicator readings in document order.
///
/// Inserting a label that already exists replaces its value in place,
/// so the first occurrence keeps its position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeframeScores {
    entries: Vec<(String, f64)>,
}

impl TimeframeScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: f64) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }
}

impl Serialize for TimeframeScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Optional context attached to a parsed alert.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SignalMetadata {
    /// Originating system tag
    pub source: String,
    /// Indicator name as written in the alert
    pub indicator: String,
    /// Capture time, ISO-8601
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(rename = "change_24h", skip_serializing_if = "Option::is_none")]
    pub change_24h: Option<f64>,
    #[serde(skip_serializing_if = "TimeframeScores::is_empty")]
    pub timeframes: TimeframeScores,
}

/// An alert message turned back into a structured event.
///
/// Serializes to the ingestion schema: `symbol`, `signalType`, `price`,
/// `timestamp` (epoch millis) and `metadata`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSignal {
    pub symbol: String,
    pub signal_type: SignalType,
    pub price: f64,
    #[serde(rename = "timestamp")]
    pub timestamp_millis: i64,
    pub metadata: SignalMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timeframe_scores_keep_first_position() {
        let mut scores = TimeframeScores::new();
        scores.insert("15m", 78.16);
        scores.insert("5m", 86.71);
        scores.insert("15m", 70.0);

        let entries: Vec<_> = scores.iter().collect();
        assert_eq!(entries, vec![("15m", 70.0), ("5m", 86.71)]);
        assert_eq!(scores.get("5m"), Some(86.71));
        assert_eq!(scores.get("1h"), None);
    }

    #[test]
    fn test_timeframe_scores_serialize_in_order() {
        let mut scores = TimeframeScores::new();
        scores.insert("5m", 1.0);
        scores.insert("1m", 2.0);

        assert_eq!(serde_json::to_string(&scores).unwrap(), r#"{"5m":1.0,"1m":2.0}"#);
    }

    #[test]
    fn test_signal_wire_shape() {
        let signal = ParsedSignal {
            symbol: "ETHUSDT".to_string(),
            signal_type: SignalType::Long,
            price: 3961.638,
            timestamp_millis: 1_700_000_000_000,
            metadata: SignalMetadata {
                source: "indicsigs_desktop".to_string(),
                indicator: "İndicPro".to_string(),
                timestamp: "2023-11-14T22:13:20+00:00".to_string(),
                condition: None,
                target: Some(75.6),
                change_24h: Some(3.02),
                timeframes: TimeframeScores::new(),
            },
        };

        let value = serde_json::to_value(&signal).unwrap();
        assert_eq!(
            value,
            json!({
                "symbol": "ETHUSDT",
                "signalType": "LONG",
                "price": 3961.638,
                "timestamp": 1_700_000_000_000_i64,
                "metadata": {
                    "source": "indicsigs_desktop",
                    "indicator": "İndicPro",
                    "timestamp": "2023-11-14T22:13:20+00:00",
                    "target": 75.6,
                    "change_24h": 3.02
                }
            })
        );
    }

    #[test]
    fn test_signal_type_default_and_display() {
        assert_eq!(SignalType::default(), SignalType::Alert);
        assert_eq!(SignalType::Short.to_string(), "SHORT");
    }
}
