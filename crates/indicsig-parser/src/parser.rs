//! Alert message to [`ParsedSignal`].

use crate::extract::{extract_timeframes, Field, RawFields};
use chrono::{DateTime, Utc};
use indicsig_core::{ParseFailure, ParsedSignal, SignalMetadata, SignalType};
use tracing::{debug, warn};

/// Source tag stamped on every parsed signal unless overridden.
pub const DEFAULT_SOURCE: &str = "indicsigs_desktop";

/// Indicator name used when the message has no indicator line.
pub const DEFAULT_INDICATOR: &str = "İndicPro";

const LONG_KEYWORDS: [&str; 2] = ["üstüne", "yukarı"];
const SHORT_KEYWORDS: [&str; 2] = ["altına", "aşağı"];

/// Classify an alert's direction.
///
/// The condition text is checked first ("crossed above/up" keywords give
/// `Long`, "crossed below/down" give `Short`). A literal `SHORT` or `LONG`
/// anywhere in the message then overrides it, `SHORT` winning when both
/// are present. Anything else stays `Alert`.
pub fn infer_signal_type(condition: Option<&str>, message: &str) -> SignalType {
    let from_condition = condition
        .map(str::to_lowercase)
        .map(|condition| {
            if LONG_KEYWORDS.iter().any(|k| condition.contains(k)) {
                SignalType::Long
            } else if SHORT_KEYWORDS.iter().any(|k| condition.contains(k)) {
                SignalType::Short
            } else {
                SignalType::Alert
            }
        })
        .unwrap_or_default();

    if message.contains("SHORT") {
        SignalType::Short
    } else if message.contains("LONG") {
        SignalType::Long
    } else {
        from_condition
    }
}

/// Turns formatted alert messages back into structured signals.
#[derive(Debug, Clone)]
pub struct SignalTextParser {
    source: String,
    default_indicator: String,
}

impl Default for SignalTextParser {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE)
    }
}

impl SignalTextParser {
    /// Create a parser that tags signals with `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            default_indicator: DEFAULT_INDICATOR.to_string(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse a message, stamping it with the current time.
    pub fn parse(&self, message: &str) -> Result<ParsedSignal, ParseFailure> {
        self.parse_at(message, Utc::now())
    }

    /// Parse a message captured at `captured_at`.
    pub fn parse_at(
        &self,
        message: &str,
        captured_at: DateTime<Utc>,
    ) -> Result<ParsedSignal, ParseFailure> {
        let fields = RawFields::extract(message)?;

        let symbol = fields
            .text(Field::Symbol)
            .ok_or(ParseFailure::MissingField(Field::Symbol.name()))?
            .to_uppercase();
        let price = fields.required_number(Field::Price)?;
        let condition = fields.text(Field::Condition).map(str::to_string);
        let target = fields.number(Field::Target)?;
        let change_24h = fields.number(Field::Change24h)?;
        let timeframes = extract_timeframes(message)?;

        let signal_type = infer_signal_type(condition.as_deref(), message);
        debug!(%symbol, %signal_type, price, "parsed alert message");

        Ok(ParsedSignal {
            symbol,
            signal_type,
            price,
            timestamp_millis: captured_at.timestamp_millis(),
            metadata: SignalMetadata {
                source: self.source.clone(),
                indicator: fields
                    .text(Field::Indicator)
                    .unwrap_or(self.default_indicator.as_str())
                    .to_string(),
                timestamp: captured_at.to_rfc3339(),
                condition,
                target,
                change_24h,
                timeframes,
            },
        })
    }

    /// Best-effort parse: logs the failure reason and returns `None`.
    pub fn try_parse(&self, message: &str) -> Option<ParsedSignal> {
        match self.parse(message) {
            Ok(signal) => Some(signal),
            Err(reason) => {
                warn!(%reason, "alert message could not be parsed");
                None
            }
        }
    }
}

/// Best-effort parse with the default parser.
pub fn parse_signal(message: &str) -> Option<ParsedSignal> {
    SignalTextParser::default().try_parse(message)
}
