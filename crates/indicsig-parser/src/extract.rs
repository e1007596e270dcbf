//! Per-field pattern extractors.

use indicsig_core::{ParseFailure, TimeframeScores};
use regex::Regex;
use std::sync::LazyLock;

macro_rules! re {
    ($pat:expr) => {
        LazyLock::new(|| Regex::new($pat).unwrap())
    };
}

static RE_SYMBOL: LazyLock<Regex> = re!(r"💰\s*Coin:\s*(\w+)");
static RE_PRICE: LazyLock<Regex> = re!(r"💵\s*Fiyat:\s*([\d,.]+)\s*USDT");
static RE_INDICATOR: LazyLock<Regex> = re!(r"📊\s*İndikatör:\s*([^\n]+)");
static RE_CONDITION: LazyLock<Regex> = re!(r"📈\s*Koşul:\s*([^\n]+)");
static RE_TARGET: LazyLock<Regex> = re!(r"🎯\s*Hedef:\s*([\d,.]+)");
static RE_CHANGE: LazyLock<Regex> = re!(r"📈\s*Değişim:\s*([+-]?[\d,.]+)%");
static RE_TIMEFRAME: LazyLock<Regex> = re!(r"•\s*(\d+[mh]):\s*([\d,.]+)");

/// Whether a missing field fails the whole parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Single-valued fields of an alert message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Symbol,
    Price,
    Indicator,
    Condition,
    Target,
    Change24h,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Symbol => "symbol",
            Field::Price => "price",
            Field::Indicator => "indicator",
            Field::Condition => "condition",
            Field::Target => "target",
            Field::Change24h => "change_24h",
        }
    }
}

/// One labelled line pattern. Matching is independent of every other
/// field and of line order.
#[derive(Debug)]
pub struct FieldExtractor {
    pub field: Field,
    pub presence: Presence,
    pattern: &'static LazyLock<Regex>,
}

impl FieldExtractor {
    /// First capture of this field's pattern, trimmed.
    pub fn capture<'a>(&self, message: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(message)?
            .get(1)
            .map(|m| m.as_str().trim())
    }
}

/// Extractors in evaluation order.
pub static EXTRACTORS: [FieldExtractor; 6] = [
    FieldExtractor {
        field: Field::Symbol,
        presence: Presence::Required,
        pattern: &RE_SYMBOL,
    },
    FieldExtractor {
        field: Field::Price,
        presence: Presence::Required,
        pattern: &RE_PRICE,
    },
    FieldExtractor {
        field: Field::Indicator,
        presence: Presence::Optional,
        pattern: &RE_INDICATOR,
    },
    FieldExtractor {
        field: Field::Condition,
        presence: Presence::Optional,
        pattern: &RE_CONDITION,
    },
    FieldExtractor {
        field: Field::Target,
        presence: Presence::Optional,
        pattern: &RE_TARGET,
    },
    FieldExtractor {
        field: Field::Change24h,
        presence: Presence::Optional,
        pattern: &RE_CHANGE,
    },
];

/// Raw captures of the single-valued fields.
#[derive(Debug, Default)]
pub(crate) struct RawFields<'a> {
    found: Vec<(Field, &'a str)>,
}

impl<'a> RawFields<'a> {
    /// Run every extractor; fail on the first missing required field.
    pub(crate) fn extract(message: &'a str) -> Result<Self, ParseFailure> {
        let mut found = Vec::with_capacity(EXTRACTORS.len());
        for extractor in &EXTRACTORS {
            match (extractor.capture(message), extractor.presence) {
                (Some(raw), _) => found.push((extractor.field, raw)),
                (None, Presence::Required) => {
                    return Err(ParseFailure::MissingField(extractor.field.name()))
                }
                (None, Presence::Optional) => {}
            }
        }
        Ok(Self { found })
    }

    pub(crate) fn text(&self, field: Field) -> Option<&'a str> {
        self.found
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, raw)| *raw)
    }

    pub(crate) fn number(&self, field: Field) -> Result<Option<f64>, ParseFailure> {
        self.text(field)
            .map(|raw| parse_number(field.name(), raw))
            .transpose()
    }

    pub(crate) fn required_number(&self, field: Field) -> Result<f64, ParseFailure> {
        self.number(field)?
            .ok_or(ParseFailure::MissingField(field.name()))
    }
}

/// Collect every `• <n>m|h: <value>` line in document order.
pub(crate) fn extract_timeframes(message: &str) -> Result<TimeframeScores, ParseFailure> {
    let mut scores = TimeframeScores::new();
    for captures in RE_TIMEFRAME.captures_iter(message) {
        let label = &captures[1];
        let value = parse_number("timeframes", &captures[2])?;
        scores.insert(label, value);
    }
    Ok(scores)
}

/// Parse a decimal with thousands separators removed.
pub(crate) fn parse_number(field: &'static str, raw: &str) -> Result<f64, ParseFailure> {
    raw.replace(',', "")
        .parse::<f64>()
        .map_err(|_| ParseFailure::InvalidNumber {
            field,
            raw: raw.to_string(),
        })
}
