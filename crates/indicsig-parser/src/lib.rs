//! Alert text parsing.
//!
//! Alert messages are composed elsewhere as labelled lines, one field per
//! line, each introduced by a fixed emoji and a Turkish label:
//!
//! ```text
//! 💰 Coin: ETHUSDT
//! 💵 Fiyat: 3961.638 USDT
//! 📊 İndikatör: İndicPro (Ana Çizgi)
//! 📈 Koşul: Üstüne Çıktığında
//! 🎯 Hedef: 75.6
//! 📈 Değişim: +3.02%
//! • 15m: 78.16
//! ```
//!
//! Symbol and price are mandatory; every other field is optional.

mod extract;
mod parser;

pub use extract::{Field, FieldExtractor, Presence, EXTRACTORS};
pub use parser::{
    infer_signal_type, parse_signal, SignalTextParser, DEFAULT_INDICATOR, DEFAULT_SOURCE,
};
