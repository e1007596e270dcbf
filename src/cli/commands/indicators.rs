//! Indicators command implementation.

use anyhow::{Context, Result};
use indicsig_config::AppConfig;
use indicsig_core::{NumericFormatter, SeriesIndicator};
use indicsig_data::load_csv;
use indicsig_indicators::{BollingerBands, MacdDema, VolumeWeightedMacd, VwMacdSummary, WaveTrend};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{IndicatorsArgs, OutputFormat};

#[derive(Debug, Serialize)]
struct LatestReading {
    symbol: String,
    bars: usize,
    time: Option<String>,
    close: Option<f64>,
    wavetrend: Option<WaveTrendReading>,
    macd_dema: Option<LineReading>,
    vw_macd: Option<VwMacdSummary>,
    bollinger: Option<BandReading>,
}

#[derive(Debug, Serialize)]
struct WaveTrendReading {
    wt1: f64,
    wt2: f64,
}

#[derive(Debug, Serialize)]
struct LineReading {
    macd: f64,
    signal: f64,
    histogram: f64,
}

#[derive(Debug, Serialize)]
struct BandReading {
    upper: f64,
    middle: f64,
    lower: f64,
    position: &'static str,
}

pub async fn run(args: IndicatorsArgs, config: &AppConfig) -> Result<()> {
    let series = load_csv(&args.data, &args.symbol)
        .with_context(|| format!("Failed to load candles from {}", args.data.display()))?;
    info!(symbol = %series.symbol, bars = series.len(), "Computing indicators");

    let settings = &config.indicators;
    let wavetrend = WaveTrend::new(settings.wavetrend)?;
    let macd = MacdDema::new(settings.macd_dema)?;
    let vw_macd = VolumeWeightedMacd::new(settings.vw_macd)?;
    let bollinger = BollingerBands::new(settings.bollinger)?;

    if !bollinger.is_warmed_up(&series) {
        warn!(
            bars = series.len(),
            needed = bollinger.warmup(),
            "Not enough candles for every indicator; early values are undefined"
        );
    }

    let wt = wavetrend.compute(&series);
    let md = macd.compute(&series);
    let vw = vw_macd.compute(&series);
    let bb = bollinger.compute(&series);

    let last = series.len().checked_sub(1);
    let close = series.last().map(|bar| bar.close);

    let reading = LatestReading {
        symbol: series.symbol.clone(),
        bars: series.len(),
        time: series
            .last()
            .and_then(|bar| bar.datetime())
            .map(|dt| dt.to_rfc3339()),
        close,
        wavetrend: match (wt.wt1.last(), wt.wt2.last()) {
            (Some(&wt1), Some(&wt2)) => Some(WaveTrendReading { wt1, wt2 }),
            _ => None,
        },
        macd_dema: md
            .latest()
            .map(|(macd, signal, histogram)| LineReading { macd, signal, histogram }),
        vw_macd: vw.summary(&NumericFormatter::default()),
        bollinger: bb.latest().map(|(upper, middle, lower)| BandReading {
            upper,
            middle,
            lower,
            position: match (last, close) {
                (Some(i), Some(price)) if bb.is_overbought(i, price) => "above upper band",
                (Some(i), Some(price)) if bb.is_oversold(i, price) => "below lower band",
                _ => "inside bands",
            },
        }),
    };

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reading)?),
        OutputFormat::Text => print_text(&reading),
    }

    Ok(())
}

fn print_text(reading: &LatestReading) {
    println!("{} ({} candles)", reading.symbol, reading.bars);
    if let Some(time) = &reading.time {
        println!("Last candle: {}", time);
    }
    if let Some(close) = reading.close {
        println!("Close:       {}", close);
    }
    println!();

    match &reading.wavetrend {
        Some(wt) => println!("WaveTrend    wt1 {:>12.4}  wt2 {:>12.4}", wt.wt1, wt.wt2),
        None => println!("WaveTrend    n/a"),
    }
    match &reading.macd_dema {
        Some(m) => println!(
            "MACD (DEMA)  macd {:>11.6}  signal {:>11.6}  hist {:>11.6}",
            m.macd, m.signal, m.histogram
        ),
        None => println!("MACD (DEMA)  n/a"),
    }
    match &reading.vw_macd {
        Some(vw) => println!(
            "VW-MACD      macd {}  signal {}  hist {} ({}, {})",
            vw.macd,
            vw.signal,
            vw.histogram,
            vw.histogram_color,
            vw.histogram_color.chart_color()
        ),
        None => println!("VW-MACD      n/a"),
    }
    match &reading.bollinger {
        Some(bb) => println!(
            "Bollinger    upper {:.4}  middle {:.4}  lower {:.4} ({})",
            bb.upper, bb.middle, bb.lower, bb.position
        ),
        None => println!("Bollinger    n/a"),
    }
}
