//! Histogram trend classification.

use indicsig_core::HistogramColor;

/// Tag every histogram bar as rising, falling or neutral.
///
/// A left fold carrying the previous bar: the first bar has no
/// predecessor and is always neutral, every later bar is tagged by
/// [`HistogramColor::from_step`]. Output is aligned with the input.
pub fn classify(histogram: &[f64]) -> Vec<HistogramColor> {
    let (tags, _) = histogram.iter().fold(
        (Vec::with_capacity(histogram.len()), None::<f64>),
        |(mut tags, prev), &curr| {
            let tag = match prev {
                None => HistogramColor::Neutral,
                Some(prev) => HistogramColor::from_step(prev, curr),
            };
            tags.push(tag);
            (tags, Some(curr))
        },
    );
    tags
}
