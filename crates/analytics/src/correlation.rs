use crate::error::AnalyticsError;
use core_types::CorrelationMatrix;
use serde::Serialize;

/// Correlation between two distinct symbols.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPair {
    pub first: String,
    pub second: String,
    pub correlation: f64,
}

/// Enumerates every unordered pair of `symbols` (i < j, in the given order) with its
/// matrix value. The result is sorted by correlation, highest first; equal values keep
/// enumeration order.
///
/// `n` symbols always produce `n * (n - 1) / 2` pairs.
pub fn correlation_pairs(
    matrix: &CorrelationMatrix,
    symbols: &[String],
) -> Result<Vec<CorrelationPair>, AnalyticsError> {
    let indices = symbols
        .iter()
        .map(|s| {
            matrix
                .index_of(s)
                .ok_or_else(|| AnalyticsError::UnknownSymbol(s.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut pairs = Vec::with_capacity(symbols.len() * symbols.len().saturating_sub(1) / 2);
    for i in 0..indices.len() {
        for j in (i + 1)..indices.len() {
            pairs.push(CorrelationPair {
                first: symbols[i].clone(),
                second: symbols[j].clone(),
                correlation: matrix.values[indices[i]][indices[j]],
            });
        }
    }

    pairs.sort_by(|a, b| b.correlation.total_cmp(&a.correlation));
    Ok(pairs)
}

/// Splits descending-sorted pairs into the `n` most correlated and the `n` least
/// correlated. Both lists keep the descending order of `pairs`.
///
/// With fewer than `2 * n` pairs the two lists overlap; no pair is invented.
pub fn split_insights(
    pairs: &[CorrelationPair],
    n: usize,
) -> (Vec<CorrelationPair>, Vec<CorrelationPair>) {
    let high = pairs.iter().take(n).cloned().collect();
    let low = pairs[pairs.len().saturating_sub(n)..].to_vec();
    (high, low)
}
