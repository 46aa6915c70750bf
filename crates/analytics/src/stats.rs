use crate::error::AnalyticsError;
use core_types::{MasterRow, MetricRow};
use serde::Serialize;

/// One equal-width histogram bucket. `upper` is exclusive except for the last bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Market-wide averages shown on the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAverages {
    /// Mean closing price over every master row.
    pub avg_close: f64,
    /// Mean daily volume over every master row.
    pub avg_volume: f64,
    /// Sum of every symbol's yearly return.
    pub total_return: f64,
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Buckets `values` into `bins` equal-width bins spanning their min..=max.
///
/// When every value is identical a single bin holds them all.
pub fn histogram(values: &[f64], bins: usize) -> Result<Vec<HistogramBin>, AnalyticsError> {
    if bins == 0 {
        return Err(AnalyticsError::NotEnoughData("histogram needs at least one bin".to_string()));
    }
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Ok(Vec::new());
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        tracing::debug!(value = min, "All values identical; using a single bin.");
        return Ok(vec![HistogramBin { lower: min, upper: max, count: finite.len() }]);
    }

    let width = (max - min) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for value in finite {
        let index = (((value - min) / width) as usize).min(bins - 1);
        result[index].count += 1;
    }

    Ok(result)
}

/// Averages across the whole bundle. Empty tables yield zeros.
pub fn market_averages(master: &[MasterRow], metrics: &[MetricRow]) -> MarketAverages {
    let closes: Vec<f64> = master.iter().map(|r| r.close).collect();
    let volumes: Vec<f64> = master.iter().map(|r| r.volume).collect();
    MarketAverages {
        avg_close: mean(&closes).unwrap_or_default(),
        avg_volume: mean(&volumes).unwrap_or_default(),
        total_return: metrics.iter().map(|m| m.yearly_return).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_median() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn histogram_counts_every_value_once() {
        let values = [10.0, 12.0, 15.0, 19.9, 20.0, 30.0];
        let bins = histogram(&values, 4).unwrap();

        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].lower, 10.0);
        assert_eq!(bins[3].upper, 30.0);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        // Width 5: [10,15) [15,20) [20,25) [25,30]
        assert_eq!(bins.iter().map(|b| b.count).collect::<Vec<_>>(), vec![2, 2, 1, 1]);
    }

    #[test]
    fn histogram_edge_cases() {
        assert!(histogram(&[], 20).unwrap().is_empty());
        assert!(histogram(&[1.0], 0).is_err());

        let flat = histogram(&[7.0, 7.0, 7.0], 20).unwrap();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].count, 3);
    }

    #[test]
    fn market_averages_on_empty_tables() {
        let averages = market_averages(&[], &[]);
        assert_eq!(averages.avg_close, 0.0);
        assert_eq!(averages.total_return, 0.0);
    }
}
