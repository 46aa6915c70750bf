use core_types::MetricRow;

/// All rows ordered by yearly return, highest first. Equal returns keep table order.
pub fn ranked_by_return(metrics: &[MetricRow]) -> Vec<&MetricRow> {
    let mut ranked: Vec<&MetricRow> = metrics.iter().collect();
    ranked.sort_by(|a, b| b.yearly_return.total_cmp(&a.yearly_return));
    ranked
}

/// The `k` best yearly returns, best first.
pub fn top_performers(metrics: &[MetricRow], k: usize) -> Vec<&MetricRow> {
    let mut ranked = ranked_by_return(metrics);
    ranked.truncate(k);
    ranked
}

/// The `k` worst yearly returns, worst first.
///
/// Taken from the tail of the same ranking as [`top_performers`], so the two never
/// share a row when the table holds at least `2 * k` rows.
pub fn worst_performers(metrics: &[MetricRow], k: usize) -> Vec<&MetricRow> {
    let ranked = ranked_by_return(metrics);
    let start = ranked.len().saturating_sub(k);
    let mut worst = ranked[start..].to_vec();
    worst.sort_by(|a, b| a.yearly_return.total_cmp(&b.yearly_return));
    worst
}

/// The `k` highest volatilities, highest first.
pub fn most_volatile(metrics: &[MetricRow], k: usize) -> Vec<&MetricRow> {
    let mut ranked: Vec<&MetricRow> = metrics.iter().collect();
    ranked.sort_by(|a, b| b.volatility.total_cmp(&a.volatility));
    ranked.truncate(k);
    ranked
}
