use core_types::MetricRow;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate statistics for one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorSummary {
    pub sector: String,
    pub avg_return: f64,
    pub stock_count: usize,
    pub total_return: f64,
    pub avg_volatility: f64,
    /// Member symbols in metrics-table order.
    pub symbols: Vec<String>,
}

/// Groups the metrics table by sector.
///
/// Groups come out sorted by mean yearly return, highest first. Equal means keep
/// sector-name order.
pub fn sector_rollup(metrics: &[MetricRow]) -> Vec<SectorSummary> {
    let mut groups: BTreeMap<&str, Vec<&MetricRow>> = BTreeMap::new();
    for row in metrics {
        groups.entry(row.sector.as_str()).or_default().push(row);
    }

    let mut summaries: Vec<SectorSummary> = groups
        .into_iter()
        .map(|(sector, rows)| {
            let count = rows.len();
            let total_return: f64 = rows.iter().map(|r| r.yearly_return).sum();
            let total_volatility: f64 = rows.iter().map(|r| r.volatility).sum();
            SectorSummary {
                sector: sector.to_string(),
                avg_return: total_return / count as f64,
                stock_count: count,
                total_return,
                avg_volatility: total_volatility / count as f64,
                symbols: rows.iter().map(|r| r.symbol.clone()).collect(),
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.avg_return.total_cmp(&a.avg_return));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(symbol: &str, sector: &str, yearly_return: f64, volatility: f64) -> MetricRow {
        MetricRow {
            symbol: symbol.to_string(),
            sector: sector.to_string(),
            yearly_return,
            volatility,
            avg_price: 100.0,
        }
    }

    fn sample() -> Vec<MetricRow> {
        vec![
            metric("TCS", "IT", 30.0, 20.0),
            metric("INFY", "IT", 10.0, 24.0),
            metric("HDFCBANK", "Banking", -5.0, 15.0),
            metric("ICICIBANK", "Banking", 25.0, 17.0),
            metric("ITC", "FMCG", 8.0, 12.0),
        ]
    }

    #[test]
    fn groups_are_sorted_by_mean_return() {
        let rollup = sector_rollup(&sample());
        let order: Vec<&str> = rollup.iter().map(|s| s.sector.as_str()).collect();
        assert_eq!(order, vec!["IT", "Banking", "FMCG"]);

        let it = &rollup[0];
        assert_eq!(it.stock_count, 2);
        assert!((it.avg_return - 20.0).abs() < 1e-9);
        assert!((it.total_return - 40.0).abs() < 1e-9);
        assert!((it.avg_volatility - 22.0).abs() < 1e-9);
        assert_eq!(it.symbols, vec!["TCS".to_string(), "INFY".to_string()]);
    }

    #[test]
    fn group_sizes_cover_every_row_and_means_stay_in_range() {
        let metrics = sample();
        let rollup = sector_rollup(&metrics);

        let total: usize = rollup.iter().map(|s| s.stock_count).sum();
        assert_eq!(total, metrics.len());

        for summary in &rollup {
            let members: Vec<f64> = metrics
                .iter()
                .filter(|m| m.sector == summary.sector)
                .map(|m| m.yearly_return)
                .collect();
            let min = members.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = members.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(summary.avg_return >= min && summary.avg_return <= max);
        }
    }

    #[test]
    fn ties_keep_sector_name_order() {
        let metrics = vec![
            metric("B1", "Pharma", 5.0, 10.0),
            metric("A1", "Auto", 5.0, 10.0),
            metric("C1", "Cement", 5.0, 10.0),
        ];
        let order: Vec<String> = sector_rollup(&metrics).into_iter().map(|s| s.sector).collect();
        assert_eq!(order, vec!["Auto", "Cement", "Pharma"]);
    }

    #[test]
    fn empty_table_yields_no_groups() {
        assert!(sector_rollup(&[]).is_empty());
    }
}
