use core_types::MetricRow;
use serde::Serialize;

/// The metrics compared head to head on the comparator page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonMetric {
    YearlyReturn,
    Volatility,
    AvgPrice,
}

impl ComparisonMetric {
    pub const ALL: [ComparisonMetric; 3] = [
        ComparisonMetric::YearlyReturn,
        ComparisonMetric::Volatility,
        ComparisonMetric::AvgPrice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonMetric::YearlyReturn => "Annual Return",
            ComparisonMetric::Volatility => "Volatility",
            ComparisonMetric::AvgPrice => "Avg Price",
        }
    }

    pub fn value(&self, row: &MetricRow) -> f64 {
        match self {
            ComparisonMetric::YearlyReturn => row.yearly_return,
            ComparisonMetric::Volatility => row.volatility,
            ComparisonMetric::AvgPrice => row.avg_price,
        }
    }
}

/// One metric compared between two symbols.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricComparison {
    pub metric: ComparisonMetric,
    pub first_value: f64,
    pub second_value: f64,
    /// Symbol with the greater value. The first symbol leads only when strictly greater.
    pub leader: String,
    pub difference: f64,
}

/// Compares `first` and `second` on every [`ComparisonMetric`].
pub fn compare(first: &MetricRow, second: &MetricRow) -> Vec<MetricComparison> {
    ComparisonMetric::ALL
        .iter()
        .map(|&metric| {
            let a = metric.value(first);
            let b = metric.value(second);
            let leader = if a > b { &first.symbol } else { &second.symbol };
            MetricComparison {
                metric,
                first_value: a,
                second_value: b,
                leader: leader.clone(),
                difference: (a - b).abs(),
            }
        })
        .collect()
}
