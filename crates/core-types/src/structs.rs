use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tolerance used when checking symmetry and the unit diagonal of a correlation matrix.
const CORRELATION_TOLERANCE: f64 = 1e-6;

/// One row of the master time series: a single symbol on a single trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterRow {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
    /// Percentage change from the previous close. Missing on a symbol's first day.
    #[serde(rename = "Daily_Return")]
    pub daily_return: Option<f64>,
}

/// Per-symbol yearly statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "Yearly_Return")]
    pub yearly_return: f64,
    #[serde(rename = "Volatility")]
    pub volatility: f64,
    #[serde(rename = "Avg_Price")]
    pub avg_price: f64,
}

/// Return of one symbol over one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    /// Sortable month key, e.g. `2024-03`.
    #[serde(rename = "Month_Year")]
    pub month_year: String,
    #[serde(rename = "Monthly_Return")]
    pub monthly_return: f64,
}

/// Market-wide breadth statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    #[serde(rename = "Total_Stocks")]
    pub total_stocks: u32,
    #[serde(rename = "Green_Stocks")]
    pub green_stocks: u32,
    #[serde(rename = "Red_Stocks")]
    pub red_stocks: u32,
    #[serde(rename = "Green_Percentage")]
    pub green_percentage: f64,
    #[serde(rename = "Red_Percentage")]
    pub red_percentage: f64,
    #[serde(rename = "Avg_Return")]
    pub avg_return: f64,
}

/// A square symbol-by-symbol matrix of return correlations.
///
/// Row `i` and column `i` both belong to `symbols[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub symbols: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Position of `symbol` on both axes.
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Looks up the coefficient between two symbols.
    pub fn get(&self, a: &str, b: &str) -> Result<f64, CoreError> {
        let i = self
            .index_of(a)
            .ok_or_else(|| CoreError::UnknownSymbol(a.to_string()))?;
        let j = self
            .index_of(b)
            .ok_or_else(|| CoreError::UnknownSymbol(b.to_string()))?;
        Ok(self.values[i][j])
    }

    /// Extracts the sub-matrix for `symbols`, in the given order.
    pub fn subset(&self, symbols: &[String]) -> Result<CorrelationMatrix, CoreError> {
        let indices = symbols
            .iter()
            .map(|s| {
                self.index_of(s)
                    .ok_or_else(|| CoreError::UnknownSymbol(s.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let values = indices
            .iter()
            .map(|&i| indices.iter().map(|&j| self.values[i][j]).collect())
            .collect();

        Ok(CorrelationMatrix {
            symbols: symbols.to_vec(),
            values,
        })
    }

    /// Checks shape, range, symmetry and the unit diagonal.
    pub fn validate(&self) -> Result<(), CoreError> {
        let n = self.symbols.len();
        if self.values.len() != n {
            return Err(CoreError::InvalidInput(
                "correlation_matrix".to_string(),
                format!("{} labels but {} rows", n, self.values.len()),
            ));
        }
        if let Some((i, row)) = self.values.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(CoreError::InvalidInput(
                "correlation_matrix".to_string(),
                format!("row {} has {} columns, expected {}", i, row.len(), n),
            ));
        }
        for (i, row) in self.values.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || !(-1.0 - CORRELATION_TOLERANCE..=1.0 + CORRELATION_TOLERANCE).contains(&value) {
                    return Err(CoreError::InvalidInput(
                        "correlation_matrix".to_string(),
                        format!("value {} at ({}, {}) is outside [-1, 1]", value, i, j),
                    ));
                }
                if (value - self.values[j][i]).abs() > CORRELATION_TOLERANCE {
                    return Err(CoreError::InvalidInput(
                        "correlation_matrix".to_string(),
                        format!("not symmetric at ({}, {})", i, j),
                    ));
                }
            }
            if (row[i] - 1.0).abs() > CORRELATION_TOLERANCE {
                return Err(CoreError::InvalidInput(
                    "correlation_matrix".to_string(),
                    format!("diagonal entry for {} is {}", self.symbols[i], row[i]),
                ));
            }
        }
        Ok(())
    }
}

/// The complete pre-computed dataset. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataBundle {
    pub master_data: Vec<MasterRow>,
    pub metrics: Vec<MetricRow>,
    pub correlation_matrix: CorrelationMatrix,
    pub monthly_performance: Vec<MonthlyRow>,
    pub market_summary: MarketSummary,
}

impl DataBundle {
    /// Finds the metrics row for `symbol`.
    pub fn metric(&self, symbol: &str) -> Option<&MetricRow> {
        self.metrics.iter().find(|m| m.symbol == symbol)
    }

    /// Symbols in metrics-table order.
    pub fn symbols(&self) -> Vec<String> {
        self.metrics.iter().map(|m| m.symbol.clone()).collect()
    }

    /// Enforces the structural invariants every view relies on.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = std::collections::HashSet::new();
        for row in &self.metrics {
            if !seen.insert(row.symbol.as_str()) {
                return Err(CoreError::InvalidInput(
                    "metrics".to_string(),
                    format!("duplicate symbol {}", row.symbol),
                ));
            }
        }
        self.correlation_matrix.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CorrelationMatrix {
        CorrelationMatrix {
            symbols: vec!["TCS".into(), "INFY".into(), "ITC".into()],
            values: vec![
                vec![1.0, 0.8, -0.2],
                vec![0.8, 1.0, 0.1],
                vec![-0.2, 0.1, 1.0],
            ],
        }
    }

    #[test]
    fn lookup_is_symmetric() {
        let m = matrix();
        assert_eq!(m.get("TCS", "INFY").unwrap(), 0.8);
        assert_eq!(m.get("INFY", "TCS").unwrap(), 0.8);
        assert_eq!(
            m.get("TCS", "WIPRO"),
            Err(CoreError::UnknownSymbol("WIPRO".into()))
        );
    }

    #[test]
    fn subset_keeps_requested_order() {
        let sub = matrix().subset(&["ITC".into(), "TCS".into()]).unwrap();
        assert_eq!(sub.symbols, vec!["ITC".to_string(), "TCS".to_string()]);
        assert_eq!(sub.values, vec![vec![1.0, -0.2], vec![-0.2, 1.0]]);
    }

    #[test]
    fn validate_rejects_broken_matrices() {
        assert!(matrix().validate().is_ok());

        let mut asymmetric = matrix();
        asymmetric.values[0][1] = 0.5;
        assert!(asymmetric.validate().is_err());

        let mut out_of_range = matrix();
        out_of_range.values[0][2] = -1.5;
        out_of_range.values[2][0] = -1.5;
        assert!(out_of_range.validate().is_err());

        let mut ragged = matrix();
        ragged.values[1].pop();
        assert!(ragged.validate().is_err());
    }

    #[test]
    fn rows_use_upstream_column_names() {
        let row: MasterRow = serde_json::from_str(
            r#"{"Symbol":"TCS","Date":"2024-01-02","Close":3700.5,"Volume":120000,"Daily_Return":null}"#,
        )
        .unwrap();
        assert_eq!(row.symbol, "TCS");
        assert_eq!(row.daily_return, None);
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }
}
