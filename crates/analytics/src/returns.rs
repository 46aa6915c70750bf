use chrono::NaiveDate;
use core_types::MasterRow;
use serde::Serialize;

/// One point of a cumulative return curve, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    /// `None` where the day's return is missing upstream.
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Rows for `symbol`, sorted by date ascending. The sort is stable.
fn rows_for<'a>(master: &'a [MasterRow], symbol: &str) -> Vec<&'a MasterRow> {
    let mut rows: Vec<&MasterRow> = master.iter().filter(|r| r.symbol == symbol).collect();
    rows.sort_by_key(|r| r.date);
    rows
}

/// Compounds `symbol`'s daily returns into a running cumulative return.
///
/// Each output value is `∏(1 + r_i / 100) - 1`, scaled back to percent. The product
/// starts at 1.0 on the symbol's first date. A missing daily return produces a missing
/// point and leaves the product untouched, so the output has exactly one point per
/// input row, in date order.
pub fn cumulative_returns(master: &[MasterRow], symbol: &str) -> Vec<CumulativePoint> {
    let mut growth = 1.0_f64;
    rows_for(master, symbol)
        .into_iter()
        .map(|row| {
            let value = row.daily_return.map(|r| {
                growth *= 1.0 + r / 100.0;
                (growth - 1.0) * 100.0
            });
            CumulativePoint { date: row.date, value }
        })
        .collect()
}

/// Closing prices of `symbol` in date order.
pub fn price_history(master: &[MasterRow], symbol: &str) -> Vec<PricePoint> {
    rows_for(master, symbol)
        .into_iter()
        .map(|row| PricePoint { date: row.date, close: row.close })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str, day: u32, daily_return: Option<f64>) -> MasterRow {
        MasterRow {
            symbol: symbol.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            close: 100.0 + day as f64,
            volume: 1_000.0,
            daily_return,
        }
    }

    #[test]
    fn first_value_equals_first_daily_return() {
        let master = vec![row("TCS", 1, Some(2.5)), row("TCS", 2, Some(-1.0))];
        let series = cumulative_returns(&master, "TCS");

        assert_eq!(series.len(), 2);
        assert!((series[0].value.unwrap() - 2.5).abs() < 1e-9);
        // 1.025 * 0.99 - 1 = 0.01475
        assert!((series[1].value.unwrap() - 1.475).abs() < 1e-9);
    }

    #[test]
    fn rows_are_sorted_by_date_and_other_symbols_ignored() {
        let master = vec![
            row("TCS", 3, Some(10.0)),
            row("ITC", 1, Some(50.0)),
            row("TCS", 1, Some(10.0)),
            row("TCS", 2, Some(10.0)),
        ];
        let series = cumulative_returns(&master, "TCS");

        let days: Vec<u32> = series.iter().map(|p| chrono::Datelike::day(&p.date)).collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert!((series[2].value.unwrap() - 33.1).abs() < 1e-9);
    }

    #[test]
    fn each_symbol_restarts_from_one() {
        let master = vec![
            row("TCS", 1, Some(10.0)),
            row("TCS", 2, Some(10.0)),
            row("ITC", 1, Some(5.0)),
        ];
        let itc = cumulative_returns(&master, "ITC");
        assert!((itc[0].value.unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn missing_returns_keep_point_count_and_skip_compounding() {
        let master = vec![
            row("TCS", 1, None),
            row("TCS", 2, Some(10.0)),
            row("TCS", 3, None),
            row("TCS", 4, Some(10.0)),
        ];
        let series = cumulative_returns(&master, "TCS");

        assert_eq!(series.len(), 4);
        assert_eq!(series[0].value, None);
        assert!((series[1].value.unwrap() - 10.0).abs() < 1e-9);
        assert_eq!(series[2].value, None);
        assert!((series[3].value.unwrap() - 21.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_symbol_yields_empty_series() {
        assert!(cumulative_returns(&[row("TCS", 1, Some(1.0))], "WIPRO").is_empty());
        assert!(price_history(&[row("TCS", 1, Some(1.0))], "WIPRO").is_empty());
    }

    #[test]
    fn price_history_is_date_ordered() {
        let master = vec![row("TCS", 2, None), row("TCS", 1, None)];
        let prices = price_history(&master, "TCS");
        assert_eq!(prices[0].close, 101.0);
        assert_eq!(prices[1].close, 102.0);
    }
}
