//! A small synthetic bundle shared by the page tests.

use chrono::{Duration, NaiveDate};
use core_types::{CorrelationMatrix, DataBundle, MarketSummary, MasterRow, MetricRow, MonthlyRow};

/// (symbol, sector, yearly return, volatility, avg price), already sorted by return.
const STOCKS: [(&str, &str, f64, f64, f64); 24] = [
    ("ADANIENT", "Metals", 72.0, 38.0, 2900.0),
    ("TATAMOTORS", "Auto", 61.5, 33.0, 780.0),
    ("BAJAJ-AUTO", "Auto", 48.0, 24.0, 7200.0),
    ("NTPC", "Power", 41.0, 21.0, 290.0),
    ("COALINDIA", "Metals", 36.5, 26.0, 380.0),
    ("SUNPHARMA", "Pharma", 30.0, 19.0, 1300.0),
    ("LT", "Infrastructure", 27.0, 18.5, 3300.0),
    ("ICICIBANK", "Banking", 22.0, 17.0, 1000.0),
    ("TCS", "IT", 18.0, 16.0, 3700.0),
    ("ITC", "FMCG", 14.0, 14.0, 440.0),
    ("INFY", "IT", 11.0, 20.0, 1500.0),
    ("SBIN", "Banking", 9.5, 23.0, 640.0),
    ("RELIANCE", "Energy", 7.0, 18.0, 2600.0),
    ("MARUTI", "Auto", 5.0, 19.5, 10500.0),
    ("HCLTECH", "IT", 3.0, 21.5, 1350.0),
    ("WIPRO", "IT", 0.5, 22.0, 450.0),
    ("NESTLEIND", "FMCG", -2.0, 13.0, 24000.0),
    ("HINDUNILVR", "FMCG", -6.0, 15.0, 2500.0),
    ("BRITANNIA", "FMCG", -9.0, 16.5, 4900.0),
    ("HDFCBANK", "Banking", -12.0, 19.0, 1550.0),
    ("ASIANPAINT", "Consumer", -17.5, 21.0, 3000.0),
    ("KOTAKBANK", "Banking", -22.0, 24.5, 1750.0),
    ("UPL", "Chemicals", -31.0, 34.0, 520.0),
    ("BAJFINANCE", "Finance", -36.0, 36.0, 6800.0),
];

pub fn bundle() -> DataBundle {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let metrics: Vec<MetricRow> = STOCKS
        .iter()
        .map(|&(symbol, sector, yearly_return, volatility, avg_price)| MetricRow {
            symbol: symbol.to_string(),
            sector: sector.to_string(),
            yearly_return,
            volatility,
            avg_price,
        })
        .collect();

    let mut master_data = Vec::new();
    for (i, metric) in metrics.iter().enumerate() {
        let mut close = metric.avg_price;
        for day in 0..5 {
            let daily_return = if day == 0 { None } else { Some(((i + day) % 5) as f64 - 2.0) };
            if let Some(r) = daily_return {
                close *= 1.0 + r / 100.0;
            }
            master_data.push(MasterRow {
                symbol: metric.symbol.clone(),
                date: start + Duration::days(day as i64),
                close,
                volume: 10_000.0 * (i + 1) as f64,
                daily_return,
            });
        }
    }

    let symbols: Vec<String> = metrics.iter().map(|m| m.symbol.clone()).collect();
    let n = symbols.len();
    let values = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        1.0
                    } else {
                        // Symmetric and inside [-1, 1].
                        (((i + j) % 11) as f64 - 5.0) / 10.0
                    }
                })
                .collect()
        })
        .collect();

    let mut monthly_performance = Vec::new();
    for (i, metric) in metrics.iter().enumerate() {
        for (m, month) in ["2024-01", "2024-02"].iter().enumerate() {
            monthly_performance.push(MonthlyRow {
                symbol: metric.symbol.clone(),
                month_year: month.to_string(),
                monthly_return: ((i * 7 + m * 3) % 17) as f64 - 8.0,
            });
        }
    }
    // A month with only three constituents reported.
    for (symbol, r) in [("TCS", 4.0), ("INFY", -1.5), ("ITC", 0.5)] {
        monthly_performance.push(MonthlyRow {
            symbol: symbol.to_string(),
            month_year: "2024-03".to_string(),
            monthly_return: r,
        });
    }

    let green = metrics.iter().filter(|m| m.yearly_return > 0.0).count() as u32;
    let total = metrics.len() as u32;
    DataBundle {
        master_data,
        market_summary: MarketSummary {
            total_stocks: total,
            green_stocks: green,
            red_stocks: total - green,
            green_percentage: green as f64 / total as f64 * 100.0,
            red_percentage: (total - green) as f64 / total as f64 * 100.0,
            avg_return: metrics.iter().map(|m| m.yearly_return).sum::<f64>() / total as f64,
        },
        metrics,
        correlation_matrix: CorrelationMatrix { symbols, values },
        monthly_performance,
    }
}
