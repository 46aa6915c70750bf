use core_types::MonthlyRow;
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything the monthly trends page shows for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyMovers {
    pub month: String,
    /// Every row of the month, best return first.
    pub rows: Vec<MonthlyRow>,
    /// Best returns, best first.
    pub gainers: Vec<MonthlyRow>,
    /// Worst returns, worst first.
    pub losers: Vec<MonthlyRow>,
    pub advancing: usize,
    pub declining: usize,
    /// `None` for a month with no rows.
    pub average_return: Option<f64>,
}

impl MonthlyMovers {
    pub fn best(&self) -> Option<&MonthlyRow> {
        self.rows.first()
    }
}

/// Distinct month keys, newest first.
pub fn available_months(monthly: &[MonthlyRow]) -> Vec<String> {
    let months: BTreeSet<&str> = monthly.iter().map(|r| r.month_year.as_str()).collect();
    months.into_iter().rev().map(str::to_string).collect()
}

/// Ranks the rows of `month` and picks `n` gainers and `n` losers.
///
/// A month with fewer than `2 * n` rows shares rows between the two lists.
pub fn month_movers(monthly: &[MonthlyRow], month: &str, n: usize) -> MonthlyMovers {
    let mut rows: Vec<MonthlyRow> = monthly
        .iter()
        .filter(|r| r.month_year == month)
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.monthly_return.total_cmp(&a.monthly_return));

    let gainers = rows.iter().take(n).cloned().collect();
    let start = rows.len().saturating_sub(n);
    let mut losers = rows[start..].to_vec();
    losers.sort_by(|a, b| a.monthly_return.total_cmp(&b.monthly_return));

    let advancing = rows.iter().filter(|r| r.monthly_return > 0.0).count();
    let declining = rows.iter().filter(|r| r.monthly_return < 0.0).count();
    let average_return = if rows.is_empty() {
        None
    } else {
        Some(rows.iter().map(|r| r.monthly_return).sum::<f64>() / rows.len() as f64)
    };

    MonthlyMovers {
        month: month.to_string(),
        rows,
        gainers,
        losers,
        advancing,
        declining,
        average_return,
    }
}
