use crate::error::ViewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The dashboard pages, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    #[default]
    MarketOverview,
    TopPerformers,
    WorstPerformers,
    VolatilityAnalysis,
    CumulativeReturns,
    SectorAnalysis,
    CorrelationMatrix,
    MonthlyTrends,
    StockComparator,
}

impl ViewId {
    pub const ALL: [ViewId; 9] = [
        ViewId::MarketOverview,
        ViewId::TopPerformers,
        ViewId::WorstPerformers,
        ViewId::VolatilityAnalysis,
        ViewId::CumulativeReturns,
        ViewId::SectorAnalysis,
        ViewId::CorrelationMatrix,
        ViewId::MonthlyTrends,
        ViewId::StockComparator,
    ];

    /// The menu label.
    pub fn label(&self) -> &'static str {
        match self {
            ViewId::MarketOverview => "Market Overview",
            ViewId::TopPerformers => "Top Performers",
            ViewId::WorstPerformers => "Worst Performers",
            ViewId::VolatilityAnalysis => "Volatility Analysis",
            ViewId::CumulativeReturns => "Cumulative Returns",
            ViewId::SectorAnalysis => "Sector Analysis",
            ViewId::CorrelationMatrix => "Correlation Matrix",
            ViewId::MonthlyTrends => "Monthly Trends",
            ViewId::StockComparator => "Stock Comparator",
        }
    }

    /// The URL path segment, e.g. `sector-analysis`.
    pub fn slug(&self) -> &'static str {
        match self {
            ViewId::MarketOverview => "market-overview",
            ViewId::TopPerformers => "top-performers",
            ViewId::WorstPerformers => "worst-performers",
            ViewId::VolatilityAnalysis => "volatility-analysis",
            ViewId::CumulativeReturns => "cumulative-returns",
            ViewId::SectorAnalysis => "sector-analysis",
            ViewId::CorrelationMatrix => "correlation-matrix",
            ViewId::MonthlyTrends => "monthly-trends",
            ViewId::StockComparator => "stock-comparator",
        }
    }

    /// 1-based position in the menu.
    pub fn menu_index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0) + 1
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewId {
    type Err = ViewError;

    /// Accepts a menu label (any case), a slug, or a 1-based menu index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if let Ok(index) = needle.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied())
                .ok_or_else(|| ViewError::UnknownView(needle.to_string()));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(needle) || v.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ViewError::UnknownView(needle.to_string()))
    }
}

/// The menu state machine.
///
/// Starts on the first page and only moves when a selection event arrives. A selection
/// that names no page is rejected and leaves the current page unchanged. There is no
/// terminal state.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: ViewId,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewId {
        self.current
    }

    pub fn select(&mut self, selection: &str) -> Result<ViewId, ViewError> {
        let next = selection.parse::<ViewId>()?;
        if next != self.current {
            tracing::debug!(from = %self.current, to = %next, "View changed.");
        }
        self.current = next;
        Ok(next)
    }
}
