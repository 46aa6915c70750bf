use crate::error::ViewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time window offered on the cumulative returns page.
///
/// The selection is shown back to the user but does not filter the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1M")]
    OneMonth,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::OneYear,
        TimeRange::SixMonths,
        TimeRange::ThreeMonths,
        TimeRange::OneMonth,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TimeRange::OneYear => "1Y",
            TimeRange::SixMonths => "6M",
            TimeRange::ThreeMonths => "3M",
            TimeRange::OneMonth => "1M",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimeRange {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ViewError::InvalidControl("time_range".to_string(), format!("'{}' is not one of 1Y, 6M, 3M, 1M", s))
            })
    }
}

/// Current widget values for one rendering pass.
///
/// Every field is optional; an absent value means "use the page default". Field names
/// double as query-string keys.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Controls {
    /// Comma-separated symbols for the cumulative returns multi-select.
    pub symbols: Option<String>,
    pub time_range: Option<String>,
    pub month: Option<String>,
    /// Correlation subset size. Clamped to the configured slider range.
    pub num_stocks: Option<usize>,
    pub stock_a: Option<String>,
    pub stock_b: Option<String>,
}

impl Controls {
    /// The multi-select value, in selection order without duplicates.
    ///
    /// `None` when the control was not supplied; `Some(vec![])` when it was supplied
    /// empty.
    pub fn symbol_list(&self) -> Option<Vec<String>> {
        self.symbols.as_ref().map(|raw| {
            let mut list: Vec<String> = Vec::new();
            for symbol in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                if !list.iter().any(|s| s == symbol) {
                    list.push(symbol.to_string());
                }
            }
            list
        })
    }

    pub fn time_range(&self) -> Result<TimeRange, ViewError> {
        match self.time_range.as_deref() {
            None | Some("") => Ok(TimeRange::default()),
            Some(raw) => raw.parse(),
        }
    }
}
