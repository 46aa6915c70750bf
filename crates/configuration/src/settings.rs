use crate::error::ConfigError;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub data: DataSettings,
    pub server: ServerSettings,
    pub views: ViewSettings,
    pub logging: LoggingSettings,
}

/// Where the pre-computed bundle lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// Path to the serialized bundle. The extension picks the format (`.json` or `.bin`).
    pub bundle_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("invalid server address: {}", e)))
    }
}

/// Sizes and limits used by the page renderers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewSettings {
    /// How many rows the top/worst rankings show.
    pub top_k: usize,
    /// How many detail cards sit under a ranking chart.
    pub card_count: usize,
    /// Maximum symbols plotted together on the cumulative returns page.
    pub max_compare: usize,
    pub correlation_default: usize,
    pub correlation_min: usize,
    pub correlation_max: usize,
    /// Pairs listed in each correlation insight column.
    pub insight_pairs: usize,
    /// Gainers and losers shown per month.
    pub monthly_movers: usize,
    pub histogram_bins: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            top_k: 10,
            card_count: 5,
            max_compare: 5,
            correlation_default: 15,
            correlation_min: 5,
            correlation_max: 30,
            insight_pairs: 5,
            monthly_movers: 5,
            histogram_bins: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` wins when set.
    pub level: String,
    /// When set, logs go to a daily rolling file in this directory instead of stdout.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Settings {
    /// Rejects settings the page renderers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let v = &self.views;
        let sizes = [
            ("views.top_k", v.top_k),
            ("views.card_count", v.card_count),
            ("views.max_compare", v.max_compare),
            ("views.correlation_min", v.correlation_min),
            ("views.insight_pairs", v.insight_pairs),
            ("views.monthly_movers", v.monthly_movers),
            ("views.histogram_bins", v.histogram_bins),
        ];
        for (name, value) in sizes {
            if value == 0 {
                return Err(ConfigError::ValidationError(format!("{} must be greater than 0", name)));
            }
        }

        if v.correlation_min > v.correlation_default || v.correlation_default > v.correlation_max {
            return Err(ConfigError::ValidationError(format!(
                "correlation range must satisfy min <= default <= max (got {} / {} / {})",
                v.correlation_min, v.correlation_default, v.correlation_max
            )));
        }

        if self.data.bundle_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "data.bundle_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
