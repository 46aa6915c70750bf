use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ViewError {
    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Invalid value for control '{0}': {1}")]
    InvalidControl(String, String),

    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Bundle data error: {0}")]
    Core(#[from] core_types::CoreError),
}
