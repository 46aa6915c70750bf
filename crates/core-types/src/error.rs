use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Symbol not present in the correlation matrix: {0}")]
    UnknownSymbol(String),
}
