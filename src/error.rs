use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardkeeperError {
    #[error("Out of range 1 - {max}")]
    OutOfRange { max: i64 },
    #[error("Read only mode")]
    ReadOnly,
    #[error("Card {number} is not owned")]
    NotOwned { number: i64 },
    #[error("Not a card number: {0}")]
    InvalidNumber(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Export error: {0}")]
    Export(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CardkeeperError {
    /// User-input errors (and a failed export) are reported and the shell
    /// carries on; everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::ReadOnly
                | Self::NotOwned { .. }
                | Self::InvalidNumber(_)
                | Self::Export(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CardkeeperError>;

// Helper conversions
impl From<rusqlite::Error> for CardkeeperError {
    fn from(e: rusqlite::Error) -> Self { Self::Storage(e.to_string()) }
}

impl From<config::ConfigError> for CardkeeperError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
