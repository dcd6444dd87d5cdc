use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("price list container not found on the page")]
    ContainerNotFound,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid CSS selector: {0}")]
    Selector(String),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScrapeError {
    /// A recoverable error skips the current iteration; anything else
    /// (CSV/IO faults while persisting, bad configuration) aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ContainerNotFound | Self::Http(_))
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
