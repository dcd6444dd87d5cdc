pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{engine::CollectorEngine, pipeline::TickerPipeline};
pub use crate::domain::model::{Dataset, PriceRecord, COLUMN_MAP};
pub use crate::utils::error::{Result, ScrapeError};
