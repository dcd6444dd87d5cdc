pub mod engine;
pub mod extract;
pub mod pipeline;

pub use crate::domain::model::{Dataset, PriceRecord, COLUMN_MAP};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
