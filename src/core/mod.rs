pub mod engine;
pub mod flatten;
pub mod pipeline;

pub use crate::domain::model::{Catalog, Category, FlattenSummary, OutputRow, Product, Variant};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
