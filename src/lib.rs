pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{engine::FlattenEngine, pipeline::CatalogPipeline};
pub use crate::domain::model::{Catalog, FlattenSummary, OutputRow};
pub use crate::utils::error::{FlattenError, Result};
