use crate::domain::model::{Catalog, OutputRow};
use crate::utils::error::Result;

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline: Send + Sync {
    fn load(&self) -> Result<Catalog>;
    fn flatten(&self, catalog: &Catalog) -> Vec<OutputRow>;
    fn write(&self, rows: &[OutputRow]) -> Result<u64>;
    fn output_path(&self) -> &str;
}
