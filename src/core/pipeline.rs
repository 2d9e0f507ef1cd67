use crate::core::flatten;
use crate::core::{Catalog, ConfigProvider, OutputRow, Pipeline};
use crate::utils::error::{FlattenError, Result};
use std::fs;
use std::path::Path;

pub const CSV_HEADER: [&str; 6] = ["id", "name", "description", "price", "category", "image"];

pub struct CatalogPipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> CatalogPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C: ConfigProvider> Pipeline for CatalogPipeline<C> {
    fn load(&self) -> Result<Catalog> {
        let path = Path::new(self.config.input_path());

        if !path.exists() {
            return Err(FlattenError::NotFoundError {
                path: self.config.input_path().to_string(),
            });
        }

        tracing::debug!("Reading catalog from: {}", self.config.input_path());
        let raw = fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&raw)?;

        Ok(catalog)
    }

    fn flatten(&self, catalog: &Catalog) -> Vec<OutputRow> {
        flatten::flatten(catalog)
    }

    fn write(&self, rows: &[OutputRow]) -> Result<u64> {
        let dest = Path::new(self.config.output_path());

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to a sibling temp file and rename, so the destination is
        // either its previous content or the complete new CSV.
        let tmp = dest.with_extension("csv.tmp");
        tracing::debug!("Writing {} rows to: {}", rows.len(), tmp.display());

        {
            let mut writer = csv::Writer::from_path(&tmp)?;
            writer.write_record(CSV_HEADER)?;

            for row in rows {
                writer.write_record([
                    row.id.to_string(),
                    row.name.clone(),
                    row.description.clone(),
                    row.price.to_string(),
                    row.category.clone(),
                    row.image.clone(),
                ])?;
            }

            writer.flush()?;
        }

        fs::rename(&tmp, dest)?;
        Ok(rows.len() as u64)
    }

    fn output_path(&self) -> &str {
        self.config.output_path()
    }
}
