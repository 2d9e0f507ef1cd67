use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_extension, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-flatten")]
#[command(about = "Flatten a JSON product catalog into an importable CSV")]
pub struct CliConfig {
    #[arg(long, default_value = "catalog.json")]
    pub input_path: String,

    #[arg(long, default_value = "catalog-export.csv")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_extension("input_path", &self.input_path, &["json"])?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
