use serde::Deserialize;

/// Root of the input document. Every field is optional on the wire; absent
/// collections deserialize to empty so the traversal never has to branch on
/// missing data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// One flattened CSV record representing one purchasable unit.
/// `image` is always empty; the column exists for import compatibility.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

/// Reporting payload for the console summary. Not part of the data contract.
#[derive(Debug, Clone)]
pub struct FlattenSummary {
    pub categories: usize,
    pub rows: u64,
    pub output_path: String,
    pub file_size: u64,
}
