use super::tables::{FactorTableError, FactorTables};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct OverrideRow {
    #[serde(rename = "Dimension")]
    dimension: String,
    #[serde(rename = "Option")]
    option: String,
    #[serde(rename = "Multiplier")]
    multiplier: f64,
}

impl FactorTables {
    /// Loads the default tables and applies the overrides found in a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FactorTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Expects a `Dimension,Option,Multiplier` header. Rows not listed keep
    /// their default multiplier; a later row for the same option wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FactorTableError> {
        let mut tables = FactorTables::default();
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);
        let mut applied = 0usize;

        for record in csv_reader.deserialize::<OverrideRow>() {
            let row = record?;
            tables.apply_override(&row.dimension, &row.option, row.multiplier)?;
            applied += 1;
        }

        debug!(overrides = applied, "factor table overrides applied");
        Ok(tables)
    }
}
