// std imports
use std::path::Path;

// 3rd party imports
use anyhow::{Context, Result};
use serde::Deserialize;

// internal imports
use crate::entities::modification_symbol::ModificationSymbol;

#[derive(Debug, Deserialize)]
struct ModificationSymbolCsvRecord {
    symbol: String,
    mass_delta: f64,
    #[serde(default)]
    indicates_phosphorylation: bool,
    #[serde(default)]
    comment: String,
}

/// Reads modification symbols from CSV files with the header
/// `symbol,mass_delta,indicates_phosphorylation,comment`
///
pub struct Reader {}

impl Reader {
    pub fn read(path: &Path) -> Result<Vec<ModificationSymbol>> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Unable to open {}", path.display()))?;
        let mut modifications: Vec<ModificationSymbol> = Vec::new();
        for (line_idx, record_res) in reader.deserialize().enumerate() {
            let record: ModificationSymbolCsvRecord = record_res?;
            let modification = ModificationSymbol::new(
                &record.symbol,
                record.mass_delta,
                record.indicates_phosphorylation,
                &record.comment,
            )
            .with_context(|| format!("Invalid modification in record {}", line_idx + 1))?;
            modifications.push(modification);
        }
        Ok(modifications)
    }
}

#[cfg(test)]
mod test {
    // internal imports
    use super::*;

    #[test]
    fn test_read() {
        let modification_csv = Path::new("test_files/modifications.csv");
        let modifications = Reader::read(modification_csv).unwrap();

        assert_eq!(modifications.len(), 3);
        assert_eq!(modifications[0].get_symbol(), "*");
        assert!(modifications[0].indicates_phosphorylation());
        assert_eq!(modifications[1].get_symbol(), "^");
        assert!((modifications[1].get_mass_delta() - 229.162932).abs() < 1e-9);
        assert_eq!(modifications[2].get_comment(), "");
    }

    #[test]
    fn test_read_invalid_symbol() {
        let modification_csv = Path::new("test_files/modifications_invalid.csv");
        assert!(Reader::read(modification_csv).is_err());
    }
}
