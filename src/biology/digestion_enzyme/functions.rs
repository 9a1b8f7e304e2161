/// Defines additional functions for the digestion_enzyme module
///

// 3rd party imports
use anyhow::{bail, Result};

// internal imports
use crate::biology::digestion_enzyme::enzyme::Enzyme;
use crate::biology::digestion_enzyme::generic_enzyme::GenericEnzyme;
use crate::biology::digestion_enzyme::trypsin::{Trypsin, NAME as TRYPSIN_NAME};

/// Returns an enzyme by name
///
/// # Arguments
/// * `name` - Name of the enzyme e.g. "trypsin", "Lys-C" or "peptide-database"
/// * `max_number_of_missed_cleavages` - Maximum number of missed cleavages
/// * `min_peptide_length` - Minimum length of a peptide
/// * `max_peptide_length` - Maximum length of a peptide
///
pub fn get_enzyme_by_name(
    name: &str,
    max_number_of_missed_cleavages: usize,
    min_peptide_length: usize,
    max_peptide_length: usize,
) -> Result<Box<dyn Enzyme>> {
    if name.eq_ignore_ascii_case(TRYPSIN_NAME) {
        return Ok(Box::new(Trypsin::new(
            max_number_of_missed_cleavages,
            min_peptide_length,
            max_peptide_length,
        )));
    }
    match GenericEnzyme::predefined(
        name,
        max_number_of_missed_cleavages,
        min_peptide_length,
        max_peptide_length,
    ) {
        Some(enzyme) => Ok(Box::new(enzyme)),
        None => bail!("Enzyme {} not supported", name),
    }
}
