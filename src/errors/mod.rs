/// Errors of the chemical mass lookups
pub mod mass_table_error;

/// Errors of the peptide sequence model
pub mod peptide_error;
