use thiserror::Error;

// internal imports
use crate::errors::mass_table_error::MassTableError;

/// Errors which might occur while building or modifying a peptide.
/// None of them leave the peptide in an invalid state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PeptideError {
    #[error("Sequence is empty")]
    EmptySequence,
    #[error("Residue symbol is empty")]
    EmptyResidueSymbol,
    #[error("Residue index {0} out of range (residue count: {1})")]
    ResidueIndexOutOfRange(usize, usize),
    #[error("Invalid terminus formula '{0}': {1}")]
    InvalidTerminusFormula(String, MassTableError),
    #[error("Invalid modification symbol '{0}', letters, digits, spaces, '-' and '.' are not allowed")]
    InvalidModificationSymbol(String),
    #[error("Modification ID {0} out of range (modification count: {1})")]
    ModificationIdOutOfRange(usize, usize),
    #[error("Unknown ion type '{0}'")]
    UnknownIonType(String),
}
