use thiserror::Error;

/// Errors which might occur when resolving masses
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MassTableError {
    #[error("Invalid chemical formula: '{0}'")]
    InvalidFormula(String),
    #[error("Unknown element '{0}' in formula '{1}'")]
    UnknownElement(String, String),
    #[error("Invalid element count '{0}' in formula '{1}'")]
    InvalidElementCount(String, String),
    #[error("Formula regex error: {0}")]
    RegexError(String),
}
