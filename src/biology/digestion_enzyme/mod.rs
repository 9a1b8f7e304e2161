/// Cleavage rules, tryptic names and protein fragmentation
pub mod cleavage_rule;
/// Trait definition for digestion enzymes
pub mod enzyme;
/// Enzymes defined by an arbitrary cleavage rule
pub mod generic_enzyme;
/// Trypsin
pub mod trypsin;
/// Functions to retrieve enzymes by name
pub mod functions; // publish this last
