/// Information about amino acids
pub mod amino_acid;
/// Element masses
pub mod element;
/// Mass lookup service for residues and chemical formulas
pub mod mass_table;
/// Information about additional molecules, e.g water
pub mod molecule;
