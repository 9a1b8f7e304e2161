/// Configuration of the theoretical fragment spectrum
pub mod fragmentation_options;
/// Peaks of the theoretical fragment spectrum
pub mod fragmentation_spectrum_data;
/// Fragment ion types and arrays indexed by them
pub mod ion_type;
/// Modification symbols and their registry
pub mod modification_symbol;
/// Structs and functions for working with peptide entities.
pub mod peptide;
pub mod residue;
/// N- and C-terminal groups
pub mod terminus;
