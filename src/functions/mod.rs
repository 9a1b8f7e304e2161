/// Theoretical fragment spectrum generation
pub mod fragmentation;
/// Residue and ion mass calculation
pub mod mass_propagation;
/// Turns residues back into sequence strings
pub mod sequence_formatter;
/// Parsing of sequences in one or three letter code, including modification symbols
pub mod sequence_parser;
