// # Create absolute path to readme ti increase compatible for different build targets
//  https://gist.github.com/JakeHartnell/2c1fa387f185f5dc46c9429470a2e2be
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Readme.md"))]

// 3rd party imports
#[allow(unused_imports)]
#[macro_use]
extern crate lazy_static;

/// Contains mass related functions
pub mod mass;

/// Biology related functions, e.g. digestion enzymes and cleavage rules
pub mod biology;
/// Chemistry related functions and information, e.g. element and residue masses
pub mod chemistry;
/// Contains different entities, e.g. peptides, residues, fragment ions
pub mod entities;
/// Errors of the library
pub mod errors;
/// Sequence parsing and formatting, mass propagation and fragmentation
pub mod functions;
/// Input and output functions
pub mod io;
