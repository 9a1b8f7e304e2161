// std imports
use std::fmt::Debug;

// 3rd party imports
use fancy_regex::Regex;

// internal imports
use crate::chemistry::amino_acid::AminoAcid;
use crate::chemistry::element::Element;
use crate::entities::modification_symbol::is_modification_symbol_char;
use crate::errors::mass_table_error::MassTableError;

lazy_static! {
    /// A formula is a sequence of element symbols, each with an optional count, e.g. `C2OH3`
    static ref FORMULA_VALIDATION_REGEX: Regex = Regex::new(r"^(?:[A-Z][a-z]?\d*)*$").unwrap();
    static ref FORMULA_ELEMENT_REGEX: Regex = Regex::new(r"([A-Z][a-z]?)(\d*)").unwrap();
}

/// Whether monoisotopic or average masses are used
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MassMode {
    #[default]
    Monoisotopic,
    Average,
}

/// Lookup service for residue and formula masses, and amino acid code conversion.
/// The peptide model only talks to this trait, so the mass source can be exchanged.
///
pub trait MassTable: Debug {
    /// Returns the mass mode the table resolves masses with
    fn get_mass_mode(&self) -> MassMode;

    /// Returns the mass of the given residue or `None` if the
    /// residue is unknown or has no mass.
    ///
    /// # Arguments
    /// * `three_letter_code` - Three letter code, e.g. `Gly`
    ///
    fn get_residue_mass(&self, three_letter_code: &str) -> Option<f64>;

    /// Computes the mass of the given chemical formula.
    /// An empty formula has a mass of 0.
    ///
    /// # Arguments
    /// * `formula` - Chemical formula, e.g. `H3PO4`
    ///
    fn compute_formula_mass(&self, formula: &str) -> Result<f64, MassTableError>;

    /// Returns the canonical three letter code if the given code is an amino acid
    ///
    /// # Arguments
    /// * `three_letter_code` - Three letter code in any case, e.g. `GLY`
    ///
    fn get_three_letter_code(&self, three_letter_code: &str) -> Option<&str>;

    /// Converts a one letter code to a three letter code
    ///
    /// # Arguments
    /// * `one_letter_code` - One letter code in any case
    ///
    fn one_letter_to_three_letter(&self, one_letter_code: char) -> Option<&str>;

    /// Converts a three letter code to a one letter code
    ///
    /// # Arguments
    /// * `three_letter_code` - Three letter code in any case
    ///
    fn three_letter_to_one_letter(&self, three_letter_code: &str) -> Option<char>;

    /// Returns true if the character can be part of a modification symbol
    ///
    /// # Arguments
    /// * `character` - Character to check
    ///
    fn is_modification_symbol_char(&self, character: char) -> bool {
        is_modification_symbol_char(character)
    }
}

/// Mass table based on the built-in amino acid and element tables.
/// Supports plain element formulas (no parentheses or abbreviations).
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultMassTable {
    mass_mode: MassMode,
}

impl DefaultMassTable {
    /// Creates a new mass table
    ///
    /// # Arguments
    /// * `mass_mode` - Monoisotopic or average masses
    ///
    pub fn new(mass_mode: MassMode) -> Self {
        Self { mass_mode }
    }

    fn get_element_mass(&self, element: &Element) -> f64 {
        match self.mass_mode {
            MassMode::Monoisotopic => element.get_mono_mass(),
            MassMode::Average => element.get_average_mass(),
        }
    }
}

impl MassTable for DefaultMassTable {
    fn get_mass_mode(&self) -> MassMode {
        self.mass_mode
    }

    fn get_residue_mass(&self, three_letter_code: &str) -> Option<f64> {
        let amino_acid = AminoAcid::get_by_three_letter_code(three_letter_code)?;
        if amino_acid.is_unknown() {
            return None;
        }
        match self.mass_mode {
            MassMode::Monoisotopic => Some(amino_acid.get_mono_mass()),
            MassMode::Average => Some(amino_acid.get_average_mass()),
        }
    }

    fn compute_formula_mass(&self, formula: &str) -> Result<f64, MassTableError> {
        let formula = formula.trim();
        if !FORMULA_VALIDATION_REGEX
            .is_match(formula)
            .map_err(|err| MassTableError::RegexError(err.to_string()))?
        {
            return Err(MassTableError::InvalidFormula(formula.to_string()));
        }

        let mut mass = 0.0;
        for captures in FORMULA_ELEMENT_REGEX.captures_iter(formula) {
            let captures = captures.map_err(|err| MassTableError::RegexError(err.to_string()))?;
            let symbol = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            let count = match captures.get(2).map(|m| m.as_str()).unwrap_or_default() {
                "" => 1,
                count => count.parse::<u32>().map_err(|_| {
                    MassTableError::InvalidElementCount(count.to_string(), formula.to_string())
                })?,
            };
            let element = Element::get_by_symbol(symbol).ok_or_else(|| {
                MassTableError::UnknownElement(symbol.to_string(), formula.to_string())
            })?;
            mass += self.get_element_mass(element) * count as f64;
        }
        Ok(mass)
    }

    fn get_three_letter_code(&self, three_letter_code: &str) -> Option<&str> {
        AminoAcid::get_by_three_letter_code(three_letter_code)
            .map(|amino_acid| amino_acid.get_three_letter_code())
    }

    fn one_letter_to_three_letter(&self, one_letter_code: char) -> Option<&str> {
        AminoAcid::get_by_one_letter_code(one_letter_code)
            .map(|amino_acid| amino_acid.get_three_letter_code())
    }

    fn three_letter_to_one_letter(&self, three_letter_code: &str) -> Option<char> {
        AminoAcid::get_by_three_letter_code(three_letter_code)
            .map(|amino_acid| amino_acid.get_one_letter_code())
    }
}
