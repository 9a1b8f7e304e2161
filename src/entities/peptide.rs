// std imports
use std::sync::Arc;

// 3rd party imports
use tracing::warn;

// internal imports
use crate::chemistry::amino_acid::UNKNOWN;
use crate::chemistry::mass_table::{DefaultMassTable, MassTable};
use crate::chemistry::molecule::{StandardMasses, PROTON_MASS};
use crate::entities::fragmentation_options::FragmentationSpectrumOptions;
use crate::entities::fragmentation_spectrum_data::FragmentationSpectrumData;
use crate::entities::ion_type::IonType;
use crate::entities::modification_symbol::{ModificationRegistry, ModificationSymbol};
use crate::entities::residue::Residue;
use crate::entities::terminus::{CTerminusGroup, NTerminusGroup, Terminus};
use crate::errors::mass_table_error::MassTableError;
use crate::errors::peptide_error::PeptideError;
use crate::functions::fragmentation::get_fragmentation_masses;
use crate::functions::mass_propagation::{propagate_masses, PropagationContext};
use crate::functions::sequence_formatter::{format_sequence, SequenceFormatOptions};
use crate::functions::sequence_parser::{parse_sequence, SequenceParseOptions};
use crate::mass::convert::convolute_mass;

/// Peptide sequence model with termini, modification symbols and fragmentation options.
/// Masses are recalculated after each modifying call, so all getters return current values.
///
#[derive(Clone, Debug)]
pub struct Peptide {
    mass_table: Arc<dyn MassTable + Send + Sync>,
    standard_masses: StandardMasses,
    residues: Vec<Residue>,
    n_terminus: Terminus,
    c_terminus: Terminus,
    modifications: ModificationRegistry,
    fragmentation_options: FragmentationSpectrumOptions,
    charge_carrier_mass: f64,
    total_mass: f64,
}

impl Peptide {
    /// Creates an empty peptide using monoisotopic masses
    ///
    pub fn new() -> Self {
        Self::with_mass_table(Arc::new(DefaultMassTable::default()))
    }

    /// Creates an empty peptide with free amine and free acid termini
    /// and the default modification symbols.
    ///
    /// # Arguments
    /// * `mass_table` - Mass table for residue and formula masses
    ///
    pub fn with_mass_table(mass_table: Arc<dyn MassTable + Send + Sync>) -> Self {
        let standard_masses = StandardMasses::from_mass_table(mass_table.as_ref());
        let n_terminus =
            resolve_terminus(NTerminusGroup::Hydrogen.get_formula(), None, mass_table.as_ref());
        let c_terminus =
            resolve_terminus(CTerminusGroup::Hydroxyl.get_formula(), None, mass_table.as_ref());
        Self {
            mass_table,
            standard_masses,
            residues: Vec::new(),
            n_terminus,
            c_terminus,
            modifications: ModificationRegistry::with_defaults(),
            fragmentation_options: FragmentationSpectrumOptions::default(),
            charge_carrier_mass: PROTON_MASS,
            total_mass: 0.0,
        }
    }

    /// Replaces the mass table, e.g. to switch between monoisotopic and average masses.
    /// Termini are resolved again with their current formulas.
    ///
    /// # Arguments
    /// * `mass_table` - Mass table
    ///
    pub fn set_mass_table(&mut self, mass_table: Arc<dyn MassTable + Send + Sync>) {
        self.standard_masses = StandardMasses::from_mass_table(mass_table.as_ref());
        self.n_terminus = resolve_terminus(
            self.n_terminus.get_formula(),
            self.n_terminus.get_adjacent_residue(),
            mass_table.as_ref(),
        );
        self.c_terminus = resolve_terminus(
            self.c_terminus.get_formula(),
            self.c_terminus.get_adjacent_residue(),
            mass_table.as_ref(),
        );
        self.mass_table = mass_table;
        self.update_masses();
    }

    pub fn get_mass_table(&self) -> &dyn MassTable {
        self.mass_table.as_ref()
    }

    pub fn get_standard_masses(&self) -> &StandardMasses {
        &self.standard_masses
    }

    /// Replaces the residues with the given sequence and sets the termini.
    /// An empty sequence clears the peptide and results in an error.
    /// Unknown residues never fail, they become `Xxx`.
    /// If a terminus formula cannot be resolved the residues are still set.
    ///
    /// # Arguments
    /// * `sequence` - Sequence in one or three letter code, optionally with modification symbols
    /// * `options` - Parse options
    ///
    pub fn set_sequence(
        &mut self,
        sequence: &str,
        options: &SequenceParseOptions,
    ) -> Result<(), PeptideError> {
        if sequence.trim().is_empty() {
            self.clear();
            return Err(PeptideError::EmptySequence);
        }
        self.residues = parse_sequence(
            sequence,
            options,
            self.mass_table.as_ref(),
            &mut self.modifications,
        );
        let n_terminus_result = self.set_n_terminus_group(options.n_terminus, None);
        let c_terminus_result = self.set_c_terminus_group(options.c_terminus, None);
        n_terminus_result.and(c_terminus_result)
    }

    /// Returns the sequence as string
    ///
    /// # Arguments
    /// * `options` - Format options
    ///
    pub fn get_sequence(&self, options: &SequenceFormatOptions) -> String {
        format_sequence(
            &self.residues,
            &self.n_terminus,
            &self.c_terminus,
            &self.modifications,
            self.mass_table.as_ref(),
            options,
        )
    }

    /// Removes all residues
    ///
    pub fn clear(&mut self) {
        self.residues.clear();
        self.update_masses();
    }

    /// Replaces the residue at the given index or appends it if the index is
    /// behind the last residue. Returns the index of the residue.
    /// A replaced residue loses its modifications.
    ///
    /// # Arguments
    /// * `index` - 0-based index
    /// * `symbol` - Residue code, unknown codes become `Xxx`
    /// * `is_3_letter_code` - True if `symbol` is a three letter code
    /// * `phosphorylated` - Phosphorylation flag
    ///
    pub fn set_residue(
        &mut self,
        index: usize,
        symbol: &str,
        is_3_letter_code: bool,
        phosphorylated: bool,
    ) -> Result<usize, PeptideError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(PeptideError::EmptyResidueSymbol);
        }
        let three_letter_code = if is_3_letter_code {
            self.mass_table.get_three_letter_code(symbol)
        } else {
            symbol
                .chars()
                .next()
                .and_then(|code| self.mass_table.one_letter_to_three_letter(code))
        }
        .unwrap_or(UNKNOWN.get_three_letter_code());
        let residue = Residue::new(three_letter_code, phosphorylated);

        let index = if index < self.residues.len() {
            self.residues[index] = residue;
            index
        } else {
            self.residues.push(residue);
            self.residues.len() - 1
        };
        self.update_masses();
        Ok(index)
    }

    pub fn get_residue(&self, index: usize) -> Option<&Residue> {
        self.residues.get(index)
    }

    pub fn get_residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn get_residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Counts the occurrences of the given residue
    ///
    /// # Arguments
    /// * `symbol` - Residue code
    /// * `is_3_letter_code` - True if `symbol` is a three letter code
    ///
    pub fn get_residue_count_specific_residue(&self, symbol: &str, is_3_letter_code: bool) -> usize {
        let three_letter_code = if is_3_letter_code {
            self.mass_table.get_three_letter_code(symbol.trim())
        } else {
            symbol
                .trim()
                .chars()
                .next()
                .and_then(|code| self.mass_table.one_letter_to_three_letter(code))
        };
        match three_letter_code {
            Some(code) => self
                .residues
                .iter()
                .filter(|residue| residue.get_symbol() == code)
                .count(),
            None => 0,
        }
    }

    /// Removes the residue at the given index
    ///
    /// # Arguments
    /// * `index` - 0-based index
    ///
    pub fn remove_residue(&mut self, index: usize) -> Result<Residue, PeptideError> {
        if index >= self.residues.len() {
            return Err(PeptideError::ResidueIndexOutOfRange(index, self.residues.len()));
        }
        let residue = self.residues.remove(index);
        self.update_masses();
        Ok(residue)
    }

    /// Replaces the modifications of a residue. Unknown modification IDs are logged and skipped.
    /// The residue becomes phosphorylated if one of the modifications indicates phosphorylation.
    ///
    /// # Arguments
    /// * `index` - 0-based residue index
    /// * `modification_ids` - IDs of registered modifications
    ///
    pub fn set_residue_modifications(
        &mut self,
        index: usize,
        modification_ids: &[usize],
    ) -> Result<(), PeptideError> {
        let residue_count = self.residues.len();
        let residue = self
            .residues
            .get_mut(index)
            .ok_or(PeptideError::ResidueIndexOutOfRange(index, residue_count))?;
        residue.clear_modification_ids();
        for id in modification_ids {
            let modification = match self.modifications.get(*id) {
                Some(modification) => modification,
                None => {
                    warn!(
                        "{}",
                        PeptideError::ModificationIdOutOfRange(*id, self.modifications.len())
                    );
                    continue;
                }
            };
            if !residue.add_modification_id(*id) {
                warn!(
                    "Residue {} already carries the maximum number of modifications, dropping modification {}",
                    index, id
                );
                break;
            }
            if modification.indicates_phosphorylation() {
                residue.set_phosphorylated(true);
            }
        }
        self.update_masses();
        Ok(())
    }

    /// Adds or updates a modification symbol. Returns its ID.
    ///
    /// # Arguments
    /// * `symbol` - One or more modification symbol characters
    /// * `mass_delta` - Mass added to the modified residue
    /// * `indicates_phosphorylation` - True if the modification is a phosphorylation
    /// * `comment` - Free text
    ///
    pub fn set_modification_symbol(
        &mut self,
        symbol: &str,
        mass_delta: f64,
        indicates_phosphorylation: bool,
        comment: &str,
    ) -> Result<usize, PeptideError> {
        let id = self
            .modifications
            .set(symbol, mass_delta, indicates_phosphorylation, comment)?;
        self.update_masses();
        Ok(id)
    }

    /// Adds or updates multiple modification symbols, e.g. read from a CSV file
    ///
    /// # Arguments
    /// * `modifications` - Modification symbols
    ///
    pub fn add_modification_symbols(&mut self, modifications: Vec<ModificationSymbol>) {
        for modification in modifications {
            self.modifications.insert(modification);
        }
        self.update_masses();
    }

    pub fn get_modification_symbol(&self, id: usize) -> Option<&ModificationSymbol> {
        self.modifications.get(id)
    }

    pub fn get_modification_symbol_id(&self, symbol: &str) -> Option<usize> {
        self.modifications.get_id(symbol)
    }

    pub fn get_modification_symbol_count(&self) -> usize {
        self.modifications.len()
    }

    pub fn get_modification_symbols(&self) -> &ModificationRegistry {
        &self.modifications
    }

    /// Removes a modification symbol and its references in all residues.
    /// Returns the removed modification or `None` if the symbol is not registered.
    ///
    /// # Arguments
    /// * `symbol` - Modification symbol
    ///
    pub fn remove_modification_symbol(&mut self, symbol: &str) -> Option<ModificationSymbol> {
        let id = self.modifications.get_id(symbol)?;
        self.remove_modification_symbol_by_id(id).ok()
    }

    /// Removes a modification symbol by ID and its references in all residues.
    /// IDs of the following modifications shift down by one.
    ///
    /// # Arguments
    /// * `id` - Modification ID
    ///
    pub fn remove_modification_symbol_by_id(
        &mut self,
        id: usize,
    ) -> Result<ModificationSymbol, PeptideError> {
        let modification = self.modifications.remove(id)?;
        for residue in self.residues.iter_mut() {
            residue.shift_modification_ids(id);
        }
        self.update_masses();
        Ok(modification)
    }

    /// Removes all modification symbols and all residue modifications
    ///
    pub fn remove_all_modification_symbols(&mut self) {
        self.modifications.clear();
        for residue in self.residues.iter_mut() {
            residue.clear_modification_ids();
        }
        self.update_masses();
    }

    /// Resets the modification symbols to the defaults. Residue modifications are removed.
    ///
    pub fn set_default_modification_symbols(&mut self) {
        self.remove_all_modification_symbols();
        self.modifications = ModificationRegistry::with_defaults();
    }

    /// Sets the N-terminus by formula. If the formula cannot be resolved the
    /// terminus mass is 0 and an error is returned.
    ///
    /// # Arguments
    /// * `formula` - Chemical formula, e.g. `C2OH3`
    /// * `preceding_residue` - Optional residue preceding the peptide, display only
    ///
    pub fn set_n_terminus(
        &mut self,
        formula: &str,
        preceding_residue: Option<&str>,
    ) -> Result<(), PeptideError> {
        let result = Terminus::from_formula(formula, preceding_residue, self.mass_table.as_ref());
        let (terminus, result) = into_terminus(formula, preceding_residue, result);
        self.n_terminus = terminus;
        self.update_masses();
        result
    }

    /// Sets the C-terminus by formula. If the formula cannot be resolved the
    /// terminus mass is 0 and an error is returned.
    ///
    /// # Arguments
    /// * `formula` - Chemical formula, e.g. `NH2`
    /// * `following_residue` - Optional residue following the peptide, display only
    ///
    pub fn set_c_terminus(
        &mut self,
        formula: &str,
        following_residue: Option<&str>,
    ) -> Result<(), PeptideError> {
        let result = Terminus::from_formula(formula, following_residue, self.mass_table.as_ref());
        let (terminus, result) = into_terminus(formula, following_residue, result);
        self.c_terminus = terminus;
        self.update_masses();
        result
    }

    pub fn set_n_terminus_group(
        &mut self,
        group: NTerminusGroup,
        preceding_residue: Option<&str>,
    ) -> Result<(), PeptideError> {
        self.set_n_terminus(group.get_formula(), preceding_residue)
    }

    pub fn set_c_terminus_group(
        &mut self,
        group: CTerminusGroup,
        following_residue: Option<&str>,
    ) -> Result<(), PeptideError> {
        self.set_c_terminus(group.get_formula(), following_residue)
    }

    pub fn get_n_terminus(&self) -> &Terminus {
        &self.n_terminus
    }

    pub fn get_c_terminus(&self) -> &Terminus {
        &self.c_terminus
    }

    /// Sets the mass added per charge, a proton by default
    ///
    /// # Arguments
    /// * `charge_carrier_mass` - Mass
    ///
    pub fn set_charge_carrier_mass(&mut self, charge_carrier_mass: f64) {
        self.charge_carrier_mass = charge_carrier_mass;
        self.update_masses();
    }

    pub fn get_charge_carrier_mass(&self) -> f64 {
        self.charge_carrier_mass
    }

    /// Returns the neutral peptide mass, 0 if no residue has a mass
    ///
    pub fn get_peptide_mass(&self) -> f64 {
        self.total_mass
    }

    /// Returns the m/z of the peptide for the given charge
    ///
    /// # Arguments
    /// * `charge` - Charge, 0 returns the neutral mass
    ///
    pub fn get_peptide_mass_mz(&self, charge: u8) -> f64 {
        if self.total_mass == 0.0 {
            return 0.0;
        }
        convolute_mass(self.total_mass, 0, charge, self.charge_carrier_mass)
    }

    pub fn get_fragmentation_spectrum_options(&self) -> &FragmentationSpectrumOptions {
        &self.fragmentation_options
    }

    pub fn set_fragmentation_spectrum_options(&mut self, options: FragmentationSpectrumOptions) {
        self.fragmentation_options = options;
    }

    pub fn reset_fragmentation_spectrum_options(&mut self) {
        self.fragmentation_options = FragmentationSpectrumOptions::default();
    }

    /// Returns the symbol used for the ion type in fragment ion labels, e.g. `y`
    ///
    /// # Arguments
    /// * `ion_type` - Ion type
    ///
    pub fn lookup_ion_type_string(ion_type: IonType) -> &'static str {
        ion_type.get_symbol()
    }

    /// Returns the theoretical fragment spectrum sorted by mass
    ///
    pub fn get_fragmentation_masses(&self) -> Vec<FragmentationSpectrumData> {
        get_fragmentation_masses(
            &self.residues,
            &self.fragmentation_options,
            &self.standard_masses,
            self.charge_carrier_mass,
        )
    }

    fn update_masses(&mut self) {
        let context = PropagationContext {
            n_terminus: &self.n_terminus,
            c_terminus: &self.c_terminus,
            modifications: &self.modifications,
            mass_table: self.mass_table.as_ref(),
            standard_masses: &self.standard_masses,
            charge_carrier_mass: self.charge_carrier_mass,
        };
        self.total_mass = propagate_masses(&mut self.residues, &context);
    }
}

impl Default for Peptide {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a terminus, falling back to mass 0 if the formula is invalid
///
fn resolve_terminus(
    formula: &str,
    adjacent_residue: Option<&str>,
    mass_table: &dyn MassTable,
) -> Terminus {
    let result = Terminus::from_formula(formula, adjacent_residue, mass_table);
    let (terminus, result) = into_terminus(formula, adjacent_residue, result);
    if let Err(err) = result {
        warn!("{}", err);
    }
    terminus
}

fn into_terminus(
    formula: &str,
    adjacent_residue: Option<&str>,
    result: Result<Terminus, MassTableError>,
) -> (Terminus, Result<(), PeptideError>) {
    match result {
        Ok(terminus) => (terminus, Ok(())),
        Err(err) => (
            Terminus::unresolved(formula, adjacent_residue),
            Err(PeptideError::InvalidTerminusFormula(formula.to_string(), err)),
        ),
    }
}
