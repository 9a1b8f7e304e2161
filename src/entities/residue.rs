// internal imports
use crate::entities::ion_type::IonTypeArray;
use crate::entities::modification_symbol::MAX_MODIFICATIONS;

/// One amino acid occurrence within a peptide.
/// The masses are maintained by the mass propagation of the owning peptide.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Residue {
    symbol: String,
    mass: f64,
    mass_with_mods: f64,
    ion_mass: IonTypeArray<f64>,
    phosphorylated: bool,
    modification_ids: Vec<usize>,
}

impl Residue {
    /// Creates a new residue without masses
    ///
    /// # Arguments
    /// * `symbol` - Three letter code, `Xxx` for unknown residues
    /// * `phosphorylated` - Phosphorylation flag
    ///
    pub fn new(symbol: &str, phosphorylated: bool) -> Self {
        Self {
            symbol: symbol.to_string(),
            mass: 0.0,
            mass_with_mods: 0.0,
            ion_mass: IonTypeArray::default(),
            phosphorylated,
            modification_ids: Vec::with_capacity(MAX_MODIFICATIONS),
        }
    }

    pub fn get_symbol(&self) -> &str {
        &self.symbol
    }

    /// Unmodified mass, 0 if the residue could not be resolved
    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    pub fn get_mass_with_mods(&self) -> f64 {
        self.mass_with_mods
    }

    pub fn get_ion_mass(&self) -> &IonTypeArray<f64> {
        &self.ion_mass
    }

    pub fn is_phosphorylated(&self) -> bool {
        self.phosphorylated
    }

    pub fn get_modification_ids(&self) -> &[usize] {
        &self.modification_ids
    }

    pub fn set_phosphorylated(&mut self, phosphorylated: bool) {
        self.phosphorylated = phosphorylated;
    }

    /// Attaches a modification. Returns false if the residue already carries
    /// the maximum number of modifications.
    ///
    /// # Arguments
    /// * `modification_id` - ID in the modification registry
    ///
    pub fn add_modification_id(&mut self, modification_id: usize) -> bool {
        if self.modification_ids.len() >= MAX_MODIFICATIONS {
            return false;
        }
        self.modification_ids.push(modification_id);
        true
    }

    pub fn clear_modification_ids(&mut self) {
        self.modification_ids.clear();
    }

    /// Drops references to a removed modification and shifts all higher IDs down by one
    ///
    /// # Arguments
    /// * `removed_id` - ID of the removed modification
    ///
    pub fn shift_modification_ids(&mut self, removed_id: usize) {
        self.modification_ids.retain(|id| *id != removed_id);
        for id in self.modification_ids.iter_mut() {
            if *id > removed_id {
                *id -= 1;
            }
        }
    }

    pub(crate) fn set_masses(&mut self, mass: f64, mass_with_mods: f64) {
        self.mass = mass;
        self.mass_with_mods = mass_with_mods;
    }

    pub(crate) fn get_ion_mass_mut(&mut self) -> &mut IonTypeArray<f64> {
        &mut self.ion_mass
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_modification_limit() {
        let mut residue = Residue::new("Ser", false);
        for id in 0..MAX_MODIFICATIONS {
            assert!(residue.add_modification_id(id));
        }
        assert!(!residue.add_modification_id(0));
        assert_eq!(residue.get_modification_ids().len(), MAX_MODIFICATIONS);
    }

    #[test]
    fn test_shift_modification_ids() {
        let mut residue = Residue::new("Ser", false);
        residue.add_modification_id(0);
        residue.add_modification_id(2);
        residue.add_modification_id(3);
        residue.shift_modification_ids(2);
        assert_eq!(residue.get_modification_ids(), &[0, 2]);
    }
}
