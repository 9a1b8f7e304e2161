// internal imports
use crate::chemistry::mass_table::MassTable;
use crate::errors::mass_table_error::MassTableError;

/// Standard N-terminal groups
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NTerminusGroup {
    /// Free amine
    #[default]
    Hydrogen,
    HydrogenPlusProton,
    Acetyl,
    PyroGlu,
    Carbamyl,
    Ptc,
    None,
}

impl NTerminusGroup {
    pub const ALL: [NTerminusGroup; 7] = [
        NTerminusGroup::Hydrogen,
        NTerminusGroup::HydrogenPlusProton,
        NTerminusGroup::Acetyl,
        NTerminusGroup::PyroGlu,
        NTerminusGroup::Carbamyl,
        NTerminusGroup::Ptc,
        NTerminusGroup::None,
    ];

    pub fn get_name(&self) -> &'static str {
        match self {
            NTerminusGroup::Hydrogen => "hydrogen",
            NTerminusGroup::HydrogenPlusProton => "hydrogen-plus-proton",
            NTerminusGroup::Acetyl => "acetyl",
            NTerminusGroup::PyroGlu => "pyro-glu",
            NTerminusGroup::Carbamyl => "carbamyl",
            NTerminusGroup::Ptc => "ptc",
            NTerminusGroup::None => "none",
        }
    }

    /// Returns the group with the given name, case insensitive
    ///
    /// # Arguments
    /// * `name` - Group name, e.g. `acetyl`
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|group| group.get_name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn get_formula(&self) -> &'static str {
        match self {
            NTerminusGroup::Hydrogen => "H",
            NTerminusGroup::HydrogenPlusProton => "HH",
            NTerminusGroup::Acetyl => "C2OH3",
            NTerminusGroup::PyroGlu => "C5O2NH6",
            NTerminusGroup::Carbamyl => "CONH2",
            NTerminusGroup::Ptc => "C7H6NS",
            NTerminusGroup::None => "",
        }
    }
}

/// Standard C-terminal groups
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CTerminusGroup {
    /// Free acid
    #[default]
    Hydroxyl,
    Amide,
    None,
}

impl CTerminusGroup {
    pub const ALL: [CTerminusGroup; 3] = [
        CTerminusGroup::Hydroxyl,
        CTerminusGroup::Amide,
        CTerminusGroup::None,
    ];

    pub fn get_name(&self) -> &'static str {
        match self {
            CTerminusGroup::Hydroxyl => "hydroxyl",
            CTerminusGroup::Amide => "amide",
            CTerminusGroup::None => "none",
        }
    }

    /// Returns the group with the given name, case insensitive
    ///
    /// # Arguments
    /// * `name` - Group name, e.g. `amide`
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|group| group.get_name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn get_formula(&self) -> &'static str {
        match self {
            CTerminusGroup::Hydroxyl => "OH",
            CTerminusGroup::Amide => "NH2",
            CTerminusGroup::None => "",
        }
    }
}

/// Chemical cap of one peptide end. The adjacent residue is the residue
/// preceding (N-terminus) or following (C-terminus) the peptide in its protein,
/// it is only used for display.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Terminus {
    formula: String,
    mass: f64,
    adjacent_residue: Option<String>,
}

impl Terminus {
    /// Creates a terminus by resolving the formula with the mass table.
    ///
    /// # Arguments
    /// * `formula` - Chemical formula, e.g. `OH`
    /// * `adjacent_residue` - Optional three letter code of the neighbouring residue
    /// * `mass_table` - Mass table for resolving the formula
    ///
    pub fn from_formula(
        formula: &str,
        adjacent_residue: Option<&str>,
        mass_table: &dyn MassTable,
    ) -> Result<Self, MassTableError> {
        let mass = mass_table.compute_formula_mass(formula)?;
        Ok(Self {
            formula: formula.trim().to_string(),
            // Terminus masses are never negative
            mass: mass.max(0.0),
            adjacent_residue: adjacent_residue.map(|residue| residue.to_string()),
        })
    }

    /// Creates a terminus for a formula which could not be resolved.
    /// The formula is kept for display, the mass is 0.
    ///
    /// # Arguments
    /// * `formula` - Chemical formula
    /// * `adjacent_residue` - Optional three letter code of the neighbouring residue
    ///
    pub fn unresolved(formula: &str, adjacent_residue: Option<&str>) -> Self {
        Self {
            formula: formula.trim().to_string(),
            mass: 0.0,
            adjacent_residue: adjacent_residue.map(|residue| residue.to_string()),
        }
    }

    pub fn get_formula(&self) -> &str {
        &self.formula
    }

    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    pub fn get_adjacent_residue(&self) -> Option<&str> {
        self.adjacent_residue.as_deref()
    }

    /// True if the terminus is a hydrogen plus an additional proton (`HH`)
    ///
    pub fn is_protonated_hydrogen(&self) -> bool {
        self.formula.eq_ignore_ascii_case(NTerminusGroup::HydrogenPlusProton.get_formula())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chemistry::mass_table::DefaultMassTable;

    #[test]
    fn test_group_formulas_resolve() {
        let mass_table = DefaultMassTable::default();
        for group in NTerminusGroup::ALL {
            assert!(Terminus::from_formula(group.get_formula(), None, &mass_table).is_ok());
        }
        for group in CTerminusGroup::ALL {
            assert!(Terminus::from_formula(group.get_formula(), None, &mass_table).is_ok());
        }
    }

    #[test]
    fn test_group_names() {
        for group in NTerminusGroup::ALL {
            assert_eq!(NTerminusGroup::from_name(group.get_name()), Some(group));
        }
        for group in CTerminusGroup::ALL {
            assert_eq!(CTerminusGroup::from_name(group.get_name()), Some(group));
        }
        assert_eq!(NTerminusGroup::from_name(" Acetyl"), Some(NTerminusGroup::Acetyl));
        assert_eq!(CTerminusGroup::from_name("AMIDE"), Some(CTerminusGroup::Amide));
        assert_eq!(NTerminusGroup::from_name("C2OH3"), None);
        assert_eq!(CTerminusGroup::from_name("acetyl"), None);
    }

    #[test]
    fn test_terminus() {
        let mass_table = DefaultMassTable::default();
        let hydroxyl = Terminus::from_formula("OH", Some("Leu"), &mass_table).unwrap();
        assert!((hydroxyl.get_mass() - 17.00273965163).abs() < 1e-9);
        assert_eq!(hydroxyl.get_adjacent_residue(), Some("Leu"));
        assert!(!hydroxyl.is_protonated_hydrogen());

        let protonated = Terminus::from_formula("hH".to_uppercase().as_str(), None, &mass_table).unwrap();
        assert!(protonated.is_protonated_hydrogen());

        assert!(Terminus::from_formula("Q7", None, &mass_table).is_err());
        let unresolved = Terminus::unresolved("Q7", None);
        assert_eq!(unresolved.get_mass(), 0.0);
        assert_eq!(unresolved.get_formula(), "Q7");
    }
}
