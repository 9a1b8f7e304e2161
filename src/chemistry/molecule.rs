// 3rd party imports
use tracing::warn;

// internal imports
use crate::chemistry::mass_table::MassTable;

/// Mass of a proton, the default charge carrier
pub const PROTON_MASS: f64 = 1.00727649;

pub const HYDROGEN_FORMULA: &str = "H";
pub const WATER_FORMULA: &str = "H2O";
pub const AMMONIA_FORMULA: &str = "NH3";
pub const PHOSPHORIC_ACID_FORMULA: &str = "H3PO4";
/// Difference between a b-ion and the corresponding a-ion
pub const CARBON_MONOXIDE_FORMULA: &str = "CO";

/// Masses of the small molecules needed for ion mass calculation,
/// resolved once per mass table.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandardMasses {
    hydrogen: f64,
    water: f64,
    ammonia: f64,
    phosphoric_acid: f64,
    immonium_difference: f64,
    phosphorylation: f64,
}

impl StandardMasses {
    /// Resolves the standard masses with the given mass table.
    /// A formula the table cannot resolve is logged and counted with a mass of 0.
    ///
    /// # Arguments
    /// * `mass_table` - Mass table used for the formula lookups
    ///
    pub fn from_mass_table(mass_table: &dyn MassTable) -> Self {
        let resolve = |formula: &str| match mass_table.compute_formula_mass(formula) {
            Ok(mass) => mass,
            Err(err) => {
                warn!("Unable to resolve standard molecule {}: {}", formula, err);
                0.0
            }
        };
        let water = resolve(WATER_FORMULA);
        let phosphoric_acid = resolve(PHOSPHORIC_ACID_FORMULA);
        Self {
            hydrogen: resolve(HYDROGEN_FORMULA),
            water,
            ammonia: resolve(AMMONIA_FORMULA),
            phosphoric_acid,
            immonium_difference: resolve(CARBON_MONOXIDE_FORMULA),
            phosphorylation: phosphoric_acid - water,
        }
    }

    pub fn get_hydrogen(&self) -> f64 {
        self.hydrogen
    }

    pub fn get_water(&self) -> f64 {
        self.water
    }

    pub fn get_ammonia(&self) -> f64 {
        self.ammonia
    }

    pub fn get_phosphoric_acid(&self) -> f64 {
        self.phosphoric_acid
    }

    pub fn get_immonium_difference(&self) -> f64 {
        self.immonium_difference
    }

    /// Mass added to a residue flagged as phosphorylated (HPO3)
    pub fn get_phosphorylation(&self) -> f64 {
        self.phosphorylation
    }
}
