// std imports
use std::cmp::Ordering;

// 3rd party imports
use serde::{Deserialize, Serialize};

// internal imports
use crate::entities::ion_type::IonType;

/// Prefix of shoulder ion symbols
pub const SHOULDER_ION_PREFIX: &str = "Shoulder-";

/// One predicted peak of a fragment spectrum
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FragmentationSpectrumData {
    mass: f64,
    intensity: f64,
    symbol: String,
    symbol_generic: String,
    source_residue_index: usize,
    source_residue_symbol: String,
    charge: u8,
    ion_type: IonType,
    is_shoulder_ion: bool,
}

impl FragmentationSpectrumData {
    /// Creates a new peak
    ///
    /// # Arguments
    /// * `mass` - m/z
    /// * `intensity` - Intensity
    /// * `symbol` - Symbol including residue number, e.g. `y3++`
    /// * `symbol_generic` - Symbol without residue number, e.g. `y++`
    /// * `source_residue_index` - 0-based index of the residue the ion was generated for
    /// * `source_residue_symbol` - Three letter code of that residue
    /// * `charge` - Charge
    /// * `ion_type` - Ion type
    /// * `is_shoulder_ion` - True for shoulder ions
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mass: f64,
        intensity: f64,
        symbol: String,
        symbol_generic: String,
        source_residue_index: usize,
        source_residue_symbol: String,
        charge: u8,
        ion_type: IonType,
        is_shoulder_ion: bool,
    ) -> Self {
        Self {
            mass,
            intensity,
            symbol,
            symbol_generic,
            source_residue_index,
            source_residue_symbol,
            charge,
            ion_type,
            is_shoulder_ion,
        }
    }

    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    pub fn get_intensity(&self) -> f64 {
        self.intensity
    }

    pub fn get_symbol(&self) -> &str {
        &self.symbol
    }

    pub fn get_symbol_generic(&self) -> &str {
        &self.symbol_generic
    }

    pub fn get_source_residue_index(&self) -> usize {
        self.source_residue_index
    }

    pub fn get_source_residue_symbol(&self) -> &str {
        &self.source_residue_symbol
    }

    pub fn get_charge(&self) -> u8 {
        self.charge
    }

    pub fn get_ion_type(&self) -> IonType {
        self.ion_type
    }

    pub fn is_shoulder_ion(&self) -> bool {
        self.is_shoulder_ion
    }
}

/// Peaks are ordered by mass only
impl PartialOrd for FragmentationSpectrumData {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.mass.partial_cmp(&other.mass)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_order_by_mass() {
        let light = FragmentationSpectrumData::new(
            100.0, 100.0, "b1".to_string(), "b".to_string(), 0, "Gly".to_string(), 1, IonType::B, false,
        );
        let heavy = FragmentationSpectrumData::new(
            200.0, 1.0, "a1".to_string(), "a".to_string(), 0, "Gly".to_string(), 1, IonType::A, false,
        );
        assert!(light < heavy);
        assert_eq!(heavy.get_symbol_generic(), "a");
    }
}
