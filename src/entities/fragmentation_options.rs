// 3rd party imports
use serde::{Deserialize, Serialize};

// internal imports
use crate::entities::ion_type::{IonType, IonTypeArray};

/// Display and neutral loss switches of one ion type
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IonTypeOptions {
    pub show_ion: bool,
    pub neutral_loss_water: bool,
    pub neutral_loss_ammonia: bool,
    pub neutral_loss_phosphate: bool,
}

impl Default for IonTypeOptions {
    fn default() -> Self {
        Self {
            show_ion: true,
            neutral_loss_water: true,
            neutral_loss_ammonia: true,
            neutral_loss_phosphate: true,
        }
    }
}

/// Peak intensities. Negative values are allowed, e.g. for inverted plots.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityOptions {
    pub ion_type: IonTypeArray<f64>,
    pub shoulder_ion: f64,
    pub neutral_loss: f64,
}

impl Default for IntensityOptions {
    fn default() -> Self {
        Self {
            ion_type: IonTypeArray::from_fn(|ion_type| match ion_type {
                IonType::A => 20.0,
                IonType::B | IonType::C | IonType::Y | IonType::Z => 100.0,
            }),
            shoulder_ion: 50.0,
            neutral_loss: 20.0,
        }
    }
}

/// Configuration of the theoretical fragment spectrum
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentationSpectrumOptions {
    pub intensity_options: IntensityOptions,
    pub ion_type_options: IonTypeArray<IonTypeOptions>,
    pub water_loss_symbol: String,
    pub ammonia_loss_symbol: String,
    pub phosphate_loss_symbol: String,
    pub double_charge_ions_show: bool,
    /// Minimum singly charged mass for emitting 2+ ions
    pub double_charge_ions_threshold: f64,
    pub triple_charge_ions_show: bool,
    /// Minimum singly charged mass for emitting 3+ ions
    pub triple_charge_ions_threshold: f64,
}

impl Default for FragmentationSpectrumOptions {
    fn default() -> Self {
        Self {
            intensity_options: IntensityOptions::default(),
            ion_type_options: IonTypeArray::from_fn(|ion_type| match ion_type {
                IonType::A => IonTypeOptions {
                    neutral_loss_water: false,
                    ..IonTypeOptions::default()
                },
                IonType::B | IonType::Y => IonTypeOptions::default(),
                IonType::C | IonType::Z => IonTypeOptions {
                    show_ion: false,
                    ..IonTypeOptions::default()
                },
            }),
            water_loss_symbol: "-H2O".to_string(),
            ammonia_loss_symbol: "-NH3".to_string(),
            phosphate_loss_symbol: "-H3PO4".to_string(),
            double_charge_ions_show: true,
            double_charge_ions_threshold: 800.0,
            triple_charge_ions_show: false,
            triple_charge_ions_threshold: 900.0,
        }
    }
}

impl FragmentationSpectrumOptions {
    /// Returns whether ions of the given charge are shown and the mass threshold for it.
    /// Charge 1 is always shown.
    ///
    /// # Arguments
    /// * `charge` - Charge state
    ///
    pub fn get_charge_settings(&self, charge: u8) -> (bool, f64) {
        match charge {
            1 => (true, 0.0),
            2 => (self.double_charge_ions_show, self.double_charge_ions_threshold),
            3 => (self.triple_charge_ions_show, self.triple_charge_ions_threshold),
            _ => (false, 0.0),
        }
    }
}
