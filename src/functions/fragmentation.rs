// internal imports
use crate::chemistry::molecule::StandardMasses;
use crate::entities::fragmentation_options::FragmentationSpectrumOptions;
use crate::entities::fragmentation_spectrum_data::{
    FragmentationSpectrumData, SHOULDER_ION_PREFIX,
};
use crate::entities::ion_type::IonType;
use crate::entities::residue::Residue;
use crate::mass::convert::convolute_mass;

/// Highest charge state fragment ions are generated for
pub const MAX_FRAGMENT_CHARGE: u8 = 3;

/// Residues which enable a water loss
const WATER_LOSS_RESIDUES: [&str; 4] = ["Ser", "Thr", "Glu", "Asp"];
/// Residues which enable an ammonia loss
const AMMONIA_LOSS_RESIDUES: [&str; 4] = ["Arg", "Lys", "Gln", "Asn"];

/// Returns the maximum number of peaks which can be generated for a single residue
/// with the given options.
///
/// # Arguments
/// * `options` - Fragmentation options
///
pub fn compute_max_ions_per_residue(options: &FragmentationSpectrumOptions) -> usize {
    let charge_count = (1..=MAX_FRAGMENT_CHARGE)
        .filter(|charge| options.get_charge_settings(*charge).0)
        .count();

    IonType::ALL
        .iter()
        .filter(|ion_type| options.ion_type_options[**ion_type].show_ion)
        .map(|ion_type| {
            let ion_type_options = &options.ion_type_options[*ion_type];
            let mut peaks_per_charge = 1;
            if ion_type.has_shoulder_ions() && options.intensity_options.shoulder_ion.abs() > 0.0 {
                peaks_per_charge += 2;
            }
            peaks_per_charge += [
                ion_type_options.neutral_loss_water,
                ion_type_options.neutral_loss_ammonia,
                ion_type_options.neutral_loss_phosphate,
            ]
            .iter()
            .filter(|enabled| **enabled)
            .count();
            peaks_per_charge * charge_count
        })
        .sum()
}

/// Generates the theoretical fragment spectrum of mass propagated residues,
/// sorted by mass ascending. No residues result in an empty spectrum.
///
/// # Arguments
/// * `residues` - Residues with ion masses
/// * `options` - Fragmentation options
/// * `standard_masses` - Masses of the neutral losses
/// * `charge_carrier_mass` - Mass of the charge carrier
///
pub fn get_fragmentation_masses(
    residues: &[Residue],
    options: &FragmentationSpectrumOptions,
    standard_masses: &StandardMasses,
    charge_carrier_mass: f64,
) -> Vec<FragmentationSpectrumData> {
    let residue_count = residues.len();
    let mut spectrum: Vec<FragmentationSpectrumData> =
        Vec::with_capacity(residue_count * compute_max_ions_per_residue(options));

    for (index, residue) in residues.iter().enumerate() {
        for ion_type in IonType::ALL {
            if !options.ion_type_options[ion_type].show_ion {
                continue;
            }
            if ion_type.is_n_terminal() && (index == 0 || index == residue_count - 1) {
                continue;
            }

            // Residues contained in the fragment
            let internal_residues = if ion_type.is_n_terminal() {
                &residues[..=index]
            } else {
                &residues[index..]
            };
            let ion_number = if ion_type.is_n_terminal() {
                index + 1
            } else {
                residue_count - index
            };

            let fragment = Fragment {
                ion_type,
                base_mass: residue.get_ion_mass()[ion_type],
                symbol: format!("{}{}", ion_type.get_symbol(), ion_number),
                residue_index: index,
                residue_symbol: residue.get_symbol(),
                internal_residues,
            };
            fragment.add_peaks(&mut spectrum, options, standard_masses, charge_carrier_mass);
        }
    }

    spectrum.sort_by(|left, right| left.get_mass().total_cmp(&right.get_mass()));
    spectrum
}

/// Single fragment ion, which results in peaks for each charge, shoulder ions and neutral losses
///
struct Fragment<'a> {
    ion_type: IonType,
    /// Singly charged mass
    base_mass: f64,
    symbol: String,
    residue_index: usize,
    residue_symbol: &'a str,
    internal_residues: &'a [Residue],
}

impl<'a> Fragment<'a> {
    fn contains_any_of(&self, symbols: &[&str]) -> bool {
        self.internal_residues
            .iter()
            .any(|residue| symbols.contains(&residue.get_symbol()))
    }

    fn is_phosphorylated(&self) -> bool {
        self.internal_residues
            .iter()
            .any(|residue| residue.is_phosphorylated())
    }

    fn add_peaks(
        &self,
        spectrum: &mut Vec<FragmentationSpectrumData>,
        options: &FragmentationSpectrumOptions,
        standard_masses: &StandardMasses,
        charge_carrier_mass: f64,
    ) {
        let ion_type_options = &options.ion_type_options[self.ion_type];
        let intensity = options.intensity_options.ion_type[self.ion_type];
        let shoulder_intensity = options.intensity_options.shoulder_ion;
        let neutral_loss_intensity = options.intensity_options.neutral_loss;

        let mut neutral_losses: Vec<(f64, &str)> = Vec::with_capacity(3);
        if ion_type_options.neutral_loss_water && self.contains_any_of(&WATER_LOSS_RESIDUES) {
            neutral_losses.push((standard_masses.get_water(), options.water_loss_symbol.as_str()));
        }
        if ion_type_options.neutral_loss_ammonia && self.contains_any_of(&AMMONIA_LOSS_RESIDUES) {
            neutral_losses.push((standard_masses.get_ammonia(), options.ammonia_loss_symbol.as_str()));
        }
        if ion_type_options.neutral_loss_phosphate && self.is_phosphorylated() {
            neutral_losses.push((
                standard_masses.get_phosphoric_acid(),
                options.phosphate_loss_symbol.as_str(),
            ));
        }

        for charge in 1..=MAX_FRAGMENT_CHARGE {
            let (show, threshold) = options.get_charge_settings(charge);
            if !show || (charge > 1 && self.base_mass < threshold) {
                continue;
            }

            let mass = match charge {
                1 => self.base_mass,
                _ => convolute_mass(self.base_mass, 1, charge, charge_carrier_mass),
            };
            let charge_suffix = match charge {
                1 => String::new(),
                _ => "+".repeat(charge as usize),
            };
            let symbol = format!("{}{}", self.symbol, charge_suffix);
            let symbol_generic = format!("{}{}", self.ion_type.get_symbol(), charge_suffix);

            spectrum.push(self.peak(mass, intensity, symbol.clone(), symbol_generic.clone(), charge, false));

            if self.ion_type.has_shoulder_ions() && shoulder_intensity.abs() > 0.0 {
                for offset in [-1.0, 1.0] {
                    spectrum.push(self.peak(
                        mass + offset / charge as f64,
                        shoulder_intensity,
                        format!("{}{}", SHOULDER_ION_PREFIX, symbol),
                        format!("{}{}", SHOULDER_ION_PREFIX, symbol_generic),
                        charge,
                        true,
                    ));
                }
            }

            for (loss_mass, loss_symbol) in neutral_losses.iter() {
                spectrum.push(self.peak(
                    mass - loss_mass / charge as f64,
                    neutral_loss_intensity,
                    format!("{}{}", symbol, loss_symbol),
                    format!("{}{}", symbol_generic, loss_symbol),
                    charge,
                    false,
                ));
            }
        }
    }

    fn peak(
        &self,
        mass: f64,
        intensity: f64,
        symbol: String,
        symbol_generic: String,
        charge: u8,
        is_shoulder_ion: bool,
    ) -> FragmentationSpectrumData {
        FragmentationSpectrumData::new(
            mass,
            intensity,
            symbol,
            symbol_generic,
            self.residue_index,
            self.residue_symbol.to_string(),
            charge,
            self.ion_type,
            is_shoulder_ion,
        )
    }
}
