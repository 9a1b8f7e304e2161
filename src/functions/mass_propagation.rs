// 3rd party imports
use tracing::warn;

// internal imports
use crate::chemistry::mass_table::MassTable;
use crate::chemistry::molecule::StandardMasses;
use crate::entities::ion_type::{IonType, IonTypeArray};
use crate::entities::modification_symbol::ModificationRegistry;
use crate::entities::residue::Residue;
use crate::entities::terminus::Terminus;

/// Everything the mass propagation needs besides the residues
///
pub struct PropagationContext<'a> {
    pub n_terminus: &'a Terminus,
    pub c_terminus: &'a Terminus,
    pub modifications: &'a ModificationRegistry,
    pub mass_table: &'a dyn MassTable,
    pub standard_masses: &'a StandardMasses,
    pub charge_carrier_mass: f64,
}

/// Calculates residue masses and ion masses of all residues.
/// Returns the total peptide mass, which is 0 if no residue has a mass.
///
/// # Arguments
/// * `residues` - Residues to update
/// * `context` - Termini, modifications and masses
///
pub fn propagate_masses(residues: &mut [Residue], context: &PropagationContext) -> f64 {
    let (running_total, has_resolved_residue) = forward_pass(residues, context);
    backward_pass(residues, context);

    if !has_resolved_residue {
        return 0.0;
    }
    let mut total_mass = running_total + context.c_terminus.get_mass();
    if context.n_terminus.is_protonated_hydrogen() {
        total_mass += context.charge_carrier_mass;
    }
    total_mass
}

/// N- to C-terminal pass. Resolves residue masses and sets the a, b and c ion masses.
/// Returns the running total after the last residue and whether any residue was resolved.
///
fn forward_pass(residues: &mut [Residue], context: &PropagationContext) -> (f64, bool) {
    let standard_masses = context.standard_masses;
    let mut running_total = context.n_terminus.get_mass();
    if context.n_terminus.is_protonated_hydrogen() {
        // The charge carrier is added per ion
        running_total -= standard_masses.get_hydrogen();
    }

    let mut has_resolved_residue = false;
    for residue in residues.iter_mut() {
        let mass = match context.mass_table.get_residue_mass(residue.get_symbol()) {
            Some(mass) => mass,
            None => {
                residue.set_masses(0.0, 0.0);
                *residue.get_ion_mass_mut() = IonTypeArray::default();
                continue;
            }
        };
        has_resolved_residue = true;

        let mut mass_with_mods = mass;
        let mut phosphorylated_by_modification = false;
        for id in residue.get_modification_ids() {
            match context.modifications.get(*id) {
                Some(modification) => {
                    mass_with_mods += modification.get_mass_delta();
                    phosphorylated_by_modification |= modification.indicates_phosphorylation();
                }
                None => warn!(
                    "Residue {} references unknown modification {}",
                    residue.get_symbol(),
                    id
                ),
            }
        }
        if residue.is_phosphorylated() && !phosphorylated_by_modification {
            mass_with_mods += standard_masses.get_phosphorylation();
        }
        residue.set_masses(mass, mass_with_mods);

        running_total += mass_with_mods;
        let ion_mass = residue.get_ion_mass_mut();
        ion_mass[IonType::A] = running_total
            - standard_masses.get_immonium_difference()
            - context.charge_carrier_mass;
        ion_mass[IonType::B] = running_total;
        ion_mass[IonType::C] = running_total + standard_masses.get_ammonia();
    }
    (running_total, has_resolved_residue)
}

/// C- to N-terminal pass. Sets the y and z ion masses.
/// Expects the forward pass to have resolved the residue masses.
///
fn backward_pass(residues: &mut [Residue], context: &PropagationContext) {
    let standard_masses = context.standard_masses;
    let carrier = context.charge_carrier_mass;
    let mut running_total = context.c_terminus.get_mass() + carrier;

    for (index, residue) in residues.iter_mut().enumerate().rev() {
        if residue.get_mass() == 0.0 {
            continue;
        }
        running_total += residue.get_mass_with_mods();

        let mut y_ion_mass = running_total + carrier;
        if index == 0 {
            y_ion_mass += context.n_terminus.get_mass() - carrier;
            if context.n_terminus.is_protonated_hydrogen() {
                y_ion_mass -= standard_masses.get_hydrogen();
            }
        }
        let ion_mass = residue.get_ion_mass_mut();
        ion_mass[IonType::Y] = y_ion_mass;
        ion_mass[IonType::Z] =
            y_ion_mass - (standard_masses.get_ammonia() - standard_masses.get_hydrogen());
    }
}
