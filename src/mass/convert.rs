/// Converts a mass or m/z value from one charge state into another.
/// A charge of 0 denotes the neutral mass.
///
/// # Arguments
///
/// * `mass_mz` - Mass (charge 0) or m/z value
/// * `current_charge` - Charge of `mass_mz`
/// * `desired_charge` - Charge to convert to
/// * `charge_carrier_mass` - Mass added per charge, usually a proton
///
pub fn convolute_mass(
    mass_mz: f64,
    current_charge: u8,
    desired_charge: u8,
    charge_carrier_mass: f64,
) -> f64 {
    // Bring the value to the singly charged state first
    let singly_charged = match current_charge {
        0 => mass_mz + charge_carrier_mass,
        1 => mass_mz,
        charge => {
            mass_mz * charge as f64 - charge_carrier_mass * (charge as f64 - 1.0)
        }
    };

    match desired_charge {
        0 => singly_charged - charge_carrier_mass,
        1 => singly_charged,
        charge => {
            (singly_charged + charge_carrier_mass * (charge as f64 - 1.0)) / charge as f64
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chemistry::molecule::PROTON_MASS;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_convolute_mass() {
        const NEUTRAL_MASS: f64 = 1000.0;
        let singly = convolute_mass(NEUTRAL_MASS, 0, 1, PROTON_MASS);
        assert!((singly - 1001.00727649).abs() < TOLERANCE);

        let doubly = convolute_mass(NEUTRAL_MASS, 0, 2, PROTON_MASS);
        assert!((doubly - (NEUTRAL_MASS + 2.0 * PROTON_MASS) / 2.0).abs() < TOLERANCE);

        let tripply_from_singly = convolute_mass(singly, 1, 3, PROTON_MASS);
        assert!((tripply_from_singly - (NEUTRAL_MASS + 3.0 * PROTON_MASS) / 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_convolute_mass_back_to_neutral() {
        const MZ: f64 = 501.00727649;
        let neutral = convolute_mass(MZ, 2, 0, PROTON_MASS);
        assert!((neutral - (MZ * 2.0 - 2.0 * PROTON_MASS)).abs() < TOLERANCE);
        assert_eq!(convolute_mass(MZ, 1, 1, PROTON_MASS), MZ);
    }
}
