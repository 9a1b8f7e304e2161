// internal imports
use crate::chemistry::amino_acid::UNKNOWN;
use crate::chemistry::mass_table::MassTable;
use crate::entities::modification_symbol::ModificationRegistry;
use crate::entities::residue::Residue;
use crate::entities::terminus::Terminus;

/// Options for turning residues back into a sequence string
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceFormatOptions {
    pub use_3_letter_code: bool,
    pub add_space_every_10_residues: bool,
    pub separate_residues_with_dash: bool,
    /// Wraps the sequence in the terminus formulas, e.g. `H-GlyLeuTyr-OH`
    pub include_n_and_c_terminii: bool,
    pub include_modification_symbols: bool,
}

impl Default for SequenceFormatOptions {
    fn default() -> Self {
        Self {
            use_3_letter_code: true,
            add_space_every_10_residues: false,
            separate_residues_with_dash: false,
            include_n_and_c_terminii: false,
            include_modification_symbols: true,
        }
    }
}

/// Formats the residues as sequence string.
/// Modification symbols of a residue are written without separator, so they only parse back
/// identically if no registered symbol is composed of others,
/// see `ModificationRegistry::get_ambiguous_symbols`.
///
/// # Arguments
/// * `residues` - Residues
/// * `n_terminus` - N-terminus
/// * `c_terminus` - C-terminus
/// * `modifications` - Registry the modification IDs of the residues refer to
/// * `mass_table` - Mass table for converting three letter codes into one letter codes
/// * `options` - Format options
///
pub fn format_sequence(
    residues: &[Residue],
    n_terminus: &Terminus,
    c_terminus: &Terminus,
    modifications: &ModificationRegistry,
    mass_table: &dyn MassTable,
    options: &SequenceFormatOptions,
) -> String {
    let mut sequence = String::with_capacity(residues.len() * 4);
    for (index, residue) in residues.iter().enumerate() {
        if index > 0 {
            if options.add_space_every_10_residues && index % 10 == 0 {
                sequence.push(' ');
            } else if options.separate_residues_with_dash {
                sequence.push('-');
            }
        }

        if options.use_3_letter_code {
            sequence.push_str(residue.get_symbol());
        } else {
            sequence.push(
                mass_table
                    .three_letter_to_one_letter(residue.get_symbol())
                    .unwrap_or(UNKNOWN.get_one_letter_code()),
            );
        }

        if options.include_modification_symbols {
            for modification in residue
                .get_modification_ids()
                .iter()
                .filter_map(|id| modifications.get(*id))
            {
                sequence.push_str(modification.get_symbol());
            }
        }
    }

    if options.include_n_and_c_terminii {
        return format!(
            "{}-{}-{}",
            n_terminus.get_formula(),
            sequence,
            c_terminus.get_formula()
        );
    }
    sequence
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chemistry::mass_table::DefaultMassTable;

    #[test]
    fn test_format_sequence() {
        let mass_table = DefaultMassTable::default();
        let modifications = ModificationRegistry::with_defaults();
        let n_terminus = Terminus::from_formula("H", None, &mass_table).unwrap();
        let c_terminus = Terminus::from_formula("OH", None, &mass_table).unwrap();

        let mut serine = Residue::new("Ser", true);
        serine.add_modification_id(modifications.get_id("*").unwrap());
        let residues = vec![Residue::new("Gly", false), serine, Residue::new("Foo", false)];

        let three_letter = format_sequence(
            &residues,
            &n_terminus,
            &c_terminus,
            &modifications,
            &mass_table,
            &SequenceFormatOptions {
                separate_residues_with_dash: true,
                include_n_and_c_terminii: true,
                ..SequenceFormatOptions::default()
            },
        );
        assert_eq!(three_letter, "H-Gly-Ser*-Foo-OH");

        let one_letter = format_sequence(
            &residues,
            &n_terminus,
            &c_terminus,
            &modifications,
            &mass_table,
            &SequenceFormatOptions {
                use_3_letter_code: false,
                include_modification_symbols: false,
                ..SequenceFormatOptions::default()
            },
        );
        assert_eq!(one_letter, "GSX");
    }

    #[test]
    fn test_space_every_10_residues() {
        let mass_table = DefaultMassTable::default();
        let modifications = ModificationRegistry::new();
        let terminus = Terminus::unresolved("", None);
        let residues: Vec<Residue> = (0..12).map(|_| Residue::new("Ala", false)).collect();
        let sequence = format_sequence(
            &residues,
            &terminus,
            &terminus,
            &modifications,
            &mass_table,
            &SequenceFormatOptions {
                use_3_letter_code: false,
                add_space_every_10_residues: true,
                ..SequenceFormatOptions::default()
            },
        );
        assert_eq!(sequence, "AAAAAAAAAA AA");
    }
}
