// 3rd party imports
use tracing::{debug, info, warn};

// internal imports
use crate::chemistry::mass_table::MassTable;
use crate::chemistry::amino_acid::UNKNOWN;
use crate::entities::modification_symbol::ModificationRegistry;
use crate::entities::residue::Residue;
use crate::entities::terminus::{CTerminusGroup, NTerminusGroup};

/// Separates prefix and suffix residues from the peptide in 1 letter notation, e.g. `K.PEPTIDER.A`
const RESIDUE_SEPARATOR: char = '.';

/// Decides what happens with a run of modification symbol characters
/// which does not match a registered modification.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownModificationPolicy {
    /// Drop the unknown symbols
    #[default]
    Ignore,
    /// Register the symbols as new modification with a mass delta of 0
    Register,
}

impl UnknownModificationPolicy {
    /// Returns the modification ID to use for the unmatched symbol run, if any.
    ///
    /// # Arguments
    /// * `symbol` - Unmatched modification symbol run
    /// * `registry` - Registry to add the symbol to
    ///
    pub fn resolve(&self, symbol: &str, registry: &mut ModificationRegistry) -> Option<usize> {
        match self {
            UnknownModificationPolicy::Ignore => {
                debug!("Ignoring unknown modification symbol '{}'", symbol);
                None
            }
            UnknownModificationPolicy::Register => match registry.set(symbol, 0.0, false, "") {
                Ok(id) => {
                    info!("Registered unknown modification symbol '{}' with mass 0", symbol);
                    Some(id)
                }
                Err(err) => {
                    warn!("{}", err);
                    None
                }
            },
        }
    }
}

/// Options for parsing a sequence
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceParseOptions {
    /// Residues are given in three letter code (`GlyLeuTyr`) instead of one letter code (`GLY`)
    pub is_3_letter_code: bool,
    pub n_terminus: NTerminusGroup,
    pub c_terminus: CTerminusGroup,
    /// Remove prefix and suffix residues in one letter code, e.g. `K.PEPTIDER.A`
    pub check_for_prefix_and_suffix_residues: bool,
    /// Remove a leading `H` and trailing `OH` in three letter code, e.g. `H-GlyLeuTyr-OH`
    pub check_for_prefix_h_and_suffix_oh: bool,
    pub unknown_modification_policy: UnknownModificationPolicy,
}

impl Default for SequenceParseOptions {
    fn default() -> Self {
        Self {
            is_3_letter_code: true,
            n_terminus: NTerminusGroup::Hydrogen,
            c_terminus: CTerminusGroup::Hydroxyl,
            check_for_prefix_and_suffix_residues: true,
            check_for_prefix_h_and_suffix_oh: true,
            unknown_modification_policy: UnknownModificationPolicy::Ignore,
        }
    }
}

impl SequenceParseOptions {
    /// Default options for sequences in one letter code
    ///
    pub fn one_letter_code() -> Self {
        Self {
            is_3_letter_code: false,
            ..Self::default()
        }
    }
}

/// Parses a sequence into residues. Residues which cannot be resolved become `Xxx`,
/// modification symbols following a residue are attached to it.
/// Masses are not calculated.
///
/// # Arguments
/// * `sequence` - Sequence in one or three letter code
/// * `options` - Parse options
/// * `mass_table` - Mass table for resolving residue codes
/// * `modifications` - Registry for resolving modification symbols, unknown symbols may be added
///
pub fn parse_sequence(
    sequence: &str,
    options: &SequenceParseOptions,
    mass_table: &dyn MassTable,
    modifications: &mut ModificationRegistry,
) -> Vec<Residue> {
    let mut chars: Vec<char> = sequence.trim().chars().collect();
    if options.is_3_letter_code {
        if options.check_for_prefix_h_and_suffix_oh {
            strip_h_and_oh(&mut chars, mass_table);
        }
    } else if options.check_for_prefix_and_suffix_residues {
        strip_prefix_and_suffix_residues(&mut chars);
    }

    let mut residues: Vec<Residue> = Vec::with_capacity(chars.len());
    let mut index = 0;
    while index < chars.len() {
        if !chars[index].is_alphabetic() {
            // separators, digits and modification symbols without a residue
            index += 1;
            continue;
        }
        let symbol = if options.is_3_letter_code {
            let end = (index + 3).min(chars.len());
            let code: String = chars[index..end].iter().collect();
            index = end;
            mass_table.get_three_letter_code(&code).unwrap_or_else(|| {
                debug!("Unknown three letter code '{}'", code);
                UNKNOWN.get_three_letter_code()
            })
        } else {
            let code = chars[index].to_ascii_uppercase();
            index += 1;
            mass_table.one_letter_to_three_letter(code).unwrap_or_else(|| {
                debug!("Unknown one letter code '{}'", code);
                UNKNOWN.get_three_letter_code()
            })
        };
        let mut residue = Residue::new(symbol, false);

        let run_length = chars[index..]
            .iter()
            .take_while(|character| mass_table.is_modification_symbol_char(**character))
            .count();
        if run_length > 0 {
            let run: String = chars[index..index + run_length].iter().collect();
            index += run_length;
            let modification_ids =
                resolve_modification_symbols(&run, modifications, options.unknown_modification_policy);
            attach_modifications(&mut residue, &modification_ids, modifications);
        }
        residues.push(residue);
    }
    residues
}

/// Splits a run of modification symbol characters into registered modifications.
/// The longest registered symbol at the start of the remaining run wins.
/// If nothing matches the policy decides about the remaining run and matching stops.
///
/// # Arguments
/// * `run` - Consecutive modification symbol characters
/// * `modifications` - Modification registry
/// * `policy` - Policy for unmatched symbols
///
pub fn resolve_modification_symbols(
    run: &str,
    modifications: &mut ModificationRegistry,
    policy: UnknownModificationPolicy,
) -> Vec<usize> {
    let chars: Vec<char> = run.chars().collect();
    let mut modification_ids = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let remaining = &chars[start..];
        let longest_match = (1..=remaining.len()).rev().find_map(|length| {
            let candidate: String = remaining[..length].iter().collect();
            modifications.get_id(&candidate).map(|id| (id, length))
        });
        match longest_match {
            Some((id, length)) => {
                modification_ids.push(id);
                start += length;
            }
            None => {
                let remaining: String = remaining.iter().collect();
                if let Some(id) = policy.resolve(&remaining, modifications) {
                    modification_ids.push(id);
                }
                break;
            }
        }
    }
    modification_ids
}

/// Adds the modification IDs to the residue and sets the phosphorylation flag
/// if one of them indicates phosphorylation.
///
fn attach_modifications(
    residue: &mut Residue,
    modification_ids: &[usize],
    modifications: &ModificationRegistry,
) {
    for id in modification_ids {
        if !residue.add_modification_id(*id) {
            warn!(
                "Residue {} already carries the maximum number of modifications, dropping modification {}",
                residue.get_symbol(),
                id
            );
            continue;
        }
        if modifications
            .get(*id)
            .map(|modification| modification.indicates_phosphorylation())
            .unwrap_or(false)
        {
            residue.set_phosphorylated(true);
        }
    }
}

/// Removes prefix and suffix residues like in `K.PEPTIDER.A` and bare leading or trailing separators.
///
fn strip_prefix_and_suffix_residues(chars: &mut Vec<char>) {
    if chars.len() <= 1 || !chars.contains(&RESIDUE_SEPARATOR) {
        return;
    }
    if chars.len() > 2 && chars[1] == RESIDUE_SEPARATOR {
        chars.drain(..2);
    }
    if chars.len() > 2 && chars[chars.len() - 2] == RESIDUE_SEPARATOR {
        chars.truncate(chars.len() - 2);
    }
    if chars.first() == Some(&RESIDUE_SEPARATOR) {
        chars.remove(0);
    }
    if chars.last() == Some(&RESIDUE_SEPARATOR) {
        chars.pop();
    }
}

/// Removes a leading free amine `H` and a trailing free acid `OH`, unless they are part of a residue.
///
fn strip_h_and_oh(chars: &mut Vec<char>, mass_table: &dyn MassTable) {
    let is_amino_acid = |code: &[char]| {
        let code: String = code.iter().collect();
        mass_table.get_three_letter_code(&code).is_some()
    };

    if chars.len() >= 4 && chars[0].eq_ignore_ascii_case(&'H') {
        if chars[1] == '-' {
            // H-GlyLeu
            chars.drain(..2);
        } else if !chars[1].is_alphabetic() || !is_amino_acid(&chars[..3]) {
            // HGlyLeu, but not HisGly
            chars.remove(0);
        }
    }

    let len = chars.len();
    if len >= 5
        && chars[len - 2].eq_ignore_ascii_case(&'O')
        && chars[len - 1].eq_ignore_ascii_case(&'H')
    {
        if chars[len - 3] == '-' {
            // GlyLeu-OH
            chars.truncate(len - 3);
        } else if !chars[len - 3].is_alphabetic() || !is_amino_acid(&chars[len - 3..]) {
            // modification runs before the OH stay attached to the last residue
            chars.truncate(len - 2);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chemistry::mass_table::DefaultMassTable;

    fn symbols(residues: &[Residue]) -> Vec<&str> {
        residues.iter().map(|residue| residue.get_symbol()).collect()
    }

    #[test]
    fn test_one_letter_code() {
        let mass_table = DefaultMassTable::default();
        let mut modifications = ModificationRegistry::with_defaults();
        let options = SequenceParseOptions::one_letter_code();

        let residues = parse_sequence("K.pep1T-I DE.A", &options, &mass_table, &mut modifications);
        assert_eq!(
            symbols(&residues),
            vec!["Pro", "Glu", "Pro", "Thr", "Ile", "Asp", "Glu"]
        );

        let residues = parse_sequence(".GLY.", &options, &mass_table, &mut modifications);
        assert_eq!(symbols(&residues), vec!["Gly", "Leu", "Tyr"]);

        let unstripped = SequenceParseOptions {
            check_for_prefix_and_suffix_residues: false,
            ..options
        };
        let residues = parse_sequence("K.GLY.A", &unstripped, &mass_table, &mut modifications);
        assert_eq!(symbols(&residues), vec!["Lys", "Gly", "Leu", "Tyr", "Ala"]);
    }

    #[test]
    fn test_three_letter_code() {
        let mass_table = DefaultMassTable::default();
        let mut modifications = ModificationRegistry::with_defaults();
        let options = SequenceParseOptions::default();

        let residues = parse_sequence("H-GlyLEUtyr-OH", &options, &mass_table, &mut modifications);
        assert_eq!(symbols(&residues), vec!["Gly", "Leu", "Tyr"]);

        let residues = parse_sequence("HisGlyFooLeu", &options, &mass_table, &mut modifications);
        assert_eq!(symbols(&residues), vec!["His", "Gly", "Xxx", "Leu"]);

        let residues = parse_sequence("HGlyTyrOH", &options, &mass_table, &mut modifications);
        assert_eq!(symbols(&residues), vec!["Gly", "Tyr"]);

        let residues = parse_sequence("Gly-Leu-Ty", &options, &mass_table, &mut modifications);
        assert_eq!(symbols(&residues), vec!["Gly", "Leu", "Xxx"]);
    }

    #[test]
    fn test_h_and_oh_keep_modifications() {
        let mass_table = DefaultMassTable::default();
        let mut modifications = ModificationRegistry::with_defaults();
        let options = SequenceParseOptions::default();
        let star = modifications.get_id("*").unwrap();

        for sequence in ["HGlyTyr*OH", "H-GlyTyr*-OH", "GlyTyr*"] {
            let residues = parse_sequence(sequence, &options, &mass_table, &mut modifications);
            assert_eq!(symbols(&residues), vec!["Gly", "Tyr"], "{}", sequence);
            assert_eq!(residues[1].get_modification_ids(), &[star], "{}", sequence);
            assert!(residues[1].is_phosphorylated(), "{}", sequence);
        }

        let residues = parse_sequence("H GlyTyr@ OH", &options, &mass_table, &mut modifications);
        assert_eq!(symbols(&residues), vec!["Gly", "Tyr"]);
        assert_eq!(
            residues[1].get_modification_ids(),
            &[modifications.get_id("@").unwrap()]
        );
    }

    #[test]
    fn test_modifications() {
        let mass_table = DefaultMassTable::default();
        let mut modifications = ModificationRegistry::with_defaults();
        let double_star = modifications.set("**", 1.0, false, "").unwrap();
        let options = SequenceParseOptions::one_letter_code();

        let residues = parse_sequence("S***T@M", &options, &mass_table, &mut modifications);
        let star = modifications.get_id("*").unwrap();
        let oxidation = modifications.get_id("@").unwrap();
        assert_eq!(residues[0].get_modification_ids(), &[double_star, star]);
        assert!(residues[0].is_phosphorylated());
        assert_eq!(residues[1].get_modification_ids(), &[oxidation]);
        assert!(!residues[1].is_phosphorylated());
        assert!(residues[2].get_modification_ids().is_empty());
    }

    #[test]
    fn test_unknown_modification_policy() {
        let mass_table = DefaultMassTable::default();
        let mut modifications = ModificationRegistry::with_defaults();
        let count = modifications.len();

        let residues = parse_sequence(
            "S*%T",
            &SequenceParseOptions::one_letter_code(),
            &mass_table,
            &mut modifications,
        );
        assert_eq!(residues[0].get_modification_ids().len(), 1);
        assert_eq!(modifications.len(), count);

        let register = SequenceParseOptions {
            unknown_modification_policy: UnknownModificationPolicy::Register,
            ..SequenceParseOptions::one_letter_code()
        };
        let residues = parse_sequence("S*%^T", &register, &mass_table, &mut modifications);
        let registered = modifications.get_id("%^").unwrap();
        assert_eq!(registered, count);
        assert_eq!(modifications.get(registered).unwrap().get_mass_delta(), 0.0);
        assert_eq!(residues[0].get_modification_ids()[1], registered);
    }

    #[test]
    fn test_modification_limit() {
        let mass_table = DefaultMassTable::default();
        let mut modifications = ModificationRegistry::with_defaults();
        let residues = parse_sequence(
            "S@@@@@@@@",
            &SequenceParseOptions::one_letter_code(),
            &mass_table,
            &mut modifications,
        );
        assert_eq!(
            residues[0].get_modification_ids().len(),
            crate::entities::modification_symbol::MAX_MODIFICATIONS
        );
    }
}
