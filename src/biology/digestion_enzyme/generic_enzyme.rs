// internal imports
use crate::biology::digestion_enzyme::cleavage_rule::{CleavageRule, DEFAULT_TERMINUS_MARKER};
use crate::biology::digestion_enzyme::enzyme::Enzyme;

/// Names and cleavage rules (rule residues, exception residues) of the predefined enzymes besides trypsin
pub const PREDEFINED_ENZYMES: [(&str, &str, &str); 4] = [
    ("lys-c", "K", "P"),
    ("arg-c", "R", "P"),
    ("glu-c", "DE", "P"),
    ("peptide-database", DEFAULT_TERMINUS_MARKER, ""),
];

/// Enzyme backed by an arbitrary cleavage rule
///
pub struct GenericEnzyme {
    name: String,
    cleavage_rule: CleavageRule,
    max_number_of_missed_cleavages: usize,
    min_peptide_length: usize,
    max_peptide_length: usize,
}

impl GenericEnzyme {
    /// Creates a new enzyme
    ///
    /// # Arguments
    /// * `name` - Name of the enzyme
    /// * `cleavage_rule` - Rule describing where the enzyme cuts
    /// * `max_number_of_missed_cleavages` - Maximum number of missed cleavages
    /// * `min_peptide_length` - Minimum length of a peptide
    /// * `max_peptide_length` - Maximum length of a peptide
    ///
    pub fn new(
        name: &str,
        cleavage_rule: CleavageRule,
        max_number_of_missed_cleavages: usize,
        min_peptide_length: usize,
        max_peptide_length: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            cleavage_rule,
            max_number_of_missed_cleavages,
            min_peptide_length,
            max_peptide_length,
        }
    }

    /// Returns one of the predefined enzymes, None if the name is unknown.
    ///
    /// # Arguments
    /// * `name` - Name of the enzyme, case insensitive
    /// * `max_number_of_missed_cleavages` - Maximum number of missed cleavages
    /// * `min_peptide_length` - Minimum length of a peptide
    /// * `max_peptide_length` - Maximum length of a peptide
    ///
    pub fn predefined(
        name: &str,
        max_number_of_missed_cleavages: usize,
        min_peptide_length: usize,
        max_peptide_length: usize,
    ) -> Option<Self> {
        let name = name.to_lowercase();
        PREDEFINED_ENZYMES
            .iter()
            .find(|(enzyme_name, _, _)| *enzyme_name == name)
            .map(|(enzyme_name, rule_residues, exception_residues)| {
                Self::new(
                    enzyme_name,
                    CleavageRule::new(
                        rule_residues,
                        exception_residues,
                        DEFAULT_TERMINUS_MARKER,
                        true,
                    ),
                    max_number_of_missed_cleavages,
                    min_peptide_length,
                    max_peptide_length,
                )
            })
    }
}

impl Enzyme for GenericEnzyme {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_cleavage_rule(&self) -> &CleavageRule {
        &self.cleavage_rule
    }

    fn get_max_number_of_missed_cleavages(&self) -> usize {
        self.max_number_of_missed_cleavages
    }

    fn get_min_peptide_length(&self) -> usize {
        self.min_peptide_length
    }

    fn get_max_peptide_length(&self) -> usize {
        self.max_peptide_length
    }
}

#[cfg(test)]
mod test {
    // std imports
    use std::collections::HashMap;

    // internal imports
    use super::*;

    #[test]
    fn test_predefined() {
        assert!(GenericEnzyme::predefined("Lys-C", 0, 0, 60).is_some());
        assert!(GenericEnzyme::predefined("pepsin", 0, 0, 60).is_none());
    }

    #[test]
    fn test_lys_c_digest() {
        let lys_c = GenericEnzyme::predefined("lys-c", 0, 1, 60).unwrap();
        let peptides = lys_c.digest("AAKPGGRAKLL");
        let expected: HashMap<String, i16> =
            HashMap::from([("AAKPGGRAK".to_string(), 0), ("LL".to_string(), 0)]);
        assert_eq!(peptides, expected);
    }

    #[test]
    fn test_glu_c_digest() {
        let glu_c = GenericEnzyme::predefined("glu-c", 1, 2, 60).unwrap();
        let peptides = glu_c.digest("AADKKEPLLEGG");
        // AAD, KKEPLLE, GG plus the missed cleavage combinations
        assert_eq!(peptides.len(), 5);
        assert_eq!(peptides["AAD"], 0);
        assert_eq!(peptides["KKEPLLE"], 0);
        assert_eq!(peptides["AADKKEPLLE"], 1);
        assert_eq!(peptides["KKEPLLEGG"], 1);
    }

    #[test]
    fn test_peptide_database_rule_names() {
        let enzyme = GenericEnzyme::predefined("peptide-database", 0, 0, 60).unwrap();
        assert_eq!(enzyme.get_peptide_name("ACDEFG", "ACDEFG"), "t1");
        assert_eq!(enzyme.get_peptide_name("ACDEFG", "CDE"), "2.4");
    }
}
