// internal imports
use crate::biology::digestion_enzyme::cleavage_rule::{CleavageRule, DEFAULT_TERMINUS_MARKER};
use crate::biology::digestion_enzyme::enzyme::Enzyme;

/// Name of the enzyme
pub const NAME: &str = "trypsin";

lazy_static! {
    static ref CLEAVAGE_RULE: CleavageRule =
        CleavageRule::new("KR", "P", DEFAULT_TERMINUS_MARKER, true);
}

/// Digestion enzyme Trypsin, which cuts after K and R not followed by P.
///
pub struct Trypsin {
    max_number_of_missed_cleavages: usize,
    min_peptide_length: usize,
    max_peptide_length: usize,
}

impl Trypsin {
    /// Returns a new instance of the enzyme
    ///
    /// # Arguments
    /// * `max_number_of_missed_cleavages` - Maximum number of missed cleavages
    /// * `min_peptide_length` - Minimum length of a peptide
    /// * `max_peptide_length` - Maximum length of a peptide
    ///
    pub fn new(
        max_number_of_missed_cleavages: usize,
        min_peptide_length: usize,
        max_peptide_length: usize,
    ) -> Self {
        Self {
            max_number_of_missed_cleavages,
            min_peptide_length,
            max_peptide_length,
        }
    }
}

impl Enzyme for Trypsin {
    fn get_name(&self) -> &str {
        NAME
    }

    fn get_cleavage_rule(&self) -> &CleavageRule {
        &CLEAVAGE_RULE
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
