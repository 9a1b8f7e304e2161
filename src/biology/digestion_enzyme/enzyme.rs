// std imports
use std::collections::HashMap;

// internal imports
use crate::biology::digestion_enzyme::cleavage_rule::CleavageRule;

/// Trait defining the behavior of a digestion enzyme
pub trait Enzyme {
    /// Returns the name of the enzyme
    fn get_name(&self) -> &str;
    /// Returns the cleavage rule of the enzyme
    fn get_cleavage_rule(&self) -> &CleavageRule;
    /// Returns the maximum number of missed cleavages
    fn get_max_number_of_missed_cleavages(&self) -> usize;
    /// Returns the minimum peptide length
    fn get_min_peptide_length(&self) -> usize;
    /// Returns the maximum peptide length
    fn get_max_peptide_length(&self) -> usize;

    /// Digests a protein into peptides, returning each peptide with its number of missed cleavages
    ///
    /// # Arguments
    /// * `amino_acid_sequence` - Protein sequence in one letter code
    ///
    fn digest(&self, amino_acid_sequence: &str) -> HashMap<String, i16> {
        self.get_cleavage_rule().digest(
            amino_acid_sequence,
            self.get_max_number_of_missed_cleavages(),
            self.get_min_peptide_length(),
            self.get_max_peptide_length(),
        )
    }

    /// Names the first occurrence of the peptide in the protein, see `CleavageRule::get_tryptic_name`
    ///
    /// # Arguments
    /// * `protein` - Protein sequence in one letter code
    /// * `peptide` - Peptide sequence in one letter code
    ///
    fn get_peptide_name(&self, protein: &str, peptide: &str) -> String {
        self.get_cleavage_rule()
            .get_tryptic_name(protein, peptide, 0, false)
            .get_name()
            .to_string()
    }
}
