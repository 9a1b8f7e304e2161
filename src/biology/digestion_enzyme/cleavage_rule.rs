// std imports
use std::cmp;
use std::collections::HashMap;

// internal imports
use crate::chemistry::amino_acid::UNKNOWN;

/// Marker for the protein terminus, e.g. in `-.PEPTIDEK.A`
pub const DEFAULT_TERMINUS_MARKER: &str = "-";
/// Separates prefix and suffix residues from the peptide
pub const RESIDUE_SEPARATOR: char = '.';
/// Delimiter for names of multiple matches
pub const DEFAULT_NAME_DELIMITER: &str = ", ";

/// Name of a peptide within its protein
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrypticName {
    /// `t<N>` or `t<N>.<fragment count>` if the peptide follows the cleavage rule,
    /// otherwise the residue range `<start>.<end>`
    name: String,
    /// 1-based position of the first residue, 0 if not found
    residue_start: usize,
    /// 1-based position of the last residue, 0 if not found
    residue_end: usize,
}

impl TrypticName {
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_residue_start(&self) -> usize {
        self.residue_start
    }

    pub fn get_residue_end(&self) -> usize {
        self.residue_end
    }

    /// True if the peptide was not found
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Names of all occurrences of a peptide within a protein
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrypticNameMatches {
    names: String,
    match_count: usize,
    /// 1-based start of the first match, 0 if not found
    residue_start: usize,
    /// 1-based end of the first match, 0 if not found
    residue_end: usize,
}

impl TrypticNameMatches {
    pub fn get_names(&self) -> &str {
        &self.names
    }

    pub fn get_match_count(&self) -> usize {
        self.match_count
    }

    pub fn get_residue_start(&self) -> usize {
        self.residue_start
    }

    pub fn get_residue_end(&self) -> usize {
        self.residue_end
    }
}

/// Protein fragment between two cleavage sites.
/// Start and end are 0-based and inclusive.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    sequence: String,
    start: usize,
    end: usize,
}

impl Fragment {
    pub fn get_sequence(&self) -> &str {
        &self.sequence
    }

    pub fn get_start(&self) -> usize {
        self.start
    }

    pub fn get_end(&self) -> usize {
        self.end
    }
}

/// Protease cleavage rule: cleave after rule residues, unless the next residue is an exception residue.
/// Residues are single characters (one letter code).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleavageRule {
    rule_residues: String,
    exception_residues: String,
    terminus_marker: String,
    ignore_case: bool,
}

impl CleavageRule {
    /// Creates a new cleavage rule
    ///
    /// # Arguments
    /// * `rule_residues` - Residues after which the protease cleaves, e.g. `KR`
    /// * `exception_residues` - Residues which prevent cleavage if following a rule residue, e.g. `P`
    /// * `terminus_marker` - Marker of the protein terminus, usually `-`
    /// * `ignore_case` - Compare residues case insensitive
    ///
    pub fn new(
        rule_residues: &str,
        exception_residues: &str,
        terminus_marker: &str,
        ignore_case: bool,
    ) -> Self {
        let normalize = |residues: &str| match ignore_case {
            true => residues.to_ascii_uppercase(),
            false => residues.to_string(),
        };
        Self {
            rule_residues: normalize(rule_residues),
            exception_residues: normalize(exception_residues),
            terminus_marker: terminus_marker.to_string(),
            ignore_case,
        }
    }

    /// Trypsin, cleaves after K and R unless followed by P
    ///
    pub fn trypsin() -> Self {
        Self::new("KR", "P", DEFAULT_TERMINUS_MARKER, true)
    }

    pub fn get_rule_residues(&self) -> &str {
        &self.rule_residues
    }

    pub fn get_exception_residues(&self) -> &str {
        &self.exception_residues
    }

    pub fn get_terminus_marker(&self) -> &str {
        &self.terminus_marker
    }

    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    fn normalize(&self, sequence: &str) -> Vec<char> {
        match self.ignore_case {
            true => sequence.trim().to_ascii_uppercase().chars().collect(),
            false => sequence.trim().chars().collect(),
        }
    }

    fn is_rule_residue(&self, residue: char) -> bool {
        self.rule_residues.contains(residue)
    }

    fn is_exception_residue(&self, residue: char) -> bool {
        self.exception_residues.contains(residue)
    }

    /// Residue next to a peptide, `None` for the protein terminus
    fn adjacent_residue(&self, residue: &str, take_last: bool) -> Option<char> {
        if residue.is_empty() || residue == self.terminus_marker {
            return None;
        }
        let residue = self.normalize(residue);
        match take_last {
            true => residue.last().copied(),
            false => residue.first().copied(),
        }
    }

    /// Checks if a sequence in the form `<prefix>.<peptide>.<suffix>`, e.g. `K.PEPTIDER.A`,
    /// follows the cleavage rule on both ends, or at least one end if partial cleavage is allowed.
    /// With only one separator the missing side counts as terminus.
    /// Sequences without separator and empty rules match.
    /// Returns the result and the number of matching ends.
    ///
    /// # Arguments
    /// * `sequence` - Sequence with prefix and suffix residue
    /// * `allow_partial_cleavage` - True if one matching end is sufficient
    ///
    pub fn check_sequence_against_cleavage_rule(
        &self,
        sequence: &str,
        allow_partial_cleavage: bool,
    ) -> (bool, usize) {
        let sequence = sequence.trim();
        if self.rule_residues.is_empty() {
            return (true, 0);
        }
        let separator_positions: Vec<usize> = sequence
            .match_indices(RESIDUE_SEPARATOR)
            .map(|(position, _)| position)
            .collect();
        let (prefix, body, suffix) = match separator_positions.as_slice() {
            [] => return (true, 0),
            [position] if *position <= 1 => {
                (&sequence[..*position], &sequence[*position + 1..], "")
            }
            [position] => ("", &sequence[..*position], &sequence[*position + 1..]),
            [first, .., last] => (
                &sequence[..*first],
                &sequence[*first + 1..*last],
                &sequence[*last + 1..],
            ),
        };
        let body = self.normalize(body);
        let (first_residue, last_residue) = match (body.first(), body.last()) {
            (Some(first_residue), Some(last_residue)) => (*first_residue, *last_residue),
            _ => return (true, 0),
        };
        let prefix = self.adjacent_residue(prefix, true);
        let suffix = self.adjacent_residue(suffix, false);

        // Peptide database convention, only full protein sequences match
        if self.rule_residues == self.terminus_marker {
            let rule_match_count = [prefix, suffix].iter().filter(|end| end.is_none()).count();
            return (rule_match_count == 2, rule_match_count);
        }

        let mut rule_match_count = 0;
        match prefix {
            None => rule_match_count += 1,
            Some(prefix) => {
                if self.is_rule_residue(prefix) && !self.is_exception_residue(first_residue) {
                    rule_match_count += 1;
                }
            }
        }
        match suffix {
            None => rule_match_count += 1,
            Some(suffix) => {
                if !self.is_exception_residue(suffix) && self.is_rule_residue(last_residue) {
                    rule_match_count += 1;
                }
            }
        }

        let matches = rule_match_count == 2 || (allow_partial_cleavage && rule_match_count >= 1);
        (matches, rule_match_count)
    }

    /// Returns the 0-based index of the next residue after which the protease cleaves,
    /// starting at `start_index`. Rule residues followed by an exception residue are skipped.
    /// If no site is found and the following residue is the terminus marker,
    /// the last residue is returned as site.
    ///
    /// # Arguments
    /// * `search_residues` - Residues to search
    /// * `following_residue` - Residue following the search residues or the terminus marker
    /// * `start_index` - 0-based start index
    ///
    pub fn find_next_cleavage_loc(
        &self,
        search_residues: &str,
        following_residue: &str,
        start_index: usize,
    ) -> Option<usize> {
        let residues = self.normalize(search_residues);
        self.find_next_cleavage_loc_in(&residues, following_residue, start_index)
    }

    fn find_next_cleavage_loc_in(
        &self,
        residues: &[char],
        following_residue: &str,
        start_index: usize,
    ) -> Option<usize> {
        if start_index >= residues.len() {
            return None;
        }
        let following = self.adjacent_residue(following_residue, false);

        let mut search_start = start_index;
        while let Some(site) = (search_start..residues.len())
            .find(|position| self.is_rule_residue(residues[*position]))
        {
            let next_residue = match residues.get(site + 1) {
                Some(residue) => Some(*residue),
                None => following,
            };
            match next_residue {
                Some(residue) if self.is_exception_residue(residue) => search_start = site + 1,
                _ => return Some(site),
            }
        }

        if following_residue == self.terminus_marker {
            return Some(residues.len() - 1);
        }
        None
    }

    /// Counts the fragments in the residues, ending at cleavage sites
    /// or the end of the residues.
    ///
    fn count_fragments(&self, residues: &[char], following_residue: &str) -> usize {
        let mut fragment_count = 0;
        let mut search_start = 0;
        while search_start < residues.len() {
            let end = self
                .find_next_cleavage_loc_in(residues, following_residue, search_start)
                .unwrap_or(residues.len() - 1);
            fragment_count += 1;
            search_start = end + 1;
        }
        fragment_count
    }

    /// Names the first occurrence of the peptide within the protein at or after `start_search_loc`.
    /// If the peptide follows the cleavage rule the name is `t<N>` with N being the number
    /// of the fragment, or `t<N>.<count>` if the peptide spans multiple fragments.
    /// Otherwise the name is the 1-based residue range `<start>.<end>`, in ICR-2LS
    /// compatible mode `<start>.<end + 1>`.
    /// Returns an empty name if the peptide is not found.
    ///
    /// # Arguments
    /// * `protein` - Protein sequence in one letter code
    /// * `peptide` - Peptide sequence in one letter code
    /// * `start_search_loc` - 0-based position to start the search at
    /// * `icr2ls_compatible` - Name not matching peptides ICR-2LS compatible
    ///
    pub fn get_tryptic_name(
        &self,
        protein: &str,
        peptide: &str,
        start_search_loc: usize,
        icr2ls_compatible: bool,
    ) -> TrypticName {
        let protein = self.normalize(protein);
        let peptide = self.normalize(peptide);
        if protein.is_empty() || peptide.is_empty() || peptide.len() > protein.len() {
            return TrypticName::default();
        }
        let match_start = match (start_search_loc..=protein.len() - peptide.len())
            .find(|position| protein[*position..*position + peptide.len()] == peptide[..])
        {
            Some(match_start) => match_start,
            None => return TrypticName::default(),
        };
        let match_end = match_start + peptide.len() - 1;

        let prefix = match match_start {
            0 => self.terminus_marker.clone(),
            _ => protein[match_start - 1].to_string(),
        };
        let suffix = match protein.get(match_end + 1) {
            Some(residue) => residue.to_string(),
            None => self.terminus_marker.clone(),
        };
        let peptide_sequence: String = peptide.iter().collect();
        let (matches_rule, _) = self.check_sequence_against_cleavage_rule(
            &format!("{}{}{}{}{}", prefix, RESIDUE_SEPARATOR, peptide_sequence, RESIDUE_SEPARATOR, suffix),
            false,
        );

        let name = if matches_rule {
            let fragment_number = match match_start {
                0 => 1,
                _ => {
                    let first_residue = peptide[0].to_string();
                    self.count_fragments(&protein[..match_start], &first_residue) + 1
                }
            };
            let fragment_count = self.count_fragments(&peptide, &suffix);
            match fragment_count {
                0 | 1 => format!("t{}", fragment_number),
                _ => format!("t{}.{}", fragment_number, fragment_count),
            }
        } else {
            let end = match icr2ls_compatible {
                true => match_end + 2,
                false => match_end + 1,
            };
            format!("{}.{}", match_start + 1, end)
        };

        TrypticName {
            name,
            residue_start: match_start + 1,
            residue_end: match_end + 1,
        }
    }

    /// Names all occurrences of the peptide within the protein, joined by the delimiter.
    ///
    /// # Arguments
    /// * `protein` - Protein sequence in one letter code
    /// * `peptide` - Peptide sequence in one letter code
    /// * `icr2ls_compatible` - Name not matching peptides ICR-2LS compatible
    /// * `delimiter` - Delimiter between names, see `DEFAULT_NAME_DELIMITER`
    ///
    pub fn get_tryptic_name_multiple_matches(
        &self,
        protein: &str,
        peptide: &str,
        icr2ls_compatible: bool,
        delimiter: &str,
    ) -> TrypticNameMatches {
        let mut matches = TrypticNameMatches::default();
        let mut names: Vec<String> = Vec::new();
        let mut start_search_loc = 0;
        loop {
            let tryptic_name =
                self.get_tryptic_name(protein, peptide, start_search_loc, icr2ls_compatible);
            if tryptic_name.is_empty() {
                break;
            }
            if names.is_empty() {
                matches.residue_start = tryptic_name.residue_start;
                matches.residue_end = tryptic_name.residue_end;
            }
            // residue_start is 1-based, so this is the position after the match start
            start_search_loc = tryptic_name.residue_start;
            names.push(tryptic_name.name);
        }
        matches.match_count = names.len();
        matches.names = names.join(delimiter);
        matches
    }

    /// Returns the fragment starting at the given position and ending at the next cleavage site
    /// or the protein end. Returns `None` if the start is behind the protein end.
    ///
    /// # Arguments
    /// * `protein` - Protein sequence in one letter code
    /// * `start` - 0-based start position
    ///
    pub fn get_tryptic_peptide_next(&self, protein: &str, start: usize) -> Option<Fragment> {
        let residues = self.normalize(protein);
        self.get_tryptic_peptide_next_in(&residues, start)
    }

    fn get_tryptic_peptide_next_in(&self, residues: &[char], start: usize) -> Option<Fragment> {
        if start >= residues.len() {
            return None;
        }
        let end = self
            .find_next_cleavage_loc_in(residues, &self.terminus_marker, start)
            .unwrap_or(residues.len() - 1);
        Some(Fragment {
            sequence: residues[start..=end].iter().collect(),
            start,
            end,
        })
    }

    /// Returns the n-th fragment of the protein, starting with 1.
    /// Returns `None` for 0 or if the protein has fewer fragments.
    ///
    /// # Arguments
    /// * `protein` - Protein sequence in one letter code
    /// * `fragment_number` - 1-based fragment number
    ///
    pub fn get_tryptic_peptide_by_fragment_number(
        &self,
        protein: &str,
        fragment_number: usize,
    ) -> Option<Fragment> {
        if fragment_number == 0 {
            return None;
        }
        let residues = self.normalize(protein);
        let mut start = 0;
        for _ in 1..fragment_number {
            start = self.get_tryptic_peptide_next_in(&residues, start)?.end + 1;
        }
        self.get_tryptic_peptide_next_in(&residues, start)
    }

    /// Returns all fragments of the protein in order
    ///
    /// # Arguments
    /// * `protein` - Protein sequence in one letter code
    ///
    pub fn get_fragments(&self, protein: &str) -> Vec<Fragment> {
        let residues = self.normalize(protein);
        let mut fragments = Vec::new();
        let mut start = 0;
        while let Some(fragment) = self.get_tryptic_peptide_next_in(&residues, start) {
            start = fragment.end + 1;
            fragments.push(fragment);
        }
        fragments
    }

    /// Digests a protein into peptides with up to `max_number_of_missed_cleavages`
    /// missed cleavages. Peptides containing unknown residues are skipped.
    /// Returns the peptides with their number of missed cleavages.
    ///
    /// # Arguments
    /// * `protein` - Protein sequence in one letter code
    /// * `max_number_of_missed_cleavages` - Maximum number of missed cleavages
    /// * `min_peptide_length` - Minimum length of a peptide
    /// * `max_peptide_length` - Maximum length of a peptide
    ///
    pub fn digest(
        &self,
        protein: &str,
        max_number_of_missed_cleavages: usize,
        min_peptide_length: usize,
        max_peptide_length: usize,
    ) -> HashMap<String, i16> {
        let protein_parts = self.get_fragments(protein);
        let mut peptides: HashMap<String, i16> = HashMap::new();
        for part_index in 0..protein_parts.len() {
            let last_part_to_add = cmp::min(
                part_index + max_number_of_missed_cleavages + 1,
                protein_parts.len(),
            );
            let mut peptide_sequence = String::new();
            for missed_cleavage in part_index..last_part_to_add {
                peptide_sequence.push_str(protein_parts[missed_cleavage].get_sequence());
                let length = peptide_sequence.chars().count();
                if min_peptide_length <= length
                    && length <= max_peptide_length
                    && !peptide_sequence.contains(UNKNOWN.get_one_letter_code())
                {
                    // keep the lowest number of missed cleavages for repeated sequences
                    let missed_cleavages = (missed_cleavage - part_index) as i16;
                    peptides
                        .entry(peptide_sequence.clone())
                        .and_modify(|current| *current = cmp::min(*current, missed_cleavages))
                        .or_insert(missed_cleavages);
                }
            }
        }
        peptides
    }
}

impl Default for CleavageRule {
    fn default() -> Self {
        Self::trypsin()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PROTEIN: &str = "IGKANR";
    const PROTEIN_WITH_PROLINE: &str = "MKPLRAKGGRPEK";

    #[test]
    fn test_check_sequence_against_cleavage_rule() {
        let trypsin = CleavageRule::trypsin();
        assert_eq!(
            trypsin.check_sequence_against_cleavage_rule("R.AEQDDLANYGPGNGVLPSAGSSISMEK.L", false),
            (true, 2)
        );
        assert_eq!(
            trypsin.check_sequence_against_cleavage_rule("R.IGASGEHIFIIGVDK.P", false),
            (false, 1)
        );
        assert_eq!(
            trypsin.check_sequence_against_cleavage_rule("R.IGASGEHIFIIGVDK.P", true),
            (true, 1)
        );
        // exception residue at the start of the peptide
        assert_eq!(
            trypsin.check_sequence_against_cleavage_rule("K.PEPTIDEK.-", false),
            (false, 1)
        );
        assert_eq!(
            trypsin.check_sequence_against_cleavage_rule("-.peptidek.a", false),
            (true, 2)
        );
        assert_eq!(
            trypsin.check_sequence_against_cleavage_rule("A.PEPTIDEK.A", false),
            (false, 1)
        );
    }

    #[test]
    fn test_check_sequence_degenerated_input() {
        let trypsin = CleavageRule::trypsin();
        assert_eq!(trypsin.check_sequence_against_cleavage_rule("PEPTIDEK", false), (true, 0));
        assert_eq!(trypsin.check_sequence_against_cleavage_rule("K..A", false), (true, 0));
        let no_rule = CleavageRule::new("", "", DEFAULT_TERMINUS_MARKER, true);
        assert_eq!(no_rule.check_sequence_against_cleavage_rule("A.PEPTIDE.A", false), (true, 0));
        // one separator, the missing side is the terminus
        assert_eq!(trypsin.check_sequence_against_cleavage_rule("K.ANR", false), (true, 2));
        assert_eq!(trypsin.check_sequence_against_cleavage_rule("PEPTIDE.A", false), (false, 1));
    }

    #[test]
    fn test_peptide_database_rule() {
        let rule = CleavageRule::new("-", "", "-", true);
        assert_eq!(rule.check_sequence_against_cleavage_rule("-.PEPTIDE.-", false), (true, 2));
        assert_eq!(rule.check_sequence_against_cleavage_rule("K.PEPTIDE.-", true), (false, 1));
    }

    #[test]
    fn test_find_next_cleavage_loc() {
        let trypsin = CleavageRule::trypsin();
        assert_eq!(trypsin.find_next_cleavage_loc(PROTEIN, "-", 0), Some(2));
        assert_eq!(trypsin.find_next_cleavage_loc(PROTEIN, "-", 3), Some(5));
        // K followed by P is skipped
        assert_eq!(trypsin.find_next_cleavage_loc(PROTEIN_WITH_PROLINE, "-", 0), Some(4));
        // the following residue decides about the last residue
        assert_eq!(trypsin.find_next_cleavage_loc("AGK", "P", 0), None);
        assert_eq!(trypsin.find_next_cleavage_loc("AGK", "A", 0), Some(2));
        // synthetic site at the end
        assert_eq!(trypsin.find_next_cleavage_loc("AGP", "-", 0), Some(2));
        assert_eq!(trypsin.find_next_cleavage_loc("AGP", "A", 0), None);
        assert_eq!(trypsin.find_next_cleavage_loc("AGP", "-", 3), None);
    }

    #[test]
    fn test_get_tryptic_name() {
        let trypsin = CleavageRule::trypsin();
        let name = trypsin.get_tryptic_name(PROTEIN, "IGK", 0, false);
        assert_eq!(name.get_name(), "t1");
        assert_eq!((name.get_residue_start(), name.get_residue_end()), (1, 3));
        let name = trypsin.get_tryptic_name(PROTEIN, "ANR", 0, false);
        assert_eq!(name.get_name(), "t2");
        assert_eq!((name.get_residue_start(), name.get_residue_end()), (4, 6));
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "IGKANR", 0, false).get_name(), "t1.2");
        // case insensitive
        assert_eq!(trypsin.get_tryptic_name("igkanr", "anr", 0, false).get_name(), "t2");
    }

    #[test]
    fn test_get_tryptic_name_not_following_rule() {
        let trypsin = CleavageRule::trypsin();
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "IG", 0, false).get_name(), "1.2");
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "IG", 0, true).get_name(), "1.3");
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "KANR", 0, false).get_name(), "3.6");
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "KANR", 0, true).get_name(), "3.7");
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "NR", 0, false).get_name(), "5.6");
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "NR", 0, true).get_name(), "5.7");
    }

    #[test]
    fn test_get_tryptic_name_with_exceptions() {
        let trypsin = CleavageRule::trypsin();
        // MK | PLR | AK | GGR | PEK, KP and RP are no cleavage sites
        assert_eq!(trypsin.get_tryptic_name(PROTEIN_WITH_PROLINE, "MKPLR", 0, false).get_name(), "t1");
        assert_eq!(trypsin.get_tryptic_name(PROTEIN_WITH_PROLINE, "AK", 0, false).get_name(), "t2");
        assert_eq!(trypsin.get_tryptic_name(PROTEIN_WITH_PROLINE, "GGRPEK", 0, false).get_name(), "t3");
        assert_eq!(trypsin.get_tryptic_name(PROTEIN_WITH_PROLINE, "AKGGRPEK", 0, false).get_name(), "t2.2");
    }

    #[test]
    fn test_get_tryptic_name_not_found() {
        let trypsin = CleavageRule::trypsin();
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "WWW", 0, false), TrypticName::default());
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "IGK", 1, false), TrypticName::default());
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "IGKANRIGKANR", 0, false), TrypticName::default());
        assert_eq!(trypsin.get_tryptic_name("", "IGK", 0, false), TrypticName::default());
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "", 0, false), TrypticName::default());
        assert_eq!(trypsin.get_tryptic_name(PROTEIN, "IGK", 100, false), TrypticName::default());
    }

    #[test]
    fn test_get_tryptic_name_multiple_matches() {
        let trypsin = CleavageRule::trypsin();
        let matches = trypsin.get_tryptic_name_multiple_matches(
            "AGKAGKLLKAGK",
            "AGK",
            false,
            DEFAULT_NAME_DELIMITER,
        );
        assert_eq!(matches.get_names(), "t1, t2, t4");
        assert_eq!(matches.get_match_count(), 3);
        assert_eq!((matches.get_residue_start(), matches.get_residue_end()), (1, 3));

        let none = trypsin.get_tryptic_name_multiple_matches(PROTEIN, "WWW", false, DEFAULT_NAME_DELIMITER);
        assert_eq!(none.get_match_count(), 0);
        assert_eq!(none.get_names(), "");
    }

    #[test]
    fn test_fragments() {
        let trypsin = CleavageRule::trypsin();
        let fragments = trypsin.get_fragments(PROTEIN_WITH_PROLINE);
        let sequences: Vec<&str> = fragments.iter().map(|fragment| fragment.get_sequence()).collect();
        assert_eq!(sequences, vec!["MKPLR", "AK", "GGRPEK"]);
        assert_eq!((fragments[1].get_start(), fragments[1].get_end()), (5, 6));

        for (index, fragment) in fragments.iter().enumerate() {
            assert_eq!(
                trypsin.get_tryptic_peptide_by_fragment_number(PROTEIN_WITH_PROLINE, index + 1).as_ref(),
                Some(fragment)
            );
        }
        assert_eq!(trypsin.get_tryptic_peptide_by_fragment_number(PROTEIN_WITH_PROLINE, 0), None);
        assert_eq!(trypsin.get_tryptic_peptide_by_fragment_number(PROTEIN_WITH_PROLINE, 4), None);
        assert_eq!(trypsin.get_tryptic_peptide_next(PROTEIN_WITH_PROLINE, 13), None);
        assert_eq!(
            trypsin.get_tryptic_peptide_next(PROTEIN_WITH_PROLINE, 6).unwrap().get_sequence(),
            "K"
        );
        assert!(trypsin.get_fragments("").is_empty());
    }

    #[test]
    fn test_digest() {
        let trypsin = CleavageRule::trypsin();
        let peptides = trypsin.digest(PROTEIN_WITH_PROLINE, 1, 2, 8);
        let mut expected: HashMap<String, i16> = HashMap::new();
        expected.insert("MKPLR".to_string(), 0);
        expected.insert("AK".to_string(), 0);
        expected.insert("GGRPEK".to_string(), 0);
        expected.insert("MKPLRAK".to_string(), 1);
        expected.insert("AKGGRPEK".to_string(), 1);
        assert_eq!(peptides, expected);

        let peptides = trypsin.digest("AGKXAKR", 0, 1, 10);
        assert!(!peptides.contains_key("XAK"));
        assert_eq!(peptides.get("AGK"), Some(&0));
        assert_eq!(peptides.get("R"), Some(&0));
    }
}
