/// Module containing amino acid information

// std imports
use std::collections::HashMap;

/// Amino acid residue (i.e. without water) with one and three letter code and masses
///
#[derive(Debug, PartialEq)]
pub struct AminoAcid {
    name: &'static str,
    one_letter_code: char,
    three_letter_code: &'static str,
    mono_mass: f64,
    average_mass: f64,
}

impl AminoAcid {
    /// Returns the amino acid the given one letter code, case insensitive.
    ///
    /// # Arguments
    /// * `one_letter_code` - One letter code of the amino acid
    ///
    pub fn get_by_one_letter_code(one_letter_code: char) -> Option<&'static Self> {
        return match one_letter_code.to_ascii_uppercase() {
            'A' => Some(&ALANINE),
            'B' => Some(&ASPARAGINE_OR_ASPARTIC_ACID),
            'C' => Some(&CYSTEINE),
            'D' => Some(&ASPARTIC_ACID),
            'E' => Some(&GLUTAMIC_ACID),
            'F' => Some(&PHENYLALANINE),
            'G' => Some(&GLYCINE),
            'H' => Some(&HISTIDINE),
            'I' => Some(&ISOLEUCINE),
            'J' => Some(&ISOLEUCINE_OR_LEUCINE),
            'K' => Some(&LYSINE),
            'L' => Some(&LEUCINE),
            'M' => Some(&METHIONINE),
            'N' => Some(&ASPARAGINE),
            'O' => Some(&PYRROLYSINE),
            'P' => Some(&PROLINE),
            'Q' => Some(&GLUTAMINE),
            'R' => Some(&ARGININE),
            'S' => Some(&SERINE),
            'T' => Some(&THREONINE),
            'U' => Some(&SELENOCYSTEINE),
            'V' => Some(&VALINE),
            'W' => Some(&TRYPTOPHAN),
            'Y' => Some(&TYROSINE),
            'Z' => Some(&GLUTAMINE_OR_GLUTAMIC_ACID),
            'X' => Some(&UNKNOWN),
            _ => None,
        };
    }

    /// Returns the amino acid for the given three letter code, case insensitive.
    ///
    /// # Arguments
    /// * `three_letter_code` - Three letter code of the amino acid, e.g. `Gly` or `GLY`
    ///
    pub fn get_by_three_letter_code(three_letter_code: &str) -> Option<&'static Self> {
        THREE_LETTER_CODE_LOOKUP
            .get(three_letter_code.to_ascii_lowercase().as_str())
            .copied()
    }

    pub fn get_all() -> &'static [&'static AminoAcid; 26] {
        return &ALL;
    }

    pub fn get_name(&self) -> &'static str {
        return self.name;
    }

    pub fn get_one_letter_code(&self) -> char {
        return self.one_letter_code;
    }

    pub fn get_three_letter_code(&self) -> &'static str {
        return self.three_letter_code;
    }

    pub fn get_mono_mass(&self) -> f64 {
        return self.mono_mass;
    }

    pub fn get_average_mass(&self) -> f64 {
        return self.average_mass;
    }

    /// Returns true if this is the placeholder for unknown residues (`X`, `Xxx`)
    ///
    pub fn is_unknown(&self) -> bool {
        return self.one_letter_code == UNKNOWN.one_letter_code;
    }
}

// Standard amino acids: https://proteomicsresource.washington.edu/protocols06/masses.php
pub const ALANINE:                  AminoAcid = AminoAcid{name: "Alanine",              one_letter_code: 'A',   three_letter_code: "Ala",   mono_mass: 71.037113805_f64,    average_mass: 71.0788_f64};
pub const CYSTEINE:                 AminoAcid = AminoAcid{name: "Cysteine",             one_letter_code: 'C',   three_letter_code: "Cys",   mono_mass: 103.009184505_f64,   average_mass: 103.1388_f64};
pub const ASPARTIC_ACID:            AminoAcid = AminoAcid{name: "Aspartic acid",        one_letter_code: 'D',   three_letter_code: "Asp",   mono_mass: 115.026943065_f64,   average_mass: 115.0886_f64};
pub const GLUTAMIC_ACID:            AminoAcid = AminoAcid{name: "Glutamic acid",        one_letter_code: 'E',   three_letter_code: "Glu",   mono_mass: 129.042593135_f64,   average_mass: 129.1155_f64};
pub const PHENYLALANINE:            AminoAcid = AminoAcid{name: "Phenylalanine",        one_letter_code: 'F',   three_letter_code: "Phe",   mono_mass: 147.068413945_f64,   average_mass: 147.1766_f64};
pub const GLYCINE:                  AminoAcid = AminoAcid{name: "Glycine",              one_letter_code: 'G',   three_letter_code: "Gly",   mono_mass: 57.021463735_f64,    average_mass: 57.0519_f64};
pub const HISTIDINE:                AminoAcid = AminoAcid{name: "Histidine",            one_letter_code: 'H',   three_letter_code: "His",   mono_mass: 137.058911875_f64,   average_mass: 137.1411_f64};
pub const ISOLEUCINE:               AminoAcid = AminoAcid{name: "Isoleucine",           one_letter_code: 'I',   three_letter_code: "Ile",   mono_mass: 113.084064015_f64,   average_mass: 113.1594_f64};
pub const LYSINE:                   AminoAcid = AminoAcid{name: "Lysine",               one_letter_code: 'K',   three_letter_code: "Lys",   mono_mass: 128.094963050_f64,   average_mass: 128.1741_f64};
pub const LEUCINE:                  AminoAcid = AminoAcid{name: "Leucine",              one_letter_code: 'L',   three_letter_code: "Leu",   mono_mass: 113.084064015_f64,   average_mass: 113.1594_f64};
pub const METHIONINE:               AminoAcid = AminoAcid{name: "Methionine",           one_letter_code: 'M',   three_letter_code: "Met",   mono_mass: 131.040484645_f64,   average_mass: 131.1926_f64};
pub const ASPARAGINE:               AminoAcid = AminoAcid{name: "Asparagine",           one_letter_code: 'N',   three_letter_code: "Asn",   mono_mass: 114.042927470_f64,   average_mass: 114.1038_f64};
pub const PYRROLYSINE:              AminoAcid = AminoAcid{name: "Pyrrolysine",          one_letter_code: 'O',   three_letter_code: "Pyl",   mono_mass: 237.147726925_f64,   average_mass: 237.29816_f64};
pub const PROLINE:                  AminoAcid = AminoAcid{name: "Proline",              one_letter_code: 'P',   three_letter_code: "Pro",   mono_mass: 97.052763875_f64,    average_mass: 97.1167_f64};
pub const GLUTAMINE:                AminoAcid = AminoAcid{name: "Glutamine",            one_letter_code: 'Q',   three_letter_code: "Gln",   mono_mass: 128.05857754_f64,    average_mass: 128.1307_f64};
pub const ARGININE:                 AminoAcid = AminoAcid{name: "Arginine",             one_letter_code: 'R',   three_letter_code: "Arg",   mono_mass: 156.101111050_f64,   average_mass: 156.1875_f64};
pub const SERINE:                   AminoAcid = AminoAcid{name: "Serine",               one_letter_code: 'S',   three_letter_code: "Ser",   mono_mass: 87.032028435_f64,    average_mass: 87.0782_f64};
pub const THREONINE:                AminoAcid = AminoAcid{name: "Threonine",            one_letter_code: 'T',   three_letter_code: "Thr",   mono_mass: 101.047678505_f64,   average_mass: 101.1051_f64};
pub const SELENOCYSTEINE:           AminoAcid = AminoAcid{name: "Selenocysteine",       one_letter_code: 'U',   three_letter_code: "Sec",   mono_mass: 150.953633405_f64,   average_mass: 150.0379_f64};
pub const VALINE:                   AminoAcid = AminoAcid{name: "Valine",               one_letter_code: 'V',   three_letter_code: "Val",   mono_mass: 99.068413945_f64,    average_mass: 99.1326_f64};
pub const TRYPTOPHAN:               AminoAcid = AminoAcid{name: "Tryptophan",           one_letter_code: 'W',   three_letter_code: "Trp",   mono_mass: 186.079312980_f64,   average_mass: 186.2132_f64};
pub const TYROSINE:                 AminoAcid = AminoAcid{name: "Tyrosine",             one_letter_code: 'Y',   three_letter_code: "Tyr",   mono_mass: 163.063328575_f64,   average_mass: 163.1760_f64};
// Ambigous amino acids
pub const ASPARAGINE_OR_ASPARTIC_ACID: AminoAcid = AminoAcid{name: "Asparagine or aspartic acid",  one_letter_code: 'B',   three_letter_code: "Asx", mono_mass: 114.5349352675_f64,  average_mass: 114.59502_f64};
pub const ISOLEUCINE_OR_LEUCINE:      AminoAcid = AminoAcid{name: "Isoleucine or Leucine",        one_letter_code: 'J',   three_letter_code: "Xle", mono_mass: 113.084064015_f64,   average_mass: 113.1594_f64};
pub const GLUTAMINE_OR_GLUTAMIC_ACID:  AminoAcid = AminoAcid{name: "Glutamine or glutamic acid",   one_letter_code: 'Z',   three_letter_code: "Glx", mono_mass: 128.5505853375_f64,  average_mass: 128.6216_f64};
// Placeholder for residues which could not be resolved. Its mass is never used, see `is_unknown()`.
pub const UNKNOWN:                  AminoAcid = AminoAcid{name: "Unknown Amino Acid",    one_letter_code: 'X',   three_letter_code: "Xxx",   mono_mass: 0.0_f64,                 average_mass: 0.0_f64};

const ALL: [&'static AminoAcid; 26] = [
    &ALANINE,
    &CYSTEINE,
    &ASPARTIC_ACID,
    &GLUTAMIC_ACID,
    &PHENYLALANINE,
    &GLYCINE,
    &HISTIDINE,
    &ISOLEUCINE,
    &LYSINE,
    &LEUCINE,
    &METHIONINE,
    &ASPARAGINE,
    &PYRROLYSINE,
    &PROLINE,
    &GLUTAMINE,
    &ARGININE,
    &SERINE,
    &THREONINE,
    &SELENOCYSTEINE,
    &VALINE,
    &TRYPTOPHAN,
    &TYROSINE,
    &ASPARAGINE_OR_ASPARTIC_ACID,
    &ISOLEUCINE_OR_LEUCINE,
    &GLUTAMINE_OR_GLUTAMIC_ACID,
    &UNKNOWN
];

lazy_static! {
    /// Lower cased three letter code to amino acid
    static ref THREE_LETTER_CODE_LOOKUP: HashMap<String, &'static AminoAcid> = ALL
        .iter()
        .map(|amino_acid| (amino_acid.three_letter_code.to_ascii_lowercase(), *amino_acid))
        .collect();
}
