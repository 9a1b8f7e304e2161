// 3rd party imports
use tracing::warn;

// internal imports
use crate::errors::peptide_error::PeptideError;

/// Maximum number of modifications a single residue can carry
pub const MAX_MODIFICATIONS: usize = 6;

/// Returns true if the character can be part of a modification symbol.
/// Valid are printable ASCII characters except letters, digits, space, `-` and `.`.
///
/// # Arguments
/// * `character` - Character to check
///
pub fn is_modification_symbol_char(character: char) -> bool {
    character.is_ascii_graphic()
        && !character.is_ascii_alphanumeric()
        && character != '-'
        && character != '.'
}

/// A named mass delta which can be attached to residues, e.g. `*` for phosphorylation.
///
#[derive(Clone, Debug, PartialEq)]
pub struct ModificationSymbol {
    symbol: String,
    mass_delta: f64,
    indicates_phosphorylation: bool,
    comment: String,
}

impl ModificationSymbol {
    /// Creates a new modification symbol.
    ///
    /// # Arguments
    /// * `symbol` - One or more modification symbol characters
    /// * `mass_delta` - Mass added to the modified residue (may be negative)
    /// * `indicates_phosphorylation` - True if the modification is a phosphorylation
    /// * `comment` - Free text, e.g. the modification name
    ///
    pub fn new(
        symbol: &str,
        mass_delta: f64,
        indicates_phosphorylation: bool,
        comment: &str,
    ) -> Result<Self, PeptideError> {
        if symbol.is_empty() || !symbol.chars().all(is_modification_symbol_char) {
            return Err(PeptideError::InvalidModificationSymbol(symbol.to_string()));
        }
        Ok(Self {
            symbol: symbol.to_string(),
            mass_delta,
            indicates_phosphorylation,
            comment: comment.to_string(),
        })
    }

    pub fn get_symbol(&self) -> &str {
        &self.symbol
    }

    pub fn get_mass_delta(&self) -> f64 {
        self.mass_delta
    }

    pub fn indicates_phosphorylation(&self) -> bool {
        self.indicates_phosphorylation
    }

    pub fn get_comment(&self) -> &str {
        &self.comment
    }
}

lazy_static! {
    /// Modification symbols every new peptide starts with
    static ref DEFAULT_MODIFICATION_SYMBOLS: Vec<ModificationSymbol> = vec![
        ModificationSymbol { symbol: "*".to_string(), mass_delta: 79.966331, indicates_phosphorylation: true, comment: "Phosphorylation [HPO3]".to_string() },
        ModificationSymbol { symbol: "+".to_string(), mass_delta: 14.01565, indicates_phosphorylation: false, comment: "Methylation [CH2]".to_string() },
        ModificationSymbol { symbol: "@".to_string(), mass_delta: 15.994915, indicates_phosphorylation: false, comment: "Oxidation [O]".to_string() },
        ModificationSymbol { symbol: "!".to_string(), mass_delta: 57.021464, indicates_phosphorylation: false, comment: "Carbamidomethylation [C2H3NO]".to_string() },
        ModificationSymbol { symbol: "&".to_string(), mass_delta: 58.005479, indicates_phosphorylation: false, comment: "Carboxymethylation [C2H2O2]".to_string() },
        ModificationSymbol { symbol: "#".to_string(), mass_delta: 0.984016, indicates_phosphorylation: false, comment: "Deamidation".to_string() },
        ModificationSymbol { symbol: "$".to_string(), mass_delta: 42.010565, indicates_phosphorylation: false, comment: "Acetylation [C2H2O]".to_string() },
    ];
}

/// Registry of modification symbols. Residues reference entries by their ID,
/// which is the 0-based position in the registry.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModificationRegistry {
    modifications: Vec<ModificationSymbol>,
}

impl ModificationRegistry {
    /// Creates an empty registry
    ///
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing the default modification symbols
    ///
    pub fn with_defaults() -> Self {
        Self {
            modifications: DEFAULT_MODIFICATION_SYMBOLS.clone(),
        }
    }

    /// Adds a modification symbol or updates it if the symbol already exists.
    /// Returns the ID of the modification.
    ///
    /// # Arguments
    /// * `symbol` - One or more modification symbol characters
    /// * `mass_delta` - Mass added to the modified residue
    /// * `indicates_phosphorylation` - True if the modification is a phosphorylation
    /// * `comment` - Free text
    ///
    pub fn set(
        &mut self,
        symbol: &str,
        mass_delta: f64,
        indicates_phosphorylation: bool,
        comment: &str,
    ) -> Result<usize, PeptideError> {
        let modification =
            ModificationSymbol::new(symbol, mass_delta, indicates_phosphorylation, comment)?;
        Ok(self.insert(modification))
    }

    /// Adds an already validated modification symbol, replacing an existing one
    /// with the same symbol. Returns the ID of the modification.
    ///
    /// # Arguments
    /// * `modification` - Modification symbol
    ///
    pub fn insert(&mut self, modification: ModificationSymbol) -> usize {
        let id = match self.get_id(modification.get_symbol()) {
            Some(id) => {
                self.modifications[id] = modification;
                return id;
            }
            None => {
                self.modifications.push(modification);
                self.modifications.len() - 1
            }
        };
        for symbol in self.get_ambiguous_symbols() {
            warn!(
                "Modification symbol '{}' can also be read as a sequence of other symbols, formatted sequences will not parse back identically",
                symbol
            );
        }
        id
    }

    /// Returns the symbols which can be composed of two or more other registered symbols,
    /// e.g. `**` if `*` is registered as well. Residues carrying the shorter symbols
    /// next to each other are formatted the same as residues carrying the longer symbol.
    ///
    pub fn get_ambiguous_symbols(&self) -> Vec<&str> {
        self.modifications
            .iter()
            .map(|modification| modification.get_symbol())
            .filter(|symbol| symbol.len() > 1 && self.is_composed_of_others(symbol))
            .collect()
    }

    /// True if the symbol can be split entirely into other registered symbols
    fn is_composed_of_others(&self, symbol: &str) -> bool {
        // reachable[i]: symbol[..i] is a concatenation of other symbols
        let mut reachable = vec![false; symbol.len() + 1];
        reachable[0] = true;
        for start in 0..symbol.len() {
            if !reachable[start] {
                continue;
            }
            for other in self.iter().map(|modification| modification.get_symbol()) {
                if other != symbol && symbol[start..].starts_with(other) {
                    reachable[start + other.len()] = true;
                }
            }
        }
        reachable[symbol.len()]
    }

    pub fn get(&self, id: usize) -> Option<&ModificationSymbol> {
        self.modifications.get(id)
    }

    /// Returns the ID of the given symbol (exact match)
    ///
    /// # Arguments
    /// * `symbol` - Modification symbol
    ///
    pub fn get_id(&self, symbol: &str) -> Option<usize> {
        self.modifications
            .iter()
            .position(|modification| modification.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.modifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifications.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModificationSymbol> {
        self.modifications.iter()
    }

    /// Removes the modification with the given ID. IDs of the following
    /// modifications are shifted down by one, callers have to update their references.
    ///
    /// # Arguments
    /// * `id` - ID of the modification
    ///
    pub fn remove(&mut self, id: usize) -> Result<ModificationSymbol, PeptideError> {
        if id >= self.modifications.len() {
            return Err(PeptideError::ModificationIdOutOfRange(
                id,
                self.modifications.len(),
            ));
        }
        Ok(self.modifications.remove(id))
    }

    pub fn clear(&mut self) {
        self.modifications.clear();
    }
}
