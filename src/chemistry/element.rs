/// Module containing the element masses needed to resolve chemical formulas

// std imports
use std::collections::HashMap;

/// A chemical element with its monoisotopic and average mass
///
#[derive(Debug, PartialEq)]
pub struct Element {
    name: &'static str,
    symbol: &'static str,
    mono_mass: f64,
    average_mass: f64,
}

impl Element {
    /// Returns the element for the given symbol, e.g. `H` or `Se`.
    /// The lookup is case sensitive, as `Co` and `CO` mean different things in a formula.
    ///
    /// # Arguments
    /// * `symbol` - Element symbol
    ///
    pub fn get_by_symbol(symbol: &str) -> Option<&'static Self> {
        ELEMENT_LOOKUP.get(symbol).copied()
    }

    pub fn get_all() -> &'static [&'static Element; 13] {
        &ALL
    }

    pub fn get_name(&self) -> &'static str {
        self.name
    }

    pub fn get_symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn get_mono_mass(&self) -> f64 {
        self.mono_mass
    }

    pub fn get_average_mass(&self) -> f64 {
        self.average_mass
    }
}

// Masses: https://www.ciaaw.org/atomic-masses.htm
pub const HYDROGEN:     Element = Element{name: "Hydrogen",     symbol: "H",    mono_mass: 1.00782503207_f64,   average_mass: 1.00794_f64};
pub const CARBON:       Element = Element{name: "Carbon",       symbol: "C",    mono_mass: 12.0_f64,            average_mass: 12.0107_f64};
pub const NITROGEN:     Element = Element{name: "Nitrogen",     symbol: "N",    mono_mass: 14.0030740048_f64,   average_mass: 14.0067_f64};
pub const OXYGEN:       Element = Element{name: "Oxygen",       symbol: "O",    mono_mass: 15.99491461956_f64,  average_mass: 15.9994_f64};
pub const FLUORINE:     Element = Element{name: "Fluorine",     symbol: "F",    mono_mass: 18.99840322_f64,     average_mass: 18.9984032_f64};
pub const SODIUM:       Element = Element{name: "Sodium",       symbol: "Na",   mono_mass: 22.9897692809_f64,   average_mass: 22.98976928_f64};
pub const PHOSPHORUS:   Element = Element{name: "Phosphorus",   symbol: "P",    mono_mass: 30.97376163_f64,     average_mass: 30.973762_f64};
pub const SULFUR:       Element = Element{name: "Sulfur",       symbol: "S",    mono_mass: 31.97207100_f64,     average_mass: 32.065_f64};
pub const CHLORINE:     Element = Element{name: "Chlorine",     symbol: "Cl",   mono_mass: 34.96885268_f64,     average_mass: 35.453_f64};
pub const POTASSIUM:    Element = Element{name: "Potassium",    symbol: "K",    mono_mass: 38.96370668_f64,     average_mass: 39.0983_f64};
pub const SELENIUM:     Element = Element{name: "Selenium",     symbol: "Se",   mono_mass: 79.9165213_f64,      average_mass: 78.96_f64};
pub const BROMINE:      Element = Element{name: "Bromine",      symbol: "Br",   mono_mass: 78.9183371_f64,      average_mass: 79.904_f64};
pub const IODINE:       Element = Element{name: "Iodine",       symbol: "I",    mono_mass: 126.904473_f64,      average_mass: 126.90447_f64};

const ALL: [&'static Element; 13] = [
    &HYDROGEN,
    &CARBON,
    &NITROGEN,
    &OXYGEN,
    &FLUORINE,
    &SODIUM,
    &PHOSPHORUS,
    &SULFUR,
    &CHLORINE,
    &POTASSIUM,
    &SELENIUM,
    &BROMINE,
    &IODINE,
];

lazy_static! {
    static ref ELEMENT_LOOKUP: HashMap<&'static str, &'static Element> =
        ALL.iter().map(|element| (element.symbol, *element)).collect();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_by_symbol() {
        assert_eq!(Element::get_by_symbol("H"), Some(&HYDROGEN));
        assert_eq!(Element::get_by_symbol("Se"), Some(&SELENIUM));
        // Symbols are case sensitive
        assert_eq!(Element::get_by_symbol("SE"), None);
        assert_eq!(Element::get_by_symbol("Xy"), None);
    }

    #[test]
    fn test_all_symbols_are_unique() {
        assert_eq!(ELEMENT_LOOKUP.len(), Element::get_all().len());
    }
}
