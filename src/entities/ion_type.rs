// std imports
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

// 3rd party imports
use serde::{Deserialize, Serialize};

// internal imports
use crate::errors::peptide_error::PeptideError;

/// Number of supported ion types
pub const ION_TYPE_COUNT: usize = 5;

/// Peptide backbone fragment ion types.
/// a, b and c ions contain the N-terminus, y and z ions the C-terminus.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IonType {
    A,
    B,
    C,
    Y,
    Z,
}

impl IonType {
    pub const ALL: [IonType; ION_TYPE_COUNT] =
        [IonType::A, IonType::B, IonType::C, IonType::Y, IonType::Z];

    /// Position of the ion type within an `IonTypeArray`
    pub fn index(&self) -> usize {
        match self {
            IonType::A => 0,
            IonType::B => 1,
            IonType::C => 2,
            IonType::Y => 3,
            IonType::Z => 4,
        }
    }

    /// Returns the generic symbol, e.g. `b`
    pub fn get_symbol(&self) -> &'static str {
        match self {
            IonType::A => "a",
            IonType::B => "b",
            IonType::C => "c",
            IonType::Y => "y",
            IonType::Z => "z",
        }
    }

    /// True for ion types containing the N-terminus (a, b, c)
    pub fn is_n_terminal(&self) -> bool {
        match self {
            IonType::A | IonType::B | IonType::C => true,
            IonType::Y | IonType::Z => false,
        }
    }

    /// True for ion types which get shoulder ions
    pub fn has_shoulder_ions(&self) -> bool {
        match self {
            IonType::A => false,
            IonType::B | IonType::C | IonType::Y | IonType::Z => true,
        }
    }
}

impl FromStr for IonType {
    type Err = PeptideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IonType::ALL
            .into_iter()
            .find(|ion_type| ion_type.get_symbol().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PeptideError::UnknownIonType(s.to_string()))
    }
}

impl Display for IonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_symbol())
    }
}

/// Fixed size array with one value per ion type, indexed by `IonType`.
/// Serialized as a plain array in a, b, c, y, z order.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IonTypeArray<T>([T; ION_TYPE_COUNT]);

impl<T> IonTypeArray<T> {
    /// Creates a new array from values in a, b, c, y, z order
    ///
    pub fn new(values: [T; ION_TYPE_COUNT]) -> Self {
        Self(values)
    }

    /// Creates a new array by calling `f` for each ion type
    ///
    pub fn from_fn(f: impl Fn(IonType) -> T) -> Self {
        Self(IonType::ALL.map(f))
    }

    /// Iterates over ion types and their values
    ///
    pub fn iter(&self) -> impl Iterator<Item = (IonType, &T)> {
        IonType::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<IonType> for IonTypeArray<T> {
    type Output = T;

    fn index(&self, ion_type: IonType) -> &Self::Output {
        &self.0[ion_type.index()]
    }
}

impl<T> IndexMut<IonType> for IonTypeArray<T> {
    fn index_mut(&mut self, ion_type: IonType) -> &mut Self::Output {
        &mut self.0[ion_type.index()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (position, ion_type) in IonType::ALL.iter().enumerate() {
            assert_eq!(ion_type.index(), position);
        }
    }

    #[test]
    fn test_ion_type_array() {
        let mut masses: IonTypeArray<f64> = IonTypeArray::default();
        masses[IonType::Y] = 42.0;
        assert_eq!(masses[IonType::Y], 42.0);
        assert_eq!(masses[IonType::B], 0.0);

        let symbols = IonTypeArray::from_fn(|ion_type| ion_type.get_symbol());
        let collected: Vec<(IonType, &&str)> = symbols.iter().collect();
        assert_eq!(collected[2], (IonType::C, &"c"));
        assert_eq!(symbols[IonType::Z], "z");
    }

    #[test]
    fn test_direction() {
        assert!(IonType::A.is_n_terminal());
        assert!(!IonType::Z.is_n_terminal());
        assert!(!IonType::A.has_shoulder_ions());
        assert!(IonType::C.has_shoulder_ions());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("y".parse::<IonType>().unwrap(), IonType::Y);
        assert_eq!(" B ".parse::<IonType>().unwrap(), IonType::B);
        assert_eq!(
            "x".parse::<IonType>(),
            Err(PeptideError::UnknownIonType("x".to_string()))
        );
    }
}
