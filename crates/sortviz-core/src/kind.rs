//! Algorithm and array-shape identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Identifies one of the five supported sorting algorithms.
///
/// Parsed from and displayed as its lowercase name.
///
/// # Examples
///
/// ```
/// use sortviz_core::AlgorithmKind;
///
/// let kind: AlgorithmKind = "merge".parse().unwrap();
/// assert_eq!(kind, AlgorithmKind::Merge);
/// assert_eq!(kind.to_string(), "merge");
/// assert!("heap".parse::<AlgorithmKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlgorithmKind {
    /// Bubble sort.
    #[default]
    Bubble,
    /// Selection sort.
    Selection,
    /// Insertion sort.
    Insertion,
    /// Top-down merge sort.
    Merge,
    /// Quicksort with Lomuto partitioning.
    Quick,
}

impl AlgorithmKind {
    /// All algorithms, in display order.
    pub const ALL: [AlgorithmKind; 5] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
    ];

    /// Lowercase selector name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// How a fresh array is laid out before sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArrayShape {
    /// Independent random values.
    #[default]
    Random,
    /// Descending values.
    Reversed,
    /// Ascending values with occasional small perturbations.
    NearlySorted,
}

impl ArrayShape {
    /// All shapes, in display order.
    pub const ALL: [ArrayShape; 3] = [Self::Random, Self::Reversed, Self::NearlySorted];

    /// Selector name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Reversed => "reversed",
            Self::NearlySorted => "nearly-sorted",
        }
    }
}

impl fmt::Display for ArrayShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArrayShape {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownShape {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.name().parse::<AlgorithmKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Quick".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Quick));
        assert_eq!(
            " NEARLY-SORTED ".parse::<ArrayShape>(),
            Ok(ArrayShape::NearlySorted)
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "heap".parse::<AlgorithmKind>(),
            Err(ParseError::UnknownAlgorithm {
                name: "heap".to_string()
            })
        );
        assert!(matches!(
            "zigzag".parse::<ArrayShape>(),
            Err(ParseError::UnknownShape { .. })
        ));
    }

    #[test]
    fn defaults() {
        assert_eq!(AlgorithmKind::default(), AlgorithmKind::Bubble);
        assert_eq!(ArrayShape::default(), ArrayShape::Random);
    }
}
