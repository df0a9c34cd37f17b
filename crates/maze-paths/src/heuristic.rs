use std::fmt;
use std::str::FromStr;

use maze_core::Cell;

use crate::distance::{euclidean, manhattan};
use crate::error::SearchError;

/// Distance estimator used to order an informed search.
pub trait Heuristic {
    /// Estimated remaining cost from `from` to `to`. Must be non-negative,
    /// and must never overestimate the true cost if A* is to stay optimal.
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Cell, Cell) -> f64,
{
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        self(from, to)
    }
}

/// The built-in heuristics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Distance {
    /// |Δrow| + |Δcol|; consistent on 4-connected unit-cost grids.
    #[default]
    Manhattan,
    /// Straight-line distance; admissible but looser than Manhattan.
    Euclidean,
    /// Always 0, which turns A* into uniform-cost search.
    Zero,
}

impl Distance {
    pub const ALL: [Distance; 3] = [Distance::Manhattan, Distance::Euclidean, Distance::Zero];

    pub const fn name(self) -> &'static str {
        match self {
            Distance::Manhattan => "manhattan",
            Distance::Euclidean => "euclidean",
            Distance::Zero => "zero",
        }
    }
}

impl Heuristic for Distance {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        match self {
            Distance::Manhattan => manhattan(from, to) as f64,
            Distance::Euclidean => euclidean(from, to),
            Distance::Zero => 0.0,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Distance {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Distance::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::UnknownName {
                kind: "heuristic",
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_estimate() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(Distance::Manhattan.estimate(a, b), 7.0);
        assert_eq!(Distance::Euclidean.estimate(a, b), 5.0);
        assert_eq!(Distance::Zero.estimate(a, b), 0.0);
    }

    #[test]
    fn closures_are_heuristics() {
        let double = |a: Cell, b: Cell| 2.0 * manhattan(a, b) as f64;
        assert_eq!(double.estimate(Cell::new(0, 0), Cell::new(1, 1)), 4.0);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Euclidean".parse::<Distance>(), Ok(Distance::Euclidean));
        assert_eq!("zero".parse::<Distance>(), Ok(Distance::Zero));
        assert!(matches!(
            "chebyshev".parse::<Distance>(),
            Err(SearchError::UnknownName { kind: "heuristic", .. })
        ));
    }
}
