// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Tile Labels
// ─────────────────────────────────────────────────────────────────────
//! The nine supertile labels and the ten leaf labels.
//!
//! `Gamma` is the only label whose depth-0 tile is itself composite: it
//! splits into the unmirrored `Gamma1` and the mirrored ("mystic")
//! `Gamma2`. Every other label keeps its name down to the leaves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpectreError;

/// Supertile label. Indexes a `Generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    Gamma,
    Delta,
    Theta,
    Lambda,
    Xi,
    Pi,
    Sigma,
    Phi,
    Psi,
}

impl Label {
    pub const COUNT: usize = 9;

    /// All labels in canonical order.
    pub const ALL: [Label; Label::COUNT] = [
        Label::Gamma,
        Label::Delta,
        Label::Theta,
        Label::Lambda,
        Label::Xi,
        Label::Pi,
        Label::Sigma,
        Label::Phi,
        Label::Psi,
    ];

    /// Position in [`Label::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Label::Gamma => "Gamma",
            Label::Delta => "Delta",
            Label::Theta => "Theta",
            Label::Lambda => "Lambda",
            Label::Xi => "Xi",
            Label::Pi => "Pi",
            Label::Sigma => "Sigma",
            Label::Phi => "Phi",
            Label::Psi => "Psi",
        }
    }

    /// The leaf label a depth-0 tile of this label carries.
    ///
    /// `Gamma` has no single leaf; it is a pair of `Gamma1` and `Gamma2`.
    pub fn as_leaf(self) -> Option<LeafLabel> {
        match self {
            Label::Gamma => None,
            Label::Delta => Some(LeafLabel::Delta),
            Label::Theta => Some(LeafLabel::Theta),
            Label::Lambda => Some(LeafLabel::Lambda),
            Label::Xi => Some(LeafLabel::Xi),
            Label::Pi => Some(LeafLabel::Pi),
            Label::Sigma => Some(LeafLabel::Sigma),
            Label::Phi => Some(LeafLabel::Phi),
            Label::Psi => Some(LeafLabel::Psi),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Label {
    type Err = SpectreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::ALL
            .iter()
            .copied()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpectreError::UnknownLabel(s.to_string()))
    }
}

/// Label carried by a leaf tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeafLabel {
    Gamma1,
    Gamma2,
    Delta,
    Theta,
    Lambda,
    Xi,
    Pi,
    Sigma,
    Phi,
    Psi,
}

impl LeafLabel {
    pub const COUNT: usize = 10;

    pub const ALL: [LeafLabel; LeafLabel::COUNT] = [
        LeafLabel::Gamma1,
        LeafLabel::Gamma2,
        LeafLabel::Delta,
        LeafLabel::Theta,
        LeafLabel::Lambda,
        LeafLabel::Xi,
        LeafLabel::Pi,
        LeafLabel::Sigma,
        LeafLabel::Phi,
        LeafLabel::Psi,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            LeafLabel::Gamma1 => "Gamma1",
            LeafLabel::Gamma2 => "Gamma2",
            LeafLabel::Delta => "Delta",
            LeafLabel::Theta => "Theta",
            LeafLabel::Lambda => "Lambda",
            LeafLabel::Xi => "Xi",
            LeafLabel::Pi => "Pi",
            LeafLabel::Sigma => "Sigma",
            LeafLabel::Phi => "Phi",
            LeafLabel::Psi => "Psi",
        }
    }

    /// True for the mirrored half of `Gamma`.
    #[inline]
    pub fn is_mystic(self) -> bool {
        self == LeafLabel::Gamma2
    }

    /// Supertile label this leaf belongs to.
    pub fn parent(self) -> Label {
        match self {
            LeafLabel::Gamma1 | LeafLabel::Gamma2 => Label::Gamma,
            LeafLabel::Delta => Label::Delta,
            LeafLabel::Theta => Label::Theta,
            LeafLabel::Lambda => Label::Lambda,
            LeafLabel::Xi => Label::Xi,
            LeafLabel::Pi => Label::Pi,
            LeafLabel::Sigma => Label::Sigma,
            LeafLabel::Phi => Label::Phi,
            LeafLabel::Psi => Label::Psi,
        }
    }
}

impl fmt::Display for LeafLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LeafLabel {
    type Err = SpectreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeafLabel::ALL
            .iter()
            .copied()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpectreError::UnknownLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_index_matches_all_order() {
        for (i, label) in Label::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
        for (i, label) in LeafLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn test_label_parse_round_trip() {
        for label in Label::ALL {
            assert_eq!(label.name().parse::<Label>().unwrap(), label);
        }
        assert_eq!("delta".parse::<Label>().unwrap(), Label::Delta);
        assert!("Gamma1".parse::<Label>().is_err());
    }

    #[test]
    fn test_leaf_label_parse() {
        assert_eq!("Gamma2".parse::<LeafLabel>().unwrap(), LeafLabel::Gamma2);
        assert!(matches!(
            "Omega".parse::<LeafLabel>(),
            Err(SpectreError::UnknownLabel(_))
        ));
    }

    #[test]
    fn test_only_gamma2_is_mystic() {
        let mystics: Vec<_> = LeafLabel::ALL.iter().filter(|l| l.is_mystic()).collect();
        assert_eq!(mystics, vec![&LeafLabel::Gamma2]);
    }

    #[test]
    fn test_leaf_parent_round_trip() {
        for label in Label::ALL {
            match label.as_leaf() {
                Some(leaf) => assert_eq!(leaf.parent(), label),
                None => assert_eq!(label, Label::Gamma),
            }
        }
        assert_eq!(LeafLabel::Gamma1.parent(), Label::Gamma);
    }
}
