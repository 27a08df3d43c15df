// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Substitution Rules
// ─────────────────────────────────────────────────────────────────────
//! Which label fills each of the eight child slots of a supertile.
//!
//! Slot `i` of every label is placed with canonical transform `T_i`.
//! `Gamma` leaves slot 2 empty.

use spectre_types::Label::{self, *};

/// Child slots per supertile.
pub const SLOT_COUNT: usize = 8;

/// Indexed by [`Label::index`].
pub const SUBSTITUTIONS: [[Option<Label>; SLOT_COUNT]; Label::COUNT] = [
    // Gamma
    [Some(Pi), Some(Delta), None, Some(Theta), Some(Sigma), Some(Xi), Some(Phi), Some(Gamma)],
    // Delta
    [Some(Xi), Some(Delta), Some(Xi), Some(Phi), Some(Sigma), Some(Pi), Some(Phi), Some(Gamma)],
    // Theta
    [Some(Psi), Some(Delta), Some(Pi), Some(Phi), Some(Sigma), Some(Pi), Some(Phi), Some(Gamma)],
    // Lambda
    [Some(Psi), Some(Delta), Some(Xi), Some(Phi), Some(Sigma), Some(Pi), Some(Phi), Some(Gamma)],
    // Xi
    [Some(Psi), Some(Delta), Some(Pi), Some(Phi), Some(Sigma), Some(Psi), Some(Phi), Some(Gamma)],
    // Pi
    [Some(Psi), Some(Delta), Some(Xi), Some(Phi), Some(Sigma), Some(Psi), Some(Phi), Some(Gamma)],
    // Sigma
    [Some(Xi), Some(Delta), Some(Xi), Some(Phi), Some(Sigma), Some(Pi), Some(Lambda), Some(Gamma)],
    // Phi
    [Some(Psi), Some(Delta), Some(Psi), Some(Phi), Some(Sigma), Some(Pi), Some(Phi), Some(Gamma)],
    // Psi
    [Some(Psi), Some(Delta), Some(Psi), Some(Phi), Some(Sigma), Some(Psi), Some(Phi), Some(Gamma)],
];

/// Child slots of `label`.
pub fn substitution(label: Label) -> &'static [Option<Label>; SLOT_COUNT] {
    &SUBSTITUTIONS[label.index()]
}
