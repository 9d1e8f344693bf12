//! Data-driven style table: which decorative kinds each visual style
//! offers, and how the kind draw is weighted.
//!
//! The original kept this relationship inside per-style branches; a
//! lookup table keeps it authorable and testable on its own.

use rand::Rng;

use crate::catalog::{DecorKind, StyleKind};
use crate::core::config::KindWeights;

const RETRO_KINDS: &[DecorKind] = &[DecorKind::Button, DecorKind::Input, DecorKind::Card];
const GLOSSY_KINDS: &[DecorKind] = &[DecorKind::Button, DecorKind::Input, DecorKind::Card];
const FLAT_KINDS: &[DecorKind] = &[DecorKind::Button, DecorKind::Input, DecorKind::Card];

/// Decorative kinds offered for one style.
///
/// `Card` is only offered when the era actually has fact content;
/// otherwise the draw falls back to the button/input pair.
#[must_use]
pub fn decor_kinds_for(style: StyleKind, has_facts: bool) -> Vec<DecorKind> {
    let base = match style {
        StyleKind::Retro => RETRO_KINDS,
        StyleKind::Glossy => GLOSSY_KINDS,
        StyleKind::Flat => FLAT_KINDS,
    };
    base.iter()
        .copied()
        .filter(|k| has_facts || *k != DecorKind::Card)
        .collect()
}

/// Effective weight of one kind under the configured policy.
#[must_use]
pub fn weight_of(weights: &KindWeights, kind: DecorKind) -> f64 {
    match kind {
        DecorKind::Button => weights.button_weight(),
        DecorKind::Input => weights.input_weight(),
        DecorKind::Card => weights.card_weight(),
    }
}

/// Draw one kind from the offered set under the configured weights.
///
/// All observed revisions use the uniform default (every weight 1.0).
/// Zero total mass falls back to a uniform draw so the decorative layer
/// keeps working even under a degenerate weight table.
pub fn draw_kind<R: Rng + ?Sized>(
    kinds: &[DecorKind],
    weights: &KindWeights,
    rng: &mut R,
) -> DecorKind {
    debug_assert!(!kinds.is_empty(), "style table never offers zero kinds");
    let total: f64 = kinds.iter().map(|k| weight_of(weights, *k)).sum();
    if total <= 0.0 {
        return kinds[rng.random_range(0..kinds.len())];
    }
    let mut x = rng.random_range(0.0..total);
    for kind in kinds {
        x -= weight_of(weights, *kind);
        if x < 0.0 {
            return *kind;
        }
    }
    // Float summation can leave a sliver at the top of the range.
    kinds[kinds.len() - 1]
}
