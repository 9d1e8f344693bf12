//! Procedural decorative-background generator.
//!
//! On every era change the whole batch is regenerated — descriptors are
//! ephemeral throwaways, never diffed or reused. Each descriptor is an
//! independent draw: kind from the era's style table, vertical offset
//! across the viewport, scale and opacity from configured ranges, and
//! for card-like items one fact from the era's fact list.
//!
//! The random source is injected so output is reproducible: production
//! callers pass `rand::rng()`, tests pass a seeded `StdRng`.

use rand::Rng;

use crate::catalog::{DecorKind, EraRecord, FactEntry};
use crate::core::config::{
    FALLBACK_VIEWPORT_HEIGHT, OpacityMode, SamplerConfig, ShowcaseConfig,
};
use crate::sampler::style_table;

/// One decorative item, ready for a rendering layer to lay out.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorativeItemDescriptor {
    /// Which UI replica to draw.
    pub kind: DecorKind,
    /// Vertical placement in `[0, viewport_height)`.
    pub vertical_offset: f64,
    /// Uniform draw from the configured scale range.
    pub scale: f64,
    /// Fixed constant or uniform draw, per the configured opacity mode.
    pub opacity: f64,
    /// The fact shown on card-like items; `None` for other kinds.
    pub content: Option<FactEntry>,
}

/// Batch generator for decorative background items.
#[derive(Debug, Clone)]
pub struct BackgroundSampler {
    config: SamplerConfig,
    fallback_height: f64,
}

impl BackgroundSampler {
    /// Sampler over a configuration, normally one that passed
    /// [`ShowcaseConfig::validate`]. The config is taken as-is; the
    /// only knob the sampler re-checks at draw time is the viewport
    /// fallback, since a bad one would poison every offset draw.
    #[must_use]
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            config: config.sampler.clone(),
            fallback_height: config.viewport.fallback_height,
        }
    }

    /// Clamp a reported viewport height to something drawable.
    ///
    /// Non-finite or non-positive heights (headless embedders, zero-size
    /// surfaces) substitute the configured fallback instead of failing;
    /// the decorative layer must never block primary content. A
    /// degenerate fallback from an unvalidated config substitutes the
    /// builtin constant in turn, so the offset draw always has a
    /// non-empty range.
    #[must_use]
    pub fn sanitize_viewport(&self, viewport_height: f64) -> f64 {
        if drawable(viewport_height) {
            viewport_height
        } else if drawable(self.fallback_height) {
            self.fallback_height
        } else {
            FALLBACK_VIEWPORT_HEIGHT
        }
    }

    /// Generate a fresh batch for one era.
    ///
    /// Pure given `(era, viewport_height, rng)`: exactly
    /// `config.count` descriptors, each drawn independently with
    /// replacement. No ordering guarantee between descriptors.
    pub fn regenerate<R: Rng + ?Sized>(
        &self,
        era: &EraRecord,
        viewport_height: f64,
        rng: &mut R,
    ) -> Vec<DecorativeItemDescriptor> {
        let height = self.sanitize_viewport(viewport_height);
        let kinds = style_table::decor_kinds_for(era.style, era.has_facts());
        (0..self.config.count)
            .map(|_| self.draw_item(era, &kinds, height, rng))
            .collect()
    }

    fn draw_item<R: Rng + ?Sized>(
        &self,
        era: &EraRecord,
        kinds: &[DecorKind],
        height: f64,
        rng: &mut R,
    ) -> DecorativeItemDescriptor {
        let kind = style_table::draw_kind(kinds, &self.config.weights, rng);
        let vertical_offset = rng.random_range(0.0..height);
        let scale = rng.random_range(self.config.scale_min..=self.config.scale_max);
        let opacity = match self.config.opacity {
            OpacityMode::Fixed { value } => value,
            OpacityMode::Range { min, max } => rng.random_range(min..=max),
        };
        let content = if kind == DecorKind::Card {
            // Non-empty by construction: Card is only offered when the
            // era has facts.
            Some(era.facts[rng.random_range(0..era.facts.len())].clone())
        } else {
            None
        };
        DecorativeItemDescriptor {
            kind,
            vertical_offset,
            scale,
            opacity,
            content,
        }
    }
}

fn drawable(height: f64) -> bool {
    height.is_finite() && height > 0.0
}
