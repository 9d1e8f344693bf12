//! Configuration system: TOML file + validated smart defaults.
//!
//! Everything here is presentation-layer tuning, not semantics: batch
//! size, scale/opacity draw ranges, kind weights, and the viewport
//! fallback. All knobs have documented defaults so an embedder can run
//! with `ShowcaseConfig::default()` and never touch a file.

#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, ShowcaseError};

/// Viewport height used when no display surface is available.
///
/// Decoration is cosmetic; a missing viewport must never block the
/// primary content, so the sampler substitutes this constant instead
/// of failing.
pub const FALLBACK_VIEWPORT_HEIGHT: f64 = 800.0;

/// Full showcase configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub sampler: SamplerConfig,
    pub viewport: ViewportConfig,
}

/// Decorative-background sampling knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SamplerConfig {
    /// Descriptors generated per batch. Authored revisions used 50, 70
    /// and 100.
    pub count: usize,
    /// Lower bound of the uniform scale draw.
    pub scale_min: f64,
    /// Upper bound of the uniform scale draw.
    pub scale_max: f64,
    /// Opacity policy: a fixed constant or a uniform range.
    pub opacity: OpacityMode,
    /// Per-kind weights for the kind draw. Omitted kinds weigh 1.0, so
    /// an empty table is the default uniform policy.
    pub weights: KindWeights,
}

/// Viewport fallback knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Substitute height when the embedder reports none.
    pub fallback_height: f64,
}

/// Opacity draw policy for decorative items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum OpacityMode {
    /// Every item gets the same opacity.
    Fixed { value: f64 },
    /// Opacity drawn uniformly from `[min, max]`.
    Range { min: f64, max: f64 },
}

/// Relative weights for the decorative-kind draw.
///
/// A missing entry means weight 1.0; all entries missing reproduces the
/// uniform choice of the authored revisions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct KindWeights {
    pub button: Option<f64>,
    pub input: Option<f64>,
    pub card: Option<f64>,
}

impl KindWeights {
    /// Effective weight for one kind.
    #[must_use]
    pub fn button_weight(&self) -> f64 {
        self.button.unwrap_or(1.0)
    }

    #[must_use]
    pub fn input_weight(&self) -> f64 {
        self.input.unwrap_or(1.0)
    }

    #[must_use]
    pub fn card_weight(&self) -> f64 {
        self.card.unwrap_or(1.0)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            count: 70,
            scale_min: 0.9,
            scale_max: 1.4,
            opacity: OpacityMode::default(),
            weights: KindWeights::default(),
        }
    }
}

impl Default for OpacityMode {
    fn default() -> Self {
        Self::Fixed { value: 0.45 }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            fallback_height: FALLBACK_VIEWPORT_HEIGHT,
        }
    }
}

impl ShowcaseConfig {
    /// Load config from an explicit path, or validated defaults when
    /// `None`.
    ///
    /// An explicit path that does not exist is an error; the caller
    /// asked for that file specifically.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let cfg = match path {
            Some(p) if p.exists() => {
                let raw = fs::read_to_string(p).map_err(|source| ShowcaseError::Io {
                    path: p.to_path_buf(),
                    source,
                })?;
                toml::from_str::<Self>(&raw)?
            }
            Some(p) => {
                return Err(ShowcaseError::MissingConfig {
                    path: p.to_path_buf(),
                });
            }
            None => Self::default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse config from a TOML string and validate it.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every knob against its documented domain.
    pub fn validate(&self) -> Result<()> {
        let s = &self.sampler;
        if s.count == 0 {
            return Err(ShowcaseError::InvalidConfig {
                details: "sampler.count must be >= 1".to_string(),
            });
        }
        if !(s.scale_min.is_finite() && s.scale_max.is_finite()) {
            return Err(ShowcaseError::InvalidConfig {
                details: "sampler scale bounds must be finite".to_string(),
            });
        }
        if !(s.scale_min > 0.0 && s.scale_min <= s.scale_max) {
            return Err(ShowcaseError::InvalidConfig {
                details: format!(
                    "sampler scale range must satisfy 0 < min <= max; got [{}, {}]",
                    s.scale_min, s.scale_max
                ),
            });
        }
        match s.opacity {
            OpacityMode::Fixed { value } => {
                validate_unit("sampler.opacity.value", value)?;
            }
            OpacityMode::Range { min, max } => {
                validate_unit("sampler.opacity.min", min)?;
                validate_unit("sampler.opacity.max", max)?;
                if min > max {
                    return Err(ShowcaseError::InvalidConfig {
                        details: format!(
                            "sampler.opacity range must satisfy min <= max; got [{min}, {max}]"
                        ),
                    });
                }
            }
        }
        let weights = [
            ("button", s.weights.button_weight()),
            ("input", s.weights.input_weight()),
            ("card", s.weights.card_weight()),
        ];
        for (name, val) in weights {
            if !val.is_finite() || val < 0.0 {
                return Err(ShowcaseError::InvalidConfig {
                    details: format!("sampler.weights.{name} must be finite and >= 0, got {val}"),
                });
            }
        }
        // Card weight alone cannot carry an era without facts, so the
        // button/input pair must keep some mass.
        if weights[0].1 + weights[1].1 <= 0.0 {
            return Err(ShowcaseError::InvalidConfig {
                details: "sampler.weights.button + sampler.weights.input must be > 0".to_string(),
            });
        }
        if !(self.viewport.fallback_height.is_finite() && self.viewport.fallback_height > 0.0) {
            return Err(ShowcaseError::InvalidConfig {
                details: format!(
                    "viewport.fallback_height must be positive and finite, got {}",
                    self.viewport.fallback_height
                ),
            });
        }
        Ok(())
    }
}

fn validate_unit(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ShowcaseError::InvalidConfig {
            details: format!("{name} must lie in [0, 1], got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = ShowcaseConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.sampler.count, 70);
        assert!((cfg.viewport.fallback_height - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_none_yields_defaults() {
        let cfg = ShowcaseConfig::load(None).expect("defaults must load");
        assert_eq!(cfg, ShowcaseConfig::default());
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let err = ShowcaseConfig::load(Some(Path::new("/nonexistent/showcase.toml")))
            .expect_err("expected missing config");
        assert_eq!(err.code(), "ERA-1002");
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("showcase.toml");
        fs::write(
            &path,
            "[sampler]\ncount = 50\nscale_min = 0.5\nscale_max = 1.5\n",
        )
        .expect("write config");
        let cfg = ShowcaseConfig::load(Some(&path)).expect("load");
        assert_eq!(cfg.sampler.count, 50);
        assert!((cfg.sampler.scale_min - 0.5).abs() < f64::EPSILON);
        // Unspecified sections keep their defaults.
        assert_eq!(cfg.sampler.opacity, OpacityMode::Fixed { value: 0.45 });
    }

    #[test]
    fn zero_count_rejected() {
        let err = ShowcaseConfig::from_toml_str("[sampler]\ncount = 0\n")
            .expect_err("expected invalid count");
        assert_eq!(err.code(), "ERA-1001");
    }

    #[test]
    fn inverted_scale_range_rejected() {
        let err = ShowcaseConfig::from_toml_str("[sampler]\nscale_min = 1.4\nscale_max = 0.9\n")
            .expect_err("expected invalid scale range");
        assert_eq!(err.code(), "ERA-1001");
    }

    #[test]
    fn opacity_range_mode_parses() {
        let cfg = ShowcaseConfig::from_toml_str(
            "[sampler.opacity]\nmode = \"range\"\nmin = 0.3\nmax = 1.0\n",
        )
        .expect("range opacity");
        assert_eq!(
            cfg.sampler.opacity,
            OpacityMode::Range { min: 0.3, max: 1.0 }
        );
    }

    #[test]
    fn opacity_outside_unit_interval_rejected() {
        let err = ShowcaseConfig::from_toml_str(
            "[sampler.opacity]\nmode = \"fixed\"\nvalue = 1.5\n",
        )
        .expect_err("expected invalid opacity");
        assert_eq!(err.code(), "ERA-1001");
    }

    #[test]
    fn negative_weight_rejected() {
        let err = ShowcaseConfig::from_toml_str("[sampler.weights]\nbutton = -1.0\n")
            .expect_err("expected invalid weight");
        assert_eq!(err.code(), "ERA-1001");
    }

    #[test]
    fn zero_button_and_input_mass_rejected() {
        let err = ShowcaseConfig::from_toml_str("[sampler.weights]\nbutton = 0.0\ninput = 0.0\n")
            .expect_err("expected zero-mass rejection");
        assert_eq!(err.code(), "ERA-1001");
    }

    #[test]
    fn nonpositive_fallback_height_rejected() {
        let err = ShowcaseConfig::from_toml_str("[viewport]\nfallback_height = 0.0\n")
            .expect_err("expected invalid viewport fallback");
        assert_eq!(err.code(), "ERA-1001");
    }

    #[test]
    fn toml_round_trip() {
        let cfg = ShowcaseConfig {
            sampler: SamplerConfig {
                count: 100,
                scale_min: 0.8,
                scale_max: 1.2,
                opacity: OpacityMode::Range { min: 0.3, max: 1.0 },
                weights: KindWeights {
                    button: Some(2.0),
                    input: None,
                    card: Some(0.5),
                },
            },
            viewport: ViewportConfig {
                fallback_height: 600.0,
            },
        };
        let raw = toml::to_string(&cfg).expect("serialize");
        let back = ShowcaseConfig::from_toml_str(&raw).expect("reparse");
        assert_eq!(cfg, back);
    }
}
