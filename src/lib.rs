#![forbid(unsafe_code)]

//! Era Showcase — view-model core for an interactive UI-design-history
//! presentation.
//!
//! Three cooperating pieces, all pure logic with no rendering:
//! 1. **Era catalog** — ordered, immutable records for each design era
//!    (1980s early GUI through 2020s dark-mode minimalism)
//! 2. **Selection controller** — which era is current, which detail
//!    overlay is open, and an explicit era-change event feed
//! 3. **Background sampler** — per era change, a fresh batch of
//!    randomly parameterized decorative UI replicas sized to the
//!    viewport, drawn from a per-style kind table
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use era_showcase::prelude::*;
//!
//! let mut show = Showcase::new(builtin(), &ShowcaseConfig::default())?;
//! show.set_viewport_height(1080.0);
//! show.select_era(1)?;
//! for item in show.background() {
//!     // hand each descriptor to the rendering layer
//!     let _ = (item.kind, item.vertical_offset, item.scale, item.opacity);
//! }
//! # Ok::<(), era_showcase::core::errors::ShowcaseError>(())
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use era_showcase::catalog::EraCatalog;
//! use era_showcase::sampler::BackgroundSampler;
//! ```

pub mod prelude;

pub mod catalog;
pub mod core;
pub mod journal;
pub mod sampler;
pub mod scene;
pub mod selection;
