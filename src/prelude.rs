//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use era_showcase::prelude::*;
//! ```

// Core
pub use crate::core::config::{OpacityMode, SamplerConfig, ShowcaseConfig, ViewportConfig};
pub use crate::core::errors::{Result, ShowcaseError};

// Catalog
pub use crate::catalog::{
    DecorKind, DecorNote, EraCatalog, EraRecord, FactEntry, StyleKind, builtin,
};

// Selection
pub use crate::selection::{DetailRef, EraChanged, SelectionController};

// Sampler
pub use crate::sampler::{BackgroundSampler, DecorativeItemDescriptor};

// Scene
pub use crate::scene::{ResolvedDetail, Showcase};

// Journal
pub use crate::journal::{Journal, JournalEntry, JournalEvent};
