//! Era records and the ordered, immutable catalog they live in.

#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, ShowcaseError};

/// Visual-style tag of one design era. Closed set; the sampler's style
/// table is keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    /// Hard-edged early-GUI chrome: monospace labels, inset shadows.
    Retro,
    /// Web 2.0 gradients, pill shapes, glass highlights.
    Glossy,
    /// Flat and minimal, including the dark-mode variant.
    Flat,
}

/// The kinds of decorative UI replica the background can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorKind {
    Button,
    Input,
    Card,
}

/// One authored fact shown on a card-like decorative item and its
/// detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactEntry {
    /// Short headline printed on the card itself.
    pub headline: String,
    /// Long-form body shown when the card is activated.
    pub body: String,
}

/// Long-form narrative for one decorative kind, shown when a button- or
/// input-like item is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorNote {
    pub kind: DecorKind,
    pub body: String,
}

/// One design era: authored, immutable, loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraRecord {
    /// Ordinal position; contiguous from 0 within the catalog.
    pub id: usize,
    /// Display year string, e.g. "1980s".
    pub label: String,
    /// Era headline.
    pub title: String,
    /// Narrative summary paragraph.
    pub summary: String,
    /// Visual-style tag driving the decorative style table.
    pub style: StyleKind,
    /// Per-kind narrative for detail overlays.
    #[serde(default)]
    pub decor_notes: Vec<DecorNote>,
    /// Fact-card entries; empty for eras without cards.
    #[serde(default)]
    pub facts: Vec<FactEntry>,
}

impl EraRecord {
    /// Whether card-like decorative items may be offered for this era.
    #[must_use]
    pub fn has_facts(&self) -> bool {
        !self.facts.is_empty()
    }

    /// Narrative body for one decorative kind, if authored.
    #[must_use]
    pub fn decor_note(&self, kind: DecorKind) -> Option<&str> {
        self.decor_notes
            .iter()
            .find(|n| n.kind == kind)
            .map(|n| n.body.as_str())
    }
}

/// Ordered, immutable collection of era records.
///
/// Non-empty by construction; ids are contiguous from 0 and double as
/// positions, so `get` is a checked index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct EraCatalog {
    eras: Vec<EraRecord>,
}

/// On-disk shape of an authored catalog: a plain list of eras.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    eras: Vec<EraRecord>,
}

impl TryFrom<CatalogFile> for EraCatalog {
    type Error = ShowcaseError;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Self::new(file.eras)
    }
}

impl From<EraCatalog> for CatalogFile {
    fn from(catalog: EraCatalog) -> Self {
        Self { eras: catalog.eras }
    }
}

impl EraCatalog {
    /// Build a catalog, failing fast on an empty or misnumbered list.
    pub fn new(eras: Vec<EraRecord>) -> Result<Self> {
        if eras.is_empty() {
            return Err(ShowcaseError::EmptyCatalog);
        }
        for (position, era) in eras.iter().enumerate() {
            if era.id != position {
                return Err(ShowcaseError::InvalidCatalog {
                    details: format!(
                        "era at position {position} carries id {}; ids must be contiguous from 0",
                        era.id
                    ),
                });
            }
        }
        Ok(Self { eras })
    }

    /// Parse an authored catalog from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::new(file.eras)
    }

    /// Load an authored catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ShowcaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Record for one era id.
    pub fn get(&self, id: usize) -> Result<&EraRecord> {
        self.eras.get(id).ok_or(ShowcaseError::OutOfRange {
            id,
            len: self.eras.len(),
        })
    }

    /// All records in authored order. Re-iterable without side effects.
    #[must_use]
    pub fn all(&self) -> &[EraRecord] {
        &self.eras
    }

    /// Number of eras. Always >= 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.eras.len()
    }

    /// Present for API completeness; a constructed catalog is never
    /// empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }
}
