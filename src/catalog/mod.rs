//! The era catalog: authored records, the ordered collection, and the
//! builtin four-era timeline.

pub mod builtin;
pub mod era;

pub use builtin::builtin;
pub use era::{DecorKind, DecorNote, EraCatalog, EraRecord, FactEntry, StyleKind};
