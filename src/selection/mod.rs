//! Selection state: era index, detail overlay, era-change events.

pub mod controller;

pub use controller::{DetailRef, EraChanged, SelectionController};
