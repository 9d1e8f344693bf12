//! Decorative background sampling: the style table and the batch
//! generator.

pub mod background;
pub mod style_table;

#[cfg(test)]
mod test_properties;

pub use background::{BackgroundSampler, DecorativeItemDescriptor};
