//! Pseudo-random RGB colors with good visual variety.
//!
//! A naive per-channel roll tends to deliver muddy, samey colors over many
//! draws. [`ColorGenerator`] instead picks one of ten generation strategies
//! per call, most of them mixing a fresh random color with a fixed reference
//! hue, which spreads the results much better across the palette. Typical
//! use is tagging items (graph nodes, categories, chart series) with
//! distinguishable background colors:
//!
//! ```
//! let background = motley::next_color();
//! assert!(background.is_opaque());
//! ```

pub mod color;
pub mod generator;
pub mod random_source;

pub use color::{Color, ParseColorError};
pub use generator::{ColorGenerator, STRATEGIES, Strategy};
pub use random_source::RandomSource;

/// Returns the next pseudo-random color from the process-wide generator.
pub fn next_color() -> Color {
    ColorGenerator::new().next_color()
}
