use std::sync::{Arc, Mutex};

use crate::color::Color;
use crate::random_source::{self, RandomSource};

/// Alpha mask that turns any packed value into a fully opaque color.
const OPAQUE: u32 = 0xFF00_0000;

/// One of the ten ways a color can be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// A single full-width draw with alpha forced opaque afterwards. All
    /// three channels come out of one bit pattern, so they are correlated
    /// however the generator correlates them, unlike [`Strategy::Rgb`].
    Raw,
    /// Three independent channel draws.
    Rgb,
    /// Three independent channel draws, each averaged with the matching
    /// channel of the reference color. Pulls the result halfway towards the
    /// reference hue while keeping it random.
    Mixed(Color),
}

/// The selectable strategies. Selection indexes this table uniformly, so
/// each entry fires with probability 1/10; eight of the ten entries mix
/// towards a fixed reference, oversampling mixed outcomes 8:2 against pure
/// randomness.
pub const STRATEGIES: [Strategy; 10] = [
    Strategy::Raw,
    Strategy::Rgb,
    Strategy::Mixed(Color::BLACK),
    Strategy::Mixed(Color::WHITE),
    Strategy::Mixed(Color::RED),
    Strategy::Mixed(Color::GREEN),
    Strategy::Mixed(Color::BLUE),
    Strategy::Mixed(Color::YELLOW),
    Strategy::Mixed(Color::CYAN),
    Strategy::Mixed(Color::MAGENTA),
];

impl Strategy {
    /// Produces one color, advancing the source by one or three draws.
    /// Every result is fully opaque.
    pub fn apply(self, source: &mut RandomSource) -> Color {
        match self {
            Strategy::Raw => Color::from_u32(OPAQUE | source.next_raw()),
            Strategy::Rgb => Color::from_rgb(
                source.next_channel(),
                source.next_channel(),
                source.next_channel(),
            ),
            Strategy::Mixed(reference) => Color::from_rgb(
                mix_channel(source.next_channel(), reference.red()),
                mix_channel(source.next_channel(), reference.green()),
                mix_channel(source.next_channel(), reference.blue()),
            ),
        }
    }
}

/// Average of a fresh draw and the reference channel, rounding down.
fn mix_channel(draw: u8, reference: u8) -> u8 {
    ((draw as u16 + reference as u16) / 2) as u8
}

/// Produces pseudo-random colors that stay visually varied over many calls.
///
/// Each call picks one entry of [`STRATEGIES`] uniformly and applies it.
/// Generators built with [`ColorGenerator::new`] all advance the same
/// process-wide [`RandomSource`], and a clone shares its source.
#[derive(Clone)]
pub struct ColorGenerator {
    source: Arc<Mutex<RandomSource>>,
}

impl ColorGenerator {
    /// A generator over the process-wide shared source.
    pub fn new() -> Self {
        Self::with_source(random_source::shared())
    }

    /// A generator over an explicit source. Inject a seeded source to get a
    /// reproducible color sequence.
    pub fn with_source(source: Arc<Mutex<RandomSource>>) -> Self {
        ColorGenerator { source }
    }

    /// Returns the next pseudo-random color, always fully opaque.
    pub fn next_color(&self) -> Color {
        let mut source = self.source.lock().unwrap();
        let strategy = STRATEGIES[source.next_index(STRATEGIES.len())];
        strategy.apply(&mut source)
    }
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::new()
    }
}
