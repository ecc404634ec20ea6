use std::sync::{Arc, LazyLock, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owner of the pseudo-random generator state used for color generation.
///
/// One OS-seeded instance per process is shared by default, see [`shared`].
/// Seeded construction exists so callers can reproduce a color sequence.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Source seeded from the operating system.
    pub fn new() -> Self {
        RandomSource {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Source with a fixed seed, same seed gives the same draw sequence.
    pub fn from_seed(seed: u64) -> Self {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw over the full 8-bit channel range.
    pub fn next_channel(&mut self) -> u8 {
        self.rng.random()
    }

    /// Uniform draw in `[0, len)`. Panics if `len` is zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// Full-width uniform draw, all 32 bits random.
    pub fn next_raw(&mut self) -> u32 {
        self.rng.random()
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED: LazyLock<Arc<Mutex<RandomSource>>> = LazyLock::new(|| Arc::new(Mutex::new(RandomSource::new())));

/// The process-wide source. The handle is cheap to clone, the generator
/// state behind it is created once and never reseeded.
pub fn shared() -> Arc<Mutex<RandomSource>> {
    Arc::clone(&SHARED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_draws_repeat() {
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_channel(), b.next_channel());
            assert_eq!(a.next_raw(), b.next_raw());
            assert_eq!(a.next_index(10), b.next_index(10));
        }
    }

    #[test]
    fn test_seeds_diverge() {
        let mut a = RandomSource::from_seed(1);
        let mut b = RandomSource::from_seed(2);
        let draws_a: Vec<u32> = (0..16).map(|_| a.next_raw()).collect();
        let draws_b: Vec<u32> = (0..16).map(|_| b.next_raw()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut source = RandomSource::from_seed(7);
        for _ in 0..10_000 {
            assert!(source.next_index(10) < 10);
        }
        for _ in 0..100 {
            assert_eq!(0, source.next_index(1));
        }
    }

    #[test]
    fn test_shared_handle_is_one_state() {
        let a = shared();
        let b = shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
