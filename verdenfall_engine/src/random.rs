//! Random source for NPC wandering.
//!
//! Movement only needs two primitives, so they sit behind a small trait. The
//! game uses a seedable `StdRng`; tests script the exact sequence they want.

use std::collections::VecDeque;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two random choices NPC movement makes.
pub trait RandomSource {
    /// A fair coin: `true` means "move this turn".
    fn coin_flip(&mut self) -> bool;
    /// A uniform index in `0..len`. Callers never pass zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn coin_flip(&mut self) -> bool {
        self.random_bool(0.5)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Build the game's random source, seeded if a seed is supplied.
pub fn game_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        info!("NPC movement seeded with {seed}");
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_os_rng()
    }
}

/// Deterministic source that replays queued answers.
///
/// Once a queue runs dry, flips come up `false` (nobody moves) and picks come up `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    flips: VecDeque<bool>,
    picks: VecDeque<usize>,
}
impl ScriptedRandom {
    pub fn new(flips: impl IntoIterator<Item = bool>, picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
            picks: picks.into_iter().collect(),
        }
    }

    /// A source under which no NPC ever moves.
    pub fn still() -> Self {
        Self::default()
    }
}
impl RandomSource for ScriptedRandom {
    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len.max(1)
    }
}
