//! Dice sources.
//!
//! The engine never owns its randomness: every roll draws from a `DiceSource`
//! handed in by the caller. `RandomDice` wraps a seedable PRNG; `ScriptedDice`
//! replays a fixed sequence of faces (forced rolls, replays, externally
//! verified randomness).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::game::DIE_FACES;
use crate::game::error::GameError;

/// A source of single die faces in `1..=DIE_FACES`.
pub trait DiceSource: Send + Sync {
    fn roll_die(&mut self) -> u32;
}

/// Sum of two independent die draws, in `[2, 2 * DIE_FACES]`.
pub fn roll_pair(dice: &mut dyn DiceSource) -> u32 {
    dice.roll_die() + dice.roll_die()
}

#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// Same seed, same sequence of rolls.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSource for RandomDice {
    fn roll_die(&mut self) -> u32 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

/// Replays a fixed list of faces, cycling back to the start when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(faces: Vec<u32>) -> Result<Self, GameError> {
        if faces.is_empty() {
            return Err(GameError::InvalidArgument("scripted dice need at least one face".to_string()));
        }
        if let Some(face) = faces.iter().find(|f| !(1..=DIE_FACES).contains(*f)) {
            return Err(GameError::InvalidArgument(format!(
                "die face {face} is outside 1..={DIE_FACES}"
            )));
        }
        Ok(Self { faces, next: 0 })
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u32 {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        face
    }
}
