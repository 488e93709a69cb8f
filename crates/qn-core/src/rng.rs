//! Deterministic per-entity RNG.
//!
//! # Determinism strategy
//!
//! Each entity gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (entity_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive entity IDs uniformly across the seed space.
//! An entity's service times therefore depend only on the run seed and its
//! own ID, never on how its events interleave with other entities'.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::EntityId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-entity deterministic RNG, owned by the entity's process.
#[derive(Debug)]
pub struct EntityRng(SmallRng);

impl EntityRng {
    /// Seed deterministically from the run's global seed and an entity ID.
    pub fn new(global_seed: u64, entity: EntityId) -> Self {
        let seed = global_seed ^ entity.0.wrapping_mul(MIXING_CONSTANT);
        EntityRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
