//! The per-roll state transition
//!
//! One roll consumes `(player throw, die size, table, advancing seed)` and
//! produces `(face, next seed)`. The function is pure: the caller persists
//! the returned seed before the next call, and replaying the same inputs
//! reproduces the same outputs bit-for-bit. That reproducibility is the
//! property that makes every roll independently auditable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng;
use crate::table::TrueTable;

/// Fixed XOR mask applied to player input before mixing.
///
/// Decorrelates low-entropy or patterned player throws (many players
/// tapping the same screen spot yield similar raw values) without
/// discarding genuine entropy. Protocol constant, not tunable.
pub const THROW_MASK: u32 = 0xA5A5_A5A5;

/// Errors that can occur during a roll
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RollError {
    #[error("die size must be at least 1")]
    InvalidDieSize,

    #[error("advancing seed must be nonzero")]
    ZeroSeed,
}

/// Result of one roll: the face shown and the seed to persist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Die face in `[1, die_size]`
    pub face: u32,
    /// Replacement advancing seed, never zero
    pub next_seed: u32,
}

/// Roll one die deterministically.
///
/// # Algorithm
///
/// 1. The current seed selects a table entry (`seed mod table_len`)
/// 2. The player throw is XOR-masked with [`THROW_MASK`]
/// 3. Entry, masked throw and seed are combined with wrapping 32-bit
///    addition; a zero result remaps to 1
/// 4. The combined value is advanced through the xorshift mixer
/// 5. The advanced value maps to a face via `floor(v / 2^32 * die_size) + 1`
///
/// The advanced value is also the next seed, so the whole mutable state of
/// the engine stays a single `u32`.
///
/// # Errors
/// [`RollError::ZeroSeed`] when `seed` is zero,
/// [`RollError::InvalidDieSize`] when `die_size` is zero.
///
/// # Example
/// ```
/// use true_dice_core_rs::{roll, TrueTable};
///
/// let (table, seed) = TrueTable::initialize(&[5, 0, 4_294_967_296]).unwrap();
/// let outcome = roll(42, 6, &table, seed).unwrap();
/// // Conformance vector: identical on every run and every implementation.
/// assert_eq!(outcome.face, 5);
/// assert_eq!(outcome.next_seed, 3_236_502_906);
/// ```
pub fn roll(
    player_throw: u32,
    die_size: u32,
    table: &TrueTable,
    seed: u32,
) -> Result<RollOutcome, RollError> {
    if seed == 0 {
        return Err(RollError::ZeroSeed);
    }
    if die_size == 0 {
        return Err(RollError::InvalidDieSize);
    }

    let entry = table.entry_for_seed(seed);
    let mix = player_throw ^ THROW_MASK;

    let combined = entry.wrapping_add(mix).wrapping_add(seed);
    // 0 is reserved as "never produced"
    let combined = if combined == 0 { 1 } else { combined };

    let advanced = rng::advance(combined);

    // Map to [1, die_size] via the unit interval. advanced / 2^32 < 1, so
    // the floor is at most die_size - 1.
    let unit = f64::from(advanced) / 4_294_967_296.0;
    let face = (unit * f64::from(die_size)).floor() as u32 + 1;

    Ok(RollOutcome {
        face,
        next_seed: advanced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conformance_table() -> TrueTable {
        let (table, _) = TrueTable::initialize(&[5, 0, 4_294_967_296]).unwrap();
        table
    }

    #[test]
    fn test_conformance_vector() {
        let table = conformance_table();
        let outcome = roll(42, 6, &table, 1).unwrap();
        assert_eq!(
            outcome,
            RollOutcome {
                face: 5,
                next_seed: 3_236_502_906,
            }
        );
    }

    #[test]
    fn test_deterministic() {
        let table = conformance_table();
        let a = roll(12_345, 20, &table, 777).unwrap();
        let b = roll(12_345, 20, &table, 777).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_face_in_range() {
        let table = conformance_table();
        let mut seed = 1u32;
        for throw in 0..1_000u32 {
            let outcome = roll(throw, 6, &table, seed).unwrap();
            assert!((1..=6).contains(&outcome.face));
            assert_ne!(outcome.next_seed, 0);
            seed = outcome.next_seed;
        }
    }

    #[test]
    fn test_one_sided_die_always_one() {
        let table = conformance_table();
        let mut seed = 1u32;
        for throw in [0u32, 42, u32::MAX] {
            let outcome = roll(throw, 1, &table, seed).unwrap();
            assert_eq!(outcome.face, 1);
            seed = outcome.next_seed;
        }
    }

    #[test]
    fn test_rejects_zero_seed() {
        let table = conformance_table();
        assert_eq!(roll(42, 6, &table, 0), Err(RollError::ZeroSeed));
    }

    #[test]
    fn test_rejects_zero_die_size() {
        let table = conformance_table();
        assert_eq!(roll(42, 0, &table, 1), Err(RollError::InvalidDieSize));
    }

    #[test]
    fn test_next_seed_independent_of_die_size() {
        // The die size only shapes the face mapping; the seed chain is
        // shared so a transcript can mix die sizes freely.
        let table = conformance_table();
        let d6 = roll(42, 6, &table, 1).unwrap();
        let d20 = roll(42, 20, &table, 1).unwrap();
        assert_eq!(d6.next_seed, d20.next_seed);
    }
}
