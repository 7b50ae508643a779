//! Transcript replay and verification
//!
//! Any observer holding the committed table and the recorded sequence of
//! player throws can recompute every roll of a game from the initial seed
//! and check the claimed faces. This module is that observer-side check:
//! pure recomputation, no I/O, first divergence wins.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roll::{roll, RollError};
use crate::table::TrueTable;

/// One recorded roll: the inputs the player supplied and the face the
/// server claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub player_throw: u32,
    pub die_size: u32,
    pub claimed_face: u32,
}

/// Errors reported while replaying a transcript
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuditError {
    #[error("transcript entry {index}: claimed face {claimed}, recomputed {recomputed}")]
    FaceMismatch {
        index: usize,
        claimed: u32,
        recomputed: u32,
    },

    #[error("transcript entry {index} is not a valid roll: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: RollError,
    },
}

/// Replay a full transcript against a table, from the initial seed.
///
/// Returns the final advancing seed when every claimed face matches the
/// recomputation; otherwise reports the first divergent entry. An empty
/// transcript trivially verifies and returns the initial seed.
///
/// # Example
/// ```
/// use true_dice_core_rs::{replay, roll, TranscriptEntry, TrueTable};
///
/// let (table, mut seed) = TrueTable::initialize(&[901, 22, 480_213]).unwrap();
/// let mut transcript = Vec::new();
/// for throw in [42u32, 7, 99] {
///     let outcome = roll(throw, 6, &table, seed).unwrap();
///     transcript.push(TranscriptEntry {
///         player_throw: throw,
///         die_size: 6,
///         claimed_face: outcome.face,
///     });
///     seed = outcome.next_seed;
/// }
///
/// assert_eq!(replay(&table, &transcript), Ok(seed));
/// ```
pub fn replay(table: &TrueTable, transcript: &[TranscriptEntry]) -> Result<u32, AuditError> {
    let mut seed = TrueTable::INITIAL_SEED;

    for (index, entry) in transcript.iter().enumerate() {
        let outcome = roll(entry.player_throw, entry.die_size, table, seed)
            .map_err(|source| AuditError::InvalidEntry { index, source })?;

        if outcome.face != entry.claimed_face {
            return Err(AuditError::FaceMismatch {
                index,
                claimed: entry.claimed_face,
                recomputed: outcome.face,
            });
        }

        seed = outcome.next_seed;
    }

    Ok(seed)
}
