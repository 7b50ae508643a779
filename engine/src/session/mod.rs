//! Game session - table, advancing seed and snapshot save/restore
//!
//! The core roll function is stateless between calls; this module supplies
//! the reference owner for the state it threads. A [`DiceSession`] holds
//! the committed table and the advancing seed for one game, performs the
//! read-modify-write of the seed on every roll (single writer enforced by
//! `&mut self`), and serializes to a [`SessionSnapshot`] for whatever
//! durable store the host uses between rolls.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored session continues the exact seed chain
//! - **Commitment matching**: a snapshot is only restored when its stored
//!   commitment matches a recomputed hash of its stored table

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::commit::commitment_hash;
use crate::roll::{roll, RollError, RollOutcome};
use crate::table::{TableError, TrueTable};

/// Errors that can occur when restoring a session from a snapshot
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid table in snapshot: {0}")]
    InvalidTable(#[from] TableError),

    #[error("snapshot advancing seed must be nonzero")]
    ZeroSeed,

    #[error("snapshot commitment {stored} does not match recomputed table hash {recomputed}")]
    CommitmentMismatch { stored: String, recomputed: String },

    #[error("failed to parse snapshot JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Complete session state snapshot
///
/// Captures everything needed to resume rolling from an arbitrary point:
/// the table, the advancing seed, and the published commitment for
/// tamper-checking on restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session identifier (stable across save/restore)
    pub session_id: Uuid,

    /// Committed table entries, in order
    pub table_entries: Vec<u32>,

    /// Advancing seed at time of snapshot (CRITICAL for determinism)
    pub advancing_seed: u32,

    /// Rolls performed so far in this session
    pub rolls_played: u64,

    /// Published commitment hash of the table (for validation on restore)
    pub commitment: String,
}

impl SessionSnapshot {
    /// Serialize the snapshot to a JSON string
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One game's rolling state: committed table plus advancing seed
///
/// # Example
/// ```
/// use true_dice_core_rs::{DiceSession, TrueTable};
///
/// let (table, _) = TrueTable::initialize(&[901, 22, 480_213]).unwrap();
/// let mut session = DiceSession::new(table);
///
/// let published = session.commitment(); // hand to players before rolling
/// let outcome = session.roll(42, 6).unwrap();
/// assert!((1..=6).contains(&outcome.face));
/// assert_eq!(session.advancing_seed(), outcome.next_seed);
/// assert!(!published.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DiceSession {
    /// Unique session identifier
    id: Uuid,

    /// Committed table, read-only for the session's lifetime
    table: TrueTable,

    /// The single mutable state value, never zero
    advancing_seed: u32,

    /// Count of rolls performed (diagnostic, not part of the seed chain)
    rolls_played: u64,
}

impl DiceSession {
    /// Start a session on a freshly committed table.
    ///
    /// The advancing seed starts at [`TrueTable::INITIAL_SEED`].
    pub fn new(table: TrueTable) -> Self {
        Self {
            id: Uuid::new_v4(),
            table,
            advancing_seed: TrueTable::INITIAL_SEED,
            rolls_played: 0,
        }
    }

    /// Session identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The committed table
    pub fn table(&self) -> &TrueTable {
        &self.table
    }

    /// Current advancing seed
    pub fn advancing_seed(&self) -> u32 {
        self.advancing_seed
    }

    /// Rolls performed so far
    pub fn rolls_played(&self) -> u64 {
        self.rolls_played
    }

    /// The publishable commitment hash of this session's table
    pub fn commitment(&self) -> String {
        commitment_hash(&self.table)
    }

    /// Roll one die, replacing the advancing seed with the outcome's.
    ///
    /// `&mut self` makes the read-modify-write of the seed single-writer
    /// in-process; across processes the host's store must serialize it.
    pub fn roll(&mut self, player_throw: u32, die_size: u32) -> Result<RollOutcome, RollError> {
        let outcome = roll(player_throw, die_size, &self.table, self.advancing_seed)?;
        self.advancing_seed = outcome.next_seed;
        self.rolls_played += 1;
        Ok(outcome)
    }

    /// Capture the session state for durable storage
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            table_entries: self.table.entries().to_vec(),
            advancing_seed: self.advancing_seed,
            rolls_played: self.rolls_played,
            commitment: self.commitment(),
        }
    }

    /// Restore a session from a snapshot.
    ///
    /// Validates the stored table (non-empty, no zero entries), the stored
    /// seed (nonzero), and that the stored commitment matches a recomputed
    /// hash of the stored table. A mismatch means the table was altered
    /// after the commitment was published.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self, SessionError> {
        let table = TrueTable::from_entries(snapshot.table_entries)?;

        if snapshot.advancing_seed == 0 {
            return Err(SessionError::ZeroSeed);
        }

        let recomputed = commitment_hash(&table);
        if recomputed != snapshot.commitment {
            return Err(SessionError::CommitmentMismatch {
                stored: snapshot.commitment,
                recomputed,
            });
        }

        Ok(Self {
            id: snapshot.session_id,
            table,
            advancing_seed: snapshot.advancing_seed,
            rolls_played: snapshot.rolls_played,
        })
    }
}
