//! True Dice Core - Verifiable Die-Rolling Engine
//!
//! Deterministic, auditable dice rolls for multiplayer games. The server
//! commits to a fixed table of random values at game start and publishes a
//! hash of it; every roll thereafter is a pure function of
//! `(table, player-supplied entropy, advancing seed)`. No server randomness
//! enters after initialization, so any observer holding the table and the
//! player-input sequence can recompute and verify every roll.
//!
//! # Architecture
//!
//! - **table**: committed table construction and normalization
//! - **rng**: deterministic seed-advancement (xorshift mixing)
//! - **roll**: the per-roll state transition
//! - **commit**: table commitment hashing
//! - **session**: in-memory game session with snapshot save/restore
//! - **audit**: transcript replay and verification
//!
//! # Critical Invariants
//!
//! 1. All roll arithmetic is unsigned 32-bit with wrapping semantics
//! 2. Table entries and the advancing seed are never zero (0 remaps to 1)
//! 3. Identical inputs always reproduce identical `(face, next_seed)` pairs

// Module declarations
pub mod audit;
pub mod commit;
pub mod rng;
pub mod roll;
pub mod session;
pub mod table;

// Re-exports for convenience
pub use audit::{replay, AuditError, TranscriptEntry};
pub use commit::{commitment_hash, serialize_table};
pub use roll::{roll, RollError, RollOutcome, THROW_MASK};
pub use session::{DiceSession, SessionError, SessionSnapshot};
pub use table::{TableError, TrueTable};
