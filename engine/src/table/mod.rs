//! Committed table (`TrueTable`) construction
//!
//! The table is built once per game from externally supplied secure random
//! values, normalized to nonzero 32-bit entries, then never mutated again.
//! All secrecy lives in the table and in future player inputs, not in the
//! advancing seed, which deliberately starts at the public constant `1`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building or validating a table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("entropy sequence must contain at least one value")]
    EmptyEntropy,

    #[error("table must contain at least one entry")]
    EmptyTable,

    #[error("table entry at index {index} is zero")]
    ZeroEntry { index: usize },
}

/// The immutable, committed table of normalized random values
///
/// An ordered sequence of unsigned 32-bit integers, each in
/// `[1, 2^32 - 1]`, length >= 1 by construction. Created once by
/// [`TrueTable::initialize`]; read-only for the lifetime of a game session.
///
/// # Example
/// ```
/// use true_dice_core_rs::TrueTable;
///
/// let (table, seed) = TrueTable::initialize(&[5, 0, 4_294_967_296]).unwrap();
/// assert_eq!(table.entries(), &[5, 1, 1]); // 0 and 2^32 both remap to 1
/// assert_eq!(seed, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrueTable {
    /// Normalized entries, every one nonzero
    entries: Vec<u32>,
}

impl TrueTable {
    /// The advancing seed every game starts from.
    ///
    /// Predictability of the seed is safe: all secrecy lives in the table
    /// and in player inputs, never in the seed's starting value.
    pub const INITIAL_SEED: u32 = 1;

    /// Build the committed table from externally supplied entropy.
    ///
    /// Each raw value is reduced modulo 2^32; a zero result is remapped to
    /// `1` (zero is reserved as "never produced"). Returns the table
    /// together with the initial advancing seed, which is always the
    /// constant [`TrueTable::INITIAL_SEED`].
    ///
    /// # Errors
    /// [`TableError::EmptyEntropy`] when `raw` is empty.
    ///
    /// # Example
    /// ```
    /// use true_dice_core_rs::TrueTable;
    ///
    /// let (table, seed) = TrueTable::initialize(&[17, 99, 3]).unwrap();
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(seed, 1);
    /// ```
    pub fn initialize(raw: &[u64]) -> Result<(Self, u32), TableError> {
        if raw.is_empty() {
            return Err(TableError::EmptyEntropy);
        }

        let entries = raw
            .iter()
            .map(|&value| {
                // Reduce modulo 2^32, then keep zero unreachable.
                let reduced = value as u32;
                if reduced == 0 {
                    1
                } else {
                    reduced
                }
            })
            .collect();

        Ok((Self { entries }, Self::INITIAL_SEED))
    }

    /// Rebuild a table from already-normalized entries (snapshot restore).
    ///
    /// Unlike [`TrueTable::initialize`], this does not remap values: a
    /// stored table that contains a zero was corrupted, not freshly drawn,
    /// so it is rejected instead of repaired.
    ///
    /// # Errors
    /// [`TableError::EmptyTable`] when `entries` is empty,
    /// [`TableError::ZeroEntry`] when any entry is zero.
    pub fn from_entries(entries: Vec<u32>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::EmptyTable);
        }
        if let Some(index) = entries.iter().position(|&e| e == 0) {
            return Err(TableError::ZeroEntry { index });
        }
        Ok(Self { entries })
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a table cannot be constructed empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The normalized entries, in commitment order
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// Entry participating in a roll made with the given seed.
    ///
    /// The current seed selects the entry, which is what makes the
    /// committed table participate in every roll rather than only at
    /// initialization.
    pub(crate) fn entry_for_seed(&self, seed: u32) -> u32 {
        self.entries[seed as usize % self.entries.len()]
    }
}
