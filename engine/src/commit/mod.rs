//! Table commitment hashing
//!
//! The table's SHA-256 digest is published before rolling begins; holders
//! of the digest can later verify the table they are shown is the one the
//! server committed to. The serialization must be byte-identical on every
//! platform, so it is a fixed canonical form: decimal entries joined by a
//! single comma, no trailing delimiter, no locale formatting.

use sha2::{Digest, Sha256};

use crate::table::TrueTable;

/// Canonical serialization of the table.
///
/// # Example
/// ```
/// use true_dice_core_rs::{serialize_table, TrueTable};
///
/// let (table, _) = TrueTable::initialize(&[5, 0, 4_294_967_296]).unwrap();
/// assert_eq!(serialize_table(&table), "5,1,1");
/// ```
pub fn serialize_table(table: &TrueTable) -> String {
    table
        .entries()
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Compute the publishable commitment hash of a table.
///
/// SHA-256 over the canonical serialization, lowercase hex. Infallible:
/// [`TrueTable`]'s constructors already guarantee a non-empty sequence of
/// valid entries.
///
/// # Example
/// ```
/// use true_dice_core_rs::{commitment_hash, TrueTable};
///
/// let (table, _) = TrueTable::initialize(&[17, 99]).unwrap();
/// let published = commitment_hash(&table);
/// assert_eq!(published, commitment_hash(&table)); // stable
/// ```
pub fn commitment_hash(table: &TrueTable) -> String {
    let serialized = serialize_table(table);
    let mut hasher = Sha256::new();
    hasher.update(serialized.as_bytes());
    format!("{:x}", hasher.finalize())
}
