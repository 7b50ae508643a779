//! Distribution Tests - Non-Degeneracy of the Face Mapping
//!
//! With varied player throws over a fixed committed table, empirical face
//! frequencies must sit within a few tenths of a percent of uniform. This
//! is a sanity check on the mixing quality, not a statistical-test suite.

use true_dice_core_rs::{roll, TrueTable};

/// Numerical Recipes LCG; varied, reproducible synthetic throws
fn lcg_next(state: u32) -> u32 {
    state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223)
}

/// 64-entry table drawn from the same LCG (normalized by `initialize`)
fn sample_table() -> TrueTable {
    let mut state = 0x00C0_FFEE_u32;
    let raw: Vec<u64> = (0..64)
        .map(|_| {
            state = lcg_next(state);
            u64::from(state)
        })
        .collect();
    let (table, _) = TrueTable::initialize(&raw).unwrap();
    table
}

fn face_counts(table: &TrueTable, die_size: u32, rolls: usize) -> Vec<usize> {
    let mut counts = vec![0usize; die_size as usize];
    let mut seed = TrueTable::INITIAL_SEED;
    let mut throw = 0x1234_5678_u32;

    for _ in 0..rolls {
        throw = lcg_next(throw);
        let outcome = roll(throw, die_size, table, seed).unwrap();
        counts[(outcome.face - 1) as usize] += 1;
        seed = outcome.next_seed;
    }
    counts
}

#[test]
fn test_d6_approximately_uniform() {
    const ROLLS: usize = 2_000_000;
    let counts = face_counts(&sample_table(), 6, ROLLS);

    let expected = ROLLS as f64 / 6.0;
    let tolerance = ROLLS as f64 * 0.003; // +/- 0.3 percentage points

    for (face, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected).abs();
        assert!(
            deviation < tolerance,
            "face {} frequency {:.4}% deviates more than 0.3% from 16.67%",
            face + 1,
            100.0 * count as f64 / ROLLS as f64
        );
    }
}

#[test]
fn test_d20_approximately_uniform() {
    const ROLLS: usize = 2_000_000;
    let counts = face_counts(&sample_table(), 20, ROLLS);

    let expected = ROLLS as f64 / 20.0;
    let tolerance = ROLLS as f64 * 0.003;

    for (face, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected).abs();
        assert!(
            deviation < tolerance,
            "face {} frequency {:.4}% deviates more than 0.3% from 5%",
            face + 1,
            100.0 * count as f64 / ROLLS as f64
        );
    }
}

#[test]
fn test_constant_throw_still_reaches_every_face() {
    // Even with zero player entropy the seed chain alone must keep the
    // outcome non-degenerate: every face appears.
    let table = sample_table();
    let mut counts = vec![0usize; 6];
    let mut seed = TrueTable::INITIAL_SEED;

    for _ in 0..100_000 {
        let outcome = roll(777, 6, &table, seed).unwrap();
        counts[(outcome.face - 1) as usize] += 1;
        seed = outcome.next_seed;
    }

    for (face, &count) in counts.iter().enumerate() {
        assert!(count > 0, "face {} never appeared", face + 1);
    }
}
