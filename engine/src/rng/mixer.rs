//! Double-pass xorshift32 seed mixer
//!
//! A fast, deterministic bit-diffusion step used purely as a state
//! advancement function, not as a cryptographic primitive.
//!
//! # Algorithm
//!
//! Two chained xorshift passes over a 32-bit value: the classic
//! `13/17/5` triple followed by a `7/11` pass. The second pass strengthens
//! bit diffusion compared to a single xorshift round.
//!
//! # Determinism
//!
//! Same input → same output, on every platform. This is CRITICAL for:
//! - Auditing (observers recompute every roll)
//! - Testing (fixed conformance vectors)
//! - Replay (seed chains must reproduce exactly)

/// Advance the 32-bit seed by one deterministic mixing step.
///
/// An all-zero state is a fixed point of xorshift, so a `0` result is
/// remapped to `1` and the zero state is never produced. Callers pass
/// nonzero seeds; the remap makes the function total anyway.
///
/// # Example
/// ```
/// use true_dice_core_rs::rng::advance;
///
/// let next = advance(1);
/// assert_eq!(next, advance(1));
/// assert_ne!(next, 0);
/// ```
pub fn advance(seed: u32) -> u32 {
    // Pass 1: xorshift32 (13, 17, 5). Shifts on u32 truncate to 32 bits.
    let mut x = seed;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;

    // Pass 2: extra diffusion (7, 11).
    x ^= x << 7;
    x ^= x >> 11;

    // 0 is reserved as "never produced"
    if x == 0 {
        1
    } else {
        x
    }
}
