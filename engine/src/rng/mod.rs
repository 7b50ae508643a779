//! Deterministic seed advancement
//!
//! Uses a double-pass xorshift32 mixing step to advance the roll engine's
//! 32-bit state. CRITICAL: all state advancement in the engine MUST go
//! through this module; the mixer holds no state of its own and every call
//! site threads the seed explicitly.

mod mixer;

pub use mixer::advance;
