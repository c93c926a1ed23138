//! Domain functions for the prime-finding demo pipeline.
//!
//! The pipeline treats both as opaque: a zero-argument producer and a
//! predicate. Anything with those shapes can replace them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trial-division primality probe, dividing by every candidate from
/// `n - 1` down to 2.
///
/// Inherited quirk: for inputs of 2 or less the loop body never runs, so 0,
/// 1 and 2 all report `true`. Kept as observed behavior rather than
/// corrected, and covered by tests. O(n) per call; intentionally simple.
pub fn is_prime(n: u64) -> bool {
    for divisor in (2..n).rev() {
        if n % divisor == 0 {
            return false;
        }
    }
    true
}

/// Producer closure yielding uniform random values in `[0, bound)`.
pub fn random_below(bound: u64) -> impl FnMut() -> u64 + Send + 'static {
    let mut rng = StdRng::from_entropy();
    move || rng.gen_range(0..bound)
}
