//! # Restock Draws
//!
//! Random amounts and random book selection for `restock`.
//!
//! The caller supplies the RNG: the CLI passes `rand::thread_rng()`, tests pass
//! a seeded `StdRng`.

use std::ops::Range;

use rand::Rng;

/// Range of amounts drawn when `--count` is omitted (upper bound exclusive).
pub const RANDOM_AMOUNT_RANGE: Range<i64> = 1..10;

/// Draws a restock amount from [`RANDOM_AMOUNT_RANGE`].
pub fn random_amount(rng: &mut impl Rng) -> i64 {
    rng.gen_range(RANDOM_AMOUNT_RANGE)
}

/// Resolves the amount to add: the explicit one, or a random draw.
pub fn resolve_amount(explicit: Option<i64>, rng: &mut impl Rng) -> i64 {
    explicit.unwrap_or_else(|| random_amount(rng))
}

/// Picks one id uniformly at random.
///
/// `ids` should be in a deterministic order (ascending) so a seeded RNG
/// always picks the same book.
///
/// ## Returns
/// * `Some(id)` - A uniformly chosen id
/// * `None` - `ids` is empty
pub fn pick_random_id(ids: &[i64], rng: &mut impl Rng) -> Option<i64> {
    if ids.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..ids.len());
    Some(ids[index])
}
