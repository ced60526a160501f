use std::sync::{Mutex, PoisonError};

use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::{Element, Range};

static SEED: Mutex<Option<StdRng>> = Mutex::new(None);

/// Seeds the generator used by [random_number], making subsequent draws reproducible.
pub fn seed(seed: u64) {
    log::debug!("Seeding random number generator with {seed}");
    let mut rng = SEED.lock().unwrap_or_else(PoisonError::into_inner);
    *rng = Some(StdRng::seed_from_u64(seed));
}

/// Draws a random number from `range`.
///
/// Floating point numbers are drawn from `[min, max)`, integers from `[min, max]`.
/// Uses the seeded generator when [seed] has been called, the thread generator otherwise.
pub fn random_number<E: Element>(range: &Range<E>) -> E {
    let mut seeded = SEED.lock().unwrap_or_else(PoisonError::into_inner);
    match seeded.as_mut() {
        Some(rng) => random_number_with(range, rng),
        None => random_number_with(range, &mut rand::thread_rng()),
    }
}

/// Draws a random number from `range` using the given generator.
pub fn random_number_with<E: Element, R: RngCore>(range: &Range<E>, rng: &mut R) -> E {
    E::random_between(range.min(), range.max(), rng)
}
