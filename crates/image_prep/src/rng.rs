//! Thread-local deterministic randomness for data transforms.
//!
//! All random draws made by the augmentation transforms go through this
//! module. Seeding a thread once at the start of a run (or of an epoch)
//! makes every downstream draw reproducible; unseeded threads fall back to
//! the OS-seeded generator.

use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::rngs::StdRng;
use rand::Rng as _;
use rand::SeedableRng;
use std::cell::RefCell;

thread_local! {
    /// Thread-local RNG driving all randomness in transforms
    pub static WORKER_RNG: RefCell<Option<StdRng>> = RefCell::new(None);
}

/// Initialize this thread's RNG based on worker_id, epoch, and base seed.
/// Seed formula: base_seed + (epoch << 32) + worker_id
/// This ensures each worker has unique but deterministic randomness.
pub fn init_worker_rng(worker_id: usize, epoch: usize, base_seed: u64) {
    WORKER_RNG.with(|rng| {
        let seed = base_seed
            .wrapping_add((epoch as u64) << 32)
            .wrapping_add(worker_id as u64);
        *rng.borrow_mut() = Some(StdRng::seed_from_u64(seed));
    })
}

/// Seeds the current thread from a single value.
///
/// Single-threaded experiment runs have no worker or epoch structure to
/// encode, so this is `init_worker_rng(0, 0, seed)`.
pub fn seed_rng(seed: u64) {
    init_worker_rng(0, 0, seed)
}

/// Get a random bool from the worker RNG, or the OS RNG if the thread was
/// never seeded. Used by transforms like RandomHorizontalFlip.
pub fn worker_gen_bool(p: f64) -> bool {
    WORKER_RNG.with(|rng| {
        let mut rng_ref = rng.borrow_mut();
        match rng_ref.as_mut() {
            Some(rng) => rng.random_bool(p),
            None => rand::rng().random_bool(p),
        }
    })
}

/// Get a uniform sample from the worker RNG, or the OS RNG if the thread was
/// never seeded. Used by RandomCrop for its per-call offsets.
pub fn worker_gen_range<T, R>(range: R) -> T
where
    T: SampleUniform,
    R: SampleRange<T>,
{
    WORKER_RNG.with(|rng| {
        let mut rng_ref = rng.borrow_mut();
        match rng_ref.as_mut() {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    })
}
