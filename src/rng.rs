//! Random number source for password generation.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// OS-seeded generator, or a deterministic one when `seed` is given.
pub fn from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Short name of the source, for the entropy box.
pub fn source_name(seed: Option<u64>) -> &'static str {
    if seed.is_some() {
        "seeded StdRng (deterministic)"
    } else {
        "StdRng (OS seeded)"
    }
}
