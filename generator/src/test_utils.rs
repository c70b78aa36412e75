use rand::{rngs::StdRng, SeedableRng};

use crate::RegisterSet;

pub fn create_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn three_registers() -> RegisterSet {
    RegisterSet::parse("x1\nx2\nx3\n").unwrap()
}
