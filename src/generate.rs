use rand::distributions::Uniform;
use rand::Rng;

use crate::config::{VALUE_MAX, VALUE_MIN};

/// Generate `size` integers drawn uniformly from `[VALUE_MIN, VALUE_MAX]`.
pub fn generate_uniform(rng: &mut impl Rng, size: usize) -> Vec<i32> {
    let uniform = Uniform::new_inclusive(VALUE_MIN, VALUE_MAX);
    (0..size).map(|_| rng.sample(uniform)).collect()
}
