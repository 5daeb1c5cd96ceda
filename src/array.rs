use rand::seq::SliceRandom;
use rand::Rng;

pub const ARRAY_SIZE: usize = 50;

/// Returns the values `1..=ARRAY_SIZE` in uniformly random order.
pub fn generate_array<R: Rng + ?Sized>(rng: &mut R) -> Vec<i32> {
    let mut values: Vec<i32> = (1..=ARRAY_SIZE as i32).collect();
    values.shuffle(rng);
    values
}
