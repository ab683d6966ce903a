use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator so failures reproduce.
#[allow(dead_code)]
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x6d67)
}

/// `count` points of `arity` coordinates drawn from `low..high`.
///
/// Coordinates closer than 0.1 to zero are pushed away from it, which keeps the
/// finite-difference step clear of kinks (`relu`) and poles (`inv`).
#[allow(dead_code)]
pub fn random_points(rng: &mut StdRng, count: usize, arity: usize, low: f64, high: f64) -> Vec<Vec<f64>> {
    (0..count)
        .map(|_| {
            (0..arity)
                .map(|_| {
                    let v: f64 = rng.gen_range(low..high);
                    if v.abs() < 0.1 {
                        v.signum() * 0.1 + v
                    } else {
                        v
                    }
                })
                .collect()
        })
        .collect()
}
