use glam::IVec4;
use rand::Rng;

/// Uniform integer in `[0, max_diff)`, truncated from a unit float.
///
/// Bounds below one always yield zero.
pub fn random_sample<R: Rng + ?Sized>(rng: &mut R, max_diff: f64) -> i32 {
    (rng.gen::<f64>() * max_diff) as i32
}

/// Four independent samples, drawn alpha, red, green, blue in that order
pub fn random_channels<R: Rng + ?Sized>(rng: &mut R, max_diff: f64) -> IVec4 {
    let a = random_sample(rng, max_diff);
    let r = random_sample(rng, max_diff);
    let g = random_sample(rng, max_diff);
    let b = random_sample(rng, max_diff);
    IVec4::new(a, r, g, b)
}
