// Random sampling helpers shared by the population generators

use std::f64::consts::PI;

use rand::Rng;

// Box-Muller transform: one standard gaussian from two uniforms
//
// The 1.0 - u trick keeps the log argument strictly positive.
pub(crate) fn gauss_random<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_gaussian_moments() {
        let mut rng = SmallRng::seed_from_u64(1);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| gauss_random(&mut rng)).collect();

        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance =
            samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.03, "mean: {}", mean);
        assert!((variance - 1.0).abs() < 0.05, "variance: {}", variance);
    }
}
