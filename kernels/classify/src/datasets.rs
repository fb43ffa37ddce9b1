// Synthetic classification datasets for the decision-boundary playground
//
// Four named shapes of increasing difficulty for a linear model: a
// separable cloud, concentric circles, the XOR quadrants, and two
// interleaving moons. All coordinates live in [-1, 1]^2 and every point
// carries independent noise, so retraining on fresh data shows how stable
// each boundary is.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub label: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Linear,
    Circular,
    Xor,
    Moons,
}

fn gauss_random<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

// Generate `count` labeled samples of the requested shape
pub fn generate<R: Rng>(kind: DatasetKind, count: usize, rng: &mut R) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(count);

    for i in 0..count {
        let sample = match kind {
            DatasetKind::Linear => {
                // Diagonal split with a noisy margin
                let x = rng.gen::<f64>() * 2.0 - 1.0;
                let y = rng.gen::<f64>() * 2.0 - 1.0;
                let label = u8::from(x + y + gauss_random(rng) * 0.25 > 0.0);
                Sample { x, y, label }
            }
            DatasetKind::Circular => {
                // Class 1 in an inner disc, class 0 in a surrounding annulus
                let angle = rng.gen::<f64>() * 2.0 * PI;
                let inner = i % 2 == 0;
                let radius = if inner {
                    rng.gen::<f64>() * 0.45
                } else {
                    0.65 + rng.gen::<f64>() * 0.3
                };
                Sample {
                    x: radius * angle.cos() + gauss_random(rng) * 0.03,
                    y: radius * angle.sin() + gauss_random(rng) * 0.03,
                    label: u8::from(inner),
                }
            }
            DatasetKind::Xor => {
                // Label by quadrant parity
                let x = rng.gen::<f64>() * 2.0 - 1.0;
                let y = rng.gen::<f64>() * 2.0 - 1.0;
                let label = u8::from((x > 0.0) != (y > 0.0));
                Sample {
                    x: x + gauss_random(rng) * 0.05,
                    y: y + gauss_random(rng) * 0.05,
                    label,
                }
            }
            DatasetKind::Moons => {
                // Two interleaving half-circles, scaled into [-1, 1]^2
                let t = rng.gen::<f64>() * PI;
                let upper = i % 2 == 0;
                let (cx, cy) = if upper {
                    (t.cos(), t.sin())
                } else {
                    (1.0 - t.cos(), 0.5 - t.sin())
                };
                Sample {
                    x: (cx - 0.5) * 0.9 + gauss_random(rng) * 0.07,
                    y: (cy - 0.25) * 0.9 + gauss_random(rng) * 0.07,
                    label: u8::from(upper),
                }
            }
        };
        samples.push(sample);
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_labels_are_binary_and_balanced() {
        let mut rng = SmallRng::seed_from_u64(3);
        for kind in [
            DatasetKind::Linear,
            DatasetKind::Circular,
            DatasetKind::Xor,
            DatasetKind::Moons,
        ] {
            let samples = generate(kind, 400, &mut rng);
            assert_eq!(samples.len(), 400);
            let positives = samples.iter().filter(|s| s.label == 1).count();
            assert!(samples.iter().all(|s| s.label <= 1));
            // Every shape is built roughly class-balanced
            assert!(
                positives > 100 && positives < 300,
                "{:?}: {} positives",
                kind,
                positives
            );
        }
    }

    #[test]
    fn test_circular_classes_separated_by_radius() {
        let mut rng = SmallRng::seed_from_u64(8);
        let samples = generate(DatasetKind::Circular, 500, &mut rng);
        for s in &samples {
            let r = (s.x * s.x + s.y * s.y).sqrt();
            if s.label == 1 {
                assert!(r < 0.6, "inner point at r={}", r);
            } else {
                assert!(r > 0.5, "annulus point at r={}", r);
            }
        }
    }
}
