// The four classifiers behind the decision-boundary playground
//
// Every model satisfies the same contract: train on the full dataset with a
// single scalar hyperparameter, then predict a probability in [0, 1] at any
// point of the plane. The reported accuracy is TRAINING accuracy at a 0.5
// threshold: the playground is about boundary shapes, not generalization,
// so no held-out split is made.

use crate::datasets::Sample;

// Gradient-descent schedule shared by the logistic fits
const EPOCHS: usize = 200;
const LEARNING_RATE: f64 = 0.5;

// Bandwidth floor so a degenerate hyperparameter never divides by zero
const GAMMA_FLOOR: f64 = 1e-3;

// Smoothing mass pulling the RBF estimate toward 0.5 far from all data
const RBF_SMOOTHING: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Linear,
    Polynomial,
    Knn,
    Rbf,
}

// Fitted parameters, one variant per model kind
#[derive(Debug, Clone)]
enum ModelParams {
    // weights over [x, y] plus bias
    Linear { weights: [f64; 2], bias: f64 },
    // weights over the degree-2 basis [x, y, x², xy, y²] plus bias
    Polynomial { weights: [f64; 5], bias: f64 },
    // effective neighbor count, already clamped to [1, N]
    Knn { k: usize },
    // Gaussian bandwidth, already floored
    Rbf { gamma: f64 },
}

#[derive(Debug, Clone)]
pub struct Classifier {
    params: ModelParams,
    // k-NN and RBF predict directly from the training set
    training: Vec<Sample>,
    pub accuracy: f64,
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[inline]
fn poly_features(x: f64, y: f64) -> [f64; 5] {
    [x, y, x * x, x * y, y * y]
}

// Full-batch logistic regression over an arbitrary feature basis
//
// L2 regularization applies to the weights only, not the bias.
fn fit_logistic<const D: usize>(
    samples: &[Sample],
    features: impl Fn(f64, f64) -> [f64; D],
    l2: f64,
) -> ([f64; D], f64) {
    let mut weights = [0.0; D];
    let mut bias = 0.0;
    let n = samples.len().max(1) as f64;

    for _ in 0..EPOCHS {
        let mut grad_w = [0.0; D];
        let mut grad_b = 0.0;

        for sample in samples {
            let feats = features(sample.x, sample.y);
            let z = feats.iter().zip(&weights).map(|(f, w)| f * w).sum::<f64>() + bias;
            let error = sigmoid(z) - f64::from(sample.label);
            for d in 0..D {
                grad_w[d] += error * feats[d];
            }
            grad_b += error;
        }

        for d in 0..D {
            weights[d] -= LEARNING_RATE * (grad_w[d] / n + l2 * weights[d]);
        }
        bias -= LEARNING_RATE * grad_b / n;
    }

    (weights, bias)
}

impl Classifier {
    // Train a model of the given kind
    //
    // The hyperparameter means different things per kind: L2 strength for
    // the logistic fits, the neighbor count for k-NN (rounded and clamped
    // to [1, N]), and the kernel bandwidth γ for RBF (floored above zero).
    pub fn train(kind: ModelKind, samples: Vec<Sample>, hyper: f64) -> Self {
        assert!(!samples.is_empty(), "Cannot train on an empty dataset");

        let params = match kind {
            ModelKind::Linear => {
                let (weights, bias) = fit_logistic(&samples, |x, y| [x, y], hyper.max(0.0));
                ModelParams::Linear { weights, bias }
            }
            ModelKind::Polynomial => {
                let (weights, bias) = fit_logistic(&samples, poly_features, hyper.max(0.0));
                ModelParams::Polynomial { weights, bias }
            }
            ModelKind::Knn => {
                let k = (hyper.round() as i64).clamp(1, samples.len() as i64) as usize;
                ModelParams::Knn { k }
            }
            ModelKind::Rbf => ModelParams::Rbf { gamma: hyper.max(GAMMA_FLOOR) },
        };

        let mut classifier = Classifier { params, training: samples, accuracy: 0.0 };

        // Training accuracy at the 0.5 threshold
        let correct = classifier
            .training
            .iter()
            .filter(|s| u8::from(classifier.predict(s.x, s.y) >= 0.5) == s.label)
            .count();
        classifier.accuracy = correct as f64 / classifier.training.len() as f64;

        classifier
    }

    // Probability that (x, y) belongs to class 1
    pub fn predict(&self, x: f64, y: f64) -> f64 {
        match &self.params {
            ModelParams::Linear { weights, bias } => {
                sigmoid(weights[0] * x + weights[1] * y + bias)
            }
            ModelParams::Polynomial { weights, bias } => {
                let feats = poly_features(x, y);
                let z = feats.iter().zip(weights).map(|(f, w)| f * w).sum::<f64>() + bias;
                sigmoid(z)
            }
            ModelParams::Knn { k } => {
                // Distance to every training point, vote fraction among the
                // k nearest for a smooth probability
                let mut distances: Vec<(f64, u8)> = self
                    .training
                    .iter()
                    .map(|s| {
                        let (dx, dy) = (s.x - x, s.y - y);
                        (dx * dx + dy * dy, s.label)
                    })
                    .collect();
                distances
                    .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
                let votes: u32 = distances[..*k].iter().map(|(_, l)| u32::from(*l)).sum();
                f64::from(votes) / *k as f64
            }
            ModelParams::Rbf { gamma } => {
                // Kernel-weighted label average; the smoothing mass keeps
                // the estimate defined (and near 0.5) far from all data
                let mut weighted = 0.0;
                let mut total = 0.0;
                for s in &self.training {
                    let (dx, dy) = (s.x - x, s.y - y);
                    let w = (-gamma * (dx * dx + dy * dy)).exp();
                    weighted += w * f64::from(s.label);
                    total += w;
                }
                (weighted + 0.5 * RBF_SMOOTHING) / (total + RBF_SMOOTHING)
            }
        }
    }

    // The neighbor count actually in use, after clamping (k-NN only)
    pub fn effective_k(&self) -> Option<usize> {
        match self.params {
            ModelParams::Knn { k } => Some(k),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{generate, DatasetKind};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn linear_data(seed: u64) -> Vec<Sample> {
        generate(DatasetKind::Linear, 100, &mut SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn test_linear_model_separates_linear_data() {
        let model = Classifier::train(ModelKind::Linear, linear_data(1), 0.01);
        assert!(model.accuracy > 0.8, "accuracy: {}", model.accuracy);

        // Far from the diagonal boundary the prediction must be confident
        assert!(model.predict(0.9, 0.9) > 0.85);
        assert!(model.predict(-0.9, -0.9) < 0.15);
    }

    #[test]
    fn test_polynomial_model_separates_circular_data() {
        let data = generate(DatasetKind::Circular, 100, &mut SmallRng::seed_from_u64(2));
        let model = Classifier::train(ModelKind::Polynomial, data, 0.01);
        // The degree-2 basis contains x² + y², enough to carve out the disc
        assert!(model.accuracy > 0.85, "accuracy: {}", model.accuracy);
    }

    #[test]
    fn test_knn_k_is_clamped() {
        let data = linear_data(3);
        let n = data.len();

        let too_big = Classifier::train(ModelKind::Knn, data.clone(), 1e6);
        assert_eq!(too_big.effective_k(), Some(n));

        let too_small = Classifier::train(ModelKind::Knn, data, -5.0);
        assert_eq!(too_small.effective_k(), Some(1));

        // Clamped models must still emit valid probabilities
        for &(x, y) in &[(0.0, 0.0), (-1.0, 1.0), (0.7, -0.3)] {
            let p = too_big.predict(x, y);
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_rbf_gamma_floor() {
        let model = Classifier::train(ModelKind::Rbf, linear_data(4), 0.0);
        let p = model.predict(0.5, 0.5);
        assert!(p.is_finite() && (0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_rbf_far_from_data_tends_to_half() {
        let model = Classifier::train(ModelKind::Rbf, linear_data(5), 5.0);
        let p = model.predict(100.0, 100.0);
        assert!((p - 0.5).abs() < 1e-6, "far-field probability: {}", p);
    }

    #[test]
    fn test_all_kinds_emit_bounded_probabilities() {
        let data = generate(DatasetKind::Moons, 100, &mut SmallRng::seed_from_u64(6));
        for kind in [ModelKind::Linear, ModelKind::Polynomial, ModelKind::Knn, ModelKind::Rbf] {
            let model = Classifier::train(kind, data.clone(), 0.5);
            for step_x in 0..=10 {
                for step_y in 0..=10 {
                    let x = step_x as f64 * 0.2 - 1.0;
                    let y = step_y as f64 * 0.2 - 1.0;
                    let p = model.predict(x, y);
                    assert!((0.0..=1.0).contains(&p), "{:?} at ({}, {}): {}", kind, x, y, p);
                }
            }
        }
    }
}
