// Decision-Boundary Playground Core
//
// Small from-scratch classifiers (logistic regression, a degree-2
// polynomial expansion of it, k-nearest-neighbors, and an RBF kernel
// estimator) over four synthetic dataset shapes, plus the probability-grid
// sampler the heatmap overlay renders. All models share one contract:
// train wholesale, predict a probability anywhere in the plane.

pub mod boundary;
pub mod datasets;
pub mod models;

pub use boundary::{probability_grid, ProbabilityGrid};
pub use datasets::{generate, DatasetKind, Sample};
pub use models::{Classifier, ModelKind};
