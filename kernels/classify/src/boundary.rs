// Probability grid sampling for the decision-boundary heatmap

use crate::models::Classifier;

// Row-major grid of class-1 probabilities over [-1, 1]^2
//
// Cell (row, col) samples the point (col/resolution * 2 - 1,
// row/resolution * 2 - 1), matching the overlay's cell placement.
#[derive(Debug, Clone)]
pub struct ProbabilityGrid {
    pub resolution: usize,
    pub values: Vec<f64>,
}

impl ProbabilityGrid {
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.resolution + col]
    }
}

pub fn probability_grid(classifier: &Classifier, resolution: usize) -> ProbabilityGrid {
    assert!(resolution > 0, "Grid resolution must be positive");

    let mut values = Vec::with_capacity(resolution * resolution);
    for row in 0..resolution {
        let y = row as f64 / resolution as f64 * 2.0 - 1.0;
        for col in 0..resolution {
            let x = col as f64 / resolution as f64 * 2.0 - 1.0;
            values.push(classifier.predict(x, y));
        }
    }

    ProbabilityGrid { resolution, values }
}
