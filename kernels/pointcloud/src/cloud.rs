// The dual-layout point cloud
//
// One cloud owns two complete layouts of the same population plus the
// per-point attribute channels. Point i means the same body in both
// layouts, so the renderer can blend positions freely while attributes
// stay put. The constructor enforces that alignment; everything
// downstream relies on it.

use thiserror::Error;

use orbital::belt::BeltBuffers;
use orbital::stars::StarBuffers;

use crate::palette::Palette;

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("buffer '{name}' has {got} entries, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        got: usize,
        expected: usize,
    },
}

#[derive(Debug, Clone)]
pub struct PointCloud {
    // Interleaved (x, y) positions for the two layouts
    pub layout_a: Vec<f32>,
    pub layout_b: Vec<f32>,
    // Continuous attribute driving the color gradient
    pub color_attr: Vec<f32>,
    // Attribute driving point size (smaller value = brighter = larger)
    pub size_attr: Vec<f32>,
    // Categorical class per point
    pub classes: Vec<u8>,
    pub count: usize,
    // Normalization range for the color attribute
    pub color_range: (f32, f32),
    // Normalization range for the size attribute
    pub size_range: (f32, f32),
    pub palette: Palette,
}

impl PointCloud {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        layout_a: Vec<f32>,
        layout_b: Vec<f32>,
        color_attr: Vec<f32>,
        size_attr: Vec<f32>,
        classes: Vec<u8>,
        color_range: (f32, f32),
        size_range: (f32, f32),
        palette: Palette,
    ) -> Result<Self, CloudError> {
        let count = color_attr.len();
        let check = |name: &'static str, got: usize, expected: usize| {
            if got == expected {
                Ok(())
            } else {
                Err(CloudError::LengthMismatch { name, got, expected })
            }
        };
        check("layout_a", layout_a.len(), count * 2)?;
        check("layout_b", layout_b.len(), count * 2)?;
        check("size_attr", size_attr.len(), count)?;
        check("classes", classes.len(), count)?;

        Ok(PointCloud {
            layout_a,
            layout_b,
            color_attr,
            size_attr,
            classes,
            count,
            color_range,
            size_range,
            palette,
        })
    }

    // Asteroid belt: spatial view vs. semi-major-axis histogram, colored by
    // semi-major axis over the plotted 1.5-5.5 AU range, sized by H magnitude.
    pub fn from_belt(buffers: BeltBuffers) -> Result<Self, CloudError> {
        Self::new(
            buffers.spatial,
            buffers.histogram,
            buffers.semi_major_axes,
            buffers.magnitudes,
            buffers.classes,
            (1.5, 5.5),
            (10.0, 22.0),
            Palette::Belt,
        )
    }

    // Star catalog: sky view vs. HR diagram, colored by temperature, sized by
    // absolute magnitude.
    pub fn from_stars(buffers: StarBuffers) -> Result<Self, CloudError> {
        Self::new(
            buffers.sky,
            buffers.hr,
            buffers.temperatures,
            buffers.magnitudes,
            buffers.classes,
            (2_500.0, 30_000.0),
            (-3.0, 17.0),
            Palette::Stars,
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital::belt::{generate_asteroids, prepare_belt_buffers};
    use orbital::stars::{generate_stars, prepare_star_buffers};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_mismatched_lengths_rejected() {
        let result = PointCloud::new(
            vec![0.0; 6],
            vec![0.0; 4], // one point short
            vec![0.0; 3],
            vec![0.0; 3],
            vec![0; 3],
            (0.0, 1.0),
            (0.0, 1.0),
            Palette::Belt,
        );
        assert!(matches!(
            result,
            Err(CloudError::LengthMismatch { name: "layout_b", got: 4, expected: 6 })
        ));
    }

    #[test]
    fn test_belt_adapter_preserves_index_correspondence() {
        let mut rng = SmallRng::seed_from_u64(1);
        let asteroids = generate_asteroids(300, &mut rng);
        let buffers = prepare_belt_buffers(&asteroids, &mut rng);
        let cloud = PointCloud::from_belt(buffers).unwrap();

        assert_eq!(cloud.count, 300);
        for idx in [0usize, 42, 299] {
            assert_eq!(cloud.layout_a[idx * 2], asteroids[idx].x as f32);
            assert_eq!(cloud.color_attr[idx], asteroids[idx].a as f32);
            assert_eq!(cloud.size_attr[idx], asteroids[idx].h as f32);
            assert_eq!(cloud.classes[idx], u8::from(asteroids[idx].class));
        }
    }

    #[test]
    fn test_star_adapter_shape() {
        let mut rng = SmallRng::seed_from_u64(2);
        let stars = generate_stars(100, &mut rng);
        let cloud = PointCloud::from_stars(prepare_star_buffers(&stars)).unwrap();
        assert_eq!(cloud.count, 100);
        assert_eq!(cloud.layout_a.len(), 200);
        assert_eq!(cloud.layout_b.len(), 200);
        assert_eq!(cloud.palette, Palette::Stars);
    }
}
