// Synthetic star catalog for the stellar cartography explorer
//
// Each star carries a sky position and the two physical quantities that place
// it on the Hertzsprung-Russell diagram. The HR layout is derived here rather
// than stored, so the two views of the dual-layout pair stay consistent by
// construction.

use rand::Rng;

use crate::sampling::gauss_random;
use crate::types::{Star, StarClass};

// Temperature range the HR axis spans, in Kelvin (log scale)
const T_COOL: f64 = 2_500.0;
const T_HOT: f64 = 30_000.0;

// Absolute magnitude range the HR axis spans (bright giants to dim dwarfs)
const MAG_BRIGHT: f64 = -3.0;
const MAG_DIM: f64 = 17.0;

// Generate a synthetic stellar population
//
// Mixture: 90% main sequence, 7% giants, 3% white dwarfs — enough of each
// branch that the HR view shows the familiar diagonal, the giant clump, and
// the dwarf strip.
//
// Main-sequence stars follow the empirical luminosity-temperature diagonal:
// cool stars are dim, hot stars are bright. The position along the sequence
// is sampled toward the cool end, matching the real luminosity function
// (dim red dwarfs vastly outnumber hot blue stars).
pub fn generate_stars<R: Rng>(count: usize, rng: &mut R) -> Vec<Star> {
    let mut stars = Vec::with_capacity(count);

    for _ in 0..count {
        let roll: f64 = rng.gen();

        let (temperature, abs_mag, class) = if roll < 0.90 {
            // Main sequence: squaring the uniform sample biases toward the
            // cool, dim end of the diagonal
            let t: f64 = rng.gen::<f64>().powi(2);
            let temperature = T_COOL * (T_HOT / T_COOL).powf(t);
            let abs_mag = 15.0 - 17.0 * t + gauss_random(rng) * 0.6;
            (temperature, abs_mag, StarClass::MainSequence)
        } else if roll < 0.97 {
            // Giants: cool but very luminous
            let temperature = 3_000.0 + rng.gen::<f64>() * 2_500.0;
            let abs_mag = -1.0 + gauss_random(rng) * 1.2;
            (temperature, abs_mag, StarClass::Giant)
        } else {
            // White dwarfs: hot but tiny, therefore dim
            let temperature = 8_000.0 + rng.gen::<f64>() * 12_000.0;
            let abs_mag = 12.5 + gauss_random(rng) * 1.0;
            (temperature, abs_mag, StarClass::WhiteDwarf)
        };

        // Sky position: uniform in longitude, concentrated toward a central
        // band in latitude to suggest the galactic plane
        let sky_x = rng.gen::<f64>() * 2.0 - 1.0;
        let sky_y = (gauss_random(rng) * 0.45).clamp(-1.0, 1.0);

        stars.push(Star {
            sky_x,
            sky_y,
            temperature: temperature.clamp(T_COOL, T_HOT),
            abs_mag: abs_mag.clamp(MAG_BRIGHT, MAG_DIM),
            class,
        });
    }

    stars
}

// HR-diagram position for one star, in NDC
//
// X: log temperature, HOT ON THE LEFT (the astronomer's convention).
// Y: brighter stars (smaller magnitude) toward the top.
pub fn hr_position(star: &Star) -> (f32, f32) {
    let t_norm = (star.temperature.ln() - T_COOL.ln()) / (T_HOT.ln() - T_COOL.ln());
    let x = 0.9 - 1.8 * t_norm;

    let mag_norm = (star.abs_mag - MAG_BRIGHT) / (MAG_DIM - MAG_BRIGHT);
    let y = 0.9 - 1.8 * mag_norm;

    (x as f32, y as f32)
}

// Flat, index-aligned attribute arrays for the point renderer
#[derive(Debug, Clone)]
pub struct StarBuffers {
    // Interleaved (x, y) sky positions in NDC
    pub sky: Vec<f32>,
    // Interleaved (x, y) HR-diagram positions in NDC
    pub hr: Vec<f32>,
    // Temperature per star (color channel)
    pub temperatures: Vec<f32>,
    // Absolute magnitude per star (size channel)
    pub magnitudes: Vec<f32>,
    pub classes: Vec<u8>,
    pub count: usize,
}

pub fn prepare_star_buffers(stars: &[Star]) -> StarBuffers {
    let count = stars.len();
    let mut sky = Vec::with_capacity(count * 2);
    let mut hr = Vec::with_capacity(count * 2);
    let mut temperatures = Vec::with_capacity(count);
    let mut magnitudes = Vec::with_capacity(count);
    let mut classes = Vec::with_capacity(count);

    for star in stars {
        sky.push(star.sky_x as f32);
        sky.push(star.sky_y as f32);
        let (hx, hy) = hr_position(star);
        hr.push(hx);
        hr.push(hy);
        temperatures.push(star.temperature as f32);
        magnitudes.push(star.abs_mag as f32);
        classes.push(u8::from(star.class));
    }

    StarBuffers {
        sky,
        hr,
        temperatures,
        magnitudes,
        classes,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_hr_axis_orientation() {
        let hot_bright = Star {
            sky_x: 0.0,
            sky_y: 0.0,
            temperature: 25_000.0,
            abs_mag: -2.0,
            class: StarClass::MainSequence,
        };
        let cool_dim = Star { temperature: 3_000.0, abs_mag: 14.0, ..hot_bright.clone() };

        let (hot_x, hot_y) = hr_position(&hot_bright);
        let (cool_x, cool_y) = hr_position(&cool_dim);

        // Hot on the left, bright on top
        assert!(hot_x < cool_x);
        assert!(hot_y > cool_y);
    }

    #[test]
    fn test_population_mixture_and_bounds() {
        let mut rng = SmallRng::seed_from_u64(9);
        let stars = generate_stars(10_000, &mut rng);

        let ms = stars.iter().filter(|s| s.class == StarClass::MainSequence).count() as f64
            / stars.len() as f64;
        assert!((ms - 0.90).abs() < 0.02, "main-sequence fraction: {}", ms);

        for star in &stars {
            assert!(star.temperature >= T_COOL && star.temperature <= T_HOT);
            assert!(star.abs_mag >= MAG_BRIGHT && star.abs_mag <= MAG_DIM);
            let (x, y) = hr_position(star);
            assert!(x >= -0.9 && x <= 0.9);
            assert!(y >= -0.9 && y <= 0.9);
        }
    }

    #[test]
    fn test_buffers_are_index_aligned() {
        let mut rng = SmallRng::seed_from_u64(4);
        let stars = generate_stars(1_000, &mut rng);
        let buffers = prepare_star_buffers(&stars);
        assert_eq!(buffers.sky.len(), 2_000);
        assert_eq!(buffers.hr.len(), 2_000);
        assert_eq!(buffers.temperatures.len(), 1_000);

        // Spot-check index correspondence between the two layouts
        for idx in [0usize, 17, 500, 999] {
            assert_eq!(buffers.sky[idx * 2], stars[idx].sky_x as f32);
            let (hx, _) = hr_position(&stars[idx]);
            assert_eq!(buffers.hr[idx * 2], hx);
        }
    }
}
