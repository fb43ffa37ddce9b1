// Software rasterizer for the dual-layout cloud
//
// Produces the RGBA buffer the host blits to a canvas. Per point the
// pipeline is: lerp the two layout positions by the transition value,
// apply pan and zoom, correct for aspect, then splat a soft circular
// footprint with additive blending. The footprint math mirrors a round
// point sprite: fragments outside the unit circle are discarded, alpha
// falls off with a smoothstep, and a brightened core plus a small bloom
// term give the glow.

use orbital::types::PLANET_ORBITS;

use crate::camera::Camera;
use crate::cloud::PointCloud;

// Near-black space background
pub const CLEAR_COLOR: [u8; 4] = [5, 5, 8, 255];

// Point diameter range in px, brighter bodies larger
const POINT_SIZE_MAX: f64 = 3.0;
const POINT_SIZE_MIN: f64 = 1.0;

// Alpha range over the size attribute, brighter bodies more opaque
const ALPHA_MAX: f32 = 0.8;
const ALPHA_MIN: f32 = 0.3;

// Ring tessellation for the planet orbits
const RING_SEGMENTS: usize = 128;

#[derive(Debug, Clone)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        let mut frame = Frame { width, height, pixels: vec![0; width * height * 4] };
        frame.clear();
        frame
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width * height * 4];
        self.clear();
    }

    pub fn clear(&mut self) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&CLEAR_COLOR);
        }
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f64 / self.height as f64
        }
    }

    // Additive blend of a premultiplied contribution onto one pixel
    #[inline]
    fn add(&mut self, x: usize, y: usize, color: [f32; 3], alpha: f32) {
        let idx = (y * self.width + x) * 4;
        for ch in 0..3 {
            let contribution = (color[ch].clamp(0.0, 1.0) * alpha * 255.0) as u8;
            self.pixels[idx + ch] = self.pixels[idx + ch].saturating_add(contribution);
        }
        self.pixels[idx + 3] = 255;
    }
}

#[inline]
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn mix(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// NDC -> pixel center. NDC y grows upward, pixel y downward.
#[inline]
fn ndc_to_pixel(x: f64, y: f64, width: usize, height: usize) -> (f64, f64) {
    (
        (x + 1.0) * 0.5 * width as f64,
        (1.0 - y) * 0.5 * height as f64,
    )
}

// Splat every point of the cloud onto the frame
//
// `point_scale` is the device pixel ratio: footprints keep their apparent
// size on high-density displays.
pub fn render_cloud(
    frame: &mut Frame,
    cloud: &PointCloud,
    transition: f64,
    camera: &Camera,
    point_scale: f64,
) {
    if cloud.is_empty() || frame.width == 0 || frame.height == 0 {
        return;
    }

    let aspect = frame.aspect();
    let t = transition.clamp(0.0, 1.0);
    let (color_min, color_max) = cloud.color_range;
    let (size_min, size_max) = cloud.size_range;

    for idx in 0..cloud.count {
        let ax = f64::from(cloud.layout_a[idx * 2]);
        let ay = f64::from(cloud.layout_a[idx * 2 + 1]);
        let bx = f64::from(cloud.layout_b[idx * 2]);
        let by = f64::from(cloud.layout_b[idx * 2 + 1]);

        // Interpolate between layouts, then camera, then aspect
        let mut x = (mix(ax, bx, t) + camera.pan_x) * camera.zoom;
        let y = (mix(ay, by, t) + camera.pan_y) * camera.zoom;
        x /= aspect;

        if !(-1.1..=1.1).contains(&x) || !(-1.1..=1.1).contains(&y) {
            continue;
        }

        let (cx, cy) = ndc_to_pixel(x, y, frame.width, frame.height);

        let size_norm =
            ((cloud.size_attr[idx] - size_min) / (size_max - size_min)).clamp(0.0, 1.0);
        let diameter = mix(POINT_SIZE_MAX, POINT_SIZE_MIN, f64::from(size_norm)) * point_scale;
        let radius = (diameter / 2.0).max(0.5);
        let base_alpha = ALPHA_MAX + (ALPHA_MIN - ALPHA_MAX) * size_norm;

        let color_norm =
            ((cloud.color_attr[idx] - color_min) / (color_max - color_min)).clamp(0.0, 1.0);
        let base_color = cloud.palette.point_color(color_norm, cloud.classes[idx]);

        let x_lo = ((cx - radius).floor().max(0.0)) as usize;
        let x_hi = ((cx + radius).ceil().min(frame.width as f64 - 1.0)) as usize;
        let y_lo = ((cy - radius).floor().max(0.0)) as usize;
        let y_hi = ((cy + radius).ceil().min(frame.height as f64 - 1.0)) as usize;

        for py in y_lo..=y_hi {
            for px in x_lo..=x_hi {
                let dx = (px as f64 + 0.5 - cx) / radius;
                let dy = (py as f64 + 0.5 - cy) / radius;
                let dist = ((dx * dx + dy * dy).sqrt()) as f32;
                if dist > 1.0 {
                    continue;
                }

                // Soft falloff plus a brightened core
                let mut alpha = base_alpha * (1.0 - smoothstep(0.0, 1.0, dist));
                alpha += 0.2 * (1.0 - smoothstep(0.0, 0.3, dist));
                let alpha = alpha.clamp(0.0, 1.0);

                // Small bloom at the very center
                let bloom = 0.15 * (1.0 - smoothstep(0.0, 0.2, dist));
                let color = [
                    base_color[0] + bloom,
                    base_color[1] + bloom,
                    base_color[2] + bloom,
                ];

                frame.add(px, py, color, alpha);
            }
        }
    }
}

// Planet orbit rings for the spatial belt view
//
// Drawn only while the spatial layout dominates; the rings fade out over
// the first half of the morph and stay hidden beyond it.
pub fn render_orbit_rings(frame: &mut Frame, camera: &Camera, transition: f64) {
    if transition >= 0.5 || frame.width == 0 || frame.height == 0 {
        return;
    }
    let fade = (1.0 - transition * 2.0) as f32;
    let aspect = frame.aspect();
    let (width, height) = (frame.width, frame.height);

    for planet in PLANET_ORBITS {
        let color = [planet.color[0], planet.color[1], planet.color[2]];
        let alpha = planet.color[3] * fade;

        let project = |angle: f64| {
            let ox = planet.a * angle.cos();
            let oy = planet.a * angle.sin();
            let mut x = (ox + camera.pan_x) * camera.zoom;
            let y = (oy + camera.pan_y) * camera.zoom;
            x /= aspect;
            ndc_to_pixel(x, y, width, height)
        };

        for seg in 0..RING_SEGMENTS {
            let a0 = seg as f64 / RING_SEGMENTS as f64 * std::f64::consts::TAU;
            let a1 = (seg + 1) as f64 / RING_SEGMENTS as f64 * std::f64::consts::TAU;
            let (x0, y0) = project(a0);
            let (x1, y1) = project(a1);
            plot_line(frame, x0, y0, x1, y1, color, alpha);
        }
    }
}

// Plot a line segment in pixel space by uniform sampling
fn plot_line(frame: &mut Frame, x0: f64, y0: f64, x1: f64, y1: f64, color: [f32; 3], alpha: f32) {
    let steps = ((x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize).max(1);
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = x0 + (x1 - x0) * t;
        let y = y0 + (y1 - y0) * t;
        if x < 0.0 || y < 0.0 || x >= frame.width as f64 || y >= frame.height as f64 {
            continue;
        }
        frame.add(x as usize, y as usize, color, alpha);
    }
}
