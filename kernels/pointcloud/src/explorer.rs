// The explorer components: everything one embedded visualization owns
//
// `Viewer` is the host-agnostic core: cloud, camera, transition, autoplay,
// FPS counter, and the frame buffer, advanced by an explicit per-frame
// `tick`. The `#[wasm_bindgen]` wrappers below bind one viewer per
// explainer and translate browser events into viewer calls. Dropping the
// struct drops every buffer with it; there is no context-attached state.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;

use orbital::belt::prepare_belt_buffers;
use orbital::catalog::{
    mock_asteroid_catalog, mock_star_catalog, parse_asteroid_catalog, parse_star_catalog,
};
use orbital::stars::prepare_star_buffers;

use crate::autoplay::{Autoplay, TourZoom};
use crate::camera::{Camera, CameraLimits, BELT_LIMITS, STAR_LIMITS};
use crate::cloud::PointCloud;
use crate::fps::FpsCounter;
use crate::input::{action_for_key, Action, LayoutSide};
use crate::render::{render_cloud, render_orbit_rings, Frame};
use crate::transition::Transition;

// Seed for the histogram jitter when building buffers from a parsed catalog
const LAYOUT_SEED: u64 = 2_025;

#[derive(Debug, Clone, Copy)]
pub struct ViewerConfig {
    pub limits: CameraLimits,
    // Planet orbit rings only make sense over the spatial belt layout
    pub draw_rings: bool,
    // Zoom preset applied when a morph toward (layout A, layout B) begins;
    // None leaves the camera alone across morphs
    pub zoom_on_switch: Option<(f64, f64)>,
    // Demo-loop zoom envelope; must sit inside `limits` so the tour moves
    // instead of clamping
    pub tour_zoom: TourZoom,
}

pub const BELT_VIEWER: ViewerConfig = ViewerConfig {
    limits: BELT_LIMITS,
    draw_rings: true,
    zoom_on_switch: Some((0.15, 1.0)),
    tour_zoom: TourZoom { opening_from: 0.12, opening_to: 0.20, hold: 1.0 },
};

pub const STAR_VIEWER: ViewerConfig = ViewerConfig {
    limits: STAR_LIMITS,
    draw_rings: false,
    zoom_on_switch: None,
    tour_zoom: TourZoom { opening_from: 0.8, opening_to: 1.3, hold: 1.0 },
};

pub struct Viewer {
    config: ViewerConfig,
    cloud: Option<PointCloud>,
    camera: Camera,
    transition: Transition,
    autoplay: Autoplay,
    fps: FpsCounter,
    frame: Frame,
    point_scale: f64,
    show_fps: bool,
    last_tick_ms: f64,
}

impl Viewer {
    pub fn new(config: ViewerConfig, width: usize, height: usize) -> Self {
        Viewer {
            config,
            cloud: None,
            camera: Camera::new(config.limits),
            transition: Transition::new(),
            autoplay: Autoplay::new(config.tour_zoom),
            fps: FpsCounter::new(),
            frame: Frame::new(width, height),
            point_scale: 1.0,
            show_fps: false,
            last_tick_ms: 0.0,
        }
    }

    pub fn set_cloud(&mut self, cloud: PointCloud) {
        self.cloud = Some(cloud);
    }

    // Loading state: the host shows its indicator until this flips
    pub fn is_loaded(&self) -> bool {
        self.cloud.as_ref().map_or(false, |c| !c.is_empty())
    }

    pub fn resize(&mut self, width: usize, height: usize, device_pixel_ratio: f64) {
        self.frame.resize(width, height);
        self.point_scale = device_pixel_ratio.max(0.5);
    }

    // Advance animation state and repaint the frame buffer
    pub fn tick(&mut self, now_ms: f64) {
        self.last_tick_ms = now_ms;

        if let Some(directive) = self.autoplay.sample(now_ms) {
            if (directive.target - self.transition.target()).abs() > f64::EPSILON
                && !self.transition.is_animating()
            {
                self.transition.start(directive.target, now_ms);
            }
            if let Some(zoom) = directive.zoom {
                self.camera.set_zoom(zoom);
            }
            if directive.reset_pan {
                self.camera.pan_x = 0.0;
                self.camera.pan_y = 0.0;
            }
        }

        let transition = self.transition.tick(now_ms);
        self.fps.tick(now_ms);

        self.frame.clear();
        // Never draw from a missing or empty buffer
        if let Some(cloud) = &self.cloud {
            if !cloud.is_empty() {
                if self.config.draw_rings {
                    render_orbit_rings(&mut self.frame, &self.camera, transition);
                }
                render_cloud(&mut self.frame, cloud, transition, &self.camera, self.point_scale);
            }
        }
    }

    // Morph toward the given layout, applying the per-view camera preset
    pub fn show_view(&mut self, side: LayoutSide) {
        let target = match side {
            LayoutSide::A => 0.0,
            LayoutSide::B => 1.0,
        };
        if (target - self.transition.target()).abs() <= f64::EPSILON
            && !self.transition.is_animating()
            && (self.transition.value() - target).abs() <= f64::EPSILON
        {
            return;
        }
        self.transition.start(target, self.last_tick_ms);

        if let Some((zoom_a, zoom_b)) = self.config.zoom_on_switch {
            self.camera.pan_x = 0.0;
            self.camera.pan_y = 0.0;
            self.camera.set_zoom(match side {
                LayoutSide::A => zoom_a,
                LayoutSide::B => zoom_b,
            });
        }
    }

    pub fn toggle_view(&mut self) {
        let side = if self.transition.target() < 0.5 {
            LayoutSide::B
        } else {
            LayoutSide::A
        };
        self.show_view(side);
    }

    // Pointer handling. Every direct input cancels the demo loop.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.autoplay.stop();
        self.camera.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let (w, h) = (self.frame.width as f64, self.frame.height as f64);
        self.camera.pointer_move(x, y, w, h);
    }

    // Up, leave, and multi-touch all end the drag the same way
    pub fn pointer_up(&mut self) {
        self.camera.pointer_up();
    }

    pub fn wheel(&mut self, zoom_in: bool) {
        self.autoplay.stop();
        self.camera.wheel(zoom_in);
    }

    pub fn double_click(&mut self) {
        self.autoplay.stop();
        self.camera.reset();
    }

    // Handle a key press. Actions the viewer cannot perform itself
    // (screenshot download, fullscreen) are returned to the host.
    pub fn key(&mut self, key: &str) -> Option<Action> {
        let action = action_for_key(key)?;
        match action {
            Action::ToggleView => {
                self.autoplay.stop();
                self.toggle_view();
                None
            }
            Action::ShowView(side) => {
                self.autoplay.stop();
                self.show_view(side);
                None
            }
            Action::ToggleAutoplay => {
                if self.autoplay.is_active() {
                    self.autoplay.stop();
                } else {
                    self.autoplay.start(self.last_tick_ms);
                }
                None
            }
            Action::ResetCamera => {
                self.autoplay.stop();
                self.camera.reset();
                None
            }
            Action::ToggleFpsReadout => {
                self.show_fps = !self.show_fps;
                None
            }
            Action::Screenshot | Action::ToggleFullscreen => Some(action),
        }
    }

    // The current frame: also the screenshot source, byte for byte
    pub fn frame_pixels(&self) -> &[u8] {
        &self.frame.pixels
    }

    pub fn transition_display(&self) -> f64 {
        self.transition.display_value()
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.transition.set_speed(speed);
    }

    pub fn fps_display(&self) -> u32 {
        self.fps.display()
    }

    pub fn show_fps(&self) -> bool {
        self.show_fps
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_active()
    }
}

// Forward the shared surface of a wasm explorer to its inner viewer
macro_rules! wasm_viewer_api {
    ($explorer:ident) => {
        #[wasm_bindgen]
        impl $explorer {
        pub fn is_loaded(&self) -> bool {
            self.viewer.is_loaded()
        }

        pub fn resize(&mut self, width: u32, height: u32, device_pixel_ratio: f64) {
            self.viewer.resize(width as usize, height as usize, device_pixel_ratio);
        }

        /// Advance animations and repaint; call once per animation frame
        pub fn tick(&mut self, now_ms: f64) {
            self.viewer.tick(now_ms);
        }

        /// RGBA frame buffer, length width*height*4. Blit to a canvas with
        /// putImageData; also the screenshot source.
        pub fn frame(&self) -> Clamped<Vec<u8>> {
            Clamped(self.viewer.frame_pixels().to_vec())
        }

        pub fn pointer_down(&mut self, x: f64, y: f64) {
            self.viewer.pointer_down(x, y);
        }

        pub fn pointer_move(&mut self, x: f64, y: f64) {
            self.viewer.pointer_move(x, y);
        }

        pub fn pointer_up(&mut self) {
            self.viewer.pointer_up();
        }

        /// Pointer-leave and multi-touch both map here: end the drag
        pub fn pointer_cancel(&mut self) {
            self.viewer.pointer_up();
        }

        pub fn wheel(&mut self, zoom_in: bool) {
            self.viewer.wheel(zoom_in);
        }

        pub fn double_click(&mut self) {
            self.viewer.double_click();
        }

        /// Handle a keyboard event; returns "screenshot" or "fullscreen"
        /// when the host must act, None otherwise
        pub fn key(&mut self, key: &str) -> Option<String> {
            match self.viewer.key(key) {
                Some(Action::Screenshot) => Some("screenshot".to_string()),
                Some(Action::ToggleFullscreen) => Some("fullscreen".to_string()),
                _ => None,
            }
        }

        pub fn transition_display(&self) -> f64 {
            self.viewer.transition_display()
        }

        pub fn set_speed(&mut self, speed: f64) {
            self.viewer.set_speed(speed);
        }

        pub fn fps(&self) -> u32 {
            self.viewer.fps_display()
        }

        pub fn show_fps(&self) -> bool {
            self.viewer.show_fps()
        }

        pub fn autoplay_active(&self) -> bool {
            self.viewer.autoplay_active()
        }
        }
    };
}

/// Asteroid belt explorer: spatial view morphing into the semi-major-axis
/// histogram, with planet orbit rings over the spatial layout.
#[wasm_bindgen]
pub struct BeltExplorer {
    viewer: Viewer,
}

#[wasm_bindgen]
impl BeltExplorer {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> BeltExplorer {
        BeltExplorer {
            viewer: Viewer::new(BELT_VIEWER, width as usize, height as usize),
        }
    }

    /// Load the precomputed catalog; the caller falls back to
    /// `generate_fallback` when the fetch or this parse fails
    pub fn load_catalog_json(&mut self, json: &str) -> Result<(), JsValue> {
        let catalog =
            parse_asteroid_catalog(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let mut rng = SmallRng::seed_from_u64(LAYOUT_SEED);
        let buffers = prepare_belt_buffers(&catalog.asteroids, &mut rng);
        let cloud =
            PointCloud::from_belt(buffers).map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.viewer.set_cloud(cloud);
        Ok(())
    }

    /// Procedural population with the same statistical structure as the
    /// precomputed catalog; deterministic under the seed
    pub fn generate_fallback(&mut self, count: u32, seed: u32) -> Result<(), JsValue> {
        let catalog = mock_asteroid_catalog(count as usize, u64::from(seed));
        let mut rng = SmallRng::seed_from_u64(u64::from(seed));
        let buffers = prepare_belt_buffers(&catalog.asteroids, &mut rng);
        let cloud =
            PointCloud::from_belt(buffers).map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.viewer.set_cloud(cloud);
        Ok(())
    }
}

wasm_viewer_api!(BeltExplorer);

/// Stellar cartography explorer: sky view morphing into the HR diagram.
#[wasm_bindgen]
pub struct StarExplorer {
    viewer: Viewer,
}

#[wasm_bindgen]
impl StarExplorer {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> StarExplorer {
        StarExplorer {
            viewer: Viewer::new(STAR_VIEWER, width as usize, height as usize),
        }
    }

    pub fn load_catalog_json(&mut self, json: &str) -> Result<(), JsValue> {
        let catalog =
            parse_star_catalog(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let buffers = prepare_star_buffers(&catalog.stars);
        let cloud =
            PointCloud::from_stars(buffers).map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.viewer.set_cloud(cloud);
        Ok(())
    }

    pub fn generate_fallback(&mut self, count: u32, seed: u32) -> Result<(), JsValue> {
        let catalog = mock_star_catalog(count as usize, u64::from(seed));
        let buffers = prepare_star_buffers(&catalog.stars);
        let cloud =
            PointCloud::from_stars(buffers).map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.viewer.set_cloud(cloud);
        Ok(())
    }
}

wasm_viewer_api!(StarExplorer);
