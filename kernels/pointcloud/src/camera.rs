// Pan/zoom camera with drag handling
//
// Pan is unbounded and lives in the same normalized space the layouts use;
// drag deltas divide by the viewport size AND the current zoom, so panning
// covers the same on-screen distance at any magnification. Zoom multiplies
// by a fixed factor per wheel event and clamps to a per-domain range.

const WHEEL_ZOOM_IN: f64 = 1.1;
const WHEEL_ZOOM_OUT: f64 = 0.9;

// Per-domain zoom envelope and reset default
#[derive(Debug, Clone, Copy)]
pub struct CameraLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub default_zoom: f64,
}

// Spatial belt view spans ~11 AU, so it starts zoomed well out
pub const BELT_LIMITS: CameraLimits = CameraLimits {
    min_zoom: 0.05,
    max_zoom: 5.0,
    default_zoom: 0.15,
};

// Star layouts are already in NDC, so unit zoom shows everything
pub const STAR_LIMITS: CameraLimits = CameraLimits {
    min_zoom: 0.5,
    max_zoom: 20.0,
    default_zoom: 1.0,
};

#[derive(Debug, Clone)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    limits: CameraLimits,
    dragging: bool,
    last_x: f64,
    last_y: f64,
}

impl Camera {
    pub fn new(limits: CameraLimits) -> Self {
        Camera {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: limits.default_zoom,
            limits,
            dragging: false,
            last_x: 0.0,
            last_y: 0.0,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.last_x = x;
        self.last_y = y;
    }

    // Accumulate pan from a pointer move while dragging. Pixel deltas map to
    // a [-1, 1] span of the viewport, divided by zoom; screen y grows
    // downward while layout y grows upward, hence the negation.
    pub fn pointer_move(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if !self.dragging || width <= 0.0 || height <= 0.0 {
            return;
        }
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        self.pan_x += (dx / width) * 2.0 / self.zoom;
        self.pan_y -= (dy / height) * 2.0 / self.zoom;
        self.last_x = x;
        self.last_y = y;
    }

    // Pointer-up and pointer-leave both end the drag; leaving mid-drag must
    // not produce a stuck-drag state.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn wheel(&mut self, zoom_in: bool) {
        let factor = if zoom_in { WHEEL_ZOOM_IN } else { WHEEL_ZOOM_OUT };
        self.zoom = (self.zoom * factor).clamp(self.limits.min_zoom, self.limits.max_zoom);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.limits.min_zoom, self.limits.max_zoom);
    }

    pub fn reset(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.zoom = self.limits.default_zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_to_limits() {
        let mut camera = Camera::new(BELT_LIMITS);
        for _ in 0..200 {
            camera.wheel(false);
        }
        assert_eq!(camera.zoom, BELT_LIMITS.min_zoom);
        for _ in 0..200 {
            camera.wheel(true);
        }
        assert_eq!(camera.zoom, BELT_LIMITS.max_zoom);
    }

    #[test]
    fn test_drag_delta_scales_with_zoom() {
        let mut camera = Camera::new(STAR_LIMITS);
        camera.pointer_down(100.0, 100.0);
        camera.pointer_move(200.0, 100.0, 800.0, 600.0);
        // 100 px over an 800 px viewport at zoom 1: (100/800)*2/1 = 0.25
        assert!((camera.pan_x - 0.25).abs() < 1e-12);
        assert_eq!(camera.pan_y, 0.0);

        // Same drag at zoom 2 moves half as far in layout space
        camera.reset();
        camera.set_zoom(2.0);
        camera.pointer_down(100.0, 100.0);
        camera.pointer_move(200.0, 100.0, 800.0, 600.0);
        assert!((camera.pan_x - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_drag_is_negated() {
        let mut camera = Camera::new(STAR_LIMITS);
        camera.pointer_down(0.0, 0.0);
        // Dragging DOWN on screen pans the view up in layout space
        camera.pointer_move(0.0, 60.0, 800.0, 600.0);
        assert!(camera.pan_y < 0.0);
    }

    #[test]
    fn test_moves_ignored_when_not_dragging() {
        let mut camera = Camera::new(BELT_LIMITS);
        camera.pointer_move(50.0, 50.0, 800.0, 600.0);
        assert_eq!((camera.pan_x, camera.pan_y), (0.0, 0.0));

        camera.pointer_down(0.0, 0.0);
        camera.pointer_up();
        camera.pointer_move(50.0, 50.0, 800.0, 600.0);
        assert_eq!((camera.pan_x, camera.pan_y), (0.0, 0.0));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut camera = Camera::new(BELT_LIMITS);
        camera.pointer_down(0.0, 0.0);
        camera.pointer_move(30.0, 40.0, 800.0, 600.0);
        camera.wheel(true);
        camera.reset();
        assert_eq!((camera.pan_x, camera.pan_y), (0.0, 0.0));
        assert_eq!(camera.zoom, BELT_LIMITS.default_zoom);
    }
}
