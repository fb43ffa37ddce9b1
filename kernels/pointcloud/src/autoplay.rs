// Scripted demo loop
//
// An 18-second cycle that tours both layouts: a slow zoom through the
// first layout, a morph to the second, a hold, and a morph back. The
// script only emits directives; the explorer applies them through the
// same transition/camera paths user input uses, which is what makes any
// direct input able to cancel the tour cleanly.

const CYCLE_MS: f64 = 18_000.0;

// Zoom envelope the script tours, set per viewing domain so the tour moves
// within that domain's camera limits instead of clamping against them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourZoom {
    // Zoom at the start of the opening creep (and after the return morph)
    pub opening_from: f64,
    // Zoom the opening creep reaches by the first morph
    pub opening_to: f64,
    // Zoom held over the second layout
    pub hold: f64,
}

// What the script wants applied this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayFrame {
    // Desired transition target, 0.0 = layout A, 1.0 = layout B
    pub target: f64,
    pub zoom: Option<f64>,
    pub reset_pan: bool,
}

#[derive(Debug, Clone)]
pub struct Autoplay {
    active: bool,
    start_time_ms: f64,
    zoom: TourZoom,
}

impl Autoplay {
    pub fn new(zoom: TourZoom) -> Self {
        Autoplay { active: false, start_time_ms: 0.0, zoom }
    }

    pub fn start(&mut self, now_ms: f64) {
        self.active = true;
        self.start_time_ms = now_ms;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    // Sample the script at `now_ms`; None while inactive
    //
    // Phases of the cycle:
    //   0    - 1/3   layout A with a creeping zoom (6 s)
    //   1/3  - 1/2   morph to layout B (3 s)
    //   1/2  - 5/6   layout B held at unit zoom, pan reset (6 s)
    //   5/6  - 1     morph back to layout A (3 s)
    pub fn sample(&self, now_ms: f64) -> Option<AutoplayFrame> {
        if !self.active {
            return None;
        }
        let elapsed = (now_ms - self.start_time_ms).max(0.0);
        let phase = (elapsed % CYCLE_MS) / CYCLE_MS;

        let frame = if phase < 1.0 / 3.0 {
            let zoom_phase = phase * 3.0;
            let creep =
                self.zoom.opening_from + zoom_phase * (self.zoom.opening_to - self.zoom.opening_from);
            AutoplayFrame { target: 0.0, zoom: Some(creep), reset_pan: false }
        } else if phase < 0.5 {
            AutoplayFrame { target: 1.0, zoom: None, reset_pan: false }
        } else if phase < 5.0 / 6.0 {
            AutoplayFrame { target: 1.0, zoom: Some(self.zoom.hold), reset_pan: true }
        } else {
            AutoplayFrame { target: 0.0, zoom: Some(self.zoom.opening_from), reset_pan: false }
        };

        Some(frame)
    }
}
