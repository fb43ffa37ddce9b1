// Smoothed frames-per-second counter
//
// Exponential smoothing over instantaneous frame times, with the readable
// value refreshed every 30 frames so the readout is steady enough to read.

const SMOOTHING: f64 = 0.1;
const DISPLAY_REFRESH_FRAMES: u64 = 30;

#[derive(Debug, Clone)]
pub struct FpsCounter {
    smoothed: f64,
    last_time_ms: Option<f64>,
    frame_count: u64,
    display: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        FpsCounter {
            smoothed: 60.0,
            last_time_ms: None,
            frame_count: 0,
            display: 60,
        }
    }

    pub fn tick(&mut self, now_ms: f64) {
        if let Some(last) = self.last_time_ms {
            let dt = (now_ms - last).max(1.0);
            self.smoothed += (1_000.0 / dt - self.smoothed) * SMOOTHING;
        }
        self.last_time_ms = Some(now_ms);

        self.frame_count += 1;
        if self.frame_count % DISPLAY_REFRESH_FRAMES == 0 {
            self.display = self.smoothed.round() as u32;
        }
    }

    #[inline]
    pub fn display(&self) -> u32 {
        self.display
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_toward_frame_rate() {
        let mut fps = FpsCounter::new();
        // Steady 30 fps (33.3 ms frames) for 300 frames
        for frame in 0..300 {
            fps.tick(frame as f64 * 1_000.0 / 30.0);
        }
        let display = fps.display();
        assert!((28..=32).contains(&display), "display: {}", display);
    }

    #[test]
    fn test_display_holds_between_refreshes() {
        let mut fps = FpsCounter::new();
        for frame in 0..29 {
            fps.tick(frame as f64 * 33.3);
        }
        // Not yet refreshed: still the initial 60
        assert_eq!(fps.display(), 60);
    }
}
