// Transition animation between the two layouts
//
// A state machine over a single scalar in [0, 1]: idle, or easing from a
// captured start value toward a target. Retriggering mid-flight restarts
// from the CURRENT value, so a reversed transition glides back instead of
// jumping. Alongside the authoritative value (read every frame by the
// renderer) a display copy is refreshed on a throttled cadence; UI text
// reads the copy so it does not churn at frame rate.

const BASE_DURATION_MS: f64 = 3_000.0;
const SPEED_MIN: f64 = 0.2;
const SPEED_MAX: f64 = 3.0;

// Frames between display-copy refreshes
const DISPLAY_REFRESH_FRAMES: u64 = 30;

// The canonical ease: slow in, fast middle, slow out
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone)]
pub struct Transition {
    value: f64,
    display_value: f64,
    start_value: f64,
    target: f64,
    start_time_ms: f64,
    animating: bool,
    speed: f64,
    frame_count: u64,
}

impl Transition {
    pub fn new() -> Self {
        Transition {
            value: 0.0,
            display_value: 0.0,
            start_value: 0.0,
            target: 0.0,
            start_time_ms: 0.0,
            animating: false,
            speed: 1.0,
            frame_count: 0,
        }
    }

    // Begin animating toward `target`. Always captures the current value as
    // the start, which is exactly the mid-flight retrigger rule: no queue,
    // no stacking, no backward jump.
    pub fn start(&mut self, target: f64, now_ms: f64) {
        self.start_value = self.value;
        self.target = target.clamp(0.0, 1.0);
        self.start_time_ms = now_ms;
        self.animating = true;
    }

    // Advance to `now_ms` and return the authoritative value
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if self.animating {
            let duration = BASE_DURATION_MS / self.speed;
            let raw = ((now_ms - self.start_time_ms) / duration).min(1.0);
            let eased = ease_in_out_cubic(raw.max(0.0));
            self.value = self.start_value + (self.target - self.start_value) * eased;

            if raw >= 1.0 {
                // Exact snap, never a value a rounding error short of it
                self.value = self.target;
                self.animating = false;
            }
        }

        self.frame_count += 1;
        if self.frame_count % DISPLAY_REFRESH_FRAMES == 0 {
            self.display_value = self.value;
        }

        self.value
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn display_value(&self) -> f64 {
        self.display_value
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_and_snaps_exactly() {
        let mut transition = Transition::new();
        transition.start(1.0, 0.0);

        let mut previous = 0.0;
        // ~60 fps samples across the full 3000 ms
        for frame in 1..=200 {
            let value = transition.tick(frame as f64 * 16.0);
            assert!(value >= previous, "regressed at frame {}", frame);
            previous = value;
        }
        assert_eq!(transition.value(), 1.0);
        assert!(!transition.is_animating());
    }

    #[test]
    fn test_retrigger_starts_from_current_value() {
        let mut transition = Transition::new();
        transition.start(1.0, 0.0);
        let mid = transition.tick(1_500.0);
        assert!(mid > 0.1 && mid < 0.9);

        // Reverse mid-flight: the very next sample must stay near the
        // mid-flight value, not jump toward either endpoint
        transition.start(0.0, 1_500.0);
        let next = transition.tick(1_516.0);
        assert!((next - mid).abs() < 0.05, "jump from {} to {}", mid, next);

        // And it must finish at the new target
        transition.tick(10_000.0);
        assert_eq!(transition.value(), 0.0);
    }

    #[test]
    fn test_speed_divides_duration() {
        let mut fast = Transition::new();
        fast.set_speed(3.0);
        fast.start(1.0, 0.0);
        fast.tick(1_001.0); // 3000 / 3 = 1000 ms
        assert_eq!(fast.value(), 1.0);

        let mut slow = Transition::new();
        slow.set_speed(0.2);
        slow.start(1.0, 0.0);
        slow.tick(3_000.0); // only 1/5 of the way through
        assert!(slow.is_animating());
        assert!(slow.value() < 1.0);
    }

    #[test]
    fn test_speed_clamped() {
        let mut transition = Transition::new();
        transition.set_speed(100.0);
        transition.start(1.0, 0.0);
        // Even clamped to max speed, 100 ms in the value is still partial
        transition.tick(100.0);
        assert!(transition.value() < 1.0);
    }

    #[test]
    fn test_display_value_is_throttled() {
        let mut transition = Transition::new();
        transition.start(1.0, 0.0);
        for frame in 1..=29 {
            transition.tick(frame as f64 * 16.0);
        }
        // 29 ticks: the display copy has not refreshed yet
        assert_eq!(transition.display_value(), 0.0);
        transition.tick(30.0 * 16.0);
        assert!(transition.display_value() > 0.0);
    }
}
