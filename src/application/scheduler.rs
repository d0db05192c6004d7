/// Slack for f32 rounding when summing frame deltas, in seconds
const TOLERANCE: f32 = 1e-4;

/// Fixed-interval timer driven by frame time.
///
/// Reports at most one due tick per `advance`. The part of a frame past the
/// interval carries over to the next one, unless it already covers a whole
/// interval: that backlog is dropped instead of replayed. A disarmed timer
/// never fires.
#[derive(Clone, Debug, PartialEq)]
pub struct TickTimer {
    interval: f32,
    elapsed: f32,
    armed: bool,
}

impl TickTimer {
    /// Create a disarmed timer firing every `interval` seconds once started
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            armed: false,
        }
    }

    pub fn start(&mut self) {
        self.armed = true;
        self.elapsed = 0.0;
    }

    pub fn stop(&mut self) {
        self.armed = false;
        self.elapsed = 0.0;
    }

    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    pub const fn interval(&self) -> f32 {
        self.interval
    }

    /// Re-arm with a new interval. Time already accumulated is kept, so the
    /// new interval applies from the next check onwards.
    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval;
    }

    /// Feed elapsed frame time; true when a tick is due
    pub fn advance(&mut self, delta_time: f32) -> bool {
        if !self.armed {
            return false;
        }

        self.elapsed += delta_time;
        if self.elapsed + TOLERANCE < self.interval {
            return false;
        }

        let carry = (self.elapsed - self.interval).max(0.0);
        self.elapsed = if carry + TOLERANCE >= self.interval { 0.0 } else { carry };
        true
    }
}
