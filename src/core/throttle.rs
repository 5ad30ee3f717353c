/// Minimum-interval gate driven by caller-supplied timestamps (ms).
#[derive(Clone, Debug)]
pub struct FrameThrottle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl FrameThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    pub fn per_second(rate: f64) -> Self {
        Self::new(1000.0 / rate)
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// `true` if enough time passed since the last accepted call; the first
    /// call is always accepted.
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Frame admission for the particle loop: skipped entirely while off-screen,
/// otherwise throttled.
#[derive(Clone, Debug)]
pub struct FrameGate {
    throttle: FrameThrottle,
    visible: bool,
}

impl FrameGate {
    pub fn new(throttle: FrameThrottle) -> Self {
        Self {
            throttle,
            visible: true,
        }
    }

    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        self.visible && self.throttle.accept(now_ms)
    }
}
