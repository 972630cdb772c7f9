//! Per-frame bookkeeping: how big the backing store should be and how much
//! time has passed since the first frame.

/// Upper bound on the device pixel ratio used for the backing store.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Physical size of the drawing buffer, in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scale a CSS layout size by the (clamped) pixel ratio.
    ///
    /// Truncates to whole pixels, as assigning to `canvas.width` would, and
    /// never goes below 1x1 so the viewport and resolution stay valid.
    pub fn from_layout(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = clamp_pixel_ratio(device_pixel_ratio);
        let px = |css: f64| (css.max(0.0) * dpr) as u32;
        Self {
            width: px(css_width).max(1),
            height: px(css_height).max(1),
        }
    }

    pub fn as_f32(self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

/// `min(dpr, 2)`, with a missing or bogus ratio treated as 1.
pub fn clamp_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Elapsed-time source for the `u_time` uniform.
///
/// The start time is taken from the first `tick`, so the first frame always
/// sees 0.0. Later ticks never report less than an earlier one even if the
/// host clock steps backwards.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_secs: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let start = *self.start_ms.get_or_insert(now_ms);
        let secs = ((now_ms - start) * 0.001) as f32;
        self.last_secs = self.last_secs.max(secs);
        self.last_secs
    }

    pub fn started(&self) -> bool {
        self.start_ms.is_some()
    }

    pub fn elapsed(&self) -> f32 {
        self.last_secs
    }
}
