use crate::gpu::{GpuBackend, Surface};
use crate::renderer::{FrameStats, Renderer};

/// State behind one self-rescheduling frame chain.
///
/// The driver calls [`Animation::frame`] from its display-refresh callback
/// and only re-arms the callback when a frame was actually drawn, storing
/// the new request id with [`Animation::set_pending`]. [`Animation::stop`]
/// hands that id back for cancellation and releases the renderer, after
/// which `frame` draws nothing and asks for no further frames.
pub struct Animation<G: GpuBackend, S: Surface> {
    surface: S,
    renderer: Option<Renderer<G>>,
    pending: Option<i32>,
}

impl<G: GpuBackend, S: Surface> Animation<G, S> {
    pub fn new(renderer: Renderer<G>, surface: S) -> Self {
        Self {
            surface,
            renderer: Some(renderer),
            pending: None,
        }
    }

    /// Draw one frame. `None` means the animation is stopped and the caller
    /// must not schedule another callback.
    pub fn frame(&mut self, now_ms: f64) -> Option<FrameStats> {
        // the request that woke us has fired
        self.pending = None;
        let renderer = self.renderer.as_mut()?;
        Some(renderer.render_frame(&self.surface, now_ms))
    }

    pub fn set_pending(&mut self, request_id: i32) {
        if self.renderer.is_some() {
            self.pending = Some(request_id);
        }
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    pub fn is_running(&self) -> bool {
        self.renderer.is_some()
    }

    /// Tear down. Returns the outstanding request id, if any, for the
    /// driver to cancel. Calling again is a no-op.
    pub fn stop(&mut self) -> Option<i32> {
        if let Some(renderer) = self.renderer.take() {
            renderer.destroy();
            log::info!("laserflow stopped");
        }
        self.pending.take()
    }
}
