use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlCanvasElement};

use super::webgl::{CanvasSurface, WebGl};
use crate::animation::Animation;
use crate::config::LaserFlowConfig;
use crate::error::Result;
use crate::renderer::Renderer;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running frame chain. Dropping it does not stop the animation; call
/// [`Running::stop`].
pub struct Running {
    state: Rc<RefCell<Animation<WebGl, CanvasSurface>>>,
    callback: FrameCallback,
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Set up WebGL on `canvas`, draw the first frame and start the
/// `requestAnimationFrame` chain.
pub fn start(canvas: HtmlCanvasElement, config: &LaserFlowConfig) -> Result<Running> {
    let gpu = WebGl::acquire(&canvas)?;
    let renderer = Renderer::new(gpu, config)?;
    let state = Rc::new(RefCell::new(Animation::new(
        renderer,
        CanvasSurface::new(canvas),
    )));

    // `f` holds the animation-frame closure so that each frame can re-arm
    // `request_animation_frame` with itself. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_state = state.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        step(&frame_state, &f);
    }) as Box<dyn FnMut()>));

    step(&state, &g);
    log::info!("laserflow started");

    Ok(Running { state, callback: g })
}

/// Draw one frame and, unless stopped, schedule the next.
fn step(state: &Rc<RefCell<Animation<WebGl, CanvasSurface>>>, callback: &FrameCallback) {
    let mut animation = state.borrow_mut();
    if animation.frame(now_ms()).is_none() {
        return;
    }
    let Some(win) = window() else {
        log::error!("no window; animation halted");
        return;
    };
    let callback = callback.borrow();
    let Some(closure) = callback.as_ref() else {
        return;
    };
    match win.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => animation.set_pending(id),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
}

impl Running {
    /// Cancel the pending frame and release every GPU resource.
    pub fn stop(self) {
        let pending = self.state.borrow_mut().stop();
        if let (Some(id), Some(win)) = (pending, window()) {
            if let Err(e) = win.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        // breaks the closure -> state -> closure cycle
        self.callback.borrow_mut().take();
    }
}
