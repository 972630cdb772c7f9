//! LaserFlow: an animated WebGL background of flowing beams, fog and
//! shimmer, driven from Rust compiled to WebAssembly.
//!
//! Everything except the `wasm` module builds on the host too, which is
//! where the renderer lifecycle and the CPU copy of the field are tested.

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod frame;
pub mod gpu;
pub mod renderer;
pub mod shaders;

pub use animation::Animation;
pub use color::Rgb;
pub use config::LaserFlowConfig;
pub use error::{LaserFlowError, ShaderStage};
pub use frame::{FrameClock, SurfaceSize};
pub use gpu::{GpuBackend, Surface};
pub use renderer::{FrameStats, Renderer};

#[cfg(target_arch = "wasm32")]
pub use wasm::{create_laser_flow, LaserFlow};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    use crate::config::LaserFlowConfig;
    use crate::error::{LaserFlowError, Result};

    mod render;
    mod webgl;

    /// Id of the canvas picked up automatically on page load.
    const AUTO_CANVAS_ID: &str = "laserflow";

    thread_local! {
        static AUTO: RefCell<Option<LaserFlow>> = RefCell::new(None);
    }

    /// Handle returned to JS. `destroy()` stops the animation and frees the
    /// GPU resources; later calls do nothing.
    #[wasm_bindgen]
    pub struct LaserFlow {
        running: Option<render::Running>,
    }

    #[wasm_bindgen]
    impl LaserFlow {
        pub fn destroy(&mut self) {
            if let Some(running) = self.running.take() {
                running.stop();
            }
        }

        #[wasm_bindgen(getter)]
        pub fn running(&self) -> bool {
            self.running.is_some()
        }
    }

    fn options_to_config(options: &JsValue) -> Result<LaserFlowConfig> {
        if options.is_undefined() || options.is_null() {
            return Ok(LaserFlowConfig::default());
        }
        let json = js_sys::JSON::stringify(options)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_else(|| "{}".to_string());
        LaserFlowConfig::from_json(&json)
    }

    fn log_failure(e: &LaserFlowError) {
        match e {
            LaserFlowError::ContextUnavailable => log::warn!("{e}"),
            _ => log::error!("laserflow: {e}"),
        }
    }

    /// Start a LaserFlow background on `canvas`. Returns `undefined` (after
    /// logging why) when the options are invalid or WebGL is unavailable.
    #[wasm_bindgen(js_name = createLaserFlow)]
    pub fn create_laser_flow(canvas: HtmlCanvasElement, options: JsValue) -> Option<LaserFlow> {
        let started = options_to_config(&options).and_then(|config| {
            log::debug!("laserflow config: {:?}", config);
            render::start(canvas, &config)
        });
        match started {
            Ok(running) => Some(LaserFlow {
                running: Some(running),
            }),
            Err(e) => {
                log_failure(&e);
                None
            }
        }
    }

    fn auto_init() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(canvas) = document
            .get_element_by_id(AUTO_CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::debug!("no #{AUTO_CANVAS_ID} canvas; auto-init skipped");
            return;
        };
        if let Some(handle) = create_laser_flow(canvas, JsValue::UNDEFINED) {
            AUTO.with(|cell| *cell.borrow_mut() = Some(handle));
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> std::result::Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if document.ready_state() == "loading" {
            let closure = Closure::wrap(Box::new(auto_init) as Box<dyn FnMut()>);
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        } else {
            auto_init();
        }
        Ok(())
    }
}
