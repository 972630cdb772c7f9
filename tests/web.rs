#![cfg(target_arch = "wasm32")]

use laserflow::create_laser_flow;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn options(pairs: &[(&str, JsValue)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (key, value) in pairs {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
    }
    obj.into()
}

#[wasm_bindgen_test]
fn starts_and_destroys_twice_without_throwing() {
    let Some(mut flow) = create_laser_flow(canvas(), JsValue::UNDEFINED) else {
        // headless browsers without WebGL2 get a logged warning and no handle
        return;
    };
    assert!(flow.running());
    flow.destroy();
    assert!(!flow.running());
    flow.destroy();
}

#[wasm_bindgen_test]
fn first_frame_sizes_the_backing_store() {
    let canvas = canvas();
    canvas.style().set_property("width", "120px").unwrap();
    canvas.style().set_property("height", "40px").unwrap();
    let Some(mut flow) = create_laser_flow(canvas.clone(), JsValue::NULL) else {
        return;
    };
    let dpr = web_sys::window().unwrap().device_pixel_ratio().min(2.0);
    assert_eq!(canvas.width(), (120.0 * dpr) as u32);
    assert_eq!(canvas.height(), (40.0 * dpr) as u32);
    flow.destroy();
}

#[wasm_bindgen_test]
fn invalid_color_yields_no_renderer() {
    let canvas = canvas();
    let opts = options(&[("color", JsValue::from_str("not-a-color"))]);
    assert!(create_laser_flow(canvas.clone(), opts).is_none());
    // the canvas keeps its HTML defaults
    assert_eq!((canvas.width(), canvas.height()), (300, 150));
}

#[wasm_bindgen_test]
fn custom_options_are_accepted() {
    let opts = options(&[
        ("color", JsValue::from_str("#ff3366")),
        ("wispDensity", JsValue::from_f64(2.0)),
        ("verticalBeamOffset", JsValue::from_f64(0.0)),
    ]);
    if let Some(mut flow) = create_laser_flow(canvas(), opts) {
        flow.destroy();
    }
}
