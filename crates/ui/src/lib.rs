//! servo-web panels
//!
//! Binds the sliders of a control page to their labels and to the device
//! endpoints. The binder core is plain Rust; the `wasm32` build wires it to
//! the DOM and to `fetch`.

pub mod binder;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod network;

pub use binder::{
    BindError, Binder, ControlSurface, Dispatch, LabelHandle, SelectorHandle, SliderHandle,
};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::rc::Rc;

    use servo_web_protocol::ControlGroup;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::binder::Binder;
    use crate::dom::{self, DomSurface};
    use crate::network::FetchDispatcher;

    fn to_js(err: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    #[wasm_bindgen(start)]
    pub fn main_js() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| to_js("no global `window` exists"))?;
        let document = window
            .document()
            .ok_or_else(|| to_js("should have a document on window"))?;

        let panels = dom::panel_names(&document);
        if panels.is_empty() {
            return Err(to_js("page declares no data-panel"));
        }

        let base = dom::device_base(&window);
        let surface = DomSurface::new(document);

        for name in panels {
            let group = ControlGroup::preset(&name).map_err(to_js)?;
            let binder = Rc::new(
                Binder::attach(&surface, group, FetchDispatcher::new(&base)).map_err(to_js)?,
            );

            for index in 0..binder.len() {
                let Some(slider) = binder.slider(index) else {
                    continue;
                };
                let handler = Rc::clone(&binder);
                let oninput = Closure::wrap(Box::new(move || {
                    if let Err(e) = handler.on_input(index) {
                        web_sys::console::warn_1(&format!("[binder] {e}").into());
                    }
                }) as Box<dyn FnMut()>);
                slider.set_oninput(Some(oninput.as_ref().unchecked_ref()));
                oninput.forget();
            }

            web_sys::console::log_1(
                &format!("[binder] {name}: {} slider(s) bound", binder.len()).into(),
            );
        }

        Ok(())
    }
}
