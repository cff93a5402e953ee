use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Window};

use crate::binder::{ControlSurface, LabelHandle, SelectorHandle, SliderHandle};

impl SliderHandle for HtmlInputElement {
    fn value(&self) -> String {
        Self::value(self)
    }
}

impl LabelHandle for Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Radio buttons sharing a `name`
pub struct RadioGroup {
    document: Document,
    name: String,
}

impl SelectorHandle for RadioGroup {
    fn checked(&self) -> Option<String> {
        self.document
            .query_selector(&format!("input[name=\"{}\"]:checked", self.name))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
    }
}

/// The live page
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub const fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ControlSurface for DomSurface {
    type Slider = HtmlInputElement;
    type Label = Element;
    type Selector = RadioGroup;

    fn slider(&self, id: &str) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    fn label(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn selector(&self, group: &str) -> Option<RadioGroup> {
        let selector = format!("input[name=\"{group}\"]");
        self.document
            .query_selector(&selector)
            .ok()
            .flatten()
            .map(|_| RadioGroup {
                document: self.document.clone(),
                name: group.to_string(),
            })
    }
}

/// Panels requested by the page: `<body data-panel="position_3d">`
pub fn panel_names(document: &Document) -> Vec<String> {
    document
        .body()
        .and_then(|body| body.get_attribute("data-panel"))
        .map(|attr| attr.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// `window.SERVO_WEB_CONFIG.deviceBase`, served by the host's `/config.js`
pub fn device_base(window: &Window) -> String {
    let Ok(config) = js_sys::Reflect::get(window, &"SERVO_WEB_CONFIG".into()) else {
        return String::new();
    };
    if config.is_undefined() || config.is_null() {
        return String::new();
    }
    js_sys::Reflect::get(&config, &"deviceBase".into())
        .ok()
        .and_then(|base: JsValue| base.as_string())
        .unwrap_or_default()
}
