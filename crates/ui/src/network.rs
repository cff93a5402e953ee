use servo_web_protocol::ControlPath;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::binder::Dispatch;

/// Issues each control path as a bare `fetch` GET.
///
/// The promise is polled on its own task and its outcome discarded; a
/// failed request only leaves a debug line in the console.
pub struct FetchDispatcher {
    base: String,
}

impl FetchDispatcher {
    /// `base` is prepended to every path; empty means same origin
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl Dispatch for FetchDispatcher {
    fn dispatch(&self, path: &ControlPath) {
        let Some(window) = web_sys::window() else {
            web_sys::console::error_1(&"[fetch] no window, request not sent".into());
            return;
        };
        let url = format!("{}{path}", self.base);
        let request = window.fetch_with_str(&url);

        spawn_local(async move {
            if let Err(e) = JsFuture::from(request).await {
                web_sys::console::debug_2(&format!("[fetch] {url} failed:").into(), &e);
            }
        });
    }
}
