use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

pub fn wire_escape(mut handler: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(window.as_ref(), "keydown", move |ev| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            if is_escape(&kev.key()) {
                handler();
            }
        }
    });
}
