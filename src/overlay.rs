use crate::constants::{SCROLL_PROMPT_ID, TEXT_OVERLAY_ID};
use crate::core::{ContentReveal, ScrollyFrame};
use crate::dom;
use web_sys as web;

#[inline]
pub fn set_opacity(el: &web::HtmlElement, opacity: f64) {
    dom::set_style(el, "opacity", &format!("{}", opacity.clamp(0.0, 1.0)));
}

/// Fade and slide the hero text panel.
pub fn apply_reveal(el: &web::HtmlElement, reveal: &ContentReveal) {
    set_opacity(el, reveal.opacity);
    dom::set_style(
        el,
        "transform",
        &format!("translateY({:.2}px)", reveal.translate_y),
    );
}

/// Scroll prompt and closing text for the scrollytelling section.
pub struct ScrollyOverlay {
    prompt: Option<web::HtmlElement>,
    text: Option<web::HtmlElement>,
}

impl ScrollyOverlay {
    pub fn from_document(document: &web::Document) -> Self {
        let prompt = dom::html_element(document, SCROLL_PROMPT_ID);
        let text = dom::html_element(document, TEXT_OVERLAY_ID);
        if prompt.is_none() {
            log::warn!("[scrolly] #{} not found", SCROLL_PROMPT_ID);
        }
        if text.is_none() {
            log::warn!("[scrolly] #{} not found", TEXT_OVERLAY_ID);
        }
        Self { prompt, text }
    }

    pub fn apply(&self, frame: &ScrollyFrame) {
        if let Some(p) = &self.prompt {
            set_opacity(p, if frame.prompt_visible { 1.0 } else { 0.0 });
        }
        if let Some(t) = &self.text {
            set_opacity(t, frame.overlay_opacity);
        }
    }
}
