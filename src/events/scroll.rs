use crate::core::FrameCoalescer;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;

/// Run `handler` at most once per animation frame while the page scrolls.
///
/// Resizes go through the same path since they change viewport geometry.
/// Only the latest scroll position matters, so intermediate events are dropped.
pub fn wire_coalesced_scroll(handler: impl FnMut() + 'static) {
    let coalescer = Rc::new(RefCell::new(FrameCoalescer::default()));
    let handler = Rc::new(RefCell::new(handler));
    for event in ["scroll", "resize"] {
        let coalescer = coalescer.clone();
        let handler = handler.clone();
        dom::add_window_listener(event, move || {
            if !coalescer.borrow_mut().request() {
                return;
            }
            let coalescer = coalescer.clone();
            let handler = handler.clone();
            dom::request_frame(move || {
                if coalescer.borrow_mut().take() {
                    (&mut *handler.borrow_mut())();
                }
            });
        });
    }
}
