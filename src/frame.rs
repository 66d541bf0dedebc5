use crate::core::HeroTransformMapper;
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the hero canvas.
pub struct FrameContext {
    pub mapper: Rc<RefCell<HeroTransformMapper>>,
    pub gpu: GpuState,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f64();
        let (pose, scale) = {
            let mapper = self.mapper.borrow();
            (mapper.on_tick(elapsed), mapper.animation.scale)
        };
        let Some(pose) = pose else {
            return;
        };
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(pose.model_matrix(scale)) {
            log::error!("[hero] render error: {:?}", e);
        }
    }
}

/// Drive `frame()` from requestAnimationFrame until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request(&tick_clone);
    }) as Box<dyn FnMut()>));
    request(&tick);
}

fn request(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
