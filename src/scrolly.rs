use crate::constants::{SCROLLY_CANVAS_ID, SCROLLY_CONTAINER_ID, SCROLLY_VIDEO_ID};
use crate::core::{ScrollyVideoMapper, VideoMetadata};
use crate::dom;
use crate::events;
use crate::overlay::ScrollyOverlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ScrollyContext {
    pub mapper: ScrollyVideoMapper,
    pub container: web::HtmlElement,
    pub video: web::HtmlVideoElement,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub overlay: ScrollyOverlay,
}

impl ScrollyContext {
    fn on_scroll(&mut self) {
        let geometry = dom::scroll_geometry(Some(&self.container));
        let progress = self.mapper.progress(&geometry);
        let frame = self.mapper.update(progress, self.video.current_time());
        if let Some(t) = frame.seek_to {
            self.video.set_current_time(t);
        }
        self.overlay.apply(&frame);
    }

    fn on_can_play(&mut self) {
        let meta = VideoMetadata {
            duration: self.video.duration(),
            width: self.video.video_width(),
            height: self.video.video_height(),
        };
        if !self.mapper.on_metadata(meta) {
            return;
        }
        log::info!(
            "[scrolly] video ready: {:.2}s, {} frames, {}x{}",
            meta.duration,
            self.mapper.frame_count(),
            meta.width,
            meta.height
        );
        if let Some((w, h)) = self.mapper.raster_size() {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }
        if let Some(t) = self.mapper.initial_seek() {
            self.video.set_current_time(t);
        }
    }

    fn draw_frame(&self) {
        if !self.mapper.on_seeked() {
            return;
        }
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        if let Err(e) = self
            .ctx2d
            .draw_image_with_html_video_element_and_dw_and_dh(&self.video, 0.0, 0.0, w, h)
        {
            log::warn!("[scrolly] drawImage failed: {:?}", e);
        }
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let container: web::HtmlElement = dom::element_by_id(document, SCROLLY_CONTAINER_ID)?;
    let video: web::HtmlVideoElement = dom::element_by_id(document, SCROLLY_VIDEO_ID)?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, SCROLLY_CANVAS_ID)?;
    let ctx2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let ctx = Rc::new(RefCell::new(ScrollyContext {
        mapper: ScrollyVideoMapper::default(),
        container,
        video: video.clone(),
        canvas,
        ctx2d,
        overlay: ScrollyOverlay::from_document(document),
    }));

    // canplay may fire more than once; the mapper only accepts the first.
    {
        let ctx = ctx.clone();
        dom::add_listener(video.as_ref(), "canplay", move |_| {
            ctx.borrow_mut().on_can_play();
        });
    }
    {
        let ctx = ctx.clone();
        dom::add_listener(video.as_ref(), "seeked", move |_| {
            ctx.borrow().draw_frame();
        });
    }
    dom::add_listener(video.as_ref(), "error", move |_| {
        log::error!("[scrolly] video failed to load; frames stay static");
    });
    // readyState >= HAVE_FUTURE_DATA means canplay already fired
    if video.ready_state() >= 3 {
        ctx.borrow_mut().on_can_play();
    }

    ctx.borrow_mut().on_scroll();
    let ctx_scroll = ctx.clone();
    events::wire_coalesced_scroll(move || ctx_scroll.borrow_mut().on_scroll());
    Ok(())
}
