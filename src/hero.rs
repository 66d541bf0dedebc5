use crate::constants::{HERO_CANVAS_ID, HERO_CONTENT_ID, HERO_MODEL_URL};
use crate::core::{HeroModel, HeroTransformMapper};
use crate::dom;
use crate::events;
use crate::fetch;
use crate::frame::{self, FrameContext};
use crate::overlay;
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

async fn load_model(url: &str) -> anyhow::Result<HeroModel> {
    let bytes = fetch::fetch_bytes(url).await?;
    let mut model = HeroModel::from_glb(&bytes)?;
    let center = model.recenter();
    log::info!(
        "[hero] model loaded: {} vertices, {} triangles, recentered by ({:.2},{:.2},{:.2})",
        model.vertices.len(),
        model.indices.len() / 3,
        center.x,
        center.y,
        center.z
    );
    Ok(model)
}

/// Bring up the hero canvas. Any failure leaves the mapper inactive for good.
pub async fn init(document: web::Document) -> anyhow::Result<()> {
    let mapper = Rc::new(RefCell::new(HeroTransformMapper::default()));
    match start(&document, mapper.clone()).await {
        Ok(()) => Ok(()),
        Err(e) => {
            mapper.borrow_mut().mark_failed(format!("{:#}", e));
            Err(e)
        }
    }
}

async fn start(
    document: &web::Document,
    mapper: Rc<RefCell<HeroTransformMapper>>,
) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, HERO_CANVAS_ID)?;
    let content = dom::html_element(document, HERO_CONTENT_ID);
    wire_canvas_resize(&canvas);

    let mut gpu = GpuState::new(&canvas).await?;
    let model = load_model(HERO_MODEL_URL).await?;
    gpu.upload_model(&model);
    if !mapper.borrow_mut().mark_ready() {
        anyhow::bail!("model readiness delivered twice");
    }

    let apply_scroll = {
        let mapper = mapper.clone();
        move || {
            let geometry = dom::scroll_geometry(None);
            let mut m = mapper.borrow_mut();
            let progress = m.progress(&geometry);
            if let (Some(frame), Some(el)) = (m.on_scroll(progress), &content) {
                overlay::apply_reveal(el, &frame.reveal);
            }
        }
    };
    // Pose must match the current scroll position before the first frame.
    apply_scroll();
    events::wire_coalesced_scroll(apply_scroll);

    frame::start_loop(Rc::new(RefCell::new(FrameContext {
        mapper,
        gpu,
        canvas,
        started: Instant::now(),
    })));
    Ok(())
}
