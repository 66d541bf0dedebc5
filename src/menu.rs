use crate::constants::*;
use crate::core::{escape_html, ItemDetailModal, MenuCatalog, MenuError, MenuItem, MenuView};
use crate::dom;
use crate::events;
use crate::fetch::{self, Fetched};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct MenuContext {
    pub document: web::Document,
    pub catalog: MenuCatalog,
    pub modal: ItemDetailModal,
}

async fn load_catalog() -> Result<MenuCatalog, MenuError> {
    let resp = match fetch::fetch(MENU_DATA_URL).await {
        Ok(Fetched::Ok(resp)) => resp,
        Ok(Fetched::Status(code)) => return Err(MenuError::Http(code)),
        Err(e) => return Err(MenuError::Fetch(format!("{:#}", e))),
    };
    let text = fetch::response_text(&resp)
        .await
        .map_err(|e| MenuError::Fetch(format!("{:#}", e)))?;
    MenuCatalog::from_json(&text)
}

/// Load, render and wire the menu. Failures end up as a message in the page.
pub async fn init(document: web::Document) {
    dom::body_class(&document, "loading", true);
    match load_catalog().await {
        Ok(catalog) => {
            log::info!(
                "[menu] loaded {} categories, {} items",
                catalog.categories().len(),
                catalog.item_count()
            );
            for item in catalog.malformed_nutrition() {
                log::warn!(
                    "[menu] item {} has nutrition entries without \": \": {:?}",
                    item.id,
                    item.nutritional_info
                );
            }
            let ctx = Rc::new(RefCell::new(MenuContext {
                document: document.clone(),
                catalog,
                modal: ItemDetailModal::default(),
            }));
            if let Err(e) = render_list(&document, &ctx.borrow().catalog.view()) {
                log::error!("[menu] render failed: {:?}", e);
            }
            wire_events(&ctx);
            setup_scroll_spy(&document);
        }
        Err(e) => {
            log::error!("Could not load menu data: {}", e);
            if let Some(el) = document.get_element_by_id(MENU_CONTENT_ID) {
                el.set_inner_html(MENU_LOAD_FAILED_HTML);
            }
        }
    }
    dom::body_class(&document, "loading", false);
}

fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// One nav link and one section per category, one card per item.
pub fn render_list(document: &web::Document, view: &MenuView) -> anyhow::Result<()> {
    let content = document
        .get_element_by_id(MENU_CONTENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MENU_CONTENT_ID))?;
    let links = document
        .get_element_by_id(CATEGORY_LINKS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CATEGORY_LINKS_ID))?;
    content.set_inner_html("");
    links.set_inner_html("");

    let js = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    for section_view in &view.sections {
        let link = create(
            document,
            "a",
            "category-link text-coffee-light font-medium py-2 px-1 text-lg",
        )?;
        link.set_attribute("href", &format!("#{}", section_view.anchor))
            .map_err(js)?;
        link.set_text_content(Some(&section_view.title));
        links.append_child(&link).map_err(js)?;

        let section = create(document, "section", "mb-16")?;
        section.set_id(&section_view.anchor);
        let title = create(
            document,
            "h2",
            "font-display text-4xl md:text-5xl font-bold text-coffee-dark mb-8 border-b-2 border-tan pb-4",
        )?;
        title.set_text_content(Some(&section_view.title));
        section.append_child(&title).map_err(js)?;

        let grid = create(
            document,
            "div",
            "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6 md:gap-8",
        )?;
        for card_view in &section_view.cards {
            let card = create(
                document,
                "div",
                "menu-item-card bg-white rounded-lg shadow-md overflow-hidden cursor-pointer flex flex-col",
            )?;
            card.set_attribute("data-item-id", &card_view.item_id)
                .map_err(js)?;
            card.set_attribute("data-category-name", &card_view.category_name)
                .map_err(js)?;
            card.set_inner_html(&card_view.inner_html());
            grid.append_child(&card).map_err(js)?;
        }
        section.append_child(&grid).map_err(js)?;
        content.append_child(&section).map_err(js)?;
    }
    Ok(())
}

fn wire_events(ctx: &Rc<RefCell<MenuContext>>) {
    let document = ctx.borrow().document.clone();

    {
        let ctx = ctx.clone();
        dom::add_click_listener(&document, CLOSE_MODAL_ID, move || close_detail(&ctx));
    }
    if let Some(modal) = document.get_element_by_id(ITEM_MODAL_ID) {
        let ctx = ctx.clone();
        let modal_target = modal.clone();
        dom::add_listener(modal.as_ref(), "click", move |ev| {
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .map(|el| el == modal_target)
                .unwrap_or(false);
            if on_backdrop {
                close_detail(&ctx);
            }
        });
    }
    if let Some(content) = document.get_element_by_id(MENU_CONTENT_ID) {
        let ctx = ctx.clone();
        dom::add_listener(content.as_ref(), "click", move |ev| {
            let card = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest(".menu-item-card").ok().flatten());
            if let Some(card) = card {
                let item_id = card.get_attribute("data-item-id").unwrap_or_default();
                let category = card.get_attribute("data-category-name").unwrap_or_default();
                open_detail(&ctx, &item_id, &category);
            }
        });
    }
    {
        let ctx = ctx.clone();
        events::wire_escape(move || {
            if ctx.borrow().modal.is_open() {
                close_detail(&ctx);
            }
        });
    }
}

pub fn open_detail(ctx: &Rc<RefCell<MenuContext>>, item_id: &str, category_name: &str) {
    let mut guard = ctx.borrow_mut();
    let MenuContext {
        document,
        catalog,
        modal,
    } = &mut *guard;
    let Some(item) = modal.open(catalog, item_id, category_name) else {
        log::warn!("[menu] no item {} in {}", item_id, category_name);
        return;
    };
    fill_modal(document, item);
    if let Some(el) = document.get_element_by_id(ITEM_MODAL_ID) {
        _ = el.class_list().add_1("active");
    }
    if let Some(body) = document.body() {
        dom::set_style(&body, "overflow", "hidden");
    }
}

pub fn close_detail(ctx: &Rc<RefCell<MenuContext>>) {
    let mut guard = ctx.borrow_mut();
    guard.modal.close();
    let document = &guard.document;
    if let Some(el) = document.get_element_by_id(ITEM_MODAL_ID) {
        _ = el.class_list().remove_1("active");
    }
    if let Some(body) = document.body() {
        dom::set_style(&body, "overflow", "");
    }
}

fn fill_modal(document: &web::Document, item: &MenuItem) {
    if let Some(container) = dom::html_element(document, MODAL_IMAGE_CONTAINER_ID) {
        match item.image() {
            Some(src) => {
                if let Ok(img) = dom::element_by_id::<web::HtmlImageElement>(document, MODAL_IMAGE_ID)
                {
                    img.set_src(src);
                    img.set_alt(&item.name);
                }
                dom::set_style(&container, "display", "block");
            }
            None => dom::set_style(&container, "display", "none"),
        }
    }
    if let Some(el) = document.get_element_by_id(MODAL_NAME_ID) {
        el.set_text_content(Some(&item.name));
    }
    if let Some(el) = document.get_element_by_id(MODAL_DESCRIPTION_ID) {
        el.set_text_content(Some(&item.description));
    }
    if let Some(el) = document.get_element_by_id(MODAL_NUTRITION_ID) {
        let rows: String = item
            .nutrition()
            .iter()
            .map(|fact| {
                format!(
                    "<li><span>{}</span><span>{}</span></li>",
                    escape_html(&fact.key),
                    escape_html(fact.value.as_deref().unwrap_or(""))
                )
            })
            .collect();
        el.set_inner_html(&format!("<ul>{}</ul>", rows));
    }
}

/// Highlight the nav link of the section currently crossing the upper band.
fn setup_scroll_spy(document: &web::Document) {
    let links = match document.query_selector_all(&format!("#{} a", CATEGORY_LINKS_ID)) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("[menu] scroll spy disabled: {:?}", e);
            return;
        }
    };
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: web::IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let href = format!("#{}", entry.target().id());
            for i in 0..links.length() {
                let Some(link) = links.get(i).and_then(|n| n.dyn_into::<web::Element>().ok())
                else {
                    continue;
                };
                let cl = link.class_list();
                _ = cl.remove_1("active");
                if link.get_attribute("href").as_deref() == Some(href.as_str()) {
                    _ = cl.add_1("active");
                }
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(SCROLL_SPY_ROOT_MARGIN);
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[menu] IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();
    if let Ok(sections) = document.query_selector_all("main section[id]") {
        for i in 0..sections.length() {
            if let Some(section) = sections.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                observer.observe(&section);
            }
        }
    }
}
