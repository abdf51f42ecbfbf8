use crate::constants::{OVERLAY_ID, OVERLAY_OK_ID};
use web_sys as web;

const OVERLAY_STYLE: &str = "position:fixed;inset:0;display:flex;align-items:center;\
justify-content:center;background:rgba(0,0,0,0.72);color:#e8ecf4;\
font:15px system-ui;cursor:pointer;z-index:10";

/// Return the start overlay, creating a minimal one if the page lacks it.
pub fn ensure(document: &web::Document) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(OVERLAY_ID);
    _ = el.set_attribute("style", OVERLAY_STYLE);
    el.set_inner_html(&format!(
        "<button id='{}' style='font:inherit;padding:10px 22px;border-radius:6px;\
border:1px solid rgba(200,210,230,0.4);background:transparent;color:inherit;'>\
Tap to begin</button>",
        OVERLAY_OK_ID
    ));
    document.body()?.append_child(&el).ok()?;
    log::info!("[overlay] created #{}", OVERLAY_ID);
    Some(el)
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without the CSS class
        if el.get_attribute("style").is_some_and(|s| s.contains("display:none")) {
            _ = el.set_attribute("style", OVERLAY_STYLE);
        }
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
