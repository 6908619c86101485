//! In-page navigation: smooth anchor scrolling and active-link tracking.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::config::NavConfig;
use crate::dom::{query_all, smooth_scroll_to_top};
use crate::listeners::Listeners;

/// A page section and its distance from the top of the document. Sections
/// without an `id` still take part; no link can point at them.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: Option<String>,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: &str, top: f64) -> Self {
        let id = (!id.is_empty()).then(|| id.to_string());
        Self { id, top }
    }
}

/// Id of the section the reader is in: the one whose `top - lookahead` is the
/// greatest value not past `scroll_y`. On ties the later section wins. `None`
/// when no section has started yet or the one that has carries no id.
pub fn current_section(sections: &[SectionOffset], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let mut best: Option<(&SectionOffset, f64)> = None;
    for s in sections {
        let start = s.top - lookahead;
        if start > scroll_y {
            continue;
        }
        match best {
            Some((_, b)) if start < b => {}
            _ => best = Some((s, start)),
        }
    }
    best.and_then(|(s, _)| s.id.as_deref())
}

/// Whether a nav link with `href` points at `section`.
pub fn links_to(href: &str, section: &str) -> bool {
    href.strip_prefix('#') == Some(section)
}

// --- Anchor scrolling ---------------------------------------------------------

/// Scroll to the element addressed by `href` (`#id`). Returns whether a target
/// was found. Bare `#` and unparsable selectors are ignored.
pub fn scroll_to_anchor(doc: &Document, cfg: &NavConfig, href: &str) -> bool {
    if href.len() <= 1 {
        return false;
    }
    let Some(target) = doc.query_selector(href).ok().flatten() else {
        log::debug!("anchor target {} not found", href);
        return false;
    };
    smooth_scroll_to_top(&target);
    close_mobile_panel(doc, cfg);
    true
}

/// Collapse the mobile nav panel if it is open.
pub fn close_mobile_panel(doc: &Document, cfg: &NavConfig) {
    let Some(panel) = doc.query_selector(&cfg.collapse_selector).ok().flatten() else {
        return;
    };
    let classes = panel.class_list();
    if classes.contains(&cfg.collapse_open_class) {
        if let Err(err) = classes.remove_1(&cfg.collapse_open_class) {
            log::warn!("could not close nav panel: {:?}", err);
        }
    }
}

pub fn bind_anchors(doc: &Document, cfg: &NavConfig, listeners: &mut Listeners) -> Result<usize, JsValue> {
    let anchors = query_all(doc, &cfg.anchor_selector)?;
    for anchor in &anchors {
        let el = anchor.clone();
        let doc = doc.clone();
        let cfg = cfg.clone();
        listeners.listen(anchor, "click", move |evt: Event| {
            evt.prevent_default();
            if let Some(href) = el.get_attribute("href") {
                scroll_to_anchor(&doc, &cfg, &href);
            }
        })?;
    }
    Ok(anchors.len())
}

// --- Active link --------------------------------------------------------------

fn section_offsets(doc: &Document, cfg: &NavConfig) -> Result<Vec<SectionOffset>, JsValue> {
    Ok(query_all(doc, &cfg.section_selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionOffset::new(&el.id(), el.offset_top() as f64))
        .collect())
}

/// Put the active marker on the link for the current section, and only there.
pub fn mark_active(links: &[Element], current: Option<&str>, active_class: &str) -> Result<(), JsValue> {
    for link in links {
        let on = match (current, link.get_attribute("href")) {
            (Some(section), Some(href)) => links_to(&href, section),
            _ => false,
        };
        link.class_list().toggle_with_force(active_class, on)?;
    }
    Ok(())
}

pub fn highlight_current(win: &Window, doc: &Document, cfg: &NavConfig) -> Result<(), JsValue> {
    let sections = section_offsets(doc, cfg)?;
    let scroll_y = win.scroll_y()?;
    let current = current_section(&sections, scroll_y, cfg.lookahead);
    let links = query_all(doc, &cfg.link_selector)?;
    mark_active(&links, current, &cfg.active_class)
}

pub fn bind_scroll(win: &Window, doc: &Document, cfg: &NavConfig, listeners: &mut Listeners) -> Result<(), JsValue> {
    let w = win.clone();
    let doc = doc.clone();
    let cfg = cfg.clone();
    listeners.listen(win, "scroll", move |_evt: Event| {
        if let Err(err) = highlight_current(&w, &doc, &cfg) {
            log::warn!("active link update failed: {:?}", err);
        }
    })
}
