//! Fade/slide-in of cards and timeline items as they scroll into view.
//!
//! Elements start transparent and pushed down; the first time one crosses the
//! observer threshold it is restored and dropped from observation, so each
//! element animates exactly once.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::dom::query_all;

/// Inline style properties for elements still waiting to be revealed.
pub fn hidden_style(cfg: &RevealConfig) -> [(&'static str, &str); 3] {
    [("opacity", "0"), ("transform", &cfg.hidden_transform), ("transition", &cfg.transition)]
}

pub const SHOWN_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

fn apply(el: &HtmlElement, props: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = el.style();
    for (name, value) in props {
        style.set_property(name, value)?;
    }
    Ok(())
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Elements hidden and still waiting for their first intersection.
type Watching = Rc<RefCell<Vec<HtmlElement>>>;

/// Reveal every intersecting entry whose target is still being watched and
/// stop observing it. Entries for already revealed elements are ignored.
fn reveal_entries(entries: &Array, observer: &IntersectionObserver, watching: &RefCell<Vec<HtmlElement>>) {
    for entry in entries.iter() {
        let entry: IntersectionObserverEntry = entry.unchecked_into();
        if !entry.is_intersecting() {
            continue;
        }
        let target = entry.target();
        let el = {
            let mut watching = watching.borrow_mut();
            let Some(pos) = watching.iter().position(|el| target == **el) else {
                continue;
            };
            watching.swap_remove(pos)
        };
        if let Err(err) = apply(&el, &SHOWN_STYLE) {
            log::warn!("reveal failed: {:?}", err);
        }
        observer.unobserve(&target);
    }
}

/// Live observer; disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    observed: usize,
    watching: Watching,
    _callback: EntriesCallback,
}

impl RevealObserver {
    /// Hide every element matching the configured selector and start watching
    /// them. Elements that are not `HtmlElement`s, or that cannot be styled,
    /// are left visible and unobserved.
    pub fn start(doc: &Document, cfg: &RevealConfig) -> Result<Self, JsValue> {
        let watching: Watching = Rc::new(RefCell::new(Vec::new()));
        let callback: EntriesCallback = {
            let watching = watching.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                reveal_entries(&entries, &observer, &watching);
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(cfg.threshold));
        init.set_root_margin(&cfg.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        for el in query_all(doc, &cfg.selector)? {
            let Ok(el) = el.dyn_into::<HtmlElement>() else {
                continue;
            };
            if let Err(err) = apply(&el, &hidden_style(cfg)) {
                log::warn!("could not hide reveal target: {:?}", err);
                apply(&el, &SHOWN_STYLE).ok();
                continue;
            }
            observer.observe(&el);
            watching.borrow_mut().push(el);
        }
        let observed = watching.borrow().len();
        log::debug!("reveal observer watching {} elements", observed);
        Ok(Self { observer, observed, watching, _callback: callback })
    }

    /// Number of elements hidden at start.
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Number of elements not revealed yet.
    pub fn pending(&self) -> usize {
        self.watching.borrow().len()
    }

    /// Feed intersection entries as the browser would.
    pub fn deliver(&self, entries: &Array) {
        reveal_entries(entries, &self.observer, &self.watching);
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
