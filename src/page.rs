//! Page context: owns every piece of runtime state and wires the behaviors to
//! the document.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, Window};

use crate::config::{FieldConfig, PageConfig};
use crate::dom;
use crate::field::ParticleField;
use crate::field::driver::{AnimationLoop, CancelToken, fit_canvas, viewport_size};
use crate::listeners::Listeners;
use crate::nav;
use crate::quiz;
use crate::reveal::RevealObserver;

struct Backdrop {
    field: Rc<RefCell<ParticleField>>,
    _animation: AnimationLoop,
}

pub struct PageContext {
    token: CancelToken,
    backdrop: Option<Backdrop>,
    reveal: Option<RevealObserver>,
    listeners: Listeners,
}

impl PageContext {
    /// Attach every behavior the current document has markup for.
    pub fn start(config: PageConfig) -> Result<Self, JsValue> {
        let win = dom::window()?;
        let doc = dom::document(&win)?;
        let token = CancelToken::new();
        let mut listeners = Listeners::new();

        let backdrop = start_backdrop(&win, &doc, &config.field, &token, &mut listeners)?;
        let anchors = nav::bind_anchors(&doc, &config.nav, &mut listeners)?;
        nav::bind_scroll(&win, &doc, &config.nav, &mut listeners)?;
        let quiz_bound = quiz::form::bind(&doc, &config.quiz, &mut listeners)?;
        let reveal = RevealObserver::start(&doc, &config.reveal)?;

        log::info!(
            "page started: backdrop={} anchors={} quiz={} reveal={}",
            backdrop.is_some(),
            anchors,
            quiz_bound,
            reveal.observed()
        );
        Ok(Self { token, backdrop, reveal: Some(reveal), listeners })
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn particle_count(&self) -> usize {
        self.backdrop.as_ref().map(|b| b.field.borrow().len()).unwrap_or(0)
    }

    /// Stop the animation, detach every handler and the reveal observer.
    pub fn stop(&mut self) {
        if self.token.is_cancelled() {
            return;
        }
        self.token.cancel();
        // Dropping the loop cancels its pending frame.
        self.backdrop.take();
        self.listeners.clear();
        self.reveal.take();
        log::info!("page stopped");
    }
}

fn start_backdrop(
    win: &Window,
    doc: &Document,
    cfg: &FieldConfig,
    token: &CancelToken,
    listeners: &mut Listeners,
) -> Result<Option<Backdrop>, JsValue> {
    let Some(el) = doc.get_element_by_id(&cfg.canvas_id) else {
        log::debug!("no #{} canvas, backdrop disabled", cfg.canvas_id);
        return Ok(None);
    };
    let canvas: HtmlCanvasElement = el.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let (w, h) = viewport_size(win)?;
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    let mut rng = SmallRng::from_entropy();
    let field = Rc::new(RefCell::new(ParticleField::new(
        cfg.clone(),
        canvas.width() as f64,
        canvas.height() as f64,
        &mut rng,
    )));

    {
        let win_resize = win.clone();
        let field = field.clone();
        listeners.listen(win, "resize", move |_evt: Event| {
            if let Err(err) = fit_canvas(&win_resize, &canvas, &field) {
                log::warn!("canvas resize failed: {:?}", err);
            }
        })?;
    }

    let animation = AnimationLoop::start(win, field.clone(), ctx, token.clone())?;
    Ok(Some(Backdrop { field, _animation: animation }))
}
