//! Animation driver: keeps the canvas the size of the window and repaints the
//! particle field once per display refresh until cancelled.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::ParticleField;

/// Shared stop flag for the frame chain.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle on a running `requestAnimationFrame` chain.
pub struct AnimationLoop {
    window: Window,
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    /// Schedule the first frame. Each frame clears the canvas, advances and
    /// paints the field, then requests the next one unless `token` is cancelled.
    pub fn start(
        window: &Window,
        field: Rc<RefCell<ParticleField>>,
        mut ctx: CanvasRenderingContext2d,
        token: CancelToken,
    ) -> Result<Self, JsValue> {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        {
            let window = window.clone();
            let token = token.clone();
            let pending = pending.clone();
            *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
                if token.is_cancelled() {
                    pending.set(None);
                    return;
                }
                field.borrow_mut().frame(&mut ctx);
                let next = f
                    .borrow()
                    .as_ref()
                    .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                pending.set(next);
            }) as Box<dyn FnMut(f64)>));
        }
        let first = match g.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref())?,
            None => return Err(JsValue::from_str("frame callback missing")),
        };
        pending.set(Some(first));
        log::debug!("animation loop started");
        Ok(Self { window: window.clone(), token, pending, callback: g })
    }

    /// Cancel the token, drop the pending frame request and free the callback.
    /// Only the first call does anything.
    pub fn stop(&self) {
        if self.callback.borrow().is_none() {
            return;
        }
        self.token.cancel();
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancel_animation_frame failed: {:?}", err);
            }
        }
        // Breaks the callback's reference to itself.
        self.callback.borrow_mut().take();
        log::debug!("animation loop stopped");
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Window inner size in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let w = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let h = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((w, h))
}

/// Resize the canvas backing store to the viewport and tell the field.
pub fn fit_canvas(
    window: &Window,
    canvas: &HtmlCanvasElement,
    field: &RefCell<ParticleField>,
) -> Result<(), JsValue> {
    let (w, h) = viewport_size(window)?;
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    field.borrow_mut().resize(canvas.width() as f64, canvas.height() as f64);
    Ok(())
}
