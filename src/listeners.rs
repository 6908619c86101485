//! Registered DOM event handlers.
//!
//! Every closure handed to the browser is kept here together with its target
//! and event name, so the whole set can be detached again. Dropping the table
//! detaches everything before the closures themselves are freed.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

struct Registration {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

#[derive(Default)]
pub struct Listeners {
    registrations: Vec<Registration>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` for `kind` events on `target`.
    pub fn listen<F>(&mut self, target: &EventTarget, kind: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.registrations.push(Registration { target: target.clone(), kind, closure });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Detach and free every handler.
    pub fn clear(&mut self) {
        for reg in self.registrations.drain(..) {
            if let Err(err) = reg
                .target
                .remove_event_listener_with_callback(reg.kind, reg.closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to detach {} listener: {:?}", reg.kind, err);
            }
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.clear();
    }
}
