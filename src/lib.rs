//! Network Page core crate.
//!
//! Client-side behavior of the web basics page, compiled to WebAssembly: the
//! animated particle network behind the hero section, smooth in-page
//! navigation with active-link tracking, the ten-question quiz and the
//! reveal-on-scroll animations. `start_page()` wires everything the document
//! has markup for and returns a handle that can tear it down again.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod dom;
pub mod field;
pub mod listeners;
pub mod logging;
pub mod nav;
pub mod page;
pub mod quiz;
pub mod reveal;

use config::PageConfig;
use page::PageContext;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

/// Handle returned to JS; keeps the page behaviors alive until `stop()`.
#[wasm_bindgen]
pub struct Page {
    ctx: PageContext,
}

#[wasm_bindgen]
impl Page {
    pub fn stop(&mut self) {
        self.ctx.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.ctx.is_running()
    }

    #[wasm_bindgen(getter = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.ctx.particle_count()
    }
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_page() -> Result<Page, JsValue> {
    PageContext::start(PageConfig::default()).map(|ctx| Page { ctx })
}

/// Like [`start_page`], with a JSON override of the default configuration.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_page_with_config(json: &str) -> Result<Page, JsValue> {
    let config = PageConfig::from_json(json).map_err(|e| JsValue::from_str(&format!("bad page config: {}", e)))?;
    PageContext::start(config).map(|ctx| Page { ctx })
}
