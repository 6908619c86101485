//! Immediate-mode drawing seam used by the particle field.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// The handful of 2D primitives the backdrop needs.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f64::consts::TAU).ok();
        self.set_fill_style(&JsValue::from_str(color));
        self.fill();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        self.begin_path();
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.set_stroke_style(&JsValue::from_str(color));
        self.set_line_width(width);
        self.stroke();
    }
}

/// `rgba(r, g, b, a)` CSS color string.
pub fn rgba((r, g, b): (u8, u8, u8), alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}
