//! Drawing surfaces the particle field can paint onto.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The raster operations the render loop needs.
pub trait DrawSurface {
	/// Whether the surface can be drawn on right now (e.g. still attached).
	fn is_available(&self) -> bool;

	/// Current size in pixels.
	fn size(&self) -> (f64, f64);

	/// Set the backing size in pixels.
	fn resize_to(&mut self, width: u32, height: u32);

	/// Erase everything drawn so far.
	fn clear(&mut self);

	/// Fill a circle centred at `(x, y)` with a CSS color.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str);
}

/// An HTML canvas with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the 2D context of `canvas`. `None` if the browser refuses one.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()??
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}
}

impl DrawSurface for CanvasSurface {
	fn is_available(&self) -> bool {
		self.canvas.is_connected()
	}

	fn size(&self) -> (f64, f64) {
		(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn resize_to(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.ctx.clear_rect(0.0, 0.0, w, h);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str) {
		self.ctx.begin_path();
		self.ctx.set_fill_style_str(fill);
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
	}
}
