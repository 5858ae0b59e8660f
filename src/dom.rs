//! Small helpers over `web_sys` for listener lifetimes and viewport reads.

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, Window};

/// A DOM event listener that is removed when dropped.
pub struct EventListener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
	/// Register `handler` for `event` on `target`.
	///
	/// Returns `None` if the browser rejects the registration.
	pub fn attach(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		if target
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.is_err()
		{
			warn!("dom: failed to attach {event} listener");
			return None;
		}
		Some(Self {
			target: target.clone(),
			event,
			callback,
		})
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		let _ = self.target.remove_event_listener_with_callback(
			self.event,
			self.callback.as_ref().unchecked_ref(),
		);
	}
}

/// Current viewport size in CSS pixels, rounded down.
pub fn viewport_size(window: &Window) -> Option<(u32, u32)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width.max(0.0) as u32, height.max(0.0) as u32))
}

/// Viewport centre, used as the resting point for pointer effects.
pub fn viewport_center() -> (f64, f64) {
	web_sys::window()
		.as_ref()
		.and_then(viewport_size)
		.map(|(w, h)| (w as f64 / 2.0, h as f64 / 2.0))
		.unwrap_or((0.0, 0.0))
}
