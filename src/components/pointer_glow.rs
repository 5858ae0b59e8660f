//! Pointer dot with an eased trailing glow.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::dom::{EventListener, viewport_center};
use crate::frame_loop::{AnimationFrameLoop, CancelToken};

/// Fraction of the remaining distance the trail covers each frame.
pub const TRAIL_EASE: f64 = 0.12;

/// Pointer position plus a trailing point that eases toward it.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerTrail {
	/// Latest pointer position.
	pub target: (f64, f64),
	/// Trailing point, eased toward `target`.
	pub position: (f64, f64),
	/// Whether the pointer is over the page.
	pub visible: bool,
	ease: f64,
}

impl PointerTrail {
	/// Both points start at `origin`, hidden.
	pub fn new(origin: (f64, f64)) -> Self {
		Self {
			target: origin,
			position: origin,
			visible: false,
			ease: TRAIL_EASE,
		}
	}

	/// Record a pointer move. Returns `true` if this move made the trail visible.
	pub fn move_to(&mut self, x: f64, y: f64) -> bool {
		self.target = (x, y);
		let appeared = !self.visible;
		self.visible = true;
		appeared
	}

	/// The pointer left the page; hide the glow.
	pub fn leave(&mut self) {
		self.visible = false;
	}

	/// Ease the trailing point one frame toward the target.
	pub fn step(&mut self) {
		self.position.0 += (self.target.0 - self.position.0) * self.ease;
		self.position.1 += (self.target.1 - self.position.1) * self.ease;
	}
}

fn translate((x, y): (f64, f64)) -> String {
	format!("translate({x}px, {y}px)")
}

fn set_transform(el: &HtmlElement, point: (f64, f64)) {
	let _ = el.style().set_property("transform", &translate(point));
}

struct GlowRuntime {
	_frames: AnimationFrameLoop,
	_listeners: Vec<EventListener>,
}

/// Renders a pointer dot and a softer trail that follows it.
#[component]
pub fn PointerGlow() -> impl IntoView {
	let pointer_ref = NodeRef::<leptos::html::Div>::new();
	let trail_ref = NodeRef::<leptos::html::Div>::new();
	let visible = RwSignal::new(false);
	let runtime = StoredValue::new_local(None::<GlowRuntime>);

	Effect::new(move |_| {
		let (Some(pointer), Some(trail)) = (pointer_ref.get(), trail_ref.get()) else {
			return;
		};
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			warn!("pointer glow: no document, not starting");
			return;
		};
		let (pointer, trail): (HtmlElement, HtmlElement) = (pointer.into(), trail.into());
		let state = Rc::new(RefCell::new(PointerTrail::new(viewport_center())));

		let state_move = state.clone();
		let on_move = EventListener::attach(&document, "pointermove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let appeared = state_move
				.borrow_mut()
				.move_to(ev.client_x() as f64, ev.client_y() as f64);
			if appeared {
				visible.set(true);
			}
		});

		let state_leave = state.clone();
		let on_leave = EventListener::attach(&document, "pointerleave", move |_| {
			state_leave.borrow_mut().leave();
			visible.set(false);
		});

		let frames = AnimationFrameLoop::start(CancelToken::new(), move || {
			let mut s = state.borrow_mut();
			s.step();
			set_transform(&pointer, s.target);
			set_transform(&trail, s.position);
			ControlFlow::Continue(())
		});
		let Some(frames) = frames else {
			return;
		};

		runtime.update_value(|slot| {
			*slot = Some(GlowRuntime {
				_frames: frames,
				_listeners: on_move.into_iter().chain(on_leave).collect(),
			})
		});
	});

	on_cleanup(move || {
		let _ = runtime.try_update_value(|slot| slot.take());
	});

	view! {
		<div
			node_ref=pointer_ref
			class="pointer"
			class:pointer--visible=move || visible.get()
			aria-hidden="true"
		/>
		<div
			node_ref=trail_ref
			class="pointer pointer--trail"
			class:pointer--visible=move || visible.get()
			aria-hidden="true"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_hidden_at_origin() {
		let trail = PointerTrail::new((400.0, 300.0));
		assert!(!trail.visible);
		assert_eq!(trail.position, (400.0, 300.0));
		assert_eq!(trail.target, (400.0, 300.0));
	}

	#[test]
	fn first_move_reports_appearance_once() {
		let mut trail = PointerTrail::new((0.0, 0.0));
		assert!(trail.move_to(10.0, 20.0));
		assert!(!trail.move_to(11.0, 21.0));
		trail.leave();
		assert!(!trail.visible);
		assert!(trail.move_to(5.0, 5.0));
	}

	#[test]
	fn trail_eases_toward_target() {
		let mut trail = PointerTrail::new((0.0, 0.0));
		trail.move_to(100.0, -50.0);
		trail.step();
		assert!((trail.position.0 - 12.0).abs() < 1e-9);
		assert!((trail.position.1 + 6.0).abs() < 1e-9);

		for _ in 0..200 {
			trail.step();
		}
		assert!((trail.position.0 - 100.0).abs() < 1e-3);
		assert!((trail.position.1 + 50.0).abs() < 1e-3);
	}

	#[test]
	fn transform_is_css_translate() {
		assert_eq!(translate((12.5, 3.0)), "translate(12.5px, 3px)");
	}
}
