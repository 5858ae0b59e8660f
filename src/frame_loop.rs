//! `requestAnimationFrame` driver with explicit cancellation.
//!
//! A loop body returns [`ControlFlow`]; the driver checks its [`CancelToken`]
//! at the top of every callback and only asks for another frame while the
//! body says `Continue`.

use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Shared stop flag for a frame loop. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	/// A fresh, uncancelled token.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stop the loop. Calling this more than once has no further effect.
	pub fn cancel(&self) {
		self.0.set(true);
	}

	/// Whether [`CancelToken::cancel`] has been called on any clone.
	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running animation loop. Dropping it stops the loop.
pub struct AnimationFrameLoop {
	token: CancelToken,
	pending: Rc<Cell<Option<i32>>>,
	// Owns the callback. The callback itself only holds a weak reference.
	_callback: FrameCallback,
}

impl AnimationFrameLoop {
	/// Run `frame` once per display refresh until `token` is cancelled or
	/// `frame` breaks.
	///
	/// Returns `None` if there is no window to schedule against.
	pub fn start(
		token: CancelToken,
		mut frame: impl FnMut() -> ControlFlow<()> + 'static,
	) -> Option<Self> {
		let Some(window) = web_sys::window() else {
			warn!("frame loop: no window, animation not started");
			return None;
		};

		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let (weak_callback, token_inner, pending_inner) =
			(Rc::downgrade(&callback), token.clone(), pending.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			if token_inner.is_cancelled() {
				return;
			}
			if frame().is_break() {
				return;
			}
			let Some(callback) = weak_callback.upgrade() else {
				return;
			};
			if let Some(ref cb) = *callback.borrow() {
				pending_inner.set(request_frame(cb));
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => pending.set(Some(id)),
				Err(_) => {
					warn!("frame loop: requestAnimationFrame rejected, animation not started");
					return None;
				}
			}
		}

		Some(Self {
			token,
			pending,
			_callback: callback,
		})
	}

	/// Stop the loop and withdraw any frame request still queued.
	pub fn cancel(&self) {
		self.token.cancel();
		if let Some(id) = self.pending.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}
}

impl Drop for AnimationFrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clones_share_the_flag() {
		let token = CancelToken::new();
		let observer = token.clone();
		assert!(!observer.is_cancelled());
		token.cancel();
		assert!(observer.is_cancelled());
		token.cancel();
		assert!(observer.is_cancelled());
	}
}
