//! Card that tilts toward the pointer and tracks it with a glow.
//!
//! The tilt is published as CSS custom properties; the stylesheet turns them
//! into a 3D rotation and a radial highlight.

use leptos::prelude::*;
use web_sys::{HtmlElement, PointerEvent};

/// Maximum rotation, in degrees, at the card's edges.
pub const MAX_TILT_DEGREES: f64 = 7.0;

/// Card rotation and pointer offset, in the card's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
	/// Rotation about the horizontal axis, in degrees.
	pub rotate_x: f64,
	/// Rotation about the vertical axis, in degrees.
	pub rotate_y: f64,
	/// Pointer x relative to the card's left edge.
	pub pointer_x: f64,
	/// Pointer y relative to the card's top edge.
	pub pointer_y: f64,
}

impl Tilt {
	/// No rotation, pointer at the origin.
	pub const FLAT: Tilt = Tilt {
		rotate_x: 0.0,
		rotate_y: 0.0,
		pointer_x: 0.0,
		pointer_y: 0.0,
	};

	/// Tilt for a pointer at `(x, y)` inside a `width` x `height` card.
	///
	/// The top edge tips away from the viewer, the right edge toward them.
	pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, max_degrees: f64) -> Self {
		if width <= 0.0 || height <= 0.0 {
			return Self::FLAT;
		}
		let (cx, cy) = (width / 2.0, height / 2.0);
		Self {
			rotate_x: ((y - cy) / cy) * -max_degrees,
			rotate_y: ((x - cx) / cx) * max_degrees,
			pointer_x: x,
			pointer_y: y,
		}
	}

	fn apply(&self, el: &HtmlElement) {
		let style = el.style();
		let _ = style.set_property("--tilt-x", &format!("{}deg", self.rotate_x));
		let _ = style.set_property("--tilt-y", &format!("{}deg", self.rotate_y));
		let _ = style.set_property("--pointer-x", &format!("{}px", self.pointer_x));
		let _ = style.set_property("--pointer-y", &format!("{}px", self.pointer_y));
	}

	fn reset(el: &HtmlElement) {
		let style = el.style();
		let _ = style.set_property("--tilt-x", "0deg");
		let _ = style.set_property("--tilt-y", "0deg");
	}
}

/// Card that tilts toward the pointer and lights up under it.
#[component]
pub fn MagicCard(
	children: Children,
	#[prop(into, default = String::new())] class: String,
) -> impl IntoView {
	let card_ref = NodeRef::<leptos::html::Article>::new();

	let on_pointermove = move |ev: PointerEvent| {
		let Some(card) = card_ref.get() else {
			return;
		};
		let rect = card.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		Tilt::from_pointer(x, y, rect.width(), rect.height(), MAX_TILT_DEGREES).apply(&card);
	};

	let on_pointerleave = move |_: PointerEvent| {
		if let Some(card) = card_ref.get() {
			Tilt::reset(&card);
		}
	};

	view! {
		<article
			node_ref=card_ref
			class=format!("magic-card {class}")
			on:pointermove=on_pointermove
			on:pointerleave=on_pointerleave
		>
			<span class="magic-card__glow" aria-hidden="true" />
			{children()}
		</article>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn centre_is_flat() {
		let t = Tilt::from_pointer(150.0, 100.0, 300.0, 200.0, MAX_TILT_DEGREES);
		assert!(close(t.rotate_x, 0.0));
		assert!(close(t.rotate_y, 0.0));
		assert_eq!((t.pointer_x, t.pointer_y), (150.0, 100.0));
	}

	#[test]
	fn corners_reach_full_tilt() {
		let top_left = Tilt::from_pointer(0.0, 0.0, 300.0, 200.0, MAX_TILT_DEGREES);
		assert!(close(top_left.rotate_x, 7.0));
		assert!(close(top_left.rotate_y, -7.0));

		let bottom_right = Tilt::from_pointer(300.0, 200.0, 300.0, 200.0, MAX_TILT_DEGREES);
		assert!(close(bottom_right.rotate_x, -7.0));
		assert!(close(bottom_right.rotate_y, 7.0));
	}

	#[test]
	fn zero_sized_card_stays_flat() {
		assert_eq!(Tilt::from_pointer(10.0, 10.0, 0.0, 200.0, 7.0), Tilt::FLAT);
		assert_eq!(Tilt::from_pointer(10.0, 10.0, 300.0, 0.0, 7.0), Tilt::FLAT);
	}
}
