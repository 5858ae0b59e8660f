//! One-shot scroll reveal.
//!
//! Content starts faded and is marked `is-visible` the first time it scrolls
//! into view; after that it is no longer observed. With reduced motion
//! requested it is visible from the start.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Visibility of a reveal-on-scroll element. Once visible it stays visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
	visible: bool,
}

impl Reveal {
	/// Hidden until first intersection, unless reduced motion is requested.
	pub fn new(reduced_motion: bool) -> Self {
		Self {
			visible: reduced_motion,
		}
	}

	/// Whether the element has been revealed.
	pub fn is_visible(self) -> bool {
		self.visible
	}

	/// Feed one intersection report. Returns `true` only on the report that
	/// reveals the element, which is when observation should stop.
	pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
		if self.visible || !is_intersecting {
			return false;
		}
		self.visible = true;
		true
	}
}

/// An intersection observer that disconnects when dropped.
struct RevealObserver {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
	fn watch(target: &Element, mut on_reveal: impl FnMut() + 'static) -> Option<Self> {
		let mut reveal = Reveal::new(false);
		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if reveal.on_intersection(entry.is_intersecting()) {
						observer.unobserve(&entry.target());
						on_reveal();
					}
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
				.ok()?;
		observer.observe(target);

		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for RevealObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

fn prefers_reduced_motion() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
		.is_some_and(|query| query.matches())
}

/// Wraps content that fades in the first time it scrolls into view.
#[component]
pub fn BlurFade(
	children: Children,
	#[prop(into, default = String::new())] class: String,
) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let visible = RwSignal::new(Reveal::new(prefers_reduced_motion()).is_visible());
	let runtime = StoredValue::new_local(None::<RevealObserver>);

	Effect::new(move |_| {
		let Some(node) = node_ref.get() else {
			return;
		};
		if visible.get_untracked() {
			return;
		}
		let Some(observer) = RevealObserver::watch(&node, move || visible.set(true)) else {
			warn!("blur fade: IntersectionObserver unavailable, showing content");
			visible.set(true);
			return;
		};
		runtime.update_value(|slot| *slot = Some(observer));
	});

	on_cleanup(move || {
		let _ = runtime.try_update_value(|slot| slot.take());
	});

	view! {
		<div
			node_ref=node_ref
			class=format!("blur-fade {class}")
			class:is-visible=move || visible.get()
		>
			{children()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_hidden_without_reduced_motion() {
		assert!(!Reveal::new(false).is_visible());
		assert!(Reveal::new(true).is_visible());
	}

	#[test]
	fn non_intersecting_reports_keep_it_hidden() {
		let mut reveal = Reveal::new(false);
		assert!(!reveal.on_intersection(false));
		assert!(!reveal.on_intersection(false));
		assert!(!reveal.is_visible());
	}

	#[test]
	fn first_intersection_reveals_once() {
		let mut reveal = Reveal::new(false);
		assert!(reveal.on_intersection(true));
		assert!(reveal.is_visible());
		assert!(!reveal.on_intersection(true));
		assert!(!reveal.on_intersection(false));
		assert!(reveal.is_visible());
	}

	#[test]
	fn reduced_motion_never_needs_a_reveal() {
		let mut reveal = Reveal::new(true);
		assert!(!reveal.on_intersection(true));
		assert!(reveal.is_visible());
	}
}
