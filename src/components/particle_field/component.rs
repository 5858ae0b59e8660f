//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a full-viewport canvas, builds a [`RenderLoop`] over
//! it once mounted, regenerates particles on every window resize, and drives
//! the loop with `requestAnimationFrame` until the component is torn down.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use web_sys::HtmlCanvasElement;

use super::config::FieldConfig;
use super::render::RenderLoop;
use super::surface::{CanvasSurface, DrawSurface};
use crate::components::theme::DocumentTheme;
use crate::dom::{EventListener, viewport_size};
use crate::frame_loop::AnimationFrameLoop;

/// Browser resources held for as long as the field is mounted.
struct FieldRuntime {
	_frames: AnimationFrameLoop,
	_resize: Option<EventListener>,
}

/// Renders drifting particles on a canvas sized to the viewport.
///
/// The particle hue follows the page's `data-theme` attribute, read once per
/// frame.
#[component]
pub fn ParticleField(
	#[prop(default = FieldConfig::default())] config: FieldConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let runtime = StoredValue::new_local(None::<FieldRuntime>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("particle field: no window, not starting");
			return;
		};
		let Some(mut surface) = CanvasSurface::new(canvas) else {
			warn!("particle field: canvas 2d context unavailable");
			return;
		};

		let (w, h) = viewport_size(&window).unwrap_or_default();
		surface.resize_to(w, h);
		let render_loop = RenderLoop::new(
			surface,
			DocumentTheme,
			config.clone(),
			StdRng::from_entropy(),
		);
		info!(
			"particle field: mounted at {}x{} with {} particles",
			w,
			h,
			render_loop.store().len()
		);

		let token = render_loop.cancel_token();
		let render_loop = Rc::new(RefCell::new(render_loop));

		let resize_loop = render_loop.clone();
		let resize = EventListener::attach(&window, "resize", move |_| {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			resize_loop.borrow_mut().resize(nw, nh);
		});

		let frame_loop = render_loop.clone();
		let frames = AnimationFrameLoop::start(token, move || frame_loop.borrow_mut().frame());
		let Some(frames) = frames else {
			return;
		};

		runtime.update_value(|slot| {
			*slot = Some(FieldRuntime {
				_frames: frames,
				_resize: resize,
			})
		});
	});

	on_cleanup(move || {
		let _ = runtime.try_update_value(|slot| slot.take());
	});

	view! {
		<canvas node_ref=canvas_ref class="particle-canvas" aria-hidden="true" />
	}
}
