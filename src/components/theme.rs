//! Light/dark theme signal and the controller that owns it.
//!
//! The app mirrors the controller's signal to `data-theme` on `<html>` and
//! `<body>`; animation code only ever reads the mode through a [`ThemeSource`].

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;

use crate::dom::EventListener;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Page color mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	/// Light background.
	Light,
	/// Dark background, the default.
	#[default]
	Dark,
}

impl ThemeMode {
	/// Value written to `data-theme`.
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	/// Parse a `data-theme` attribute value. Anything other than `"light"`
	/// (including a missing attribute) reads as dark.
	pub fn from_attribute(value: Option<&str>) -> Self {
		match value {
			Some("light") => ThemeMode::Light,
			_ => ThemeMode::Dark,
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}
}

/// HSLA color, formatted for canvas fill styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	/// Hue in degrees.
	pub h: f64,
	/// Saturation in percent.
	pub s: f64,
	/// Lightness in percent.
	pub l: f64,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Hsla {
	/// Build a color from its components.
	pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
		Self { h, s, l, a }
	}

	/// CSS `hsla(...)` string.
	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

/// Read-only access to the current theme, polled once per frame.
pub trait ThemeSource {
	/// The mode in effect right now.
	fn current(&self) -> ThemeMode;
}

impl<F> ThemeSource for F
where
	F: Fn() -> ThemeMode,
{
	fn current(&self) -> ThemeMode {
		self()
	}
}

/// Reads `data-theme` from the document root element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeSource for DocumentTheme {
	fn current(&self) -> ThemeMode {
		let attribute = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element())
			.and_then(|root| root.get_attribute("data-theme"));
		ThemeMode::from_attribute(attribute.as_deref())
	}
}

/// Theme state shared through context.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
	/// Current mode; writes propagate to the document attributes.
	pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
	/// Flip between light and dark.
	pub fn toggle(&self) {
		self.mode.update(|m| *m = m.toggled());
	}
}

fn prefers_dark() -> Option<bool> {
	let query = web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok()??;
	Some(query.matches())
}

/// Create the theme signal, seed it from the OS color scheme, follow OS
/// changes, and publish it as context.
pub fn provide_theme() -> ThemeContext {
	let initial = match prefers_dark() {
		Some(false) => ThemeMode::Light,
		Some(true) => ThemeMode::Dark,
		None => {
			warn!("theme: color scheme query unavailable, defaulting to dark");
			ThemeMode::Dark
		}
	};
	let mode = RwSignal::new(initial);

	let listener = web_sys::window()
		.and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
		.and_then(|query| {
			EventListener::attach(&query, "change", move |ev| {
				let Some(ev) = ev.dyn_ref::<MediaQueryListEvent>() else {
					return;
				};
				let next = if ev.matches() {
					ThemeMode::Dark
				} else {
					ThemeMode::Light
				};
				debug!("theme: system scheme changed to {}", next.as_str());
				mode.set(next);
			})
		});
	let listener = StoredValue::new_local(listener);
	on_cleanup(move || {
		let _ = listener.try_update_value(|l| l.take());
	});

	let context = ThemeContext { mode };
	provide_context(context);
	context
}

/// Read the theme context, if a controller was provided above this component.
pub fn use_theme() -> Option<ThemeContext> {
	use_context::<ThemeContext>()
}

/// Button that flips between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let Some(theme) = use_theme() else {
		warn!("theme: ThemeToggle rendered without a theme controller");
		return None;
	};

	Some(view! {
		<button
			type="button"
			class=move || format!("theme-toggle theme-toggle--{}", theme.mode.get().as_str())
			aria-label="Toggle color mode"
			on:click=move |_| theme.toggle()
		>
			<span class="theme-toggle__track">
				<span class="theme-toggle__beam" />
			</span>
			<span class="theme-toggle__icon theme-toggle__icon--sun" aria-hidden="true" />
			<span class="theme-toggle__icon theme-toggle__icon--moon" aria-hidden="true" />
		</button>
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_or_unknown_attribute_reads_as_dark() {
		assert_eq!(ThemeMode::from_attribute(None), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_attribute(Some("")), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_attribute(Some("sepia")), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_attribute(Some("light")), ThemeMode::Light);
		assert_eq!(ThemeMode::from_attribute(Some("dark")), ThemeMode::Dark);
	}

	#[test]
	fn toggle_flips_and_round_trips_through_attribute() {
		for mode in [ThemeMode::Light, ThemeMode::Dark] {
			assert_ne!(mode.toggled(), mode);
			assert_eq!(mode.toggled().toggled(), mode);
			assert_eq!(ThemeMode::from_attribute(Some(mode.as_str())), mode);
		}
	}

	#[test]
	fn hsla_formats_as_css() {
		assert_eq!(
			Hsla::new(215.0, 80.0, 70.0, 0.35).to_css(),
			"hsla(215, 80%, 70%, 0.35)"
		);
	}

	#[test]
	fn closures_are_theme_sources() {
		let source = || ThemeMode::Light;
		assert_eq!(source.current(), ThemeMode::Light);
	}
}
