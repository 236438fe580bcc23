//! venn-diagram: Animated two-set Venn diagram for the browser.
//!
//! This crate provides a WASM-based visualization component that sizes two
//! overlapping circles by their magnitudes, animates their entrance, and
//! highlights a circle on hover or touch.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::venn_diagram::{
	DiagramProps, Scene, SetId, VennColors, VennData, VennDiagram, VennLabels, VennState, to_svg,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("venn-diagram: logging initialized");
}

/// Parse diagram props from the JSON embedded in the page.
pub fn parse_diagram_props(json_text: &str) -> Result<DiagramProps, serde_json::Error> {
	serde_json::from_str(json_text)
}

/// Load diagram props from a script element with id="venn-data".
/// Expected format: JSON with { data: { a, b, intersection }, width, height, labels?, colors? }
fn load_diagram_props() -> Option<DiagramProps> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("venn-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_diagram_props(&json_text) {
		Ok(props) => {
			info!(
				"venn-diagram: loaded a={} b={} intersection={} ({}x{})",
				props.data.a, props.data.b, props.data.intersection, props.width, props.height
			);
			Some(props)
		}
		Err(e) => {
			warn!("venn-diagram: failed to parse diagram data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads diagram props from the DOM and renders the Venn diagram.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let props = load_diagram_props().unwrap_or_default();
	let DiagramProps {
		data,
		width,
		height,
		labels,
		colors,
	} = props;

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Venn Diagram" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="venn-container">
			<VennDiagram
				data=Signal::derive(move || data)
				width=width
				height=height
				labels=labels
				colors=colors
			/>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_embedded_props() {
		let props = parse_diagram_props(
			r#"{ "data": { "a": 50, "b": 30, "intersection": 10 }, "width": 500, "height": 300 }"#,
		)
		.unwrap();
		assert_eq!(props.data.a, 50.0);
		assert_eq!(props.width, 500.0);
	}

	#[test]
	fn malformed_props_are_reported() {
		assert!(parse_diagram_props(r#"{ "data": { "a": "many" } }"#).is_err());
	}
}
