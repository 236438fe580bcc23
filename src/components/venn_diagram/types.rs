//! Input data structures for the Venn diagram component.

use serde::Deserialize;

/// Default caption for set A.
pub const DEFAULT_LABEL_A: &str = "Group A";
/// Default caption for set B.
pub const DEFAULT_LABEL_B: &str = "Group B";
/// Default caption for the overlap.
pub const DEFAULT_LABEL_INTERSECTION: &str = "Intersection";

/// Identity of one of the two primary circles.
///
/// Primitives are addressed by this identity; nothing holds on to a drawn
/// element between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetId {
	/// Left-hand set.
	A,
	/// Right-hand set.
	B,
}

impl SetId {
	/// Both sets in paint order (A first, B on top).
	pub const ALL: [SetId; 2] = [SetId::A, SetId::B];

	/// Slot of this set in per-set arrays.
	pub const fn index(self) -> usize {
		match self {
			SetId::A => 0,
			SetId::B => 1,
		}
	}
}

/// The magnitudes being compared.
///
/// `a` and `b` drive circle sizes. `intersection` is only displayed; it is not
/// derived from, or checked against, the two magnitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct VennData {
	/// Size of set A. Expected to be finite and non-negative.
	pub a: f64,
	/// Size of set B. Expected to be finite and non-negative.
	pub b: f64,
	/// Value printed in the overlap.
	pub intersection: f64,
}

impl VennData {
	/// Magnitude of the given set.
	pub fn magnitude(&self, set: SetId) -> f64 {
		match set {
			SetId::A => self.a,
			SetId::B => self.b,
		}
	}
}

/// Optional caption overrides. Missing or empty entries fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VennLabels {
	/// Caption under set A's value (`labelA`).
	pub label_a: Option<String>,
	/// Caption under set B's value (`labelB`).
	pub label_b: Option<String>,
	/// Caption under the overlap value (`labelIntersection`).
	pub label_intersection: Option<String>,
}

/// Captions after applying defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLabels {
	/// Caption for set A.
	pub a: String,
	/// Caption for set B.
	pub b: String,
	/// Caption for the overlap.
	pub intersection: String,
}

impl ResolvedLabels {
	/// Caption for one of the sets.
	pub fn set(&self, set: SetId) -> &str {
		match set {
			SetId::A => &self.a,
			SetId::B => &self.b,
		}
	}
}

/// Returns `value` unless it is missing or empty.
pub(crate) fn or_default(value: Option<&String>, default: &str) -> String {
	value
		.filter(|s| !s.is_empty())
		.cloned()
		.unwrap_or_else(|| default.to_string())
}

impl VennLabels {
	/// Apply the default captions to any missing entry.
	pub fn resolve(&self) -> ResolvedLabels {
		ResolvedLabels {
			a: or_default(self.label_a.as_ref(), DEFAULT_LABEL_A),
			b: or_default(self.label_b.as_ref(), DEFAULT_LABEL_B),
			intersection: or_default(
				self.label_intersection.as_ref(),
				DEFAULT_LABEL_INTERSECTION,
			),
		}
	}
}

/// Optional CSS color overrides (e.g., "#ff0000", "rgb(255, 0, 0)", "white").
/// Missing or empty entries fall back to the theme palette.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VennColors {
	/// Fill of circle A (`colorA`).
	pub color_a: Option<String>,
	/// Fill of circle B (`colorB`).
	pub color_b: Option<String>,
	/// Text color of set A's label (`fontColorA`).
	pub font_color_a: Option<String>,
	/// Text color of set B's label (`fontColorB`).
	pub font_color_b: Option<String>,
	/// Text color of the overlap label (`fontColorIntersection`).
	pub font_color_intersection: Option<String>,
}

/// Everything a single render cycle depends on.
///
/// A change to any field means a full re-render.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DiagramProps {
	/// Magnitudes to draw.
	pub data: VennData,
	/// Canvas width in pixels; also sets the largest radius.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Caption overrides.
	#[serde(default)]
	pub labels: VennLabels,
	/// Color overrides.
	#[serde(default)]
	pub colors: VennColors,
}

impl Default for DiagramProps {
	fn default() -> Self {
		Self {
			data: VennData::default(),
			width: 500.0,
			height: 300.0,
			labels: VennLabels::default(),
			colors: VennColors::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_and_empty_labels_use_defaults() {
		let labels = VennLabels {
			label_a: Some(String::new()),
			label_b: Some("Cats".into()),
			label_intersection: None,
		};
		let resolved = labels.resolve();
		assert_eq!(resolved.a, "Group A");
		assert_eq!(resolved.b, "Cats");
		assert_eq!(resolved.intersection, "Intersection");
		assert_eq!(resolved.set(SetId::B), "Cats");
	}

	#[test]
	fn props_deserialize_with_camel_case_keys() {
		let json = r##"{
			"data": { "a": 50, "b": 30, "intersection": 10 },
			"width": 500,
			"height": 300,
			"labels": { "labelA": "Dogs", "labelIntersection": "Both" },
			"colors": { "colorB": "#ff0000", "fontColorIntersection": "black" }
		}"##;
		let props: DiagramProps = serde_json::from_str(json).unwrap();
		assert_eq!(props.data.magnitude(SetId::A), 50.0);
		assert_eq!(props.data.intersection, 10.0);
		assert_eq!(props.labels.label_a.as_deref(), Some("Dogs"));
		assert_eq!(props.labels.label_b, None);
		assert_eq!(props.colors.color_b.as_deref(), Some("#ff0000"));
		assert_eq!(props.colors.font_color_intersection.as_deref(), Some("black"));
	}

	#[test]
	fn props_deserialize_without_optional_sections() {
		let json = r#"{ "data": { "a": 1, "b": 2, "intersection": 0 }, "width": 400, "height": 200 }"#;
		let props: DiagramProps = serde_json::from_str(json).unwrap();
		assert_eq!(props.labels, VennLabels::default());
		assert_eq!(props.colors, VennColors::default());
	}

	#[test]
	fn set_indices_follow_paint_order() {
		assert_eq!(SetId::ALL.map(SetId::index), [0, 1]);
	}
}
