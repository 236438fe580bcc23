//! Visual theming for the Venn diagram.
//!
//! Provides the color palette, typography, and motion timings. Colors are kept
//! as CSS color strings and handed to the canvas (or SVG) unchanged.

use super::types::{SetId, VennColors, or_default};

/// Default fill for set A (d3 category10 purple).
pub const DEFAULT_COLOR_A: &str = "#9467bd";
/// Default fill for set B (d3 category10 green).
pub const DEFAULT_COLOR_B: &str = "#2ca02c";
/// Default color for all label text.
pub const DEFAULT_FONT_COLOR: &str = "white";

/// Fill and font colors for every slot of the diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	/// Fill of circle A.
	pub fill_a: String,
	/// Fill of circle B.
	pub fill_b: String,
	/// Text color of set A's label.
	pub font_a: String,
	/// Text color of set B's label.
	pub font_b: String,
	/// Text color of the overlap label.
	pub font_intersection: String,
}

impl Palette {
	/// Fill color of a circle.
	pub fn fill(&self, set: SetId) -> &str {
		match set {
			SetId::A => &self.fill_a,
			SetId::B => &self.fill_b,
		}
	}

	/// Text color of a circle's label block.
	pub fn font(&self, set: SetId) -> &str {
		match set {
			SetId::A => &self.font_a,
			SetId::B => &self.font_b,
		}
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::from_overrides(&VennColors::default())
	}
}

impl Palette {
	/// Apply overrides on top of the default palette. Empty strings count as unset.
	pub fn from_overrides(colors: &VennColors) -> Self {
		Self {
			fill_a: or_default(colors.color_a.as_ref(), DEFAULT_COLOR_A),
			fill_b: or_default(colors.color_b.as_ref(), DEFAULT_COLOR_B),
			font_a: or_default(colors.font_color_a.as_ref(), DEFAULT_FONT_COLOR),
			font_b: or_default(colors.font_color_b.as_ref(), DEFAULT_FONT_COLOR),
			font_intersection: or_default(
				colors.font_color_intersection.as_ref(),
				DEFAULT_FONT_COLOR,
			),
		}
	}
}

/// Font configuration for label text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
	/// Font size of the per-set label blocks, in pixels.
	pub set_label_size: f64,
	/// Font size of the intersection label, in pixels.
	pub intersection_size: f64,
	/// CSS font family list shared by every label.
	pub family: &'static str,
	/// Offset of the second line below the first, in ems.
	pub line_height_em: f64,
}

/// Animation timings (milliseconds) and fill opacities.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionStyle {
	/// Circle growth and label fade-in.
	pub entrance_ms: f64,
	/// Hover in/out fill transitions.
	pub hover_ms: f64,
	/// Fill opacity at rest.
	pub rest_opacity: f64,
	/// Fill opacity while hovered or touched.
	pub hover_opacity: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Colors.
	pub palette: Palette,
	/// Typography.
	pub text: TextStyle,
	/// Timings and opacities.
	pub motion: MotionStyle,
}

impl Theme {
	/// Default typography and motion with the given color overrides.
	pub fn with_colors(colors: &VennColors) -> Self {
		Self {
			palette: Palette::from_overrides(colors),
			..Self::default()
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			palette: Palette::default(),
			text: TextStyle {
				set_label_size: 14.0,
				intersection_size: 12.0,
				family: "Arial, sans-serif",
				line_height_em: 1.2,
			},
			motion: MotionStyle {
				entrance_ms: 800.0,
				hover_ms: 300.0,
				rest_opacity: 0.5,
				hover_opacity: 0.7,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_palette_matches_documented_colors() {
		let palette = Palette::default();
		assert_eq!(palette.fill(SetId::A), "#9467bd");
		assert_eq!(palette.fill(SetId::B), "#2ca02c");
		assert_eq!(palette.font(SetId::A), "white");
		assert_eq!(palette.font(SetId::B), "white");
		assert_eq!(palette.font_intersection, "white");
	}

	#[test]
	fn overrides_replace_only_the_given_slots() {
		let theme = Theme::with_colors(&VennColors {
			color_a: Some("red".into()),
			font_color_b: Some(String::new()),
			..VennColors::default()
		});
		assert_eq!(theme.palette.fill_a, "red");
		assert_eq!(theme.palette.fill_b, DEFAULT_COLOR_B);
		assert_eq!(theme.palette.font_b, DEFAULT_FONT_COLOR);
		assert_eq!(theme.motion, Theme::default().motion);
	}
}
