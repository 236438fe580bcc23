//! Scene graph for one render cycle.
//!
//! A [`Scene`] holds every primitive of the diagram: two circles, a two-line
//! label block per circle, and the intersection label. It is built from scratch
//! for each render cycle and then advanced cooperatively by the animation loop.
//!
//! Entrance sequence:
//! 1. Circles start at radius 0 with fill opacity at rest and grow to their
//!    target radius; set labels fade in alongside with both lines present.
//! 2. When a circle finishes growing it becomes [`CirclePhase::Idle`] and an
//!    [`SceneEvent::EntranceComplete`] is emitted so hover handling can attach.
//! 3. The intersection label fades in its numeric value first; its caption line
//!    is appended only once that fade has completed.

use super::layout::{Layout, Point};
use super::scale::Radii;
use super::theme::Theme;
use super::timeline::{Millis, Tween};
use super::types::{DiagramProps, SetId};

/// Lifecycle of a primary circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CirclePhase {
	/// Growing from zero radius. Pointer input is ignored.
	Entering,
	/// Entrance finished, not under an active pointer or touch.
	Idle,
	/// Under an active pointer or touch.
	Hovered,
}

/// One of the two primary circles.
#[derive(Clone, Debug)]
pub struct CircleNode {
	/// Which input set the circle stands for.
	pub set: SetId,
	/// Center in canvas pixels.
	pub center: Point,
	/// Grows from 0 to the scaled radius during the entrance.
	pub radius: Tween,
	/// CSS fill color.
	pub fill: String,
	/// Rest or hover opacity, retargeted by interaction.
	pub fill_opacity: Tween,
	/// Where the circle is in its lifecycle.
	pub phase: CirclePhase,
}

impl CircleNode {
	/// Radius as drawn at `now`.
	pub fn radius_at(&self, now: Millis) -> f64 {
		self.radius.value_at(now)
	}

	/// Fill opacity as drawn at `now`.
	pub fn fill_opacity_at(&self, now: Millis) -> f64 {
		self.fill_opacity.value_at(now)
	}

	/// Whether `(x, y)` falls inside the circle as drawn at `now`.
	pub fn contains(&self, x: f64, y: f64, now: Millis) -> bool {
		let r = self.radius_at(now);
		let (dx, dy) = (x - self.center.x, y - self.center.y);
		r > 0.0 && dx * dx + dy * dy <= r * r
	}
}

/// Horizontal alignment of a text block relative to its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
	/// Text runs rightward from the anchor.
	Start,
	/// Text is centered on the anchor.
	Middle,
	/// Text ends at the anchor.
	End,
}

impl TextAnchor {
	/// Value for SVG `text-anchor`.
	pub fn as_svg(self) -> &'static str {
		match self {
			TextAnchor::Start => "start",
			TextAnchor::Middle => "middle",
			TextAnchor::End => "end",
		}
	}

	/// Value for canvas `textAlign`.
	pub fn as_canvas(self) -> &'static str {
		match self {
			TextAnchor::Start => "start",
			TextAnchor::Middle => "center",
			TextAnchor::End => "end",
		}
	}
}

/// A single line inside a text block.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
	/// Line content.
	pub text: String,
	/// Drawn in bold weight (numeric values).
	pub bold: bool,
	/// Vertical offset from the previous line, in ems.
	pub dy_em: f64,
}

/// A block of text lines sharing position, color, font and opacity.
#[derive(Clone, Debug)]
pub struct TextNode {
	/// Anchor point; the first line's baseline sits here.
	pub position: Point,
	/// Horizontal alignment around `position`.
	pub anchor: TextAnchor,
	/// CSS text color.
	pub color: String,
	/// Font size in pixels.
	pub font_size: f64,
	/// CSS font family list.
	pub font_family: &'static str,
	/// Fades in with the entrance.
	pub opacity: Tween,
	/// Lines top to bottom.
	pub lines: Vec<TextLine>,
}

impl TextNode {
	/// Opacity of the whole block at `now`.
	pub fn opacity_at(&self, now: Millis) -> f64 {
		self.opacity.value_at(now)
	}

	/// Baseline y of each line, accumulating the per-line `dy` offsets.
	pub fn line_baselines(&self) -> impl Iterator<Item = (&TextLine, f64)> + '_ {
		let mut y = self.position.y;
		self.lines.iter().map(move |line| {
			y += line.dy_em * self.font_size;
			(line, y)
		})
	}
}

/// The overlap label, whose caption line is held back until the value is visible.
#[derive(Clone, Debug)]
pub struct IntersectionLabel {
	/// The visible block: the value line, plus the caption once revealed.
	pub text: TextNode,
	pending: Option<TextLine>,
}

impl IntersectionLabel {
	/// Whether the caption line has been appended.
	pub fn is_revealed(&self) -> bool {
		self.pending.is_none()
	}
}

/// Completion notifications produced by [`Scene::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
	/// A circle finished growing and may now receive pointer input.
	EntranceComplete(SetId),
	/// The intersection caption was appended below the value.
	IntersectionRevealed,
}

/// All primitives of one render cycle.
#[derive(Clone, Debug)]
pub struct Scene {
	generation: u64,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Resolved geometry.
	pub layout: Layout,
	/// Colors, typography and timings in effect for this cycle.
	pub theme: Theme,
	/// Circle A then circle B, in paint order.
	pub circles: [CircleNode; 2],
	/// Set label blocks, indexed like `circles`.
	pub labels: [TextNode; 2],
	/// Label at the overlap anchor.
	pub intersection: IntersectionLabel,
}

/// Format a number the way labels show it (`50`, not `50.0`).
///
/// Follows JavaScript's number-to-string rules: shortest round-trip digits,
/// `-0` prints as `0`, and magnitudes from `1e21` up or below `1e-6` use the
/// exponent form (`1e+21`, `1.5e-7`).
pub fn format_value(value: f64) -> String {
	if value == 0.0 {
		return "0".to_string();
	}
	if value.is_nan() {
		return "NaN".to_string();
	}
	if value.is_infinite() {
		return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
	}

	let magnitude = value.abs();
	if (1e-6..1e21).contains(&magnitude) {
		return format!("{value}");
	}
	let exp = format!("{value:e}");
	match exp.split_once('e') {
		Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
		_ => exp,
	}
}

impl Scene {
	/// Build every primitive for `props`, with entrance animations starting at `now`.
	pub fn build(props: &DiagramProps, generation: u64, now: Millis) -> Self {
		let theme = Theme::with_colors(&props.colors);
		let labels = props.labels.resolve();
		let layout = Layout::new(Radii::new(&props.data, props.width), props.width, props.height);
		let motion = &theme.motion;

		let circles = SetId::ALL.map(|set| CircleNode {
			set,
			center: layout.center(set),
			radius: Tween::new(0.0, layout.radius(set), now, motion.entrance_ms),
			fill: theme.palette.fill(set).to_string(),
			fill_opacity: Tween::fixed(motion.rest_opacity),
			phase: CirclePhase::Entering,
		});

		let set_labels = SetId::ALL.map(|set| TextNode {
			position: layout.label_anchor(set),
			anchor: match set {
				SetId::A => TextAnchor::Start,
				SetId::B => TextAnchor::End,
			},
			color: theme.palette.font(set).to_string(),
			font_size: theme.text.set_label_size,
			font_family: theme.text.family,
			opacity: Tween::new(0.0, 1.0, now, motion.entrance_ms),
			lines: vec![
				TextLine {
					text: format_value(props.data.magnitude(set)),
					bold: true,
					dy_em: 0.0,
				},
				TextLine {
					text: labels.set(set).to_string(),
					bold: false,
					dy_em: theme.text.line_height_em,
				},
			],
		});

		let intersection = IntersectionLabel {
			text: TextNode {
				position: layout.intersection,
				anchor: TextAnchor::Middle,
				color: theme.palette.font_intersection.clone(),
				font_size: theme.text.intersection_size,
				font_family: theme.text.family,
				opacity: Tween::new(0.0, 1.0, now, motion.entrance_ms),
				lines: vec![TextLine {
					text: format_value(props.data.intersection),
					bold: false,
					dy_em: 0.0,
				}],
			},
			pending: Some(TextLine {
				text: labels.intersection,
				bold: false,
				dy_em: theme.text.line_height_em,
			}),
		};

		Self {
			generation,
			width: props.width,
			height: props.height,
			layout,
			circles,
			labels: set_labels,
			intersection,
			theme,
		}
	}

	/// Sequence number of the render cycle that built this scene.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Circle drawn for `set`.
	pub fn circle(&self, set: SetId) -> &CircleNode {
		&self.circles[set.index()]
	}

	/// Mutable access for interaction updates.
	pub fn circle_mut(&mut self, set: SetId) -> &mut CircleNode {
		&mut self.circles[set.index()]
	}

	/// Label block beside the circle for `set`.
	pub fn label(&self, set: SetId) -> &TextNode {
		&self.labels[set.index()]
	}

	/// Number of drawn elements: circles plus text blocks.
	pub fn primitive_count(&self) -> usize {
		self.circles.len() + self.labels.len() + 1
	}

	/// Process animation completions up to `now`.
	///
	/// Each event is reported once per scene, in the order it was detected.
	pub fn advance(&mut self, now: Millis) -> Vec<SceneEvent> {
		let mut events = Vec::new();

		for circle in &mut self.circles {
			if circle.phase == CirclePhase::Entering && circle.radius.is_complete(now) {
				circle.phase = CirclePhase::Idle;
				events.push(SceneEvent::EntranceComplete(circle.set));
			}
		}

		if !self.intersection.is_revealed() && self.intersection.text.opacity.is_complete(now) {
			if let Some(line) = self.intersection.pending.take() {
				self.intersection.text.lines.push(line);
				events.push(SceneEvent::IntersectionRevealed);
			}
		}

		events
	}

	/// Topmost circle containing `(x, y)`. B is painted over A.
	pub fn circle_at(&self, x: f64, y: f64, now: Millis) -> Option<SetId> {
		self.circles
			.iter()
			.rev()
			.find(|circle| circle.contains(x, y, now))
			.map(|circle| circle.set)
	}

	/// True once every entrance and hover transition has finished.
	pub fn is_settled(&self, now: Millis) -> bool {
		self.circles.iter().all(|c| {
			c.phase != CirclePhase::Entering && c.radius.is_complete(now) && c.fill_opacity.is_complete(now)
		}) && self.labels.iter().all(|l| l.opacity.is_complete(now))
			&& self.intersection.is_revealed()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::venn_diagram::types::{VennData, VennLabels};

	fn props(a: f64, b: f64) -> DiagramProps {
		DiagramProps {
			data: VennData {
				a,
				b,
				intersection: 10.0,
			},
			width: 500.0,
			height: 300.0,
			..DiagramProps::default()
		}
	}

	#[test]
	fn build_creates_two_circles_and_three_text_blocks() {
		let scene = Scene::build(&props(50.0, 30.0), 1, 0.0);
		assert_eq!(scene.primitive_count(), 5);
		assert_eq!(scene.circles.len(), 2);
		assert_eq!(scene.generation(), 1);
	}

	#[test]
	fn circles_enter_from_zero_at_rest_opacity() {
		let scene = Scene::build(&props(50.0, 30.0), 1, 0.0);
		for set in SetId::ALL {
			let circle = scene.circle(set);
			assert_eq!(circle.phase, CirclePhase::Entering);
			assert_eq!(circle.radius_at(0.0), 0.0);
			assert_eq!(circle.fill_opacity_at(0.0), 0.5);
		}
		assert_eq!(scene.circle(SetId::A).radius_at(800.0), 100.0);
		assert!((scene.circle(SetId::B).radius_at(800.0) - 77.46).abs() < 1e-2);
	}

	#[test]
	fn set_labels_anchor_on_outer_edges() {
		let scene = Scene::build(&props(50.0, 30.0), 1, 0.0);
		let (a, b) = (scene.label(SetId::A), scene.label(SetId::B));
		assert_eq!(a.anchor, TextAnchor::Start);
		assert_eq!(b.anchor, TextAnchor::End);
		assert!((a.position.x - (211.27 - 100.0)).abs() < 1e-2);
		assert!((b.position.x - (300.0 + 77.46)).abs() < 1e-2);
		assert_eq!(a.lines[0].text, "50");
		assert!(a.lines[0].bold);
		assert_eq!(a.lines[1].text, "Group A");
		assert_eq!(a.lines[1].dy_em, 1.2);
		assert_eq!(b.lines[1].text, "Group B");
		assert_eq!(a.opacity_at(0.0), 0.0);
		assert_eq!(a.opacity_at(800.0), 1.0);
	}

	#[test]
	fn line_baselines_accumulate_offsets() {
		let scene = Scene::build(&props(50.0, 30.0), 1, 0.0);
		let ys: Vec<f64> = scene.label(SetId::A).line_baselines().map(|(_, y)| y).collect();
		assert_eq!(ys.len(), 2);
		assert_eq!(ys[0], 150.0);
		assert!((ys[1] - (150.0 + 1.2 * 14.0)).abs() < 1e-9);
	}

	#[test]
	fn entrance_completion_is_reported_once() {
		let mut scene = Scene::build(&props(50.0, 30.0), 1, 0.0);
		assert!(scene.advance(400.0).is_empty());
		assert_eq!(scene.circle(SetId::A).phase, CirclePhase::Entering);

		let events = scene.advance(800.0);
		assert!(events.contains(&SceneEvent::EntranceComplete(SetId::A)));
		assert!(events.contains(&SceneEvent::EntranceComplete(SetId::B)));
		assert!(events.contains(&SceneEvent::IntersectionRevealed));
		assert_eq!(scene.circle(SetId::B).phase, CirclePhase::Idle);

		assert!(scene.advance(2_000.0).is_empty());
	}

	#[test]
	fn intersection_caption_waits_for_value_fade() {
		let mut scene = Scene::build(&props(50.0, 30.0), 1, 0.0);
		assert_eq!(scene.intersection.text.anchor, TextAnchor::Middle);
		assert_eq!(scene.intersection.text.lines.len(), 1);
		assert_eq!(scene.intersection.text.lines[0].text, "10");

		scene.advance(799.0);
		assert!(!scene.intersection.is_revealed());
		assert_eq!(scene.intersection.text.lines.len(), 1);

		scene.advance(800.0);
		assert!(scene.intersection.is_revealed());
		let caption = &scene.intersection.text.lines[1];
		assert_eq!(caption.text, "Intersection");
		assert!(!caption.bold);
		assert_eq!(caption.dy_em, 1.2);
	}

	#[test]
	fn degenerate_zero_magnitudes_still_build() {
		let mut scene = Scene::build(&props(0.0, 0.0), 1, 0.0);
		scene.advance(800.0);
		for set in SetId::ALL {
			assert_eq!(scene.circle(set).radius_at(800.0), 0.0);
			assert_eq!(scene.label(set).position.x, 250.0);
		}
		assert_eq!(scene.circle_at(250.0, 150.0, 800.0), None);
		assert!(scene.is_settled(800.0));
	}

	#[test]
	fn circle_at_prefers_b_in_the_overlap() {
		let scene = Scene::build(&props(50.0, 30.0), 1, 0.0);
		let overlap = scene.layout.intersection;
		assert_eq!(scene.circle_at(overlap.x, overlap.y, 800.0), Some(SetId::B));
		assert_eq!(scene.circle_at(130.0, 150.0, 800.0), Some(SetId::A));
		assert_eq!(scene.circle_at(5.0, 5.0, 800.0), None);
		// Nothing is hittable before the circles have grown.
		assert_eq!(scene.circle_at(overlap.x, overlap.y, 0.0), None);
	}

	#[test]
	fn custom_labels_and_colors_flow_into_primitives() {
		let mut p = props(5.0, 5.0);
		p.labels = VennLabels {
			label_intersection: Some("Both".into()),
			..VennLabels::default()
		};
		p.colors.color_b = Some("#123456".into());
		p.colors.font_color_a = Some("black".into());
		let mut scene = Scene::build(&p, 1, 0.0);
		scene.advance(800.0);
		assert_eq!(scene.circle(SetId::A).fill, "#9467bd");
		assert_eq!(scene.circle(SetId::B).fill, "#123456");
		assert_eq!(scene.label(SetId::A).color, "black");
		assert_eq!(scene.label(SetId::B).color, "white");
		assert_eq!(scene.intersection.text.lines[1].text, "Both");
	}

	#[test]
	fn fractional_values_print_without_trailing_zeroes() {
		assert_eq!(format_value(50.0), "50");
		assert_eq!(format_value(12.5), "12.5");
		assert_eq!(format_value(0.0), "0");
	}

	#[test]
	fn values_print_like_javascript_numbers() {
		assert_eq!(format_value(-0.0), "0");
		assert_eq!(format_value(-3.25), "-3.25");
		assert_eq!(format_value(1e20), "100000000000000000000");
		assert_eq!(format_value(1e21), "1e+21");
		assert_eq!(format_value(-2.5e22), "-2.5e+22");
		assert_eq!(format_value(0.000001), "0.000001");
		assert_eq!(format_value(1e-7), "1e-7");
		assert_eq!(format_value(1.5e-7), "1.5e-7");
		assert_eq!(format_value(f64::NAN), "NaN");
		assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
	}

	#[test]
	fn negative_zero_label_prints_as_zero() {
		let mut p = props(50.0, 30.0);
		p.data.intersection = -0.0;
		let scene = Scene::build(&p, 1, 0.0);
		assert_eq!(scene.intersection.text.lines[0].text, "0");
	}
}
