//! Circle placement.
//!
//! Both circles sit on the horizontal midline. Each one is pushed away from the
//! canvas center by half of the *other* circle's radius:
//!
//! ```text
//! cx_a = width / 2 - radius_b / 2
//! cx_b = width / 2 + radius_a / 2
//! ```
//!
//! This is a visual heuristic, not an area-accurate set intersection. The
//! overlap it produces is unrelated to the displayed intersection value.

use super::scale::Radii;
use super::types::SetId;

/// A point in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the left edge.
	pub x: f64,
	/// Vertical offset from the top edge.
	pub y: f64,
}

/// Resolved geometry for one render cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
	/// Target radii the centers were derived from.
	pub radii: Radii,
	/// Center of circle A.
	pub center_a: Point,
	/// Center of circle B.
	pub center_b: Point,
	/// Anchor of the intersection label, midway between the two centers.
	pub intersection: Point,
}

impl Layout {
	/// Place both circles on a `width` × `height` canvas.
	pub fn new(radii: Radii, width: f64, height: f64) -> Self {
		let cy = height / 2.0;
		let center_a = Point {
			x: width / 2.0 - radii.b / 2.0,
			y: cy,
		};
		let center_b = Point {
			x: width / 2.0 + radii.a / 2.0,
			y: cy,
		};
		Self {
			radii,
			center_a,
			center_b,
			intersection: Point {
				x: (center_a.x + center_b.x) / 2.0,
				y: cy,
			},
		}
	}

	/// Center of the circle for `set`.
	pub fn center(&self, set: SetId) -> Point {
		match set {
			SetId::A => self.center_a,
			SetId::B => self.center_b,
		}
	}

	/// Target radius of the circle for `set`.
	pub fn radius(&self, set: SetId) -> f64 {
		self.radii.get(set)
	}

	/// Anchor of a set's label block: the outer horizontal edge of its circle.
	pub fn label_anchor(&self, set: SetId) -> Point {
		let center = self.center(set);
		let radius = self.radius(set);
		let x = match set {
			SetId::A => center.x - radius,
			SetId::B => center.x + radius,
		};
		Point { x, y: center.y }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-2
	}

	#[test]
	fn reference_scenario_positions() {
		let radii = Radii {
			a: 100.0,
			b: 100.0 * (0.6_f64).sqrt(),
		};
		let layout = Layout::new(radii, 500.0, 300.0);
		assert!(close(layout.center_a.x, 211.27));
		assert_eq!(layout.center_b.x, 300.0);
		assert_eq!(layout.center_a.y, 150.0);
		assert_eq!(layout.center_b.y, 150.0);
		assert!(close(layout.intersection.x, 255.635));
		assert_eq!(layout.intersection.y, 150.0);
	}

	#[test]
	fn equal_radii_put_a_left_of_b() {
		for r in [0.5, 10.0, 120.0] {
			let layout = Layout::new(Radii { a: r, b: r }, 800.0, 400.0);
			assert!(layout.center_a.x < layout.center_b.x);
			assert_eq!(layout.center_a.x, 400.0 - r / 2.0);
			assert_eq!(layout.center_b.x, 400.0 + r / 2.0);
		}
	}

	#[test]
	fn intersection_is_mean_of_centers() {
		let layout = Layout::new(Radii { a: 13.0, b: 71.0 }, 333.0, 120.0);
		assert_eq!(
			layout.intersection.x,
			(layout.center_a.x + layout.center_b.x) / 2.0
		);
	}

	#[test]
	fn label_anchors_sit_on_outer_edges() {
		let layout = Layout::new(Radii { a: 40.0, b: 20.0 }, 200.0, 100.0);
		assert_eq!(layout.label_anchor(SetId::A).x, layout.center_a.x - 40.0);
		assert_eq!(layout.label_anchor(SetId::B).x, layout.center_b.x + 20.0);
	}

	#[test]
	fn zero_radii_collapse_to_canvas_center() {
		let layout = Layout::new(Radii::default(), 500.0, 300.0);
		assert_eq!(layout.center_a, Point { x: 250.0, y: 150.0 });
		assert_eq!(layout.center_b, Point { x: 250.0, y: 150.0 });
		assert_eq!(layout.label_anchor(SetId::A).x, 250.0);
	}
}
