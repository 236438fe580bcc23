//! Magnitude-to-radius scaling.
//!
//! Circles are sized with a square-root scale so that circle *area*, not
//! radius, is proportional to the magnitude it encodes.
//!
//! # Domain and Range
//!
//! - **Domain**: `[0, max(a, b)]`. The larger set always maps to the full range.
//! - **Range**: `[0, width / 5]`. No circle is ever wider than 40% of the canvas.
//!
//! A collapsed domain (`a == b == 0`) maps every input to zero, yielding two
//! zero-size circles.

use super::types::{SetId, VennData};

/// Largest radius as a fraction of the canvas width.
pub const RANGE_DIVISOR: f64 = 5.0;

/// Square-root scale from `[0, domain_max]` onto `[0, range_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
	domain_max: f64,
	range_max: f64,
}

impl SqrtScale {
	/// Scale mapping `domain_max` to `range_max`.
	pub fn new(domain_max: f64, range_max: f64) -> Self {
		Self {
			domain_max,
			range_max,
		}
	}

	/// Scale shared by both circles of a diagram on a canvas `width` pixels wide.
	pub fn for_data(data: &VennData, width: f64) -> Self {
		Self::new(data.a.max(data.b), width / RANGE_DIVISOR)
	}

	/// Map a magnitude to a radius.
	pub fn apply(&self, magnitude: f64) -> f64 {
		if self.domain_max <= 0.0 {
			return 0.0;
		}
		self.range_max * (magnitude / self.domain_max).sqrt()
	}
}

/// Target radii of both circles, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Radii {
	/// Radius of circle A.
	pub a: f64,
	/// Radius of circle B.
	pub b: f64,
}

impl Radii {
	/// Compute both radii on the shared scale.
	pub fn new(data: &VennData, width: f64) -> Self {
		let scale = SqrtScale::for_data(data, width);
		Self {
			a: scale.apply(data.a),
			b: scale.apply(data.b),
		}
	}

	/// Radius for `set`.
	pub fn get(&self, set: SetId) -> f64 {
		match set {
			SetId::A => self.a,
			SetId::B => self.b,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn data(a: f64, b: f64) -> VennData {
		VennData {
			a,
			b,
			intersection: 0.0,
		}
	}

	#[test]
	fn largest_magnitude_fills_the_range() {
		let radii = Radii::new(&data(50.0, 30.0), 500.0);
		assert_eq!(radii.a, 100.0);
		assert!((radii.b - 100.0 * (30.0_f64 / 50.0).sqrt()).abs() < 1e-9);
		assert!((radii.b - 77.4597).abs() < 1e-3);
	}

	#[test]
	fn zero_maps_to_zero() {
		let scale = SqrtScale::new(42.0, 80.0);
		assert_eq!(scale.apply(0.0), 0.0);
	}

	#[test]
	fn collapsed_domain_yields_zero_radii() {
		let radii = Radii::new(&data(0.0, 0.0), 500.0);
		assert_eq!(radii, Radii { a: 0.0, b: 0.0 });
	}

	#[test]
	fn area_is_proportional_to_magnitude() {
		let scale = SqrtScale::new(100.0, 50.0);
		let (r1, r4) = (scale.apply(25.0), scale.apply(100.0));
		assert!((r4 * r4 / (r1 * r1) - 4.0).abs() < 1e-9);
	}

	#[test]
	fn radius_is_monotonic_and_bounded_by_width() {
		let width = 640.0;
		let samples = [0.0, 0.5, 1.0, 3.0, 10.0, 99.0, 1e6];
		for &x in &samples {
			for &y in &samples {
				let radii = Radii::new(&data(x, y), width);
				assert!(radii.a <= width / RANGE_DIVISOR + 1e-9);
				assert!(radii.b <= width / RANGE_DIVISOR + 1e-9);
				if x <= y {
					assert!(radii.a <= radii.b, "a={x} b={y}");
				}
			}
		}
	}
}
