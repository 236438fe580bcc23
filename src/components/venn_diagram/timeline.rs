//! Time-based value transitions.
//!
//! A [`Tween`] is a pure function of time: it stores where it started, where it
//! is headed and when, and is sampled with a timestamp from the animation loop.
//! Nothing ticks in the background, so interrupting a transition is just
//! replacing the tween.

/// Milliseconds on the animation clock (e.g. `performance.now()`).
pub type Millis = f64;

/// Cubic in-out easing (d3's default transition ease) of progress `t` in `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
	let t2 = t.clamp(0.0, 1.0) * 2.0;
	if t2 <= 1.0 {
		t2 * t2 * t2 / 2.0
	} else {
		let u = t2 - 2.0;
		(u * u * u + 2.0) / 2.0
	}
}

/// Interpolates a scalar from `from` to `to` over `[start, start + duration]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
	from: f64,
	to: f64,
	start: Millis,
	duration: Millis,
}

impl Tween {
	/// Transition from `from` to `to` starting at `start`, eased cubic in-out.
	pub fn new(from: f64, to: f64, start: Millis, duration: Millis) -> Self {
		Self {
			from,
			to,
			start,
			duration,
		}
	}

	/// A value that is already at rest.
	pub fn fixed(value: f64) -> Self {
		Self::new(value, value, 0.0, 0.0)
	}

	/// Normalized progress at `now`, in `[0, 1]`.
	pub fn progress(&self, now: Millis) -> f64 {
		if self.duration <= 0.0 || now >= self.start + self.duration {
			return 1.0;
		}
		((now - self.start) / self.duration).clamp(0.0, 1.0)
	}

	/// Eased value at `now`; exactly `to` once complete.
	pub fn value_at(&self, now: Millis) -> f64 {
		let t = self.progress(now);
		if t >= 1.0 {
			return self.to;
		}
		self.from + (self.to - self.from) * ease_cubic_in_out(t)
	}

	/// Whether the transition has reached its target by `now`.
	pub fn is_complete(&self, now: Millis) -> bool {
		self.progress(now) >= 1.0
	}

	/// Value the transition ends at.
	pub fn target(&self) -> f64 {
		self.to
	}

	/// Start a new transition toward `to` from wherever this one is at `now`.
	///
	/// The returned tween replaces `self`; the interrupted one is dropped.
	pub fn retarget(&self, to: f64, now: Millis, duration: Millis) -> Self {
		Self::new(self.value_at(now), to, now, duration)
	}
}
