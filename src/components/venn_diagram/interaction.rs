//! Hover and touch feedback for the two circles.
//!
//! Handlers for a circle are attached only after its entrance animation has
//! completed. Pointer positions are hit-tested against the scene and turned
//! into enter/leave transitions on the circle under the pointer, looked up by
//! [`SetId`]. Each transition restarts the fill-opacity tween from its current
//! value, so a new hover interrupts one still in flight.

use super::scene::{CirclePhase, Scene};
use super::timeline::Millis;
use super::types::SetId;

/// Pointer-level event delivered to a circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
	/// Mouse entered the circle or a touch started on it.
	Enter(SetId),
	/// Mouse left the circle or the touch that started on it ended.
	Leave(SetId),
}

/// Tracks which circles accept input and what the pointer is currently over.
#[derive(Clone, Debug, Default)]
pub struct InteractionHandler {
	attached: [bool; 2],
	/// Circle currently under the mouse (whether or not it accepts input).
	pointer_over: Option<SetId>,
	/// Circle that received the active touch-start.
	touched: Option<SetId>,
}

impl InteractionHandler {
	/// Start accepting input for a circle. Called once its entrance completes.
	pub fn attach(&mut self, set: SetId) {
		self.attached[set.index()] = true;
	}

	/// Whether `set` currently accepts input.
	pub fn is_attached(&self, set: SetId) -> bool {
		self.attached[set.index()]
	}

	/// Circle under the mouse, if any.
	pub fn pointer_over(&self) -> Option<SetId> {
		self.pointer_over
	}

	/// Mouse moved to `(x, y)` in canvas pixels.
	pub fn pointer_moved(&mut self, scene: &mut Scene, x: f64, y: f64, now: Millis) {
		let target = scene.circle_at(x, y, now);
		if target == self.pointer_over {
			return;
		}
		if let Some(prev) = self.pointer_over.take() {
			self.dispatch(scene, Interaction::Leave(prev), now);
		}
		if let Some(next) = target {
			self.dispatch(scene, Interaction::Enter(next), now);
		}
		self.pointer_over = target;
	}

	/// Mouse left the canvas.
	pub fn pointer_left(&mut self, scene: &mut Scene, now: Millis) {
		if let Some(prev) = self.pointer_over.take() {
			self.dispatch(scene, Interaction::Leave(prev), now);
		}
	}

	/// Touch started at `(x, y)` in canvas pixels.
	pub fn touch_start(&mut self, scene: &mut Scene, x: f64, y: f64, now: Millis) {
		if let Some(set) = scene.circle_at(x, y, now) {
			self.touched = Some(set);
			self.dispatch(scene, Interaction::Enter(set), now);
		}
	}

	/// The active touch ended. Applies to the circle the touch started on.
	pub fn touch_end(&mut self, scene: &mut Scene, now: Millis) {
		if let Some(set) = self.touched.take() {
			self.dispatch(scene, Interaction::Leave(set), now);
		}
	}

	/// Apply an interaction to its circle if that circle's handlers are attached.
	///
	/// Returns whether the event was handled.
	pub fn dispatch(&self, scene: &mut Scene, event: Interaction, now: Millis) -> bool {
		let set = match event {
			Interaction::Enter(set) | Interaction::Leave(set) => set,
		};
		if !self.is_attached(set) {
			return false;
		}
		let motion = scene.theme.motion.clone();
		let circle = scene.circle_mut(set);
		let (opacity, phase) = match event {
			Interaction::Enter(_) => (motion.hover_opacity, CirclePhase::Hovered),
			Interaction::Leave(_) => (motion.rest_opacity, CirclePhase::Idle),
		};
		circle.fill_opacity = circle.fill_opacity.retarget(opacity, now, motion.hover_ms);
		circle.phase = phase;
		true
	}
}
