//! Diagram state and render-cycle management.
//!
//! [`VennState`] is the explicit form of "redraw whenever an input changes": the
//! host calls [`VennState::render`] with the new props, which discards the
//! previous scene (and with it every in-flight animation and hover) and builds
//! a fresh one. Between renders, the animation loop calls [`VennState::tick`]
//! and asks [`VennState::take_repaint`] whether the frame needs drawing; a
//! settled scene is painted once and then left alone until something moves.

use log::debug;

use super::interaction::InteractionHandler;
use super::scene::{Scene, SceneEvent};
use super::timeline::Millis;
use super::types::{DiagramProps, SetId};

/// Current scene plus the input it was built from.
pub struct VennState {
	/// Primitives of the current render cycle.
	pub scene: Scene,
	/// Input routing for the current render cycle.
	pub interaction: InteractionHandler,
	props: DiagramProps,
	generation: u64,
	/// The settled scene has been drawn and nothing changed since.
	painted_settled: bool,
}

impl VennState {
	/// First render cycle for `props`, starting its entrance at `now`.
	pub fn new(props: DiagramProps, now: Millis) -> Self {
		let scene = Scene::build(&props, 1, now);
		log_cycle(&scene);
		Self {
			scene,
			interaction: InteractionHandler::default(),
			props,
			generation: 1,
			painted_settled: false,
		}
	}

	/// Props the current scene was built from.
	pub fn props(&self) -> &DiagramProps {
		&self.props
	}

	/// Number of render cycles so far, starting at 1.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Replace the scene with one built from `props`. Always a full rebuild.
	pub fn render(&mut self, props: DiagramProps, now: Millis) {
		self.generation += 1;
		self.scene = Scene::build(&props, self.generation, now);
		self.interaction = InteractionHandler::default();
		self.props = props;
		self.painted_settled = false;
		log_cycle(&self.scene);
	}

	/// Re-render at a new canvas size.
	pub fn resize(&mut self, width: f64, height: f64, now: Millis) {
		let props = DiagramProps {
			width,
			height,
			..self.props.clone()
		};
		self.render(props, now);
	}

	/// Advance animations to `now` and attach input handlers to circles that
	/// finished entering.
	pub fn tick(&mut self, now: Millis) -> Vec<SceneEvent> {
		let events = self.scene.advance(now);
		for event in &events {
			match *event {
				SceneEvent::EntranceComplete(set) => {
					self.interaction.attach(set);
					debug!("venn-diagram: circle {:?} ready for input", set);
				}
				SceneEvent::IntersectionRevealed => {}
			}
		}
		events
	}

	/// Whether the frame at `now` must be drawn.
	///
	/// True while anything is animating, and once more after the scene settles
	/// so the final values land on the canvas. False after that until a render,
	/// an interaction or [`VennState::invalidate`].
	pub fn take_repaint(&mut self, now: Millis) -> bool {
		if !self.scene.is_settled(now) {
			self.painted_settled = false;
			return true;
		}
		!std::mem::replace(&mut self.painted_settled, true)
	}

	/// Force the next frame to be drawn, e.g. after the canvas was cleared.
	pub fn invalidate(&mut self) {
		self.painted_settled = false;
	}

	/// Mouse moved to `(x, y)` in canvas pixels.
	pub fn pointer_moved(&mut self, x: f64, y: f64, now: Millis) {
		self.interaction.pointer_moved(&mut self.scene, x, y, now);
	}

	/// Mouse left the canvas.
	pub fn pointer_left(&mut self, now: Millis) {
		self.interaction.pointer_left(&mut self.scene, now);
	}

	/// Touch started at `(x, y)` in canvas pixels.
	pub fn touch_start(&mut self, x: f64, y: f64, now: Millis) {
		self.interaction.touch_start(&mut self.scene, x, y, now);
	}

	/// The active touch ended.
	pub fn touch_end(&mut self, now: Millis) {
		self.interaction.touch_end(&mut self.scene, now);
	}
}

fn log_cycle(scene: &Scene) {
	debug!(
		"venn-diagram: render cycle {} ({}x{}, {} primitives), radii a={:.2} b={:.2}",
		scene.generation(),
		scene.width,
		scene.height,
		scene.primitive_count(),
		scene.layout.radius(SetId::A),
		scene.layout.radius(SetId::B),
	);
}
