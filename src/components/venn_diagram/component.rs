//! Leptos component wrapping the Venn diagram canvas.
//!
//! The component creates an HTML canvas element and rebuilds the scene whenever
//! any input signal changes. An animation loop runs via
//! `requestAnimationFrame`, advancing the scene's transitions and repainting
//! while anything moves. The loop stops when the component is cleaned up.
//! Mouse and touch events are forwarded to the interaction handler.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo::render::{AnimationFrame, request_animation_frame};
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

use super::render;
use super::state::VennState;
use super::timeline::Millis;
use super::types::{DiagramProps, VennColors, VennData, VennLabels};

type SharedState = Rc<RefCell<Option<VennState>>>;
type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Current time on the animation clock.
fn now_ms() -> Millis {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or_else(js_sys::Date::now)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Run flag shared by the frame loop and the component's cleanup.
///
/// Atomic so the cleanup closure is `Send + Sync`.
#[derive(Clone, Debug)]
struct LoopFlag(Arc<AtomicBool>);

impl LoopFlag {
	fn new() -> Self {
		Self(Arc::new(AtomicBool::new(true)))
	}

	fn is_running(&self) -> bool {
		self.0.load(Ordering::Acquire)
	}

	fn stop(&self) {
		self.0.store(false, Ordering::Release);
	}
}

/// Queue the next frame. Each frame draws if needed and queues its successor
/// until `running` is cleared; the last one releases its own handle.
fn schedule_frame(frame: FrameSlot, state: SharedState, ctx: CanvasRenderingContext2d, running: LoopFlag) {
	let slot = frame.clone();
	let handle = request_animation_frame(move |_| {
		frame.borrow_mut().take();
		if !running.is_running() {
			debug!("venn-diagram: animation loop stopped");
			return;
		}

		let now = now_ms();
		if let Some(ref mut s) = *state.borrow_mut() {
			s.tick(now);
			if s.take_repaint(now) {
				if let Err(e) = render::render(&s.scene, &ctx, now) {
					warn!("venn-diagram: draw failed: {:?}", e);
				}
			}
		}
		schedule_frame(frame, state, ctx, running);
	});
	*slot.borrow_mut() = Some(handle);
}

/// Renders an animated two-set Venn diagram on a canvas element.
///
/// Circle sizes follow `data.a` and `data.b`; `data.intersection` is printed in
/// the overlap. Changing any prop (data, size, labels or colors) discards the
/// current drawing and replays the entrance animation from scratch.
#[component]
pub fn VennDiagram(
	#[prop(into)] data: Signal<VennData>,
	#[prop(into)] width: Signal<f64>,
	#[prop(into)] height: Signal<f64>,
	#[prop(into, optional)] labels: MaybeProp<VennLabels>,
	#[prop(into, optional)] colors: MaybeProp<VennColors>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let frame: FrameSlot = Rc::new(RefCell::new(None));
	let running = LoopFlag::new();
	let (state_init, frame_init, running_init) = (state.clone(), frame.clone(), running.clone());

	on_cleanup(move || running.stop());

	Effect::new(move |_| {
		let props = DiagramProps {
			data: data.get(),
			width: width.get(),
			height: height.get(),
			labels: labels.get().unwrap_or_default(),
			colors: colors.get().unwrap_or_default(),
		};
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		// Assigning the size clears the canvas, even when it is unchanged.
		canvas.set_width(props.width as u32);
		canvas.set_height(props.height as u32);

		let now = now_ms();
		{
			let mut slot = state_init.borrow_mut();
			if let Some(s) = slot.as_mut() {
				if s.props() != &props {
					s.render(props, now);
				}
				s.invalidate();
			} else {
				*slot = Some(VennState::new(props, now));
			}
		}

		if frame_init.borrow().is_some() || !running_init.is_running() {
			return;
		}
		let Some(ctx) = context_2d(&canvas) else {
			warn!("venn-diagram: canvas 2d context unavailable");
			return;
		};
		schedule_frame(frame_init.clone(), state_init.clone(), ctx, running_init.clone());
	});

	let canvas_point = move |client_x: f64, client_y: f64| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((client_x - rect.left(), client_y - rect.top()))
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(ev.client_x() as f64, ev.client_y() as f64) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_moved(x, y, now_ms());
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_left(now_ms());
		}
	};

	let state_ts = state.clone();
	let on_touchstart = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		let Some((x, y)) = canvas_point(touch.client_x() as f64, touch.client_y() as f64) else {
			return;
		};
		if let Some(ref mut s) = *state_ts.borrow_mut() {
			s.touch_start(x, y, now_ms());
		}
	};

	let state_te = state.clone();
	let on_touchend = move |_: TouchEvent| {
		if let Some(ref mut s) = *state_te.borrow_mut() {
			s.touch_end(now_ms());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="venn-diagram-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:touchstart=on_touchstart
			on:touchend=on_touchend
			style="display: block;"
		/>
	}
}
