//! Canvas rendering for the Venn diagram.
//!
//! Draws one frame of a [`Scene`] sampled at a timestamp. Paint order:
//! 1. Circle A, then circle B (so B sits on top in the overlap)
//! 2. Set label blocks
//! 3. Intersection label

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::{CircleNode, Scene, TextNode};
use super::timeline::Millis;

/// Clears the canvas and draws the scene as it looks at `now`.
pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d, now: Millis) -> Result<(), JsValue> {
	ctx.clear_rect(0.0, 0.0, scene.width, scene.height);

	for circle in &scene.circles {
		draw_circle(ctx, circle, now)?;
	}
	for label in &scene.labels {
		draw_text(ctx, label, now)?;
	}
	draw_text(ctx, &scene.intersection.text, now)?;

	ctx.set_global_alpha(1.0);
	Ok(())
}

fn draw_circle(ctx: &CanvasRenderingContext2d, circle: &CircleNode, now: Millis) -> Result<(), JsValue> {
	let radius = circle.radius_at(now);
	if !radius.is_finite() || radius <= 0.0 {
		return Ok(());
	}

	ctx.set_global_alpha(circle.fill_opacity_at(now));
	ctx.set_fill_style_str(&circle.fill);
	ctx.begin_path();
	ctx.arc(circle.center.x, circle.center.y, radius, 0.0, 2.0 * PI)?;
	ctx.fill();
	Ok(())
}

fn draw_text(ctx: &CanvasRenderingContext2d, node: &TextNode, now: Millis) -> Result<(), JsValue> {
	let opacity = node.opacity_at(now);
	if opacity <= 0.0 {
		return Ok(());
	}

	ctx.set_global_alpha(opacity);
	ctx.set_fill_style_str(&node.color);
	ctx.set_text_align(node.anchor.as_canvas());
	ctx.set_text_baseline("alphabetic");

	for (line, y) in node.line_baselines() {
		let weight = if line.bold { "bold " } else { "" };
		ctx.set_font(&format!("{}{}px {}", weight, node.font_size, node.font_family));
		ctx.fill_text(&line.text, node.position.x, y)?;
	}
	Ok(())
}
