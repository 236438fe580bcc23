//! SVG snapshot of a scene.
//!
//! Serializes the scene as it looks at a given instant: one `<circle>` per set,
//! and one `<text>` per label block with a `<tspan>` per line. Useful for
//! static hosts and for inspecting a frame without a browser canvas.

use std::fmt::Write;

use super::scene::{Scene, TextNode};
use super::timeline::Millis;

/// Render `scene` at `now` as a standalone SVG document.
pub fn to_svg(scene: &Scene, now: Millis) -> String {
	let mut out = String::new();
	let _ = write!(
		out,
		r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
		w = fmt_number(scene.width),
		h = fmt_number(scene.height),
	);

	for circle in &scene.circles {
		let _ = write!(
			out,
			r#"<circle cx="{}" cy="{}" r="{}" style="fill: {}; fill-opacity: {};"/>"#,
			fmt_number(circle.center.x),
			fmt_number(circle.center.y),
			fmt_number(circle.radius_at(now)),
			escape_xml(&circle.fill),
			fmt_number(circle.fill_opacity_at(now)),
		);
	}

	for label in &scene.labels {
		write_text(&mut out, label, now);
	}
	write_text(&mut out, &scene.intersection.text, now);

	out.push_str("</svg>");
	out
}

fn write_text(out: &mut String, node: &TextNode, now: Millis) {
	let _ = write!(
		out,
		r#"<text x="{}" y="{}" text-anchor="{}" style="fill: {}; font-size: {}px; font-family: {}; opacity: {};">"#,
		fmt_number(node.position.x),
		fmt_number(node.position.y),
		node.anchor.as_svg(),
		escape_xml(&node.color),
		fmt_number(node.font_size),
		escape_xml(node.font_family),
		fmt_number(node.opacity_at(now)),
	);
	for line in &node.lines {
		let weight = if line.bold { "bold" } else { "normal" };
		let _ = write!(
			out,
			r#"<tspan x="{}" dy="{}em" style="font-weight: {};">{}</tspan>"#,
			fmt_number(node.position.x),
			fmt_number(line.dy_em),
			weight,
			escape_xml(&line.text),
		);
	}
	out.push_str("</text>");
}

/// Up to three decimals, trailing zeroes trimmed, no negative zero.
fn fmt_number(v: f64) -> String {
	if !v.is_finite() {
		return "0".to_string();
	}
	let mut s = format!("{:.3}", (v * 1000.0).round() / 1000.0);
	if s.contains('.') {
		while s.ends_with('0') {
			s.pop();
		}
		if s.ends_with('.') {
			s.pop();
		}
	}
	if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}
	out
}
