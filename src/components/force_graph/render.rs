use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, PreviewState};
use crate::edges::WeightClass;

const BACKGROUND: &str = "#1a1a2e";

/// Stroke colour and width multiplier per weight class; matches the server
/// renderer's red / green / plain scheme.
fn edge_style(class: WeightClass) -> (&'static str, f64) {
	match class {
		WeightClass::Matched => ("230, 57, 70", 2.4),
		WeightClass::Half => ("42, 157, 87", 1.8),
		WeightClass::Unmatched => ("180, 190, 210", 1.0),
	}
}

pub fn render(state: &PreviewState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &PreviewState, ctx: &CanvasRenderingContext2d) {
	let base_width = 1.5 / state.transform.k.max(0.5);

	state.graph.visit_edges(|n1, n2, edge| {
		let lit = state.is_lit(n1.index()) && state.is_lit(n2.index());
		let (rgb, width) = edge_style(edge.user_data);
		let alpha = if lit { 0.9 } else { 0.15 };

		ctx.set_stroke_style_str(&format!("rgba({rgb}, {alpha})"));
		ctx.set_line_width(base_width * width);
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

fn draw_nodes(state: &PreviewState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let (x, y) = (node.x() as f64, node.y() as f64);
		let lit = state.is_lit(idx);
		let hovered = state.hovered == Some(idx);

		ctx.set_global_alpha(if lit { 1.0 } else { 0.3 });
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("#fafafa");
		ctx.fill();
		ctx.set_stroke_style_str(if hovered { "#64b4ff" } else { "#2a2a40" });
		let ring = if hovered { 3.0 } else { 1.5 };
		ctx.set_line_width(ring / k.max(0.5));
		ctx.stroke();

		ctx.set_fill_style_str("#1a1a2e");
		let _ = ctx.fill_text(&node.data.user_data.label, x, y);
		ctx.set_global_alpha(1.0);
	});
}
