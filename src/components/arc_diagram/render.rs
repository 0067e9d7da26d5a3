use std::f64::consts::PI;

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::layout::NodePoint;
use super::state::{ArcDiagramState, Highlight, NODE_RADIUS};

/// Vertical control-point lift per unit of horizontal span. Shorter chords
/// arc less, giving the layered rainbow look.
pub const ARC_LIFT: f64 = 0.12;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Control point of the quadratic edge curve: the chord midpoint, lifted by
/// [`ARC_LIFT`] times the horizontal span. Equal-x endpoints get no lift.
pub fn arc_control_point(a: NodePoint, b: NodePoint) -> (f64, f64) {
	let mx = (a.x + b.x) / 2.0;
	let my = (a.y + b.y) / 2.0 - (a.x - b.x).abs() * ARC_LIFT;
	(mx, my)
}

/// A kept edge with both endpoints resolved to positions.
pub struct EdgeLine {
	pub source: String,
	pub target: String,
	pub a: NodePoint,
	pub b: NodePoint,
}

/// A kept node marker.
pub struct Marker {
	pub id: String,
	pub point: NodePoint,
	pub color: String,
}

/// Everything the canvas needs to repaint, resolved once after init so the
/// pointer callbacks can redraw without touching the dataset again.
pub struct Scene {
	pub width: f64,
	pub height: f64,
	pub cx: f64,
	pub cy: f64,
	pub radius: f64,
	pub edges: Vec<EdgeLine>,
	pub markers: Vec<Marker>,
}

impl Scene {
	/// Resolve kept edges and markers against the full position mapping.
	/// Edges naming an unknown node are skipped with a diagnostic.
	pub fn build(state: &ArcDiagramState) -> Self {
		let mut edges = Vec::with_capacity(state.edges.len());
		for edge in &state.edges {
			let (Some(&a), Some(&b)) = (
				state.points.get(&edge.source),
				state.points.get(&edge.target),
			) else {
				warn!(
					"arc diagram: skipping edge {} -> {} with unknown endpoint",
					edge.source, edge.target
				);
				continue;
			};
			edges.push(EdgeLine {
				source: edge.source.clone(),
				target: edge.target.clone(),
				a,
				b,
			});
		}

		let markers = state
			.visible_nodes
			.iter()
			.filter_map(|node| {
				let point = *state.points.get(&node.id)?;
				Some(Marker {
					id: node.id.clone(),
					point,
					color: category_color(node.category.as_deref()).to_string(),
				})
			})
			.collect();

		Self {
			width: state.width,
			height: state.height,
			cx: state.geometry.cx,
			cy: state.geometry.cy,
			radius: state.geometry.radius,
			edges,
			markers,
		}
	}
}

fn category_color(category: Option<&str>) -> &'static str {
	let index = category
		.map(|c| c.bytes().map(usize::from).sum::<usize>() % COLORS.len())
		.unwrap_or(0);
	COLORS[index]
}

/// Repaint the whole diagram: background, baseline circle, edge arcs, then
/// markers, with the current hover marks applied when present.
pub fn render(scene: &Scene, highlight: Option<&Highlight>, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, scene.width, scene.height);

	// Decorative baseline circle behind the layout.
	ctx.begin_path();
	let _ = ctx.arc(scene.cx, scene.cy, scene.radius, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str("#eee");
	ctx.set_line_width(1.0);
	ctx.stroke();

	draw_edges(scene, highlight, ctx);
	draw_markers(scene, highlight, ctx);
}

fn draw_edges(scene: &Scene, highlight: Option<&Highlight>, ctx: &CanvasRenderingContext2d) {
	for edge in &scene.edges {
		let touched = highlight.map(|h| h.touches_edge(&edge.source, &edge.target));
		let (stroke, width) = match touched {
			None => ("rgba(0, 0, 0, 0.18)", 1.0),
			Some(true) => ("rgba(208, 60, 32, 0.85)", 1.6),
			Some(false) => ("rgba(0, 0, 0, 0.05)", 1.0),
		};
		if touched == Some(false) {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(2.0),
				&JsValue::from_f64(3.0),
			));
		} else {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
		ctx.set_stroke_style_str(stroke);
		ctx.set_line_width(width);

		let (mx, my) = arc_control_point(edge.a, edge.b);
		ctx.begin_path();
		ctx.move_to(edge.a.x, edge.a.y);
		ctx.quadratic_curve_to(mx, my, edge.b.x, edge.b.y);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_markers(scene: &Scene, highlight: Option<&Highlight>, ctx: &CanvasRenderingContext2d) {
	for marker in &scene.markers {
		let dimmed = highlight.is_some_and(|h| h.dims_node(&marker.id));
		let hovered = highlight.is_some_and(|h| h.hovered == marker.id);

		ctx.set_global_alpha(if dimmed { 0.15 } else { 1.0 });
		ctx.begin_path();
		let _ = ctx.arc(marker.point.x, marker.point.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&marker.color);
		ctx.fill();

		if hovered {
			ctx.begin_path();
			let _ = ctx.arc(
				marker.point.x,
				marker.point.y,
				NODE_RADIUS + 2.0,
				0.0,
				2.0 * PI,
			);
			ctx.set_stroke_style_str("rgba(0, 0, 0, 0.6)");
			ctx.set_line_width(1.0);
			ctx.stroke();
		}
	}
	ctx.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::arc_diagram::config::ArcDiagramConfig;
	use crate::components::arc_diagram::types::{ClaimData, ClaimEdge, ClaimNode};

	fn point(x: f64, y: f64) -> NodePoint {
		NodePoint { x, y, theta: 0.0 }
	}

	fn node(id: &str, t: f64) -> ClaimNode {
		ClaimNode {
			id: id.into(),
			t,
			claim: None,
			date: None,
			category: None,
			pinocchios: None,
			location: None,
			analysis: None,
		}
	}

	#[test]
	fn equal_x_endpoints_get_zero_lift() {
		let (mx, my) = arc_control_point(point(100.0, 50.0), point(100.0, 350.0));
		assert_eq!(mx, 100.0);
		assert_eq!(my, 200.0);
	}

	#[test]
	fn lift_is_proportional_to_horizontal_span() {
		let (mx, my) = arc_control_point(point(0.0, 100.0), point(200.0, 100.0));
		assert_eq!(mx, 100.0);
		assert_eq!(my, 100.0 - 200.0 * ARC_LIFT);
	}

	#[test]
	fn scene_skips_edges_with_unknown_endpoints() {
		let data = ClaimData {
			nodes: vec![node("1", 0.0), node("2", 1.0)],
			edges: vec![
				ClaimEdge {
					source: "1".into(),
					target: "2".into(),
				},
				ClaimEdge {
					source: "1".into(),
					target: "ghost".into(),
				},
			],
		};
		let state = ArcDiagramState::from_data(&ArcDiagramConfig::default(), data);
		let scene = Scene::build(&state);
		assert_eq!(scene.edges.len(), 1);
		assert_eq!(scene.edges[0].target, "2");
		assert_eq!(scene.markers.len(), 2);
	}

	#[test]
	fn uncategorized_markers_share_the_first_color() {
		assert_eq!(category_color(None), COLORS[0]);
		assert_eq!(category_color(Some("Economy")), category_color(Some("Economy")));
	}
}
