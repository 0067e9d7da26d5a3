use std::collections::HashMap;
use std::f64::consts::PI;

use super::config::CircleGeometry;
use super::types::ClaimNode;

/// A computed position on the circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePoint {
	pub x: f64,
	pub y: f64,
	/// Angle in radians, `(t / total) * 2π`.
	pub theta: f64,
}

/// Place every node on the circle from its ordinal slot. The `-π/2` rotates
/// slot 0 up to 12 o'clock instead of 3 o'clock. Input records are not
/// touched; positions live in the returned mapping.
pub fn circle_layout(nodes: &[ClaimNode], geometry: CircleGeometry) -> HashMap<String, NodePoint> {
	let total = nodes.len() as f64;
	nodes
		.iter()
		.map(|node| {
			let theta = (node.t / total) * 2.0 * PI;
			let point = NodePoint {
				x: geometry.cx + geometry.radius * (theta - PI / 2.0).cos(),
				y: geometry.cy + geometry.radius * (theta - PI / 2.0).sin(),
				theta,
			};
			(node.id.clone(), point)
		})
		.collect()
}
