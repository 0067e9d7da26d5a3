use std::collections::{HashMap, HashSet};

use log::info;

use super::config::{ArcDiagramConfig, CircleGeometry};
use super::data;
use super::error::ArcDiagramError;
use super::filter::visible_sets;
use super::layout::{NodePoint, circle_layout};
use super::tooltip::{POINTER_OFFSET, TooltipContent};
use super::types::{ClaimData, ClaimEdge, ClaimNode};

/// Marker radius in px.
pub const NODE_RADIUS: f64 = 2.0;
/// Pointer hit radius around a marker, wider than the marker itself.
pub const HIT_RADIUS: f64 = 6.0;

/// Dim/highlight marks for one hovered node, recomputed from scratch on
/// every hover entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
	pub hovered: String,
	/// Ids linked to the hovered node by a kept edge, either direction.
	pub connected: HashSet<String>,
}

impl Highlight {
	pub fn dims_node(&self, id: &str) -> bool {
		id != self.hovered && !self.connected.contains(id)
	}

	pub fn touches_edge(&self, source: &str, target: &str) -> bool {
		source == self.hovered || target == self.hovered
	}
}

/// Capability surface the hover machine drives. The canvas/DOM backend
/// implements it; tests substitute a recording fake.
pub trait InteractionSurface {
	fn apply_highlight(&mut self, highlight: &Highlight);
	fn clear_highlight(&mut self);
	fn show_tooltip(&mut self, content: &TooltipContent, x: f64, y: f64);
	fn hide_tooltip(&mut self);
}

/// One diagram instance: the full and visible sets, the layout mapping, and
/// the Idle/Hovering pointer state.
pub struct ArcDiagramState {
	/// Full node set; edge endpoints resolve against this, not the subset.
	pub nodes: Vec<ClaimNode>,
	/// Layout positions for the full node set, keyed by id.
	pub points: HashMap<String, NodePoint>,
	/// Nodes surviving the filter (or the full set, on fallback).
	pub visible_nodes: Vec<ClaimNode>,
	/// Edges surviving the filter; also the neighborhood source on hover.
	pub edges: Vec<ClaimEdge>,
	pub geometry: CircleGeometry,
	pub width: f64,
	pub height: f64,
	hovered: Option<String>,
}

impl ArcDiagramState {
	/// Acquire the configured dataset and build the diagram state. Layout
	/// and filtering run synchronously once the data resolves.
	pub async fn init(config: &ArcDiagramConfig) -> Result<Self, ArcDiagramError> {
		let data = data::acquire(config).await?;
		Ok(Self::from_data(config, data))
	}

	pub fn from_data(config: &ArcDiagramConfig, data: ClaimData) -> Self {
		let ClaimData { nodes, edges } = data;
		let geometry = config.geometry();
		let points = circle_layout(&nodes, geometry);
		let (visible_nodes, kept_edges) = visible_sets(&config.filter, &nodes, &edges);
		info!(
			"arc diagram: {} of {} nodes and {} of {} edges visible",
			visible_nodes.len(),
			nodes.len(),
			kept_edges.len(),
			edges.len(),
		);

		Self {
			nodes,
			points,
			visible_nodes,
			edges: kept_edges,
			geometry,
			width: config.width,
			height: config.height,
			hovered: None,
		}
	}

	pub fn hovered(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	/// Visible node under the pointer, if any.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<&ClaimNode> {
		self.visible_nodes.iter().find(|node| {
			let Some(point) = self.points.get(&node.id) else {
				return false;
			};
			let (dx, dy) = (point.x - x, point.y - y);
			(dx * dx + dy * dy).sqrt() < HIT_RADIUS
		})
	}

	/// `Idle -> Hovering(id)` (or a fresh re-entry from another node).
	/// Recomputes the neighborhood, pushes the marks to the surface, and
	/// shows the tooltip offset right/down from the pointer.
	pub fn pointer_enter<S: InteractionSurface>(
		&mut self,
		id: &str,
		pointer: (f64, f64),
		surface: &mut S,
	) {
		let Some(node) = self.nodes.iter().find(|node| node.id == id) else {
			return;
		};

		let mut connected = HashSet::new();
		for edge in &self.edges {
			if edge.source == id {
				connected.insert(edge.target.clone());
			}
			if edge.target == id {
				connected.insert(edge.source.clone());
			}
		}

		let highlight = Highlight {
			hovered: id.to_string(),
			connected,
		};
		let content = TooltipContent::for_node(node);
		self.hovered = Some(id.to_string());
		surface.apply_highlight(&highlight);
		surface.show_tooltip(&content, pointer.0 + POINTER_OFFSET, pointer.1 + POINTER_OFFSET);
	}

	/// `Hovering -> Idle`: clear all marks and hide the tooltip.
	pub fn pointer_leave<S: InteractionSurface>(&mut self, surface: &mut S) {
		if self.hovered.take().is_none() {
			return;
		}
		surface.clear_highlight();
		surface.hide_tooltip();
	}
}
