use super::filter::ClaimFilter;
use super::types::ClaimData;

/// Diagram options, merged over [`Default`] via struct update syntax.
#[derive(Clone, Debug)]
pub struct ArcDiagramConfig {
	pub width: f64,
	pub height: f64,
	pub radius: f64,
	/// Remote JSON resource, consulted when no inline `data` is set.
	pub claims_url: Option<String>,
	/// Inline dataset; wins over `claims_url` when both are set.
	pub data: Option<ClaimData>,
	pub filter: ClaimFilter,
}

impl Default for ArcDiagramConfig {
	fn default() -> Self {
		Self {
			width: 1200.0,
			height: 900.0,
			radius: 420.0,
			claims_url: None,
			data: None,
			filter: ClaimFilter::default(),
		}
	}
}

/// Circle geometry derived from the configured surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleGeometry {
	pub cx: f64,
	pub cy: f64,
	pub radius: f64,
}

impl ArcDiagramConfig {
	/// The center sits 40px below the middle to balance the layout.
	pub fn geometry(&self) -> CircleGeometry {
		CircleGeometry {
			cx: self.width / 2.0,
			cy: self.height / 2.0 + 40.0,
			radius: self.radius,
		}
	}
}
