use serde::Deserialize;

/// One fact-checked claim placed on the circle.
#[derive(Clone, Debug, Deserialize)]
pub struct ClaimNode {
	pub id: String,
	/// Ordinal layout slot, unique per dataset and in `[0, total)`.
	pub t: f64,
	#[serde(default)]
	pub claim: Option<String>,
	#[serde(default)]
	pub date: Option<String>,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub pinocchios: Option<f64>,
	#[serde(default)]
	pub location: Option<String>,
	#[serde(default)]
	pub analysis: Option<String>,
}

/// A relationship between two claims, by node id.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ClaimEdge {
	pub source: String,
	pub target: String,
}

/// The dataset shape accepted inline or fetched as JSON.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClaimData {
	#[serde(default)]
	pub nodes: Vec<ClaimNode>,
	#[serde(default)]
	pub edges: Vec<ClaimEdge>,
}
