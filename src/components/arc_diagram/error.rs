use thiserror::Error;

/// Failures surfaced while initializing a diagram.
#[derive(Debug, Error)]
pub enum ArcDiagramError {
	/// Neither an inline dataset nor a claims URL was configured.
	#[error("provide either data or claims_url")]
	Configuration,
	/// Fetching or decoding the remote dataset failed.
	#[error("loading claims data failed: {0}")]
	DataAcquisition(String),
}
