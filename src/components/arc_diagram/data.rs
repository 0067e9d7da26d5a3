use super::config::ArcDiagramConfig;
use super::error::ArcDiagramError;
use super::types::ClaimData;

/// Which source the configuration resolves to, before any I/O happens.
#[derive(Clone, Debug)]
pub enum DataSource {
	/// A dataset supplied directly; wins over the URL.
	Inline(ClaimData),
	/// A JSON resource to fetch.
	Remote(String),
}

/// Resolve the configured source. With neither an inline dataset nor a URL
/// this is a fatal configuration error, raised before anything is drawn.
pub fn data_source(config: &ArcDiagramConfig) -> Result<DataSource, ArcDiagramError> {
	if let Some(data) = &config.data {
		Ok(DataSource::Inline(data.clone()))
	} else if let Some(url) = &config.claims_url {
		Ok(DataSource::Remote(url.clone()))
	} else {
		Err(ArcDiagramError::Configuration)
	}
}

/// Obtain the dataset, fetching when only a URL is configured. Fetch and
/// decode failures surface as-is; there are no retries.
pub async fn acquire(config: &ArcDiagramConfig) -> Result<ClaimData, ArcDiagramError> {
	match data_source(config)? {
		DataSource::Inline(data) => Ok(data),
		DataSource::Remote(url) => fetch_claims(&url).await,
	}
}

/// Decode a dataset from a JSON document. Absent `nodes`/`edges` arrays
/// default to empty.
pub fn parse_claims(json: &str) -> Result<ClaimData, ArcDiagramError> {
	serde_json::from_str(json).map_err(|err| ArcDiagramError::DataAcquisition(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_claims(url: &str) -> Result<ClaimData, ArcDiagramError> {
	let response = gloo_net::http::Request::get(url)
		.send()
		.await
		.map_err(|err| ArcDiagramError::DataAcquisition(err.to_string()))?;
	response
		.json::<ClaimData>()
		.await
		.map_err(|err| ArcDiagramError::DataAcquisition(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_claims(url: &str) -> Result<ClaimData, ArcDiagramError> {
	Err(ArcDiagramError::DataAcquisition(format!(
		"remote fetch is only available in the browser: {url}"
	)))
}
