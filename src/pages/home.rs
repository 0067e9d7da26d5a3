use leptos::prelude::*;

use crate::components::arc_diagram::{
	ArcDiagramCanvas, ArcDiagramConfig, ClaimData, ClaimEdge, ClaimNode,
};

const CATEGORIES: &[&str] = &["Economy", "Immigration", "Trade", "Health", "Elections"];
const LOCATIONS: &[&str] = &["Rally", "Interview", "Tweet", "Speech", "Press briefing"];

/// Generate deterministic sample claims spread over a year.
fn generate_sample_data(n: usize) -> ClaimData {
	let nodes: Vec<ClaimNode> = (0..n)
		.map(|i| ClaimNode {
			id: i.to_string(),
			t: i as f64,
			claim: Some(format!("Sample claim #{i}")),
			date: Some(format!("2018-{:02}-{:02}", 1 + i % 12, 1 + i % 28)),
			category: Some(CATEGORIES[i % CATEGORIES.len()].to_string()),
			pinocchios: Some((1 + i % 4) as f64),
			location: Some(LOCATIONS[i % LOCATIONS.len()].to_string()),
			analysis: Some(format!(
				"Repetition {} of a claim that has been fact-checked before. \
				 The underlying figures do not support the stated conclusion.",
				i / CATEGORIES.len() + 1
			)),
		})
		.collect();

	// Link each claim back to an earlier one, pseudo-randomly.
	let edges: Vec<ClaimEdge> = (1..n)
		.map(|i| {
			let target = (rand_simple(i) * (i as f64)) as usize;
			ClaimEdge {
				source: i.to_string(),
				target: target.to_string(),
			}
		})
		.collect();

	ClaimData { nodes, edges }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = Signal::derive(move || ArcDiagramConfig {
		data: Some(generate_sample_data(120)),
		..Default::default()
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="arc-diagram-page">
				<h1>"Claim Arc Diagram"</h1>
				<p class="subtitle">"Hover a point to highlight its repetitions."</p>
				<ArcDiagramCanvas config=config />
			</div>
		</ErrorBoundary>
	}
}
