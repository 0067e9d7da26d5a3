use std::collections::HashSet;

use super::types::{ClaimEdge, ClaimNode};

/// Declarative visibility criteria. A node is kept iff it satisfies every
/// field that is set; unset fields impose no constraint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClaimFilter {
	/// Exact category match.
	pub category: Option<String>,
	/// Exact rating match.
	pub pinocchios: Option<f64>,
	/// Inclusive lower date bound, compared lexicographically.
	pub start: Option<String>,
	/// Inclusive upper date bound.
	pub end: Option<String>,
}

impl ClaimFilter {
	pub fn keeps(&self, node: &ClaimNode) -> bool {
		if let Some(category) = &self.category {
			if node.category.as_deref() != Some(category.as_str()) {
				return false;
			}
		}
		if let Some(pinocchios) = self.pinocchios {
			if node.pinocchios != Some(pinocchios) {
				return false;
			}
		}
		// Undated nodes pass the date bounds untested.
		if let (Some(start), Some(date)) = (&self.start, &node.date) {
			if date < start {
				return false;
			}
		}
		if let (Some(end), Some(date)) = (&self.end, &node.date) {
			if date > end {
				return false;
			}
		}
		true
	}

	/// Ids of the nodes satisfying the criteria.
	pub fn kept_ids(&self, nodes: &[ClaimNode]) -> HashSet<String> {
		nodes
			.iter()
			.filter(|node| self.keeps(node))
			.map(|node| node.id.clone())
			.collect()
	}
}

/// The node and edge subsets surviving the filter. Filtering is advisory:
/// criteria that match nothing leave the full sets visible rather than
/// producing an empty diagram.
pub fn visible_sets(
	filter: &ClaimFilter,
	nodes: &[ClaimNode],
	edges: &[ClaimEdge],
) -> (Vec<ClaimNode>, Vec<ClaimEdge>) {
	let kept = filter.kept_ids(nodes);
	if kept.is_empty() {
		return (nodes.to_vec(), edges.to_vec());
	}
	let nodes = nodes
		.iter()
		.filter(|node| kept.contains(&node.id))
		.cloned()
		.collect();
	let edges = edges
		.iter()
		.filter(|edge| kept.contains(&edge.source) && kept.contains(&edge.target))
		.cloned()
		.collect();
	(nodes, edges)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, category: Option<&str>, pinocchios: Option<f64>, date: Option<&str>) -> ClaimNode {
		ClaimNode {
			id: id.into(),
			t: 0.0,
			claim: None,
			date: date.map(Into::into),
			category: category.map(Into::into),
			pinocchios,
			location: None,
			analysis: None,
		}
	}

	fn edge(source: &str, target: &str) -> ClaimEdge {
		ClaimEdge {
			source: source.into(),
			target: target.into(),
		}
	}

	#[test]
	fn unset_fields_impose_no_constraint() {
		let filter = ClaimFilter::default();
		assert!(filter.keeps(&node("a", None, None, None)));
	}

	#[test]
	fn category_is_an_exact_match() {
		let filter = ClaimFilter {
			category: Some("Economy".into()),
			..Default::default()
		};
		assert!(filter.keeps(&node("a", Some("Economy"), None, None)));
		assert!(!filter.keeps(&node("b", Some("Trade"), None, None)));
		assert!(!filter.keeps(&node("c", None, None, None)));
	}

	#[test]
	fn pinocchios_is_an_exact_match() {
		let filter = ClaimFilter {
			pinocchios: Some(4.0),
			..Default::default()
		};
		assert!(filter.keeps(&node("a", None, Some(4.0), None)));
		assert!(!filter.keeps(&node("b", None, Some(3.0), None)));
		assert!(!filter.keeps(&node("c", None, None, None)));
	}

	#[test]
	fn date_bounds_are_inclusive() {
		let filter = ClaimFilter {
			start: Some("2018-01-01".into()),
			end: Some("2018-12-31".into()),
			..Default::default()
		};
		assert!(filter.keeps(&node("a", None, None, Some("2018-01-01"))));
		assert!(filter.keeps(&node("b", None, None, Some("2018-12-31"))));
		assert!(!filter.keeps(&node("c", None, None, Some("2017-12-31"))));
		assert!(!filter.keeps(&node("d", None, None, Some("2019-01-01"))));
	}

	#[test]
	fn undated_nodes_pass_date_bounds() {
		let filter = ClaimFilter {
			start: Some("2018-01-01".into()),
			..Default::default()
		};
		assert!(filter.keeps(&node("a", None, None, None)));
	}

	#[test]
	fn filtering_is_idempotent() {
		let nodes = vec![
			node("a", Some("Economy"), None, None),
			node("b", Some("Trade"), None, None),
			node("c", Some("Economy"), None, None),
		];
		let edges = vec![edge("a", "c"), edge("a", "b")];
		let filter = ClaimFilter {
			category: Some("Economy".into()),
			..Default::default()
		};

		let (once_nodes, once_edges) = visible_sets(&filter, &nodes, &edges);
		let (twice_nodes, twice_edges) = visible_sets(&filter, &once_nodes, &once_edges);
		let ids = |nodes: &[ClaimNode]| nodes.iter().map(|n| n.id.clone()).collect::<Vec<_>>();
		assert_eq!(ids(&once_nodes), ids(&twice_nodes));
		assert_eq!(once_edges, twice_edges);
	}

	#[test]
	fn edges_need_both_endpoints_kept() {
		let nodes = vec![
			node("a", Some("Economy"), None, None),
			node("b", Some("Trade"), None, None),
			node("c", Some("Economy"), None, None),
		];
		let edges = vec![edge("a", "c"), edge("a", "b")];
		let filter = ClaimFilter {
			category: Some("Economy".into()),
			..Default::default()
		};

		let (kept_nodes, kept_edges) = visible_sets(&filter, &nodes, &edges);
		assert_eq!(kept_nodes.len(), 2);
		assert_eq!(kept_edges, vec![edge("a", "c")]);
	}

	#[test]
	fn empty_kept_set_falls_back_to_full_sets() {
		let nodes = vec![
			node("a", Some("Economy"), None, None),
			node("b", Some("Trade"), None, None),
		];
		let edges = vec![edge("a", "b")];
		let filter = ClaimFilter {
			category: Some("Health".into()),
			..Default::default()
		};

		let (kept_nodes, kept_edges) = visible_sets(&filter, &nodes, &edges);
		assert_eq!(kept_nodes.len(), 2);
		assert_eq!(kept_edges.len(), 1);
	}

	#[test]
	fn empty_criteria_over_empty_nodes_keeps_nothing_matched() {
		// No nodes at all: the fallback also yields empty sets.
		let (kept_nodes, kept_edges) = visible_sets(&ClaimFilter::default(), &[], &[]);
		assert!(kept_nodes.is_empty());
		assert!(kept_edges.is_empty());
	}
}
