use web_sys::HtmlElement;

use super::types::ClaimNode;

/// Longest analysis excerpt shown before the ellipsis cut.
pub const EXCERPT_LEN: usize = 400;

/// Offset of the tooltip from the pointer, in px, right and down.
pub const POINTER_OFFSET: f64 = 12.0;

/// Rendered tooltip fields with their display fallbacks applied.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
	pub claim: String,
	pub date: String,
	pub category: String,
	pub pinocchios: String,
	pub location: String,
	pub excerpt: String,
}

impl TooltipContent {
	pub fn for_node(node: &ClaimNode) -> Self {
		Self {
			claim: node.claim.clone().unwrap_or_else(|| "(no text)".into()),
			date: node.date.clone().unwrap_or_else(|| "—".into()),
			category: node.category.clone().unwrap_or_else(|| "Misc".into()),
			pinocchios: node
				.pinocchios
				.map(|p| p.to_string())
				.unwrap_or_else(|| "—".into()),
			location: node.location.clone().unwrap_or_else(|| "—".into()),
			excerpt: excerpt(node.analysis.as_deref().unwrap_or("")),
		}
	}

	fn html(&self) -> String {
		format!(
			concat!(
				"<div class=\"claim\">{}</div>",
				"<div class=\"meta\">",
				"<div><strong>Date:</strong> {} <span class=\"badge\">{}</span></div>",
				"<div><strong>Pinocchios:</strong> {} | <strong>Location:</strong> {}</div>",
				"</div>",
				"<div style=\"margin-top:6px\">{}</div>",
			),
			self.claim, self.date, self.category, self.pinocchios, self.location, self.excerpt
		)
	}
}

/// Truncate the analysis to [`EXCERPT_LEN`] characters, marking the cut
/// with an ellipsis. Shorter text passes through unmodified.
pub fn excerpt(analysis: &str) -> String {
	if analysis.chars().count() > EXCERPT_LEN {
		let mut cut: String = analysis.chars().take(EXCERPT_LEN).collect();
		cut.push('…');
		cut
	} else {
		analysis.to_string()
	}
}

/// The tooltip `<div>`, appended to the document body and exclusively owned
/// by one diagram instance. There is no cleanup hook; re-initializing leaves
/// the previous element behind, hidden.
pub struct TooltipElement {
	el: HtmlElement,
}

impl TooltipElement {
	/// Create and attach the tooltip element. `None` outside a document.
	pub fn mount() -> Option<Self> {
		use wasm_bindgen::JsCast;

		let document = web_sys::window()?.document()?;
		let el: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
		el.set_class_name("arc-diagram-tooltip");
		let style = el.style();
		for (name, value) in [
			("position", "fixed"),
			("display", "none"),
			("max-width", "320px"),
			("padding", "8px 10px"),
			("background", "rgba(255, 255, 255, 0.97)"),
			("border", "1px solid #ccc"),
			("border-radius", "4px"),
			("font", "12px/1.4 sans-serif"),
			("pointer-events", "none"),
			("z-index", "10"),
		] {
			let _ = style.set_property(name, value);
		}
		document.body()?.append_child(&el).ok()?;
		Some(Self { el })
	}

	pub fn show(&self, content: &TooltipContent, x: f64, y: f64) {
		self.el.set_inner_html(&content.html());
		let style = self.el.style();
		let _ = style.set_property("left", &format!("{x}px"));
		let _ = style.set_property("top", &format!("{y}px"));
		let _ = style.set_property("display", "block");
	}

	pub fn hide(&self) {
		let _ = self.el.style().set_property("display", "none");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node() -> ClaimNode {
		ClaimNode {
			id: "1".into(),
			t: 0.0,
			claim: None,
			date: None,
			category: None,
			pinocchios: None,
			location: None,
			analysis: None,
		}
	}

	#[test]
	fn fallbacks_apply_to_missing_fields() {
		let content = TooltipContent::for_node(&node());
		assert_eq!(content.claim, "(no text)");
		assert_eq!(content.date, "—");
		assert_eq!(content.category, "Misc");
		assert_eq!(content.pinocchios, "—");
		assert_eq!(content.location, "—");
		assert_eq!(content.excerpt, "");
	}

	#[test]
	fn present_fields_pass_through() {
		let mut n = node();
		n.claim = Some("Largest crowd ever".into());
		n.pinocchios = Some(4.0);
		let content = TooltipContent::for_node(&n);
		assert_eq!(content.claim, "Largest crowd ever");
		assert_eq!(content.pinocchios, "4");
	}

	#[test]
	fn excerpt_cuts_at_exactly_four_hundred_chars() {
		let long = "x".repeat(401);
		let cut = excerpt(&long);
		assert_eq!(cut.chars().count(), EXCERPT_LEN + 1);
		assert!(cut.ends_with('…'));
		assert_eq!(&cut[..EXCERPT_LEN], &long[..EXCERPT_LEN]);
	}

	#[test]
	fn excerpt_keeps_short_text_unmodified() {
		let exact = "y".repeat(400);
		assert_eq!(excerpt(&exact), exact);
		assert_eq!(excerpt("short"), "short");
	}
}
