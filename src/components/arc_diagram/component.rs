use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::config::ArcDiagramConfig;
use super::render::{self, Scene};
use super::state::{ArcDiagramState, Highlight, InteractionSurface};
use super::tooltip::{TooltipContent, TooltipElement};

/// Canvas-and-DOM backend for the hover machine: repaints the scene on
/// highlight changes and moves the body-attached tooltip element.
struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
	scene: Scene,
	tooltip: TooltipElement,
}

impl InteractionSurface for CanvasSurface {
	fn apply_highlight(&mut self, highlight: &Highlight) {
		render::render(&self.scene, Some(highlight), &self.ctx);
	}

	fn clear_highlight(&mut self) {
		render::render(&self.scene, None, &self.ctx);
	}

	fn show_tooltip(&mut self, content: &TooltipContent, x: f64, y: f64) {
		self.tooltip.show(content, x, y);
	}

	fn hide_tooltip(&mut self) {
		self.tooltip.hide();
	}
}

/// Draws one circular arc diagram into a canvas sized from the config.
///
/// Data acquisition is the only suspending step; layout, filtering, and the
/// initial draw then run as one unit. A configuration without a dataset or
/// URL, or a failed fetch, is fatal to this instance: the error is logged
/// and nothing is drawn. Re-running with a changed config lets both runs
/// proceed independently (last drawn wins; the superseded tooltip element
/// stays behind, hidden).
#[component]
pub fn ArcDiagramCanvas(#[prop(into)] config: Signal<ArcDiagramConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ArcDiagramState>>> = Rc::new(RefCell::new(None));
	let surface: Rc<RefCell<Option<CanvasSurface>>> = Rc::new(RefCell::new(None));
	let (state_init, surface_init) = (state.clone(), surface.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let cfg = config.get();
		canvas.set_width(cfg.width as u32);
		canvas.set_height(cfg.height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let (state_load, surface_load) = (state_init.clone(), surface_init.clone());
		wasm_bindgen_futures::spawn_local(async move {
			let diagram = match ArcDiagramState::init(&cfg).await {
				Ok(diagram) => diagram,
				Err(err) => {
					log::error!("arc diagram init failed: {err}");
					return;
				}
			};
			let Some(tooltip) = TooltipElement::mount() else {
				log::error!("arc diagram: no document body for the tooltip");
				return;
			};

			let scene = Scene::build(&diagram);
			let mut surface = CanvasSurface {
				ctx,
				scene,
				tooltip,
			};
			// Initial draw, before any hover marks exist.
			surface.clear_highlight();
			*state_load.borrow_mut() = Some(diagram);
			*surface_load.borrow_mut() = Some(surface);
		});
	});

	let (state_mm, surface_mm) = (state.clone(), surface.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let (mut state, mut surface) = (state_mm.borrow_mut(), surface_mm.borrow_mut());
		let (Some(state), Some(surface)) = (state.as_mut(), surface.as_mut()) else {
			return;
		};

		let hit = state.node_at_position(x, y).map(|node| node.id.clone());
		match hit {
			Some(id) if state.hovered() != Some(id.as_str()) => {
				// The tooltip anchors to the viewport, like the element.
				let pointer = (ev.client_x() as f64, ev.client_y() as f64);
				state.pointer_enter(&id, pointer, surface);
			}
			Some(_) => {}
			None => state.pointer_leave(surface),
		}
	};

	let (state_ml, surface_ml) = (state.clone(), surface.clone());
	let on_mouseleave = move |_: MouseEvent| {
		let (mut state, mut surface) = (state_ml.borrow_mut(), surface_ml.borrow_mut());
		if let (Some(state), Some(surface)) = (state.as_mut(), surface.as_mut()) {
			state.pointer_leave(surface);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="arc-diagram-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}
