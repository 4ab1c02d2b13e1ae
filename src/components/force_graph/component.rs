use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::frame_loop::FrameLoop;
use super::render;
use super::state::PreviewState;
use super::types::PreviewData;

const FALLBACK_WIDTH: f64 = 640.0;
const FRAME_DT: f32 = 0.016;

/// Canvas that lays out `data` with a force simulation. Vertices can be
/// dragged and pinned; the background pans and the wheel zooms.
///
/// The layout restarts whenever `data` changes.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<PreviewData>,
	#[prop(default = 420.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<PreviewState>>> = Rc::new(RefCell::new(None));
	let frames = FrameLoop::new();

	let teardown = SendWrapper::new((frames.clone(), state.clone()));
	on_cleanup(move || {
		let (frames, state) = &*teardown;
		frames.stop();
		state.borrow_mut().take();
	});

	let state_fx = state.clone();
	Effect::new(move |_| {
		let data = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = fit_canvas(&canvas, height);
		log::debug!(
			"preview rebuilt: {} vertices, {} edges",
			data.vertices.len(),
			data.links.len()
		);
		*state_fx.borrow_mut() = Some(PreviewState::new(&data, w, h));

		if frames.is_running() {
			return;
		}
		let Some(ctx) = context_2d(&canvas) else {
			log::warn!("2d canvas context unavailable; live preview disabled");
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};

		let (state_anim, state_resize) = (state_fx.clone(), state_fx.clone());
		frames.start(
			&window,
			move || {
				if let Some(ref mut s) = *state_anim.borrow_mut() {
					s.tick(FRAME_DT);
					render::render(s, &ctx);
				}
			},
			move || {
				let (nw, nh) = fit_canvas(&canvas, height);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			},
		);
	});

	let pointer = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.press(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_moved(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.release();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.leave();
		}
	};

	let state_wh = state;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y() < 0.0);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; width: 100%; cursor: grab;"
		/>
	}
}

/// Sizes the canvas backing store to its parent's width and returns `(w, h)`.
fn fit_canvas(canvas: &HtmlCanvasElement, height: f64) -> (f64, f64) {
	let width = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(FALLBACK_WIDTH);
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
	(width, height)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}
