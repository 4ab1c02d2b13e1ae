use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The canvas' animation-frame loop and its window `resize` listener.
///
/// The frame callback reschedules itself through its own cell, so the loop
/// keeps itself alive until [`FrameLoop::stop`] takes both closures out.
#[derive(Clone, Default)]
pub struct FrameLoop {
	tick: Callback,
	on_resize: Callback,
	frame: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_running(&self) -> bool {
		self.tick.borrow().is_some()
	}

	/// Registers `on_resize` and starts calling `on_frame` once per frame.
	/// Does nothing if already running.
	pub fn start(
		&self,
		window: &Window,
		mut on_frame: impl FnMut() + 'static,
		on_resize: impl FnMut() + 'static,
	) {
		if self.is_running() {
			return;
		}

		let resize = Closure::<dyn FnMut()>::new(on_resize);
		if let Err(err) = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref()) {
			log::warn!("resize listener not registered: {err:?}");
		}
		*self.on_resize.borrow_mut() = Some(resize);

		let (tick, frame) = (self.tick.clone(), self.frame.clone());
		*self.tick.borrow_mut() = Some(Closure::new(move || {
			on_frame();
			let next = match (web_sys::window(), tick.borrow().as_ref()) {
				(Some(win), Some(cb)) => win.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
				_ => None,
			};
			frame.set(next);
		}));
		if let Some(ref cb) = *self.tick.borrow() {
			self.frame
				.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	}

	/// Cancels the pending frame, removes the resize listener and drops both
	/// closures.
	pub fn stop(&self) {
		let window = web_sys::window();
		if let (Some(id), Some(win)) = (self.frame.take(), window.as_ref()) {
			let _ = win.cancel_animation_frame(id);
		}
		if let Some(cb) = self.on_resize.borrow_mut().take() {
			if let Some(win) = window.as_ref() {
				let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		self.tick.borrow_mut().take();
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use wasm_bindgen_test::*;
	use web_sys::Event;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn fire_resize(window: &Window) {
		let event = Event::new("resize").expect("resize event");
		window.dispatch_event(&event).expect("dispatch resize");
	}

	#[wasm_bindgen_test]
	fn stop_detaches_listener_and_frees_callbacks() {
		let window = web_sys::window().expect("browser window");
		let frames = Rc::new(Cell::new(0));
		let resizes = Rc::new(Cell::new(0));

		let frame_loop = FrameLoop::new();
		let (f, r) = (frames.clone(), resizes.clone());
		frame_loop.start(&window, move || f.set(f.get() + 1), move || r.set(r.get() + 1));
		assert!(frame_loop.is_running());

		fire_resize(&window);
		assert_eq!(resizes.get(), 1);

		frame_loop.stop();
		assert!(!frame_loop.is_running());

		fire_resize(&window);
		assert_eq!(resizes.get(), 1);
		assert_eq!(Rc::strong_count(&frames), 1);
		assert_eq!(Rc::strong_count(&resizes), 1);
	}

	#[wasm_bindgen_test]
	fn second_start_keeps_one_listener() {
		let window = web_sys::window().expect("browser window");
		let resizes = Rc::new(Cell::new(0));

		let frame_loop = FrameLoop::new();
		for _ in 0..2 {
			let r = resizes.clone();
			frame_loop.start(&window, || {}, move || r.set(r.get() + 1));
		}
		fire_resize(&window);
		assert_eq!(resizes.get(), 1);

		frame_loop.stop();
	}
}
