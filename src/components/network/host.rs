use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::components::dom::{self, EventListener};
use crate::error::{HostError, HostResult};

/// Something drawn on a canvas once per animation frame.
pub trait Scene: 'static {
	/// Advance and paint one frame.
	fn frame(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue>;
	/// The canvas backing store was resized to `width` × `height` pixels.
	fn resize(&mut self, width: f64, height: f64);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives a [`Scene`] from `requestAnimationFrame` and keeps the canvas
/// pixel size in step with `sizing`'s rendered size.
///
/// The browser suspends animation frames for hidden tabs, so no separate
/// pause handling is needed. The loop runs until [`CanvasHost::stop`] is
/// called or the host is dropped.
pub struct CanvasHost<S: Scene> {
	scene: Rc<RefCell<S>>,
	animate: FrameCallback,
	frame_id: Rc<Cell<Option<i32>>>,
	_resize: EventListener,
}

impl<S: Scene> CanvasHost<S> {
	/// Size the canvas, build the scene for that size and start animating.
	pub fn start(
		canvas: &HtmlCanvasElement,
		sizing: &HtmlElement,
		build: impl FnOnce(f64, f64) -> S,
	) -> HostResult<Self> {
		let window = dom::window()?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(HostError::NoContext)?
			.dyn_into()
			.map_err(|_| HostError::NoContext)?;

		let (w, h) = sync_size(canvas, sizing);
		let scene = Rc::new(RefCell::new(build(w, h)));

		let (scene_resize, canvas_resize, sizing_resize) =
			(scene.clone(), canvas.clone(), sizing.clone());
		let resize = EventListener::new(&window, "resize", move |_| {
			let (nw, nh) = sync_size(&canvas_resize, &sizing_resize);
			scene_resize.borrow_mut().resize(nw, nh);
		})?;

		let animate: FrameCallback = Rc::new(RefCell::new(None));
		let frame_id = Rc::new(Cell::new(None));
		let (scene_anim, animate_inner, id_inner) =
			(scene.clone(), animate.clone(), frame_id.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Err(err) = scene_anim.borrow_mut().frame(&ctx) {
				warn!("canvas frame failed: {:?}", err);
			}
			id_inner.set(None);
			if let Some(ref cb) = *animate_inner.borrow() {
				id_inner.set(request_frame(cb));
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			frame_id.set(request_frame(cb));
		}

		Ok(Self {
			scene,
			animate,
			frame_id,
			_resize: resize,
		})
	}

	pub fn scene(&self) -> Rc<RefCell<S>> {
		self.scene.clone()
	}

	/// Cancel the pending frame and release the frame callback. Idempotent.
	pub fn stop(&self) {
		if let Some(id) = self.frame_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		// Dropping the closure breaks its reference cycle through `animate`.
		self.animate.borrow_mut().take();
	}
}

impl<S: Scene> Drop for CanvasHost<S> {
	fn drop(&mut self) {
		self.stop();
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

/// Copy `sizing`'s rendered size onto the canvas backing store.
fn sync_size(canvas: &HtmlCanvasElement, sizing: &HtmlElement) -> (f64, f64) {
	let (w, h) = (sizing.offset_width().max(0), sizing.offset_height().max(0));
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w as f64, h as f64)
}
