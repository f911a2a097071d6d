use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent};

use super::background::BackgroundField;
use super::host::CanvasHost;
use super::interactive::InteractiveNetwork;
use super::random::browser_rng;
use crate::components::dom::{self, EventListener};
use crate::config::{FieldConfig, NetworkConfig};
use crate::error::{HostError, HostResult};

/// Run the ambient field on the existing canvas with id `canvas_id`, sized
/// to the canvas's own rendered size.
pub fn attach_background(
	canvas_id: &str,
	config: FieldConfig,
) -> HostResult<CanvasHost<BackgroundField>> {
	let canvas: HtmlCanvasElement = dom::element_by_id(canvas_id, "canvas")?;
	let sizing: HtmlElement = canvas.clone().into();
	let mut rng = browser_rng();
	let host = CanvasHost::start(&canvas, &sizing, |w, h| {
		BackgroundField::new(config, w, h, &mut rng)
	})?;
	info!(
		"background field started on #{} with {} nodes",
		canvas_id,
		host.scene().borrow().particles().len()
	);
	Ok(host)
}

/// The interactive network together with the canvas it created and its
/// pointer listener. Dropping the handle stops the animation and removes
/// the canvas from its container.
pub struct NetworkHandle {
	_pointer: EventListener,
	host: CanvasHost<InteractiveNetwork>,
	canvas: HtmlCanvasElement,
}

impl NetworkHandle {
	pub fn stop(&self) {
		self.host.stop();
	}
}

impl Drop for NetworkHandle {
	fn drop(&mut self) {
		self.host.stop();
		self.canvas.remove();
	}
}

/// Append a canvas to the element with id `container_id` and run the
/// interactive network on it, sized to the container.
pub fn attach_network(container_id: &str, config: NetworkConfig) -> HostResult<NetworkHandle> {
	let container: HtmlElement = dom::element_by_id(container_id, "html element")?;
	let canvas: HtmlCanvasElement = dom::document()?
		.create_element("canvas")?
		.dyn_into()
		.map_err(|_| HostError::WrongElementType("created element".into(), "canvas"))?;
	container.append_child(&canvas)?;

	let handle = start_network(&canvas, &container, config);
	if handle.is_err() {
		canvas.remove();
	}
	let handle = handle?;
	info!(
		"interactive network started in #{} with {} edges",
		container_id,
		handle.host.scene().borrow().edges().count()
	);
	Ok(handle)
}

fn start_network(
	canvas: &HtmlCanvasElement,
	container: &HtmlElement,
	config: NetworkConfig,
) -> HostResult<NetworkHandle> {
	let mut rng = browser_rng();
	let host = CanvasHost::start(canvas, container, |w, h| {
		InteractiveNetwork::new(config, w, h, &mut rng)
	})?;

	let (scene, target) = (host.scene(), canvas.clone());
	let pointer = EventListener::new(canvas, "mousemove", move |ev| {
		let Ok(ev) = ev.dyn_into::<MouseEvent>() else {
			return;
		};
		let rect = target.get_bounding_client_rect();
		scene.borrow_mut().pointer_moved(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
	})?;

	Ok(NetworkHandle {
		_pointer: pointer,
		host,
		canvas: canvas.clone(),
	})
}
