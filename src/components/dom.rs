//! Thin lookups over the page document plus an owned event listener.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::{HostError, HostResult};

pub fn window() -> HostResult<Window> {
	web_sys::window().ok_or(HostError::NoWindow)
}

pub fn document() -> HostResult<Document> {
	window()?.document().ok_or(HostError::NoDocument)
}

/// Resolve an element by id and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(id: &str, kind: &'static str) -> HostResult<T> {
	document()?
		.get_element_by_id(id)
		.ok_or_else(|| HostError::MissingElement(format!("#{}", id)))?
		.dyn_into::<T>()
		.map_err(|_| HostError::WrongElementType(id.to_string(), kind))
}

pub fn query(selector: &str) -> HostResult<Element> {
	document()?
		.query_selector(selector)?
		.ok_or_else(|| HostError::MissingElement(selector.to_string()))
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> HostResult<Vec<Element>> {
	collect_elements(root.query_selector_all(selector)?)
}

pub fn query_all(selector: &str) -> HostResult<Vec<Element>> {
	collect_elements(document()?.query_selector_all(selector)?)
}

fn collect_elements(list: web_sys::NodeList) -> HostResult<Vec<Element>> {
	Ok((0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}

/// An event listener that is removed from its target when dropped.
pub struct EventListener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
	pub fn new(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> HostResult<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event,
			callback,
		})
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}
