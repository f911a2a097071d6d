//! Mobile navigation toggle.

use std::cell::Cell;
use std::rc::Rc;

use log::info;
use web_sys::Element;

use super::dom::{self, EventListener};
use crate::config::PageConfig;
use crate::error::HostResult;

/// CSS class marking the open menu on both the toggle and the link list.
pub const ACTIVE_CLASS: &str = "active";

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	pub open: bool,
}

impl MenuState {
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;
		self.open
	}

	pub fn close(&mut self) -> bool {
		self.open = false;
		self.open
	}
}

/// Listeners driving the menu; dropping this detaches them.
pub struct MobileMenu {
	_listeners: Vec<EventListener>,
}

pub fn attach_menu(config: &PageConfig) -> HostResult<MobileMenu> {
	let toggle = dom::query(config.menu_toggle)?;
	let links = dom::query(config.nav_links)?;
	let state = Rc::new(Cell::new(MenuState::default()));

	let (toggle_el, links_el, toggle_state) = (toggle.clone(), links.clone(), state.clone());
	let mut listeners = vec![EventListener::new(&toggle, "click", move |_| {
		let mut menu = toggle_state.get();
		let open = menu.toggle();
		toggle_state.set(menu);
		apply(open, &toggle_el, &links_el);
	})?];

	for link in dom::query_all(config.nav_link)? {
		let (toggle_el, links_el, link_state) = (toggle.clone(), links.clone(), state.clone());
		listeners.push(EventListener::new(&link, "click", move |_| {
			let mut menu = link_state.get();
			let open = menu.close();
			link_state.set(menu);
			apply(open, &toggle_el, &links_el);
		})?);
	}

	info!("mobile menu attached with {} nav links", listeners.len() - 1);
	Ok(MobileMenu {
		_listeners: listeners,
	})
}

fn apply(open: bool, toggle: &Element, links: &Element) {
	for el in [links, toggle] {
		let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, open);
	}
}
