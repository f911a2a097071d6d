//! Smooth in-page anchor scrolling and fade-in on first appearance.

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{
	Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom::{self, EventListener};
use super::observer::VisibilityTrigger;
use crate::config::PageConfig;
use crate::error::{HostError, HostResult};

const HIDDEN_STYLE: &[(&str, &str)] = &[
	("opacity", "0"),
	("transform", "translateY(30px)"),
	("transition", "opacity 0.6s ease, transform 0.6s ease"),
];
const SHOWN_STYLE: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// The selector an in-page link points at: `"#pricing"` for `href="#pricing"`.
/// A bare `#` or anything not starting with `#` has no target.
pub fn anchor_selector(href: &str) -> Option<&str> {
	(href.len() > 1 && href.starts_with('#')).then_some(href)
}

pub struct SmoothScroll {
	_listeners: Vec<EventListener>,
}

pub fn attach_smooth_scroll(config: &PageConfig) -> HostResult<SmoothScroll> {
	let anchors = dom::query_all(config.anchor_links)?;
	let mut listeners = Vec::with_capacity(anchors.len());
	for anchor in anchors {
		let link = anchor.clone();
		listeners.push(EventListener::new(&anchor, "click", move |ev| {
			ev.prevent_default();
			let href = link.get_attribute("href").unwrap_or_default();
			if let Some(target) = anchor_selector(&href).and_then(resolve) {
				let options = ScrollIntoViewOptions::new();
				options.set_behavior(ScrollBehavior::Smooth);
				options.set_block(ScrollLogicalPosition::Start);
				target.scroll_into_view_with_scroll_into_view_options(&options);
			}
		})?);
	}
	info!("smooth scroll attached to {} anchors", listeners.len());
	Ok(SmoothScroll {
		_listeners: listeners,
	})
}

/// `None` both for no match and for selectors the document rejects.
fn resolve(selector: &str) -> Option<Element> {
	dom::document().ok()?.query_selector(selector).ok().flatten()
}

pub struct FadeIn {
	_trigger: VisibilityTrigger,
}

/// Hide every fade target and reveal each one the first time it scrolls into
/// view. Fails when nothing on the page matches.
pub fn attach_fade_in(config: &PageConfig) -> HostResult<FadeIn> {
	let targets = dom::query_all(config.fade_targets)?;
	if targets.is_empty() {
		return Err(HostError::MissingElement(config.fade_targets.to_string()));
	}
	for target in &targets {
		set_styles(target, HIDDEN_STYLE);
	}

	let count = targets.len();
	let trigger = VisibilityTrigger::new(targets, &config.fade_trigger, |index, el| {
		debug!("revealing fade-in target {}", index);
		set_styles(el, SHOWN_STYLE);
	})?;
	info!("fade-in armed for {} elements", count);
	Ok(FadeIn { _trigger: trigger })
}

fn set_styles(el: &Element, styles: &[(&str, &str)]) {
	let Some(el) = el.dyn_ref::<HtmlElement>() else {
		return;
	};
	let style = el.style();
	for (name, value) in styles {
		let _ = style.set_property(name, value);
	}
}
