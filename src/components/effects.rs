use log::debug;

use super::counter::{StatCounters, attach_counters};
use super::menu::{MobileMenu, attach_menu};
use super::network::{BackgroundField, CanvasHost, NetworkHandle, attach_background, attach_network};
use super::scroll::{FadeIn, SmoothScroll, attach_fade_in, attach_smooth_scroll};
use crate::config::PageConfig;
use crate::error::HostResult;

/// Every effect installed on the page. Each one is independent: a missing
/// host element only leaves its own slot empty. Dropping this tears all of
/// them down, canvases first.
pub struct PageEffects {
	background: Option<CanvasHost<BackgroundField>>,
	network: Option<NetworkHandle>,
	_menu: Option<MobileMenu>,
	_counters: Option<StatCounters>,
	_smooth_scroll: Option<SmoothScroll>,
	_fade_in: Option<FadeIn>,
}

impl PageEffects {
	pub fn install(config: &PageConfig) -> Self {
		Self {
			_menu: optional("mobile menu", attach_menu(config)),
			_counters: optional("stat counters", attach_counters(config)),
			background: optional(
				"background field",
				attach_background(config.background_canvas_id, config.field.clone()),
			),
			network: optional(
				"interactive network",
				attach_network(config.network_container_id, config.network.clone()),
			),
			_smooth_scroll: optional("smooth scroll", attach_smooth_scroll(config)),
			_fade_in: optional("fade-in", attach_fade_in(config)),
		}
	}

	/// Halt both canvas animations, leaving the other effects in place.
	pub fn stop_animations(&self) {
		if let Some(background) = &self.background {
			background.stop();
		}
		if let Some(network) = &self.network {
			network.stop();
		}
	}
}

impl Drop for PageEffects {
	fn drop(&mut self) {
		self.stop_animations();
		debug!("page effects disposed");
	}
}

fn optional<T>(name: &str, result: HostResult<T>) -> Option<T> {
	result
		.map_err(|err| debug!("skipping {}: {}", name, err))
		.ok()
}
