//! One-shot visibility triggers built on `IntersectionObserver`.

use std::collections::HashSet;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::TriggerConfig;
use crate::error::HostResult;

/// Keys that have already fired.
#[derive(Clone, Debug, Default)]
pub struct OnceSet {
	fired: HashSet<usize>,
}

impl OnceSet {
	/// Record `key`, returning `true` only the first time it is seen.
	pub fn mark(&mut self, key: usize) -> bool {
		self.fired.insert(key)
	}
}

/// Index of `target` in `watched` if this delivery should fire it: the entry
/// is intersecting, the target is one of ours and it has not fired before.
pub fn dispatch<K: PartialEq>(
	watched: &[K],
	fired: &mut OnceSet,
	target: &K,
	intersecting: bool,
) -> Option<usize> {
	if !intersecting {
		return None;
	}
	let index = watched.iter().position(|k| k == target)?;
	fired.mark(index).then_some(index)
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches a fixed list of elements and calls `on_visible` with an element's
/// index the first time it crosses the threshold. Fired elements are
/// unobserved; the observer disconnects when dropped.
pub struct VisibilityTrigger {
	observer: IntersectionObserver,
	_callback: EntryCallback,
}

impl VisibilityTrigger {
	pub fn new(
		targets: Vec<Element>,
		options: &TriggerConfig,
		mut on_visible: impl FnMut(usize, &Element) + 'static,
	) -> HostResult<Self> {
		let watched = targets.clone();
		let mut fired = OnceSet::default();
		let callback: EntryCallback =
			Closure::new(move |entries: Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					let target = entry.target();
					if let Some(index) =
						dispatch(&watched, &mut fired, &target, entry.is_intersecting())
					{
						observer.unobserve(&target);
						on_visible(index, &target);
					}
				}
			});

		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from_f64(options.threshold));
		init.set_root_margin(options.root_margin);
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
		for target in &targets {
			observer.observe(target);
		}

		Ok(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for VisibilityTrigger {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn marks_each_key_once() {
		let mut once = OnceSet::default();
		assert!(once.mark(3));
		assert!(!once.mark(3));
		assert!(once.mark(0));
		assert!(!once.mark(0));
	}

	#[test]
	fn repeated_deliveries_fire_each_target_once() {
		let watched = ["card-a", "card-b", "card-c"];
		let mut fired = OnceSet::default();
		let deliveries = ["card-a", "card-b", "card-a", "card-c", "card-b", "card-a", "card-c"];
		let hits: Vec<usize> = deliveries
			.iter()
			.filter_map(|target| dispatch(&watched, &mut fired, target, true))
			.collect();
		assert_eq!(hits, vec![0, 1, 2]);
	}

	#[test]
	fn non_intersecting_entries_never_fire_or_consume_the_trigger() {
		let watched = ["stats"];
		let mut fired = OnceSet::default();
		assert_eq!(dispatch(&watched, &mut fired, &"stats", false), None);
		assert_eq!(dispatch(&watched, &mut fired, &"stats", false), None);
		assert_eq!(dispatch(&watched, &mut fired, &"stats", true), Some(0));
		assert_eq!(dispatch(&watched, &mut fired, &"stats", true), None);
	}

	#[test]
	fn unknown_targets_are_ignored() {
		let watched = ["card-a", "card-b"];
		let mut fired = OnceSet::default();
		assert_eq!(dispatch(&watched, &mut fired, &"footer", true), None);
		assert_eq!(dispatch(&watched, &mut fired, &"card-b", true), Some(1));
		assert_eq!(dispatch(&watched, &mut fired, &"footer", true), None);
		assert_eq!(dispatch(&watched, &mut fired, &"card-a", true), Some(0));
	}

	#[test]
	fn re_entering_after_leaving_does_not_fire_again() {
		let watched = ["stats"];
		let mut fired = OnceSet::default();
		let events = [true, false, true, false, true];
		let fires = events
			.iter()
			.filter(|&&visible| dispatch(&watched, &mut fired, &"stats", visible).is_some())
			.count();
		assert_eq!(fires, 1);
	}
}
