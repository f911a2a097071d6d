//! Stat counters that count up once their section scrolls into view.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use log::{debug, info};
use web_sys::Element;

use super::dom;
use super::observer::{OnceSet, VisibilityTrigger};
use crate::config::PageConfig;
use crate::error::HostResult;

const SCALES: &[(f64, &str)] = &[
	(1e15, " Quadrillion"),
	(1e9, " Billion"),
	(1e6, " Million"),
	(1e3, "K"),
];

/// Render `num` with the largest magnitude suffix it reaches, rounded half
/// away from zero: `1_500_000.0` becomes `"2 Million"`, `12_400.0` `"12K"`.
pub fn format_number(num: f64) -> String {
	for &(scale, suffix) in SCALES {
		if num >= scale {
			return format!("{:.0}{}", (num / scale).round(), suffix);
		}
	}
	format!("{:.0}", num.round())
}

/// Parse a leading integer the way `parseInt` does: optional whitespace and
/// sign, an optional `0x` prefix switching to hex, then digits up to the first
/// non-digit. `None` if there are no digits.
pub fn parse_target(raw: &str) -> Option<f64> {
	let s = raw.trim_start();
	let (sign, rest) = match s.as_bytes().first() {
		Some(b'-') => (-1.0, &s[1..]),
		Some(b'+') => (1.0, &s[1..]),
		_ => (1.0, s),
	};
	let (radix, rest) = match rest.get(..2) {
		Some("0x" | "0X") => (16, &rest[2..]),
		_ => (10, rest),
	};
	let digits: Vec<u32> = rest.chars().map_while(|c| c.to_digit(radix)).collect();
	if digits.is_empty() {
		return None;
	}
	let value = digits
		.iter()
		.fold(0.0, |acc, &d| acc * f64::from(radix) + f64::from(d));
	Some(sign * value)
}

/// The values shown by one counter, one per tick.
///
/// Each tick adds `target / steps`; intermediate values are floored and the
/// tick that reaches the target shows the target itself and ends the run.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
	target: f64,
	increment: f64,
	current: f64,
	finished: bool,
}

impl CounterAnimation {
	pub fn new(target: f64, steps: u32) -> Self {
		Self {
			target,
			increment: target / f64::from(steps.max(1)),
			current: 0.0,
			finished: false,
		}
	}
}

impl Iterator for CounterAnimation {
	type Item = f64;

	fn next(&mut self) -> Option<f64> {
		if self.finished {
			return None;
		}
		self.current += self.increment;
		if self.current >= self.target {
			self.finished = true;
			Some(self.target)
		} else {
			Some(self.current.floor())
		}
	}
}

/// Counters of the stats section. Dropping this stops any running counts.
pub struct StatCounters {
	_trigger: VisibilityTrigger,
	cancelled: Rc<Cell<bool>>,
}

impl Drop for StatCounters {
	fn drop(&mut self) {
		self.cancelled.set(true);
	}
}

pub fn attach_counters(config: &PageConfig) -> HostResult<StatCounters> {
	let section = dom::query(config.stats_section)?;
	let stats = dom::query_all_in(&section, config.stat_number)?;
	let (steps, interval) = (config.counter_steps, config.counter_interval_ms());
	let cancelled = Rc::new(Cell::new(false));
	let mut started = OnceSet::default();
	info!("stat counters armed for {} elements", stats.len());

	let cancel_flag = cancelled.clone();
	let trigger = VisibilityTrigger::new(vec![section], &config.stats_trigger, move |_, _| {
		for i in claim_unstarted(&mut started, stats.len()) {
			run_counter(stats[i].clone(), steps, interval, cancel_flag.clone());
		}
	})?;

	Ok(StatCounters {
		_trigger: trigger,
		cancelled,
	})
}

/// Indices of the `count` counters not started yet, marking them started.
fn claim_unstarted(started: &mut OnceSet, count: usize) -> Vec<usize> {
	(0..count).filter(|&i| started.mark(i)).collect()
}

fn run_counter(stat: Element, steps: u32, interval_ms: u32, cancelled: Rc<Cell<bool>>) {
	let Some(target) = stat
		.get_attribute("data-target")
		.as_deref()
		.and_then(parse_target)
	else {
		debug!("skipping stat counter without a numeric data-target");
		return;
	};

	spawn_local(async move {
		for value in CounterAnimation::new(target, steps) {
			TimeoutFuture::new(interval_ms).await;
			if cancelled.get() {
				return;
			}
			stat.set_text_content(Some(&format_number(value)));
		}
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn formats_with_magnitude_suffixes() {
		assert_eq!(format_number(0.0), "0");
		assert_eq!(format_number(500.0), "500");
		assert_eq!(format_number(999.0), "999");
		assert_eq!(format_number(1_000.0), "1K");
		assert_eq!(format_number(12_400.0), "12K");
		assert_eq!(format_number(999_999.0), "1000K");
		assert_eq!(format_number(1_500_000.0), "2 Million");
		assert_eq!(format_number(2_500_000_000.0), "3 Billion");
		assert_eq!(format_number(7e15), "7 Quadrillion");
		assert_eq!(format_number(1e18), "1000 Quadrillion");
	}

	#[test]
	fn parses_like_parse_int() {
		assert_eq!(parse_target("1500000"), Some(1_500_000.0));
		assert_eq!(parse_target("  42px"), Some(42.0));
		assert_eq!(parse_target("-7"), Some(-7.0));
		assert_eq!(parse_target("+3"), Some(3.0));
		assert_eq!(parse_target("3.9"), Some(3.0));
		assert_eq!(parse_target(""), None);
		assert_eq!(parse_target("abc"), None);
		assert_eq!(parse_target("-"), None);
		assert_eq!(parse_target("0x1A"), Some(26.0));
		assert_eq!(parse_target("-0x10"), Some(-16.0));
		assert_eq!(parse_target("0X1f"), Some(31.0));
		assert_eq!(parse_target("0x"), None);
		assert_eq!(parse_target("0xZZ"), None);
		assert_eq!(parse_target("007"), Some(7.0));
	}

	#[test]
	fn million_counter_climbs_to_two_million() {
		let values: Vec<f64> = CounterAnimation::new(1_500_000.0, 60).collect();
		assert!(values.len() >= 60 && values.len() <= 61);
		assert!(values.windows(2).all(|w| w[0] < w[1]));
		assert_eq!(values[0], 25_000.0);
		assert_eq!(format_number(values[0]), "25K");
		assert_eq!(format_number(*values.last().unwrap()), "2 Million");
	}

	#[test]
	fn small_counter_ends_on_exact_target() {
		let values: Vec<f64> = CounterAnimation::new(500.0, 60).collect();
		assert!(values.windows(2).all(|w| w[0] < w[1]));
		assert_eq!(format_number(*values.last().unwrap()), "500");
	}

	#[test]
	fn zero_target_finishes_immediately() {
		let mut counter = CounterAnimation::new(0.0, 60);
		assert_eq!(counter.next(), Some(0.0));
		assert_eq!(counter.next(), None);
		assert_eq!(counter.next(), None);
	}

	#[test]
	fn counters_start_once_across_repeated_section_entries() {
		let mut started = OnceSet::default();
		assert_eq!(claim_unstarted(&mut started, 4), vec![0, 1, 2, 3]);
		assert!(claim_unstarted(&mut started, 4).is_empty());
		assert!(claim_unstarted(&mut started, 4).is_empty());
	}

	#[test]
	fn counters_added_later_still_start_once() {
		let mut started = OnceSet::default();
		assert_eq!(claim_unstarted(&mut started, 2), vec![0, 1]);
		assert_eq!(claim_unstarted(&mut started, 3), vec![2]);
		assert!(claim_unstarted(&mut started, 3).is_empty());
	}

	#[test]
	fn zero_steps_jumps_to_target() {
		let values: Vec<f64> = CounterAnimation::new(900.0, 0).collect();
		assert_eq!(values, vec![900.0]);
	}
}
