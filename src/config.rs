//! Tunables for the page effects.
//!
//! Everything here has a `Default` matching the landing page's markup and
//! look; the page installer takes a [`PageConfig`] so alternative markup can
//! reuse the effects with different hosts.

/// Ambient background field parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Canvas area (px²) per generated node.
	pub area_per_node: f64,
	/// Nodes closer than this are linked.
	pub link_distance: f64,
	/// Upper bound for each velocity component, in px per frame.
	pub max_speed: f64,
	pub min_radius: f64,
	pub max_radius: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			area_per_node: 15_000.0,
			link_distance: 150.0,
			max_speed: 0.25,
			min_radius: 1.0,
			max_radius: 3.0,
		}
	}
}

/// Pointer-reactive network parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
	pub node_count: usize,
	/// Inclusive range of link draws per node.
	pub min_links: usize,
	pub max_links: usize,
	/// Pointer distance from an anchor under which the node is pulled.
	pub influence_radius: f64,
	/// Fraction of the anchor-to-pointer offset applied at full force.
	pub displacement: f64,
	/// Fraction of the remaining offset recovered per pointer event.
	pub relaxation: f64,
	pub min_radius: f64,
	pub max_radius: f64,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			node_count: 30,
			min_links: 2,
			max_links: 4,
			influence_radius: 150.0,
			displacement: 0.3,
			relaxation: 0.1,
			min_radius: 2.0,
			max_radius: 5.0,
		}
	}
}

/// Viewport visibility options for an intersection trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerConfig {
	pub threshold: f64,
	pub root_margin: &'static str,
}

/// Host identifiers, selectors and timings for every page effect.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
	pub background_canvas_id: &'static str,
	pub network_container_id: &'static str,
	pub menu_toggle: &'static str,
	pub nav_links: &'static str,
	pub nav_link: &'static str,
	pub stats_section: &'static str,
	pub stat_number: &'static str,
	pub fade_targets: &'static str,
	pub anchor_links: &'static str,
	pub counter_duration_ms: u32,
	pub counter_steps: u32,
	pub stats_trigger: TriggerConfig,
	pub fade_trigger: TriggerConfig,
	pub field: FieldConfig,
	pub network: NetworkConfig,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			background_canvas_id: "networkCanvas",
			network_container_id: "mainNetwork",
			menu_toggle: ".mobile-menu-toggle",
			nav_links: ".nav-links",
			nav_link: ".nav-link",
			stats_section: ".stats-section",
			stat_number: ".stat-number",
			fade_targets: ".concept-card, .stat-item",
			anchor_links: "a[href^=\"#\"]",
			counter_duration_ms: 2000,
			counter_steps: 60,
			stats_trigger: TriggerConfig {
				threshold: 0.5,
				root_margin: "0px",
			},
			fade_trigger: TriggerConfig {
				threshold: 0.1,
				root_margin: "0px 0px -100px 0px",
			},
			field: FieldConfig::default(),
			network: NetworkConfig::default(),
		}
	}
}

impl PageConfig {
	/// Milliseconds between counter ticks.
	pub fn counter_interval_ms(&self) -> u32 {
		self.counter_duration_ms / self.counter_steps.max(1)
	}
}
