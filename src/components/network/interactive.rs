use std::f64::consts::TAU;

use rand::Rng;

use super::types::{Edge, NetworkNode};
use crate::config::NetworkConfig;

const EDGE_PULSE_SPEED: f64 = 0.03;
const NODE_PULSE_SPEED: f64 = 0.02;
/// Extra core radius at the peak of a node's pulse.
const NODE_PULSE_GROWTH: f64 = 2.0;

/// Pull factor for a pointer `distance` away from an anchor, or `None` when
/// the pointer is out of reach and the node should relax instead.
pub fn pointer_force(distance: f64, radius: f64) -> Option<f64> {
	(distance < radius).then(|| (radius - distance) / radius)
}

/// Fixed-size node graph that leans toward the pointer and carries light
/// pulses along its edges.
pub struct InteractiveNetwork {
	nodes: Vec<NetworkNode>,
	config: NetworkConfig,
	pub width: f64,
	pub height: f64,
	/// Frames rendered so far.
	pub time: u64,
}

impl InteractiveNetwork {
	pub fn new<R: Rng + ?Sized>(
		config: NetworkConfig,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let radius_span = config.max_radius - config.min_radius;
		// Current and anchor positions are drawn independently, so nodes start
		// off their anchors and settle onto them as the pointer moves.
		let mut nodes: Vec<NetworkNode> = (0..config.node_count)
			.map(|_| NetworkNode {
				x: rng.random::<f64>() * width,
				y: rng.random::<f64>() * height,
				base_x: rng.random::<f64>() * width,
				base_y: rng.random::<f64>() * height,
				radius: rng.random::<f64>() * radius_span + config.min_radius,
				connections: Vec::new(),
				phase: rng.random::<f64>() * TAU,
			})
			.collect();

		let count = nodes.len();
		if count > 0 {
			let (lo, hi) = (config.min_links, config.max_links.max(config.min_links));
			for (i, node) in nodes.iter_mut().enumerate() {
				// Repeated draws are dropped, not redrawn.
				for _ in 0..rng.random_range(lo..=hi) {
					let target = rng.random_range(0..count);
					if target != i && !node.connections.contains(&target) {
						node.connections.push(target);
					}
				}
			}
		}

		Self {
			nodes,
			config,
			width,
			height,
			time: 0,
		}
	}

	pub fn nodes(&self) -> &[NetworkNode] {
		&self.nodes
	}

	/// React to the pointer at canvas coordinates `(px, py)`.
	///
	/// Nodes whose anchor is within reach are placed between anchor and
	/// pointer; the rest close a fixed fraction of the gap to their anchor.
	pub fn pointer_moved(&mut self, px: f64, py: f64) {
		let NetworkConfig {
			influence_radius,
			displacement,
			relaxation,
			..
		} = self.config;

		for node in &mut self.nodes {
			let (dx, dy) = (px - node.base_x, py - node.base_y);
			let distance = (dx * dx + dy * dy).sqrt();

			match pointer_force(distance, influence_radius) {
				Some(force) => {
					node.x = node.base_x + dx * force * displacement;
					node.y = node.base_y + dy * force * displacement;
				}
				None => {
					node.x += (node.base_x - node.x) * relaxation;
					node.y += (node.base_y - node.y) * relaxation;
				}
			}
		}
	}

	pub fn tick(&mut self) {
		self.time += 1;
	}

	/// Position of the pulse on edges leaving node `source`, in `[0, 1]`.
	pub fn edge_progress(&self, source: usize) -> f64 {
		((self.time as f64 * EDGE_PULSE_SPEED + source as f64).sin() + 1.0) / 2.0
	}

	/// Current pulse of a node, in `[0, 1]`.
	pub fn node_pulse(&self, node: &NetworkNode) -> f64 {
		((self.time as f64 * NODE_PULSE_SPEED + node.phase).sin() + 1.0) / 2.0
	}

	/// Core radius of a node this frame.
	pub fn node_size(&self, node: &NetworkNode) -> f64 {
		node.radius + self.node_pulse(node) * NODE_PULSE_GROWTH
	}

	pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
		let count = self.nodes.len();
		self.nodes.iter().enumerate().flat_map(move |(source, node)| {
			let progress = self.edge_progress(source);
			node.connections
				.iter()
				.filter(move |&&target| target < count)
				.map(move |&target| Edge {
					source,
					target,
					progress,
				})
		})
	}

	/// Anchors are kept as generated, even if they now fall outside.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
