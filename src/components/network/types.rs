/// A drifting point in the background field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
}

/// A node of the interactive network. `connections` index into the owning
/// network's node list and never point back at the node itself.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
	pub x: f64,
	pub y: f64,
	pub base_x: f64,
	pub base_y: f64,
	pub radius: f64,
	pub connections: Vec<usize>,
	pub phase: f64,
}

/// A proximity link between two background particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	pub opacity: f64,
}

/// A directed network edge with the current position of its travelling pulse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	pub source: usize,
	pub target: usize,
	pub progress: f64,
}
