use rand::Rng;

use super::types::{Link, Particle};
use crate::config::FieldConfig;

/// Link stroke opacity at full strength.
pub const LINK_ALPHA: f64 = 0.3;

/// Opacity of the link between two particles `distance` apart.
///
/// Falls linearly from [`LINK_ALPHA`] at zero distance to 0 at `max_distance`
/// and stays 0 beyond it.
pub fn link_opacity(distance: f64, max_distance: f64) -> f64 {
	if distance >= max_distance {
		return 0.0;
	}
	(1.0 - distance / max_distance) * LINK_ALPHA
}

/// Sparse ambient particle field. Particles drift at constant speed, bounce
/// off the canvas edges and are linked to neighbours within reach.
pub struct BackgroundField {
	particles: Vec<Particle>,
	config: FieldConfig,
	pub width: f64,
	pub height: f64,
}

impl BackgroundField {
	pub fn new<R: Rng + ?Sized>(config: FieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
		let count = Self::node_count(&config, width, height);
		let radius_span = config.max_radius - config.min_radius;
		let particles = (0..count)
			.map(|_| Particle {
				x: rng.random::<f64>() * width,
				y: rng.random::<f64>() * height,
				vx: (rng.random::<f64>() - 0.5) * 2.0 * config.max_speed,
				vy: (rng.random::<f64>() - 0.5) * 2.0 * config.max_speed,
				radius: rng.random::<f64>() * radius_span + config.min_radius,
			})
			.collect();

		Self {
			particles,
			config,
			width,
			height,
		}
	}

	/// One particle per `area_per_node` px² of canvas, rounded down.
	pub fn node_count(config: &FieldConfig, width: f64, height: f64) -> usize {
		let area = width.max(0.0) * height.max(0.0);
		(area / config.area_per_node).floor() as usize
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Every unordered pair closer than the link distance.
	pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
		let max = self.config.link_distance;
		let nodes = &self.particles;
		(0..nodes.len()).flat_map(move |a| {
			(a + 1..nodes.len()).filter_map(move |b| {
				let (dx, dy) = (nodes[a].x - nodes[b].x, nodes[a].y - nodes[b].y);
				let distance = (dx * dx + dy * dy).sqrt();
				(distance < max).then(|| Link {
					a,
					b,
					opacity: link_opacity(distance, max),
				})
			})
		})
	}

	/// Advance every particle by its velocity and bounce it off the edges.
	pub fn step(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			(p.x, p.vx) = bounce(p.x, p.vx, w);
			(p.y, p.vy) = bounce(p.y, p.vy, h);
		}
	}

	/// Only the bounds change; particles keep their positions and bounce back
	/// in if the surface shrank under them.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Move along one axis and reflect off `[0, limit]`.
///
/// A coordinate that starts inside the range is mirrored back across the edge
/// it crossed. One that starts outside (after a resize) is left where it is
/// and only has its velocity pointed back toward the range.
fn bounce(pos: f64, vel: f64, limit: f64) -> (f64, f64) {
	let was_inside = (0.0..=limit).contains(&pos);
	let next = pos + vel;
	if next < 0.0 {
		(if was_inside { -next } else { next }, vel.abs())
	} else if next > limit {
		(if was_inside { 2.0 * limit - next } else { next }, -vel.abs())
	} else {
		(next, vel)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn field(width: f64, height: f64, seed: u64) -> BackgroundField {
		let mut rng = SmallRng::seed_from_u64(seed);
		BackgroundField::new(FieldConfig::default(), width, height, &mut rng)
	}

	#[test]
	fn density_follows_canvas_area() {
		assert_eq!(field(1500.0, 100.0, 1).particles().len(), 10);
		assert_eq!(field(1920.0, 1080.0, 1).particles().len(), 138);
		assert_eq!(field(100.0, 100.0, 1).particles().len(), 0);
		assert_eq!(field(0.0, 900.0, 1).particles().len(), 0);
	}

	#[test]
	fn particles_are_sampled_within_configured_ranges() {
		let f = field(1200.0, 800.0, 7);
		for p in f.particles() {
			assert!((0.0..=1200.0).contains(&p.x));
			assert!((0.0..=800.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
			assert!((1.0..=3.0).contains(&p.radius));
		}
	}

	#[test]
	fn particles_stay_in_bounds_over_many_frames() {
		for seed in 0..8 {
			let mut f = field(600.0, 400.0, seed);
			for _ in 0..5_000 {
				f.step();
				for p in f.particles() {
					assert!((0.0..=600.0).contains(&p.x), "x = {}", p.x);
					assert!((0.0..=400.0).contains(&p.y), "y = {}", p.y);
				}
			}
		}
	}

	#[test]
	fn empty_field_steps_and_links_without_panicking() {
		let mut f = field(10.0, 10.0, 3);
		f.step();
		assert_eq!(f.links().count(), 0);
	}

	#[test]
	fn link_opacity_fades_out_at_max_distance() {
		assert_eq!(link_opacity(0.0, 150.0), LINK_ALPHA);
		assert_eq!(link_opacity(150.0, 150.0), 0.0);
		assert_eq!(link_opacity(400.0, 150.0), 0.0);

		let mut last = f64::INFINITY;
		for d in 0..150 {
			let o = link_opacity(d as f64, 150.0);
			assert!(o < last);
			last = o;
		}
	}

	#[test]
	fn links_only_join_nearby_pairs_once() {
		let f = field(900.0, 600.0, 11);
		let nodes = f.particles();
		for link in f.links() {
			assert!(link.a < link.b);
			let (dx, dy) = (nodes[link.a].x - nodes[link.b].x, nodes[link.a].y - nodes[link.b].y);
			assert!((dx * dx + dy * dy).sqrt() < 150.0);
			assert!(link.opacity > 0.0 && link.opacity <= LINK_ALPHA);
		}
	}

	#[test]
	fn resize_keeps_particles_untouched() {
		let mut f = field(900.0, 600.0, 5);
		let before = f.particles().to_vec();
		f.resize(300.0, 200.0);
		assert_eq!(f.particles(), &before[..]);
		assert_eq!((f.width, f.height), (300.0, 200.0));
	}

	#[test]
	fn stranded_particles_head_back_after_shrink() {
		let mut f = field(900.0, 600.0, 5);
		f.resize(300.0, 200.0);
		let gap = |v: f64, limit: f64| (-v).max(v - limit).max(0.0);
		let before = f.particles().to_vec();
		f.step();
		for (old, p) in before.iter().zip(f.particles()) {
			if old.x > 300.0 {
				assert!(p.vx <= 0.0);
			}
			if old.y > 200.0 {
				assert!(p.vy <= 0.0);
			}
		}
		for _ in 0..100 {
			let before = f.particles().to_vec();
			f.step();
			for (old, p) in before.iter().zip(f.particles()) {
				assert!(gap(p.x, 300.0) <= gap(old.x, 300.0));
				assert!(gap(p.y, 200.0) <= gap(old.y, 200.0));
			}
		}
	}

	#[test]
	fn bounce_mirrors_across_edges() {
		assert_eq!(bounce(0.5, -0.75, 100.0), (0.25, 0.75));
		assert_eq!(bounce(99.5, 0.75, 100.0), (99.75, -0.75));
		assert_eq!(bounce(50.0, 0.25, 100.0), (50.25, 0.25));
		assert_eq!(bounce(150.0, 0.25, 100.0), (150.25, -0.25));
	}
}
