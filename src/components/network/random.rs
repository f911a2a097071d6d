use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A small generator seeded from the browser's `Math.random`.
pub fn browser_rng() -> SmallRng {
	let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
	let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
	SmallRng::seed_from_u64(hi << 32 | lo)
}
