use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::background::BackgroundField;
use super::host::Scene;
use super::interactive::InteractiveNetwork;
use super::types::NetworkNode;

const GREEN: &str = "0, 255, 159";
const CYAN: &str = "0, 212, 255";
const CORE_COLOR: &str = "#00ff9f";
const PULSE_RADIUS: f64 = 8.0;

fn rgba(rgb: &str, alpha: f64) -> String {
	format!("rgba({}, {})", rgb, alpha)
}

impl Scene for BackgroundField {
	fn frame(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
		draw_field(self, ctx)?;
		self.step();
		Ok(())
	}

	fn resize(&mut self, width: f64, height: f64) {
		BackgroundField::resize(self, width, height);
	}
}

impl Scene for InteractiveNetwork {
	fn frame(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
		self.tick();
		draw_network(self, ctx)
	}

	fn resize(&mut self, width: f64, height: f64) {
		InteractiveNetwork::resize(self, width, height);
	}
}

pub fn draw_field(field: &BackgroundField, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);

	let particles = field.particles();
	ctx.set_line_width(0.5);
	for link in field.links() {
		let (a, b) = (&particles[link.a], &particles[link.b]);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.set_stroke_style_str(&rgba(GREEN, link.opacity));
		ctx.stroke();
	}

	// The glow runs out to 3x the radius but is clipped by the node's own arc.
	for p in particles {
		let gradient = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, p.radius * 3.0)?;
		gradient.add_color_stop(0.0, &rgba(GREEN, 0.8))?;
		gradient.add_color_stop(1.0, &rgba(GREEN, 0.0))?;

		ctx.begin_path();
		ctx.arc(p.x, p.y, p.radius, 0.0, 2.0 * PI)?;
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	}
	Ok(())
}

pub fn draw_network(net: &InteractiveNetwork, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	let background = ctx.create_linear_gradient(0.0, 0.0, net.width, net.height);
	background.add_color_stop(0.0, "rgba(18, 25, 26, 0.95)")?;
	background.add_color_stop(1.0, "rgba(26, 36, 37, 0.95)")?;
	#[allow(deprecated)]
	ctx.set_fill_style(&background);
	ctx.fill_rect(0.0, 0.0, net.width, net.height);

	let nodes = net.nodes();
	for edge in net.edges() {
		draw_edge(ctx, &nodes[edge.source], &nodes[edge.target], edge.progress)?;
	}
	for node in nodes {
		draw_node(ctx, node, net.node_size(node))?;
	}
	Ok(())
}

fn draw_edge(
	ctx: &CanvasRenderingContext2d,
	from: &NetworkNode,
	to: &NetworkNode,
	progress: f64,
) -> Result<(), JsValue> {
	let line = ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
	line.add_color_stop(0.0, &rgba(GREEN, 0.4))?;
	line.add_color_stop(0.5, &rgba(CYAN, 0.6))?;
	line.add_color_stop(1.0, &rgba(GREEN, 0.4))?;

	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	#[allow(deprecated)]
	ctx.set_stroke_style(&line);
	ctx.set_line_width(1.5);
	ctx.stroke();

	let (px, py) = (
		from.x + (to.x - from.x) * progress,
		from.y + (to.y - from.y) * progress,
	);
	let pulse = ctx.create_radial_gradient(px, py, 0.0, px, py, PULSE_RADIUS)?;
	pulse.add_color_stop(0.0, &rgba(GREEN, 0.8))?;
	pulse.add_color_stop(1.0, &rgba(GREEN, 0.0))?;

	ctx.begin_path();
	ctx.arc(px, py, PULSE_RADIUS, 0.0, 2.0 * PI)?;
	#[allow(deprecated)]
	ctx.set_fill_style(&pulse);
	ctx.fill();
	Ok(())
}

fn draw_node(ctx: &CanvasRenderingContext2d, node: &NetworkNode, size: f64) -> Result<(), JsValue> {
	let glow_radius = size * 4.0;
	let glow = ctx.create_radial_gradient(node.x, node.y, 0.0, node.x, node.y, glow_radius)?;
	glow.add_color_stop(0.0, &rgba(GREEN, 0.6))?;
	glow.add_color_stop(0.5, &rgba(CYAN, 0.2))?;
	glow.add_color_stop(1.0, &rgba(GREEN, 0.0))?;

	ctx.begin_path();
	ctx.arc(node.x, node.y, glow_radius, 0.0, 2.0 * PI)?;
	#[allow(deprecated)]
	ctx.set_fill_style(&glow);
	ctx.fill();

	ctx.begin_path();
	ctx.arc(node.x, node.y, size, 0.0, 2.0 * PI)?;
	ctx.set_fill_style_str(CORE_COLOR);
	ctx.fill();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rgba_formats_css_colors() {
		assert_eq!(rgba(GREEN, 0.8), "rgba(0, 255, 159, 0.8)");
		assert_eq!(rgba(CYAN, 0.0), "rgba(0, 212, 255, 0)");
	}
}
