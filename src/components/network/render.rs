//! Canvas drawing for the node mesh.
//!
//! Rendering is a separate pass over the field data, driven once per frame:
//! clear the surface, fill the particles, then stroke the proximity links.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{ParticleField, Viewport};
use super::links;
use super::theme::ResolvedTheme;

/// Draw one frame.
pub fn render(
	ctx: &CanvasRenderingContext2d,
	field: &ParticleField,
	viewport: Viewport,
	link_threshold: f64,
	theme: &ResolvedTheme,
) {
	ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
	draw_particles(ctx, field, theme);
	draw_links(ctx, field, link_threshold, theme);
}

fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField, theme: &ResolvedTheme) {
	ctx.set_fill_style_str(&theme.node_color.to_css());

	for p in field.particles() {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_links(
	ctx: &CanvasRenderingContext2d,
	field: &ParticleField,
	threshold: f64,
	theme: &ResolvedTheme,
) {
	let color = theme.link_color;
	ctx.set_line_width(theme.link_width);

	links::visit_links(field.particles(), threshold, |seg| {
		ctx.set_stroke_style_str(&color.with_alpha(seg.alpha * color.a).to_css());
		ctx.begin_path();
		ctx.move_to(seg.x1, seg.y1);
		ctx.line_to(seg.x2, seg.y2);
		ctx.stroke();
	});
}
