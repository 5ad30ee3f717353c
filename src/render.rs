use crate::constants::{GLOW_CENTER_ALPHA, GLOW_RADIUS, LINK_WIDTH};
use crate::core::{Particle, ParticleField};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

#[inline]
fn particle_fill(p: &Particle) -> String {
    format!("hsla({:.0}, 70%, 60%, {:.3})", p.hue, p.alpha)
}

#[inline]
fn link_stroke(opacity: f32) -> String {
    format!("rgba(99, 102, 241, {:.4})", opacity)
}

/// Draw one frame of the field in CSS pixel space. Physics must already
/// have been stepped for this frame.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, field: &ParticleField, glow: Option<Vec2>) {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
    draw_particles(ctx, field.particles());
    draw_links(ctx, field);
    if let Some(center) = glow {
        draw_glow(ctx, center);
    }
}

fn draw_particles(ctx: &web::CanvasRenderingContext2d, particles: &[Particle]) {
    for p in particles {
        ctx.begin_path();
        if ctx
            .arc(
                p.position.x as f64,
                p.position.y as f64,
                p.radius as f64,
                0.0,
                TAU,
            )
            .is_err()
        {
            continue;
        }
        ctx.set_fill_style_str(&particle_fill(p));
        ctx.fill();
    }
}

fn draw_links(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    let particles = field.particles();
    ctx.set_line_width(LINK_WIDTH);
    for link in field.links() {
        let a = particles[link.a].position;
        let b = particles[link.b].position;
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.set_stroke_style_str(&link_stroke(link.opacity));
        ctx.stroke();
    }
}

fn draw_glow(ctx: &web::CanvasRenderingContext2d, center: Vec2) {
    let (x, y) = (center.x as f64, center.y as f64);
    let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, GLOW_RADIUS) else {
        return;
    };
    _ = gradient.add_color_stop(0.0, &format!("rgba(99, 102, 241, {})", GLOW_CENTER_ALPHA));
    _ = gradient.add_color_stop(1.0, "transparent");
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(x - GLOW_RADIUS, y - GLOW_RADIUS, GLOW_RADIUS * 2.0, GLOW_RADIUS * 2.0);
}
