use crate::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub base: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub hue: f32,
    pub alpha: f32,
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub return_rate: f32,
    pub drift_speed_max: f32,
    pub link_distance: f32,
    pub link_lookahead: usize,
    pub link_max_opacity: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            return_rate: RETURN_RATE,
            drift_speed_max: DRIFT_SPEED_MAX,
            link_distance: LINK_DISTANCE,
            link_lookahead: LINK_LOOKAHEAD,
            link_max_opacity: LINK_MAX_OPACITY,
        }
    }
}

/// A connective line between two particles, by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Fixed-size particle pool in logical (CSS pixel) canvas space.
pub struct ParticleField {
    particles: Vec<Particle>,
    params: FieldParams,
    bounds: Vec2,
}

impl ParticleField {
    /// Seed the pool once. Positions start at their base positions.
    pub fn new<R: Rng>(params: FieldParams, bounds: Vec2, rng: &mut R) -> Self {
        let bounds = bounds.max(Vec2::ZERO);
        let particles = (0..params.count)
            .map(|_| {
                let base = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
                Particle {
                    position: base,
                    base,
                    velocity: Vec2::new(
                        (rng.gen::<f32>() - 0.5) * 2.0 * params.drift_speed_max,
                        (rng.gen::<f32>() - 0.5) * 2.0 * params.drift_speed_max,
                    ),
                    radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
                    hue: PARTICLE_HUE_MIN + rng.gen::<f32>() * PARTICLE_HUE_SPAN,
                    alpha: PARTICLE_ALPHA_MIN + rng.gen::<f32>() * PARTICLE_ALPHA_SPAN,
                }
            })
            .collect();
        Self {
            particles,
            params,
            bounds,
        }
    }

    /// Build a field from an existing pool, e.g. a restored or hand-placed one.
    pub fn from_particles(particles: Vec<Particle>, params: FieldParams, bounds: Vec2) -> Self {
        Self {
            particles,
            params,
            bounds: bounds.max(Vec2::ZERO),
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Resize keeps the pool; particles outside are pulled back on the next step.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds.max(Vec2::ZERO);
    }

    /// Advance one tick: pointer repulsion or easing toward base, drift, then
    /// reflection off the canvas edges.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        let radius = self.params.repulsion_radius;
        let radius_sq = radius * radius;
        for p in &mut self.particles {
            let mut repelled = false;
            if let Some(ptr) = pointer {
                let d = ptr - p.position;
                let dist_sq = d.length_squared();
                if dist_sq < radius_sq && dist_sq > 0.0 {
                    let dist = dist_sq.sqrt();
                    let force = (radius - dist) / radius * self.params.repulsion_strength;
                    p.position -= d / dist * force;
                    repelled = true;
                }
            }
            if !repelled {
                p.position += (p.base - p.position) * self.params.return_rate;
            }
            p.position += p.velocity;
            reflect(p, self.bounds);
        }
    }

    /// Lines between each particle and the next few by index, within the link
    /// distance. Opacity falls off linearly with distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let n = self.particles.len();
        let max_dist = self.params.link_distance;
        let lookahead = self.params.link_lookahead;
        let max_opacity = self.params.link_max_opacity;
        (0..n).flat_map(move |a| {
            let end = (a + 1 + lookahead).min(n);
            (a + 1..end).filter_map(move |b| {
                let dist_sq = self.particles[a]
                    .position
                    .distance_squared(self.particles[b].position);
                (dist_sq < max_dist * max_dist).then(|| Link {
                    a,
                    b,
                    opacity: max_opacity * (1.0 - dist_sq.sqrt() / max_dist),
                })
            })
        })
    }

    /// Glow is drawn only while the pointer is strictly inside the canvas.
    pub fn glow_center(&self, pointer: Option<Vec2>) -> Option<Vec2> {
        pointer.filter(|p| p.x > 0.0 && p.y > 0.0 && p.x < self.bounds.x && p.y < self.bounds.y)
    }
}

#[inline]
fn reflect(p: &mut Particle, bounds: Vec2) {
    if p.position.x < 0.0 {
        p.position.x = 0.0;
        p.velocity.x = p.velocity.x.abs();
    } else if p.position.x > bounds.x {
        p.position.x = bounds.x;
        p.velocity.x = -p.velocity.x.abs();
    }
    if p.position.y < 0.0 {
        p.position.y = 0.0;
        p.velocity.y = p.velocity.y.abs();
    } else if p.position.y > bounds.y {
        p.position.y = bounds.y;
        p.velocity.y = -p.velocity.y.abs();
    }
}
