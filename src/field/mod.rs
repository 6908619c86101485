//! Particle network backdrop.
//!
//! A fixed population of slow-moving points drifts across the canvas, bouncing
//! off the edges. Every pair closer than the connection distance is joined by a
//! line whose opacity fades linearly with distance.

pub mod driver;
pub mod surface;

use rand::Rng;

use crate::config::FieldConfig;
use surface::{Surface, rgba};

// --- Particle -----------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Self {
        Self { x, y, vx, vy, radius }
    }

    /// Random particle somewhere inside `width x height`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, cfg: &FieldConfig, width: f64, height: f64) -> Self {
        let x = rng.r#gen::<f64>() * width;
        let y = rng.r#gen::<f64>() * height;
        let vx = (rng.r#gen::<f64>() - 0.5) * cfg.speed;
        let vy = (rng.r#gen::<f64>() - 0.5) * cfg.speed;
        let radius = cfg.min_radius + rng.r#gen::<f64>() * (cfg.max_radius - cfg.min_radius);
        Self::new(x, y, vx, vy, radius)
    }

    /// Advance one frame and bounce off the `[0, width] x [0, height]` box.
    ///
    /// The axes are handled independently. A particle that overshoots an edge
    /// has that velocity component flipped and is clamped back onto the edge.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
            self.x = self.x.clamp(0.0, width.max(0.0));
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
            self.y = self.y.clamp(0.0, height.max(0.0));
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Opacity of the line joining two points `distance` apart, or `None` when
/// they are too far apart to be linked.
pub fn link_opacity(distance: f64, threshold: f64) -> Option<f64> {
    if distance < threshold {
        Some(1.0 - distance / threshold)
    } else {
        None
    }
}

/// A pair of linked particles (indices into the field, `a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

// --- Field --------------------------------------------------------------------

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    config: FieldConfig,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(rng, &config, width, height))
            .collect();
        Self { particles, width, height, config }
    }

    /// Build a field from explicit particles (the count is fixed from here on).
    pub fn from_particles(config: FieldConfig, width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self { particles, width, height, config }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// New canvas size. Particles left outside are pulled back on the next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    /// Every unordered pair closer than the connection distance. O(n²).
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let threshold = self.config.connection_distance;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            (a + 1..ps.len()).filter_map(move |b| {
                link_opacity(ps[a].distance_to(&ps[b]), threshold).map(|opacity| Link { a, b, opacity })
            })
        })
    }

    pub fn draw_particles<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, &self.config.particle_color);
        }
    }

    pub fn draw_links<S: Surface + ?Sized>(&self, surface: &mut S) {
        for link in self.links() {
            let (a, b) = (&self.particles[link.a], &self.particles[link.b]);
            surface.stroke_line(
                (a.x, a.y),
                (b.x, b.y),
                &rgba(self.config.line_rgb, link.opacity),
                self.config.line_width,
            );
        }
    }

    /// One animation tick: wipe, move + paint each particle, then the links.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);
        self.step();
        self.draw_particles(surface);
        self.draw_links(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::surface::recording::{Op, Recorder};
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field_of(ps: Vec<Particle>) -> ParticleField {
        ParticleField::from_particles(FieldConfig::default(), 800.0, 600.0, ps)
    }

    #[test]
    fn random_particles_respect_config_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(FieldConfig::default(), 800.0, 600.0, &mut rng);
        assert_eq!(field.len(), 80);
        assert!(!field.is_empty());
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
            assert!((1.0..3.0).contains(&p.radius));
        }
    }

    #[test]
    fn advance_reflects_and_clamps() {
        let mut p = Particle::new(799.9, 0.1, 0.4, -0.3, 2.0);
        p.advance(800.0, 600.0);
        assert_eq!(p.x, 800.0);
        assert_eq!(p.vx, -0.4);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.vy, 0.3);
        p.advance(800.0, 600.0);
        assert_relative_eq!(p.x, 799.6);
        assert_relative_eq!(p.y, 0.3);
    }

    #[test]
    fn position_on_the_edge_does_not_flip() {
        let mut p = Particle::new(800.0, 300.0, 0.0, 0.0, 1.0);
        p.advance(800.0, 600.0);
        assert_eq!((p.x, p.vx), (800.0, 0.0));
    }

    #[test]
    fn particles_stay_in_bounds_over_many_steps() {
        let mut rng = StdRng::seed_from_u64(42);
        let cfg = FieldConfig { speed: 40.0, ..FieldConfig::default() };
        let mut field = ParticleField::new(cfg, 320.0, 240.0, &mut rng);
        for _ in 0..5_000 {
            field.step();
            for p in field.particles() {
                assert!((0.0..=320.0).contains(&p.x), "x out of bounds: {}", p.x);
                assert!((0.0..=240.0).contains(&p.y), "y out of bounds: {}", p.y);
            }
        }
        assert_eq!(field.len(), 80);
    }

    #[test]
    fn shrinking_pulls_particles_back_inside() {
        let mut field = field_of(vec![Particle::new(700.0, 500.0, 0.1, 0.1, 1.0)]);
        field.resize(100.0, 100.0);
        assert_eq!(field.bounds(), (100.0, 100.0));
        field.step();
        let p = field.particles()[0];
        assert_eq!((p.x, p.y), (100.0, 100.0));
        assert!(p.vx < 0.0 && p.vy < 0.0);
    }

    #[test]
    fn link_opacity_is_linear_below_threshold() {
        assert_eq!(link_opacity(0.0, 150.0), Some(1.0));
        assert_relative_eq!(link_opacity(75.0, 150.0).unwrap(), 0.5);
        assert_relative_eq!(link_opacity(149.9, 150.0).unwrap(), 0.1 / 150.0, epsilon = 1e-12);
        assert_eq!(link_opacity(150.0, 150.0), None);
        assert_eq!(link_opacity(200.0, 150.0), None);
    }

    #[test]
    fn links_cover_unique_close_pairs() {
        let field = field_of(vec![
            Particle::new(0.0, 0.0, 0.0, 0.0, 1.0),
            Particle::new(90.0, 120.0, 0.0, 0.0, 1.0), // 150 from #0
            Particle::new(0.0, 75.0, 0.0, 0.0, 1.0),   // 75 from #0
            Particle::new(0.0, 0.0, 0.0, 0.0, 1.0),    // on top of #0
        ]);
        let pairs: Vec<(usize, usize)> = field.links().map(|l| (l.a, l.b)).collect();
        assert_eq!(pairs, vec![(0, 2), (0, 3), (1, 2), (2, 3)]);
        let first = field.links().next().unwrap();
        assert_relative_eq!(first.opacity, 0.5);
    }

    #[test]
    fn frame_clears_then_draws_particles_then_links() {
        let mut field = field_of(vec![
            Particle::new(10.0, 10.0, 0.0, 0.0, 2.0),
            Particle::new(10.0, 85.0, 0.0, 0.0, 1.5),
        ]);
        let mut rec = Recorder::default();
        field.frame(&mut rec);
        assert_eq!(rec.ops.len(), 4);
        assert_eq!(rec.ops[0], Op::Clear(800.0, 600.0));
        assert!(matches!(&rec.ops[1], Op::Circle { radius, color, .. } if *radius == 2.0 && color == "#3498db"));
        assert!(matches!(&rec.ops[2], Op::Circle { radius, .. } if *radius == 1.5));
        match &rec.ops[3] {
            Op::Line { from, to, color, width } => {
                assert_eq!((*from, *to), ((10.0, 10.0), (10.0, 85.0)));
                assert_eq!(color, "rgba(44, 62, 80, 0.5)");
                assert_eq!(*width, 0.5);
            }
            other => panic!("expected a line, got {:?}", other),
        }
    }
}
