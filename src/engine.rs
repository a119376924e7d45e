use std::time::{Duration, Instant};

use cgmath::Vector2;
use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::{MAX_POINTS, MIN_POINTS, PARTICLES_PER_CLICK, SELF_TEST_POINTS},
    particle::Particle,
    plane::CartesianPlane,
    self_test::SelfTestReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Input delivered to the engine once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    CloseRequested,
    /// A pointer button went down at `position`, in surface pixels.
    PointerPressed {
        button: PointerButton,
        position: Vector2<f64>,
    },
}

/// Wall-clock frame timer. Each restart reports the time since the start of
/// the previous frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
        }
    }

    pub fn restart(&mut self) -> Duration {
        let current_time = Instant::now();
        let frame_time = current_time.duration_since(self.last_frame_time);
        self.last_frame_time = current_time;
        frame_time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Engine<R = StdRng> {
    particles: Vec<Particle>,
    plane: CartesianPlane,
    rng: R,
    clock: FrameClock,
    running: bool,
}

impl Engine<StdRng> {
    /// Engine for a `width`×`height` surface seeded from system entropy.
    pub fn from_entropy(width: f64, height: f64) -> Self {
        Self::new(CartesianPlane::for_surface(width, height), StdRng::from_entropy())
    }
}

impl<R: Rng> Engine<R> {
    pub fn new(plane: CartesianPlane, rng: R) -> Self {
        Self {
            particles: vec![],
            plane,
            rng,
            clock: FrameClock::new(),
            running: true,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn plane(&self) -> &CartesianPlane {
        &self.plane
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        if self.running {
            info!("Stopping engine with {} live particles", self.particles.len());
            self.running = false;
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if self.plane.surface_size() != cgmath::vec2(width, height) {
            debug!("Surface resized to {width}x{height}");
            self.plane.resize(width, height);
        }
    }

    /// Builds a small particle at the visual center of the surface and runs
    /// its built-in checks.
    pub fn run_self_test(&mut self) -> SelfTestReport {
        info!("Starting Particle unit tests...");
        let center = self.plane.surface_center();
        let mut particle = Particle::new(&self.plane, SELF_TEST_POINTS, center, &mut self.rng);
        let report = particle.unit_tests();
        info!("Unit tests complete. Starting engine...");
        report
    }

    /// One iteration of the frame loop: measure elapsed time, handle input,
    /// advance particles. Returns the elapsed seconds fed to the update.
    pub fn tick(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
        cancel_key_down: bool,
    ) -> f64 {
        let dt = self.clock.restart().as_secs_f64();
        self.input(events, cancel_key_down);
        self.update(dt);
        dt
    }

    pub fn input(&mut self, events: impl IntoIterator<Item = InputEvent>, cancel_key_down: bool) {
        for event in events {
            match event {
                InputEvent::CloseRequested => self.stop(),
                InputEvent::PointerPressed {
                    button: PointerButton::Primary,
                    position,
                } => self.spawn_burst(position),
                InputEvent::PointerPressed { .. } => {}
            }
        }
        if cancel_key_down {
            self.stop();
        }
    }

    /// Spawns a batch of particles at the pixel `position`.
    pub fn spawn_burst(&mut self, position: Vector2<f64>) {
        for _ in 0..PARTICLES_PER_CLICK {
            let num_points = self.rng.gen_range(MIN_POINTS..=MAX_POINTS);
            self.particles
                .push(Particle::new(&self.plane, num_points, position, &mut self.rng));
        }
        debug!(
            "Spawned {PARTICLES_PER_CLICK} particles at ({}, {}), {} live",
            position.x,
            position.y,
            self.particles.len()
        );
    }

    /// Advances live particles by `dt` seconds and drops the expired ones
    /// without advancing them.
    pub fn update(&mut self, dt: f64) {
        let before = self.particles.len();
        self.particles.retain_mut(|particle| {
            if particle.time_to_live() > 0.0 {
                particle.update(dt);
                true
            } else {
                false
            }
        });
        let removed = before - self.particles.len();
        if removed > 0 {
            trace!("Removed {removed} expired particles");
        }
    }
}
