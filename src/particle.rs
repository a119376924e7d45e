use std::f64::consts::PI;

use cgmath::{Vector2, Vector3, vec2};
use rand::Rng;

use crate::{
    config::{GRAVITY, MAX_RADIUS, MAX_SPEED, MIN_RADIUS, MIN_SPEED, SCALE, TTL},
    matrix::Matrix,
    plane::CartesianPlane,
    transform::{rotation_matrix, scaling_matrix, translation_matrix},
};

pub const CENTER_COLOR: Vector3<f32> = rgb(1.0, 1.0, 1.0);

pub const EDGE_COLORS: [Vector3<f32>; 6] = [
    rgb(1.0, 0.0, 0.0), // red
    rgb(0.0, 1.0, 0.0), // green
    rgb(0.0, 0.0, 1.0), // blue
    rgb(1.0, 1.0, 0.0), // yellow
    rgb(1.0, 0.0, 1.0), // magenta
    rgb(0.0, 1.0, 1.0), // cyan
];

const fn rgb(r: f32, g: f32, b: f32) -> Vector3<f32> {
    Vector3 { x: r, y: g, z: b }
}

/// A vertex handed to the renderer, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanVertex {
    pub position: Vector2<f64>,
    pub color: Vector3<f32>,
}

/// A spinning, shrinking polygon that falls under gravity until its
/// lifetime runs out.
#[derive(Debug, Clone)]
pub struct Particle {
    points: Matrix,
    center: Vector2<f64>,
    time_to_live: f64,
    num_points: usize,
    angular_velocity: f64,
    velocity: Vector2<f64>,
    color_center: Vector3<f32>,
    color_edge: Vector3<f32>,
}

impl Particle {
    /// Spawns a particle of `num_points` outline vertices around the world
    /// position of the pixel `click`.
    ///
    /// # Panics
    ///
    /// If `num_points < 2`.
    pub fn new<R: Rng>(
        plane: &CartesianPlane,
        num_points: usize,
        click: Vector2<f64>,
        rng: &mut R,
    ) -> Self {
        assert!(num_points >= 2, "a particle needs at least two points");

        let center = plane.map_pixel_to_coords(click);

        let mut random_velocity = || {
            let speed = rng.gen_range(MIN_SPEED..=MAX_SPEED);
            if rng.gen_bool(0.5) { -speed } else { speed }
        };
        let velocity = vec2(random_velocity(), random_velocity());

        let color_edge = EDGE_COLORS[rng.gen_range(0..EDGE_COLORS.len())];
        let angular_velocity = rng.gen_range(0.0..PI);

        let mut points = Matrix::zeros(2, num_points);
        let mut theta = rng.gen_range(0.0..PI / 2.0);
        let dtheta = 2.0 * PI / (num_points - 1) as f64;
        for i in 0..num_points {
            let r = rng.gen_range(MIN_RADIUS..=MAX_RADIUS);
            points[(0, i)] = center.x + r * theta.cos();
            points[(1, i)] = center.y + r * theta.sin();
            theta += dtheta;
        }

        Self {
            points,
            center,
            time_to_live: TTL,
            num_points,
            angular_velocity,
            velocity,
            color_center: CENTER_COLOR,
            color_edge,
        }
    }

    pub fn points(&self) -> &Matrix {
        &self.points
    }

    pub fn center(&self) -> Vector2<f64> {
        self.center
    }

    pub fn time_to_live(&self) -> f64 {
        self.time_to_live
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }

    pub fn color_center(&self) -> Vector3<f32> {
        self.color_center
    }

    pub fn color_edge(&self) -> Vector3<f32> {
        self.color_edge
    }

    /// Advances the particle by `dt` seconds.
    ///
    /// Rotation and scaling pivot on the current center, so they run before
    /// the translation moves it.
    pub fn update(&mut self, dt: f64) {
        self.time_to_live -= dt;
        self.rotate(dt * self.angular_velocity);
        self.scale(SCALE);

        let dx = self.velocity.x * dt;
        self.velocity.y -= GRAVITY * dt;
        let dy = self.velocity.y * dt;
        self.translate(dx, dy);
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        let t = translation_matrix(dx, dy, self.points.cols());
        self.points = &t + &self.points;
        self.center += vec2(dx, dy);
    }

    /// Rotates counter-clockwise by `theta` radians about the center.
    pub fn rotate(&mut self, theta: f64) {
        self.about_center(&rotation_matrix(theta));
    }

    /// Scales by `c` about the center.
    pub fn scale(&mut self, c: f64) {
        self.about_center(&scaling_matrix(c));
    }

    fn about_center(&mut self, transform: &Matrix) {
        let pivot = self.center;
        self.translate(-pivot.x, -pivot.y);
        self.points = transform * &self.points;
        self.translate(pivot.x, pivot.y);
    }

    /// Pixel-space triangle fan: the center vertex followed by every outline
    /// vertex.
    pub fn fan(&self, plane: &CartesianPlane) -> Vec<FanVertex> {
        let mut fan = Vec::with_capacity(self.num_points + 1);
        fan.push(FanVertex {
            position: plane.map_coords_to_pixel(self.center),
            color: self.color_center,
        });
        fan.extend((0..self.num_points).map(|i| FanVertex {
            position: plane
                .map_coords_to_pixel(vec2(self.points[(0, i)], self.points[(1, i)])),
            color: self.color_edge,
        }));
        fan
    }
}
