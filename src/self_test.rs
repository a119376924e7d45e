//! Startup self-test exercising the transform factories and a live particle.

use std::f64::consts::PI;

use cgmath::vec2;
use log::{info, warn};

use crate::{
    config::EPSILON,
    matrix::Matrix,
    particle::Particle,
    transform::{rotation_matrix, scaling_matrix, translation_matrix},
};

pub const CHECK_COUNT: usize = 7;

/// Outcome of [`Particle::unit_tests`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelfTestReport {
    pub passed: usize,
    pub failures: Vec<String>,
}

impl SelfTestReport {
    pub fn all_passed(&self) -> bool {
        self.passed == CHECK_COUNT
    }

    fn record(&mut self, name: &str, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                info!("{name}... passed");
                self.passed += 1;
            }
            Err(diagnostic) => {
                warn!("{name}... failed: {diagnostic}");
                self.failures.push(format!("{name}: {diagnostic}"));
            }
        }
    }
}

fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn expect_entries(m: &Matrix, rows: usize, cols: usize, expected: &[f64]) -> Result<(), String> {
    if (m.rows(), m.cols()) != (rows, cols) {
        return Err(format!(
            "expected {rows}x{cols}, got {}x{}",
            m.rows(),
            m.cols()
        ));
    }
    for (i, &e) in expected.iter().enumerate() {
        let actual = m[(i / cols, i % cols)];
        if !almost_equal(actual, e) {
            return Err(format!(
                "entry ({}, {}) is {actual}, expected {e}",
                i / cols,
                i % cols
            ));
        }
    }
    Ok(())
}

/// Compares each point's offset from the center before and after a transform.
fn expect_mapping(
    before: &Matrix,
    before_center: cgmath::Vector2<f64>,
    particle: &Particle,
    map: impl Fn(f64, f64) -> (f64, f64),
) -> Result<(), String> {
    let mut bad = Vec::new();
    for j in 0..before.cols() {
        let (x, y) = (
            before[(0, j)] - before_center.x,
            before[(1, j)] - before_center.y,
        );
        let (ex, ey) = map(x, y);
        let (ax, ay) = (
            particle.points()[(0, j)] - particle.center().x,
            particle.points()[(1, j)] - particle.center().y,
        );
        if !almost_equal(ax, ex) || !almost_equal(ay, ey) {
            bad.push(format!("({x}, {y}) ==> ({ax}, {ay})"));
        }
    }
    if bad.is_empty() {
        Ok(())
    } else {
        Err(bad.join("; "))
    }
}

impl Particle {
    /// Runs the seven built-in checks against this particle, which must have
    /// been spawned at the visual center of its surface.
    ///
    /// The particle is rotated, scaled and translated in the process.
    pub fn unit_tests(&mut self) -> SelfTestReport {
        let mut report = SelfTestReport::default();

        let theta = PI / 4.0;
        report.record(
            "RotationMatrix constructor",
            expect_entries(
                &rotation_matrix(theta),
                2,
                2,
                &[theta.cos(), -theta.sin(), theta.sin(), theta.cos()],
            ),
        );

        report.record(
            "ScalingMatrix constructor",
            expect_entries(&scaling_matrix(1.5), 2, 2, &[1.5, 0.0, 0.0, 1.5]),
        );

        report.record(
            "TranslationMatrix constructor",
            expect_entries(
                &translation_matrix(5.0, -5.0, 3),
                2,
                3,
                &[5.0, 5.0, 5.0, -5.0, -5.0, -5.0],
            ),
        );

        let center = self.center();
        report.record(
            "Particle mapping to Cartesian origin",
            if center == vec2(0.0, 0.0) {
                Ok(())
            } else {
                Err(format!("expected (0,0), received ({},{})", center.x, center.y))
            },
        );

        let before = self.points().clone();
        let before_center = self.center();
        self.rotate(PI / 2.0);
        report.record(
            "Rotation of 90 degrees about the center",
            expect_mapping(&before, before_center, self, |x, y| (-y, x)),
        );

        let before = self.points().clone();
        let before_center = self.center();
        self.scale(0.5);
        report.record(
            "Scale of 0.5",
            expect_mapping(&before, before_center, self, |x, y| (0.5 * x, 0.5 * y)),
        );

        let before = self.points().clone();
        self.translate(10.0, 5.0);
        let mut bad = Vec::new();
        for j in 0..before.cols() {
            let (x, y) = (before[(0, j)], before[(1, j)]);
            let (ax, ay) = (self.points()[(0, j)], self.points()[(1, j)]);
            if !almost_equal(ax, x + 10.0) || !almost_equal(ay, y + 5.0) {
                bad.push(format!("({x}, {y}) ==> ({ax}, {ay})"));
            }
        }
        report.record(
            "Translation of (10, 5)",
            if bad.is_empty() { Ok(()) } else { Err(bad.join("; ")) },
        );

        info!("Score: {} / {CHECK_COUNT}", report.passed);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::CartesianPlane;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn centered_particle_scores_seven() {
        let plane = CartesianPlane::for_surface(1280.0, 720.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut particle = Particle::new(&plane, 4, plane.surface_center(), &mut rng);
        let report = particle.unit_tests();
        assert_eq!(report.passed, CHECK_COUNT, "{:?}", report.failures);
        assert!(report.all_passed());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn off_center_particle_fails_origin_check_only() {
        let plane = CartesianPlane::for_surface(1280.0, 720.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut particle = Particle::new(&plane, 4, vec2(0.0, 0.0), &mut rng);
        let report = particle.unit_tests();
        assert_eq!(report.passed, CHECK_COUNT - 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].starts_with("Particle mapping to Cartesian origin"));
    }
}
