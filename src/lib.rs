//! Click-spawned particle bursts: polygon outlines that spin, shrink and fall
//! under gravity, driven by 2D transform matrices.

pub mod config;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod particle;
pub mod plane;
pub mod self_test;
pub mod transform;

pub use engine::{Engine, FrameClock, InputEvent, PointerButton};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use particle::{FanVertex, Particle};
pub use plane::CartesianPlane;
pub use self_test::SelfTestReport;
