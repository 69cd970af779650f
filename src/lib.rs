#![no_std]

//! Closed-form trapezoidal velocity profiles for one-dimensional moves.
//!
//! A [`ProfileGenerator`] is built once from the acceleration and velocity
//! limits, the distance to travel, and the boundary velocities, then queried
//! for acceleration, velocity and position at any elapsed time.

extern crate alloc;

pub mod error;
pub mod motion_profile;
pub mod params;
pub mod sampler;
pub mod trapezoidal;

pub use error::{InvalidParameter, ProfileError};
pub use motion_profile::{MotionProfile, MotionState};
pub use params::ProfileParameters;
pub use sampler::{Samples, DEFAULT_STEP};
pub use trapezoidal::{Phase, ProfileGenerator};
