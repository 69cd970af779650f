use crate::error::{InvalidParameter, ProfileError};
use crate::motion_profile::{MotionProfile, MotionState};
use alloc::vec::Vec;
use num_traits::{Float, NumCast};

/// Step used when sampling for display.
pub const DEFAULT_STEP: f64 = 0.01;

/// Parallel sequences of a profile sampled at a fixed step, from `0` up to but
/// not including the profile's duration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Samples<T> {
    pub time: Vec<T>,
    pub acceleration: Vec<T>,
    pub velocity: Vec<T>,
    pub position: Vec<T>,
}

impl<T: Float> Samples<T> {
    pub fn collect<P: MotionProfile<T>>(profile: &P, step: T) -> Result<Self, ProfileError> {
        if !step.is_finite() || step <= T::zero() {
            return Err(InvalidParameter::NonPositiveStep.into());
        }

        let duration = profile.get_duration();
        let capacity = (duration / step).ceil().to_usize().unwrap_or(0);
        let mut samples = Self {
            time: Vec::with_capacity(capacity),
            acceleration: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
            position: Vec::with_capacity(capacity),
        };

        // Index times instead of accumulating the step so drift doesn't add
        // or drop a sample near the end.
        let mut i = 0usize;
        loop {
            let Some(t) = <T as NumCast>::from(i).map(|i| i * step) else {
                break;
            };
            if t >= duration {
                break;
            }

            let state = profile.get(t);
            samples.time.push(t);
            samples.acceleration.push(state.acceleration);
            samples.velocity.push(state.velocity);
            samples.position.push(state.position);
            i += 1;
        }

        log::debug!("collected {} samples", samples.len());

        Ok(samples)
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, MotionState<T>)> + '_ {
        self.time.iter().enumerate().map(|(i, &t)| {
            (
                t,
                MotionState {
                    acceleration: self.acceleration[i],
                    velocity: self.velocity[i],
                    position: self.position[i],
                },
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trapezoidal::ProfileGenerator;
    use approx::assert_relative_eq;

    #[test]
    fn test_samples_reference_profile() {
        let profile = ProfileGenerator::new(4.0, 5.0, 10.0, 0.0, 0.0).unwrap();
        let samples = Samples::collect(&profile, DEFAULT_STEP).unwrap();

        assert_eq!(samples.len(), 325);
        assert_eq!(samples.acceleration.len(), 325);
        assert_eq!(samples.velocity.len(), 325);
        assert_eq!(samples.position.len(), 325);
        assert_eq!(samples.time[0], 0.0);
        assert_relative_eq!(samples.time[324], 3.24);
        assert!(samples.time.iter().all(|&t| t < profile.get_total_time()));
    }

    #[test]
    fn test_samples_match_queries() {
        let profile = ProfileGenerator::new(2.0, 3.0, 8.0, 1.0, 0.5).unwrap();
        let samples = Samples::collect(&profile, 0.05).unwrap();

        for (t, state) in samples.iter() {
            assert_eq!(state.acceleration, profile.get_acceleration(t));
            assert_eq!(state.velocity, profile.get_velocity(t));
            assert_eq!(state.position, profile.get_position(t));
        }
    }

    #[test]
    fn test_samples_zero_duration() {
        let profile = ProfileGenerator::new(1.0, 1.0, 0.0, 1.0, 1.0).unwrap();
        let samples = Samples::collect(&profile, DEFAULT_STEP).unwrap();

        assert!(samples.is_empty());
    }

    #[test]
    fn test_samples_rejects_bad_step() {
        let profile = ProfileGenerator::new(4.0, 5.0, 10.0, 0.0, 0.0).unwrap();

        for step in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Samples::collect(&profile, step),
                Err(ProfileError::InvalidParameter(
                    InvalidParameter::NonPositiveStep
                ))
            ));
        }
    }
}
