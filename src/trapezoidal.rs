//! Trapezoidal velocity profile for a single one-dimensional move.
//!
//! All phase timings and distances are derived once at construction. The
//! query functions are closed-form and clamp outside `[0, time_total)`, so
//! they are defined for any time an external sampler may probe.

use crate::error::{InvalidParameter, ProfileError};
use crate::motion_profile::{MotionProfile, MotionState};
use crate::params::ProfileParameters;
use core::fmt::Debug;
use nalgebra::Vector3;
use num_traits::Float;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Before the move starts (`t < 0`).
    Pending,
    Accelerate,
    Cruise,
    Decelerate,
    /// At or after `time_total`.
    Finished,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProfileGenerator<T> {
    params: ProfileParameters<T>,
    time_accelerate: T,
    time_cruise: T,
    time_decelerate: T,
    time_total: T,
    distance_accelerate: T,
    distance_cruise: T,
    distance_decelerate: T,
}

fn half<T: Float>() -> T {
    T::one() / (T::one() + T::one())
}

impl<T: Float + Debug> ProfileGenerator<T> {
    /// Builds the profile for a move of `distance` starting at `v_start` and
    /// ending at `v_end`, cruising at `v_max`.
    ///
    /// Fails with [`InvalidParameter::Infeasible`] when the distance is too
    /// short to reach `v_max` and come back down to `v_end`.
    pub fn new(
        a_max: T,
        v_max: T,
        distance: T,
        v_start: T,
        v_end: T,
    ) -> Result<Self, ProfileError> {
        Self::try_from(ProfileParameters {
            a_max,
            v_max,
            distance,
            v_start,
            v_end,
        })
    }

    /// Like [`ProfileGenerator::new`], but a distance too short for `v_max`
    /// produces a triangular profile peaking at the highest reachable
    /// velocity instead of an error.
    pub fn with_reachable_velocity(params: ProfileParameters<T>) -> Result<Self, ProfileError> {
        params.validate()?;

        let two = T::one() + T::one();
        let v_peak = (params.a_max * params.distance
            + (params.v_start * params.v_start + params.v_end * params.v_end) / two)
            .sqrt();

        if v_peak < params.v_start.max(params.v_end) {
            log::debug!(
                "boundary velocities {:?} -> {:?} cannot be connected within {:?}",
                params.v_start,
                params.v_end,
                params.distance
            );
            return Err(InvalidParameter::Infeasible.into());
        }

        let params = if v_peak < params.v_max {
            log::debug!(
                "cruise velocity {:?} unreachable, peaking at {:?}",
                params.v_max,
                v_peak
            );
            ProfileParameters {
                v_max: v_peak,
                ..params
            }
        } else {
            params
        };

        Ok(Self::derive(params))
    }

    fn derive(params: ProfileParameters<T>) -> Self {
        let time_accelerate = (params.v_max - params.v_start) / params.a_max;
        let time_decelerate = (params.v_max - params.v_end) / params.a_max;
        let distance_accelerate = half::<T>() * (params.v_start + params.v_max) * time_accelerate;
        let distance_decelerate = half::<T>() * (params.v_end + params.v_max) * time_decelerate;
        // Rounding on an exactly triangular move must not leave a negative cruise.
        let distance_cruise =
            (params.distance - distance_accelerate - distance_decelerate).max(T::zero());
        let time_cruise = if distance_cruise > T::zero() {
            distance_cruise / params.v_max
        } else {
            T::zero()
        };
        let time_total = time_accelerate + time_cruise + time_decelerate;

        let profile = Self {
            params,
            time_accelerate,
            time_cruise,
            time_decelerate,
            time_total,
            distance_accelerate,
            distance_cruise,
            distance_decelerate,
        };

        log::debug!(
            "accelerate {:?}s over {:?}, cruise {:?}s over {:?}, decelerate {:?}s over {:?}",
            time_accelerate,
            distance_accelerate,
            time_cruise,
            distance_cruise,
            time_decelerate,
            distance_decelerate
        );

        profile
    }

    pub fn parameters(&self) -> &ProfileParameters<T> {
        &self.params
    }

    /// The velocity held during the cruise phase.
    pub fn cruise_velocity(&self) -> T {
        self.params.v_max
    }

    pub fn time_accelerate(&self) -> T {
        self.time_accelerate
    }

    pub fn time_cruise(&self) -> T {
        self.time_cruise
    }

    pub fn time_decelerate(&self) -> T {
        self.time_decelerate
    }

    pub fn distance_accelerate(&self) -> T {
        self.distance_accelerate
    }

    pub fn distance_cruise(&self) -> T {
        self.distance_cruise
    }

    pub fn distance_decelerate(&self) -> T {
        self.distance_decelerate
    }

    pub fn get_total_time(&self) -> T {
        self.time_total
    }

    fn cruise_end(&self) -> T {
        self.time_accelerate + self.time_cruise
    }

    pub fn phase(&self, t: T) -> Phase {
        if t < T::zero() {
            Phase::Pending
        } else if t < self.time_accelerate {
            Phase::Accelerate
        } else if t < self.cruise_end() {
            Phase::Cruise
        } else if t < self.time_total {
            Phase::Decelerate
        } else {
            Phase::Finished
        }
    }

    pub fn get_acceleration(&self, t: T) -> T {
        match self.phase(t) {
            Phase::Accelerate => self.params.a_max,
            Phase::Decelerate => -self.params.a_max,
            Phase::Pending | Phase::Cruise | Phase::Finished => T::zero(),
        }
    }

    pub fn get_velocity(&self, t: T) -> T {
        let p = &self.params;
        match self.phase(t) {
            Phase::Pending => p.v_start,
            Phase::Accelerate => p.v_start + p.a_max * t,
            Phase::Cruise => p.v_max,
            Phase::Decelerate => p.v_max - p.a_max * (t - self.cruise_end()),
            Phase::Finished => p.v_end,
        }
    }

    pub fn get_position(&self, t: T) -> T {
        let p = &self.params;
        match self.phase(t) {
            Phase::Pending => T::zero(),
            Phase::Accelerate => p.v_start * t + half::<T>() * p.a_max * t * t,
            Phase::Cruise => self.distance_accelerate + p.v_max * (t - self.time_accelerate),
            Phase::Decelerate => {
                let remaining = self.time_total - t;
                p.distance - p.v_end * remaining - half::<T>() * p.a_max * remaining * remaining
            }
            Phase::Finished => p.distance,
        }
    }

    /// `[position, velocity, acceleration]` at `t`.
    pub fn get_state(&self, t: T) -> Vector3<T>
    where
        T: 'static,
    {
        MotionProfile::get(self, t).to_vector()
    }
}

impl<T: Float + Debug> TryFrom<ProfileParameters<T>> for ProfileGenerator<T> {
    type Error = ProfileError;

    fn try_from(params: ProfileParameters<T>) -> Result<Self, Self::Error> {
        params.validate()?;

        let profile = Self::derive(params);

        if profile.distance_accelerate + profile.distance_decelerate > params.distance {
            log::debug!(
                "distance {:?} shorter than the {:?} needed to reach {:?}",
                params.distance,
                profile.distance_accelerate + profile.distance_decelerate,
                params.v_max
            );
            return Err(InvalidParameter::Infeasible.into());
        }

        Ok(profile)
    }
}

impl<T: Float + Debug> MotionProfile<T> for ProfileGenerator<T> {
    fn get_duration(&self) -> T {
        self.time_total
    }

    fn get(&self, t: T) -> MotionState<T> {
        MotionState {
            acceleration: self.get_acceleration(t),
            velocity: self.get_velocity(t),
            position: self.get_position(t),
        }
    }
}
