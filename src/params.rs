use crate::error::{InvalidParameter, ProfileError};
use num_traits::Float;
#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Physical limits and boundary conditions of a single move.
///
/// Velocities are magnitudes along the direction of travel, so every field is
/// expected to be non-negative.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct ProfileParameters<T> {
    pub a_max: T,
    pub v_max: T,
    pub distance: T,
    #[cfg_attr(feature = "serde_support", serde(default))]
    pub v_start: T,
    #[cfg_attr(feature = "serde_support", serde(default))]
    pub v_end: T,
}

impl<T: Float> ProfileParameters<T> {
    /// Rest-to-rest move.
    pub fn new(a_max: T, v_max: T, distance: T) -> Self {
        Self {
            a_max,
            v_max,
            distance,
            v_start: T::zero(),
            v_end: T::zero(),
        }
    }

    pub fn with_start_velocity(mut self, v_start: T) -> Self {
        self.v_start = v_start;
        self
    }

    pub fn with_end_velocity(mut self, v_end: T) -> Self {
        self.v_end = v_end;
        self
    }

    /// Checks each parameter on its own. Whether the distance is long enough
    /// for the requested velocities depends on derived values and is checked
    /// by the generator.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let zero = T::zero();

        let all_finite = [self.a_max, self.v_max, self.distance, self.v_start, self.v_end]
            .iter()
            .all(|value| value.is_finite());

        let reason = if !all_finite {
            Some(InvalidParameter::NonFinite)
        } else if self.a_max <= zero {
            Some(InvalidParameter::NonPositiveAcceleration)
        } else if self.v_max <= zero {
            Some(InvalidParameter::NonPositiveVelocity)
        } else if self.distance < zero {
            Some(InvalidParameter::NegativeDistance)
        } else if self.v_start < zero {
            Some(InvalidParameter::NegativeStartVelocity)
        } else if self.v_end < zero {
            Some(InvalidParameter::NegativeEndVelocity)
        } else if self.v_start > self.v_max {
            Some(InvalidParameter::StartVelocityExceedsMax)
        } else if self.v_end > self.v_max {
            Some(InvalidParameter::EndVelocityExceedsMax)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                log::debug!("rejecting profile parameters: {}", reason);
                Err(reason.into())
            }
            None => Ok(()),
        }
    }
}

#[cfg(feature = "serde_support")]
impl<T> ProfileParameters<T>
where
    T: Float + Default + serde::de::DeserializeOwned,
{
    /// Parses parameters from a JSON object. `v_start` and `v_end` may be
    /// omitted and default to zero. The result is validated.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}
