use thiserror::Error;

/// Reason a set of profile parameters was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum InvalidParameter {
    #[error("all parameters must be finite")]
    NonFinite,
    #[error("maximum acceleration must be positive")]
    NonPositiveAcceleration,
    #[error("maximum velocity must be positive")]
    NonPositiveVelocity,
    #[error("distance must not be negative")]
    NegativeDistance,
    #[error("start velocity must not be negative")]
    NegativeStartVelocity,
    #[error("end velocity must not be negative")]
    NegativeEndVelocity,
    #[error("start velocity exceeds maximum velocity")]
    StartVelocityExceedsMax,
    #[error("end velocity exceeds maximum velocity")]
    EndVelocityExceedsMax,
    #[error("distance is too short to accelerate and decelerate within")]
    Infeasible,
    #[error("sample step must be finite and positive")]
    NonPositiveStep,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(InvalidParameter),
    #[cfg(feature = "serde_support")]
    #[error("malformed profile parameters: {0}")]
    Malformed(serde_json::Error),
}

impl From<InvalidParameter> for ProfileError {
    fn from(reason: InvalidParameter) -> Self {
        ProfileError::InvalidParameter(reason)
    }
}

#[cfg(feature = "serde_support")]
impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::Malformed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_invalid_parameter_message() {
        let err: ProfileError = InvalidParameter::Infeasible.into();

        assert_eq!(
            err.to_string(),
            "invalid parameter: distance is too short to accelerate and decelerate within"
        );
        assert!(matches!(
            err,
            ProfileError::InvalidParameter(InvalidParameter::Infeasible)
        ));
    }
}
