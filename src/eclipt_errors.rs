use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum EcliptError {
    #[error("Velocity is required by {0} but the state carries a position only")]
    MissingVelocity(&'static str),

    #[error("Non-finite component in {field}: {value}")]
    NonFiniteComponent { field: &'static str, value: f64 },

    #[error("Unknown obliquity model: {0}")]
    UnknownObliquityModel(String),
}

impl PartialEq for EcliptError {
    fn eq(&self, other: &Self) -> bool {
        use EcliptError::*;
        match (self, other) {
            (MissingVelocity(a), MissingVelocity(b)) => a == b,
            (UnknownObliquityModel(a), UnknownObliquityModel(b)) => a == b,

            // NaN never compares equal to itself, so only the offending field is compared
            (NonFiniteComponent { field: a, .. }, NonFiniteComponent { field: b, .. }) => a == b,

            _ => false,
        }
    }
}
