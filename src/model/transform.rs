//! Objective output transforms.

/// Maps a raw margin to the objective's output space.
///
/// Only single-output regression objectives are recognized; classification
/// and ranking objectives have no transform here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTransform {
    /// Margin is the prediction.
    #[default]
    Identity,
    /// Log-link objectives: `exp(margin)`.
    Exp,
    /// Logistic regression: `1 / (1 + exp(-margin))`.
    Sigmoid,
}

impl OutputTransform {
    /// Transform for an XGBoost objective name, or `None` if unsupported.
    pub fn for_objective(name: &str) -> Option<Self> {
        match name {
            "reg:squarederror" | "reg:linear" | "reg:absoluteerror" | "reg:pseudohubererror"
            | "reg:quantileerror" | "reg:squaredlogerror" => Some(Self::Identity),
            "reg:gamma" | "reg:tweedie" | "count:poisson" => Some(Self::Exp),
            "reg:logistic" => Some(Self::Sigmoid),
            _ => None,
        }
    }

    /// Apply to a margin value.
    #[inline]
    pub fn apply(self, margin: f64) -> f64 {
        match self {
            Self::Identity => margin,
            Self::Exp => margin.exp(),
            Self::Sigmoid => 1.0 / (1.0 + (-margin).exp()),
        }
    }

    /// Inverse of [`apply`](Self::apply), used to move a base score into
    /// margin space.
    pub fn to_margin(self, value: f32) -> f32 {
        match self {
            Self::Identity => value,
            Self::Exp => value.ln(),
            Self::Sigmoid => {
                let p = value.clamp(1e-7, 1.0 - 1e-7);
                (p / (1.0 - p)).ln()
            }
        }
    }
}
