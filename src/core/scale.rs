use crate::error::{ChartError, ChartResult};

/// Linear map from `[0, domain_max]` onto `[0, range_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_max: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain_max: f64, range_max: f64) -> ChartResult<Self> {
        if !domain_max.is_finite() || domain_max <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale domain maximum must be finite and > 0".to_owned(),
            ));
        }
        if !range_max.is_finite() || range_max < 0.0 {
            return Err(ChartError::InvalidData(
                "scale range maximum must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_max,
            range_max,
        })
    }

    /// Builds a scale whose domain maximum falls back to `1.0` when the
    /// derived value is not usable (empty or all-zero data).
    pub fn with_derived_domain(domain_max: f64, range_max: f64) -> ChartResult<Self> {
        let domain_max = if domain_max.is_finite() && domain_max > 0.0 {
            domain_max
        } else {
            1.0
        };
        Self::new(domain_max, range_max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (0.0, self.range_max)
    }

    /// Maps a domain value. Values outside the domain extrapolate linearly.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        value / self.domain_max * self.range_max
    }
}
