use crate::types::TotalFootprint;
use crate::utils::quantile;
use crate::Error;

/// How a quantile is read off the sorted sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuantileMethod {
    /// The value at rank `floor((n - 1) * p)`.
    #[default]
    Lower,
    /// Linear interpolation between the two ranks around `(n - 1) * p`.
    Linear,
}

/// The `[lo, hi]` input range of the colour scale, taken from inter-quantile bounds of the
/// matched values rather than their min/max.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorDomain {
    pub lo: TotalFootprint,
    pub hi: TotalFootprint,
}

impl ColorDomain {
    pub fn new(lo: TotalFootprint, hi: TotalFootprint) -> Self {
        ColorDomain { lo, hi }
    }

    /// Computes the domain from matched values. Non-finite values are skipped.
    ///
    /// Returns `Error::EmptyMatchedValues` when nothing is left to sample, so an undefined
    /// domain never reaches the colour scale.
    pub fn from_values(
        values: &[TotalFootprint],
        lower_quantile: f64,
        upper_quantile: f64,
        method: QuantileMethod,
    ) -> Result<Self, Error> {
        let mut sorted_values: Vec<TotalFootprint> =
            values.iter().copied().filter(|v| v.is_finite()).collect();
        sorted_values.sort_by(|a, b| a.total_cmp(b));

        let lo = quantile(&sorted_values, lower_quantile, method);
        let hi = quantile(&sorted_values, upper_quantile, method);

        match (lo, hi) {
            (Some(lo), Some(hi)) => Ok(ColorDomain { lo, hi }),
            _ => Err(Error::EmptyMatchedValues),
        }
    }
}
