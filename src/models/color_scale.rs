use crate::models::ColorDomain;
use crate::types::TotalFootprint;
use crate::utils::interpolate_cividis;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Sequential cividis scale over a [`ColorDomain`]. Values outside the domain are clamped
/// to the endpoint colours.
#[derive(Clone, Copy, Debug)]
pub struct SequentialColorScale {
    domain: ColorDomain,
}

impl SequentialColorScale {
    pub fn new(domain: ColorDomain) -> Self {
        SequentialColorScale { domain }
    }

    pub fn domain(&self) -> ColorDomain {
        self.domain
    }

    /// Position of `value` within the domain, clamped to `[0, 1]`. A zero-width domain maps
    /// everything to the midpoint.
    pub fn normalize(&self, value: TotalFootprint) -> f64 {
        let ColorDomain { lo, hi } = self.domain;
        let span = hi - lo;

        if span == 0.0 {
            return 0.5;
        }

        ((value - lo) / span).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: TotalFootprint) -> Rgb {
        interpolate_cividis(self.normalize(value))
    }
}
