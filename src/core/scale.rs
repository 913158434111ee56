use crate::core::Extent;
use crate::error::{PlotError, PlotResult};

/// Minimum domain span kept after normalizing a degenerate extent.
const MIN_DOMAIN_SPAN: f64 = 0.000_001;

/// Monotonic linear mapping from a value domain to a pixel range.
///
/// The range is explicit rather than derived from a viewport so the Y axis
/// can invert by construction: `range_start > range_end` maps the domain
/// minimum to the bottom pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Builds a scale from a domain extent and a pixel range.
    ///
    /// A zero-span domain is widened symmetrically to a minimum span so the
    /// mapping never divides by zero; a single point or an empty extent
    /// padded to itself still produces a usable scale.
    pub fn new(domain: Extent, range_start: f64, range_end: f64) -> PlotResult<Self> {
        if !domain.min.is_finite() || !domain.max.is_finite() {
            return Err(PlotError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(PlotError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        let (domain_start, domain_end) = normalize_domain(domain.min, domain.max);
        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_range_inverted(self) -> bool {
        self.range_start > self.range_end
    }

    /// Maps a domain value to pixel space.
    pub fn scale(self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Maps a pixel coordinate back to domain space.
    pub fn invert(self, pixel: f64) -> PlotResult<f64> {
        if !pixel.is_finite() {
            return Err(PlotError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        if tick_count == 0 {
            return Vec::new();
        }
        if tick_count == 1 {
            return vec![self.domain_start];
        }

        let span = self.domain_end - self.domain_start;
        let denominator = (tick_count - 1) as f64;
        (0..tick_count)
            .map(|index| self.domain_start + span * (index as f64) / denominator)
            .collect()
    }
}

fn normalize_domain(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        let half = MIN_DOMAIN_SPAN / 2.0;
        return (min - half, max + half);
    }
    (min, max)
}
