/// Closed [min, max] range of values along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Computes the extent of an iterator of values, ignoring non-finite
    /// entries. Returns `None` when no finite value is seen.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;

        for value in values {
            if !value.is_finite() {
                continue;
            }
            min = min.min(value);
            max = max.max(value);
            seen = true;
        }

        seen.then_some(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Pads the extent outward by `ratio` of its span on both ends.
    ///
    /// Pure function of the input extent: a zero-span extent passes through
    /// unchanged, and re-padding the source extent always yields the same
    /// result. Degenerate domains are widened later, at scale construction.
    #[must_use]
    pub fn with_margin(self, ratio: f64) -> Self {
        let margin = self.span() * ratio;
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }
}
