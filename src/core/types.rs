use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Plot-ready XY sample derived from one raw record.
///
/// Points are ephemeral: recomputed on every render from the cached record
/// set, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel margins between the container edges and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    pub fn validate(self) -> PlotResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 20.0, 40.0, 40.0)
    }
}

/// Inner drawing area in pixels, i.e. the container minus margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Derives the plot area from container dimensions and margins.
    pub fn from_container(
        container_width: f64,
        container_height: f64,
        margin: Margin,
    ) -> PlotResult<Self> {
        margin.validate()?;
        let area = Self::new(
            container_width - margin.horizontal(),
            container_height - margin.vertical(),
        );
        if !area.is_valid() {
            return Err(PlotError::InvalidPlotArea {
                width: area.width,
                height: area.height,
            });
        }
        Ok(area)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Host-owned domain limits, each axis optionally unbounded.
///
/// Bounds participate both in the server-side range filter attached to
/// fetches and in local re-filtering of already projected points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Bounds {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

impl Bounds {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            x_min: None,
            x_max: None,
            y_min: None,
            y_max: None,
        }
    }

    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min: Some(x_min),
            x_max: Some(x_max),
            y_min: Some(y_min),
            y_max: Some(y_max),
        }
    }

    /// Resolves the filterable rectangle, failing open.
    ///
    /// Filtering activates only when all four limits are present, finite,
    /// and ordered (`min <= max` per axis). Anything else disables the
    /// filter entirely rather than raising an error.
    #[must_use]
    pub fn active(self) -> Option<ActiveBounds> {
        let (x_min, x_max, y_min, y_max) =
            (self.x_min?, self.x_max?, self.y_min?, self.y_max?);
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        if x_min > x_max || y_min > y_max {
            return None;
        }
        Some(ActiveBounds {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

/// Fully resolved inclusive filter rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ActiveBounds {
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }
}
