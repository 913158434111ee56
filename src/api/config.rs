use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Margin;
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Per-plot configuration, compared structurally between updates.
///
/// `dataset_id`, `x_field_id`, and `y_field_id` form the config identity:
/// changing any of them invalidates cached records. `color` only affects
/// presentation.
///
/// The type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub dataset_id: String,
    pub x_field_id: String,
    pub y_field_id: String,
    #[serde(default = "default_series_color")]
    pub color: Color,
}

impl PlotConfig {
    #[must_use]
    pub fn new(
        dataset_id: impl Into<String>,
        x_field_id: impl Into<String>,
        y_field_id: impl Into<String>,
    ) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            x_field_id: x_field_id.into(),
            y_field_id: y_field_id.into(),
            color: default_series_color(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

fn default_series_color() -> Color {
    // steel blue
    Color::rgb(0.27, 0.51, 0.71)
}

/// Injectable timing for the render engine's deferred effects.
///
/// The staggered point-enter delay is the only timer-driven behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTiming {
    pub enter_delay: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(250),
        }
    }
}

/// Engine bootstrap options supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub height: f64,
    pub margin: Margin,
    #[serde(default = "default_true")]
    pub with_brush: bool,
    #[serde(default = "default_true")]
    pub with_tooltip: bool,
    #[serde(default = "default_true")]
    pub with_transition: bool,
    #[serde(default)]
    pub transition: TransitionTiming,
}

impl EngineOptions {
    #[must_use]
    pub fn new(height: f64, margin: Margin) -> Self {
        Self {
            height,
            margin,
            with_brush: true,
            with_tooltip: true,
            with_transition: true,
            transition: TransitionTiming::default(),
        }
    }

    #[must_use]
    pub fn with_brush(mut self, with_brush: bool) -> Self {
        self.with_brush = with_brush;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, with_tooltip: bool) -> Self {
        self.with_tooltip = with_tooltip;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, with_transition: bool) -> Self {
        self.with_transition = with_transition;
        self
    }

    #[must_use]
    pub fn with_transition_timing(mut self, transition: TransitionTiming) -> Self {
        self.transition = transition;
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(PlotError::InvalidData(
                "engine height must be finite and > 0".to_owned(),
            ));
        }
        self.margin.validate()?;
        if self.height - self.margin.vertical() <= 0.0 {
            return Err(PlotError::InvalidPlotArea {
                width: 0.0,
                height: self.height - self.margin.vertical(),
            });
        }
        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self::new(400.0, Margin::default())
    }
}

fn default_true() -> bool {
    true
}
