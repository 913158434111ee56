use serde::{Deserialize, Serialize};

use crate::api::PlotConfig;
use crate::core::Bounds;

/// Classification of a config transition, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ConfigDifference {
    /// No relevant field changed.
    #[default]
    None,
    /// Only presentation-affecting fields changed.
    Render,
    /// Config identity changed: cached records are invalid.
    DataWithClear,
}

/// Compares two configs structurally.
///
/// Identity changes dominate: a simultaneous identity and presentation
/// change classifies as `DataWithClear`.
#[must_use]
pub fn compare_configs(prev: &PlotConfig, next: &PlotConfig) -> ConfigDifference {
    if prev.dataset_id != next.dataset_id
        || prev.x_field_id != next.x_field_id
        || prev.y_field_id != next.y_field_id
    {
        return ConfigDifference::DataWithClear;
    }
    if prev.color != next.color {
        return ConfigDifference::Render;
    }
    ConfigDifference::None
}

/// The externally supplied inputs the engine reacts to.
///
/// Container width is not part of this snapshot: resizes go through the
/// render gate, which dedups against the last rendered width instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineInputs {
    pub config: PlotConfig,
    pub bounds: Bounds,
}

impl EngineInputs {
    #[must_use]
    pub fn new(config: PlotConfig, bounds: Bounds) -> Self {
        Self { config, bounds }
    }
}

/// What an input transition requires of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeAction {
    NoOp,
    Render,
    FetchAndRender,
}

/// Classifies an input transition into exactly one action.
///
/// Bounds deltas force a re-render (local re-filtering) but never a
/// re-fetch; only identity-level config changes fetch.
#[must_use]
pub fn classify_change(prev: &EngineInputs, next: &EngineInputs) -> ChangeAction {
    match compare_configs(&prev.config, &next.config) {
        ConfigDifference::DataWithClear => ChangeAction::FetchAndRender,
        ConfigDifference::Render => ChangeAction::Render,
        ConfigDifference::None => {
            if prev.bounds != next.bounds {
                ChangeAction::Render
            } else {
                ChangeAction::NoOp
            }
        }
    }
}
