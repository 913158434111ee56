use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::cursor::SelectionState;
use crate::api::engine::ScatterEngine;
use crate::api::{EnginePhase, PlotConfig};
use crate::core::Bounds;
use crate::data::DataSource;
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

/// Serializable view of the engine state for hosts, debugging, and
/// differential tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub phase: EnginePhase,
    pub config: PlotConfig,
    pub bounds: Bounds,
    pub container_width: f64,
    pub rendered_width: Option<f64>,
    pub record_count: usize,
    pub point_count: usize,
    pub selection: SelectionState,
    pub status_message: Option<String>,
    pub last_observed_at: Option<DateTime<Utc>>,
}

impl<R: Renderer, S: DataSource> ScatterEngine<R, S> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            phase: self.model.phase,
            config: self.model.inputs.config.clone(),
            bounds: self.model.inputs.bounds,
            container_width: self.model.container_width,
            rendered_width: self.model.rendered_width,
            record_count: self.record_count(),
            point_count: self.model.points.len(),
            selection: self.model.selection,
            status_message: self.model.status_message.clone(),
            last_observed_at: self.model.last_observed_at,
        }
    }

    pub fn snapshot_json(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| PlotError::InvalidData(format!("failed to serialize snapshot: {err}")))
    }
}
