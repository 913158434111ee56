use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::brush::BrushDrag;
use crate::api::cursor::SelectionState;
use crate::api::{EngineInputs, EngineOptions, PlotConfig, ZoomSelection};
use crate::core::{Bounds, Extent, LinearScale, Point};
use crate::data::{DataSource, RawRecord};
use crate::error::PlotResult;
use crate::render::{RenderPlan, Renderer};

pub(super) const DOT_RADIUS_PX: f64 = 5.0;
pub(super) const HIGHLIGHT_RADIUS_PX: f64 = 7.0;
pub(super) const EXTENT_PADDING_RATIO: f64 = 0.1;
pub(super) const LOADING_STATUS: &str = "Loading...";

/// Lifecycle phase of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EnginePhase {
    /// Constructed, nothing fetched or drawn yet.
    #[default]
    Idle,
    /// A fetch for the active config identity has been issued and no record
    /// set is available.
    Loading,
    /// A record set is cached and renderable.
    Ready,
}

/// Scales and padded extents of the last data render.
///
/// Recomputed from the visible point set on every render pass, never
/// persisted across renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderGeometry {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub x_extent_padded: Extent,
    pub y_extent_padded: Extent,
}

/// Per-instance mutable engine state, passed by reference into each
/// sub-operation and inspected through the facade accessors.
pub(super) struct EngineModel {
    pub(super) options: EngineOptions,
    pub(super) inputs: EngineInputs,
    pub(super) phase: EnginePhase,
    pub(super) status_message: Option<String>,
    pub(super) records: Option<Vec<RawRecord>>,
    /// Point set of the last render pass; always derived from `records`.
    pub(super) points: Vec<Point>,
    pub(super) geometry: Option<RenderGeometry>,
    pub(super) container_width: f64,
    pub(super) rendered_width: Option<f64>,
    pub(super) generation: u64,
    pub(super) selection: SelectionState,
    pub(super) brush: BrushDrag,
    pub(super) last_plan: RenderPlan,
    pub(super) last_observed_at: Option<DateTime<Utc>>,
}

/// Main orchestration facade consumed by host applications.
///
/// `ScatterEngine` owns the rendering surface and the data-source handle for
/// its lifetime, coordinates projection, scales, reconciliation, and the
/// interaction controllers, and serializes concurrent fetches through a
/// generation counter. All state is instance-local; nothing is shared across
/// engines.
pub struct ScatterEngine<R: Renderer, S: DataSource> {
    pub(super) renderer: R,
    pub(super) source: S,
    pub(super) model: EngineModel,
    pub(super) on_zoom: Option<Box<dyn FnMut(ZoomSelection)>>,
}

impl<R: Renderer, S: DataSource> ScatterEngine<R, S> {
    /// Creates an idle engine; `mount` performs the initial render and fetch.
    pub fn new(
        renderer: R,
        source: S,
        options: EngineOptions,
        config: PlotConfig,
        bounds: Bounds,
    ) -> PlotResult<Self> {
        options.validate()?;

        Ok(Self {
            renderer,
            source,
            model: EngineModel {
                options,
                inputs: EngineInputs::new(config, bounds),
                phase: EnginePhase::Idle,
                status_message: Some(LOADING_STATUS.to_owned()),
                records: None,
                points: Vec::new(),
                geometry: None,
                container_width: 0.0,
                rendered_width: None,
                generation: 0,
                selection: SelectionState::default(),
                brush: BrushDrag::Idle,
                last_plan: RenderPlan::default(),
                last_observed_at: None,
            },
            on_zoom: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        self.model.phase
    }

    /// Host-visible status line ("Loading..." while no data is cached).
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.model.status_message.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.model.options
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.model.inputs.config
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.model.inputs.bounds
    }

    /// The visible point set of the last render pass.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.model.points
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.model.records.as_ref().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn geometry(&self) -> Option<RenderGeometry> {
        self.model.geometry
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.model.container_width
    }

    #[must_use]
    pub fn rendered_width(&self) -> Option<f64> {
        self.model.rendered_width
    }

    /// Enter/update/exit outcome of the last data render, for hosts that
    /// animate.
    #[must_use]
    pub fn last_render_plan(&self) -> &RenderPlan {
        &self.model.last_plan
    }

    /// Newest sample timestamp across the active record set, when the data
    /// source provides timestamps.
    #[must_use]
    pub fn last_observed_at(&self) -> Option<DateTime<Utc>> {
        self.model.last_observed_at
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Releases the rendering surface on teardown.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn padded_extents(points: &[Point]) -> (Extent, Extent) {
        let x_extent = Extent::from_values(points.iter().map(|point| point.x))
            .unwrap_or(Extent::new(0.0, 1.0))
            .with_margin(EXTENT_PADDING_RATIO);
        let y_extent = Extent::from_values(points.iter().map(|point| point.y))
            .unwrap_or(Extent::new(0.0, 1.0))
            .with_margin(EXTENT_PADDING_RATIO);
        (x_extent, y_extent)
    }
}
