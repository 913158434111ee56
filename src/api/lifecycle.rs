use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::api::reactivity::{ChangeAction, classify_change};
use crate::api::{EngineInputs, EnginePhase, PlotConfig, RenderGeometry};
use crate::api::engine::{DOT_RADIUS_PX, LOADING_STATUS, ScatterEngine};
use crate::core::{Bounds, LinearScale, PlotArea, filter_points, project_records};
use crate::data::{DataQuery, DataSource, FetchOutcome, RangeFilter};
use crate::error::PlotResult;
use crate::render::{
    AxisStyle, CirclePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, build_x_axis,
    build_y_axis, diff_points,
};

/// One issued fetch, to be completed via `apply_fetch`.
///
/// The generation ties the completion back to the config identity that was
/// active when the fetch was issued; completions for older generations are
/// discarded on arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: DataQuery,
}

impl<R: Renderer, S: DataSource> ScatterEngine<R, S> {
    /// Mounts the engine into a measured container: performs the initial
    /// render with no data (loading status) and issues one fetch.
    pub fn mount(&mut self, container_width: f64) -> PlotResult<()> {
        self.model.container_width = container_width;
        self.render_pass(true)?;
        self.refresh_now()?;
        Ok(())
    }

    /// Applies an external input change, classifying it into exactly one
    /// action: no-op, re-render from cached records, or discard-and-refetch.
    pub fn update_inputs(&mut self, config: PlotConfig, bounds: Bounds) -> PlotResult<ChangeAction> {
        let next = EngineInputs::new(config, bounds);
        let action = classify_change(&self.model.inputs, &next);
        self.model.inputs = next;

        match action {
            ChangeAction::NoOp => {}
            ChangeAction::Render => {
                self.render_pass(true)?;
            }
            ChangeAction::FetchAndRender => {
                debug!(
                    dataset_id = %self.model.inputs.config.dataset_id,
                    "config identity changed, discarding cached records"
                );
                self.model.records = None;
                self.model.points.clear();
                self.model.geometry = None;
                self.model.last_observed_at = None;
                self.clear_selection();
                self.model.phase = EnginePhase::Loading;
                self.model.status_message = Some(LOADING_STATUS.to_owned());
                self.render_pass(true)?;
                self.refresh_now()?;
            }
        }

        Ok(action)
    }

    /// Host resize entry point: re-measures and re-renders through the
    /// width-dedup gate, so high-frequency resize events coalesce. Resizes
    /// never re-fetch.
    ///
    /// The process-wide resize listener belongs to the host and must be
    /// deregistered by the host on teardown.
    pub fn handle_resize(&mut self, container_width: f64) -> PlotResult<bool> {
        self.model.container_width = container_width;
        self.render_pass(false)
    }

    /// Issues a fetch for the active config identity and returns the request
    /// for the host to drive. Bumps the generation so any still-unresolved
    /// older fetch is discarded when it completes.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.model.generation += 1;
        if self.model.records.is_none() {
            self.model.phase = EnginePhase::Loading;
        }
        let config = &self.model.inputs.config;
        let mut field_ids: SmallVec<[String; 2]> = SmallVec::new();
        field_ids.push(config.x_field_id.clone());
        field_ids.push(config.y_field_id.clone());
        let filter = self.model.inputs.bounds.active().map(|bounds| {
            RangeFilter::from_bounds(&config.x_field_id, &config.y_field_id, bounds)
        });

        trace!(
            generation = self.model.generation,
            dataset_id = %config.dataset_id,
            filtered = filter.is_some(),
            "issue fetch"
        );
        FetchRequest {
            generation: self.model.generation,
            query: DataQuery {
                dataset_id: config.dataset_id.clone(),
                field_ids,
                filter,
            },
        }
    }

    /// Completes a fetch. Returns whether the result was applied.
    ///
    /// A completion is discarded silently (no error, no render) when its
    /// generation is no longer the active one or when the data source
    /// reports it as superseded by a newer request.
    pub fn apply_fetch(&mut self, generation: u64, outcome: FetchOutcome) -> PlotResult<bool> {
        if generation != self.model.generation {
            trace!(
                generation,
                active = self.model.generation,
                "discarding completion for stale generation"
            );
            return Ok(false);
        }

        match outcome {
            FetchOutcome::Superseded => {
                trace!(generation, "data source reported superseded result");
                Ok(false)
            }
            FetchOutcome::Records(records) => {
                debug!(generation, count = records.len(), "fetch completed");
                self.model.last_observed_at =
                    records.iter().filter_map(|record| record.observed_at).max();
                self.model.records = Some(records);
                self.model.phase = EnginePhase::Ready;
                self.model.status_message = None;
                // Stale selections never survive a data refresh.
                self.clear_selection();
                self.render_pass(true)?;
                Ok(true)
            }
        }
    }

    /// Convenience round trip for hosts that drive the data source inline:
    /// issue, fetch, apply. A transport error is returned to the caller's
    /// error channel; engine state and the last good frame stay untouched.
    pub fn refresh_now(&mut self) -> PlotResult<bool> {
        let request = self.begin_fetch();
        match self.source.fetch_latest(&request.query) {
            Ok(outcome) => self.apply_fetch(request.generation, outcome),
            Err(err) => {
                warn!(
                    error = %err,
                    dataset_id = %request.query.dataset_id,
                    "fetch failed, keeping last good state"
                );
                Err(err)
            }
        }
    }

    /// Runs one synchronous render pass. Returns whether a frame was drawn.
    ///
    /// Skipped entirely when the container width is unchanged from the last
    /// render and no forced refresh was requested. Without cached records a
    /// status frame (loading text) is drawn instead of data.
    pub fn render_pass(&mut self, force: bool) -> PlotResult<bool> {
        let width = self.model.container_width;
        if !force && self.model.rendered_width == Some(width) {
            return Ok(false);
        }

        let options = self.model.options;
        let plot_area = match PlotArea::from_container(width, options.height, options.margin) {
            Ok(area) => area,
            Err(err) => {
                warn!(error = %err, width, "skipping render pass on degenerate container");
                return Ok(false);
            }
        };
        self.model.rendered_width = Some(width);

        let Some(records) = &self.model.records else {
            let frame = self.build_status_frame(width);
            self.renderer.render(&frame)?;
            return Ok(true);
        };

        let config = &self.model.inputs.config;
        let projected = project_records(records, &config.x_field_id, &config.y_field_id);
        let points = filter_points(projected, self.model.inputs.bounds);

        let (x_extent, y_extent) = Self::padded_extents(&points);
        let x_scale = LinearScale::new(x_extent, 0.0, plot_area.width)?;
        // Domain minimum maps to the bottom pixel coordinate.
        let y_scale = LinearScale::new(y_extent, plot_area.height, 0.0)?;

        let plan = diff_points(
            &self.model.points,
            &points,
            options.with_transition,
            options.transition.enter_delay,
        );
        trace!(
            entered = plan.entered.len(),
            updated = plan.updated.len(),
            exited = plan.exited.len(),
            "reconciled point set"
        );

        let mut frame = RenderFrame::new(width, options.height)
            .with_transition(options.with_transition);

        let x_axis = build_x_axis(x_scale, plot_area, options.margin, options.height, AxisStyle::default())?;
        let y_axis = build_y_axis(y_scale, plot_area, options.margin, AxisStyle::default())?;
        frame.lines.extend(x_axis.lines);
        frame.texts.extend(x_axis.texts);
        frame.lines.extend(y_axis.lines);
        frame.texts.extend(y_axis.texts);

        for point in &plan.updated {
            frame.circles.push(self.project_dot(*point, x_scale, y_scale)?);
        }
        for point in &plan.entered {
            let mut circle = self.project_dot(*point, x_scale, y_scale)?;
            if let Some(delay) = plan.enter_delay {
                circle = circle.with_appear_delay(delay);
            }
            frame.circles.push(circle);
        }

        self.renderer.render(&frame)?;

        self.model.points = points;
        self.model.geometry = Some(RenderGeometry {
            x_scale,
            y_scale,
            x_extent_padded: x_extent,
            y_extent_padded: y_extent,
        });
        self.model.last_plan = plan;
        // Keep the selection invariant: a selected point is always a member
        // of the current point set.
        self.retain_selection_in_points();
        Ok(true)
    }

    fn project_dot(
        &self,
        point: crate::core::Point,
        x_scale: LinearScale,
        y_scale: LinearScale,
    ) -> PlotResult<CirclePrimitive> {
        let margin = self.model.options.margin;
        Ok(CirclePrimitive::new(
            margin.left + x_scale.scale(point.x)?,
            margin.top + y_scale.scale(point.y)?,
            DOT_RADIUS_PX,
            self.model.inputs.config.color,
        ))
    }

    fn build_status_frame(&self, width: f64) -> RenderFrame {
        let options = self.model.options;
        let status = self
            .model
            .status_message
            .clone()
            .unwrap_or_else(|| LOADING_STATUS.to_owned());
        RenderFrame::new(width, options.height).with_text(TextPrimitive::new(
            status,
            width / 2.0,
            options.height / 2.0,
            12.0,
            AxisStyle::default().color,
            TextHAlign::Center,
        ))
    }
}
