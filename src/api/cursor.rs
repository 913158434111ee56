use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::api::RenderGeometry;
use crate::api::engine::{HIGHLIGHT_RADIUS_PX, ScatterEngine};
use crate::core::Point;
use crate::data::DataSource;
use crate::render::{CirclePrimitive, Color, LinePrimitive, PointKey, Renderer};

const CROSSHAIR_STROKE_WIDTH: f64 = 1.0;
const CROSSHAIR_COLOR: Color = Color::rgb(0.196, 0.196, 0.196);

/// Pointer position in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Cursor-driven selection state read by the tooltip collaborator.
///
/// Mutated only by the cursor controller. A non-null `selected` is always a
/// member of the current point set; refreshes and re-filters clear it rather
/// than carrying it over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SelectionState {
    pub selected: Option<Point>,
    pub pointer: Option<PointerPosition>,
}

/// The two crosshair lines tracking the pointer, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairOverlay {
    pub vertical: LinePrimitive,
    pub horizontal: LinePrimitive,
}

impl<R: Renderer, S: DataSource> ScatterEngine<R, S> {
    /// Handles one pointer-move event over the plot, synchronously.
    ///
    /// Takes container coordinates. Runs a linear nearest-neighbor scan in
    /// pixel space over the full visible point set on every event; no
    /// debouncing.
    pub fn pointer_move(&mut self, container_x: f64, container_y: f64) {
        self.model.selection.pointer = Some(PointerPosition {
            x: container_x,
            y: container_y,
        });

        let Some(geometry) = self.model.geometry else {
            self.model.selection.selected = None;
            return;
        };
        let margin = self.model.options.margin;
        let plot_x = container_x - margin.left;
        let plot_y = container_y - margin.top;
        self.model.selection.selected =
            nearest_point(&self.model.points, geometry, plot_x, plot_y);
    }

    /// Handles pointer-leave: clears selection, hides the crosshair, and
    /// removes the highlight marker.
    pub fn pointer_leave(&mut self) {
        self.clear_selection();
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.model.selection
    }

    /// Crosshair overlay geometry while hovering; `None` once the pointer
    /// left the plot or before anything was rendered.
    #[must_use]
    pub fn crosshair_overlay(&self) -> Option<CrosshairOverlay> {
        let pointer = self.model.selection.pointer?;
        let width = self.model.rendered_width?;
        let options = self.model.options;

        Some(CrosshairOverlay {
            vertical: LinePrimitive::new(
                pointer.x,
                options.margin.top,
                pointer.x,
                options.height - options.margin.bottom,
                CROSSHAIR_STROKE_WIDTH,
                CROSSHAIR_COLOR,
            ),
            horizontal: LinePrimitive::new(
                options.margin.left,
                pointer.y,
                width - options.margin.right,
                pointer.y,
                CROSSHAIR_STROKE_WIDTH,
                CROSSHAIR_COLOR,
            ),
        })
    }

    /// Highlight marker over the selected point: slightly larger than a data
    /// dot, drawn in a darkened series color.
    #[must_use]
    pub fn highlight_marker(&self) -> Option<CirclePrimitive> {
        let selected = self.model.selection.selected?;
        let geometry = self.model.geometry?;
        let margin = self.model.options.margin;

        let cx = margin.left + geometry.x_scale.scale(selected.x).ok()?;
        let cy = margin.top + geometry.y_scale.scale(selected.y).ok()?;
        Some(CirclePrimitive::new(
            cx,
            cy,
            HIGHLIGHT_RADIUS_PX,
            self.model.inputs.config.color.darker(),
        ))
    }

    pub(super) fn clear_selection(&mut self) {
        self.model.selection = SelectionState::default();
    }

    /// Drops a selection that is no longer a member of the current point
    /// set, e.g. after local re-filtering narrowed the visible data.
    pub(super) fn retain_selection_in_points(&mut self) {
        let Some(selected) = self.model.selection.selected else {
            return;
        };
        let key = PointKey::of(selected);
        let still_visible = self
            .model
            .points
            .iter()
            .any(|point| PointKey::of(*point) == key);
        if !still_visible {
            self.model.selection.selected = None;
        }
    }
}

/// Minimum Euclidean pixel distance over the visible set.
fn nearest_point(
    points: &[Point],
    geometry: RenderGeometry,
    plot_x: f64,
    plot_y: f64,
) -> Option<Point> {
    points
        .iter()
        .filter_map(|point| {
            let px = geometry.x_scale.scale(point.x).ok()?;
            let py = geometry.y_scale.scale(point.y).ok()?;
            let distance = (px - plot_x).hypot(py - plot_y);
            Some((OrderedFloat(distance), *point))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, point)| point)
}
