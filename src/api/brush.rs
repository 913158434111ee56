use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::api::engine::ScatterEngine;
use crate::core::PlotArea;
use crate::data::DataSource;
use crate::error::PlotResult;
use crate::render::{Color, RectPrimitive, Renderer};

const BRUSH_FILL: Color = Color::rgba(0.47, 0.47, 0.47, 0.3);
const BRUSH_BORDER: Color = Color::rgb(0.3, 0.3, 0.3);
const BRUSH_BORDER_WIDTH: f64 = 1.0;

/// Domain rectangle reported to the host when a brush drag completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomSelection {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Drag state of the brush overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) enum BrushDrag {
    #[default]
    Idle,
    Dragging {
        origin_x: f64,
        origin_y: f64,
        current_x: f64,
        current_y: f64,
    },
}

impl<R: Renderer, S: DataSource> ScatterEngine<R, S> {
    /// Registers the host callback invoked when a brush drag completes with
    /// a non-degenerate selection.
    pub fn set_zoom_callback(&mut self, callback: impl FnMut(ZoomSelection) + 'static) {
        self.on_zoom = Some(Box::new(callback));
    }

    /// Starts a brush drag at plot-area coordinates (container coordinates
    /// minus margins). Inert while brushing is disabled: the overlay still
    /// exists as a hit-region for pointer tracking, but never drags.
    pub fn brush_start(&mut self, plot_x: f64, plot_y: f64) {
        if !self.model.options.with_brush {
            return;
        }
        let Some(area) = self.active_plot_area() else {
            return;
        };
        let (x, y) = clamp_to_area(plot_x, plot_y, area);
        self.model.brush = BrushDrag::Dragging {
            origin_x: x,
            origin_y: y,
            current_x: x,
            current_y: y,
        };
    }

    /// Extends the active drag. No zoom is reported during the drag, only on
    /// completion.
    pub fn brush_move(&mut self, plot_x: f64, plot_y: f64) {
        let BrushDrag::Dragging {
            origin_x, origin_y, ..
        } = self.model.brush
        else {
            return;
        };
        let Some(area) = self.active_plot_area() else {
            return;
        };
        let (x, y) = clamp_to_area(plot_x, plot_y, area);
        self.model.brush = BrushDrag::Dragging {
            origin_x,
            origin_y,
            current_x: x,
            current_y: y,
        };
    }

    /// Completes the drag: converts the pixel rectangle back into domain
    /// bounds through the inverse scales, reports them to the host, then
    /// resets the visual brush and clears any active point highlight (the
    /// visible domain is about to change).
    ///
    /// The Y axis inversion means the rectangle's top pixel edge maps to
    /// `y_max` and its bottom edge to `y_min`. A degenerate (zero-area)
    /// selection reports nothing but still resets.
    pub fn brush_end(&mut self) -> PlotResult<Option<ZoomSelection>> {
        let BrushDrag::Dragging {
            origin_x,
            origin_y,
            current_x,
            current_y,
        } = std::mem::take(&mut self.model.brush)
        else {
            return Ok(None);
        };

        let Some(geometry) = self.model.geometry else {
            return Ok(None);
        };

        let (left, right) = min_max(origin_x, current_x);
        let (top, bottom) = min_max(origin_y, current_y);
        if left == right || top == bottom {
            trace!("ignoring degenerate brush selection");
            return Ok(None);
        }

        let selection = ZoomSelection {
            x_min: geometry.x_scale.invert(left)?,
            x_max: geometry.x_scale.invert(right)?,
            y_min: geometry.y_scale.invert(bottom)?,
            y_max: geometry.y_scale.invert(top)?,
        };
        trace!(
            x_min = selection.x_min,
            x_max = selection.x_max,
            y_min = selection.y_min,
            y_max = selection.y_max,
            "brush completed"
        );

        if let Some(callback) = self.on_zoom.as_mut() {
            callback(selection);
        }
        self.clear_selection();
        Ok(Some(selection))
    }

    /// The active drag rectangle in container coordinates, for overlay
    /// drawing; `None` outside a drag.
    #[must_use]
    pub fn brush_region(&self) -> Option<RectPrimitive> {
        let BrushDrag::Dragging {
            origin_x,
            origin_y,
            current_x,
            current_y,
        } = self.model.brush
        else {
            return None;
        };
        let margin = self.model.options.margin;
        let (left, right) = min_max(origin_x, current_x);
        let (top, bottom) = min_max(origin_y, current_y);
        Some(
            RectPrimitive::new(
                margin.left + left,
                margin.top + top,
                right - left,
                bottom - top,
                BRUSH_FILL,
            )
            .with_border(BRUSH_BORDER_WIDTH, BRUSH_BORDER),
        )
    }

    fn active_plot_area(&self) -> Option<PlotArea> {
        let width = self.model.rendered_width?;
        let options = self.model.options;
        PlotArea::from_container(width, options.height, options.margin).ok()
    }
}

fn clamp_to_area(x: f64, y: f64, area: PlotArea) -> (f64, f64) {
    (x.clamp(0.0, area.width), y.clamp(0.0, area.height))
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
