use crate::api::PlotConfig;
use crate::api::cursor::SelectionState;
use crate::api::engine::ScatterEngine;
use crate::data::DataSource;
use crate::render::Renderer;

/// Everything the external tooltip renderer needs for one paint: the active
/// config, the selection state, and the container dimensions. Content
/// rendering is entirely the collaborator's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipContext<'a> {
    pub config: &'a PlotConfig,
    pub selection: SelectionState,
    pub container_width: f64,
    pub container_height: f64,
}

impl<R: Renderer, S: DataSource> ScatterEngine<R, S> {
    /// Tooltip input for the current pointer position; `None` while tooltips
    /// are disabled or the pointer is outside the plot.
    #[must_use]
    pub fn tooltip_context(&self) -> Option<TooltipContext<'_>> {
        if !self.model.options.with_tooltip {
            return None;
        }
        self.model.selection.pointer?;

        Some(TooltipContext {
            config: &self.model.inputs.config,
            selection: self.model.selection,
            container_width: self.model.container_width,
            container_height: self.model.options.height,
        })
    }
}
