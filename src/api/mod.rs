mod brush;
mod config;
mod cursor;
mod engine;
mod lifecycle;
mod reactivity;
mod snapshot;
mod tooltip;

pub use brush::ZoomSelection;
pub use config::{EngineOptions, PlotConfig, TransitionTiming};
pub use cursor::{CrosshairOverlay, PointerPosition, SelectionState};
pub use engine::{EnginePhase, RenderGeometry, ScatterEngine};
pub use lifecycle::FetchRequest;
pub use reactivity::{
    ChangeAction, ConfigDifference, EngineInputs, classify_change, compare_configs,
};
pub use snapshot::EngineSnapshot;
pub use tooltip::TooltipContext;
