//! scatter-rs: interactive scatter-plot engine for sensor dashboards.
//!
//! This crate turns a stream of fetched time-series records into a scaled,
//! incrementally updated scatter plot with brushing, nearest-point cursor
//! highlighting, a tooltip protocol, and resize/config reactivity. Data
//! fetching and tooltip content rendering stay behind seams (`data::DataSource`,
//! `api::TooltipContext`) owned by the host application.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{EngineOptions, PlotConfig, ScatterEngine};
pub use error::{PlotError, PlotResult};
