use std::collections::VecDeque;

use scatter_rs::api::{ChangeAction, EngineOptions, EnginePhase, PlotConfig, ScatterEngine};
use scatter_rs::core::{Bounds, Margin, Point};
use scatter_rs::data::{DataQuery, DataSource, FetchOutcome, RawRecord, record_of};
use scatter_rs::error::{PlotError, PlotResult};
use scatter_rs::render::NullRenderer;

/// Data source scripted with one canned response per fetch.
struct ScriptedSource {
    script: VecDeque<PlotResult<FetchOutcome>>,
    calls: usize,
    last_query: Option<DataQuery>,
}

impl ScriptedSource {
    fn new(script: Vec<PlotResult<FetchOutcome>>) -> Self {
        Self {
            script: script.into(),
            calls: 0,
            last_query: None,
        }
    }

    fn records(records: Vec<RawRecord>) -> Self {
        Self::new(vec![Ok(FetchOutcome::Records(records))])
    }
}

impl DataSource for ScriptedSource {
    fn fetch_latest(&mut self, query: &DataQuery) -> PlotResult<FetchOutcome> {
        self.calls += 1;
        self.last_query = Some(query.clone());
        self.script
            .pop_front()
            .unwrap_or_else(|| Ok(FetchOutcome::Records(Vec::new())))
    }
}

fn sample_records() -> Vec<RawRecord> {
    vec![
        record_of("temperature", 5.0, "humidity", 5.0),
        record_of("temperature", 20.0, "humidity", 20.0),
    ]
}

fn sample_config() -> PlotConfig {
    PlotConfig::new("sensors", "temperature", "humidity")
}

fn flat_options() -> EngineOptions {
    EngineOptions::new(50.0, Margin::new(0.0, 0.0, 0.0, 0.0))
}

fn build_engine(source: ScriptedSource) -> ScatterEngine<NullRenderer, ScriptedSource> {
    ScatterEngine::new(
        NullRenderer::default(),
        source,
        flat_options(),
        sample_config(),
        Bounds::unbounded(),
    )
    .expect("engine init")
}

#[test]
fn mount_renders_loading_frame_then_data() {
    let mut engine = build_engine(ScriptedSource::records(sample_records()));
    assert_eq!(engine.phase(), EnginePhase::Idle);

    engine.mount(200.0).expect("mount");

    // One status frame, one data frame.
    assert_eq!(engine.renderer().render_calls, 2);
    assert_eq!(engine.phase(), EnginePhase::Ready);
    assert_eq!(engine.points().len(), 2);
    assert_eq!(engine.status_message(), None);
    assert_eq!(engine.source().calls, 1);
}

#[test]
fn superseded_result_is_discarded_silently() {
    let mut engine = build_engine(ScriptedSource::new(vec![Ok(FetchOutcome::Superseded)]));

    engine.mount(200.0).expect("mount");

    // Only the loading frame was drawn; state was left unchanged.
    assert_eq!(engine.renderer().render_calls, 1);
    assert_eq!(engine.phase(), EnginePhase::Loading);
    assert_eq!(engine.record_count(), 0);
    assert_eq!(engine.status_message(), Some("Loading..."));
}

#[test]
fn stale_generation_completion_is_discarded() {
    let mut engine = build_engine(ScriptedSource::new(Vec::new()));
    engine.mount(200.0).expect("mount");
    let draws_after_mount = engine.renderer().render_calls;

    let stale = engine.begin_fetch();
    let _ = engine.begin_fetch();

    let applied = engine
        .apply_fetch(stale.generation, FetchOutcome::Records(sample_records()))
        .expect("apply");
    assert!(!applied);
    assert_eq!(engine.points().len(), 0);
    assert_eq!(engine.renderer().render_calls, draws_after_mount);
}

#[test]
fn active_generation_completion_is_applied() {
    let mut engine = build_engine(ScriptedSource::new(Vec::new()));
    engine.mount(200.0).expect("mount");

    let request = engine.begin_fetch();
    let applied = engine
        .apply_fetch(request.generation, FetchOutcome::Records(sample_records()))
        .expect("apply");
    assert!(applied);
    assert_eq!(engine.phase(), EnginePhase::Ready);
    assert_eq!(engine.points().len(), 2);
}

#[test]
fn unchanged_width_without_force_does_not_redraw() {
    let mut engine = build_engine(ScriptedSource::records(sample_records()));
    engine.mount(200.0).expect("mount");
    let draws = engine.renderer().render_calls;

    assert!(!engine.render_pass(false).expect("gated pass"));
    assert!(!engine.handle_resize(200.0).expect("same-width resize"));
    assert_eq!(engine.renderer().render_calls, draws);

    assert!(engine.render_pass(true).expect("forced pass"));
    assert_eq!(engine.renderer().render_calls, draws + 1);
}

#[test]
fn resize_to_new_width_redraws_without_refetching() {
    let mut engine = build_engine(ScriptedSource::records(sample_records()));
    engine.mount(200.0).expect("mount");
    let draws = engine.renderer().render_calls;

    assert!(engine.handle_resize(320.0).expect("resize"));
    assert_eq!(engine.renderer().render_calls, draws + 1);
    assert_eq!(engine.rendered_width(), Some(320.0));
    assert_eq!(engine.source().calls, 1);
}

#[test]
fn color_change_rerenders_from_cached_records() {
    let mut engine = build_engine(ScriptedSource::records(sample_records()));
    engine.mount(200.0).expect("mount");
    let draws = engine.renderer().render_calls;

    let recolored = sample_config().with_color(scatter_rs::render::Color::rgb(0.9, 0.2, 0.2));
    let action = engine
        .update_inputs(recolored, Bounds::unbounded())
        .expect("update");

    assert_eq!(action, ChangeAction::Render);
    assert_eq!(engine.renderer().render_calls, draws + 1);
    assert_eq!(engine.source().calls, 1);
}

#[test]
fn identity_change_discards_cache_and_refetches() {
    let replacement = vec![record_of("pressure", 1.0, "humidity", 2.0)];
    let mut engine = build_engine(ScriptedSource::new(vec![
        Ok(FetchOutcome::Records(sample_records())),
        Ok(FetchOutcome::Records(replacement)),
    ]));
    engine.mount(200.0).expect("mount");
    let draws = engine.renderer().render_calls;

    let mut reconfigured = sample_config();
    reconfigured.x_field_id = "pressure".to_owned();
    let action = engine
        .update_inputs(reconfigured, Bounds::unbounded())
        .expect("update");

    assert_eq!(action, ChangeAction::FetchAndRender);
    assert_eq!(engine.source().calls, 2);
    // Loading frame plus the new data frame.
    assert_eq!(engine.renderer().render_calls, draws + 2);
    assert_eq!(engine.points(), &[Point::new(1.0, 2.0)]);

    // The cache was cleared first, so the replacement set entered fresh
    // with no staggered delay.
    let plan = engine.last_render_plan();
    assert_eq!(plan.entered.len(), 1);
    assert!(plan.updated.is_empty());
    assert_eq!(plan.enter_delay, None);
}

#[test]
fn bounds_change_refilters_locally_without_refetch() {
    let mut engine = build_engine(ScriptedSource::records(sample_records()));
    engine.mount(200.0).expect("mount");
    assert_eq!(engine.points().len(), 2);

    let action = engine
        .update_inputs(sample_config(), Bounds::new(0.0, 10.0, 0.0, 10.0))
        .expect("update");

    assert_eq!(action, ChangeAction::Render);
    assert_eq!(engine.points(), &[Point::new(5.0, 5.0)]);
    assert_eq!(engine.source().calls, 1);
}

#[test]
fn inverted_bounds_fail_open_locally_and_in_the_query() {
    let mut engine = build_engine(ScriptedSource::records(sample_records()));
    engine.mount(200.0).expect("mount");

    engine
        .update_inputs(sample_config(), Bounds::new(10.0, 0.0, 0.0, 10.0))
        .expect("update");
    assert_eq!(engine.points().len(), 2);

    let request = engine.begin_fetch();
    assert!(request.query.filter.is_none());
}

#[test]
fn active_bounds_attach_a_two_predicate_range_filter() {
    let mut engine = build_engine(ScriptedSource::records(sample_records()));
    engine
        .update_inputs(sample_config(), Bounds::new(0.0, 10.0, 1.0, 9.0))
        .expect("update");

    let request = engine.begin_fetch();
    let filter = request.query.filter.expect("active filter");
    assert_eq!(filter.predicates.len(), 2);
    assert_eq!(filter.predicates[0].field_id, "temperature");
    assert_eq!(filter.predicates[0].gte, 0.0);
    assert_eq!(filter.predicates[0].lte, 10.0);
    assert_eq!(filter.predicates[1].field_id, "humidity");
    assert_eq!(filter.predicates[1].gte, 1.0);
    assert_eq!(filter.predicates[1].lte, 9.0);
}

#[test]
fn fetch_error_keeps_the_last_good_state() {
    let mut engine = build_engine(ScriptedSource::new(vec![
        Ok(FetchOutcome::Records(sample_records())),
        Err(PlotError::Fetch {
            dataset_id: "sensors".to_owned(),
            message: "connection reset".to_owned(),
        }),
    ]));
    engine.mount(200.0).expect("mount");
    let draws = engine.renderer().render_calls;

    let result = engine.refresh_now();
    assert!(result.is_err());
    assert_eq!(engine.phase(), EnginePhase::Ready);
    assert_eq!(engine.points().len(), 2);
    assert_eq!(engine.renderer().render_calls, draws);
}

#[test]
fn empty_record_set_is_a_valid_terminal_state() {
    let mut engine = build_engine(ScriptedSource::records(Vec::new()));
    engine.mount(200.0).expect("mount");

    assert_eq!(engine.phase(), EnginePhase::Ready);
    assert!(engine.points().is_empty());
    // Axes still rendered from the fallback domain.
    assert!(engine.renderer().last_line_count > 0);
    assert_eq!(engine.renderer().last_circle_count, 0);
}

#[test]
fn single_point_zero_span_extent_renders_without_error() {
    let mut engine = build_engine(ScriptedSource::records(vec![record_of(
        "temperature",
        1.0,
        "humidity",
        2.0,
    )]));
    engine.mount(200.0).expect("mount");

    assert_eq!(engine.points(), &[Point::new(1.0, 2.0)]);
    let geometry = engine.geometry().expect("geometry");
    // A zero-span extent padded by 10% stays put; the scale guards the span.
    assert_eq!(geometry.x_extent_padded.min, 1.0);
    assert_eq!(geometry.x_extent_padded.max, 1.0);
    assert_eq!(engine.renderer().last_circle_count, 1);
}

#[test]
fn newest_observed_timestamp_is_tracked() {
    use chrono::{TimeZone, Utc};

    let older = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let newer = Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap();
    let records = vec![
        record_of("temperature", 1.0, "humidity", 2.0).with_observed_at(newer),
        record_of("temperature", 3.0, "humidity", 4.0).with_observed_at(older),
    ];

    let mut engine = build_engine(ScriptedSource::records(records));
    engine.mount(200.0).expect("mount");

    assert_eq!(engine.last_observed_at(), Some(newer));
}

#[test]
fn degenerate_container_width_skips_the_pass() {
    let mut engine = build_engine(ScriptedSource::records(sample_records()));

    assert!(!engine.handle_resize(0.0).expect("degenerate resize"));
    assert_eq!(engine.renderer().render_calls, 0);
    assert_eq!(engine.rendered_width(), None);
}
