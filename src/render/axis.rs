use crate::core::{LinearScale, Margin, PlotArea};
use crate::error::PlotResult;
use crate::render::{Color, LinePrimitive, TextHAlign, TextPrimitive};

pub(crate) const X_AXIS_TARGET_SPACING_PX: f64 = 72.0;
pub(crate) const Y_AXIS_TARGET_SPACING_PX: f64 = 26.0;
pub(crate) const AXIS_MIN_TICKS: usize = 2;
pub(crate) const AXIS_MAX_TICKS: usize = 12;

const TICK_MARK_LENGTH_PX: f64 = 6.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;

/// Visual tuning for both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    pub color: Color,
    pub stroke_width: f64,
    pub font_size_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.2, 0.2, 0.2),
            stroke_width: 1.0,
            font_size_px: 10.0,
        }
    }
}

/// Axis lines, tick marks, and labels for one draw pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisScene {
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Derives a tick count from the available pixel span and a target spacing.
#[must_use]
pub(crate) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Builds the bottom X axis: base line, tick marks, and labels.
///
/// Coordinates are container-relative; the axis sits just below the plot
/// area at `container_height - margin.bottom`.
pub fn build_x_axis(
    scale: LinearScale,
    plot_area: PlotArea,
    margin: Margin,
    container_height: f64,
    style: AxisStyle,
) -> PlotResult<AxisScene> {
    let baseline_y = container_height - margin.bottom;
    let mut scene = AxisScene::default();
    scene.lines.push(LinePrimitive::new(
        margin.left,
        baseline_y,
        margin.left + plot_area.width,
        baseline_y,
        style.stroke_width,
        style.color,
    ));

    let tick_count = axis_tick_target_count(
        plot_area.width,
        X_AXIS_TARGET_SPACING_PX,
        AXIS_MIN_TICKS,
        AXIS_MAX_TICKS,
    );
    for tick in scale.ticks(tick_count) {
        let x = margin.left + scale.scale(tick)?;
        scene.lines.push(LinePrimitive::new(
            x,
            baseline_y,
            x,
            baseline_y + TICK_MARK_LENGTH_PX,
            style.stroke_width,
            style.color,
        ));
        scene.texts.push(TextPrimitive::new(
            format_tick(tick),
            x,
            baseline_y + TICK_MARK_LENGTH_PX + TICK_LABEL_GAP_PX,
            style.font_size_px,
            style.color,
            TextHAlign::Center,
        ));
    }

    Ok(scene)
}

/// Builds the left Y axis: base line, tick marks, and labels.
pub fn build_y_axis(
    scale: LinearScale,
    plot_area: PlotArea,
    margin: Margin,
    style: AxisStyle,
) -> PlotResult<AxisScene> {
    let baseline_x = margin.left;
    let mut scene = AxisScene::default();
    scene.lines.push(LinePrimitive::new(
        baseline_x,
        margin.top,
        baseline_x,
        margin.top + plot_area.height,
        style.stroke_width,
        style.color,
    ));

    let tick_count = axis_tick_target_count(
        plot_area.height,
        Y_AXIS_TARGET_SPACING_PX,
        AXIS_MIN_TICKS,
        AXIS_MAX_TICKS,
    );
    for tick in scale.ticks(tick_count) {
        let y = margin.top + scale.scale(tick)?;
        scene.lines.push(LinePrimitive::new(
            baseline_x - TICK_MARK_LENGTH_PX,
            y,
            baseline_x,
            y,
            style.stroke_width,
            style.color,
        ));
        scene.texts.push(TextPrimitive::new(
            format_tick(tick),
            baseline_x - TICK_MARK_LENGTH_PX - TICK_LABEL_GAP_PX,
            y - style.font_size_px / 2.0,
            style.font_size_px,
            style.color,
            TextHAlign::Right,
        ));
    }

    Ok(scene)
}

/// Formats a tick value without trailing fractional zeros.
#[must_use]
pub(crate) fn format_tick(value: f64) -> String {
    let formatted = format!("{value:.4}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{AXIS_MAX_TICKS, AXIS_MIN_TICKS, axis_tick_target_count, format_tick};

    #[test]
    fn tick_count_scales_with_the_pixel_span() {
        let narrow = axis_tick_target_count(100.0, 72.0, AXIS_MIN_TICKS, AXIS_MAX_TICKS);
        let wide = axis_tick_target_count(900.0, 72.0, AXIS_MIN_TICKS, AXIS_MAX_TICKS);
        assert!(narrow < wide);
        assert!(narrow >= AXIS_MIN_TICKS);
        assert!(wide <= AXIS_MAX_TICKS);
    }

    #[test]
    fn degenerate_spans_fall_back_to_the_minimum() {
        assert_eq!(
            axis_tick_target_count(0.0, 72.0, AXIS_MIN_TICKS, AXIS_MAX_TICKS),
            AXIS_MIN_TICKS
        );
        assert_eq!(
            axis_tick_target_count(f64::NAN, 72.0, AXIS_MIN_TICKS, AXIS_MAX_TICKS),
            AXIS_MIN_TICKS
        );
    }

    #[test]
    fn tick_labels_drop_trailing_zeros() {
        assert_eq!(format_tick(5.0), "5");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.125), "0.125");
        assert_eq!(format_tick(-3.1), "-3.1");
        assert_eq!(format_tick(0.0), "0");
    }
}
