use std::time::Duration;

use scatter_rs::render::{
    CirclePrimitive, Color, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

fn gray() -> Color {
    Color::rgb(0.5, 0.5, 0.5)
}

#[test]
fn valid_frame_passes_validation_and_renders() {
    let frame = RenderFrame::new(640.0, 480.0)
        .with_transition(true)
        .with_circle(CirclePrimitive::new(10.0, 10.0, 5.0, gray()))
        .with_line(LinePrimitive::new(0.0, 0.0, 640.0, 0.0, 1.0, gray()))
        .with_rect(RectPrimitive::new(5.0, 5.0, 20.0, 10.0, gray()))
        .with_text(TextPrimitive::new(
            "42",
            100.0,
            20.0,
            10.0,
            gray(),
            TextHAlign::Center,
        ));

    frame.validate().expect("valid frame");
    assert!(!frame.is_empty());

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.render_calls, 1);
    assert_eq!(renderer.last_circle_count, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_text_count, 1);
}

#[test]
fn degenerate_container_fails_validation() {
    assert!(RenderFrame::new(0.0, 480.0).validate().is_err());
    assert!(RenderFrame::new(640.0, f64::NAN).validate().is_err());
}

#[test]
fn non_positive_circle_radius_fails_validation() {
    let frame =
        RenderFrame::new(640.0, 480.0).with_circle(CirclePrimitive::new(1.0, 1.0, 0.0, gray()));
    assert!(frame.validate().is_err());
}

#[test]
fn out_of_range_color_channel_fails_validation() {
    let frame = RenderFrame::new(640.0, 480.0).with_line(LinePrimitive::new(
        0.0,
        0.0,
        1.0,
        1.0,
        1.0,
        Color::rgb(1.5, 0.0, 0.0),
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn empty_text_fails_validation() {
    let frame = RenderFrame::new(640.0, 480.0).with_text(TextPrimitive::new(
        "",
        10.0,
        10.0,
        10.0,
        gray(),
        TextHAlign::Left,
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn appear_delay_is_carried_on_the_primitive() {
    let circle = CirclePrimitive::new(1.0, 2.0, 5.0, gray())
        .with_appear_delay(Duration::from_millis(250));
    assert_eq!(circle.appear_delay, Some(Duration::from_millis(250)));
    circle.validate().expect("valid circle");
}

#[test]
fn darker_scales_channels_but_not_alpha() {
    let color = Color::rgba(1.0, 0.5, 0.2, 0.8);
    let darker = color.darker();
    assert!(darker.red < color.red);
    assert!(darker.green < color.green);
    assert!(darker.blue < color.blue);
    assert_eq!(darker.alpha, color.alpha);
    darker.validate().expect("still a valid color");
}
