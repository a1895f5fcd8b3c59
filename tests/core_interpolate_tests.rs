use chart_scale::core::{
    Interpolate, InterpolateColor, InterpolateFn, InterpolateNumber, Rgb, interpolate_color,
    interpolate_number,
};

#[test]
fn number_interpolation_hits_endpoints() {
    assert_eq!(interpolate_number(0.0, 3.0, 9.0), 3.0);
    assert_eq!(interpolate_number(1.0, 3.0, 9.0), 9.0);
    assert_eq!(interpolate_number(0.5, 3.0, 9.0), 6.0);
}

#[test]
fn number_interpolation_extrapolates() {
    assert_eq!(interpolate_number(2.0, 0.0, 10.0), 20.0);
    assert_eq!(interpolate_number(-1.0, 0.0, 10.0), -10.0);
}

#[test]
fn color_interpolation_is_per_channel() {
    let start = Rgb::from_u8(0, 128, 255);
    let stop = Rgb::from_u8(255, 128, 0);
    let mid = interpolate_color(0.5, start, stop);

    assert_eq!(mid, Rgb::new(127.5, 128.0, 127.5));
    assert_eq!(interpolate_color(0.0, start, stop), start);
    assert_eq!(interpolate_color(1.0, start, stop), stop);
}

#[test]
fn color_interpolation_does_not_clamp() {
    let start = Rgb::new(0.0, 0.0, 0.0);
    let stop = Rgb::new(200.0, 100.0, 300.0);
    let extrapolated = interpolate_color(1.5, start, stop);

    assert_eq!(extrapolated, Rgb::new(300.0, 150.0, 450.0));
    assert_eq!(extrapolated.to_string(), "rgb(300, 150, 450)");
}

#[test]
fn interpolator_types_match_free_functions() {
    assert_eq!(
        InterpolateNumber.interpolate(0.25, -4.0, 4.0),
        interpolate_number(0.25, -4.0, 4.0)
    );

    let start = Rgb::from_u8(10, 20, 30);
    let stop = Rgb::from_u8(30, 20, 10);
    assert_eq!(
        InterpolateColor.interpolate(0.75, start, stop),
        interpolate_color(0.75, start, stop)
    );
}

#[test]
fn function_interpolator_wraps_closures() {
    let stepped = InterpolateFn(|t: f64, start: i32, stop: i32| if t < 0.5 { start } else { stop });
    assert_eq!(stepped.interpolate(0.2, 1, 9), 1);
    assert_eq!(stepped.interpolate(0.8, 1, 9), 9);
}
