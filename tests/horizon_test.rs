use approx::{assert_abs_diff_eq, assert_relative_eq};
use attitude_indicator::{
    AffineTransform2D, Attitude, DEFAULT_DEGREE_DISTANCE, HorizonLayout, IndicatorError, Size,
    build_horizon_transform,
};
use nalgebra::{Matrix2x3, Matrix3, Point2, Vector2};
use rstest::{fixture, rstest};

const EPS: f64 = 1e-9;

#[fixture]
fn layout() -> HorizonLayout {
    HorizonLayout::default()
}

#[fixture]
fn view() -> Size {
    Size::new(320.0, 480.0)
}

#[test]
fn test_transform_at_rest_is_pure_translation() {
    let center = Point2::new(-640.0, -560.0);
    let transform = build_horizon_transform(&Attitude::LEVEL, 5.0, center);
    assert!(transform.is_translation(EPS));
    assert_relative_eq!(transform.translation, Vector2::new(-640.0, -560.0), epsilon = EPS);
}

#[test]
fn test_pitch_shifts_world_down_when_level() {
    let center = Point2::new(10.0, 20.0);
    let transform = build_horizon_transform(&Attitude::new(10.0, 0.0), 5.0, center);
    assert!(transform.is_translation(EPS));
    assert_relative_eq!(transform.translation, Vector2::new(10.0, 70.0), epsilon = EPS);
}

#[test]
fn test_pitch_shift_follows_roll() {
    let center = Point2::new(10.0, 20.0);
    let transform = build_horizon_transform(&Attitude::new(10.0, 90.0), 5.0, center);

    // Counter-rotating (0, 50) by 90° gives (50, 0).
    assert_relative_eq!(transform.translation, Vector2::new(60.0, 20.0), epsilon = EPS);
}

#[test]
fn test_composition_order_is_significant() {
    let attitude = Attitude::new(10.0, 90.0);
    let center = Point2::new(-640.0, -560.0);
    let degree_distance = 5.0;

    let built = build_horizon_transform(&attitude, degree_distance, center);
    let swapped = AffineTransform2D::from_translation(center.x, center.y)
        .translated(0.0, attitude.pitch * degree_distance)
        .rotated(-attitude.roll_radians());

    assert_relative_eq!(built.linear, swapped.linear, epsilon = EPS);
    assert!((built.translation - swapped.translation).norm() > 1.0);
}

#[rstest]
#[case::right_bank(30.0)]
#[case::left_bank(-45.0)]
fn test_roll_counter_rotates_world(#[case] roll: f64) {
    let transform = build_horizon_transform(&Attitude::new(0.0, roll), 5.0, Point2::origin());
    let horizon = transform.linear * Vector2::x();
    assert_relative_eq!(
        horizon,
        Vector2::new(roll.to_radians().cos(), -roll.to_radians().sin()),
        epsilon = EPS
    );
    // Right bank lifts the right end of the horizon (y down).
    assert_eq!(horizon.y < 0.0, roll > 0.0);
}

#[test]
fn test_rotation_matches_view_convention() {
    let transform = AffineTransform2D::from_rotation(90.0_f64.to_radians());
    let mapped = transform.apply_point(Point2::new(1.0, 0.0));
    assert_relative_eq!(mapped, Point2::new(0.0, 1.0), epsilon = EPS);
}

#[test]
fn test_then_applies_right_operand_first() {
    let translate = AffineTransform2D::from_translation(5.0, 0.0);
    let rotate = AffineTransform2D::from_rotation(90.0_f64.to_radians());

    let composed = translate.then(&rotate);
    let point = Point2::new(1.0, 0.0);
    assert_relative_eq!(
        composed.apply_point(point),
        translate.apply_point(rotate.apply_point(point)),
        epsilon = EPS
    );
    assert_eq!(translate * rotate, composed);
}

#[test]
fn test_matrix_forms() {
    let transform = AffineTransform2D::from_translation(3.0, 4.0).rotated(0.0);
    assert_relative_eq!(
        transform.to_matrix(),
        Matrix2x3::new(1.0, 0.0, 3.0, 0.0, 1.0, 4.0),
        epsilon = EPS
    );
    assert_relative_eq!(
        transform.to_homogeneous(),
        Matrix3::new(1.0, 0.0, 3.0, 0.0, 1.0, 4.0, 0.0, 0.0, 1.0),
        epsilon = EPS
    );
    assert_eq!(AffineTransform2D::default(), AffineTransform2D::identity());
}

#[rstest]
fn test_world_center_places_bitmap_center_on_view_center(layout: HorizonLayout, view: Size) {
    let origin = layout.world_center(view);
    assert_relative_eq!(origin, Point2::new(-640.0, -560.0), epsilon = EPS);

    let transform = layout.transform_for(&Attitude::LEVEL, view);
    let bitmap_center = Point2::new(800.0, 800.0);
    assert_relative_eq!(transform.apply_point(bitmap_center), view.center(), epsilon = EPS);
}

#[rstest]
fn test_roll_pivots_around_bitmap_origin(layout: HorizonLayout, view: Size) {
    let origin = layout.world_center(view);
    let transform = layout.transform_for(&Attitude::new(0.0, 45.0), view);
    assert_relative_eq!(transform.apply_point(Point2::origin()), origin, epsilon = EPS);
}

#[rstest]
fn test_default_layout(layout: HorizonLayout) {
    assert_eq!(layout.degree_distance, DEFAULT_DEGREE_DISTANCE);
    assert_eq!(layout.world_size, Size::new(1600.0, 1600.0));
    assert_eq!(layout.reticle_size, Size::new(220.0, 8.0));
    assert_eq!(layout.horizon_y(), 800.0);
    assert!(layout.validate().is_ok());
}

#[rstest]
fn test_pitch_ladder(layout: HorizonLayout) {
    let marks: Vec<_> = layout.pitch_ladder().collect();
    assert_eq!(marks.len(), 12);
    assert!(marks.iter().all(|mark| mark.degrees != 0));

    let top = marks.first().unwrap();
    assert_eq!(top.degrees, 60);
    assert_abs_diff_eq!(top.from.y, 500.0, epsilon = EPS);
    assert_abs_diff_eq!(top.from.x, 760.0, epsilon = EPS);
    assert_abs_diff_eq!(top.to.x, 840.0, epsilon = EPS);

    let bottom = marks.last().unwrap();
    assert_eq!(bottom.degrees, -60);
    assert_abs_diff_eq!(bottom.to.y, 1100.0, epsilon = EPS);

    let minus_ten = marks.iter().find(|mark| mark.degrees == -10).unwrap();
    assert_abs_diff_eq!(minus_ten.from.y, 850.0, epsilon = EPS);
}

#[rstest]
fn test_nose_up_moves_horizon_down(layout: HorizonLayout, view: Size) {
    let horizon_center = Point2::new(layout.world_size.width / 2.0, layout.horizon_y());
    let transform = layout.transform_for(&Attitude::new(20.0, 0.0), view);
    let placed = transform.apply_point(horizon_center);
    assert_relative_eq!(placed, view.center() + Vector2::new(0.0, 100.0), epsilon = EPS);

    // The -20° mark sits 100 px further down the bitmap.
    let mark = layout.pitch_ladder().find(|mark| mark.degrees == -20).unwrap();
    assert_abs_diff_eq!(mark.from.y - layout.horizon_y(), 100.0, epsilon = EPS);
}

#[rstest]
fn test_reticle_geometry(layout: HorizonLayout) {
    let reticle = layout.reticle();
    assert_relative_eq!(reticle.left_wing.from, Point2::new(0.0, 4.0));
    assert_relative_eq!(reticle.left_wing.to, Point2::new(65.0, 4.0));
    assert_relative_eq!(reticle.right_wing.from, Point2::new(155.0, 4.0));
    assert_relative_eq!(reticle.right_wing.to, Point2::new(220.0, 4.0));
    assert_relative_eq!(reticle.dot_origin, Point2::new(106.0, 0.0));
    assert_eq!(reticle.dot_diameter, 8.0);
    assert_eq!(reticle.stroke_width, 8.0);
}

#[rstest]
#[case::zero_degree_distance(
    "degree_distance",
    HorizonLayout { degree_distance: 0.0, ..HorizonLayout::default() }
)]
#[case::negative_world(
    "world_size.width",
    HorizonLayout { world_size: Size::new(-1.0, 1600.0), ..HorizonLayout::default() }
)]
#[case::infinite_reticle(
    "reticle_size.height",
    HorizonLayout { reticle_size: Size::new(220.0, f64::INFINITY), ..HorizonLayout::default() }
)]
fn test_invalid_layout_rejected(#[case] expected: &str, #[case] layout: HorizonLayout) {
    match layout.validate() {
        Err(IndicatorError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
        other => panic!("expected invalid parameter, got {other:?}"),
    }
}

#[test]
fn test_nan_degree_distance_rejected() {
    let layout = HorizonLayout {
        degree_distance: f64::NAN,
        ..HorizonLayout::default()
    };
    assert!(matches!(
        layout.validate(),
        Err(IndicatorError::InvalidParameter {
            name: "degree_distance",
            ..
        })
    ));
}
