use core::f64::consts::FRAC_PI_6;

use attitude_indicator::{
    AttitudeIndicator, FrameSlot, IndicatorParams, QuaternionSource, RotationMatrix, Size,
};
use nalgebra::{UnitQuaternion, Vector3};

fn main() {
    let indicator = AttitudeIndicator::new(IndicatorParams::default()).unwrap();
    let view = Size::new(320.0, 480.0);
    let slot = FrameSlot::default();

    // Phone held upright, then tilted so its top leans 30° to the right.
    let upright = RotationMatrix::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 0.0, -1.0],
        [0.0, 1.0, 0.0],
    ]);
    let lean = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_6);
    let leaning =
        RotationMatrix::from_matrix(upright.as_matrix() * lean.to_rotation_matrix().matrix());

    for matrix in [upright, leaning] {
        let frame = indicator.update(&matrix, view);
        slot.publish(frame);
        let latest = slot.latest();
        println!(
            "pitch {:6.2}  roll {:6.2}  transform {:?}",
            latest.attitude.pitch,
            latest.attitude.roll,
            latest.world_transform.to_matrix()
        );
    }

    let mut quaternions =
        QuaternionSource(|| Some(UnitQuaternion::from_euler_angles(0.2, 0.0, 0.0)));
    if let Some(frame) = indicator.sample(&mut quaternions, view) {
        println!("from quaternion: {:?}", frame.attitude);
    }
}
