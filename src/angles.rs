use log::trace;

pub const SUN_ARC_DEGREES: f64 = 180.0;
pub const OLD_ROTATION_OFFSET: f64 = 90.0;
pub const NEW_SUNRISE_ROTATION: f64 = 50.0;
pub const NEW_SUNSET_ROTATION: f64 = -50.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

pub fn old_rotation(sun_deg: f64) -> f64 {
    OLD_ROTATION_OFFSET - sun_deg
}

pub fn new_rotation(sun_deg: f64) -> f64 {
    lerp(
        NEW_SUNRISE_ROTATION,
        NEW_SUNSET_ROTATION,
        sun_deg / SUN_ARC_DEGREES,
    )
}

pub fn angle_from_horizontal(rotation_deg: f64) -> f64 {
    let angle = 90.0 - rotation_deg.abs();
    if angle < 0.0 {
        trace!("rotation {rotation_deg:.1}° is past horizontal, clamping to 0°");
        0.0
    } else {
        angle
    }
}

/// Fraction of light reaching a flat ground plane, in [0, 1].
///
/// A rotation of 0° points straight down and is fully effective; ±90° and
/// beyond is horizontal and contributes nothing.
pub fn effectiveness(rotation_deg: f64) -> f64 {
    deg_to_rad(angle_from_horizontal(rotation_deg)).sin()
}
