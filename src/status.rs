use crate::types::LightingStatus;

pub const DIM_THRESHOLD: f64 = 0.5;
pub const GOOD_THRESHOLD: f64 = 0.7;
pub const EXCELLENT_THRESHOLD: f64 = 0.85;

pub fn status_for(effectiveness: f64) -> LightingStatus {
    if effectiveness < DIM_THRESHOLD {
        LightingStatus::TooDark
    } else if effectiveness < GOOD_THRESHOLD {
        LightingStatus::Dim
    } else if effectiveness < EXCELLENT_THRESHOLD {
        LightingStatus::Good
    } else {
        LightingStatus::Excellent
    }
}
