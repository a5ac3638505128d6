use chrono::NaiveTime;

use crate::angles::SUN_ARC_DEGREES;

pub const DAY_START_HOUR: f64 = 7.0;
pub const DAYLIGHT_HOURS: f64 = 10.0;

pub fn hours_since_midnight(sun_deg: f64) -> f64 {
    DAY_START_HOUR + (sun_deg / SUN_ARC_DEGREES) * DAYLIGHT_HOURS
}

// Truncated, never rounded: 7.999 h is (7, 59).
pub fn hours_and_minutes(sun_deg: f64) -> (i64, i64) {
    let total_hours = hours_since_midnight(sun_deg);
    let hours = total_hours.floor();
    let minutes = ((total_hours - hours) * 60.0).floor();
    (hours as i64, (minutes as i64).min(59))
}

// NaiveTime only spans one day, so extrapolated hours wrap around the clock face.
pub fn clock_time(sun_deg: f64) -> NaiveTime {
    let (hours, minutes) = hours_and_minutes(sun_deg);
    NaiveTime::from_hms_opt(hours.rem_euclid(24) as u32, minutes as u32, 0).unwrap_or_default()
}

pub fn time_label(sun_deg: f64) -> String {
    let (hours, minutes) = hours_and_minutes(sun_deg);
    format!("{:02}:{:02}", hours, minutes)
}
