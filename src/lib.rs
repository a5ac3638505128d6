pub mod angles;
pub mod clock;
pub mod error;
pub mod report;
pub mod status;
pub mod types;

pub use angles::{
    angle_from_horizontal, deg_to_rad, effectiveness, lerp, new_rotation, old_rotation,
    NEW_SUNRISE_ROTATION, NEW_SUNSET_ROTATION, OLD_ROTATION_OFFSET, SUN_ARC_DEGREES,
};

pub use clock::{
    clock_time, hours_and_minutes, hours_since_midnight, time_label, DAYLIGHT_HOURS,
    DAY_START_HOUR,
};

pub use error::ReportError;

pub use report::{
    comparison_row, comparison_table, format_header, format_row, render_report, write_report,
    REPORT_TITLE, REPORT_WIDTH, SUN_POSITIONS,
};

pub use status::{status_for, DIM_THRESHOLD, EXCELLENT_THRESHOLD, GOOD_THRESHOLD};

pub use types::{ComparisonRow, LightingStatus, RotationSystem};
