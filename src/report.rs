use std::io::Write;

use log::{debug, info};

use crate::angles;
use crate::clock;
use crate::error::ReportError;
use crate::status;
use crate::types::{ComparisonRow, RotationSystem};

pub const REPORT_WIDTH: usize = 120;
pub const REPORT_TITLE: &str = "SUN LIGHTING ANGLE FIX - VISUAL COMPARISON";

pub const SUN_POSITIONS: [f64; 11] = [
    0.0, 18.0, 36.0, 54.0, 72.0, 90.0, 108.0, 126.0, 144.0, 162.0, 180.0,
];

const LEGEND: &[&str] = &[
    "LEGEND:",
    "  🔴 Too Dark (< 50% effective)  - Light too horizontal, scene very dark",
    "  🟡 Dim (50-70% effective)       - Light somewhat horizontal, scene dim",
    "  🟢 Good (70-85% effective)      - Good lighting angle",
    "  ✅ Excellent (> 85% effective) - Optimal lighting angle",
];

const KEY_FINDINGS: &[&str] = &[
    "KEY FINDINGS:",
    "  • OLD SYSTEM: Only becomes properly lit (✅) at 10:00 AM or later",
    "  • NEW SYSTEM: Properly lit (✅) from 9:00 AM onwards",
    "  • Sunrise (7:00 AM): Improved from 🔴 0% to 🟡 64.3% (+64.3%)",
    "  • Early morning (8:00 AM): Improved from 🔴 31% to 🟢 77% (+46%)",
    "  • The user's complaint 'it only becomes bright around 12:00 PM' is now fixed!",
];

const TECHNICAL_EXPLANATION: &[&str] = &[
    "TECHNICAL EXPLANATION:",
    "  The DirectionalLight3D rotation angle determines how much light reaches the ground.",
    "  At 90° rotation (old sunrise), light is perfectly horizontal = 0% reaches ground.",
    "  At 50° rotation (new sunrise), light comes from above = 64% reaches ground.",
    "  At 0° rotation (noon), light comes straight down = 100% reaches ground.",
];

const OLD_SUNRISE_DIAGRAM: &[&str] = &[
    "OLD SYSTEM (7:00 AM):",
    "  ☀️ ─────────────────────→  (90° horizontal, 0% effective)",
    "     🌳 (no shadow, very dark)",
];

const NEW_SUNRISE_DIAGRAM: &[&str] = &[
    "NEW SYSTEM (7:00 AM):",
    "  ☀️",
    "    \\",
    "     \\  (50° from vertical, 64% effective)",
    "      ↘",
    "        🌳 (proper shadow, good brightness)",
];

const NOON_DIAGRAM: &[&str] = &[
    "BOTH SYSTEMS (12:00 PM):",
    "        ☀️",
    "        |  (0° = vertical, 100% effective)",
    "        ↓",
    "        🌳 (perfect shadow, maximum brightness)",
];

pub fn comparison_row(sun_deg: f64) -> ComparisonRow {
    let old_rotation = RotationSystem::Old.rotation(sun_deg);
    let new_rotation = RotationSystem::New.rotation(sun_deg);
    let old_effectiveness = angles::effectiveness(old_rotation);
    let new_effectiveness = angles::effectiveness(new_rotation);

    ComparisonRow {
        sun_deg,
        clock_time: clock::clock_time(sun_deg),
        old_rotation,
        old_effectiveness,
        new_rotation,
        new_effectiveness,
        improvement: new_effectiveness - old_effectiveness,
        status: status::status_for(new_effectiveness),
    }
}

pub fn comparison_table() -> Vec<ComparisonRow> {
    SUN_POSITIONS.iter().map(|&s| comparison_row(s)).collect()
}

pub fn format_header() -> String {
    format!(
        "{:<8} | {:<7} | {:<14} | {:<12} | {:<14} | {:<12} | {:<12} | {}",
        "Time",
        "Sun°",
        format!("{} Rotation", RotationSystem::Old.label()),
        format!("{} Effect", RotationSystem::Old.label()),
        format!("{} Rotation", RotationSystem::New.label()),
        format!("{} Effect", RotationSystem::New.label()),
        "Improvement",
        "Status"
    )
}

pub fn format_row(row: &ComparisonRow) -> String {
    format!(
        "{:<8} | {:>5}°  | {:>10.1}°   | {:>7.1}%    | {:>10.1}°   | {:>7.1}%    | {:>+8.1}%   | {}",
        clock::time_label(row.sun_deg),
        row.sun_deg,
        row.old_rotation,
        row.old_effectiveness * 100.0,
        row.new_rotation,
        row.new_effectiveness * 100.0,
        row.improvement * 100.0,
        row.status.icon()
    )
}

fn write_block<W: Write>(out: &mut W, lines: &[&str]) -> Result<(), ReportError> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W) -> Result<(), ReportError> {
    let banner = "=".repeat(REPORT_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(out, "{}{}", " ".repeat(40), REPORT_TITLE)?;
    writeln!(out, "{banner}")?;
    writeln!(out)?;

    writeln!(out, "{}", format_header())?;
    writeln!(out, "{}", "-".repeat(REPORT_WIDTH))?;

    let rows = comparison_table();
    info!("rendering comparison for {} sun positions", rows.len());
    for row in &rows {
        debug!(
            "sun {:.0}°: old {:.1}° ({:.3}), new {:.1}° ({:.3}), {}",
            row.sun_deg,
            row.old_rotation,
            row.old_effectiveness,
            row.new_rotation,
            row.new_effectiveness,
            row.status.label()
        );
        writeln!(out, "{}", format_row(row))?;
    }

    writeln!(out, "{banner}")?;
    writeln!(out)?;

    write_block(out, LEGEND)?;
    write_block(out, KEY_FINDINGS)?;
    write_block(out, TECHNICAL_EXPLANATION)?;

    writeln!(out, "VISUAL REPRESENTATION:")?;
    writeln!(out)?;
    write_block(out, OLD_SUNRISE_DIAGRAM)?;
    write_block(out, NEW_SUNRISE_DIAGRAM)?;
    write_block(out, NOON_DIAGRAM)?;

    writeln!(out, "{banner}")?;
    out.flush()?;
    info!("report complete");
    Ok(())
}

pub fn render_report() -> Result<String, ReportError> {
    let mut buf = Vec::new();
    write_report(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
