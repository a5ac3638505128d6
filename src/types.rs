use chrono::NaiveTime;

use crate::angles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationSystem {
    Old,
    New,
}

impl RotationSystem {
    pub fn rotation(self, sun_deg: f64) -> f64 {
        match self {
            RotationSystem::Old => angles::old_rotation(sun_deg),
            RotationSystem::New => angles::new_rotation(sun_deg),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RotationSystem::Old => "OLD",
            RotationSystem::New => "NEW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LightingStatus {
    TooDark,
    Dim,
    Good,
    Excellent,
}

impl LightingStatus {
    pub const ALL: [LightingStatus; 4] = [
        LightingStatus::TooDark,
        LightingStatus::Dim,
        LightingStatus::Good,
        LightingStatus::Excellent,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            LightingStatus::TooDark => "🔴",
            LightingStatus::Dim => "🟡",
            LightingStatus::Good => "🟢",
            LightingStatus::Excellent => "✅",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LightingStatus::TooDark => "Too Dark",
            LightingStatus::Dim => "Dim",
            LightingStatus::Good => "Good",
            LightingStatus::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub sun_deg: f64,
    pub clock_time: NaiveTime,
    pub old_rotation: f64,
    pub old_effectiveness: f64,
    pub new_rotation: f64,
    pub new_effectiveness: f64,
    pub improvement: f64,
    pub status: LightingStatus,
}
