use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Default recruitment goal for every intern.
pub const SPEAKERS_TARGET: i64 = 100;

/// Ceiling for manually entered speaker counts.
pub const SPEAKERS_MAX: i64 = 1000;

/// Whether the intern is currently working the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Active,
    Inactive,
    Leave,
}

impl ActivityStatus {
    pub const ALL: &'static [ActivityStatus] = &[
        ActivityStatus::Active,
        ActivityStatus::Inactive,
        ActivityStatus::Leave,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityStatus::Active => "Active",
            ActivityStatus::Inactive => "Inactive",
            ActivityStatus::Leave => "Leave",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(ActivityStatus::Active),
            "inactive" => Some(ActivityStatus::Inactive),
            "leave" => Some(ActivityStatus::Leave),
            _ => None,
        }
    }
}

/// A yes/no field that renders as "Yes"/"No" in tables and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn display_name(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Some(YesNo::Yes),
            "no" | "n" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn from_bool(flag: bool) -> Self {
        if flag {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performance {
    Good,
    Weak,
}

impl Performance {
    pub const ALL: &'static [Performance] = &[Performance::Good, Performance::Weak];

    pub fn display_name(&self) -> &'static str {
        match self {
            Performance::Good => "Good",
            Performance::Weak => "Weak",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "good" => Some(Performance::Good),
            "weak" => Some(Performance::Weak),
            _ => None,
        }
    }
}

/// Exit or disciplinary classification. Absent for interns in good standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segregation {
    Resign,
    Warning,
    Terminated,
    Relocated,
}

impl Segregation {
    pub const ALL: &'static [Segregation] = &[
        Segregation::Resign,
        Segregation::Warning,
        Segregation::Terminated,
        Segregation::Relocated,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Segregation::Resign => "Resign",
            Segregation::Warning => "Warning",
            Segregation::Terminated => "Terminated",
            Segregation::Relocated => "Relocated",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "resign" => Some(Segregation::Resign),
            "warning" => Some(Segregation::Warning),
            "terminated" => Some(Segregation::Terminated),
            "relocated" => Some(Segregation::Relocated),
            _ => None,
        }
    }
}

/// Coarse standing derived from the other fields: Green is good standing,
/// Red is at risk, Black is terminated/exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetStatus {
    Green,
    Red,
    Black,
}

impl SheetStatus {
    pub const ALL: &'static [SheetStatus] =
        &[SheetStatus::Green, SheetStatus::Red, SheetStatus::Black];

    pub fn display_name(&self) -> &'static str {
        match self {
            SheetStatus::Green => "Green",
            SheetStatus::Red => "Red",
            SheetStatus::Black => "Black",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "green" => Some(SheetStatus::Green),
            "red" => Some(SheetStatus::Red),
            "black" => Some(SheetStatus::Black),
            _ => None,
        }
    }
}

/// A tracked intern on the recruitment sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intern {
    pub id: Id<Intern>,
    pub name: String,
    pub email: String,
    pub activity: ActivityStatus,
    pub excel_submitted: YesNo,
    pub ai_chat_added: bool,
    pub data_mining_gc: bool,
    pub speakers_count: i64,
    pub speakers_target: i64,
    pub performance: Performance,
    pub segregation: Option<Segregation>,
    pub sheet_status: SheetStatus,
    pub data_repurposed: YesNo,
}

impl Intern {
    pub fn create(id: Id<Intern>, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            activity: ActivityStatus::Active,
            excel_submitted: YesNo::No,
            ai_chat_added: false,
            data_mining_gc: false,
            speakers_count: 0,
            speakers_target: SPEAKERS_TARGET,
            performance: Performance::Good,
            segregation: None,
            sheet_status: SheetStatus::Red,
            data_repurposed: YesNo::No,
        }
    }

    /// True when the exit classification forbids a Green sheet.
    pub fn segregation_disqualifies(&self) -> bool {
        matches!(
            self.segregation,
            Some(Segregation::Terminated) | Some(Segregation::Relocated)
        )
    }

    /// Clamps and stores a new speakers count. Reaching the target promotes
    /// the sheet to Green unless the exit classification disqualifies it.
    /// One-way: dropping back below the target never revokes Green.
    pub fn set_speakers_count(&mut self, count: i64) {
        self.speakers_count = count.clamp(0, SPEAKERS_MAX);
        if self.speakers_count >= self.speakers_target && !self.segregation_disqualifies() {
            self.sheet_status = SheetStatus::Green;
        }
    }

    /// Replaces the exit classification. Terminated and Relocated force the
    /// sheet to Black; softening or clearing the classification leaves the
    /// sheet untouched.
    pub fn set_segregation(&mut self, segregation: Option<Segregation>) {
        self.segregation = segregation;
        if self.segregation_disqualifies() {
            self.sheet_status = SheetStatus::Black;
        }
    }

    /// Progress toward the speakers target in whole percent, capped at 100.
    pub fn speakers_progress(&self) -> i64 {
        if self.speakers_target <= 0 {
            return 0;
        }
        (self.speakers_count * 100 / self.speakers_target).min(100)
    }
}
