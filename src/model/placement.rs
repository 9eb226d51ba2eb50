use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Ceiling for placement review scores.
pub const SCORE_MAX: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Data,
    Design,
    Marketing,
    Operations,
}

impl Department {
    pub const ALL: &'static [Department] = &[
        Department::Engineering,
        Department::Data,
        Department::Design,
        Department::Marketing,
        Department::Operations,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Data => "Data",
            Department::Design => "Design",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "engineering" => Some(Department::Engineering),
            "data" => Some(Department::Data),
            "design" => Some(Department::Design),
            "marketing" => Some(Department::Marketing),
            "operations" => Some(Department::Operations),
            _ => None,
        }
    }
}

/// Where the intern stands in the program pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementStatus {
    Active,
    Offer,
    Completed,
    Offboarded,
}

impl PlacementStatus {
    pub const ALL: &'static [PlacementStatus] = &[
        PlacementStatus::Active,
        PlacementStatus::Offer,
        PlacementStatus::Completed,
        PlacementStatus::Offboarded,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PlacementStatus::Active => "Active",
            PlacementStatus::Offer => "Offer",
            PlacementStatus::Completed => "Completed",
            PlacementStatus::Offboarded => "Offboarded",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(PlacementStatus::Active),
            "offer" => Some(PlacementStatus::Offer),
            "completed" => Some(PlacementStatus::Completed),
            "offboarded" => Some(PlacementStatus::Offboarded),
            _ => None,
        }
    }
}

/// A placement record in the program directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub id: Id<Placement>,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub mentor: String,
    pub start_date: NaiveDate,
    pub status: PlacementStatus,
    pub score: i64,
}

impl Placement {
    pub fn create(id: Id<Placement>, name: String, start_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            email: String::new(),
            department: Department::Engineering,
            mentor: String::new(),
            start_date,
            status: PlacementStatus::Active,
            score: 0,
        }
    }

    /// Clamps and stores a review score.
    pub fn set_score(&mut self, score: i64) {
        self.score = score.clamp(0, SCORE_MAX);
    }
}
