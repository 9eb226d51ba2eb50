use crate::model::{ActivityStatus, Intern, Performance, Placement, PlacementStatus, SheetStatus, YesNo};

/// Aggregate counters shown above the tracker table. Always computed over
/// the full roster, never the filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerSummary {
    pub total: usize,
    pub green: usize,
    pub red: usize,
    pub black: usize,
    /// Everything that is not Active counts as inactive here, Leave included.
    pub active: usize,
    pub inactive: usize,
    pub excel_yes: usize,
    pub excel_no: usize,
    pub good: usize,
    pub weak: usize,
    pub repurposed_yes: usize,
    pub repurposed_no: usize,
    /// Interns with both flags set and the speakers target reached.
    pub tasks_completed: usize,
}

pub fn tracker_summary(records: &[Intern]) -> TrackerSummary {
    let mut summary = TrackerSummary {
        total: records.len(),
        ..TrackerSummary::default()
    };

    for intern in records {
        match intern.sheet_status {
            SheetStatus::Green => summary.green += 1,
            SheetStatus::Red => summary.red += 1,
            SheetStatus::Black => summary.black += 1,
        }
        if intern.activity == ActivityStatus::Active {
            summary.active += 1;
        } else {
            summary.inactive += 1;
        }
        match intern.excel_submitted {
            YesNo::Yes => summary.excel_yes += 1,
            YesNo::No => summary.excel_no += 1,
        }
        match intern.performance {
            Performance::Good => summary.good += 1,
            Performance::Weak => summary.weak += 1,
        }
        match intern.data_repurposed {
            YesNo::Yes => summary.repurposed_yes += 1,
            YesNo::No => summary.repurposed_no += 1,
        }
        if intern.ai_chat_added
            && intern.data_mining_gc
            && intern.speakers_count >= intern.speakers_target
        {
            summary.tasks_completed += 1;
        }
    }

    summary
}

/// Aggregate counters for the placement directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementSummary {
    pub total: usize,
    pub active: usize,
    pub offer: usize,
    pub completed: usize,
    /// Integer-rounded mean score, 0 for an empty roster.
    pub avg_score: i64,
}

pub fn placement_summary(records: &[Placement]) -> PlacementSummary {
    let mut summary = PlacementSummary {
        total: records.len(),
        ..PlacementSummary::default()
    };

    let mut score_total: i64 = 0;
    for placement in records {
        match placement.status {
            PlacementStatus::Active => summary.active += 1,
            PlacementStatus::Offer => summary.offer += 1,
            PlacementStatus::Completed => summary.completed += 1,
            PlacementStatus::Offboarded => {}
        }
        score_total += placement.score;
    }

    summary.avg_score = if records.is_empty() {
        0
    } else {
        (score_total as f64 / records.len() as f64).round() as i64
    };

    summary
}
