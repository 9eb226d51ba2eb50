use chrono::NaiveDate;

use crate::error::{RosterError, RosterResult};
use crate::model::{Department, Id, Placement, PlacementStatus};
use crate::store::RosterStore;
use crate::validation::{self, trim_optional};

pub fn add_placement(
    store: &mut RosterStore,
    name: &str,
    email: &str,
    department: Department,
    mentor: &str,
    start_date: NaiveDate,
    status: PlacementStatus,
    score: i64,
) -> RosterResult<Placement> {
    let valid_name = validation::non_blank(name, "name")?;

    let mut placement = Placement::create(store.next_placement_id(), valid_name, start_date);
    placement.email = trim_optional(Some(email)).unwrap_or_default();
    placement.department = department;
    placement.mentor = trim_optional(Some(mentor)).unwrap_or_default();
    placement.status = status;
    placement.set_score(score);

    store.insert_placement(placement.clone());
    Ok(placement)
}

/// Edits a placement dialog-style: present fields replace, absent ones keep
/// their value. Returns the updated record.
pub fn update_placement(
    store: &mut RosterStore,
    id: &Id<Placement>,
    name: Option<&str>,
    email: Option<&str>,
    department: Option<Department>,
    mentor: Option<&str>,
    start_date: Option<NaiveDate>,
    status: Option<PlacementStatus>,
    score: Option<i64>,
) -> RosterResult<Placement> {
    let placement = store
        .placement(id)
        .cloned()
        .ok_or_else(|| RosterError::NotFound {
            entity_type: "Placement".into(),
            id: id.to_string(),
        })?;

    let mut updated = placement;

    if let Some(n) = name {
        updated.name = validation::non_blank(n, "name")?;
    }
    if let Some(e) = email {
        updated.email = e.trim().to_string();
    }
    if let Some(d) = department {
        updated.department = d;
    }
    if let Some(m) = mentor {
        updated.mentor = m.trim().to_string();
    }
    if let Some(date) = start_date {
        updated.start_date = date;
    }
    if let Some(s) = status {
        updated.status = s;
    }
    if let Some(s) = score {
        updated.set_score(s);
    }

    store.replace_placement(updated.clone());
    Ok(updated)
}
