use crate::error::{RosterError, RosterResult};
use crate::model::{
    ActivityStatus, Id, Intern, Performance, Segregation, SheetStatus, YesNo,
};
use crate::seed::InternFactory;
use crate::store::RosterStore;
use crate::validation::{self, trim_optional};

/// A single-field edit to a tracked intern. Speakers-count and segregation
/// changes carry normalization side effects (see `Intern::set_speakers_count`
/// and `Intern::set_segregation`); every other variant is a plain
/// replacement.
#[derive(Debug, Clone)]
pub enum InternChange {
    Name(String),
    Email(String),
    Activity(ActivityStatus),
    ExcelSubmitted(YesNo),
    AiChatAdded(bool),
    DataMiningGc(bool),
    SpeakersCount(i64),
    Performance(Performance),
    Segregation(Option<Segregation>),
    SheetStatus(SheetStatus),
    DataRepurposed(YesNo),
}

pub fn add_intern(store: &mut RosterStore, name: &str, email: &str) -> RosterResult<Intern> {
    let valid_name = validation::non_blank(name, "name")?;

    let email = trim_optional(Some(email)).unwrap_or_default();
    let intern = Intern::create(store.next_intern_id(), valid_name, email);

    store.insert_intern(intern.clone());
    Ok(intern)
}

/// Appends `count` factory-built records. The factory decides field values;
/// ids come from the store so batch rows sort like any others.
pub fn add_batch(
    store: &mut RosterStore,
    count: i64,
    factory: &mut dyn InternFactory,
) -> RosterResult<Vec<Intern>> {
    let count = validation::positive(count, "count")?;

    let mut added = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let intern = factory.build(store.next_intern_id());
        store.insert_intern(intern.clone());
        added.push(intern);
    }
    Ok(added)
}

/// Applies one field change to the intern with the given id and returns the
/// updated record. The whole record is replaced in the store.
pub fn update_intern(
    store: &mut RosterStore,
    id: &Id<Intern>,
    change: InternChange,
) -> RosterResult<Intern> {
    let mut intern = store
        .intern(id)
        .cloned()
        .ok_or_else(|| RosterError::NotFound {
            entity_type: "Intern".into(),
            id: id.to_string(),
        })?;

    match change {
        InternChange::Name(name) => intern.name = name.trim().to_string(),
        InternChange::Email(email) => intern.email = email.trim().to_string(),
        InternChange::Activity(activity) => intern.activity = activity,
        InternChange::ExcelSubmitted(submitted) => intern.excel_submitted = submitted,
        InternChange::AiChatAdded(flag) => intern.ai_chat_added = flag,
        InternChange::DataMiningGc(flag) => intern.data_mining_gc = flag,
        InternChange::SpeakersCount(count) => intern.set_speakers_count(count),
        InternChange::Performance(performance) => intern.performance = performance,
        InternChange::Segregation(segregation) => intern.set_segregation(segregation),
        InternChange::SheetStatus(status) => intern.sheet_status = status,
        InternChange::DataRepurposed(repurposed) => intern.data_repurposed = repurposed,
    }

    store.replace_intern(intern.clone());
    Ok(intern)
}
